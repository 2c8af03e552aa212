use crate::app::HexEditApp;
use crate::ui_popup::PopupType;
use eframe::egui;
use hexgridlib::InputMode;

impl HexEditApp {
    /// Displays the top menu bar with File, Edit, View, and About buttons
    pub(crate) fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menubar").show(ctx, |ui| {
            ui.add_space(3.0);

            egui::MenuBar::new().ui(ui, |ui| {
                ui.horizontal(|ui| {
                    // FILE MENU
                    ui.menu_button("File", |ui| {
                        // OPEN BUTTON
                        if ui.button("Open file...").clicked()
                            && let Some(path) =
                                rfd::FileDialog::new().set_title("Open File").pick_file()
                        {
                            self.open_file(&path);
                        }

                        // SAVE BUTTON
                        if ui.button("Save file...").clicked()
                            && !self.model.is_empty()
                            && let Some(path) = rfd::FileDialog::new()
                                .set_title("Save As")
                                .set_file_name(
                                    self.file_name.clone().unwrap_or_else(|| "Untitled".into()),
                                )
                                .save_file()
                        {
                            self.save_file(&path);
                        }

                        // CLOSE BUTTON
                        if ui.button("Close file").clicked() && self.file_name.is_some() {
                            self.close_file();
                        }
                    });

                    // EDIT MENU
                    ui.menu_button("Edit", |ui| {
                        // COPY BUTTON
                        if ui.button("Copy selection as hex").clicked()
                            && !self.model.selection().is_empty()
                        {
                            ctx.copy_text(self.model.copy_selection_as_hex_text());
                        }

                        // INPUT MODE BUTTON (Tab does the same)
                        let label = match self.model.mode() {
                            InputMode::Hex => "Switch to ASCII input",
                            InputMode::Ascii => "Switch to hex input",
                        };
                        if ui.button(label).clicked() {
                            self.model.toggle_mode();
                        }
                    });

                    // VIEW MENU
                    ui.menu_button("View", |ui| {
                        ui.label("Select Bytes per Row:");

                        ui.add_space(3.0);

                        // RadioButtons to select between 16 and 32 bytes per row
                        let mut bytes_per_row = self.model.bytes_per_row();
                        ui.radio_value(&mut bytes_per_row, 16, "16 bytes");
                        ui.add_space(1.0);
                        ui.radio_value(&mut bytes_per_row, 32, "32 bytes");
                        self.model.set_bytes_per_row(bytes_per_row);
                    });

                    // ABOUT BUTTON
                    let about_button = ui.button("About");

                    if about_button.clicked() {
                        self.popup.active = true;
                        self.popup.ptype = Some(PopupType::About);
                    }
                });
            });

            ui.add_space(2.0);
        });
    }
}
