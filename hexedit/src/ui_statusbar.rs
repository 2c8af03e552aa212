use crate::app::HexEditApp;
use eframe::egui;
use hexgridlib::InputMode;

impl HexEditApp {
    /// Bottom bar with file name, buffer size, caret offset, and input mode.
    pub(crate) fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("statusbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let name = self.file_name.as_deref().unwrap_or("No file");
                ui.monospace(name);

                ui.separator();
                ui.monospace(format!("{} bytes", self.model.len()));

                ui.separator();
                ui.monospace(format!("Offset: {:08X}", self.model.caret()));

                if let Some((start, end)) = self.model.selection().normalized() {
                    ui.separator();
                    ui.monospace(format!("Selected: {} bytes", end - start + 1));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = match self.model.mode() {
                        InputMode::Hex => "HEX",
                        InputMode::Ascii => "ASCII",
                    };
                    ui.monospace(mode);
                    ui.separator();
                });
            });
        });
    }
}
