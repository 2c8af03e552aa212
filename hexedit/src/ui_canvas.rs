use crate::app::{HexEditApp, colors};
use crate::events::collect_ui_events;
use eframe::egui;
use hexgridlib::{EditPhase, GridLayout, InputMode, Rect, Region, hex_digit};

/// Convert a layout rectangle (grid-local) to screen coordinates.
fn to_screen(rect: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + rect.x, origin.y + rect.y),
        egui::vec2(rect.width, rect.height),
    )
}

impl HexEditApp {
    /// Displays the central panel of the UI for rendering the hex grid.
    /// Painting and hit testing both go through the same `GridLayout`, so
    /// what is drawn is exactly what is clickable.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub(crate) fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Font metrics drive the whole grid geometry
            let font_id = egui::TextStyle::Monospace.resolve(ui.style());
            let char_width = ui.fonts_mut(|f| f.glyph_width(&font_id, 'W'));
            let row_height = ui.text_style_height(&egui::TextStyle::Monospace) + 2.0;

            // Allocate the full available space as the grid canvas
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            // Collect input events once per frame and store in the app state
            self.events = collect_ui_events(ui);

            // Tell the model the current window size for caret auto-scroll
            let rows_per_page = (rect.height() / row_height).floor() as usize;
            self.model.set_rows_per_page(rows_per_page.max(1));

            self.handle_keys();
            self.handle_wheel();
            self.handle_pointer(rect, char_width, row_height);

            self.paint_grid(ui, rect, &font_id, char_width, row_height);

            // Secondary click: context menu acting on the selection
            response.context_menu(|ui| {
                let has_selection = !self.model.selection().is_empty();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Copy as hex"))
                    .clicked()
                {
                    ui.ctx().copy_text(self.model.copy_selection_as_hex_text());
                    ui.close();
                }
            });
        });
    }

    /// Route aggregated key events into model intents.
    fn handle_keys(&mut self) {
        // Tab flips between hex and ASCII input
        if self.events.tab_pressed {
            self.model.toggle_mode();
        }

        // Arrows / Home / End, with Shift extending the selection
        if let Some(key) = self.events.nav_key_pressed {
            self.model.navigate(key, self.events.shift_down);
        }

        // Printable keys depend on the input mode
        match self.model.mode() {
            InputMode::Hex => {
                if let Some(ch) = self.events.hex_char_pressed
                    && let Some(digit) = hex_digit(ch)
                {
                    self.model.apply_hex_digit(digit);
                }
            }
            InputMode::Ascii => {
                for ch in self.events.typed_text.chars() {
                    if ch.is_ascii() && !ch.is_ascii_control() {
                        self.model.apply_ascii_char(ch as u8);
                    }
                }
            }
        }
    }

    /// One row per wheel notch; only the sign matters.
    /// Threshold ignores small drifts.
    fn handle_wheel(&mut self) {
        if self.events.raw_scroll > 0.4 {
            self.model.scroll_by(1);
        } else if self.events.raw_scroll < -0.4 {
            self.model.scroll_by(-1);
        }
    }

    /// Hit-test pointer events against the grid and update the selection.
    fn handle_pointer(&mut self, rect: egui::Rect, char_width: f32, row_height: f32) {
        let Some(pos) = self.events.pointer_hover else {
            return;
        };
        if !rect.contains(pos) {
            return;
        }

        let layout = self.model.layout(rect.height(), char_width, row_height);
        let hit = layout.byte_offset_at(pos.x - rect.min.x, pos.y - rect.min.y);

        // Offsets past the end of the data are a miss
        let Some(hit) = hit.filter(|h| h.offset < self.model.len()) else {
            return;
        };

        if self.events.pointer_pressed {
            self.model.begin_pointer_selection(hit.offset);
        } else if self.events.pointer_down {
            self.model.extend_pointer_selection(hit.offset);
        }

        if self.events.secondary_pressed {
            self.model.clear_selection_if_outside(hit.offset);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn paint_grid(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        font_id: &egui::FontId,
        char_width: f32,
        row_height: f32,
    ) {
        let layout = self.model.layout(rect.height(), char_width, row_height);
        let painter = ui.painter_at(rect);
        let origin = rect.min;

        // Address gutter, hex column, ASCII column - one text call per column
        let top = layout.visible_row_range().start;
        for row in layout.visible_row_range() {
            let Some(text) = self.model.row_text(row) else {
                break;
            };
            let y = origin.y + (row - top) as f32 * row_height;

            painter.text(
                egui::pos2(origin.x, y),
                egui::Align2::LEFT_TOP,
                text.address,
                font_id.clone(),
                colors::GRAY_160,
            );
            painter.text(
                egui::pos2(origin.x + layout.hex_left(), y),
                egui::Align2::LEFT_TOP,
                text.hex,
                font_id.clone(),
                colors::GRAY_210,
            );
            painter.text(
                egui::pos2(origin.x + layout.ascii_left(), y),
                egui::Align2::LEFT_TOP,
                text.ascii,
                font_id.clone(),
                colors::GRAY_160,
            );
        }

        self.paint_selection(&painter, &layout, origin, char_width);
        self.paint_caret(&painter, &layout, origin, char_width);
    }

    /// Highlight every visible byte of the normalized selection range,
    /// in both the hex and ASCII columns.
    fn paint_selection(
        &self,
        painter: &egui::Painter,
        layout: &GridLayout,
        origin: egui::Pos2,
        char_width: f32,
    ) {
        let Some((start, end)) = self.model.selection().normalized() else {
            return;
        };

        let visible = layout.visible_row_range();
        let b = self.model.bytes_per_row();
        let lo = start.max(visible.start * b);
        let hi = end.min((visible.end * b).saturating_sub(1));

        for offset in lo..=hi {
            // Widen the hex rect to cover both digits
            let mut hex = layout.pixel_rect_for(offset, Region::Hex);
            hex.width = char_width * 2.0;
            painter.rect_filled(to_screen(hex, origin), 0.0, colors::LIGHT_BLUE);

            let ascii = layout.pixel_rect_for(offset, Region::Ascii);
            painter.rect_filled(to_screen(ascii, origin), 0.0, colors::LIGHT_BLUE);
        }
    }

    /// Highlight the nibble the next keystroke fills, plus the caret's
    /// ASCII cell.
    fn paint_caret(
        &self,
        painter: &egui::Painter,
        layout: &GridLayout,
        origin: egui::Pos2,
        char_width: f32,
    ) {
        if self.model.is_empty() {
            return;
        }

        let mut nibble = layout.pixel_rect_for(self.model.caret(), Region::Hex);
        if self.model.phase() == EditPhase::LowNibble {
            nibble.x += char_width;
        }
        painter.rect_filled(to_screen(nibble, origin), 0.0, colors::YELLOW);

        let ascii = layout.pixel_rect_for(self.model.caret(), Region::Ascii);
        painter.rect_filled(to_screen(ascii, origin), 0.0, colors::YELLOW);
    }
}
