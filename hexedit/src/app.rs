use crate::events::EventState;
use crate::ui_popup::Popup;
use hexgridlib::HexGridModel;
use std::path::PathBuf;

pub mod colors {
    use eframe::egui::Color32;

    pub const LIGHT_BLUE: Color32 = Color32::from_rgba_premultiplied(33, 81, 109, 20);
    pub const YELLOW: Color32 = Color32::from_rgba_premultiplied(96, 88, 20, 20);
    pub const GRAY_160: Color32 = Color32::from_gray(160);
    pub const GRAY_210: Color32 = Color32::from_gray(210);
    pub const SHADOW: Color32 = Color32::from_black_alpha(150);
}

pub struct HexEditApp {
    /// Grid state machine: buffer, caret, selection, edit phase, scroll
    pub model: HexGridModel,
    /// Name of the loaded file, shown in the status bar
    pub file_name: Option<String>,
    /// Path the buffer was loaded from (default target for saving)
    pub file_path: Option<PathBuf>,
    /// Pop up handler
    pub popup: Popup,
    /// Per-frame state of user inputs
    pub events: EventState,
    /// Errors during file loading or saving
    pub error: Option<String>,
}

impl Default for HexEditApp {
    fn default() -> Self {
        Self {
            model: HexGridModel::new(),
            file_name: None,
            file_path: None,
            popup: Popup::default(),
            events: EventState::default(),
            error: None,
        }
    }
}
