use eframe::egui;
use hexgridlib::NavKey;

#[derive(Default, Clone)]
pub struct EventState {
    pub(crate) nav_key_pressed: Option<NavKey>,
    pub(crate) shift_down: bool,
    pub(crate) tab_pressed: bool,
    pub(crate) hex_char_pressed: Option<char>,
    pub(crate) typed_text: String,
    pub(crate) pointer_pressed: bool,
    pub(crate) pointer_down: bool,
    pub(crate) secondary_pressed: bool,
    pub(crate) pointer_hover: Option<egui::Pos2>,
    pub(crate) raw_scroll: f32,
    pub(crate) escape_pressed: bool,
    pub(crate) enter_released: bool,
}

/// Helper for mapping toolkit keys to the grid's logical navigation keys
const fn key_to_nav(key: egui::Key) -> Option<NavKey> {
    Some(match key {
        egui::Key::ArrowLeft => NavKey::Left,
        egui::Key::ArrowRight => NavKey::Right,
        egui::Key::ArrowUp => NavKey::Up,
        egui::Key::ArrowDown => NavKey::Down,
        egui::Key::Home => NavKey::Home,
        egui::Key::End => NavKey::End,
        _ => return None,
    })
}

#[allow(clippy::enum_glob_use)]
/// Helper for mapping keys to hex chars
const fn key_to_hex_char(key: egui::Key) -> Option<char> {
    use egui::Key::*;
    Some(match key {
        Num0 => '0',
        Num1 => '1',
        Num2 => '2',
        Num3 => '3',
        Num4 => '4',
        Num5 => '5',
        Num6 => '6',
        Num7 => '7',
        Num8 => '8',
        Num9 => '9',
        A => 'A',
        B => 'B',
        C => 'C',
        D => 'D',
        E => 'E',
        F => 'F',
        _ => return None,
    })
}

/// Collect events once per frame and return an aggregated state
pub fn collect_ui_events(ui: &egui::Ui) -> EventState {
    ui.input(|i| {
        let mut state = EventState {
            pointer_down: i.pointer.primary_down(),
            pointer_pressed: i.pointer.primary_pressed(),
            secondary_pressed: i.pointer.secondary_pressed(),
            pointer_hover: i.pointer.hover_pos(),
            shift_down: i.modifiers.shift,
            raw_scroll: i.smooth_scroll_delta.y,
            ..Default::default()
        };

        for event in &i.events {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } => {
                    if let Some(nav) = key_to_nav(*key) {
                        state.nav_key_pressed = Some(nav);
                    }

                    if *key == egui::Key::Tab {
                        state.tab_pressed = true;
                    }

                    if let Some(ch) = key_to_hex_char(*key) {
                        state.hex_char_pressed = Some(ch);
                    }
                }
                // Printable input for ASCII-mode editing
                egui::Event::Text(text) => state.typed_text.push_str(text),
                _ => {}
            }
        }

        // Direct queries for keys handled outside the event loop
        state.escape_pressed = i.key_pressed(egui::Key::Escape);
        state.enter_released = i.key_released(egui::Key::Enter);

        state
    })
}
