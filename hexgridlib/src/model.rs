//! The `model` module provides the [`HexGridModel`] struct - the single
//! owner of the byte buffer and of all caret, selection, edit, and scroll
//! state. Host surfaces feed it input intents; it mutates state, mutates
//! bytes in place, and raises an advisory redraw flag the host consumes.
//!
//! Every operation is total: out-of-range input is absorbed silently (the
//! caret does not move at all when the target is invalid), and nothing in
//! here returns an error or panics.

use crate::keymap::NavKey;
use crate::layout::GridLayout;

/// How a printable keystroke is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Hex,
    Ascii,
}

/// Which half of the current byte the next hex keystroke fills.
/// Only meaningful while [`InputMode::Hex`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    HighNibble,
    LowNibble,
}

/// Inclusive selection of bytes, stored as anchor and active endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct Selection {
    /// Anchor and active offsets of selected bytes.
    /// Inverted if selection is moving right-to-left.
    range: Option<[usize; 2]>,
}

impl Selection {
    /// Check if the provided offset is within the selection range
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        if let Some(range) = self.range {
            if range[0] < range[1] {
                return range[0] <= offset && range[1] >= offset;
            }
            return range[1] <= offset && range[0] >= offset;
        }
        false
    }

    /// Selection endpoints ordered so start <= end, inclusive on both ends
    #[must_use]
    pub fn normalized(&self) -> Option<(usize, usize)> {
        self.range
            .map(|[a, b]| if a <= b { (a, b) } else { (b, a) })
    }

    /// The fixed endpoint of the selection, if any
    #[must_use]
    pub const fn anchor(&self) -> Option<usize> {
        match self.range {
            Some(range) => Some(range[0]),
            None => None,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// Start a fresh selection with both endpoints at `offset`
    const fn begin(&mut self, offset: usize) {
        self.range = Some([offset, offset]);
    }

    /// Move the active endpoint, leaving the anchor fixed
    fn extend(&mut self, offset: usize) {
        let range = self.range.get_or_insert([offset, offset]);
        range[1] = offset;
    }

    /// Clear selection range
    pub const fn clear(&mut self) {
        self.range = None;
    }
}

/// Per-row display strings for the host to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    /// Row start offset as 8 uppercase hex digits.
    pub address: String,
    /// Two-digit uppercase hex bytes, space separated, padded with spaces
    /// on a short final row so the ASCII column stays aligned.
    pub hex: String,
    /// Printable bytes as-is, `.` for everything else.
    pub ascii: String,
}

/// State machine of the hex grid: buffer, caret, edit phase, input mode,
/// selection, and scroll position, mutated through input intents only.
#[derive(Debug)]
pub struct HexGridModel {
    buffer: Vec<u8>,
    caret: usize,
    mode: InputMode,
    phase: EditPhase,
    selection: Selection,
    scroll: usize,
    bytes_per_row: usize,
    rows_per_page: usize,
    needs_redraw: bool,
}

impl Default for HexGridModel {
    fn default() -> Self {
        Self::new()
    }
}

impl HexGridModel {
    /// Creates an empty model: no bytes, caret at 0, hex mode, high nibble,
    /// no selection, 16 bytes per row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            caret: 0,
            mode: InputMode::Hex,
            phase: EditPhase::HighNibble,
            selection: Selection { range: None },
            scroll: 0,
            bytes_per_row: 16,
            rows_per_page: 32,
            needs_redraw: false,
        }
    }

    // -- Accessors for the host surface

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.buffer.get(offset).copied()
    }

    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    #[must_use]
    pub const fn caret_row(&self) -> usize {
        self.caret / self.bytes_per_row
    }

    #[must_use]
    pub const fn caret_col(&self) -> usize {
        self.caret % self.bytes_per_row
    }

    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub const fn phase(&self) -> EditPhase {
        self.phase
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn scroll_row(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub const fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.buffer.len().div_ceil(self.bytes_per_row)
    }

    /// Consume the advisory dirty flag. The host redraws when this is true.
    pub const fn take_redraw(&mut self) -> bool {
        let dirty = self.needs_redraw;
        self.needs_redraw = false;
        dirty
    }

    /// Build the frame geometry for the current buffer/scroll state.
    #[must_use]
    pub fn layout(&self, viewport_height: f32, char_width: f32, row_height: f32) -> GridLayout {
        GridLayout::new(
            viewport_height,
            char_width,
            row_height,
            self.bytes_per_row,
            self.scroll,
            self.buffer.len(),
        )
    }

    // -- Configuration fed by the host

    /// Set displayed bytes per row. Zero is invalid and is ignored,
    /// retaining the prior value.
    pub fn set_bytes_per_row(&mut self, bytes_per_row: usize) {
        if bytes_per_row == 0 || bytes_per_row == self.bytes_per_row {
            return;
        }
        self.bytes_per_row = bytes_per_row;
        self.scroll = self.scroll.min(self.max_scroll());
        self.needs_redraw = true;
    }

    /// Tell the model how many full rows the viewport currently fits.
    /// Used by the caret auto-scroll rule.
    pub const fn set_rows_per_page(&mut self, rows: usize) {
        if rows > 0 {
            self.rows_per_page = rows;
        }
    }

    // -- State machine operations

    /// Replace the buffer wholesale and reset all state to defaults.
    pub fn load(&mut self, bytes: Vec<u8>) {
        self.buffer = bytes;
        self.caret = 0;
        self.mode = InputMode::Hex;
        self.phase = EditPhase::HighNibble;
        self.selection.clear();
        self.scroll = 0;
        self.needs_redraw = true;
    }

    /// Move the caret to `offset` and keep its row inside the visible
    /// window. An out-of-range offset leaves the caret where it was.
    pub fn set_caret(&mut self, offset: usize) {
        if offset >= self.buffer.len() {
            return;
        }
        self.caret = offset;

        // Auto-scroll: follow the caret row out of either end of the window
        let row = self.caret_row();
        if row < self.scroll {
            self.scroll = row;
        }
        if row >= self.scroll + self.rows_per_page {
            self.scroll = row - self.rows_per_page + 1;
        }
        self.needs_redraw = true;
    }

    /// Flip between hex and ASCII input. Resets the nibble phase but leaves
    /// caret, selection, and bytes untouched.
    pub const fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            InputMode::Hex => InputMode::Ascii,
            InputMode::Ascii => InputMode::Hex,
        };
        self.phase = EditPhase::HighNibble;
        self.needs_redraw = true;
    }

    /// Write one hex digit (0-15) into the byte under the caret.
    ///
    /// The first digit fills the high nibble, the second fills the low
    /// nibble and advances the caret by one byte (wrapping to the next row).
    /// Ignored outside hex mode and with the caret at/beyond end of data.
    pub fn apply_hex_digit(&mut self, digit: u8) {
        if self.mode != InputMode::Hex || digit > 0xF || self.caret >= self.buffer.len() {
            return;
        }
        self.selection.clear();

        let byte = &mut self.buffer[self.caret];
        match self.phase {
            EditPhase::HighNibble => {
                *byte = (*byte & 0x0F) | (digit << 4);
                self.phase = EditPhase::LowNibble;
            }
            EditPhase::LowNibble => {
                *byte = (*byte & 0xF0) | digit;
                self.phase = EditPhase::HighNibble;
                // Advancing past the last byte is a silent no-op
                self.set_caret(self.caret + 1);
            }
        }
        self.needs_redraw = true;
    }

    /// Overwrite the byte under the caret and advance by one. Ignored
    /// outside ASCII mode.
    pub fn apply_ascii_char(&mut self, value: u8) {
        if self.mode != InputMode::Ascii || self.caret >= self.buffer.len() {
            return;
        }
        self.selection.clear();

        self.buffer[self.caret] = value;
        self.set_caret(self.caret + 1);
        self.needs_redraw = true;
    }

    /// Move the caret by a signed byte delta.
    ///
    /// A target outside `[0, len)` does not move the caret at all. Without
    /// `extend` the selection is cleared first; with it, the active endpoint
    /// follows the caret while the anchor stays fixed (anchored at the
    /// pre-move caret when no selection exists yet).
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn move_caret(&mut self, delta: isize, extend: bool) {
        let anchor = self.selection.anchor().unwrap_or(self.caret);
        if !extend {
            self.selection.clear();
        }
        self.phase = EditPhase::HighNibble;

        let target = self.caret as isize + delta;
        if target >= 0 && (target as usize) < self.buffer.len() {
            self.set_caret(target as usize);
        }

        if extend && !self.buffer.is_empty() {
            self.selection.begin(anchor);
            self.selection.extend(self.caret);
        }
        self.needs_redraw = true;
    }

    /// Translate a logical navigation key into a caret move.
    #[allow(clippy::cast_possible_wrap)]
    pub fn navigate(&mut self, key: NavKey, extend: bool) {
        let b = self.bytes_per_row as isize;
        let col = self.caret_col() as isize;
        let delta = match key {
            NavKey::Left => -1,
            NavKey::Right => 1,
            NavKey::Up => -b,
            NavKey::Down => b,
            NavKey::Home => -col,
            NavKey::End => b - 1 - col,
        };
        self.move_caret(delta, extend);
    }

    /// Pointer pressed on a byte: anchor a fresh selection there and move
    /// the caret. Offsets past the end of data are ignored.
    pub fn begin_pointer_selection(&mut self, offset: usize) {
        if offset >= self.buffer.len() {
            return;
        }
        self.selection.begin(offset);
        self.phase = EditPhase::HighNibble;
        self.set_caret(offset);
        self.needs_redraw = true;
    }

    /// Pointer dragged over a byte: move the active endpoint only. Invalid
    /// offsets leave the endpoint at its last valid value.
    pub fn extend_pointer_selection(&mut self, offset: usize) {
        if offset >= self.buffer.len() || self.selection.is_empty() {
            return;
        }
        self.selection.extend(offset);
        self.needs_redraw = true;
    }

    /// Secondary-click helper: keep the selection when the click lands
    /// inside it (so a context menu can act on it), clear it otherwise.
    pub fn clear_selection_if_outside(&mut self, offset: usize) {
        if !self.selection.contains(offset) {
            self.selection.clear();
            self.needs_redraw = true;
        }
    }

    /// Render the selected bytes as two-digit uppercase hex, space
    /// separated. Empty string when nothing is selected.
    #[must_use]
    pub fn copy_selection_as_hex_text(&self) -> String {
        let Some((start, end)) = self.selection.normalized() else {
            return String::new();
        };
        self.buffer[start..=end.min(self.buffer.len().saturating_sub(1))]
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Scroll by one row per wheel notch; only the sign of `delta` matters.
    pub fn scroll_by(&mut self, delta: i32) {
        let prev = self.scroll;
        if delta > 0 {
            self.scroll = self.scroll.saturating_sub(1);
        } else if delta < 0 {
            self.scroll = (self.scroll + 1).min(self.max_scroll());
        }
        if self.scroll != prev {
            self.needs_redraw = true;
        }
    }

    const fn max_scroll(&self) -> usize {
        self.total_rows().saturating_sub(1)
    }

    /// Display strings for one row, or `None` past the last data row.
    #[must_use]
    pub fn row_text(&self, row: usize) -> Option<RowText> {
        if row >= self.total_rows() {
            return None;
        }
        let start = row * self.bytes_per_row;
        let end = (start + self.bytes_per_row).min(self.buffer.len());

        let mut hex = String::with_capacity(self.bytes_per_row * 3);
        let mut ascii = String::with_capacity(self.bytes_per_row);
        for col in 0..self.bytes_per_row {
            let offset = start + col;
            if col > 0 {
                hex.push(' ');
            }
            if offset < end {
                let b = self.buffer[offset];
                hex.push_str(&format!("{b:02X}"));
                ascii.push(if (0x20..=0x7E).contains(&b) {
                    b as char
                } else {
                    '.'
                });
            } else {
                // Pad the short final row so the ascii column lines up
                hex.push_str("  ");
                ascii.push(' ');
            }
        }

        Some(RowText {
            address: format!("{start:08X}"),
            hex,
            ascii,
        })
    }
}
