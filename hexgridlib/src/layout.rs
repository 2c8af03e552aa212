//! The `layout` module provides the [`GridLayout`] struct - pure, stateless
//! coordinate math for the hex grid. It maps pixel positions to byte offsets
//! (hit testing) and byte offsets back to pixel rectangles (caret/selection
//! highlighting), so painting and input handling share one geometry source.
//!
//! All widths are derived from the monospace character width and the
//! bytes-per-row setting. Nothing here is hand-tuned per row.

/// Number of hex digits in the address gutter.
const ADDR_DIGITS: usize = 8;

/// Gutter width in characters: the address digits plus two padding chars.
const GUTTER_CHARS: usize = ADDR_DIGITS + 2;

/// Each byte in the hex column takes two digits plus one separator char.
const HEX_CHARS_PER_BYTE: usize = 3;

/// Fallback when the caller hands in a zero bytes-per-row.
const DEFAULT_BYTES_PER_ROW: usize = 16;

/// Which column of the grid a point landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Hex,
    Ascii,
}

/// Which half of a byte a point in the hex column landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NibbleHalf {
    #[default]
    High,
    Low,
}

/// Result of a successful hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Byte offset the point maps to. May lie past the end of the loaded
    /// data on a short final row; callers treat such offsets as a miss.
    pub offset: usize,
    pub region: Region,
    /// Only meaningful for [`Region::Hex`] hits.
    pub nibble: NibbleHalf,
}

/// Axis-aligned pixel rectangle, toolkit-agnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Pure geometry of the grid for one frame.
///
/// Construct it fresh per call from the current viewport size, font metrics,
/// and scroll position; it holds no mutable state of its own.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    viewport_height: f32,
    char_width: f32,
    row_height: f32,
    bytes_per_row: usize,
    scroll: usize,
    total_bytes: usize,
}

impl GridLayout {
    /// Creates a layout for the given metrics.
    ///
    /// A zero `bytes_per_row` is invalid and is replaced by the default of
    /// 16 rather than rejected.
    #[must_use]
    pub fn new(
        viewport_height: f32,
        char_width: f32,
        row_height: f32,
        bytes_per_row: usize,
        scroll: usize,
        total_bytes: usize,
    ) -> Self {
        let bytes_per_row = if bytes_per_row == 0 {
            DEFAULT_BYTES_PER_ROW
        } else {
            bytes_per_row
        };

        Self {
            viewport_height,
            char_width,
            row_height,
            bytes_per_row,
            scroll,
            total_bytes,
        }
    }

    /// Left edge of the hex column, i.e. the width of the address gutter.
    #[must_use]
    pub fn hex_left(&self) -> f32 {
        self.char_width * GUTTER_CHARS as f32
    }

    /// Left edge of the ASCII column, immediately after the hex column.
    #[must_use]
    pub fn ascii_left(&self) -> f32 {
        self.hex_left() + self.byte_width() * self.bytes_per_row as f32
    }

    /// Right edge of the ASCII column (exclusive).
    #[must_use]
    pub fn ascii_right(&self) -> f32 {
        self.ascii_left() + self.char_width * self.bytes_per_row as f32
    }

    /// Width of one byte cell in the hex column (two digits + separator).
    fn byte_width(&self) -> f32 {
        self.char_width * HEX_CHARS_PER_BYTE as f32
    }

    /// Total number of rows needed to display the loaded data.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_bytes.div_ceil(self.bytes_per_row)
    }

    /// Number of full rows that fit the viewport.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn rows_per_page(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.viewport_height / self.row_height).floor() as usize
    }

    /// Range of rows to draw: the scrolled-to row up to the last row that
    /// fits the viewport plus one partial row, clamped to the data's row
    /// count. The range is empty when scrolled past the end.
    #[must_use]
    pub fn visible_row_range(&self) -> std::ops::Range<usize> {
        let last = self
            .total_rows()
            .min(self.scroll + self.rows_per_page() + 1);
        self.scroll..last.max(self.scroll)
    }

    /// Maps a pixel point to a byte offset in the hex or ASCII column.
    ///
    /// Returns `None` for points above the grid, inside the address gutter,
    /// or past the right edge of the ASCII column. The returned offset is
    /// purely geometric: on a short final row it can point past the end of
    /// the data, and callers must treat such offsets as a miss.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn byte_offset_at(&self, x: f32, y: f32) -> Option<Hit> {
        if y < 0.0 || self.row_height <= 0.0 || self.char_width <= 0.0 {
            return None;
        }
        let row = self.scroll + (y / self.row_height).floor() as usize;

        if x >= self.hex_left() && x < self.ascii_left() {
            // Hex column: three chars per byte, separator counts as the
            // low-nibble half so a click anywhere on the cell lands on it.
            let char_idx = ((x - self.hex_left()) / self.char_width).floor() as usize;
            let col = char_idx / HEX_CHARS_PER_BYTE;
            let nibble = if char_idx % HEX_CHARS_PER_BYTE == 0 {
                NibbleHalf::High
            } else {
                NibbleHalf::Low
            };
            return Some(Hit {
                offset: row * self.bytes_per_row + col,
                region: Region::Hex,
                nibble,
            });
        }

        if x >= self.ascii_left() && x < self.ascii_right() {
            let col = ((x - self.ascii_left()) / self.char_width).floor() as usize;
            // Float edge guard
            if col >= self.bytes_per_row {
                return None;
            }
            return Some(Hit {
                offset: row * self.bytes_per_row + col,
                region: Region::Ascii,
                nibble: NibbleHalf::High,
            });
        }

        None
    }

    /// Inverse of [`Self::byte_offset_at`]: the pixel rectangle of a single
    /// nibble (hex column) or a single character (ASCII column).
    ///
    /// Rows above the scroll position yield rectangles with negative `y`;
    /// the host clips.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn pixel_rect_for(&self, offset: usize, region: Region) -> Rect {
        let row = offset / self.bytes_per_row;
        let col = offset % self.bytes_per_row;
        let y = (row as f32 - self.scroll as f32) * self.row_height;

        let x = match region {
            Region::Hex => self.hex_left() + col as f32 * self.byte_width(),
            Region::Ascii => self.ascii_left() + col as f32 * self.char_width,
        };

        Rect {
            x,
            y,
            width: self.char_width,
            height: self.row_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10px chars, 16px rows, 16 bytes per row, 20 visible rows, 256 bytes.
    fn layout() -> GridLayout {
        GridLayout::new(320.0, 10.0, 16.0, 16, 0, 256)
    }

    #[test]
    fn test_zero_bytes_per_row_falls_back_to_default() {
        // Arrange & Act
        let layout = GridLayout::new(320.0, 10.0, 16.0, 0, 0, 256);

        // Assert
        assert_eq!(layout.total_rows(), 16);
    }

    #[test]
    fn test_column_edges_derive_from_char_width() {
        // Arrange
        let layout = layout();

        // Assert: gutter is 10 chars, hex col 16*3 chars, ascii col 16 chars
        assert_eq!(layout.hex_left(), 100.0);
        assert_eq!(layout.ascii_left(), 100.0 + 480.0);
        assert_eq!(layout.ascii_right(), 100.0 + 480.0 + 160.0);
    }

    #[test]
    fn test_visible_row_range_fills_viewport_plus_one() {
        // Arrange
        let layout = layout();

        // Act
        let range = layout.visible_row_range();

        // Assert: 20 full rows fit, +1 partial, data has only 16 rows
        assert_eq!(range, 0..16);
    }

    #[test]
    fn test_visible_row_range_respects_scroll() {
        // Arrange: 64 rows of data, viewport fits 20
        let layout = GridLayout::new(320.0, 10.0, 16.0, 16, 10, 1024);

        // Act
        let range = layout.visible_row_range();

        // Assert
        assert_eq!(range, 10..31);
    }

    #[test]
    fn test_visible_row_range_empty_past_end() {
        // Arrange: scrolled beyond the data
        let layout = GridLayout::new(320.0, 10.0, 16.0, 16, 100, 256);

        // Act
        let range = layout.visible_row_range();

        // Assert
        assert!(range.is_empty());
    }

    #[test]
    fn test_hit_in_hex_column() {
        // Arrange
        let layout = layout();

        // Act: third row, second byte, first digit
        let hit = layout.byte_offset_at(100.0 + 30.0, 33.0);

        // Assert
        assert_eq!(
            hit,
            Some(Hit {
                offset: 2 * 16 + 1,
                region: Region::Hex,
                nibble: NibbleHalf::High,
            })
        );
    }

    #[test]
    fn test_hit_on_low_nibble_half() {
        // Arrange
        let layout = layout();

        // Act: second digit of the first byte
        let hit = layout.byte_offset_at(100.0 + 12.0, 0.0);

        // Assert
        assert_eq!(hit.map(|h| h.nibble), Some(NibbleHalf::Low));
    }

    #[test]
    fn test_hit_in_ascii_column() {
        // Arrange
        let layout = layout();

        // Act: first row, fifth char of the ascii column
        let hit = layout.byte_offset_at(580.0 + 45.0, 5.0);

        // Assert
        assert_eq!(
            hit,
            Some(Hit {
                offset: 4,
                region: Region::Ascii,
                nibble: NibbleHalf::High,
            })
        );
    }

    #[test]
    fn test_gutter_and_out_of_bounds_miss() {
        // Arrange
        let layout = layout();

        // Act & Assert
        assert_eq!(layout.byte_offset_at(50.0, 10.0), None); // gutter
        assert_eq!(layout.byte_offset_at(900.0, 10.0), None); // right of ascii
        assert_eq!(layout.byte_offset_at(150.0, -5.0), None); // negative row
    }

    #[test]
    fn test_pixel_rect_round_trip() {
        // Arrange
        let layout = layout();
        let offset = 3 * 16 + 7;

        // Act
        let rect = layout.pixel_rect_for(offset, Region::Hex);
        let hit = layout.byte_offset_at(rect.x + 1.0, rect.y + 1.0);

        // Assert
        assert_eq!(hit.map(|h| h.offset), Some(offset));
        assert_eq!(hit.map(|h| h.region), Some(Region::Hex));
    }

    #[test]
    fn test_pixel_rect_accounts_for_scroll() {
        // Arrange: scrolled down two rows
        let layout = GridLayout::new(320.0, 10.0, 16.0, 16, 2, 256);

        // Act
        let above = layout.pixel_rect_for(0, Region::Ascii);
        let visible = layout.pixel_rect_for(2 * 16, Region::Ascii);

        // Assert: row 0 is above the viewport, row 2 is the top row
        assert_eq!(above.y, -32.0);
        assert_eq!(visible.y, 0.0);
    }
}
