//! The `keymap` module decouples the grid state machine from any toolkit's
//! key enumeration. A host maps its own key codes to [`NavKey`] and to plain
//! `char`s, and the model never sees toolkit types.

/// Logical navigation keys understood by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    /// Jump to the first byte of the caret's row.
    Home,
    /// Jump to the last byte of the caret's row.
    End,
}

/// Map a typed character to a hex digit value (0-15).
///
/// Accepts both cases. Returns `None` for anything that is not `0-9a-fA-F`.
///
/// # Examples
/// ```
/// use hexgridlib::hex_digit;
///
/// assert_eq!(hex_digit('b'), Some(0xB));
/// assert_eq!(hex_digit('G'), None);
/// ```
#[must_use]
pub fn hex_digit(ch: char) -> Option<u8> {
    ch.to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digit_accepts_both_cases() {
        // Arrange
        let lower = "0123456789abcdef";
        let upper = "0123456789ABCDEF";

        // Act & Assert
        for (i, (l, u)) in lower.chars().zip(upper.chars()).enumerate() {
            assert_eq!(hex_digit(l), Some(i as u8));
            assert_eq!(hex_digit(u), Some(i as u8));
        }
    }

    #[test]
    fn test_hex_digit_rejects_non_hex() {
        // Arrange
        let invalid = ['g', 'G', ' ', '-', 'z', '\n'];

        // Act & Assert
        for ch in invalid {
            assert_eq!(hex_digit(ch), None);
        }
    }
}
