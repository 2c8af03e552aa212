//! # `hexgridlib`
//!
//! `hexgridlib` is a Rust library implementing the view/edit model of a hex
//! editor grid: an address gutter, a hex byte column, and an ASCII column.
//!
//! The library provides:
//! - Pure coordinate math for the grid (via [`GridLayout`] struct).
//! - A single-owner state machine for caret, selection, nibble editing,
//!   and scrolling (via [`HexGridModel`] struct).
//! - A toolkit-agnostic key abstraction (via [`NavKey`] and [`hex_digit`]).
//!
//! The library never draws and never touches the filesystem. A host surface
//! feeds it input intents and paints from the state it exposes.
//!
//! ## Example
//!
//! ```
//! use hexgridlib::HexGridModel;
//!
//! let mut model = HexGridModel::new();
//! model.load(vec![0x48, 0x65, 0x78]);
//! model.apply_hex_digit(0xF);
//! model.apply_hex_digit(0xF);
//! assert_eq!(model.bytes()[0], 0xFF);
//! assert_eq!(model.caret(), 1);
//! ```

mod keymap;
mod layout;
mod model;

// Public APIs
pub use keymap::{NavKey, hex_digit};
pub use layout::{GridLayout, Hit, NibbleHalf, Rect, Region};
pub use model::{EditPhase, HexGridModel, InputMode, RowText, Selection};
