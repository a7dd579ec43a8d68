//! Table rendering
//!
//! Cells arrive already decorated with escape sequences, so every width
//! calculation goes through [`visible_length`] rather than `str::len`.
//!
//! - `ansi` - visible length, padding, escape stripping
//! - `table` - flat, grouped and tree layouts

mod ansi;
mod table;

pub use ansi::{pad_to_width, strip_ansi, visible_length};
pub use table::{Row, TableLayout, column_widths, render_table};
