//! Pixel buffers, mark glyphs and chord diagram rendering

/// Fretboard grids and mark placement
pub mod board;
/// Bounds-checked 2-D pixel buffers
pub mod buffer;
/// Label bands above each diagram
pub mod label;
/// Position mark glyphs
pub mod marks;

pub use board::{BoardRasterizer, Diagram};
pub use buffer::{Coverage, Raster};
pub use label::{BlankLabeler, LabelText, Labeler};
pub use marks::{Glyph, MarkKind, MarkRasterizer};
