//! Sheet layout, color remapping and the generation pipeline

/// End-to-end chord and cheat sheet generation
pub mod builder;
/// Foreground/background color remapping
pub mod color;
/// Composition of diagram grids into a sheet
pub mod compose;
/// Padding and reordering of diagram rows
pub mod layout;

pub use builder::{CheatSheet, ChordDiagram, RenderedSheet, build_chord};
pub use color::Color;
pub use compose::{Sheet, SheetComposer};
pub use layout::SheetGrid;
