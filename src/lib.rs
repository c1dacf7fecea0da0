//! Chord diagram generation for fretted instruments
//!
//! Chord names are resolved into finger positions by a greedy search, drawn as
//! grayscale fretboard diagrams and laid out on a two-color cheat sheet.

/// Input/output operations, configuration and error handling
pub mod io;
/// Pixel buffers, mark glyphs and diagram rendering
pub mod raster;
/// Sheet layout, color remapping and the generation pipeline
pub mod sheet;
/// Pitch classes, chords, tunings and fingering search
pub mod theory;

pub use io::error::{ChartError, Result};
