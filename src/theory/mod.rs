//! Music theory needed to turn chord names into finger positions

/// Chord qualities, chord specifications and tunings
pub mod chord;
/// Greedy fingering search with bounded repair
pub mod fingering;
/// Pitch classes, note spelling and pitch class sets
pub mod pitch;

pub use chord::{ChordKind, ChordSpec, Tuning};
pub use fingering::{Fingering, FingeringResolver, FretStop, Resolution};
pub use pitch::{PitchClass, PitchClassSet};
