//! Advisory diagnostics returned next to generated artifacts
//!
//! None of these stop generation. Callers that need guaranteed-correct diagrams
//! inspect them and drop or regenerate the affected entries.

use std::fmt;

/// A recoverable condition noticed while resolving or drawing a chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A mark symbol that has no rasterization; a blank glyph was used
    UnknownMark {
        /// The unrecognised symbol
        symbol: char,
    },
    /// The placement string does not have one character per string
    PlacementLength {
        /// Configured string count
        expected: usize,
        /// Characters in the placement string
        found: usize,
    },
    /// A placement character that is neither a digit nor `x`; the string was skipped
    InvalidPlacement {
        /// String index of the character
        string: usize,
        /// The offending character
        symbol: char,
    },
    /// A mark that does not fit inside the board was clipped
    MarkOutOfBounds {
        /// String index of the mark
        string: usize,
        /// Fret of the mark
        fret: u8,
    },
    /// The fingering search hit its iteration cap with chord tones still missing
    NotConverged {
        /// Display name of the chord
        chord: String,
        /// Repairs performed before giving up
        repairs: usize,
    },
    /// Marks are taller than the gap between frets and will overlap fret lines
    MarkExceedsFretSpacing {
        /// Configured mark size
        mark_size: usize,
        /// Configured fret spacing
        fret_spacing: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMark { symbol } => {
                write!(f, "No mark is known for symbol '{symbol}', drawing nothing")
            }
            Self::PlacementLength { expected, found } => {
                write!(
                    f,
                    "Placement has {found} entries but the board has {expected} strings"
                )
            }
            Self::InvalidPlacement { string, symbol } => {
                write!(f, "Placement '{symbol}' on string {string} is not a fret")
            }
            Self::MarkOutOfBounds { string, fret } => {
                write!(f, "Mark on string {string} fret {fret} lies outside the board")
            }
            Self::NotConverged { chord, repairs } => {
                write!(
                    f,
                    "Finger positions for chord {chord} could not be found after {repairs} repairs"
                )
            }
            Self::MarkExceedsFretSpacing {
                mark_size,
                fret_spacing,
            } => {
                write!(
                    f,
                    "Mark size {mark_size} is larger than the fret gap {fret_spacing}"
                )
            }
        }
    }
}

/// Ordered collection of advisories gathered during one operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    advisories: Vec<Advisory>,
}

impl Diagnostics {
    /// Create an empty collection
    pub const fn new() -> Self {
        Self {
            advisories: Vec::new(),
        }
    }

    /// Record an advisory
    pub fn push(&mut self, advisory: Advisory) {
        self.advisories.push(advisory);
    }

    /// Append everything from another collection
    pub fn merge(&mut self, other: Self) {
        self.advisories.extend(other.advisories);
    }

    /// True when nothing was reported
    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Number of advisories
    pub fn len(&self) -> usize {
        self.advisories.len()
    }

    /// Iterate over the advisories in the order they were reported
    pub fn iter(&self) -> std::slice::Iter<'_, Advisory> {
        self.advisories.iter()
    }

    /// True if any advisory matches the predicate
    pub fn any(&self, predicate: impl Fn(&Advisory) -> bool) -> bool {
        self.advisories.iter().any(predicate)
    }

    /// Forward every advisory to the `warn` log level
    pub fn emit(&self) {
        for advisory in &self.advisories {
            log::warn!("{advisory}");
        }
    }
}

impl From<Advisory> for Diagnostics {
    fn from(advisory: Advisory) -> Self {
        Self {
            advisories: vec![advisory],
        }
    }
}

impl Extend<Advisory> for Diagnostics {
    fn extend<I: IntoIterator<Item = Advisory>>(&mut self, iter: I) {
        self.advisories.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Advisory;
    type IntoIter = std::slice::Iter<'a, Advisory>;

    fn into_iter(self) -> Self::IntoIter {
        self.advisories.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Advisory;
    type IntoIter = std::vec::IntoIter<Advisory>;

    fn into_iter(self) -> Self::IntoIter {
        self.advisories.into_iter()
    }
}
