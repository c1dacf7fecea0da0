//! Chord qualities, chord specifications and instrument tunings

use std::fmt;
use std::str::FromStr;

use crate::io::error::{ChartError, Result, invalid_parameter};
use crate::theory::pitch::{PitchClass, PitchClassSet};

/// Chord quality with a fixed interval table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordKind {
    /// Major triad
    Major,
    /// Major sixth
    Sixth,
    /// Dominant seventh
    Seventh,
    /// Major seventh
    MajorSeventh,
    /// Augmented triad
    Augmented,
    /// Augmented seventh
    AugmentedSeventh,
    /// Minor triad
    Minor,
    /// Minor sixth
    MinorSixth,
    /// Minor seventh
    MinorSeventh,
    /// Minor triad with a major seventh
    MinorMajorSeventh,
    /// Diminished triad
    Diminished,
    /// Diminished seventh
    DiminishedSeventh,
}

impl ChordKind {
    /// Every known chord kind in table order
    pub const ALL: [Self; 12] = [
        Self::Major,
        Self::Sixth,
        Self::Seventh,
        Self::MajorSeventh,
        Self::Augmented,
        Self::AugmentedSeventh,
        Self::Minor,
        Self::MinorSixth,
        Self::MinorSeventh,
        Self::MinorMajorSeventh,
        Self::Diminished,
        Self::DiminishedSeventh,
    ];

    /// Semitone offsets of the chord tones above the root
    pub const fn intervals(self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Sixth => &[0, 4, 7, 9],
            Self::Seventh => &[0, 4, 7, 10],
            Self::MajorSeventh => &[0, 4, 7, 11],
            Self::Augmented => &[0, 4, 8],
            Self::AugmentedSeventh => &[0, 4, 8, 10],
            Self::Minor => &[0, 3, 7],
            Self::MinorSixth => &[0, 3, 7, 9],
            Self::MinorSeventh => &[0, 3, 7, 10],
            Self::MinorMajorSeventh => &[0, 3, 7, 11],
            Self::Diminished => &[0, 3, 6],
            Self::DiminishedSeventh => &[0, 3, 6, 9],
        }
    }

    /// Suffix appended to the root in chord names, with superscript digits
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Sixth => "⁶",
            Self::Seventh => "⁷",
            Self::MajorSeventh => "M⁷",
            Self::Augmented => "+",
            Self::AugmentedSeventh => "+⁷",
            Self::Minor => "m",
            Self::MinorSixth => "m⁶",
            Self::MinorSeventh => "m⁷",
            Self::MinorMajorSeventh => "m/M7",
            Self::Diminished => "dim",
            Self::DiminishedSeventh => "dim⁷",
        }
    }
}

impl fmt::Display for ChordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ChordKind {
    type Err = ChartError;

    /// Accepts the display suffix or a plain ASCII alias such as `M7` or `aug`
    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        let kind = match name.trim() {
            "" | "maj" => Self::Major,
            "⁶" | "6" => Self::Sixth,
            "⁷" | "7" => Self::Seventh,
            "M⁷" | "M7" | "maj7" => Self::MajorSeventh,
            "+" | "aug" => Self::Augmented,
            "+⁷" | "+7" | "aug7" => Self::AugmentedSeventh,
            "m" | "min" => Self::Minor,
            "m⁶" | "m6" => Self::MinorSixth,
            "m⁷" | "m7" => Self::MinorSeventh,
            "m/M7" | "m/M⁷" | "mM7" => Self::MinorMajorSeventh,
            "dim" | "°" => Self::Diminished,
            "dim⁷" | "dim7" | "°7" => Self::DiminishedSeventh,
            other => {
                return Err(ChartError::UnknownChordKind {
                    name: other.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

/// A root plus interval offsets defining the chord tones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSpec {
    root: PitchClass,
    intervals: Vec<u8>,
    name: String,
}

impl ChordSpec {
    /// Build a chord from a root and arbitrary interval offsets
    ///
    /// # Errors
    ///
    /// Returns an error if `intervals` is empty
    pub fn new(root: PitchClass, intervals: &[u8], name: impl Into<String>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(invalid_parameter(
                "intervals",
                &"[]",
                &"a chord needs at least one tone",
            ));
        }
        Ok(Self {
            root,
            intervals: intervals.to_vec(),
            name: name.into(),
        })
    }

    /// Build a chord from the kind table
    pub fn from_kind(root: PitchClass, kind: ChordKind) -> Self {
        Self {
            root,
            intervals: kind.intervals().to_vec(),
            name: format!("{}{}", root.name(), kind.suffix()),
        }
    }

    /// Parse a root name and a kind suffix, e.g. `("E♭", "m7")`
    ///
    /// # Errors
    ///
    /// Returns an error if either part is not recognised
    pub fn parse(root: &str, kind: &str) -> Result<Self> {
        Ok(Self::from_kind(root.parse()?, kind.parse()?))
    }

    /// Root pitch class
    pub const fn root(&self) -> PitchClass {
        self.root
    }

    /// Interval offsets in declaration order
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    /// Display name, e.g. `CM⁷`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chord tones in interval order, duplicates kept
    pub fn tones(&self) -> Vec<PitchClass> {
        self.intervals
            .iter()
            .map(|&offset| self.root.transpose(i32::from(offset)))
            .collect()
    }

    /// Distinct chord tones
    pub fn tone_set(&self) -> PitchClassSet {
        self.tones().into_iter().collect()
    }
}

/// Open-string pitch classes, one per string in drawing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    strings: Vec<PitchClass>,
}

impl Tuning {
    /// Create a tuning from open-string pitch classes
    ///
    /// # Errors
    ///
    /// Returns an error if no strings are given
    pub fn new(strings: Vec<PitchClass>) -> Result<Self> {
        if strings.is_empty() {
            return Err(invalid_parameter(
                "tuning",
                &"[]",
                &"at least one string is required",
            ));
        }
        Ok(Self { strings })
    }

    /// Standard ukulele tuning G C E A
    pub fn ukulele() -> Self {
        Self {
            strings: [7, 0, 4, 9].into_iter().map(PitchClass::new).collect(),
        }
    }

    /// Number of strings
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Open pitch classes in string order
    pub fn strings(&self) -> &[PitchClass] {
        &self.strings
    }
}

impl FromStr for Tuning {
    type Err = ChartError;

    /// Parse comma-separated note names, e.g. `G,C,E,A`
    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let strings = text
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<PitchClass>>>()?;
        Self::new(strings)
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.strings.iter().map(|pitch| pitch.name()).collect();
        f.write_str(&names.join(","))
    }
}
