//! Pitch classes, note spelling and fixed-size pitch class sets

use bitvec::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::io::error::ChartError;

/// Number of pitch classes in an octave
pub const OCTAVE: u8 = 12;

/// Canonical spelling for each pitch class, flats for the black keys
const CANONICAL_NAMES: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// A note identity independent of octave, always in `0..12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Wrap any integer into a pitch class
    pub const fn new(value: i32) -> Self {
        Self(value.rem_euclid(OCTAVE as i32) as u8)
    }

    /// Numeric value in `0..12`
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Upward distance in semitones from `self` to `other`, in `0..12`
    pub const fn distance_to(self, other: Self) -> u8 {
        (other.0 + OCTAVE - self.0) % OCTAVE
    }

    /// Shift by a number of semitones, wrapping at the octave
    #[must_use]
    pub const fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Canonical spelling of this pitch class
    pub const fn name(self) -> &'static str {
        CANONICAL_NAMES[self.0 as usize % 12]
    }

    /// All twelve pitch classes in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..OCTAVE).map(Self)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ChartError;

    /// Parse a letter name with an optional sharp or flat
    ///
    /// Both `♯`/`♭` and `#`/`b` spellings are accepted, so `C♯`, `C#`, `D♭` and `Db`
    /// all map to pitch class 1.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let unknown = || ChartError::UnknownNote {
            name: name.to_string(),
        };

        let mut chars = name.trim().chars();
        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(unknown()),
        };
        let accidental = match chars.next() {
            None => 0,
            Some('♯' | '#') => 1,
            Some('♭' | 'b') => -1,
            Some(_) => return Err(unknown()),
        };
        if chars.next().is_some() {
            return Err(unknown());
        }

        Ok(Self::new(natural + accidental))
    }
}

/// Set of pitch classes with O(1) membership
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PitchClassSet {
    bits: BitArr!(for 12, in u16),
}

impl Default for PitchClassSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PitchClassSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            bits: bitarr![u16, Lsb0; 0; 12],
        }
    }

    /// Insert a pitch class
    pub fn insert(&mut self, pitch: PitchClass) {
        self.bits.set(usize::from(pitch.value()), true);
    }

    /// Test membership
    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.bits.get(usize::from(pitch.value())).as_deref() == Some(&true)
    }

    /// Number of distinct pitch classes
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pitch class is present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Ascending iteration over the members
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.bits
            .iter_ones()
            .map(|index| PitchClass::new(index as i32))
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = Self::new();
        for pitch in iter {
            set.insert(pitch);
        }
        set
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(PitchClass::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
