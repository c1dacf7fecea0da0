//! Greedy fingering search with a bounded repair loop
//!
//! Each string first takes the lowest fret that sounds any chord tone. While some
//! chord tone is still missing, the lowest-placed finger that can reach a different
//! chord tone with the smallest step moves up to it. The loop is capped, and a capped
//! search is reported rather than treated as an error.

use std::fmt;

use crate::io::configuration::{MAX_ENCODED_FRET, MAX_REPAIR_ITERATIONS};
use crate::io::diagnostics::{Advisory, Diagnostics};
use crate::theory::chord::{ChordSpec, Tuning};
use crate::theory::pitch::{OCTAVE, PitchClass, PitchClassSet};

/// What a single string does in a fingering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FretStop {
    /// Pressed at this fret, 0 = open
    Fret(u8),
    /// Not played
    Muted,
}

impl FretStop {
    /// Fret number, `None` for a muted string
    pub const fn fret(self) -> Option<u8> {
        match self {
            Self::Fret(fret) => Some(fret),
            Self::Muted => None,
        }
    }

    /// Single-character encoding, `None` above fret 9
    pub fn encode(self) -> Option<char> {
        match self {
            Self::Muted => Some('x'),
            Self::Fret(fret) if fret <= MAX_ENCODED_FRET => char::from_digit(u32::from(fret), 10),
            Self::Fret(_) => None,
        }
    }
}

/// Per-string fret choice, one entry per string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingering {
    stops: Vec<FretStop>,
}

impl Fingering {
    /// Wrap per-string stops
    pub const fn new(stops: Vec<FretStop>) -> Self {
        Self { stops }
    }

    /// Stops in string order
    pub fn stops(&self) -> &[FretStop] {
        &self.stops
    }

    /// Number of strings covered
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// True for a fingering over zero strings
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// One-character-per-string placement string such as `0003` or `x232`
    ///
    /// Frets above 9 cannot be expressed in this encoding; `None` is returned for
    /// such fingerings instead of emitting an ambiguous multi-digit entry.
    pub fn encode(&self) -> Option<String> {
        self.stops.iter().map(|stop| stop.encode()).collect()
    }
}

impl fmt::Display for Fingering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in &self.stops {
            match stop {
                FretStop::Muted => write!(f, "x")?,
                FretStop::Fret(fret) if *fret <= MAX_ENCODED_FRET => write!(f, "{fret}")?,
                FretStop::Fret(fret) => write!(f, "({fret})")?,
            }
        }
        Ok(())
    }
}

/// Outcome of one fingering search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The fingering found, possibly partial when not converged
    pub fingering: Fingering,
    /// Sounding pitch class per string before duplicate muting
    pub pitches: Vec<PitchClass>,
    /// Whether every chord tone is sounded somewhere
    pub converged: bool,
    /// Number of finger moves performed
    pub repairs: usize,
    /// Advisories raised during the search
    pub diagnostics: Diagnostics,
}

/// Finds a playable fingering for chords on a fixed tuning
#[derive(Debug, Clone)]
pub struct FingeringResolver {
    tuning: Tuning,
    max_repairs: usize,
}

impl FingeringResolver {
    /// Resolver with the default repair cap
    pub const fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            max_repairs: MAX_REPAIR_ITERATIONS,
        }
    }

    /// Override the repair cap
    #[must_use]
    pub const fn with_max_repairs(mut self, max_repairs: usize) -> Self {
        self.max_repairs = max_repairs;
        self
    }

    /// The tuning chords are resolved against
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Resolve a chord into a fingering
    ///
    /// Never fails: when the repair cap is reached with tones still missing, the
    /// partial fingering is returned with `converged == false` and a
    /// [`Advisory::NotConverged`] entry.
    pub fn resolve(&self, chord: &ChordSpec) -> Resolution {
        let strings = self.tuning.strings();
        let tones = chord.tones();
        let required = chord.tone_set();

        log::debug!(
            "Searching chord {} for tuning {}",
            chord.name(),
            self.tuning
        );

        let mut pitches = Vec::with_capacity(strings.len());
        let mut frets = Vec::with_capacity(strings.len());
        for &open in strings {
            let (pitch, fret) = lowest_chord_tone(open, &tones);
            pitches.push(pitch);
            frets.push(fret);
        }

        let mut repairs = 0;
        let mut converged = covers(&pitches, &required);
        while !converged && repairs < self.max_repairs {
            log::debug!(
                "Attempt {} for chord {}: required {required}, present {}",
                repairs + 2,
                chord.name(),
                pitches.iter().copied().collect::<PitchClassSet>()
            );

            let Some((string, pitch)) = next_move(strings, &frets, &tones) else {
                break;
            };
            if let (Some(slot_pitch), Some(slot_fret), Some(&open)) =
                (pitches.get_mut(string), frets.get_mut(string), strings.get(string))
            {
                *slot_pitch = pitch;
                *slot_fret = open.distance_to(pitch);
            }

            repairs += 1;
            converged = covers(&pitches, &required);
        }

        let stops = mute_duplicates(strings, &frets);
        let fingering = Fingering::new(stops);

        let mut diagnostics = Diagnostics::new();
        if converged {
            log::info!(
                "Found {fingering} for chord {} after {repairs} repairs",
                chord.name()
            );
        } else {
            diagnostics.push(Advisory::NotConverged {
                chord: chord.name().to_string(),
                repairs,
            });
        }

        Resolution {
            fingering,
            pitches,
            converged,
            repairs,
            diagnostics,
        }
    }
}

// Lowest fret on the string that sounds a chord tone; equal distances keep the
// earlier tone
fn lowest_chord_tone(open: PitchClass, tones: &[PitchClass]) -> (PitchClass, u8) {
    let mut best = (open.transpose(-1), OCTAVE - 1);
    for &tone in tones {
        let distance = open.distance_to(tone);
        if distance < best.1 {
            best = (tone, distance);
        }
    }
    best
}

fn covers(pitches: &[PitchClass], required: &PitchClassSet) -> bool {
    let present: PitchClassSet = pitches.iter().copied().collect();
    present.len() == required.len()
}

// Among the strings at the lowest fret, the one reaching another chord tone with the
// smallest step above its current pitch, together with that tone
fn next_move(strings: &[PitchClass], frets: &[u8], tones: &[PitchClass]) -> Option<(usize, PitchClass)> {
    let lowest_fret = frets.iter().copied().min()?;
    let mut best: Option<(usize, PitchClass, u8)> = None;

    for (index, (&open, &fret)) in strings.iter().zip(frets).enumerate() {
        if fret != lowest_fret {
            continue;
        }
        let start = open.transpose(i32::from(fret) + 1);
        let mut candidate: Option<(PitchClass, u8)> = None;
        for &tone in tones {
            let step = start.distance_to(tone);
            if candidate.is_none_or(|(_, smallest)| step < smallest) {
                candidate = Some((tone, step));
            }
        }
        if let Some((tone, step)) = candidate
            && best.is_none_or(|(_, _, smallest)| step < smallest)
        {
            best = Some((index, tone, step));
        }
    }

    best.map(|(index, tone, _)| (index, tone))
}

// Later strings repeating an earlier string's open pitch and fret are muted
fn mute_duplicates(strings: &[PitchClass], frets: &[u8]) -> Vec<FretStop> {
    let mut stops: Vec<FretStop> = frets.iter().map(|&fret| FretStop::Fret(fret)).collect();
    for i in 0..stops.len() {
        for j in (i + 1)..stops.len() {
            let same_open = strings.get(i) == strings.get(j);
            let same_fret = match (stops.get(i), stops.get(j)) {
                (Some(FretStop::Fret(a)), Some(FretStop::Fret(b))) => a == b,
                _ => false,
            };
            if same_open
                && same_fret
                && let Some(stop) = stops.get_mut(j)
            {
                *stop = FretStop::Muted;
            }
        }
    }
    stops
}
