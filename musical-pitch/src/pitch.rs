//! Equal-tempered pitch over the continuous MIDI-number space.
//!
//! A [`Pitch`] is a real-valued MIDI number: 69.0 is concert A and
//! 60.0 is middle C. Anything in between is a perfectly good
//! microtonal pitch; it simply has no pitch class and no name.
//!
//! # Examples
//!
//! ```
//! use musical_pitch::{Accidental, LetterName, Pitch};
//!
//! let mut pitch = Pitch::from_midi(60.0);
//! assert_eq!(pitch.note_name(), "C4");
//!
//! // Respell middle C enharmonically. B♯ belongs to the octave
//! // below its sounding C:
//! pitch.set_preferred_name(Some((
//!     LetterName::B,
//!     Accidental::Sharp,
//! )));
//! assert_eq!(pitch.note_name(), "B♯3");
//!
//! // A spelling the pitch class does not have is dropped:
//! pitch.set_preferred_name(Some((
//!     LetterName::D,
//!     Accidental::Flat,
//! )));
//! assert_eq!(pitch.note_name(), "B♯3");
//! ```

use std::fmt;

use crate::note_name::{Accidental, LetterName, PitchClassName};
use crate::pitch_class::PitchClass;
use crate::tuning::concert_a;

/// A pitch as a real-valued MIDI number, plus an optional preferred
/// enharmonic spelling.
///
/// The MIDI number is fixed at construction; the spelling preference
/// is the one mutable field, and assignments to it are validated
/// against the pitch class rather than trusted. No serde here: a
/// derived `Deserialize` would smuggle spellings past that gate.
#[derive(Debug, PartialEq, PartialOrd, Clone)]
pub struct Pitch {
    midi_number: f64,
    preferred_name: Option<PitchClassName>,
}
impl Pitch {
    /// MIDI number to frequency against the process-wide concert A.
    pub fn mtof(midi_number: f64) -> f64 {
        2.0_f64.powf((midi_number - 69.0) / 12.0) * concert_a()
    }

    /// Frequency to MIDI number, the inverse of [`Pitch::mtof`] up to
    /// floating-point tolerance.
    pub fn ftom(frequency: f64) -> f64 {
        69.0 + 12.0 * (frequency / concert_a()).log2()
    }

    pub fn from_midi(midi_number: f64) -> Self {
        Self {
            midi_number,
            preferred_name: None,
        }
    }
    pub fn from_frequency(frequency: f64) -> Self {
        Self::from_midi(Self::ftom(frequency))
    }

    pub fn midi_number(&self) -> f64 {
        self.midi_number
    }
    pub fn frequency(&self) -> f64 {
        Self::mtof(self.midi_number)
    }

    /// The residue class of the MIDI number mod 12, present only when
    /// the number is integral. A fractional pitch sits between the 12
    /// classes and belongs to none of them.
    pub fn pitch_class(&self) -> Option<PitchClass> {
        if self.midi_number.fract() == 0.0 {
            Some(PitchClass::new(
                self.midi_number.rem_euclid(12.0) as u32,
            ))
        } else {
            None
        }
    }

    /// Octave in scientific pitch notation: MIDI 60 is in octave 4,
    /// MIDI 0 in octave −1. Floor division, so the whole 0..=11 range
    /// lands in octave −1.
    pub fn octave_number(&self) -> i32 {
        ((self.midi_number - 12.0) / 12.0).floor() as i32
    }

    pub fn preferred_name(&self) -> Option<PitchClassName> {
        self.preferred_name
    }

    /// Choose an enharmonic spelling for this pitch.
    ///
    /// The assignment only sticks if the name belongs to the current
    /// pitch class. Anything else, `None` included, leaves the
    /// previous choice in place: last valid value wins.
    pub fn set_preferred_name(
        &mut self,
        name: Option<PitchClassName>,
    ) {
        let name = match name {
            Some(name) => name,
            None => return,
        };
        match self.pitch_class() {
            Some(class) if class.has_name(name) => {
                self.preferred_name = Some(name);
            }
            _ => log::debug!(
                "dropped preferred name {name:?} for midi number {}",
                self.midi_number
            ),
        }
    }

    /// Letter, accidental and octave of the display name: the
    /// preferred spelling if one is set, else the pitch class's first
    /// candidate, with the octave corrected for B♯/C♭. `None` when
    /// there is no pitch class.
    pub fn note_name_tuple(
        &self,
    ) -> Option<(LetterName, Accidental, i32)> {
        let class = self.pitch_class()?;
        let name = match self.preferred_name {
            Some(name) => name,
            None => *class.names().first()?,
        };
        Some(apply_octave_number(name, self.octave_number()))
    }

    /// Display name such as "C4", "D♭5" or "B♯3"; naturals are not
    /// printed. Empty for a pitch with no pitch class.
    pub fn note_name(&self) -> String {
        match self.note_name_tuple() {
            Some((letter, accidental, octave)) => {
                let glyph = match accidental {
                    Accidental::Natural => "",
                    other => other.glyph(),
                };
                format!("{letter}{glyph}{octave}")
            }
            None => String::new(),
        }
    }
}
impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}Hz", self.note_name(), self.frequency())
    }
}

/// A pitch spelled C♭ carries the next octave's number and one
/// spelled B♯ the previous octave's number; every other spelling
/// keeps the raw arithmetic octave. Only these two single-accidental
/// spellings cross an octave boundary in the spelling table.
fn apply_octave_number(
    name: PitchClassName,
    octave_number: i32,
) -> (LetterName, Accidental, i32) {
    let (letter, accidental) = name;
    let octave = match name {
        (LetterName::C, Accidental::Flat) => octave_number + 1,
        (LetterName::B, Accidental::Sharp) => octave_number - 1,
        _ => octave_number,
    };
    (letter, accidental, octave)
}
