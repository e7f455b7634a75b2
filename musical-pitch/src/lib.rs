//! Equal-tempered pitch and note-naming values.
//!
//! Pitch is modeled as a continuous MIDI-number space ([`Pitch`]),
//! pitch class as the 12 residues of pitch modulo one octave
//! ([`PitchClass`]), and note names as letter + accidental + octave
//! spellings derived from the numbers, including the enharmonic
//! choices (C♯ vs D♭) and the B♯/C♭ octave-boundary cases.
//!
//! No operation here fails: an unnameable input degrades to an
//! absent value or an empty string, and an invalid spelling
//! assignment is dropped. The one fallible call in the crate is
//! [`tuning::set_concert_a`], which configures the process-wide
//! reference tuning once at startup.
//!
//! # Examples
//!
//! ```
//! use musical_pitch::{Accidental, LetterName, Pitch};
//!
//! let mut pitch = Pitch::from_midi(60.0);
//! assert_eq!(pitch.note_name(), "C4");
//!
//! pitch.set_preferred_name(Some((
//!     LetterName::B,
//!     Accidental::Sharp,
//! )));
//! assert_eq!(pitch.note_name(), "B♯3");
//!
//! assert_eq!(Pitch::from_frequency(440.0).note_name(), "A4");
//! assert_eq!(Pitch::from_midi(60.5).note_name(), "");
//! ```

pub mod note_name;
pub mod pitch;
pub mod pitch_class;
pub mod tuning;

pub use note_name::{Accidental, LetterName, PitchClassName};
pub use pitch::Pitch;
pub use pitch_class::PitchClass;
pub use tuning::{
    concert_a, set_concert_a, TuningError, DEFAULT_CONCERT_A,
};
