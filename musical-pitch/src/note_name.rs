//! Letter names and accidentals, the spelling half of a note name.
//!
//! A spelling is a [`PitchClassName`]: a letter paired with an
//! accidental. Which spellings are standard for which pitch class is
//! decided by [`crate::pitch_class::PitchClass`]; nothing here knows
//! about semitones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven diatonic letters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum LetterName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Cyclic order of the letters. [`LetterName::next`] and
/// [`LetterName::previous`] walk this table and wrap at its ends.
const LETTERS: [LetterName; 7] = [
    LetterName::C,
    LetterName::D,
    LetterName::E,
    LetterName::F,
    LetterName::G,
    LetterName::A,
    LetterName::B,
];

impl LetterName {
    fn cycle_index(self) -> usize {
        LETTERS
            .iter()
            .position(|letter| *letter == self)
            .expect("the cycle table holds every letter")
    }

    /// The letter a step up the cycle, B wrapping to C.
    ///
    /// ```
    /// use musical_pitch::LetterName;
    ///
    /// assert_eq!(LetterName::A.next(), LetterName::B);
    /// assert_eq!(LetterName::B.next(), LetterName::C);
    /// ```
    pub fn next(self) -> Self {
        LETTERS[(self.cycle_index() + 1) % LETTERS.len()]
    }

    /// The letter a step down the cycle, C wrapping to B.
    pub fn previous(self) -> Self {
        LETTERS[(self.cycle_index() + LETTERS.len() - 1) % LETTERS.len()]
    }
}
impl fmt::Display for LetterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The five recognized accidentals.
///
/// Pure names: an accidental carries no semitone offset, only its
/// glyph. Spellings are enumerated per pitch class, not computed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
}
impl Accidental {
    /// Canonical Unicode glyph (the musical symbols, not "#"/"bb").
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Natural => "♮",
            Self::Sharp => "♯",
            Self::Flat => "♭",
            Self::DoubleSharp => "𝄪",
            Self::DoubleFlat => "𝄫",
        }
    }
}
impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// One enharmonic spelling of a pitch class, compared by value.
pub type PitchClassName = (LetterName, Accidental);

#[cfg(test)]
mod tests {
    use super::{Accidental, LetterName, LETTERS};

    #[test]
    fn next_and_previous_invert() {
        for letter in LETTERS {
            assert_eq!(letter.next().previous(), letter);
            assert_eq!(letter.previous().next(), letter);
        }
    }

    #[test]
    fn cycle_closes_after_seven_steps() {
        for letter in LETTERS {
            let mut up = letter;
            let mut down = letter;
            for _ in 0..7 {
                up = up.next();
                down = down.previous();
            }
            assert_eq!(up, letter);
            assert_eq!(down, letter);
        }
    }

    #[test]
    fn glyphs() {
        assert_eq!(Accidental::Natural.glyph(), "♮");
        assert_eq!(Accidental::Sharp.glyph(), "♯");
        assert_eq!(Accidental::Flat.glyph(), "♭");
        assert_eq!(Accidental::DoubleSharp.glyph(), "𝄪");
        assert_eq!(Accidental::DoubleFlat.glyph(), "𝄫");
        assert_eq!(LetterName::G.to_string(), "G");
        assert_eq!(Accidental::Flat.to_string(), "♭");
    }
}
