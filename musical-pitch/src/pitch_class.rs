//! Pitch classes: the 12 residues of pitch modulo one octave.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::note_name::{Accidental, LetterName, PitchClassName};

/// One of the 12 equal-tempered pitch classes, identified by index
/// (0 = C .. 11 = B).
///
/// The index bound is not enforced: an out-of-range class is
/// representable but names nothing, so [`PitchClass::names`] returns
/// the empty slice for it. Callers that want a non-empty spelling set
/// must stay within 0–11.
///
/// ```
/// use musical_pitch::{Accidental, LetterName, PitchClass};
///
/// let c = PitchClass::new(0);
/// assert!(c.has_name((LetterName::B, Accidental::Sharp)));
/// assert_eq!(c.to_string(), "C♮");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchClass {
    index: u32,
}
impl PitchClass {
    pub fn new(index: u32) -> Self {
        Self { index }
    }
    pub fn index(self) -> u32 {
        self.index
    }

    /// Canonical spellings in priority order: the flat-side spelling
    /// before the sharp-side one where both exist, naturals alone for
    /// 2, 4, 7 and 9, and the unusual B♯/C♭ spellings second on 0
    /// and 11.
    ///
    /// Standard tonal spelling is an irregular convention in which
    /// not every letter+accidental pair occurs, so the table is
    /// enumerated rather than computed from semitone offsets.
    pub fn names(self) -> &'static [PitchClassName] {
        use Accidental::*;
        use LetterName::*;
        match self.index {
            0 => &[(C, Natural), (B, Sharp)],
            1 => &[(D, Flat), (C, Sharp)],
            2 => &[(D, Natural)],
            3 => &[(E, Flat), (D, Sharp)],
            4 => &[(E, Natural)],
            5 => &[(F, Natural), (E, Sharp)],
            6 => &[(F, Sharp), (G, Flat)],
            7 => &[(G, Natural)],
            8 => &[(A, Flat), (G, Sharp)],
            9 => &[(A, Natural)],
            10 => &[(B, Flat), (A, Sharp)],
            11 => &[(B, Natural), (C, Flat)],
            _ => &[],
        }
    }

    /// Whether `name` is one of this class's standard spellings. The
    /// validation gate behind [`crate::Pitch::set_preferred_name`].
    pub fn has_name(self, name: PitchClassName) -> bool {
        self.names().contains(&name)
    }
}

/// The first spelling with its accidental glyph, "C♮"-style; empty
/// for an out-of-range index.
impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.names().first() {
            Some((letter, accidental)) => {
                write!(f, "{letter}{accidental}")
            }
            None => Ok(()),
        }
    }
}
