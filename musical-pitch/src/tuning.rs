//! Process-wide tuning configuration.
//!
//! Every MIDI↔frequency conversion reads one reference: the frequency
//! of concert A (MIDI 69). It may be configured once at startup via
//! [`set_concert_a`]; the first read pins the value for the rest of
//! the process, so all conversions observe the same tuning.

use once_cell::sync::OnceCell;
use thiserror::Error;

/// Standard concert pitch: A4 = 440 Hz.
pub const DEFAULT_CONCERT_A: f64 = 440.0;

static CONCERT_A: OnceCell<f64> = OnceCell::new();

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("concert A is already pinned to {0}Hz")]
    AlreadySet(f64),
    #[error("unusable reference frequency: {0}Hz")]
    OutOfRange(f64),
}

/// Frequency of A4 (MIDI 69) in Hz.
pub fn concert_a() -> f64 {
    *CONCERT_A.get_or_init(|| DEFAULT_CONCERT_A)
}

/// Configure the concert-A reference, before any conversion runs.
///
/// Fails once a value is pinned, whether by an earlier set or by the
/// first read falling back to [`DEFAULT_CONCERT_A`]. One process
/// never computes against two tunings.
pub fn set_concert_a(hz: f64) -> Result<(), TuningError> {
    if !hz.is_finite() || hz <= 0.0 {
        return Err(TuningError::OutOfRange(hz));
    }
    CONCERT_A
        .set(hz)
        .map_err(|_| TuningError::AlreadySet(concert_a()))
}
