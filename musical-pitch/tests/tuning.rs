//! Runs in its own process: pinning concert A here cannot leak into
//! the other test binaries.

use musical_pitch::{
    concert_a, set_concert_a, Pitch, TuningError,
};

#[test]
fn configured_tuning_drives_every_conversion() {
    env_logger::init();

    set_concert_a(432.0).unwrap();
    assert_eq!(concert_a(), 432.0);
    assert!((Pitch::mtof(69.0) - 432.0).abs() < 1e-9);
    assert_eq!(Pitch::from_frequency(432.0).note_name(), "A4");
    assert!(
        (Pitch::from_midi(57.0).frequency() - 216.0).abs() < 1e-9
    );

    // One tuning per process: a second configuration is refused.
    assert_eq!(
        set_concert_a(440.0),
        Err(TuningError::AlreadySet(432.0))
    );
    assert!(matches!(
        set_concert_a(-1.0),
        Err(TuningError::OutOfRange(_))
    ));
    assert_eq!(concert_a(), 432.0);
}
