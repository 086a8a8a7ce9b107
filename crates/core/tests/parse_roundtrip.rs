//! Reading quantity literals back from their printed form
mod common;

use quantities_core::{Angle, Frequency, Interval, ParseQuantityError, Temperature};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

fn reparse<T>(value: T) -> T
where
    T: std::fmt::Display + FromStr<Err = ParseQuantityError>,
{
    let printed = format!("{:.15}", value);
    printed
        .parse()
        .unwrap_or_else(|err| panic!("failed to reparse '{printed}': {err}"))
}

#[test]
fn test_auto_output_parses_back() {
    assert_eq!("90_deg".parse::<Angle>().unwrap(), Angle::RIGHT);
    assert_eq!("7_semitones".parse::<Interval>().unwrap(), Interval::FIFTH);
    assert_eq!("1.5_octaves".parse::<Interval>().unwrap(), Interval::from_semitones(18.0));
    assert_eq!("-25_cents".parse::<Interval>().unwrap(), Interval::from_cents(-25.0));
    assert_eq!("440_hz".parse::<Frequency>().unwrap(), Frequency::CONCERT_PITCH);
    assert_eq!("1e+06_hz".parse::<Frequency>().unwrap().hertz(), 1e6);
    assert_eq!("273.15_kelvin".parse::<Temperature>().unwrap(), Temperature::FREEZING);
}

#[test]
fn test_default_display_round_trips_for_named_values() {
    for angle in [Angle::ZERO, Angle::RIGHT, Angle::STRAIGHT, Angle::from_degrees(45.0)] {
        assert!(angle.to_string().parse::<Angle>().unwrap().almost_equal(angle));
    }
    for interval in [
        Interval::UNISON,
        Interval::TRITONE,
        Interval::OCTAVE,
        -Interval::MAJOR_TENTH,
    ] {
        assert!(interval
            .to_string()
            .parse::<Interval>()
            .unwrap()
            .almost_equal(interval));
    }
    for temperature in [Temperature::ABSOLUTE_ZERO, Temperature::BOILING, Temperature::BODY_TEMP] {
        assert_eq!(temperature.to_string().parse::<Temperature>().unwrap(), temperature);
    }
    for pitch in [
        Frequency::CONCERT_PITCH,
        Frequency::AUDIO_CD_SAMPLE_RATE,
        Frequency::from_hertz(27.5),
    ] {
        assert!(pitch.to_string().parse::<Frequency>().unwrap().almost_equal(pitch));
    }
}

#[test]
fn test_sampled_values_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let angle = Angle::from_radians(rng.random_range(-10.0..10.0));
        assert!(reparse(angle).almost_equal(angle), "{angle:?}");

        let interval = Interval::from_semitones(rng.random_range(-40.0..40.0));
        assert!(reparse(interval).almost_equal(interval), "{interval:?}");

        let frequency = Frequency::from_hertz(rng.random_range(1.0..50_000.0));
        assert!(reparse(frequency).almost_equal(frequency), "{frequency:?}");

        let temperature = Temperature::from_kelvin(rng.random_range(0.0..5000.0));
        assert_eq!(reparse(temperature), temperature);
    }
}

#[test]
fn test_alternate_units() {
    assert!("3.141592653589793 rad"
        .parse::<Angle>()
        .unwrap()
        .almost_equal(Angle::STRAIGHT));
    assert!("4_secper"
        .parse::<Frequency>()
        .unwrap()
        .almost_equal(Frequency::from_hertz(0.25)));
    assert!("60_midi"
        .parse::<Frequency>()
        .unwrap()
        .almost_equal(Frequency::from_midi_note(60.0)));
    assert_eq!(
        "-40_fahrenheit".parse::<Temperature>().unwrap(),
        Temperature::from_celsius(-40.0)
    );
}

#[test]
fn test_errors_name_the_problem() {
    assert_eq!("".parse::<Angle>(), Err(ParseQuantityError::Empty));
    assert!(matches!(
        "12".parse::<Interval>(),
        Err(ParseQuantityError::MissingUnit { .. })
    ));
    assert!(matches!(
        "loud_hz".parse::<Frequency>(),
        Err(ParseQuantityError::InvalidNumber { .. })
    ));

    let err = "5_rankine".parse::<Temperature>().unwrap_err();
    assert_eq!(err.to_string(), "unknown temperature unit 'rankine'");
}
