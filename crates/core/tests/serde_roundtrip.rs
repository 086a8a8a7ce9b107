//! Serialization of quantities and of `FormatOptions`
mod common;

use quantities_core::{
    Angle, AngleFormat, FormatOptions, Frequency, FrequencyFormat, Interval, IntervalFormat,
    Temperature, TemperatureFormat, DEFAULT_SIGNIFICANT_DIGITS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct TuningSession {
    reference: Frequency,
    transpose: Interval,
    room: Temperature,
    bridge_angle: Angle,
}

#[test]
fn test_quantities_serialize_as_canonical_numbers() {
    assert_eq!(serde_json::to_string(&Frequency::CONCERT_PITCH).unwrap(), "440.0");
    assert_eq!(serde_json::to_string(&Interval::FIFTH).unwrap(), "7.0");
    assert_eq!(serde_json::to_string(&Temperature::ABSOLUTE_ZERO).unwrap(), "0.0");
    assert_eq!(
        serde_json::to_string(&Angle::STRAIGHT).unwrap(),
        std::f64::consts::PI.to_string()
    );
}

#[test]
fn test_struct_round_trip() {
    let session = TuningSession {
        reference: Frequency::from_hertz(442.0),
        transpose: -Interval::MINOR_THIRD,
        room: Temperature::from_celsius(21.5),
        bridge_angle: Angle::from_degrees(12.0),
    };

    let json = serde_json::to_string(&session).unwrap();
    let back: TuningSession = serde_json::from_str(&json).unwrap();

    assert_eq!(back.reference, session.reference);
    assert_eq!(back.transpose, session.transpose);
    assert_eq!(back.room, session.room);
    assert_eq!(back.bridge_angle, session.bridge_angle);
}

#[test]
fn test_deserialize_restores_invariants() {
    let session: TuningSession = serde_json::from_str(
        r#"{"reference": -220.0, "transpose": 24.0, "room": 293.15, "bridge_angle": 7.0}"#,
    )
    .unwrap();

    assert_eq!(session.reference.hertz(), 220.0);
    assert!(session.bridge_angle.radians() < std::f64::consts::TAU);
    assert!(session
        .bridge_angle
        .almost_equal(Angle::from_radians(7.0 - std::f64::consts::TAU)));
    assert_eq!(session.transpose.octaves(), 2.0);
    assert!(session.room.almost_equal(Temperature::from_celsius(20.0)));
}

#[test]
fn test_format_options_defaults() {
    let options: FormatOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, FormatOptions::default());
    assert_eq!(options.angle, AngleFormat::Auto);
    assert_eq!(options.significant_digits, DEFAULT_SIGNIFICANT_DIGITS);
}

#[test]
fn test_format_options_from_json() {
    let options: FormatOptions = serde_json::from_str(
        r#"{
            "angle": "radians",
            "interval": "octaves",
            "frequency": "period_sec",
            "temperature": "fahrenheit",
            "significant_digits": 4
        }"#,
    )
    .unwrap();

    assert_eq!(options.angle, AngleFormat::Radians);
    assert_eq!(options.interval, IntervalFormat::Octaves);
    assert_eq!(options.frequency, FrequencyFormat::PeriodSec);
    assert_eq!(options.temperature, TemperatureFormat::Fahrenheit);
    assert_eq!(options.display(Frequency::from_hertz(3.0)).to_string(), "0.3333");
}

#[test]
fn test_format_options_round_trip_and_rejects_unknown_modes() {
    let options = FormatOptions {
        temperature: TemperatureFormat::CENTIGRADE,
        ..FormatOptions::default()
    };
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains(r#""temperature":"celsius""#), "{json}");
    assert_eq!(serde_json::from_str::<FormatOptions>(&json).unwrap(), options);

    assert!(serde_json::from_str::<FormatOptions>(r#"{"angle": "gradians"}"#).is_err());
}
