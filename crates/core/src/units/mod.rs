//! Unit-safe scalar quantities
//!
//! Each type stores one canonical `f64` (radians, semitones, hertz, kelvin) and
//! converts on the way in and out, so mixing units is a type error rather
//! than a silent bug.

pub mod angle;
pub mod frequency;
pub mod interval;
pub mod temperature;

pub use angle::{Angle, AngleFormat};
pub use frequency::{Frequency, FrequencyFormat, Period, Pitch};
pub use interval::{Interval, IntervalFormat};
pub use temperature::{Temperature, TemperatureFormat};

/// `|a - b| <= |tolerance|`
#[inline]
fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance.abs()
}
