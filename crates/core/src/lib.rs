//! Unit-safe scalar quantities
//!
//! Strongly typed wrappers for angles, pitch intervals, frequencies and
//! temperatures. Each value keeps one canonical `f64` and offers factories
//! and accessors for the other units, so a radian is never mistaken for a
//! degree or a hertz for a MIDI note.
//!
//! ## Modules
//!
//! - [`units`]: the four quantity types and their arithmetic
//! - [`format`]: explicit output modes and general-notation number printing
//! - [`buffer`]: interleaved multichannel sample storage
//! - [`strings`]: token split and join helpers
//! - [`error`]: parse failures for `<number>_<unit>` literals
//!
//! ```
//! use quantities_core::{Frequency, Interval, Temperature};
//!
//! let a4: Frequency = "440_hz".parse().unwrap();
//! let e5 = a4 + Interval::FIFTH;
//! assert!(e5.almost_equal(Frequency::from_midi_note(76.0)));
//! assert_eq!(Temperature::BODY_TEMP.to_string(), "310.15_kelvin");
//! ```

pub mod buffer;
pub mod error;
pub mod format;
mod parse;
pub mod strings;
pub mod units;

pub use buffer::AudioBuffer;
pub use error::ParseQuantityError;
pub use format::{
    FormatOptions, Formatted, Quantity, DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS,
};
pub use units::{
    Angle, AngleFormat, Frequency, FrequencyFormat, Interval, IntervalFormat, Period, Pitch,
    Temperature, TemperatureFormat,
};
