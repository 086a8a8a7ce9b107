//! Explicit output formatting for quantities
//!
//! Every value type prints in a unit chosen by a small mode enum passed at
//! the call site, never by state hidden on the writer. The bare `Display`
//! impl of a value is its `Auto` mode:
//!
//! ```
//! use quantities_core::{Frequency, FrequencyFormat, Quantity};
//!
//! let a4 = Frequency::from_midi_note(69.0);
//! assert_eq!(a4.to_string(), "440_hz");
//! assert_eq!(a4.display_as(FrequencyFormat::Midi).to_string(), "69");
//! ```
//!
//! Numbers are written in general notation with [`DEFAULT_SIGNIFICANT_DIGITS`]
//! significant digits, so round-off noise such as `98.60000000000001` prints
//! as `98.6`. A formatter precision (`{:.3}`) overrides the digit count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::{AngleFormat, FrequencyFormat, IntervalFormat, TemperatureFormat};

/// Significant digits written when neither the options nor the formatter ask for more.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Most significant digits an `f64` carries; larger requests are clamped.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// A unit-safe value that can be written in one of several units.
pub trait Quantity: Copy {
    /// Mode selector for this quantity's output unit.
    type Format: Copy + Default + fmt::Debug;

    /// Pick this quantity's mode out of a full set of options.
    fn select_format(options: &FormatOptions) -> Self::Format;

    /// Write the value in the unit selected by `format`, using `digits`
    /// significant digits.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    fn write_formatted(
        &self,
        f: &mut fmt::Formatter<'_>,
        format: Self::Format,
        digits: usize,
    ) -> fmt::Result;

    /// Wrap the value so that `Display` writes it in the given mode.
    #[inline]
    fn display_as(self, format: Self::Format) -> Formatted<Self> {
        Formatted {
            value: self,
            format,
            digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

/// A quantity paired with the mode it should be written in.
#[derive(Debug, Clone, Copy)]
pub struct Formatted<T: Quantity> {
    value: T,
    format: T::Format,
    digits: usize,
}

impl<T: Quantity> Formatted<T> {
    /// Use `digits` significant digits instead of the default.
    #[must_use]
    pub fn with_significant_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// The wrapped value.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Quantity> fmt::Display for Formatted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(self.digits);
        self.value.write_formatted(f, self.format, digits)
    }
}

/// Output units for every quantity type, plus the number of significant digits.
///
/// Deserializes from any serde format; missing fields fall back to the defaults
/// (every mode `auto`, six significant digits).
///
/// ```
/// use quantities_core::{FormatOptions, FrequencyFormat, Interval, IntervalFormat};
///
/// let options = FormatOptions {
///     interval: IntervalFormat::Cents,
///     ..FormatOptions::default()
/// };
/// assert_eq!(options.display(Interval::from_semitones(1.5)).to_string(), "150");
/// assert_eq!(options.frequency, FrequencyFormat::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub angle: AngleFormat,
    pub interval: IntervalFormat,
    pub frequency: FrequencyFormat,
    pub temperature: TemperatureFormat,
    pub significant_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            angle: AngleFormat::default(),
            interval: IntervalFormat::default(),
            frequency: FrequencyFormat::default(),
            temperature: TemperatureFormat::default(),
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl FormatOptions {
    /// Wrap `value` so that it is written in the mode these options select for its type.
    pub fn display<T: Quantity>(&self, value: T) -> Formatted<T> {
        value
            .display_as(T::select_format(self))
            .with_significant_digits(self.significant_digits)
    }
}

/// Write `value` in general notation with `digits` significant digits.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub(crate) fn write_general(f: &mut fmt::Formatter<'_>, value: f64, digits: usize) -> fmt::Result {
    f.write_str(&general(value, digits))
}

/// Render like printf `%g`: fixed notation for exponents in `[-4, digits)`,
/// scientific otherwise, trailing zeros trimmed in both. `digits` is clamped
/// to `1..=MAX_SIGNIFICANT_DIGITS`.
pub(crate) fn general(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
