//! Thermodynamic temperatures

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseQuantityError;
use crate::format::{write_general, FormatOptions, Quantity};
use crate::parse::{split_literal, unknown_unit};

use super::within;

const FREEZING_F: f64 = 32.0;
const BOILING_F: f64 = 212.0;
const FREEZING_C: f64 = 0.0;
const BOILING_C: f64 = 100.0;
const FREEZING_K: f64 = 273.15;
const BOILING_K: f64 = FREEZING_K + (BOILING_C - FREEZING_C);
const BODY_TEMP_C: f64 = 37.0;

/// Kelvin per degree Fahrenheit (5/9), from the two water fixed points
const FK_FACTOR: f64 = (BOILING_K - FREEZING_K) / (BOILING_F - FREEZING_F);
/// Degrees Fahrenheit per kelvin (9/5)
const KF_FACTOR: f64 = (BOILING_F - FREEZING_F) / (BOILING_K - FREEZING_K);

#[inline]
fn c_to_k(celsius: f64) -> f64 {
    celsius + (FREEZING_K - FREEZING_C)
}

#[inline]
fn k_to_c(kelvin: f64) -> f64 {
    kelvin + (FREEZING_C - FREEZING_K)
}

#[inline]
fn f_to_k(fahrenheit: f64) -> f64 {
    (fahrenheit - FREEZING_F) * FK_FACTOR + FREEZING_K
}

#[inline]
fn k_to_f(kelvin: f64) -> f64 {
    (kelvin - FREEZING_K) * KF_FACTOR + FREEZING_F
}

/// A temperature, stored in kelvin.
///
/// The type does not clamp at absolute zero. `==` is tolerance based
/// ([`Temperature::DEFAULT_TOLERANCE`] kelvin); `<` and `>` compare the raw
/// kelvin, so ordering is finer than `==` and two equal temperatures can still
/// be ordered.
///
/// Deltas are applied with the `plus_*`/`minus_*` methods. A Fahrenheit delta
/// is a difference and is scaled by 5/9, never offset by 32:
///
/// ```
/// use quantities_core::Temperature;
///
/// assert!(Temperature::FREEZING.plus_fahrenheit(180.0).almost_equal(Temperature::BOILING));
/// assert!(Temperature::from_celsius(37.0).almost_equal(Temperature::from_fahrenheit(98.6)));
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Tolerance used by `==` and [`Temperature::almost_equal`], in kelvin.
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;

    pub const ABSOLUTE_ZERO: Temperature = Temperature(0.0);

    /// Water freezing point at 1 atm
    pub const FREEZING: Temperature = Temperature(FREEZING_K);

    /// Water boiling point at 1 atm
    pub const BOILING: Temperature = Temperature(BOILING_K);

    /// Nominal human body temperature, 37 °C
    pub const BODY_TEMP: Temperature = Temperature(BODY_TEMP_C + (FREEZING_K - FREEZING_C));

    #[inline]
    #[must_use]
    pub const fn from_kelvin(kelvin: f64) -> Self {
        Temperature(kelvin)
    }

    #[inline]
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Temperature(c_to_k(celsius))
    }

    #[inline]
    #[must_use]
    pub fn from_centigrade(centigrade: f64) -> Self {
        Self::from_celsius(centigrade)
    }

    #[inline]
    #[must_use]
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        Temperature(f_to_k(fahrenheit))
    }

    #[inline]
    pub fn kelvin(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn celsius(self) -> f64 {
        k_to_c(self.0)
    }

    #[inline]
    pub fn centigrade(self) -> f64 {
        k_to_c(self.0)
    }

    #[inline]
    pub fn fahrenheit(self) -> f64 {
        k_to_f(self.0)
    }

    #[must_use]
    pub fn plus_kelvin(self, kelvin: f64) -> Self {
        Temperature(self.0 + kelvin)
    }

    #[must_use]
    pub fn plus_celsius(self, celsius: f64) -> Self {
        self.plus_kelvin(celsius)
    }

    #[must_use]
    pub fn plus_centigrade(self, centigrade: f64) -> Self {
        self.plus_kelvin(centigrade)
    }

    /// Raise by a Fahrenheit difference (scaled by 5/9).
    #[must_use]
    pub fn plus_fahrenheit(self, fahrenheit: f64) -> Self {
        self.plus_kelvin(fahrenheit * FK_FACTOR)
    }

    #[must_use]
    pub fn minus_kelvin(self, kelvin: f64) -> Self {
        self.plus_kelvin(-kelvin)
    }

    #[must_use]
    pub fn minus_celsius(self, celsius: f64) -> Self {
        self.minus_kelvin(celsius)
    }

    #[must_use]
    pub fn minus_centigrade(self, centigrade: f64) -> Self {
        self.minus_kelvin(centigrade)
    }

    /// Lower by a Fahrenheit difference (scaled by 5/9).
    #[must_use]
    pub fn minus_fahrenheit(self, fahrenheit: f64) -> Self {
        self.plus_fahrenheit(-fahrenheit)
    }

    /// True if the temperatures differ by at most [`Temperature::DEFAULT_TOLERANCE`] kelvin.
    #[inline]
    pub fn almost_equal(self, other: Temperature) -> bool {
        self.almost_equal_within(other, Self::DEFAULT_TOLERANCE)
    }

    /// True if the temperatures differ by at most `tolerance` kelvin.
    #[inline]
    pub fn almost_equal_within(self, other: Temperature, tolerance: f64) -> bool {
        within(self.0, other.0, tolerance)
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.almost_equal(*other)
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Output unit for [`Temperature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureFormat {
    /// Kelvin with a `_kelvin` suffix
    #[default]
    Auto,
    Kelvin,
    #[serde(alias = "centigrade")]
    Celsius,
    Fahrenheit,
}

impl TemperatureFormat {
    pub const CENTIGRADE: TemperatureFormat = TemperatureFormat::Celsius;
}

impl Quantity for Temperature {
    type Format = TemperatureFormat;

    fn select_format(options: &FormatOptions) -> TemperatureFormat {
        options.temperature
    }

    fn write_formatted(
        &self,
        f: &mut fmt::Formatter<'_>,
        format: TemperatureFormat,
        digits: usize,
    ) -> fmt::Result {
        match format {
            TemperatureFormat::Kelvin => write_general(f, self.kelvin(), digits),
            TemperatureFormat::Celsius => write_general(f, self.celsius(), digits),
            TemperatureFormat::Fahrenheit => write_general(f, self.fahrenheit(), digits),
            TemperatureFormat::Auto => {
                write_general(f, self.kelvin(), digits)?;
                f.write_str("_kelvin")
            }
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_as(TemperatureFormat::Auto), f)
    }
}

impl FromStr for Temperature {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_literal(s)?;
        match unit {
            "kelvin" | "K" => Ok(Temperature::from_kelvin(value)),
            "celsius" | "C" => Ok(Temperature::from_celsius(value)),
            "centigrade" => Ok(Temperature::from_centigrade(value)),
            "fahrenheit" | "F" => Ok(Temperature::from_fahrenheit(value)),
            _ => Err(unknown_unit("temperature", unit)),
        }
    }
}
