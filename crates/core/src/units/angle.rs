//! Plane angles normalized to a single turn

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ParseQuantityError;
use crate::format::{write_general, FormatOptions, Quantity};
use crate::parse::{split_literal, unknown_unit};

use super::within;

/// An angle, stored in radians in `[0, 2π)`.
///
/// Every factory and operator wraps into one turn, so `370°` and `10°` are the
/// same value. `==` is tolerance based and takes the short way round the
/// circle; `<` and `>` compare the normalized radians and do not, so `359.5°`
/// is greater than `0.5°` even though they are only a degree apart.
///
/// Ordering is also finer than `==`: two angles inside the tolerance are equal
/// but still order by their raw radians.
///
/// ```
/// use quantities_core::Angle;
///
/// assert!(Angle::from_degrees(370.0).almost_equal(Angle::from_degrees(10.0)));
/// assert!(Angle::from_degrees(359.5) > Angle::from_degrees(0.5));
///
/// let tiny = Angle::from_radians(5e-6);
/// assert!(tiny == Angle::ZERO && tiny > Angle::ZERO);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Angle(f64);

impl Angle {
    /// Tolerance used by `==` and [`Angle::almost_equal`], in radians.
    pub const DEFAULT_TOLERANCE: f64 = 1e-5;

    pub const ZERO: Angle = Angle(0.0);

    /// A quarter turn (90°)
    pub const RIGHT: Angle = Angle(FRAC_PI_2);

    /// A half turn (180°)
    pub const STRAIGHT: Angle = Angle(PI);

    #[inline]
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Angle(normalize(radians))
    }

    #[inline]
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Normalized radians in `[0, 2π)`
    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    /// Normalized degrees in `[0, 360)`
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// True if the shorter arc between the two angles is within
    /// [`Angle::DEFAULT_TOLERANCE`] radians.
    #[inline]
    pub fn almost_equal(self, other: Angle) -> bool {
        self.almost_equal_within(other, Self::DEFAULT_TOLERANCE)
    }

    /// True if the shorter arc between the two angles is within `tolerance` radians.
    pub fn almost_equal_within(self, other: Angle, tolerance: f64) -> bool {
        within(shortest_arc(self.0 - other.0), 0.0, tolerance)
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn tan(self) -> f64 {
        self.0.tan()
    }

    pub fn sinh(self) -> f64 {
        self.0.sinh()
    }

    pub fn cosh(self) -> f64 {
        self.0.cosh()
    }

    pub fn tanh(self) -> f64 {
        self.0.tanh()
    }

    /// The angle whose sine is `ratio`.
    pub fn asin(ratio: f64) -> Self {
        Self::from_radians(ratio.asin())
    }

    /// The angle whose cosine is `ratio`.
    pub fn acos(ratio: f64) -> Self {
        Self::from_radians(ratio.acos())
    }

    /// The angle whose tangent is `ratio`.
    pub fn atan(ratio: f64) -> Self {
        Self::from_radians(ratio.atan())
    }

    /// The angle of the point `(x, y)` measured from the positive x axis.
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_radians(y.atan2(x))
    }

    pub fn asinh(value: f64) -> Self {
        Self::from_radians(value.asinh())
    }

    pub fn acosh(value: f64) -> Self {
        Self::from_radians(value.acosh())
    }

    pub fn atanh(value: f64) -> Self {
        Self::from_radians(value.atanh())
    }
}

/// Wrap radians into `[0, 2π)`. Non-finite input becomes `NaN`.
#[inline]
fn normalize(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Signed difference in `(-π, π]`.
#[inline]
fn shortest_arc(difference: f64) -> f64 {
    let wrapped = normalize(difference);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.almost_equal(*other)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::from_radians(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle::from_radians(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        Angle::from_radians(self * rhs.0)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle {
        Angle::from_radians(self.0 / rhs)
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Angle::from_radians)
    }
}

/// Output unit for [`Angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleFormat {
    /// Degrees with a `_deg` suffix
    #[default]
    Auto,
    Radians,
    Degrees,
}

impl Quantity for Angle {
    type Format = AngleFormat;

    fn select_format(options: &FormatOptions) -> AngleFormat {
        options.angle
    }

    fn write_formatted(
        &self,
        f: &mut fmt::Formatter<'_>,
        format: AngleFormat,
        digits: usize,
    ) -> fmt::Result {
        match format {
            AngleFormat::Radians => write_general(f, self.radians(), digits),
            AngleFormat::Degrees => write_general(f, self.degrees(), digits),
            AngleFormat::Auto => {
                write_general(f, self.degrees(), digits)?;
                f.write_str("_deg")
            }
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_as(AngleFormat::Auto), f)
    }
}

impl FromStr for Angle {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_literal(s)?;
        match unit {
            "deg" | "degrees" => Ok(Angle::from_degrees(value)),
            "rad" | "radians" => Ok(Angle::from_radians(value)),
            _ => Err(unknown_unit("angle", unit)),
        }
    }
}
