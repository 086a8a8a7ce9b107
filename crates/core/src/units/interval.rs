//! Pitch intervals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ParseQuantityError;
use crate::format::{write_general, FormatOptions, Quantity};
use crate::parse::{split_literal, unknown_unit};

use super::within;

const SEMITONES_PER_OCTAVE: f64 = 12.0;
const CENTS_PER_SEMITONE: f64 = 100.0;

/// A pitch interval, stored as a signed number of semitones.
///
/// Negative intervals are descending; nothing is normalized, so twelve
/// semitones is an octave and not a unison. `==` is exact; use
/// [`Interval::almost_equal`] to compare with a tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Interval(f64);

impl Interval {
    /// Tolerance used by [`Interval::almost_equal`], in semitones.
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;

    pub const UNISON: Interval = Interval(0.0);
    pub const HALF_STEP: Interval = Interval(1.0);
    pub const WHOLE_STEP: Interval = Interval(2.0);
    pub const MAJOR_SECOND: Interval = Self::WHOLE_STEP;
    pub const MINOR_THIRD: Interval = Interval(3.0);
    pub const MAJOR_THIRD: Interval = Interval(4.0);
    pub const FOURTH: Interval = Interval(5.0);
    pub const PERFECT_FOURTH: Interval = Self::FOURTH;
    pub const TRITONE: Interval = Interval(6.0);
    pub const AUGMENTED_FOURTH: Interval = Self::TRITONE;
    pub const DIMINISHED_FIFTH: Interval = Self::TRITONE;
    pub const FIFTH: Interval = Interval(7.0);
    pub const PERFECT_FIFTH: Interval = Self::FIFTH;
    pub const MINOR_SIXTH: Interval = Interval(8.0);
    pub const MAJOR_SIXTH: Interval = Interval(9.0);
    pub const MINOR_SEVENTH: Interval = Interval(10.0);
    pub const MAJOR_SEVENTH: Interval = Interval(11.0);
    pub const OCTAVE: Interval = Interval(12.0);
    pub const MINOR_NINTH: Interval = Interval(13.0);
    pub const MAJOR_NINTH: Interval = Interval(14.0);
    pub const MINOR_TENTH: Interval = Interval(15.0);
    pub const MAJOR_TENTH: Interval = Interval(16.0);

    #[inline]
    #[must_use]
    pub const fn from_semitones(semitones: f64) -> Self {
        Interval(semitones)
    }

    #[inline]
    #[must_use]
    pub fn from_cents(cents: f64) -> Self {
        Interval(cents / CENTS_PER_SEMITONE)
    }

    #[inline]
    #[must_use]
    pub fn from_octaves(octaves: f64) -> Self {
        Interval(octaves * SEMITONES_PER_OCTAVE)
    }

    /// The interval between two frequencies whose ratio is `ratio`
    /// (2.0 is an octave up, 0.5 an octave down).
    #[inline]
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Interval(SEMITONES_PER_OCTAVE * ratio.log2())
    }

    #[inline]
    pub fn semitones(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn cents(self) -> f64 {
        self.0 * CENTS_PER_SEMITONE
    }

    #[inline]
    pub fn octaves(self) -> f64 {
        self.0 / SEMITONES_PER_OCTAVE
    }

    /// Frequency ratio spanned by this interval.
    #[inline]
    pub fn ratio(self) -> f64 {
        self.octaves().exp2()
    }

    /// True if the intervals differ by at most [`Interval::DEFAULT_TOLERANCE`] semitones.
    #[inline]
    pub fn almost_equal(self, other: Interval) -> bool {
        self.almost_equal_within(other, Self::DEFAULT_TOLERANCE)
    }

    /// True if the intervals differ by at most `tolerance` semitones.
    #[inline]
    pub fn almost_equal_within(self, other: Interval, tolerance: f64) -> bool {
        within(self.0, other.0, tolerance)
    }
}

impl Add for Interval {
    type Output = Interval;
    fn add(self, rhs: Interval) -> Interval {
        Interval(self.0 + rhs.0)
    }
}

impl Sub for Interval {
    type Output = Interval;
    fn sub(self, rhs: Interval) -> Interval {
        Interval(self.0 - rhs.0)
    }
}

impl Neg for Interval {
    type Output = Interval;
    fn neg(self) -> Interval {
        Interval(-self.0)
    }
}

impl Mul<f64> for Interval {
    type Output = Interval;
    fn mul(self, rhs: f64) -> Interval {
        Interval(self.0 * rhs)
    }
}

impl Mul<Interval> for f64 {
    type Output = Interval;
    fn mul(self, rhs: Interval) -> Interval {
        Interval(self * rhs.0)
    }
}

impl Div<f64> for Interval {
    type Output = Interval;
    fn div(self, rhs: f64) -> Interval {
        Interval(self.0 / rhs)
    }
}

/// Output unit for [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalFormat {
    /// Octaves from one octave up, semitones from one semitone up, cents below
    /// that, each with its unit suffix
    #[default]
    Auto,
    Semitones,
    Cents,
    Octaves,
}

impl Quantity for Interval {
    type Format = IntervalFormat;

    fn select_format(options: &FormatOptions) -> IntervalFormat {
        options.interval
    }

    fn write_formatted(
        &self,
        f: &mut fmt::Formatter<'_>,
        format: IntervalFormat,
        digits: usize,
    ) -> fmt::Result {
        match format {
            IntervalFormat::Semitones => write_general(f, self.semitones(), digits),
            IntervalFormat::Cents => write_general(f, self.cents(), digits),
            IntervalFormat::Octaves => write_general(f, self.octaves(), digits),
            IntervalFormat::Auto => {
                let size = self.0.abs();
                if size >= SEMITONES_PER_OCTAVE {
                    write_general(f, self.octaves(), digits)?;
                    f.write_str("_octaves")
                } else if size >= 1.0 {
                    write_general(f, self.semitones(), digits)?;
                    f.write_str("_semitones")
                } else {
                    write_general(f, self.cents(), digits)?;
                    f.write_str("_cents")
                }
            }
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_as(IntervalFormat::Auto), f)
    }
}

impl FromStr for Interval {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_literal(s)?;
        match unit {
            "semitones" | "semitone" => Ok(Interval::from_semitones(value)),
            "cents" | "cent" => Ok(Interval::from_cents(value)),
            "octaves" | "octave" => Ok(Interval::from_octaves(value)),
            _ => Err(unknown_unit("interval", unit)),
        }
    }
}
