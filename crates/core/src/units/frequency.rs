//! Frequencies, pitches and periods

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;
use std::time::Duration;

use crate::error::ParseQuantityError;
use crate::format::{write_general, FormatOptions, Quantity};
use crate::parse::{split_literal, unknown_unit};

use super::Interval;

/// A4, the MIDI reference note
const REFERENCE_NOTE: f64 = 69.0;
const REFERENCE_HZ: f64 = 440.0;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// A frequency, stored in hertz and never negative.
///
/// The same value doubles as a pitch (via MIDI note numbers and
/// [`Interval`] transposition) and as a period (its reciprocal). Every
/// factory folds its input to the absolute value, so a "negative frequency"
/// is simply the positive one.
///
/// `==` is exact. [`Frequency::almost_equal`] decides sameness the way a
/// listener would: by beat rate below [`Frequency::CROSSOVER_HZ`], by
/// interval above it.
///
/// ```
/// use quantities_core::{Frequency, Interval};
///
/// let a4 = Frequency::from_midi_note(69.0);
/// assert!(a4.almost_equal(Frequency::from_hertz(440.0)));
/// assert!((a4 - Interval::OCTAVE).almost_equal(Frequency::from_hertz(220.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Frequency(f64);

/// A [`Frequency`] read as a musical pitch.
pub type Pitch = Frequency;

/// A [`Frequency`] read as a cycle length.
pub type Period = Frequency;

impl Frequency {
    /// Tolerance used by [`Frequency::zerobeat`], in hertz.
    pub const DEFAULT_BEAT_TOLERANCE_HZ: f64 = 1e-3;

    /// Tolerance used by [`Frequency::in_unison`], in semitones.
    pub const DEFAULT_UNISON_TOLERANCE: f64 = Interval::DEFAULT_TOLERANCE;

    /// Below this frequency [`Frequency::almost_equal`] compares beat rate,
    /// at or above it the interval between the two pitches.
    pub const CROSSOVER_HZ: f64 = 88.0;

    /// Modern concert pitch, A440.
    pub const CONCERT_PITCH: Frequency = Frequency(REFERENCE_HZ);

    /// Red Book audio CD sample rate.
    pub const AUDIO_CD_SAMPLE_RATE: Frequency = Frequency(44_100.0);

    #[inline]
    #[must_use]
    pub fn from_hertz(hertz: f64) -> Self {
        Frequency(hertz.abs())
    }

    /// The frequency whose cycle lasts `period` seconds.
    #[inline]
    #[must_use]
    pub fn from_period_sec(period: f64) -> Self {
        Self::from_hertz(1.0 / period)
    }

    /// The frequency whose cycle lasts `period`.
    #[inline]
    #[must_use]
    pub fn from_period(period: Duration) -> Self {
        Self::from_period_sec(period.as_secs_f64())
    }

    /// The frequency of a (possibly fractional) MIDI note number, with note 69 at 440 Hz.
    #[must_use]
    pub fn from_midi_note(note: f64) -> Self {
        Self::from_hertz(REFERENCE_HZ * Interval::from_semitones(note - REFERENCE_NOTE).ratio())
    }

    #[inline]
    pub fn hertz(self) -> f64 {
        self.0
    }

    /// Cycle length in seconds.
    #[inline]
    pub fn period_sec(self) -> f64 {
        1.0 / self.0
    }

    /// Cycle length rounded to the nearest nanosecond.
    ///
    /// 0 Hz has no finite period and saturates to `u64::MAX` nanoseconds.
    pub fn period(self) -> Duration {
        let nanos = (self.period_sec() * NANOS_PER_SECOND).round();
        Duration::from_nanos(nanos as u64)
    }

    /// Fractional MIDI note number.
    pub fn midi_note(self) -> f64 {
        REFERENCE_NOTE + self.interval(Self::CONCERT_PITCH).semitones()
    }

    /// The interval from `other` up to this frequency.
    pub fn interval(self, other: Frequency) -> Interval {
        Interval::from_ratio(self.ratio(other))
    }

    /// `self / other` in hertz.
    #[inline]
    pub fn ratio(self, other: Frequency) -> f64 {
        self.0 / other.0
    }

    /// `self / other` in periods, the reciprocal of [`Frequency::ratio`].
    #[inline]
    pub fn period_ratio(self, other: Frequency) -> f64 {
        other.0 / self.0
    }

    /// The difference tone between the two frequencies.
    #[inline]
    pub fn beat_frequency(self, other: Frequency) -> Frequency {
        Self::from_hertz(self.0 - other.0)
    }

    #[must_use]
    pub fn plus_interval(self, interval: Interval) -> Self {
        Self::from_hertz(self.0 * interval.ratio())
    }

    #[must_use]
    pub fn minus_interval(self, interval: Interval) -> Self {
        Self::from_hertz(self.0 / interval.ratio())
    }

    /// True if the two frequencies beat slower than
    /// [`Frequency::DEFAULT_BEAT_TOLERANCE_HZ`].
    #[inline]
    pub fn zerobeat(self, other: Frequency) -> bool {
        self.zerobeat_within(other, Self::DEFAULT_BEAT_TOLERANCE_HZ)
    }

    /// True if the two frequencies beat no faster than `tolerance_hz`.
    pub fn zerobeat_within(self, other: Frequency, tolerance_hz: f64) -> bool {
        self.beat_frequency(other) <= Self::from_hertz(tolerance_hz)
    }

    /// True if the interval between the two is within
    /// [`Frequency::DEFAULT_UNISON_TOLERANCE`] semitones of a unison.
    #[inline]
    pub fn in_unison(self, other: Frequency) -> bool {
        self.in_unison_within(other, Self::DEFAULT_UNISON_TOLERANCE)
    }

    /// True if the interval between the two is within `tolerance` semitones of a unison.
    pub fn in_unison_within(self, other: Frequency, tolerance: f64) -> bool {
        self.interval(other)
            .almost_equal_within(Interval::UNISON, tolerance)
    }

    /// Perceptual sameness: [`Frequency::zerobeat`] when `self` is below the
    /// crossover, [`Frequency::in_unison`] otherwise.
    pub fn almost_equal(self, other: Frequency) -> bool {
        if self.0 < Self::CROSSOVER_HZ {
            self.zerobeat(other)
        } else {
            self.in_unison(other)
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::CONCERT_PITCH
    }
}

impl Mul<f64> for Frequency {
    type Output = Frequency;
    fn mul(self, rhs: f64) -> Frequency {
        Frequency::from_hertz(self.0 * rhs)
    }
}

impl Mul<Frequency> for f64 {
    type Output = Frequency;
    fn mul(self, rhs: Frequency) -> Frequency {
        Frequency::from_hertz(self * rhs.0)
    }
}

impl Div<f64> for Frequency {
    type Output = Frequency;
    fn div(self, rhs: f64) -> Frequency {
        Frequency::from_hertz(self.0 / rhs)
    }
}

// Frequency + Interval = Frequency (transpose up)
impl Add<Interval> for Frequency {
    type Output = Frequency;
    fn add(self, rhs: Interval) -> Frequency {
        self.plus_interval(rhs)
    }
}

// Frequency - Interval = Frequency (transpose down)
impl Sub<Interval> for Frequency {
    type Output = Frequency;
    fn sub(self, rhs: Interval) -> Frequency {
        self.minus_interval(rhs)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Frequency::from_hertz)
    }
}

/// Output unit for [`Frequency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyFormat {
    /// Hertz with a `_hz` suffix
    #[default]
    Auto,
    Hertz,
    Midi,
    PeriodSec,
}

impl Quantity for Frequency {
    type Format = FrequencyFormat;

    fn select_format(options: &FormatOptions) -> FrequencyFormat {
        options.frequency
    }

    fn write_formatted(
        &self,
        f: &mut fmt::Formatter<'_>,
        format: FrequencyFormat,
        digits: usize,
    ) -> fmt::Result {
        match format {
            FrequencyFormat::Hertz => write_general(f, self.hertz(), digits),
            FrequencyFormat::Midi => write_general(f, self.midi_note(), digits),
            FrequencyFormat::PeriodSec => write_general(f, self.period_sec(), digits),
            FrequencyFormat::Auto => {
                write_general(f, self.hertz(), digits)?;
                f.write_str("_hz")
            }
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_as(FrequencyFormat::Auto), f)
    }
}

impl FromStr for Frequency {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, unit) = split_literal(s)?;
        match unit {
            "hz" | "Hz" => Ok(Frequency::from_hertz(value)),
            "midi" => Ok(Frequency::from_midi_note(value)),
            "secper" => Ok(Frequency::from_period_sec(value)),
            _ => Err(unknown_unit("frequency", unit)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hz(hertz: f64) -> Frequency {
        Frequency::from_hertz(hertz)
    }

    fn midi(note: f64) -> Frequency {
        Frequency::from_midi_note(note)
    }

    #[test]
    fn test_negative_hertz_folds_to_positive() {
        assert_eq!(hz(-220.0), hz(220.0));
        assert_eq!(hz(-0.0).hertz(), 0.0);
        assert_eq!(Frequency::from_period_sec(-0.5), hz(2.0));
    }

    #[test]
    fn test_period_conversions() {
        assert_relative_eq!(hz(10.0).period_sec(), 0.1);
        assert!(hz(0.25).almost_equal(Frequency::from_period_sec(4.0)));
        assert_eq!(hz(40.0).period(), Duration::from_millis(25));
        assert!(Frequency::from_period(Duration::from_nanos(1000)).almost_equal(hz(1_000_000.0)));
        assert!(Frequency::from_period(Duration::from_secs(10)).almost_equal(hz(0.1)));
        // one CD frame is 1/75 s, truncated to whole nanoseconds
        assert!(hz(75.0).almost_equal(Frequency::from_period(Duration::from_nanos(13_333_333))));
        assert_eq!(hz(0.0).period(), Duration::from_nanos(u64::MAX));
    }

    #[test]
    fn test_midi_notes() {
        assert!(midi(69.0).almost_equal(Frequency::CONCERT_PITCH));
        assert_relative_eq!(hz(440.0).midi_note(), 69.0);
        assert_relative_eq!(midi(60.0).hertz(), 261.6255653005986, epsilon = 1e-9);
        assert_relative_eq!(midi(81.0).midi_note(), 81.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transposition() {
        assert!(hz(440.0).minus_interval(Interval::OCTAVE).almost_equal(hz(220.0)));
        assert!(midi(60.0)
            .plus_interval(Interval::from_octaves(2.0))
            .almost_equal(midi(84.0)));
        assert!((midi(60.0) + Interval::MINOR_THIRD).almost_equal(midi(63.0)));
        assert!((Frequency::default() - Interval::from_semitones(12.0))
            .interval(hz(110.0))
            .almost_equal(Interval::OCTAVE));
        assert!((hz(440.0) + Interval::FIFTH + Interval::from_cents(1.95)).almost_equal(hz(660.0)));
    }

    #[test]
    fn test_intervals_and_ratios() {
        assert!(midi(60.0)
            .interval(midi(59.43))
            .almost_equal(Interval::from_cents(57.0)));
        assert_relative_eq!(hz(660.0).ratio(hz(440.0)), 1.5);
        assert_relative_eq!(hz(660.0).period_ratio(hz(440.0)), 2.0 / 3.0);
        assert!(hz(440.0).beat_frequency(hz(438.0)).almost_equal(hz(2.0)));
        assert_eq!(hz(438.0).beat_frequency(hz(440.0)), hz(2.0));
    }

    #[test]
    fn test_almost_equal_uses_beats_below_crossover() {
        // 0.8 mHz apart beats slowly enough, though it is more than 1e-4 semitones
        assert!(hz(50.0).almost_equal(hz(50.0008)));
        assert!(!hz(50.0).in_unison(hz(50.0008)));
        assert!(!hz(50.0).almost_equal(hz(50.002)));
    }

    #[test]
    fn test_almost_equal_uses_unison_above_crossover() {
        // 0.01 Hz apart at 2 kHz is under a hundredth of a cent
        assert!(!hz(2000.0).zerobeat(hz(2000.01)));
        assert!(hz(2000.0).almost_equal(hz(2000.01)));
        assert!(!hz(2000.0).almost_equal(hz(2001.0)));
    }

    #[test]
    fn test_tolerance_overrides() {
        assert!(hz(100.0).zerobeat_within(hz(101.0), 1.0));
        assert!(!hz(100.0).zerobeat_within(hz(101.0), 0.5));
        assert!(hz(440.0).in_unison_within(hz(445.0), 0.25));
        assert!(!hz(440.0).in_unison_within(hz(445.0), 0.1));
    }

    #[test]
    fn test_scaling() {
        assert_eq!(hz(220.0) * 2.0, hz(440.0));
        assert_eq!(2.0 * hz(220.0), hz(440.0));
        assert_eq!(hz(440.0) / -2.0, hz(220.0));
    }

    #[test]
    fn test_display_modes() {
        assert_eq!(hz(440.0).to_string(), "440_hz");
        assert_eq!(hz(1738.0).to_string(), "1738_hz");
        assert_eq!(
            midi(69.0).display_as(FrequencyFormat::Hertz).to_string(),
            "440"
        );
        assert_eq!(
            (midi(69.0) - Interval::from_semitones(9.0))
                .display_as(FrequencyFormat::Midi)
                .to_string(),
            "60"
        );
        assert_eq!(
            hz(0.25).display_as(FrequencyFormat::PeriodSec).to_string(),
            "4"
        );
        let mixed = format!(
            "{}/{}/{}",
            hz(440.0).display_as(FrequencyFormat::Hertz),
            (hz(440.0) - Interval::FIFTH).display_as(FrequencyFormat::Midi),
            Frequency::from_period_sec(10.0)
        );
        assert_eq!(mixed, "440/62/0.1_hz");
    }

    #[test]
    fn test_parse_literals() {
        assert_eq!("440_hz".parse::<Frequency>().unwrap(), hz(440.0));
        assert!("69_midi"
            .parse::<Frequency>()
            .unwrap()
            .almost_equal(Frequency::CONCERT_PITCH));
        assert_eq!("0.25_secper".parse::<Frequency>().unwrap(), hz(4.0));
        assert!("440_khz".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_deserialize_folds_sign() {
        let freq: Frequency = serde_json::from_str("-440.0").unwrap();
        assert_eq!(freq, Frequency::CONCERT_PITCH);
    }
}
