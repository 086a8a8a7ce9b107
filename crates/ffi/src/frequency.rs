//! C API for `Frequency` (also used for pitches and periods).

use quantities_core::{Frequency, FrequencyFormat};
use std::os::raw::c_char;
use std::time::Duration;

use crate::error::QuantitiesErrorCode;
use crate::helpers::{format_into, ordering_code, parse_into};
use crate::interval::QuantitiesInterval;

/// Hertz with a `_hz` suffix.
pub const QUANTITIES_FREQUENCY_AUTO: u8 = 0;
pub const QUANTITIES_FREQUENCY_HERTZ: u8 = 1;
/// Fractional MIDI note number.
pub const QUANTITIES_FREQUENCY_MIDI: u8 = 2;
/// Period in seconds.
pub const QUANTITIES_FREQUENCY_PERIOD_SEC: u8 = 3;

/// A non-negative frequency in hertz.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitiesFrequency {
    pub hertz: f64,
}

impl From<Frequency> for QuantitiesFrequency {
    fn from(frequency: Frequency) -> Self {
        Self {
            hertz: frequency.hertz(),
        }
    }
}

impl From<QuantitiesFrequency> for Frequency {
    fn from(frequency: QuantitiesFrequency) -> Self {
        Frequency::from_hertz(frequency.hertz)
    }
}

fn frequency_format(mode: u8) -> FrequencyFormat {
    match mode {
        QUANTITIES_FREQUENCY_HERTZ => FrequencyFormat::Hertz,
        QUANTITIES_FREQUENCY_MIDI => FrequencyFormat::Midi,
        QUANTITIES_FREQUENCY_PERIOD_SEC => FrequencyFormat::PeriodSec,
        _ => FrequencyFormat::Auto,
    }
}

/// Negative input folds to its magnitude.
#[no_mangle]
pub extern "C" fn quantities_frequency_from_hertz(hertz: f64) -> QuantitiesFrequency {
    Frequency::from_hertz(hertz).into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_from_period_sec(period: f64) -> QuantitiesFrequency {
    Frequency::from_period_sec(period).into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_from_period_ns(nanoseconds: u64) -> QuantitiesFrequency {
    Frequency::from_period(Duration::from_nanos(nanoseconds)).into()
}

/// Equal-tempered frequency of a (fractional) MIDI note; note 69 is 440 Hz.
#[no_mangle]
pub extern "C" fn quantities_frequency_from_midi_note(note: f64) -> QuantitiesFrequency {
    Frequency::from_midi_note(note).into()
}

/// A440.
#[no_mangle]
pub extern "C" fn quantities_frequency_concert_pitch() -> QuantitiesFrequency {
    Frequency::CONCERT_PITCH.into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_hertz(frequency: QuantitiesFrequency) -> f64 {
    Frequency::from(frequency).hertz()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_period_sec(frequency: QuantitiesFrequency) -> f64 {
    Frequency::from(frequency).period_sec()
}

/// Period rounded to whole nanoseconds; 0 Hz saturates to `UINT64_MAX`.
#[no_mangle]
pub extern "C" fn quantities_frequency_period_ns(frequency: QuantitiesFrequency) -> u64 {
    let nanos = Frequency::from(frequency).period().as_nanos();
    u64::try_from(nanos).unwrap_or(u64::MAX)
}

#[no_mangle]
pub extern "C" fn quantities_frequency_midi_note(frequency: QuantitiesFrequency) -> f64 {
    Frequency::from(frequency).midi_note()
}

/// The interval from `other` up to `frequency`.
#[no_mangle]
pub extern "C" fn quantities_frequency_interval(
    frequency: QuantitiesFrequency,
    other: QuantitiesFrequency,
) -> QuantitiesInterval {
    Frequency::from(frequency)
        .interval(Frequency::from(other))
        .into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_ratio(
    frequency: QuantitiesFrequency,
    other: QuantitiesFrequency,
) -> f64 {
    Frequency::from(frequency).ratio(Frequency::from(other))
}

#[no_mangle]
pub extern "C" fn quantities_frequency_period_ratio(
    frequency: QuantitiesFrequency,
    other: QuantitiesFrequency,
) -> f64 {
    Frequency::from(frequency).period_ratio(Frequency::from(other))
}

#[no_mangle]
pub extern "C" fn quantities_frequency_beat_frequency(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
) -> QuantitiesFrequency {
    Frequency::from(a).beat_frequency(Frequency::from(b)).into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_plus_interval(
    frequency: QuantitiesFrequency,
    interval: QuantitiesInterval,
) -> QuantitiesFrequency {
    Frequency::from(frequency).plus_interval(interval.into()).into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_minus_interval(
    frequency: QuantitiesFrequency,
    interval: QuantitiesInterval,
) -> QuantitiesFrequency {
    Frequency::from(frequency).minus_interval(interval.into()).into()
}

#[no_mangle]
pub extern "C" fn quantities_frequency_scale(
    frequency: QuantitiesFrequency,
    factor: f64,
) -> QuantitiesFrequency {
    (Frequency::from(frequency) * factor).into()
}

/// True if the beat frequency is at most 1e-3 Hz.
#[no_mangle]
pub extern "C" fn quantities_frequency_zerobeat(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
) -> bool {
    Frequency::from(a).zerobeat(Frequency::from(b))
}

#[no_mangle]
pub extern "C" fn quantities_frequency_zerobeat_within(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
    tolerance_hz: f64,
) -> bool {
    Frequency::from(a).zerobeat_within(Frequency::from(b), tolerance_hz)
}

/// True if the interval between the two is within 1e-4 semitones of a unison.
#[no_mangle]
pub extern "C" fn quantities_frequency_in_unison(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
) -> bool {
    Frequency::from(a).in_unison(Frequency::from(b))
}

#[no_mangle]
pub extern "C" fn quantities_frequency_in_unison_within(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
    tolerance_semitones: f64,
) -> bool {
    Frequency::from(a).in_unison_within(Frequency::from(b), tolerance_semitones)
}

/// Zerobeat below 88 Hz (judged on `a`), unison above.
#[no_mangle]
pub extern "C" fn quantities_frequency_almost_equal(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
) -> bool {
    Frequency::from(a).almost_equal(Frequency::from(b))
}

/// Exact three-way comparison of the hertz values.
#[no_mangle]
pub extern "C" fn quantities_frequency_compare(
    a: QuantitiesFrequency,
    b: QuantitiesFrequency,
) -> i32 {
    ordering_code(Frequency::from(a).partial_cmp(&Frequency::from(b)))
}

/// Write `frequency` into `buf` as a NUL-terminated string.
///
/// `mode` is one of the `QUANTITIES_FREQUENCY_*` codes; unknown codes print auto.
///
/// # Safety
///
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn quantities_frequency_format(
    frequency: QuantitiesFrequency,
    mode: u8,
    buf: *mut c_char,
    len: usize,
) -> QuantitiesErrorCode {
    unsafe { format_into(Frequency::from(frequency), frequency_format(mode), buf, len) }
}

/// Parse a literal such as `440_hz`, `69_midi` or `4_secper` into `out`.
///
/// # Safety
///
/// - `text` must be null or a valid NUL-terminated string.
/// - `out` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn quantities_frequency_parse(
    text: *const c_char,
    out: *mut QuantitiesFrequency,
) -> QuantitiesErrorCode {
    unsafe { parse_into::<Frequency, _>(text, out) }
}
