//! C API for `Interval`.

use quantities_core::{Interval, IntervalFormat};
use std::os::raw::c_char;

use crate::error::QuantitiesErrorCode;
use crate::helpers::{format_into, ordering_code, parse_into};

/// Octaves, semitones or cents by magnitude, with a unit suffix.
pub const QUANTITIES_INTERVAL_AUTO: u8 = 0;
pub const QUANTITIES_INTERVAL_SEMITONES: u8 = 1;
pub const QUANTITIES_INTERVAL_CENTS: u8 = 2;
pub const QUANTITIES_INTERVAL_OCTAVES: u8 = 3;

/// A signed pitch interval in semitones.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitiesInterval {
    pub semitones: f64,
}

impl From<Interval> for QuantitiesInterval {
    fn from(interval: Interval) -> Self {
        Self {
            semitones: interval.semitones(),
        }
    }
}

impl From<QuantitiesInterval> for Interval {
    fn from(interval: QuantitiesInterval) -> Self {
        Interval::from_semitones(interval.semitones)
    }
}

fn interval_format(mode: u8) -> IntervalFormat {
    match mode {
        QUANTITIES_INTERVAL_SEMITONES => IntervalFormat::Semitones,
        QUANTITIES_INTERVAL_CENTS => IntervalFormat::Cents,
        QUANTITIES_INTERVAL_OCTAVES => IntervalFormat::Octaves,
        _ => IntervalFormat::Auto,
    }
}

#[no_mangle]
pub extern "C" fn quantities_interval_from_semitones(semitones: f64) -> QuantitiesInterval {
    Interval::from_semitones(semitones).into()
}

#[no_mangle]
pub extern "C" fn quantities_interval_from_cents(cents: f64) -> QuantitiesInterval {
    Interval::from_cents(cents).into()
}

#[no_mangle]
pub extern "C" fn quantities_interval_from_octaves(octaves: f64) -> QuantitiesInterval {
    Interval::from_octaves(octaves).into()
}

/// Interval spanned by a frequency ratio (2.0 is an octave up).
#[no_mangle]
pub extern "C" fn quantities_interval_from_ratio(ratio: f64) -> QuantitiesInterval {
    Interval::from_ratio(ratio).into()
}

#[no_mangle]
pub extern "C" fn quantities_interval_semitones(interval: QuantitiesInterval) -> f64 {
    Interval::from(interval).semitones()
}

#[no_mangle]
pub extern "C" fn quantities_interval_cents(interval: QuantitiesInterval) -> f64 {
    Interval::from(interval).cents()
}

#[no_mangle]
pub extern "C" fn quantities_interval_octaves(interval: QuantitiesInterval) -> f64 {
    Interval::from(interval).octaves()
}

#[no_mangle]
pub extern "C" fn quantities_interval_ratio(interval: QuantitiesInterval) -> f64 {
    Interval::from(interval).ratio()
}

#[no_mangle]
pub extern "C" fn quantities_interval_add(
    a: QuantitiesInterval,
    b: QuantitiesInterval,
) -> QuantitiesInterval {
    (Interval::from(a) + Interval::from(b)).into()
}

#[no_mangle]
pub extern "C" fn quantities_interval_sub(
    a: QuantitiesInterval,
    b: QuantitiesInterval,
) -> QuantitiesInterval {
    (Interval::from(a) - Interval::from(b)).into()
}

#[no_mangle]
pub extern "C" fn quantities_interval_neg(interval: QuantitiesInterval) -> QuantitiesInterval {
    (-Interval::from(interval)).into()
}

#[no_mangle]
pub extern "C" fn quantities_interval_scale(
    interval: QuantitiesInterval,
    factor: f64,
) -> QuantitiesInterval {
    (Interval::from(interval) * factor).into()
}

/// True if the intervals differ by at most 1e-4 semitones.
#[no_mangle]
pub extern "C" fn quantities_interval_almost_equal(
    a: QuantitiesInterval,
    b: QuantitiesInterval,
) -> bool {
    Interval::from(a).almost_equal(Interval::from(b))
}

#[no_mangle]
pub extern "C" fn quantities_interval_almost_equal_within(
    a: QuantitiesInterval,
    b: QuantitiesInterval,
    tolerance: f64,
) -> bool {
    Interval::from(a).almost_equal_within(Interval::from(b), tolerance)
}

/// Exact three-way comparison of the semitone counts.
#[no_mangle]
pub extern "C" fn quantities_interval_compare(a: QuantitiesInterval, b: QuantitiesInterval) -> i32 {
    ordering_code(Interval::from(a).partial_cmp(&Interval::from(b)))
}

/// Write `interval` into `buf` as a NUL-terminated string.
///
/// `mode` is one of the `QUANTITIES_INTERVAL_*` codes; unknown codes print auto.
///
/// # Safety
///
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn quantities_interval_format(
    interval: QuantitiesInterval,
    mode: u8,
    buf: *mut c_char,
    len: usize,
) -> QuantitiesErrorCode {
    unsafe { format_into(Interval::from(interval), interval_format(mode), buf, len) }
}

/// Parse a literal such as `7_semitones`, `50 cents` or `1_octave` into `out`.
///
/// # Safety
///
/// - `text` must be null or a valid NUL-terminated string.
/// - `out` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn quantities_interval_parse(
    text: *const c_char,
    out: *mut QuantitiesInterval,
) -> QuantitiesErrorCode {
    unsafe { parse_into::<Interval, _>(text, out) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};

    #[test]
    fn test_conversions() {
        let fifth = quantities_interval_from_semitones(7.0);
        assert_eq!(quantities_interval_cents(fifth), 700.0);
        assert_eq!(
            quantities_interval_semitones(quantities_interval_from_octaves(-1.0)),
            -12.0
        );
        let octave_ratio = quantities_interval_ratio(quantities_interval_from_octaves(1.0));
        assert!((octave_ratio - 2.0).abs() < 1e-12);
        assert!(quantities_interval_almost_equal(
            quantities_interval_from_ratio(4.0),
            quantities_interval_from_semitones(24.0)
        ));
        assert_eq!(
            quantities_interval_compare(quantities_interval_neg(fifth), fifth),
            -1
        );
    }

    #[test]
    fn test_format_and_parse() {
        let mut buf: [c_char; 32] = [0; 32];
        let tritone_times_five =
            quantities_interval_scale(quantities_interval_from_semitones(6.0), 5.0);
        let code = unsafe {
            quantities_interval_format(
                tritone_times_five,
                QUANTITIES_INTERVAL_OCTAVES,
                buf.as_mut_ptr(),
                buf.len(),
            )
        };
        assert_eq!(code, QuantitiesErrorCode::Ok);
        assert_eq!(unsafe { CStr::from_ptr(buf.as_ptr()) }.to_str().unwrap(), "2.5");

        let text = CString::new("150_cents").unwrap();
        let mut out = QuantitiesInterval { semitones: 0.0 };
        let code = unsafe { quantities_interval_parse(text.as_ptr(), &mut out) };
        assert_eq!(code, QuantitiesErrorCode::Ok);
        assert!((out.semitones - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_format_reports_small_buffer() {
        let mut buf: [c_char; 4] = [0; 4];
        let code = unsafe {
            quantities_interval_format(
                quantities_interval_from_semitones(7.0),
                QUANTITIES_INTERVAL_AUTO,
                buf.as_mut_ptr(),
                buf.len(),
            )
        };
        assert_eq!(code, QuantitiesErrorCode::BufferTooSmall);
    }
}
