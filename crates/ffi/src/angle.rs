//! C API for `Angle`.

use quantities_core::{Angle, AngleFormat};
use std::os::raw::c_char;

use crate::error::QuantitiesErrorCode;
use crate::helpers::{format_into, ordering_code, parse_into};

/// Degrees with a `_deg` suffix.
pub const QUANTITIES_ANGLE_AUTO: u8 = 0;
/// Bare radians.
pub const QUANTITIES_ANGLE_RADIANS: u8 = 1;
/// Bare degrees.
pub const QUANTITIES_ANGLE_DEGREES: u8 = 2;

/// An angle in radians, always in `[0, 2π)` when produced by this library.
///
/// Values built by hand on the C side are re-normalized whenever they are
/// passed back in.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitiesAngle {
    pub radians: f64,
}

impl From<Angle> for QuantitiesAngle {
    fn from(angle: Angle) -> Self {
        Self {
            radians: angle.radians(),
        }
    }
}

impl From<QuantitiesAngle> for Angle {
    fn from(angle: QuantitiesAngle) -> Self {
        Angle::from_radians(angle.radians)
    }
}

/// Unknown codes fall back to auto.
fn angle_format(mode: u8) -> AngleFormat {
    match mode {
        QUANTITIES_ANGLE_RADIANS => AngleFormat::Radians,
        QUANTITIES_ANGLE_DEGREES => AngleFormat::Degrees,
        _ => AngleFormat::Auto,
    }
}

#[no_mangle]
pub extern "C" fn quantities_angle_from_radians(radians: f64) -> QuantitiesAngle {
    Angle::from_radians(radians).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_from_degrees(degrees: f64) -> QuantitiesAngle {
    Angle::from_degrees(degrees).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_radians(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).radians()
}

#[no_mangle]
pub extern "C" fn quantities_angle_degrees(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).degrees()
}

#[no_mangle]
pub extern "C" fn quantities_angle_add(a: QuantitiesAngle, b: QuantitiesAngle) -> QuantitiesAngle {
    (Angle::from(a) + Angle::from(b)).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_sub(a: QuantitiesAngle, b: QuantitiesAngle) -> QuantitiesAngle {
    (Angle::from(a) - Angle::from(b)).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_neg(angle: QuantitiesAngle) -> QuantitiesAngle {
    (-Angle::from(angle)).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_scale(angle: QuantitiesAngle, factor: f64) -> QuantitiesAngle {
    (Angle::from(angle) * factor).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_sin(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).sin()
}

#[no_mangle]
pub extern "C" fn quantities_angle_cos(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).cos()
}

#[no_mangle]
pub extern "C" fn quantities_angle_tan(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).tan()
}

#[no_mangle]
pub extern "C" fn quantities_angle_sinh(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).sinh()
}

#[no_mangle]
pub extern "C" fn quantities_angle_cosh(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).cosh()
}

#[no_mangle]
pub extern "C" fn quantities_angle_tanh(angle: QuantitiesAngle) -> f64 {
    Angle::from(angle).tanh()
}

#[no_mangle]
pub extern "C" fn quantities_angle_asin(ratio: f64) -> QuantitiesAngle {
    Angle::asin(ratio).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_acos(ratio: f64) -> QuantitiesAngle {
    Angle::acos(ratio).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_atan(ratio: f64) -> QuantitiesAngle {
    Angle::atan(ratio).into()
}

/// Angle of the point `(x, y)`; note the argument order matches C's `atan2`.
#[no_mangle]
pub extern "C" fn quantities_angle_atan2(y: f64, x: f64) -> QuantitiesAngle {
    Angle::atan2(y, x).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_asinh(value: f64) -> QuantitiesAngle {
    Angle::asinh(value).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_acosh(value: f64) -> QuantitiesAngle {
    Angle::acosh(value).into()
}

#[no_mangle]
pub extern "C" fn quantities_angle_atanh(value: f64) -> QuantitiesAngle {
    Angle::atanh(value).into()
}

/// True if the shortest arc between the angles is at most 1e-5 radians.
#[no_mangle]
pub extern "C" fn quantities_angle_almost_equal(a: QuantitiesAngle, b: QuantitiesAngle) -> bool {
    Angle::from(a).almost_equal(Angle::from(b))
}

/// True if the shortest arc between the angles is at most `tolerance` radians.
#[no_mangle]
pub extern "C" fn quantities_angle_almost_equal_within(
    a: QuantitiesAngle,
    b: QuantitiesAngle,
    tolerance: f64,
) -> bool {
    Angle::from(a).almost_equal_within(Angle::from(b), tolerance)
}

/// -1, 0 or 1 from the raw normalized radians, so 359° sorts above 1°.
///
/// Finer than [`quantities_angle_almost_equal`]: angles within tolerance of each
/// other still compare as -1 or 1 unless they are identical.
#[no_mangle]
pub extern "C" fn quantities_angle_compare(a: QuantitiesAngle, b: QuantitiesAngle) -> i32 {
    ordering_code(Angle::from(a).partial_cmp(&Angle::from(b)))
}

/// Write `angle` into `buf` as a NUL-terminated string.
///
/// `mode` is one of the `QUANTITIES_ANGLE_*` codes; unknown codes print auto.
///
/// Returns
/// - `QuantitiesErrorCode::Ok` on success
/// - `QuantitiesErrorCode::NullPointer` if `buf` is null
/// - `QuantitiesErrorCode::BufferTooSmall` if `len` cannot hold the text and its terminator
///
/// # Safety
///
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn quantities_angle_format(
    angle: QuantitiesAngle,
    mode: u8,
    buf: *mut c_char,
    len: usize,
) -> QuantitiesErrorCode {
    unsafe { format_into(Angle::from(angle), angle_format(mode), buf, len) }
}

/// Parse a literal such as `90_deg` or `1.5 rad` into `out`.
///
/// Returns
/// - `QuantitiesErrorCode::Ok` on success
/// - `QuantitiesErrorCode::NullPointer` if `text` or `out` is null
/// - `QuantitiesErrorCode::InvalidUtf8` if `text` is not UTF-8
/// - `QuantitiesErrorCode::ParseFailed` if `text` is not an angle literal
///
/// # Safety
///
/// - `text` must be null or a valid NUL-terminated string.
/// - `out` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn quantities_angle_parse(
    text: *const c_char,
    out: *mut QuantitiesAngle,
) -> QuantitiesErrorCode {
    unsafe { parse_into::<Angle, _>(text, out) }
}
