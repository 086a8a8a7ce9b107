//! C API for `Temperature`.

use quantities_core::{Temperature, TemperatureFormat};
use std::os::raw::c_char;

use crate::error::QuantitiesErrorCode;
use crate::helpers::{format_into, ordering_code, parse_into};

/// Kelvin with a `_kelvin` suffix.
pub const QUANTITIES_TEMPERATURE_AUTO: u8 = 0;
pub const QUANTITIES_TEMPERATURE_KELVIN: u8 = 1;
pub const QUANTITIES_TEMPERATURE_CELSIUS: u8 = 2;
pub const QUANTITIES_TEMPERATURE_CENTIGRADE: u8 = QUANTITIES_TEMPERATURE_CELSIUS;
pub const QUANTITIES_TEMPERATURE_FAHRENHEIT: u8 = 3;

/// A temperature in kelvin. Not clamped at absolute zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantitiesTemperature {
    pub kelvin: f64,
}

impl From<Temperature> for QuantitiesTemperature {
    fn from(temperature: Temperature) -> Self {
        Self {
            kelvin: temperature.kelvin(),
        }
    }
}

impl From<QuantitiesTemperature> for Temperature {
    fn from(temperature: QuantitiesTemperature) -> Self {
        Temperature::from_kelvin(temperature.kelvin)
    }
}

fn temperature_format(mode: u8) -> TemperatureFormat {
    match mode {
        QUANTITIES_TEMPERATURE_KELVIN => TemperatureFormat::Kelvin,
        QUANTITIES_TEMPERATURE_CELSIUS => TemperatureFormat::Celsius,
        QUANTITIES_TEMPERATURE_FAHRENHEIT => TemperatureFormat::Fahrenheit,
        _ => TemperatureFormat::Auto,
    }
}

#[no_mangle]
pub extern "C" fn quantities_temperature_from_kelvin(kelvin: f64) -> QuantitiesTemperature {
    Temperature::from_kelvin(kelvin).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_from_celsius(celsius: f64) -> QuantitiesTemperature {
    Temperature::from_celsius(celsius).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_from_centigrade(centigrade: f64) -> QuantitiesTemperature {
    Temperature::from_centigrade(centigrade).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_from_fahrenheit(fahrenheit: f64) -> QuantitiesTemperature {
    Temperature::from_fahrenheit(fahrenheit).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_kelvin(temperature: QuantitiesTemperature) -> f64 {
    Temperature::from(temperature).kelvin()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_celsius(temperature: QuantitiesTemperature) -> f64 {
    Temperature::from(temperature).celsius()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_centigrade(temperature: QuantitiesTemperature) -> f64 {
    Temperature::from(temperature).centigrade()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_fahrenheit(temperature: QuantitiesTemperature) -> f64 {
    Temperature::from(temperature).fahrenheit()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_plus_kelvin(
    temperature: QuantitiesTemperature,
    kelvin: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).plus_kelvin(kelvin).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_plus_celsius(
    temperature: QuantitiesTemperature,
    celsius: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).plus_celsius(celsius).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_plus_centigrade(
    temperature: QuantitiesTemperature,
    centigrade: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).plus_centigrade(centigrade).into()
}

/// Raise by a Fahrenheit difference (scaled by 5/9, no 32° offset).
#[no_mangle]
pub extern "C" fn quantities_temperature_plus_fahrenheit(
    temperature: QuantitiesTemperature,
    fahrenheit: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).plus_fahrenheit(fahrenheit).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_minus_kelvin(
    temperature: QuantitiesTemperature,
    kelvin: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).minus_kelvin(kelvin).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_minus_celsius(
    temperature: QuantitiesTemperature,
    celsius: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).minus_celsius(celsius).into()
}

#[no_mangle]
pub extern "C" fn quantities_temperature_minus_centigrade(
    temperature: QuantitiesTemperature,
    centigrade: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).minus_centigrade(centigrade).into()
}

/// Lower by a Fahrenheit difference (scaled by 5/9, no 32° offset).
#[no_mangle]
pub extern "C" fn quantities_temperature_minus_fahrenheit(
    temperature: QuantitiesTemperature,
    fahrenheit: f64,
) -> QuantitiesTemperature {
    Temperature::from(temperature).minus_fahrenheit(fahrenheit).into()
}

/// True if the temperatures differ by at most 1e-4 K.
#[no_mangle]
pub extern "C" fn quantities_temperature_almost_equal(
    a: QuantitiesTemperature,
    b: QuantitiesTemperature,
) -> bool {
    Temperature::from(a).almost_equal(Temperature::from(b))
}

#[no_mangle]
pub extern "C" fn quantities_temperature_almost_equal_within(
    a: QuantitiesTemperature,
    b: QuantitiesTemperature,
    tolerance: f64,
) -> bool {
    Temperature::from(a).almost_equal_within(Temperature::from(b), tolerance)
}

/// -1, 0 or 1 from the raw kelvin.
///
/// Finer than [`quantities_temperature_almost_equal`]: temperatures within
/// 1e-4 K of each other still compare as -1 or 1 unless they are identical.
#[no_mangle]
pub extern "C" fn quantities_temperature_compare(
    a: QuantitiesTemperature,
    b: QuantitiesTemperature,
) -> i32 {
    ordering_code(Temperature::from(a).partial_cmp(&Temperature::from(b)))
}

/// Write `temperature` into `buf` as a NUL-terminated string.
///
/// `mode` is one of the `QUANTITIES_TEMPERATURE_*` codes; unknown codes print auto.
///
/// # Safety
///
/// `buf` must be null or valid for writes of `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn quantities_temperature_format(
    temperature: QuantitiesTemperature,
    mode: u8,
    buf: *mut c_char,
    len: usize,
) -> QuantitiesErrorCode {
    unsafe {
        format_into(
            Temperature::from(temperature),
            temperature_format(mode),
            buf,
            len,
        )
    }
}

/// Parse a literal such as `273.15_kelvin` or `98.6 fahrenheit` into `out`.
///
/// # Safety
///
/// - `text` must be null or a valid NUL-terminated string.
/// - `out` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn quantities_temperature_parse(
    text: *const c_char,
    out: *mut QuantitiesTemperature,
) -> QuantitiesErrorCode {
    unsafe { parse_into::<Temperature, _>(text, out) }
}
