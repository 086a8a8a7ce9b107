use quantities_core::{ParseQuantityError, Quantity};
use std::cmp::Ordering;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use std::str::FromStr;
use tracing::debug;

use crate::error::{
    with_last_error_mut, DefaultQuantitiesError, QuantitiesError, QuantitiesErrorCode,
};

/// Set the thread-local error message and code.
/// Accepts any type implementing `QuantitiesError` trait.
pub(crate) fn set_last_error(error: &impl QuantitiesError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl QuantitiesError) -> QuantitiesErrorCode {
    debug!(code = ?error.code(), message = error.msg(), "quantities ffi call failed");
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful fallible operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = QuantitiesErrorCode::Ok;
    });
}

/// Record the outcome of a fallible call and convert it to its FFI code.
pub(crate) fn handle_ffi_result(result: Result<(), DefaultQuantitiesError>) -> QuantitiesErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            QuantitiesErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Three-way comparison result for C: -1, 0 or 1. Unordered (`NaN`) compares as 0.
pub(crate) fn ordering_code(ordering: Option<Ordering>) -> i32 {
    match ordering {
        Some(Ordering::Less) => -1,
        Some(Ordering::Greater) => 1,
        Some(Ordering::Equal) | None => 0,
    }
}

/// Borrow a C string as UTF-8.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string that stays alive for `'a`.
pub(crate) unsafe fn str_from_ptr<'a>(
    text: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultQuantitiesError> {
    if text.is_null() {
        return Err(DefaultQuantitiesError::null_pointer(param_name));
    }
    unsafe { CStr::from_ptr(text) }
        .to_str()
        .map_err(|_| DefaultQuantitiesError::invalid_utf8(param_name))
}

/// Copy `text` and a NUL terminator into `buf`.
///
/// On failure nothing but a leading NUL (when `len > 0`) is written.
///
/// # Safety
/// `buf` must be null or valid for writes of `len` bytes.
pub(crate) unsafe fn write_to_buffer(
    text: &str,
    buf: *mut c_char,
    len: usize,
) -> Result<(), DefaultQuantitiesError> {
    if buf.is_null() {
        return Err(DefaultQuantitiesError::null_pointer("buf"));
    }

    let needed = text.len() + 1;
    if needed > len {
        if len > 0 {
            unsafe {
                *buf = 0;
            }
        }
        return Err(DefaultQuantitiesError::buffer_too_small(needed, len));
    }

    unsafe {
        ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buf, text.len());
        *buf.add(text.len()) = 0;
    }
    Ok(())
}

/// Write `value` in `format` into a caller-owned buffer.
///
/// # Safety
/// Same contract as [`write_to_buffer`].
pub(crate) unsafe fn format_into<T: Quantity>(
    value: T,
    format: T::Format,
    buf: *mut c_char,
    len: usize,
) -> QuantitiesErrorCode {
    let text = value.display_as(format).to_string();
    handle_ffi_result(unsafe { write_to_buffer(&text, buf, len) })
}

/// Parse a `<number>_<unit>` literal and store the converted value in `out`.
///
/// `out` is left untouched on failure.
///
/// # Safety
/// `text` must satisfy [`str_from_ptr`]; `out` must be null or valid for writes.
pub(crate) unsafe fn parse_into<T, C>(text: *const c_char, out: *mut C) -> QuantitiesErrorCode
where
    T: FromStr<Err = ParseQuantityError>,
    C: From<T>,
{
    if out.is_null() {
        return track_error(&DefaultQuantitiesError::null_pointer("out"));
    }

    match unsafe { parse_str::<T>(text) } {
        Ok(value) => {
            unsafe {
                out.write(C::from(value));
            }
            clear_last_error();
            QuantitiesErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// # Safety
/// Same contract as [`str_from_ptr`].
unsafe fn parse_str<T>(text: *const c_char) -> Result<T, DefaultQuantitiesError>
where
    T: FromStr<Err = ParseQuantityError>,
{
    let text = unsafe { str_from_ptr(text, "text") }?;
    text.parse::<T>().map_err(DefaultQuantitiesError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{quantities_get_last_error, quantities_get_last_error_code};

    #[test]
    fn test_write_to_buffer_fits_and_terminates() {
        let mut buf: [c_char; 8] = [1; 8];
        let result = unsafe { write_to_buffer("90_deg", buf.as_mut_ptr(), buf.len()) };
        assert!(result.is_ok());
        let written = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(written.to_str().unwrap(), "90_deg");
    }

    #[test]
    fn test_write_to_buffer_too_small() {
        let mut buf: [c_char; 6] = [1; 6];
        let err = unsafe { write_to_buffer("90_deg", buf.as_mut_ptr(), buf.len()) }.unwrap_err();
        assert_eq!(err.code(), QuantitiesErrorCode::BufferTooSmall);
        assert_eq!(buf[0], 0);

        let err = unsafe { write_to_buffer("x", ptr::null_mut(), 4) }.unwrap_err();
        assert_eq!(err.code(), QuantitiesErrorCode::NullPointer);
    }

    #[test]
    fn test_str_from_ptr_rejects_null_and_bad_utf8() {
        let err = unsafe { str_from_ptr(ptr::null(), "text") }.unwrap_err();
        assert_eq!(err.code(), QuantitiesErrorCode::NullPointer);

        let bad = CString::new(vec![0xff_u8, 0xfe]).unwrap();
        let err = unsafe { str_from_ptr(bad.as_ptr(), "text") }.unwrap_err();
        assert_eq!(err.code(), QuantitiesErrorCode::InvalidUtf8);
    }

    #[test]
    fn test_last_error_is_set_then_cleared() {
        let code = handle_ffi_result(Err(DefaultQuantitiesError::null_pointer("out")));
        assert_eq!(code, QuantitiesErrorCode::NullPointer);
        assert_eq!(quantities_get_last_error_code(), QuantitiesErrorCode::NullPointer);
        let message = unsafe { CStr::from_ptr(quantities_get_last_error()) };
        assert_eq!(message.to_str().unwrap(), "Parameter 'out' cannot be null");

        assert_eq!(handle_ffi_result(Ok(())), QuantitiesErrorCode::Ok);
        assert_eq!(quantities_get_last_error_code(), QuantitiesErrorCode::Ok);
        assert!(quantities_get_last_error().is_null());
    }

    #[test]
    fn test_ordering_codes() {
        assert_eq!(ordering_code(Some(Ordering::Less)), -1);
        assert_eq!(ordering_code(Some(Ordering::Equal)), 0);
        assert_eq!(ordering_code(Some(Ordering::Greater)), 1);
        assert_eq!(ordering_code(None), 0);
    }
}
