use quantities_core::ParseQuantityError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait QuantitiesError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> QuantitiesErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `QuantitiesError` for the failures the C API can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultQuantitiesError {
    code: QuantitiesErrorCode,
    msg: String,
}

impl DefaultQuantitiesError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"text"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: QuantitiesErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: QuantitiesErrorCode::InvalidUtf8,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for output that does not fit the caller's buffer.
    ///
    /// # Arguments
    /// * `needed` - Bytes required, including the NUL terminator
    /// * `available` - Bytes the caller supplied
    pub fn buffer_too_small(needed: usize, available: usize) -> Self {
        Self {
            code: QuantitiesErrorCode::BufferTooSmall,
            msg: format!("Output needs {needed} bytes but the buffer holds {available}"),
        }
    }
}

impl From<ParseQuantityError> for DefaultQuantitiesError {
    fn from(error: ParseQuantityError) -> Self {
        Self {
            code: QuantitiesErrorCode::ParseFailed,
            msg: error.to_string(),
        }
    }
}

impl QuantitiesError for DefaultQuantitiesError {
    fn code(&self) -> QuantitiesErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by the fallible quantity functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantitiesErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Input text was not valid UTF-8.
    InvalidUtf8 = 2,

    /// Input text was not a `<number>_<unit>` literal for the requested quantity.
    ParseFailed = 3,

    /// Output buffer too small for the formatted value and its NUL terminator.
    BufferTooSmall = 4,
}

impl From<DefaultQuantitiesError> for QuantitiesErrorCode {
    fn from(error: DefaultQuantitiesError) -> Self {
        error.code
    }
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The `CString` is kept here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, QuantitiesErrorCode)> = const { RefCell::new((None, QuantitiesErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, QuantitiesErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, QuantitiesErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if no error has occurred or the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread sees only its own failures.
///
/// # Lifetime
/// The returned pointer is valid until the next fallible FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// QuantitiesFrequency pitch;
/// if (quantities_frequency_parse("440_parsecs", &pitch) != QuantitiesErrorCode::Ok) {
///     const char* error = quantities_get_last_error();
///     if (error) {
///         printf("parse failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn quantities_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `QuantitiesErrorCode::Ok` (0) if the last fallible call on this thread succeeded.
#[no_mangle]
pub extern "C" fn quantities_get_last_error_code() -> QuantitiesErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
