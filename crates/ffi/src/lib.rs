//! C ABI for `quantities-core`.
//!
//! Every quantity crosses the boundary as a one-field `#[repr(C)]` struct
//! holding its canonical unit. Values coming back in are rebuilt through the
//! core factories, so a hand-made angle of 7 rad is re-normalized and a
//! negative frequency folds to its magnitude.
//!
//! Infallible operations return values directly. Formatting and parsing
//! return a [`QuantitiesErrorCode`] and record a message readable through
//! [`quantities_get_last_error`] on the calling thread.
//!
//! The C header is generated by `build.rs` into `QuantitiesFFI.h` at the
//! workspace root.

pub mod angle;
pub mod error;
pub mod frequency;
mod helpers;
pub mod interval;
pub mod temperature;

pub use angle::QuantitiesAngle;
pub use error::{quantities_get_last_error, quantities_get_last_error_code, QuantitiesErrorCode};
pub use frequency::QuantitiesFrequency;
pub use interval::QuantitiesInterval;
pub use temperature::QuantitiesTemperature;

/// Buffer size that fits any formatted quantity, terminator included.
pub const QUANTITIES_FORMAT_BUFFER_LEN: usize = 64;
