//! Errors raised when reading quantities from text

use thiserror::Error;

/// Failure to parse a `<number>_<unit>` quantity literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseQuantityError {
    #[error("empty quantity literal")]
    Empty,

    #[error("quantity literal '{input}' has no unit suffix")]
    MissingUnit { input: String },

    #[error("invalid number '{number}' in quantity literal")]
    InvalidNumber { number: String },

    #[error("unknown {quantity} unit '{unit}'")]
    UnknownUnit {
        quantity: &'static str,
        unit: String,
    },
}
