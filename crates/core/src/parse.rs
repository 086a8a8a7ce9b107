//! Shared tokenizer for `FromStr` on the quantity types
//!
//! Literals are a number and a unit joined by `_` or whitespace, the same
//! shape the auto display mode writes: `440_hz`, `7 semitones`, `-40_celsius`.

use tracing::debug;

use crate::error::ParseQuantityError;

/// Split a literal into its numeric value and unit suffix.
pub(crate) fn split_literal(input: &str) -> Result<(f64, &str), ParseQuantityError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseQuantityError::Empty);
    }

    let Some((number, unit)) = trimmed
        .rsplit_once('_')
        .or_else(|| trimmed.split_once(char::is_whitespace))
    else {
        debug!(input = trimmed, "quantity literal has no unit");
        return Err(ParseQuantityError::MissingUnit {
            input: trimmed.to_owned(),
        });
    };

    let (number, unit) = (number.trim(), unit.trim());
    if unit.is_empty() {
        debug!(input = trimmed, "quantity literal has no unit");
        return Err(ParseQuantityError::MissingUnit {
            input: trimmed.to_owned(),
        });
    }

    let value = number.parse::<f64>().map_err(|_| {
        debug!(number, "quantity literal has an invalid number");
        ParseQuantityError::InvalidNumber {
            number: number.to_owned(),
        }
    })?;

    Ok((value, unit))
}

/// Build the error for a unit suffix that `quantity` does not recognise.
pub(crate) fn unknown_unit(quantity: &'static str, unit: &str) -> ParseQuantityError {
    debug!(quantity, unit, "unrecognised unit in quantity literal");
    ParseQuantityError::UnknownUnit {
        quantity,
        unit: unit.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_underscore_and_space() {
        assert_eq!(split_literal("440_hz").unwrap(), (440.0, "hz"));
        assert_eq!(split_literal("  7 semitones ").unwrap(), (7.0, "semitones"));
        assert_eq!(split_literal("1e+06_hz").unwrap(), (1_000_000.0, "hz"));
        assert_eq!(split_literal("-40_celsius").unwrap(), (-40.0, "celsius"));
    }

    #[test]
    fn test_split_rejects_malformed() {
        assert_eq!(split_literal("   "), Err(ParseQuantityError::Empty));
        assert_eq!(
            split_literal("440"),
            Err(ParseQuantityError::MissingUnit {
                input: "440".to_owned()
            })
        );
        assert_eq!(
            split_literal("440_"),
            Err(ParseQuantityError::MissingUnit {
                input: "440_".to_owned()
            })
        );
        assert_eq!(
            split_literal("four_hz"),
            Err(ParseQuantityError::InvalidNumber {
                number: "four".to_owned()
            })
        );
    }

    #[test]
    fn test_unknown_unit_message() {
        let err = unknown_unit("angle", "grad");
        assert_eq!(err.to_string(), "unknown angle unit 'grad'");
    }
}
