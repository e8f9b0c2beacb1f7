// src/session/validate.rs

use crate::error::InputError;
use crate::model::inputs::{Field, MAX_DAYS_OPEN, MIN_DAYS_OPEN};

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Parses the raw text of a form field.
///
/// Blank text means the field was cleared and yields `Ok(None)`, except for
/// days open, whose control can never be empty.
pub fn parse_field(field: Field, raw: &str) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return match field {
            Field::DaysOpen => Err(InputError::Required { field }),
            _ => Ok(None),
        };
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        raw: raw.to_string(),
    })?;
    validate_value(field, value).map(Some)
}

/// Checks a numeric value for `field` and returns the value to commit.
///
/// Days open is clamped into range rather than rejected.
pub fn validate_value(field: Field, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    if field.is_whole_number() && value.fract() != 0.0 {
        return Err(InputError::NotWholeNumber { field, value });
    }

    match field {
        Field::DaysOpen => Ok(value.clamp(f64::from(MIN_DAYS_OPEN), f64::from(MAX_DAYS_OPEN))),
        _ if value > field.max_value() => Err(InputError::TooLarge { field, value }),
        // Folds -0.0 into 0.0.
        _ => Ok(value + 0.0),
    }
}

/// Parses a "days to fill" entry and converts it to weeks.
///
/// Blank text clears the weeks field, same as a blank weeks entry.
pub fn parse_days_to_fill(raw: &str) -> Result<Option<f64>, InputError> {
    let field = Field::WeeksToFill;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let days: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        raw: raw.to_string(),
    })?;
    if !days.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if days < 0.0 {
        return Err(InputError::Negative { field, value: days });
    }
    validate_value(field, days / DAYS_PER_WEEK).map(Some)
}
