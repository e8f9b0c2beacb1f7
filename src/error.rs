// src/error.rs

//! Error types for the estimator crate.
//!
//! Every failure mode has a named variant. Nothing in the calculation
//! itself can fail; these cover the boundaries around it.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::inputs::Field;

/// A raw field value rejected at the input-collection boundary.
///
/// A rejected value is never committed; the previous value stays in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field}: '{raw}' is not a number")]
    NotANumber { field: Field, raw: String },

    #[error("{field}: value must be finite")]
    NotFinite { field: Field },

    #[error("{field}: value must not be negative (got {value})")]
    Negative { field: Field, value: f64 },

    #[error("{field}: value must be a whole number (got {value})")]
    NotWholeNumber { field: Field, value: f64 },

    #[error("{field}: value is too large (got {value})")]
    TooLarge { field: Field, value: f64 },

    #[error("{field}: a value is required")]
    Required { field: Field },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}' (expected one of: average-ticket, clients-per-day, empty-chairs, days-open, weeks-to-fill)")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("days open per week must be between 3 and 7, got {0}")]
pub struct DaysOutOfRange(pub u8);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep step must be positive and finite (got {0})")]
    InvalidStep(f64),

    #[error("sweep range is inverted: from {from} > to {to}")]
    InvertedRange { from: f64, to: f64 },

    #[error("sweep would produce {0} rows (limit is {limit})", limit = crate::estimator::sweep::MAX_SWEEP_STEPS)]
    TooManySteps(usize),

    #[error("days-open sweep must stay within 3..=7 (got {from}..={to})")]
    DaysOutOfRange { from: f64, to: f64 },

    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
