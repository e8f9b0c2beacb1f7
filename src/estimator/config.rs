// src/estimator/config.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::inputs::{
    InputDefaults, MAX_AVERAGE_TICKET, MAX_CLIENTS_PER_DAY, MAX_EMPTY_CHAIRS, MAX_WEEKS_TO_FILL,
};

/// Average weeks in a month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// No calendar period used for the monthly/yearly figures is longer than a leap year.
pub const MAX_WEEKS_PER_PERIOD: f64 = 53.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub defaults: InputDefaults,
    pub weeks_per_month: f64,
    pub weeks_per_year: f64,
    /// Fee for a paid intervention; enables the break-even figure when set.
    pub intervention_fee: Option<f64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            defaults: InputDefaults::default(),
            weeks_per_month: WEEKS_PER_MONTH,
            weeks_per_year: WEEKS_PER_YEAR,
            intervention_fee: None,
        }
    }
}

impl EstimatorConfig {
    /// Reads a TOML config file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value the formulas depend on is finite, non-negative and
    /// within the same caps a typed edit is held to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.defaults;
        bounded("defaults.average_ticket", d.average_ticket, MAX_AVERAGE_TICKET)?;
        bounded("defaults.clients_per_day", d.clients_per_day, MAX_CLIENTS_PER_DAY)?;
        bounded(
            "defaults.empty_chairs",
            f64::from(d.empty_chairs),
            f64::from(MAX_EMPTY_CHAIRS),
        )?;
        bounded("defaults.weeks_to_fill", d.weeks_to_fill, MAX_WEEKS_TO_FILL)?;
        bounded("weeks_per_month", self.weeks_per_month, MAX_WEEKS_PER_PERIOD)?;
        bounded("weeks_per_year", self.weeks_per_year, MAX_WEEKS_PER_PERIOD)?;
        if let Some(fee) = self.intervention_fee {
            bounded("intervention_fee", fee, f64::MAX)?;
        }
        Ok(())
    }
}

fn bounded(key: &'static str, value: f64, max: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("expected a finite, non-negative number, got {value}"),
        });
    }
    if value > max {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("{value} exceeds the maximum of {max}"),
        });
    }
    Ok(())
}
