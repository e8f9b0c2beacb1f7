// src/model/inputs.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DaysOutOfRange, InputError, UnknownField};
use crate::session::validate::validate_value;

pub const MIN_DAYS_OPEN: u8 = 3;
pub const MAX_DAYS_OPEN: u8 = 7;

// Upper bounds for accepted values. Their product with 7 days and a year of
// weeks stays far below f64::MAX, so every metric is finite.
pub const MAX_AVERAGE_TICKET: f64 = 1_000_000.0;
pub const MAX_CLIENTS_PER_DAY: f64 = 10_000.0;
pub const MAX_EMPTY_CHAIRS: u32 = 100_000;
/// A century.
pub const MAX_WEEKS_TO_FILL: f64 = 5_200.0;

// =========================================================================
// Days open per week (bounded control)
// =========================================================================

/// Operating days per week. Only 3..=7 is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DaysOpen(u8);

impl DaysOpen {
    /// Behaves like the slider: anything outside the range snaps to the nearest end.
    pub fn clamped(days: u8) -> Self {
        Self(days.clamp(MIN_DAYS_OPEN, MAX_DAYS_OPEN))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for DaysOpen {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for DaysOpen {
    type Error = DaysOutOfRange;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        if (MIN_DAYS_OPEN..=MAX_DAYS_OPEN).contains(&days) {
            Ok(Self(days))
        } else {
            Err(DaysOutOfRange(days))
        }
    }
}

impl From<DaysOpen> for u8 {
    fn from(days: DaysOpen) -> Self {
        days.0
    }
}

impl fmt::Display for DaysOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}

// =========================================================================
// Field names
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    AverageTicket,
    ClientsPerDay,
    EmptyChairs,
    DaysOpen,
    WeeksToFill,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::AverageTicket,
        Field::ClientsPerDay,
        Field::EmptyChairs,
        Field::DaysOpen,
        Field::WeeksToFill,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::AverageTicket => "average-ticket",
            Field::ClientsPerDay => "clients-per-day",
            Field::EmptyChairs => "empty-chairs",
            Field::DaysOpen => "days-open",
            Field::WeeksToFill => "weeks-to-fill",
        }
    }

    /// Largest value accepted for this field.
    pub fn max_value(self) -> f64 {
        match self {
            Field::AverageTicket => MAX_AVERAGE_TICKET,
            Field::ClientsPerDay => MAX_CLIENTS_PER_DAY,
            Field::EmptyChairs => f64::from(MAX_EMPTY_CHAIRS),
            Field::DaysOpen => f64::from(MAX_DAYS_OPEN),
            Field::WeeksToFill => MAX_WEEKS_TO_FILL,
        }
    }

    /// Counts that only accept whole numbers.
    pub fn is_whole_number(self) -> bool {
        matches!(self, Field::EmptyChairs | Field::DaysOpen)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts kebab-case, snake_case and the camelCase form ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "averageticket" | "avgticket" | "ticket" => Ok(Field::AverageTicket),
            "clientsperday" | "clients" => Ok(Field::ClientsPerDay),
            "emptychairs" | "chairs" => Ok(Field::EmptyChairs),
            "daysopen" | "daysopenperweek" => Ok(Field::DaysOpen),
            "weekstofill" | "weekstofillseat" => Ok(Field::WeeksToFill),
            _ => Err(UnknownField(s.to_string())),
        }
    }
}

// =========================================================================
// Defaults
// =========================================================================

/// Values substituted for unset fields before computing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub average_ticket: f64,
    pub clients_per_day: f64,
    pub empty_chairs: u32,
    pub days_open: DaysOpen,
    pub weeks_to_fill: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            average_ticket: 85.0,
            clients_per_day: 5.0,
            empty_chairs: 1,
            days_open: DaysOpen::default(),
            weeks_to_fill: 8.0,
        }
    }
}

// =========================================================================
// InputSet
// =========================================================================

/// The salon parameters as the user entered them.
///
/// `None` means the field was never filled in. `Some(0)` is kept as entered
/// but resolves to the default, same as `None`. The value is `Copy` and every
/// update produces a new `InputSet`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSet {
    pub average_ticket: Option<f64>,
    pub clients_per_day: Option<f64>,
    pub empty_chairs: Option<u32>,
    pub days_open: DaysOpen,
    pub weeks_to_fill: Option<f64>,
}

impl InputSet {
    /// An input set pre-filled with the defaults, as the form starts out.
    pub fn from_defaults(defaults: &InputDefaults) -> Self {
        Self {
            average_ticket: Some(defaults.average_ticket),
            clients_per_day: Some(defaults.clients_per_day),
            empty_chairs: Some(defaults.empty_chairs),
            days_open: defaults.days_open,
            weeks_to_fill: Some(defaults.weeks_to_fill),
        }
    }

    /// Returns a copy with one field replaced, after the same checks a typed
    /// edit goes through. `None` clears the field; days open cannot be cleared.
    pub fn try_with_field(self, field: Field, value: Option<f64>) -> Result<Self, InputError> {
        let checked = match value {
            Some(v) => Some(validate_value(field, v)?),
            None if field == Field::DaysOpen => return Err(InputError::Required { field }),
            None => None,
        };
        Ok(self.with_field(field, checked))
    }

    /// Unchecked form of [`try_with_field`](Self::try_with_field).
    ///
    /// `value` must already be validated for `field`. For `DaysOpen` a `None`
    /// leaves the current value.
    pub(crate) fn with_field(self, field: Field, value: Option<f64>) -> Self {
        match field {
            Field::AverageTicket => Self {
                average_ticket: value,
                ..self
            },
            Field::ClientsPerDay => Self {
                clients_per_day: value,
                ..self
            },
            Field::EmptyChairs => Self {
                empty_chairs: value.map(|v| v as u32),
                ..self
            },
            Field::DaysOpen => Self {
                days_open: value.map_or(self.days_open, |v| DaysOpen::clamped(v as u8)),
                ..self
            },
            Field::WeeksToFill => Self {
                weeks_to_fill: value,
                ..self
            },
        }
    }

    pub fn with_days_open(self, days_open: DaysOpen) -> Self {
        Self { days_open, ..self }
    }

    /// The value as entered, or `None` if unset. Days open is always set.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::AverageTicket => self.average_ticket,
            Field::ClientsPerDay => self.clients_per_day,
            Field::EmptyChairs => self.empty_chairs.map(f64::from),
            Field::DaysOpen => Some(f64::from(self.days_open.get())),
            Field::WeeksToFill => self.weeks_to_fill,
        }
    }

    /// Fields that will fall back to their default when resolved.
    pub fn unset_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| *f != Field::DaysOpen && provided(self.get(*f)).is_none())
            .collect()
    }

    /// Substitutes defaults for every unset or zero field.
    pub fn resolve(&self, defaults: &InputDefaults) -> ResolvedInputs {
        ResolvedInputs {
            average_ticket: provided(self.average_ticket).unwrap_or(defaults.average_ticket),
            clients_per_day: provided(self.clients_per_day).unwrap_or(defaults.clients_per_day),
            empty_chairs: self
                .empty_chairs
                .filter(|n| *n != 0)
                .unwrap_or(defaults.empty_chairs),
            days_open: self.days_open,
            weeks_to_fill: provided(self.weeks_to_fill).unwrap_or(defaults.weeks_to_fill),
        }
    }
}

fn provided(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// An input set with every field concrete; this is what the formulas read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    pub average_ticket: f64,
    pub clients_per_day: f64,
    pub empty_chairs: u32,
    pub days_open: DaysOpen,
    pub weeks_to_fill: f64,
}

impl From<InputDefaults> for ResolvedInputs {
    fn from(d: InputDefaults) -> Self {
        Self {
            average_ticket: d.average_ticket,
            clients_per_day: d.clients_per_day,
            empty_chairs: d.empty_chairs,
            days_open: d.days_open,
            weeks_to_fill: d.weeks_to_fill,
        }
    }
}
