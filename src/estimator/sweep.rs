// src/estimator/sweep.rs

use serde::Serialize;
use tracing::debug;

use crate::error::SweepError;
use crate::estimator::engine::Estimator;
use crate::model::inputs::{Field, InputSet, MAX_DAYS_OPEN, MIN_DAYS_OPEN};
use crate::session::validate::validate_value;

pub const MAX_SWEEP_STEPS: usize = 10_000;

// Absorbs float drift so `to` itself is included.
const RANGE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

impl SweepRange {
    pub fn new(from: f64, to: f64, step: f64) -> Self {
        Self { from, to, step }
    }

    fn steps(&self) -> Result<usize, SweepError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SweepError::InvalidStep(self.step));
        }
        if self.from > self.to {
            return Err(SweepError::InvertedRange {
                from: self.from,
                to: self.to,
            });
        }
        let span = ((self.to - self.from) / self.step + RANGE_EPSILON).floor();
        if !span.is_finite() || span >= MAX_SWEEP_STEPS as f64 {
            return Err(SweepError::TooManySteps(if span.is_finite() {
                span as usize + 1
            } else {
                usize::MAX
            }));
        }
        Ok(span as usize + 1)
    }
}

/// One row of a sweep: the varied value plus the full resolved inputs and metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRecord {
    pub step: usize,
    pub field: String,
    pub value: f64,
    pub average_ticket: f64,
    pub clients_per_day: f64,
    pub empty_chairs: u32,
    pub days_open: u8,
    pub weeks_to_fill: f64,
    pub weekly_revenue_per_chair: f64,
    pub lost_revenue_per_week: f64,
    pub cumulative_loss: f64,
    pub monthly_loss: f64,
    pub yearly_loss: f64,
    pub break_even_weeks: Option<f64>,
}

/// Varies `field` over `range` with every other input held at `base`.
///
/// Each value goes through the same validation as a typed edit, so a
/// negative bound or a fractional chair count is rejected.
pub fn sweep(
    estimator: &Estimator,
    base: &InputSet,
    field: Field,
    range: SweepRange,
) -> Result<Vec<SweepRecord>, SweepError> {
    validate_value(field, range.from)?;
    validate_value(field, range.to)?;
    let steps = range.steps()?;

    if field == Field::DaysOpen
        && (range.from < f64::from(MIN_DAYS_OPEN) || range.to > f64::from(MAX_DAYS_OPEN))
    {
        return Err(SweepError::DaysOutOfRange {
            from: range.from,
            to: range.to,
        });
    }

    let mut records = Vec::with_capacity(steps);
    for step in 0..steps {
        let value = validate_value(field, range.from + step as f64 * range.step)?;
        let input = base.with_field(field, Some(value));
        let view = estimator.view(&input, false);
        let r = view.resolved;
        let m = view.metrics;

        records.push(SweepRecord {
            step,
            field: field.to_string(),
            value,
            average_ticket: r.average_ticket,
            clients_per_day: r.clients_per_day,
            empty_chairs: r.empty_chairs,
            days_open: r.days_open.get(),
            weeks_to_fill: r.weeks_to_fill,
            weekly_revenue_per_chair: m.weekly_revenue_per_chair,
            lost_revenue_per_week: m.lost_revenue_per_week,
            cumulative_loss: m.cumulative_loss,
            monthly_loss: m.monthly_loss,
            yearly_loss: m.yearly_loss,
            break_even_weeks: view.intervention.and_then(|i| i.break_even.weeks()),
        });
    }

    debug!(%field, rows = records.len(), "sweep computed");
    Ok(records)
}
