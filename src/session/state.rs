// src/session/state.rs

use tracing::{debug, warn};

use crate::error::InputError;
use crate::estimator::engine::Estimator;
use crate::model::inputs::{Field, InputSet};
use crate::model::metrics::{EstimateView, MetricSet};
use crate::session::validate::{parse_days_to_fill, parse_field};

/// One user's calculator session.
///
/// Holds the single current `InputSet` and the metrics computed from it.
/// Every committed edit swaps in a new input set and recomputes before
/// returning, so `metrics()` never lags behind `input()`.
#[derive(Debug, Clone)]
pub struct Session {
    estimator: Estimator,
    input: InputSet,
    metrics: MetricSet,
    edited: bool,
    rejected_edits: usize,
}

impl Session {
    /// Starts a session with the form pre-filled from the configured defaults.
    pub fn new(estimator: Estimator) -> Self {
        let input = InputSet::from_defaults(&estimator.config().defaults);
        Self::with_input(estimator, input)
    }

    pub fn with_input(estimator: Estimator, input: InputSet) -> Self {
        let metrics = estimator.compute(&input);
        Self {
            estimator,
            input,
            metrics,
            edited: false,
            rejected_edits: 0,
        }
    }

    pub fn input(&self) -> &InputSet {
        &self.input
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// The booking action unlocks once the user has changed anything.
    pub fn cta_enabled(&self) -> bool {
        self.edited
    }

    pub fn rejected_edits(&self) -> usize {
        self.rejected_edits
    }

    /// Applies raw field text as typed by the user.
    ///
    /// On rejection the previous value is kept and the error returned.
    pub fn edit(&mut self, field: Field, raw: &str) -> Result<&MetricSet, InputError> {
        match parse_field(field, raw) {
            Ok(value) => {
                self.commit(self.input.with_field(field, value));
                Ok(&self.metrics)
            }
            Err(err) => Err(self.reject(field, raw, err)),
        }
    }

    /// Applies an already-numeric value, e.g. from a slider or a CLI flag.
    pub fn set(&mut self, field: Field, value: Option<f64>) -> Result<&MetricSet, InputError> {
        match self.input.try_with_field(field, value) {
            Ok(next) => {
                self.commit(next);
                Ok(&self.metrics)
            }
            Err(err) => Err(self.reject(field, &format!("{value:?}"), err)),
        }
    }

    /// Applies a "days to fill the seat" entry, stored as weeks (days / 7).
    pub fn edit_days_to_fill(&mut self, raw: &str) -> Result<&MetricSet, InputError> {
        match parse_days_to_fill(raw) {
            Ok(weeks) => {
                self.commit(self.input.with_field(Field::WeeksToFill, weeks));
                Ok(&self.metrics)
            }
            Err(err) => Err(self.reject(Field::WeeksToFill, raw, err)),
        }
    }

    /// Replaces the whole input set at once.
    pub fn replace(&mut self, input: InputSet) -> &MetricSet {
        self.commit(input);
        &self.metrics
    }

    /// Back to the pre-filled form with the call-to-action locked again.
    pub fn reset(&mut self) {
        self.input = InputSet::from_defaults(&self.estimator.config().defaults);
        self.metrics = self.estimator.compute(&self.input);
        self.edited = false;
        debug!("session reset to defaults");
    }

    pub fn view(&self) -> EstimateView {
        self.estimator.view(&self.input, self.edited)
    }

    fn commit(&mut self, next: InputSet) {
        self.input = next;
        self.metrics = self.estimator.compute(&next);
        self.edited = true;
        debug!(
            lost_per_week = self.metrics.lost_revenue_per_week,
            cumulative = self.metrics.cumulative_loss,
            "recomputed metrics"
        );
    }

    fn reject(&mut self, field: Field, raw: &str, err: InputError) -> InputError {
        self.rejected_edits += 1;
        warn!(%field, raw, error = %err, "rejected edit, keeping previous value");
        err
    }
}
