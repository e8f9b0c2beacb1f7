// src/estimator/engine.rs

use crate::estimator::config::EstimatorConfig;
use crate::model::inputs::{InputSet, ResolvedInputs};
use crate::model::metrics::{BreakEven, EstimateView, Intervention, MetricSet};

/// Computes the metric set for `input` using the stock defaults and constants.
pub fn compute(input: &InputSet) -> MetricSet {
    Estimator::default().compute(input)
}

/// Weeks until `fee` is recovered at `lost_per_week`.
///
/// Returns [`BreakEven::Undefined`] instead of dividing by zero.
pub fn break_even_weeks(fee: f64, lost_per_week: f64) -> BreakEven {
    if lost_per_week > 0.0 {
        BreakEven::Weeks(fee / lost_per_week)
    } else {
        BreakEven::Undefined
    }
}

/// The revenue-loss estimator.
///
/// Stateless apart from its configuration: every call recomputes the full
/// metric set from the inputs it is handed.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn resolve(&self, input: &InputSet) -> ResolvedInputs {
        input.resolve(&self.config.defaults)
    }

    pub fn compute(&self, input: &InputSet) -> MetricSet {
        self.compute_resolved(&self.resolve(input))
    }

    /// The formulas proper. No validation and no rounding.
    pub fn compute_resolved(&self, r: &ResolvedInputs) -> MetricSet {
        let weekly_revenue_per_chair =
            r.average_ticket * r.clients_per_day * f64::from(r.days_open.get());
        let lost_revenue_per_week = weekly_revenue_per_chair * f64::from(r.empty_chairs);

        MetricSet {
            weekly_revenue_per_chair,
            lost_revenue_per_week,
            cumulative_loss: lost_revenue_per_week * r.weeks_to_fill,
            monthly_loss: lost_revenue_per_week * self.config.weeks_per_month,
            yearly_loss: lost_revenue_per_week * self.config.weeks_per_year,
        }
    }

    /// Break-even for the configured fee, if there is one.
    pub fn intervention(&self, metrics: &MetricSet) -> Option<Intervention> {
        self.config.intervention_fee.map(|fee| Intervention {
            fee,
            break_even: break_even_weeks(fee, metrics.lost_revenue_per_week),
        })
    }

    /// Bundles everything the display surface renders for `input`.
    pub fn view(&self, input: &InputSet, cta_enabled: bool) -> EstimateView {
        let resolved = self.resolve(input);
        let metrics = self.compute_resolved(&resolved);
        EstimateView {
            input: *input,
            resolved,
            metrics,
            intervention: self.intervention(&metrics),
            cta_enabled,
        }
    }
}
