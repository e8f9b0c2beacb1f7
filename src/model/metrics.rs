// src/model/metrics.rs

use serde::Serialize;
use std::fmt;

use crate::model::inputs::{InputSet, ResolvedInputs};

/// The lost-revenue figures derived from one input set.
///
/// Always recomputed from scratch; there is no incremental state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricSet {
    pub weekly_revenue_per_chair: f64,
    pub lost_revenue_per_week: f64,
    pub cumulative_loss: f64,
    pub monthly_loss: f64,
    pub yearly_loss: f64,
}

impl MetricSet {
    pub fn values(&self) -> [f64; 5] {
        [
            self.weekly_revenue_per_chair,
            self.lost_revenue_per_week,
            self.cumulative_loss,
            self.monthly_loss,
            self.yearly_loss,
        ]
    }
}

/// Weeks for a paid intervention to pay for itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BreakEven {
    Weeks(f64),
    /// Nothing is being lost, so the fee is never recovered.
    Undefined,
}

impl BreakEven {
    pub fn weeks(self) -> Option<f64> {
        match self {
            BreakEven::Weeks(w) => Some(w),
            BreakEven::Undefined => None,
        }
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Weeks(w) => write!(f, "{w:.1} weeks"),
            BreakEven::Undefined => f.write_str("never (no weekly loss)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Intervention {
    pub fee: f64,
    pub break_even: BreakEven,
}

/// Everything a display surface needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateView {
    pub input: InputSet,
    pub resolved: ResolvedInputs,
    pub metrics: MetricSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervention: Option<Intervention>,
    pub cta_enabled: bool,
}
