//! Salon empty-chair revenue-loss estimator.
//!
//! An [`InputSet`](model::inputs::InputSet) of salon parameters goes in, a
//! [`MetricSet`](model::metrics::MetricSet) of lost-revenue figures comes
//! out. The [`session`] module plays the input-collection surface and
//! [`io`] holds the display surfaces that render the results.

pub mod error;
pub mod estimator;
pub mod io;
pub mod model;
pub mod session;

pub use error::{ConfigError, InputError, ReportError, SweepError};
pub use estimator::config::EstimatorConfig;
pub use estimator::engine::{break_even_weeks, compute, Estimator};
pub use model::inputs::{DaysOpen, Field, InputSet, ResolvedInputs};
pub use model::metrics::{BreakEven, MetricSet};
pub use session::state::Session;
