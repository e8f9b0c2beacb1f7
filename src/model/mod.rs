pub mod inputs;
pub mod metrics;
