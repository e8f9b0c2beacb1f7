pub mod display;
pub mod format;
pub mod reporting;
