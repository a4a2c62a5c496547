//! CLI library components for the thyroid panel calculator.

pub mod interactive;
pub mod logging;
pub mod report;
pub mod summary;
