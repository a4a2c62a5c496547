//! Thyroid status classification.
//!
//! [`Classifier`] maps a [`LabPanel`](thyro_model::LabPanel) to one of seven
//! outcome kinds using a [`ReferenceRanges`](thyro_model::ReferenceRanges)
//! table. The [`input`] module turns raw form text into a panel, and
//! [`config`] loads range overrides from TOML.

pub mod classify;
pub mod config;
pub mod input;

pub use classify::{AnalyteAssessment, Classifier, ReadingUse, classify};
pub use config::{load_overrides, load_ranges};
pub use input::{RawLabInput, parse_value, sanitize_field};
