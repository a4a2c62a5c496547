//! Data model for the thyroid panel classifier.
//!
//! Holds the analyte catalogue, the reference-range table, the lab panel
//! input record and the classification outcome types. Decision logic lives
//! in `thyro-core`.

pub mod analyte;
pub mod error;
pub mod outcome;
pub mod panel;
pub mod ranges;

pub use analyte::{Analyte, AnalyteState};
pub use error::{Result, ThyroError};
pub use outcome::{Advisory, ClassificationResult, OutcomeKind, Severity};
pub use panel::{LabPanel, ResolvedReading};
pub use ranges::{
    AnalyteOverride, CutoffOverrides, RangeOverrides, ReferenceRange, ReferenceRanges,
    TshCutoffs,
};
