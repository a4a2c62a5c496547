//! Serializable views of a classification and of the range table.

use serde::Serialize;

use thyro_core::{AnalyteAssessment, Classifier};
use thyro_model::{
    Advisory, Analyte, ClassificationResult, LabPanel, OutcomeKind, ReferenceRanges, Severity,
    TshCutoffs,
};

/// Everything printed for one `classify` call.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub outcome: OutcomeKind,
    pub headline: &'static str,
    pub severity: Severity,
    pub advisory: Advisory,
    pub advisory_text: &'static str,
    pub entered: usize,
    pub assessments: Vec<AnalyteAssessment>,
}

impl ClassificationReport {
    pub fn build(classifier: &Classifier, panel: &LabPanel) -> Self {
        let result = classifier.classify(panel);
        Self::from_parts(&result, classifier.assess(panel), panel.entered_count())
    }

    fn from_parts(
        result: &ClassificationResult,
        assessments: Vec<AnalyteAssessment>,
        entered: usize,
    ) -> Self {
        Self {
            outcome: result.kind(),
            headline: result.headline(),
            severity: result.severity(),
            advisory: result.advisory(),
            advisory_text: result.advisory_text(),
            entered,
            assessments,
        }
    }
}

/// One row of the `ranges` listing.
#[derive(Debug, Clone, Serialize)]
pub struct RangeRow {
    pub analyte: Analyte,
    pub label: &'static str,
    pub low: f64,
    pub high: f64,
    pub unit: &'static str,
    pub hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeReport {
    pub ranges: Vec<RangeRow>,
    pub cutoffs: TshCutoffs,
}

impl RangeReport {
    pub fn build(ranges: &ReferenceRanges) -> Self {
        let rows = Analyte::ALL
            .into_iter()
            .map(|analyte| {
                let range = ranges.get(analyte);
                RangeRow {
                    analyte,
                    label: analyte.label(),
                    low: range.low,
                    high: range.high,
                    unit: analyte.unit(),
                    hint: range.hint(analyte),
                }
            })
            .collect();
        Self {
            ranges: rows,
            cutoffs: *ranges.cutoffs(),
        }
    }
}
