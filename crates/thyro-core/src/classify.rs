//! The thyroid status decision procedure.
//!
//! Evaluation order:
//! 1. Nothing measured: Indeterminate.
//! 2. TSH and a thyroxine reading: two-axis TSH/T4 table.
//! 3. TSH without thyroxine: TSH-only cutoffs, otherwise Indeterminate.
//! 4. No TSH: peripheral readings alone.
//!
//! The triiodothyronine reading only contributes when TSH is absent.
//! [`Classifier::assess`] reports which readings took part.

use serde::Serialize;
use tracing::debug;

use thyro_model::{
    Advisory, Analyte, AnalyteState, ClassificationResult, LabPanel, ReferenceRange,
    ReferenceRanges, ResolvedReading,
};

/// Stateless classifier bound to a reference-range table.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    ranges: ReferenceRanges,
}

/// How a measured value took part in the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingUse {
    /// The value was used directly.
    Primary,
    /// A total fraction standing in for a missing free fraction.
    Substituted,
    /// A total fraction ignored because the free fraction was measured.
    Superseded,
    /// A triiodothyronine reading, which is not consulted once TSH is measured.
    Ignored,
}

/// One measured analyte judged against its range, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalyteAssessment {
    pub analyte: Analyte,
    pub value: f64,
    pub range: ReferenceRange,
    pub state: AnalyteState,
    pub usage: ReadingUse,
}

/// Classify with the default reference ranges.
pub fn classify(panel: &LabPanel) -> ClassificationResult {
    Classifier::default().classify(panel)
}

impl Classifier {
    pub fn new(ranges: ReferenceRanges) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &ReferenceRanges {
        &self.ranges
    }

    /// Map a panel to its outcome. Total: every panel yields a result.
    pub fn classify(&self, panel: &LabPanel) -> ClassificationResult {
        let advisory = self.decide(panel);
        let result = ClassificationResult::from_advisory(advisory);
        debug!(
            outcome = result.kind().as_str(),
            severity = result.severity().as_str(),
            entered = panel.entered_count(),
            "panel classified"
        );
        result
    }

    fn decide(&self, panel: &LabPanel) -> Advisory {
        let thyroxine = panel.thyroxine();
        let triiodothyronine = panel.triiodothyronine();
        match (panel.tsh(), thyroxine) {
            (Some(tsh), Some(t4)) => self.tsh_with_thyroxine(tsh, t4),
            (Some(tsh), None) => self.tsh_only(tsh),
            (None, _) => self.peripheral_only(thyroxine, triiodothyronine),
        }
    }

    fn state(&self, reading: ResolvedReading) -> AnalyteState {
        self.ranges.state(reading.analyte, reading.value)
    }

    /// First match wins.
    fn tsh_with_thyroxine(&self, tsh: f64, thyroxine: ResolvedReading) -> Advisory {
        let tsh_state = self.ranges.state(Analyte::Tsh, tsh);
        match (tsh_state, self.state(thyroxine)) {
            (AnalyteState::Normal, AnalyteState::Normal) => Advisory::WithinRange,
            (AnalyteState::High, AnalyteState::Low) => Advisory::HormoneLow,
            (AnalyteState::Low, AnalyteState::High) => Advisory::HormoneHigh,
            (AnalyteState::High, AnalyteState::Normal) => Advisory::TshHighThyroxineNormal,
            (AnalyteState::Low, AnalyteState::Normal) => Advisory::TshLowThyroxineNormal,
            _ => Advisory::Discordant,
        }
    }

    fn tsh_only(&self, tsh: f64) -> Advisory {
        let cutoffs = self.ranges.cutoffs();
        if tsh >= cutoffs.marked_elevation {
            return Advisory::TshMarkedlyElevated;
        }
        if tsh <= cutoffs.marked_suppression {
            return Advisory::TshMarkedlySuppressed;
        }
        match self.ranges.state(Analyte::Tsh, tsh) {
            AnalyteState::Normal => Advisory::WithinRange,
            AnalyteState::Low | AnalyteState::High => Advisory::NeedThyroxineToConfirm,
        }
    }

    fn peripheral_only(
        &self,
        thyroxine: Option<ResolvedReading>,
        triiodothyronine: Option<ResolvedReading>,
    ) -> Advisory {
        let states: Vec<AnalyteState> = [thyroxine, triiodothyronine]
            .into_iter()
            .flatten()
            .map(|reading| self.state(reading))
            .collect();
        if states.is_empty() {
            return Advisory::InsufficientData;
        }
        let any_low = states.contains(&AnalyteState::Low);
        let any_high = states.contains(&AnalyteState::High);
        match (any_low, any_high) {
            (false, false) => Advisory::WithinRange,
            (true, false) => Advisory::HormoneLow,
            (false, true) => Advisory::HormoneHigh,
            (true, true) => Advisory::Discordant,
        }
    }

    /// Judge every measured analyte against its own range.
    pub fn assess(&self, panel: &LabPanel) -> Vec<AnalyteAssessment> {
        panel
            .entries()
            .map(|(analyte, value)| AnalyteAssessment {
                analyte,
                value,
                range: *self.ranges.get(analyte),
                state: self.ranges.state(analyte, value),
                usage: reading_use(panel, analyte),
            })
            .collect()
    }
}

/// Mirrors the branches taken by `decide`.
fn reading_use(panel: &LabPanel, analyte: Analyte) -> ReadingUse {
    if analyte.is_triiodothyronine() && panel.tsh().is_some() {
        return ReadingUse::Ignored;
    }
    let resolved = if analyte.is_thyroxine() {
        panel.thyroxine()
    } else if analyte.is_triiodothyronine() {
        panel.triiodothyronine()
    } else {
        return ReadingUse::Primary;
    };
    match resolved {
        Some(reading) if reading.analyte != analyte => ReadingUse::Superseded,
        _ if matches!(analyte, Analyte::TotalT4 | Analyte::TotalT3) => ReadingUse::Substituted,
        _ => ReadingUse::Primary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thyro_model::{OutcomeKind, RangeOverrides};

    fn panel(values: &[(Analyte, f64)]) -> LabPanel {
        values
            .iter()
            .fold(LabPanel::new(), |panel, (analyte, value)| {
                panel.with(*analyte, *value)
            })
    }

    fn kind(values: &[(Analyte, f64)]) -> OutcomeKind {
        classify(&panel(values)).kind()
    }

    #[test]
    fn empty_panel_is_indeterminate() {
        let result = classify(&LabPanel::new());
        assert_eq!(result.kind(), OutcomeKind::Indeterminate);
        assert_eq!(result.advisory(), Advisory::InsufficientData);
    }

    #[test]
    fn both_high_is_discordant() {
        assert_eq!(
            kind(&[(Analyte::Tsh, 6.0), (Analyte::FreeT4, 2.2)]),
            OutcomeKind::Discordant
        );
    }

    #[test]
    fn tsh_low_ft4_low_is_discordant() {
        assert_eq!(
            kind(&[(Analyte::Tsh, 0.1), (Analyte::FreeT4, 0.5)]),
            OutcomeKind::Discordant
        );
    }

    #[test]
    fn subclinical_hyper() {
        let result = classify(&panel(&[(Analyte::Tsh, 0.2), (Analyte::FreeT4, 1.0)]));
        assert_eq!(result.kind(), OutcomeKind::SubclinicalHyperthyroidism);
        assert_eq!(result.advisory(), Advisory::TshLowThyroxineNormal);
    }

    #[test]
    fn tt4_judged_against_its_own_range() {
        // 4.0 is low on the TT4 scale but would be high on the FT4 scale.
        assert_eq!(
            kind(&[(Analyte::Tsh, 8.0), (Analyte::TotalT4, 4.0)]),
            OutcomeKind::Hypothyroid
        );
    }

    #[test]
    fn ft4_shadows_tt4() {
        assert_eq!(
            kind(&[
                (Analyte::Tsh, 2.0),
                (Analyte::FreeT4, 1.0),
                (Analyte::TotalT4, 30.0)
            ]),
            OutcomeKind::Euthyroid
        );
    }

    #[test]
    fn tsh_only_thresholds() {
        let suppressed = classify(&panel(&[(Analyte::Tsh, 0.05)]));
        assert_eq!(suppressed.kind(), OutcomeKind::Hyperthyroid);
        assert_eq!(suppressed.advisory(), Advisory::TshMarkedlySuppressed);

        let elevated = classify(&panel(&[(Analyte::Tsh, 10.0)]));
        assert_eq!(elevated.advisory(), Advisory::TshMarkedlyElevated);

        let borderline = classify(&panel(&[(Analyte::Tsh, 6.0)]));
        assert_eq!(borderline.kind(), OutcomeKind::Indeterminate);
        assert_eq!(borderline.advisory(), Advisory::NeedThyroxineToConfirm);

        assert_eq!(kind(&[(Analyte::Tsh, 0.2)]), OutcomeKind::Indeterminate);
        assert_eq!(kind(&[(Analyte::Tsh, 2.0)]), OutcomeKind::Euthyroid);
    }

    #[test]
    fn tsh_only_ignores_t3() {
        assert_eq!(
            kind(&[(Analyte::Tsh, 2.0), (Analyte::FreeT3, 9.0)]),
            OutcomeKind::Euthyroid
        );
    }

    #[test]
    fn peripheral_only_paths() {
        assert_eq!(kind(&[(Analyte::FreeT3, 5.0)]), OutcomeKind::Hyperthyroid);
        assert_eq!(
            kind(&[(Analyte::TotalT4, 8.0), (Analyte::TotalT3, 120.0)]),
            OutcomeKind::Euthyroid
        );
        assert_eq!(
            kind(&[(Analyte::FreeT4, 0.5), (Analyte::FreeT3, 5.0)]),
            OutcomeKind::Discordant
        );
        assert_eq!(
            kind(&[(Analyte::FreeT4, 0.5), (Analyte::FreeT3, 3.0)]),
            OutcomeKind::Hypothyroid
        );
    }

    #[test]
    fn overridden_cutoff_changes_tsh_only_path() {
        let overrides = RangeOverrides {
            cutoffs: Some(thyro_model::CutoffOverrides {
                tsh_marked_suppression: Some(0.01),
                ..Default::default()
            }),
            ..Default::default()
        };
        let ranges = ReferenceRanges::default()
            .with_overrides(&overrides)
            .expect("valid cutoff");
        let classifier = Classifier::new(ranges);
        let result = classifier.classify(&panel(&[(Analyte::Tsh, 0.05)]));
        assert_eq!(result.kind(), OutcomeKind::Indeterminate);
    }

    fn usage(values: &[(Analyte, f64)]) -> Vec<(Analyte, ReadingUse)> {
        Classifier::default()
            .assess(&panel(values))
            .iter()
            .map(|a| (a.analyte, a.usage))
            .collect()
    }

    #[test]
    fn assessment_marks_substitution() {
        let assessed = Classifier::default().assess(&panel(&[
            (Analyte::Tsh, 5.0),
            (Analyte::FreeT4, 1.0),
            (Analyte::TotalT4, 7.0),
            (Analyte::TotalT3, 250.0),
        ]));
        let usage: Vec<(Analyte, ReadingUse, AnalyteState)> = assessed
            .iter()
            .map(|a| (a.analyte, a.usage, a.state))
            .collect();
        assert_eq!(
            usage,
            vec![
                (Analyte::Tsh, ReadingUse::Primary, AnalyteState::High),
                (Analyte::FreeT4, ReadingUse::Primary, AnalyteState::Normal),
                (Analyte::TotalT4, ReadingUse::Superseded, AnalyteState::Normal),
                (Analyte::TotalT3, ReadingUse::Ignored, AnalyteState::High),
            ]
        );
    }

    #[test]
    fn t3_next_to_tsh_is_ignored() {
        let values = [(Analyte::Tsh, 2.0), (Analyte::FreeT3, 9.0)];
        assert_eq!(kind(&values), OutcomeKind::Euthyroid);
        assert_eq!(
            usage(&values),
            vec![
                (Analyte::Tsh, ReadingUse::Primary),
                (Analyte::FreeT3, ReadingUse::Ignored),
            ]
        );
    }

    #[test]
    fn t3_without_tsh_takes_part() {
        assert_eq!(
            usage(&[
                (Analyte::FreeT4, 1.0),
                (Analyte::FreeT3, 3.0),
                (Analyte::TotalT3, 120.0)
            ]),
            vec![
                (Analyte::FreeT4, ReadingUse::Primary),
                (Analyte::FreeT3, ReadingUse::Primary),
                (Analyte::TotalT3, ReadingUse::Superseded),
            ]
        );
        assert_eq!(
            usage(&[(Analyte::TotalT4, 8.0), (Analyte::TotalT3, 120.0)]),
            vec![
                (Analyte::TotalT4, ReadingUse::Substituted),
                (Analyte::TotalT3, ReadingUse::Substituted),
            ]
        );
    }
}
