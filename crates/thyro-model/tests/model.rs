//! Tests for thyro-model types.

use thyro_model::{
    Advisory, Analyte, AnalyteState, ClassificationResult, LabPanel, OutcomeKind, RangeOverrides,
    ReferenceRange, ReferenceRanges, Severity,
};

#[test]
fn result_serializes_canonical_outcome_name() {
    let result = ClassificationResult::from_advisory(Advisory::TshMarkedlyElevated);
    insta::assert_json_snapshot!(result, @r#"
    {
      "kind": "Hypothyroid",
      "severity": "red",
      "advisory": "tsh_markedly_elevated"
    }
    "#);
}

#[test]
fn outcome_names_are_canonical() {
    let names: Vec<&str> = OutcomeKind::ALL.iter().map(OutcomeKind::as_str).collect();
    assert_eq!(
        names,
        vec![
            "Indeterminate",
            "Euthyroid",
            "Hypothyroid",
            "Hyperthyroid",
            "Subclinical Hypothyroidism",
            "Subclinical Hyperthyroidism",
            "Imbalance/Discordant",
        ]
    );
}

#[test]
fn outcome_serializes_as_canonical_name() {
    for kind in OutcomeKind::ALL {
        let json = serde_json::to_value(kind).expect("serialize outcome");
        assert_eq!(json, kind.as_str());
    }
    let json = serde_json::to_value(OutcomeKind::SubclinicalHypothyroidism).expect("serialize");
    assert_eq!(json, "Subclinical Hypothyroidism");
}

#[test]
fn severity_tiers() {
    assert_eq!(OutcomeKind::Euthyroid.severity(), Severity::Green);
    assert_eq!(OutcomeKind::Hyperthyroid.severity(), Severity::Red);
    assert_eq!(OutcomeKind::Discordant.severity(), Severity::Amber);
    assert_eq!(OutcomeKind::Indeterminate.severity(), Severity::Amber);
    assert!(Severity::Red > Severity::Amber);
}

#[test]
fn overrides_parse_from_toml() {
    let overrides: RangeOverrides = toml::from_str(
        r#"
        [tsh]
        high = 4.5

        [tt3]
        low = 70
        high = 190

        [cutoffs]
        tsh_marked_suppression = 0.01
        "#,
    )
    .expect("parse overrides");
    let ranges = ReferenceRanges::default()
        .with_overrides(&overrides)
        .expect("valid overrides");
    assert_eq!(*ranges.get(Analyte::Tsh), ReferenceRange::new(0.4, 4.5));
    assert_eq!(*ranges.get(Analyte::TotalT3), ReferenceRange::new(70.0, 190.0));
    assert!((ranges.cutoffs().marked_suppression - 0.01).abs() < f64::EPSILON);
    assert!((ranges.cutoffs().marked_elevation - 10.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_override_keys_are_rejected() {
    let parsed: Result<RangeOverrides, _> = toml::from_str("[t4]\nlow = 1.0\n");
    assert!(parsed.is_err());
}

#[test]
fn empty_overrides_leave_defaults() {
    let overrides = RangeOverrides::default();
    assert!(overrides.is_empty());
    let ranges = ReferenceRanges::default()
        .with_overrides(&overrides)
        .expect("defaults are valid");
    assert_eq!(ranges, ReferenceRanges::default());
}

#[test]
fn thyroxine_uses_source_range() {
    let ranges = ReferenceRanges::default();
    let panel = LabPanel::new().with(Analyte::TotalT4, 4.0);
    let reading = panel.thyroxine().expect("tt4 present");
    assert_eq!(
        ranges.state(reading.analyte, reading.value),
        AnalyteState::Low
    );
}
