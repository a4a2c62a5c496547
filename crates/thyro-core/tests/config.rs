//! Tests for loading range override files.

use std::fs;

use thyro_core::{Classifier, load_ranges};
use thyro_model::{Analyte, LabPanel, OutcomeKind, ReferenceRanges, ThyroError};

#[test]
fn no_path_yields_defaults() {
    let ranges = load_ranges(None).expect("defaults");
    assert_eq!(ranges, ReferenceRanges::default());
}

#[test]
fn override_file_shifts_tsh_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.toml");
    fs::write(&path, "[tsh]\nhigh = 6.5\n").unwrap();

    let ranges = load_ranges(Some(&path)).expect("load overrides");
    assert!((ranges.get(Analyte::Tsh).high - 6.5).abs() < f64::EPSILON);

    let panel = LabPanel::new()
        .with(Analyte::Tsh, 6.0)
        .with(Analyte::FreeT4, 1.2);
    let result = Classifier::new(ranges).classify(&panel);
    assert_eq!(result.kind(), OutcomeKind::Euthyroid);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_ranges(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ThyroError::Io { .. }));
}

#[test]
fn malformed_file_is_toml_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.toml");
    fs::write(&path, "[ft4\nlow = ").unwrap();
    let err = load_ranges(Some(&path)).unwrap_err();
    assert!(matches!(err, ThyroError::Toml { .. }));
}

#[test]
fn inconsistent_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranges.toml");
    fs::write(&path, "[ft3]\nlow = 5.0\nhigh = 3.0\n").unwrap();
    let err = load_ranges(Some(&path)).unwrap_err();
    assert!(matches!(
        err,
        ThyroError::InvalidRange {
            analyte: Analyte::FreeT3,
            ..
        }
    ));
}
