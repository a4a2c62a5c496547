//! Input layer between the entry form and the classifier.
//!
//! Fields accept digits and at most one decimal point. A comma typed as a
//! decimal separator is read as a point. Anything that does not parse to a
//! finite number is treated as "not measured".

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use thyro_model::{Analyte, LabPanel};

static DECIMAL_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("decimal syntax pattern"));

/// Normalize a field edit, or return `None` when the edit must be rejected.
///
/// Only the first comma is rewritten, so `1,2,3` is rejected.
pub fn sanitize_field(text: &str) -> Option<String> {
    let normalized = text.replacen(',', ".", 1);
    DECIMAL_SYNTAX
        .is_match(&normalized)
        .then_some(normalized)
}

/// Parse one field. Empty, rejected, or non-finite text is absent.
pub fn parse_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = sanitize_field(trimmed)?;
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Raw text for each analyte as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLabInput {
    pub tsh: Option<String>,
    pub ft4: Option<String>,
    pub ft3: Option<String>,
    pub tt4: Option<String>,
    pub tt3: Option<String>,
}

impl RawLabInput {
    pub fn get(&self, analyte: Analyte) -> Option<&str> {
        let field = match analyte {
            Analyte::Tsh => &self.tsh,
            Analyte::FreeT4 => &self.ft4,
            Analyte::FreeT3 => &self.ft3,
            Analyte::TotalT4 => &self.tt4,
            Analyte::TotalT3 => &self.tt3,
        };
        field.as_deref()
    }

    pub fn set(&mut self, analyte: Analyte, text: Option<String>) {
        match analyte {
            Analyte::Tsh => self.tsh = text,
            Analyte::FreeT4 => self.ft4 = text,
            Analyte::FreeT3 => self.ft3 = text,
            Analyte::TotalT4 => self.tt4 = text,
            Analyte::TotalT3 => self.tt3 = text,
        }
    }

    #[must_use]
    pub fn with(mut self, analyte: Analyte, text: impl Into<String>) -> Self {
        self.set(analyte, Some(text.into()));
        self
    }

    /// Number of fields holding any non-blank text.
    pub fn entered_count(&self) -> usize {
        Analyte::ALL
            .iter()
            .filter(|analyte| self.get(**analyte).is_some_and(|text| !text.trim().is_empty()))
            .count()
    }

    /// Parse every field into a panel. Unparseable fields become absent.
    pub fn to_panel(&self) -> LabPanel {
        let mut panel = LabPanel::new();
        for analyte in Analyte::ALL {
            let Some(text) = self.get(analyte) else {
                continue;
            };
            let value = parse_value(text);
            if value.is_none() && !text.trim().is_empty() {
                warn!(analyte = analyte.code(), "ignoring non-numeric field");
            }
            panel.set(analyte, value);
        }
        panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_accepts_decimal_syntax() {
        assert_eq!(sanitize_field(""), Some(String::new()));
        assert_eq!(sanitize_field("4.5"), Some("4.5".to_string()));
        assert_eq!(sanitize_field("4,5"), Some("4.5".to_string()));
        assert_eq!(sanitize_field(".5"), Some(".5".to_string()));
        assert_eq!(sanitize_field("12."), Some("12.".to_string()));
    }

    #[test]
    fn sanitize_rejects_everything_else() {
        assert_eq!(sanitize_field("4.5.1"), None);
        assert_eq!(sanitize_field("1,2,3"), None);
        assert_eq!(sanitize_field("-1"), None);
        assert_eq!(sanitize_field("1e3"), None);
        assert_eq!(sanitize_field("abc"), None);
        assert_eq!(sanitize_field("4 5"), None);
    }

    #[test]
    fn parse_value_cases() {
        assert_eq!(parse_value("0.4"), Some(0.4));
        assert_eq!(parse_value(" 4,0 "), Some(4.0));
        assert_eq!(parse_value("12."), Some(12.0));
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
    }

    #[test]
    fn overlong_digits_are_absent() {
        let huge = "9".repeat(400);
        assert_eq!(parse_value(&huge), None);
    }

    #[test]
    fn raw_input_to_panel() {
        let raw = RawLabInput::default()
            .with(Analyte::Tsh, "5")
            .with(Analyte::FreeT4, "0,5")
            .with(Analyte::FreeT3, "high");
        assert_eq!(raw.entered_count(), 3);
        let panel = raw.to_panel();
        assert_eq!(panel.get(Analyte::Tsh), Some(5.0));
        assert_eq!(panel.get(Analyte::FreeT4), Some(0.5));
        assert_eq!(panel.get(Analyte::FreeT3), None);
        assert_eq!(panel.entered_count(), 2);
    }
}
