//! Classification outcomes and their fixed display text.
//!
//! Display text is a static lookup keyed by [`Advisory`]; nothing here is
//! computed from the measured values.

use serde::Serialize;
use std::fmt;

/// One of the seven mutually exclusive diagnostic categories.
///
/// Serializes as its canonical name, see [`OutcomeKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Indeterminate,
    Euthyroid,
    Hypothyroid,
    Hyperthyroid,
    SubclinicalHypothyroidism,
    SubclinicalHyperthyroidism,
    Discordant,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 7] = [
        OutcomeKind::Indeterminate,
        OutcomeKind::Euthyroid,
        OutcomeKind::Hypothyroid,
        OutcomeKind::Hyperthyroid,
        OutcomeKind::SubclinicalHypothyroidism,
        OutcomeKind::SubclinicalHyperthyroidism,
        OutcomeKind::Discordant,
    ];

    /// Canonical outcome name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Indeterminate => "Indeterminate",
            OutcomeKind::Euthyroid => "Euthyroid",
            OutcomeKind::Hypothyroid => "Hypothyroid",
            OutcomeKind::Hyperthyroid => "Hyperthyroid",
            OutcomeKind::SubclinicalHypothyroidism => "Subclinical Hypothyroidism",
            OutcomeKind::SubclinicalHyperthyroidism => "Subclinical Hyperthyroidism",
            OutcomeKind::Discordant => "Imbalance/Discordant",
        }
    }

    /// Result headline shown in the result pill.
    pub const fn headline(&self) -> &'static str {
        match self {
            OutcomeKind::Indeterminate => "Insufficient data",
            OutcomeKind::Euthyroid => "Euthyroid (normal)",
            OutcomeKind::Hypothyroid => "Hypothyroid",
            OutcomeKind::Hyperthyroid => "Hyperthyroid",
            OutcomeKind::SubclinicalHypothyroidism => "Subclinical Hypothyroidism",
            OutcomeKind::SubclinicalHyperthyroidism => "Subclinical Hyperthyroidism",
            OutcomeKind::Discordant => "Imbalance / discordant results",
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            OutcomeKind::Euthyroid => Severity::Green,
            OutcomeKind::Hypothyroid | OutcomeKind::Hyperthyroid => Severity::Red,
            OutcomeKind::Indeterminate
            | OutcomeKind::SubclinicalHypothyroidism
            | OutcomeKind::SubclinicalHyperthyroidism
            | OutcomeKind::Discordant => Severity::Amber,
        }
    }

    /// Advisory used when the decision path has no more specific wording.
    pub const fn standard_advisory(&self) -> Advisory {
        match self {
            OutcomeKind::Indeterminate => Advisory::InsufficientData,
            OutcomeKind::Euthyroid => Advisory::WithinRange,
            OutcomeKind::Hypothyroid => Advisory::HormoneLow,
            OutcomeKind::Hyperthyroid => Advisory::HormoneHigh,
            OutcomeKind::SubclinicalHypothyroidism => Advisory::TshHighThyroxineNormal,
            OutcomeKind::SubclinicalHyperthyroidism => Advisory::TshLowThyroxineNormal,
            OutcomeKind::Discordant => Advisory::Discordant,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for OutcomeKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Colour tier for presenting a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Green,
    Amber,
    Red,
}

impl Severity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Green => "green",
            Severity::Amber => "amber",
            Severity::Red => "red",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key into the advisory text table.
///
/// Each advisory belongs to exactly one outcome kind, so a result is fully
/// determined by its advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    InsufficientData,
    NeedThyroxineToConfirm,
    WithinRange,
    HormoneLow,
    TshMarkedlyElevated,
    HormoneHigh,
    TshMarkedlySuppressed,
    TshHighThyroxineNormal,
    TshLowThyroxineNormal,
    Discordant,
}

impl Advisory {
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Advisory::InsufficientData | Advisory::NeedThyroxineToConfirm => {
                OutcomeKind::Indeterminate
            }
            Advisory::WithinRange => OutcomeKind::Euthyroid,
            Advisory::HormoneLow | Advisory::TshMarkedlyElevated => OutcomeKind::Hypothyroid,
            Advisory::HormoneHigh | Advisory::TshMarkedlySuppressed => OutcomeKind::Hyperthyroid,
            Advisory::TshHighThyroxineNormal => OutcomeKind::SubclinicalHypothyroidism,
            Advisory::TshLowThyroxineNormal => OutcomeKind::SubclinicalHyperthyroidism,
            Advisory::Discordant => OutcomeKind::Discordant,
        }
    }

    pub const fn text(&self) -> &'static str {
        match self {
            Advisory::InsufficientData => {
                "Not enough data for a decision. Enter TSH, Free T4 and, if needed, Free T3."
            }
            Advisory::NeedThyroxineToConfirm => {
                "TSH is outside the normal range, but more data is needed to decide. Test Free T4 and Free T3."
            }
            Advisory::WithinRange => {
                "Your report is within the normal range. Keep up regular follow-up."
            }
            Advisory::HormoneLow => {
                "Your thyroid hormone level is low. Consult a doctor promptly."
            }
            Advisory::TshMarkedlyElevated => {
                "TSH is markedly elevated. Confirm with a Free T4 test and consult a doctor."
            }
            Advisory::HormoneHigh => {
                "Your thyroid hormone level is high. Consult a doctor promptly."
            }
            Advisory::TshMarkedlySuppressed => {
                "TSH is markedly suppressed. Confirm with Free T4 and Free T3 tests and consult a doctor."
            }
            Advisory::TshHighThyroxineNormal => {
                "TSH is high but thyroxine is normal. Consult a doctor to confirm."
            }
            Advisory::TshLowThyroxineNormal => {
                "TSH is low but thyroxine is normal. Consult a doctor to confirm."
            }
            Advisory::Discordant => {
                "The results do not fit a single pattern. Repeat Free T3, Free T4 and TSH and consult a doctor."
            }
        }
    }
}

/// Immutable outcome of one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClassificationResult {
    kind: OutcomeKind,
    severity: Severity,
    advisory: Advisory,
}

impl ClassificationResult {
    pub const fn from_advisory(advisory: Advisory) -> Self {
        let kind = advisory.kind();
        Self {
            kind,
            severity: kind.severity(),
            advisory,
        }
    }

    pub const fn standard(kind: OutcomeKind) -> Self {
        Self::from_advisory(kind.standard_advisory())
    }

    pub const fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub const fn severity(&self) -> Severity {
        self.severity
    }

    pub const fn advisory(&self) -> Advisory {
        self.advisory
    }

    pub const fn headline(&self) -> &'static str {
        self.kind.headline()
    }

    pub const fn advisory_text(&self) -> &'static str {
        self.advisory.text()
    }

    /// Returns true only for a euthyroid result.
    pub fn is_normal(&self) -> bool {
        self.kind == OutcomeKind::Euthyroid
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.severity)
    }
}
