//! Analytes measured on a thyroid function panel.
//!
//! Free fractions (FT4, FT3) are the preferred peripheral readings; the
//! total fractions (TT4, TT3) stand in for them when the free value was not
//! measured.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single laboratory analyte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analyte {
    /// Thyroid-stimulating hormone.
    Tsh,
    /// Free thyroxine.
    FreeT4,
    /// Free triiodothyronine.
    FreeT3,
    /// Total thyroxine.
    TotalT4,
    /// Total triiodothyronine.
    TotalT3,
}

impl Analyte {
    /// All analytes in the order the entry form lists them.
    pub const ALL: [Analyte; 5] = [
        Analyte::Tsh,
        Analyte::FreeT4,
        Analyte::FreeT3,
        Analyte::TotalT4,
        Analyte::TotalT3,
    ];

    /// Short field code used in config files and on the command line.
    pub const fn code(&self) -> &'static str {
        match self {
            Analyte::Tsh => "tsh",
            Analyte::FreeT4 => "ft4",
            Analyte::FreeT3 => "ft3",
            Analyte::TotalT4 => "tt4",
            Analyte::TotalT3 => "tt3",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Analyte::Tsh => "TSH",
            Analyte::FreeT4 => "Free T4",
            Analyte::FreeT3 => "Free T3",
            Analyte::TotalT4 => "Total T4",
            Analyte::TotalT3 => "Total T3",
        }
    }

    /// Unit the reference range is expressed in.
    pub const fn unit(&self) -> &'static str {
        match self {
            Analyte::Tsh => "mIU/L",
            Analyte::FreeT4 => "ng/dL",
            Analyte::FreeT3 => "pg/mL",
            Analyte::TotalT4 => "µg/dL",
            Analyte::TotalT3 => "ng/dL",
        }
    }

    /// Returns true for the thyroxine analytes (FT4, TT4).
    pub fn is_thyroxine(&self) -> bool {
        matches!(self, Analyte::FreeT4 | Analyte::TotalT4)
    }

    /// Returns true for the triiodothyronine analytes (FT3, TT3).
    pub fn is_triiodothyronine(&self) -> bool {
        matches!(self, Analyte::FreeT3 | Analyte::TotalT3)
    }
}

impl fmt::Display for Analyte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Analyte {
    type Err = String;

    /// Parse either the field code (`ft4`) or the label (`Free T4`),
    /// ignoring case and inner whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "tsh" => Ok(Analyte::Tsh),
            "ft4" | "freet4" => Ok(Analyte::FreeT4),
            "ft3" | "freet3" => Ok(Analyte::FreeT3),
            "tt4" | "totalt4" => Ok(Analyte::TotalT4),
            "tt3" | "totalt3" => Ok(Analyte::TotalT3),
            _ => Err(format!("unknown analyte: {s}")),
        }
    }
}

/// Position of a single value relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyteState {
    Low,
    Normal,
    High,
}

impl AnalyteState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnalyteState::Low => "Low",
            AnalyteState::Normal => "Normal",
            AnalyteState::High => "High",
        }
    }
}

impl fmt::Display for AnalyteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!("FT4".parse::<Analyte>(), Ok(Analyte::FreeT4));
        assert_eq!("Total T3".parse::<Analyte>(), Ok(Analyte::TotalT3));
        assert_eq!(" tsh ".parse::<Analyte>(), Ok(Analyte::Tsh));
        assert!("t5".parse::<Analyte>().is_err());
    }

    #[test]
    fn all_is_in_form_order() {
        let codes: Vec<&str> = Analyte::ALL.iter().map(Analyte::code).collect();
        assert_eq!(codes, vec!["tsh", "ft4", "ft3", "tt4", "tt3"]);
    }
}
