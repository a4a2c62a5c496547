//! Reference ranges for the five panel analytes.
//!
//! The table is a process-wide constant by default. Callers that need
//! different laboratory ranges apply a [`RangeOverrides`] set, which is
//! validated before it replaces any bound.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyte::{Analyte, AnalyteState};
use crate::error::{Result, ThyroError};

/// Inclusive reference interval for one analyte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub low: f64,
    pub high: f64,
}

impl ReferenceRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Classify a value against the range. Both bounds count as Normal.
    pub fn state(&self, value: f64) -> AnalyteState {
        if value < self.low {
            AnalyteState::Low
        } else if value > self.high {
            AnalyteState::High
        } else {
            AnalyteState::Normal
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.state(value) == AnalyteState::Normal
    }

    /// Form hint, e.g. `Normal: 0.4–4 mIU/L`.
    pub fn hint(&self, analyte: Analyte) -> String {
        format!("Normal: {}–{} {}", self.low, self.high, analyte.unit())
    }

    fn validate(&self, analyte: Analyte) -> Result<()> {
        let finite = self.low.is_finite() && self.high.is_finite();
        if !finite || self.low < 0.0 || self.low > self.high {
            return Err(ThyroError::InvalidRange {
                analyte,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// TSH cutoffs used when no thyroxine reading is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TshCutoffs {
    /// TSH at or above this value is treated as overt hypothyroidism.
    pub marked_elevation: f64,
    /// TSH at or below this value is treated as overt hyperthyroidism.
    pub marked_suppression: f64,
}

impl Default for TshCutoffs {
    fn default() -> Self {
        Self {
            marked_elevation: 10.0,
            marked_suppression: 0.05,
        }
    }
}

/// The full reference table consulted by the classifier.
///
/// Only obtainable from [`ReferenceRanges::default`] or
/// [`ReferenceRanges::with_overrides`], so every instance has passed
/// [`ReferenceRanges::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceRanges {
    tsh: ReferenceRange,
    ft4: ReferenceRange,
    ft3: ReferenceRange,
    tt4: ReferenceRange,
    tt3: ReferenceRange,
    cutoffs: TshCutoffs,
}

impl Default for ReferenceRanges {
    fn default() -> Self {
        Self {
            tsh: ReferenceRange::new(0.4, 4.0),
            ft4: ReferenceRange::new(0.8, 1.8),
            ft3: ReferenceRange::new(2.3, 4.2),
            tt4: ReferenceRange::new(5.0, 12.0),
            tt3: ReferenceRange::new(80.0, 200.0),
            cutoffs: TshCutoffs::default(),
        }
    }
}

impl ReferenceRanges {
    pub fn get(&self, analyte: Analyte) -> &ReferenceRange {
        match analyte {
            Analyte::Tsh => &self.tsh,
            Analyte::FreeT4 => &self.ft4,
            Analyte::FreeT3 => &self.ft3,
            Analyte::TotalT4 => &self.tt4,
            Analyte::TotalT3 => &self.tt3,
        }
    }

    pub fn cutoffs(&self) -> &TshCutoffs {
        &self.cutoffs
    }

    fn get_mut(&mut self, analyte: Analyte) -> &mut ReferenceRange {
        match analyte {
            Analyte::Tsh => &mut self.tsh,
            Analyte::FreeT4 => &mut self.ft4,
            Analyte::FreeT3 => &mut self.ft3,
            Analyte::TotalT4 => &mut self.tt4,
            Analyte::TotalT3 => &mut self.tt3,
        }
    }

    /// State of `value` for `analyte`.
    pub fn state(&self, analyte: Analyte, value: f64) -> AnalyteState {
        self.get(analyte).state(value)
    }

    /// Apply overrides on top of this table and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ThyroError::InvalidRange`] or [`ThyroError::InvalidCutoff`]
    /// if the merged table is inconsistent. `self` is left untouched.
    pub fn with_overrides(&self, overrides: &RangeOverrides) -> Result<Self> {
        let mut merged = *self;
        for analyte in Analyte::ALL {
            let Some(entry) = overrides.get(analyte) else {
                continue;
            };
            let range = merged.get_mut(analyte);
            if let Some(low) = entry.low {
                range.low = low;
            }
            if let Some(high) = entry.high {
                range.high = high;
            }
            debug!(
                analyte = analyte.code(),
                low = range.low,
                high = range.high,
                "reference range overridden"
            );
        }
        if let Some(cutoffs) = &overrides.cutoffs {
            if let Some(value) = cutoffs.tsh_marked_elevation {
                merged.cutoffs.marked_elevation = value;
            }
            if let Some(value) = cutoffs.tsh_marked_suppression {
                merged.cutoffs.marked_suppression = value;
            }
        }
        merged.validate()?;
        Ok(merged)
    }

    /// Check every range and the TSH cutoffs for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<()> {
        for analyte in Analyte::ALL {
            self.get(analyte).validate(analyte)?;
        }
        let TshCutoffs {
            marked_elevation,
            marked_suppression,
        } = self.cutoffs;
        if !marked_elevation.is_finite() || marked_elevation <= self.tsh.high {
            return Err(ThyroError::InvalidCutoff {
                message: format!(
                    "marked elevation {marked_elevation} must be above TSH upper bound {}",
                    self.tsh.high
                ),
            });
        }
        if !marked_suppression.is_finite()
            || marked_suppression < 0.0
            || marked_suppression >= self.tsh.low
        {
            return Err(ThyroError::InvalidCutoff {
                message: format!(
                    "marked suppression {marked_suppression} must be non-negative and below TSH lower bound {}",
                    self.tsh.low
                ),
            });
        }
        Ok(())
    }
}

/// Optional replacement bounds for one analyte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyteOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
}

/// Optional replacement TSH-only cutoffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CutoffOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsh_marked_elevation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsh_marked_suppression: Option<f64>,
}

/// Override set as read from a range configuration file.
///
/// ```toml
/// [tsh]
/// high = 4.5
///
/// [cutoffs]
/// tsh_marked_suppression = 0.01
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsh: Option<AnalyteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ft4: Option<AnalyteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ft3: Option<AnalyteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tt4: Option<AnalyteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tt3: Option<AnalyteOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoffs: Option<CutoffOverrides>,
}

impl RangeOverrides {
    pub fn get(&self, analyte: Analyte) -> Option<&AnalyteOverride> {
        match analyte {
            Analyte::Tsh => self.tsh.as_ref(),
            Analyte::FreeT4 => self.ft4.as_ref(),
            Analyte::FreeT3 => self.ft3.as_ref(),
            Analyte::TotalT4 => self.tt4.as_ref(),
            Analyte::TotalT3 => self.tt3.as_ref(),
        }
    }

    /// Set the override for one analyte.
    #[must_use]
    pub fn with(mut self, analyte: Analyte, low: Option<f64>, high: Option<f64>) -> Self {
        let entry = Some(AnalyteOverride { low, high });
        match analyte {
            Analyte::Tsh => self.tsh = entry,
            Analyte::FreeT4 => self.ft4 = entry,
            Analyte::FreeT3 => self.ft3 = entry,
            Analyte::TotalT4 => self.tt4 = entry,
            Analyte::TotalT3 => self.tt3 = entry,
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
