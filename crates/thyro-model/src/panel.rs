//! The lab panel input record.

use serde::Serialize;
use tracing::warn;

use crate::analyte::Analyte;

/// Up to five measured values. Absent means "not measured".
///
/// Stored values are always finite and non-negative: anything else handed to
/// [`LabPanel::set`] is dropped and the analyte is treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LabPanel {
    #[serde(skip_serializing_if = "Option::is_none")]
    tsh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ft4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ft3: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tt4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tt3: Option<f64>,
}

/// A peripheral hormone reading together with the analyte it came from.
///
/// The source analyte decides which reference range applies: a thyroxine
/// reading taken from TT4 is judged against the TT4 range, never FT4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedReading {
    pub analyte: Analyte,
    pub value: f64,
}

impl LabPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LabPanel::set`].
    #[must_use]
    pub fn with(mut self, analyte: Analyte, value: f64) -> Self {
        self.set(analyte, Some(value));
        self
    }

    /// Record or clear a value. Negative and non-finite values are stored as absent.
    pub fn set(&mut self, analyte: Analyte, value: Option<f64>) {
        let value = value.filter(|v| {
            let valid = v.is_finite() && *v >= 0.0;
            if !valid {
                warn!(analyte = analyte.code(), "discarding non-finite or negative value");
            }
            valid
        });
        *self.slot_mut(analyte) = value;
    }

    pub fn get(&self, analyte: Analyte) -> Option<f64> {
        match analyte {
            Analyte::Tsh => self.tsh,
            Analyte::FreeT4 => self.ft4,
            Analyte::FreeT3 => self.ft3,
            Analyte::TotalT4 => self.tt4,
            Analyte::TotalT3 => self.tt3,
        }
    }

    fn slot_mut(&mut self, analyte: Analyte) -> &mut Option<f64> {
        match analyte {
            Analyte::Tsh => &mut self.tsh,
            Analyte::FreeT4 => &mut self.ft4,
            Analyte::FreeT3 => &mut self.ft3,
            Analyte::TotalT4 => &mut self.tt4,
            Analyte::TotalT3 => &mut self.tt3,
        }
    }

    pub fn tsh(&self) -> Option<f64> {
        self.tsh
    }

    /// FT4 if measured, otherwise TT4.
    pub fn thyroxine(&self) -> Option<ResolvedReading> {
        self.resolve(Analyte::FreeT4, Analyte::TotalT4)
    }

    /// FT3 if measured, otherwise TT3.
    pub fn triiodothyronine(&self) -> Option<ResolvedReading> {
        self.resolve(Analyte::FreeT3, Analyte::TotalT3)
    }

    fn resolve(&self, preferred: Analyte, fallback: Analyte) -> Option<ResolvedReading> {
        [preferred, fallback].into_iter().find_map(|analyte| {
            self.get(analyte)
                .map(|value| ResolvedReading { analyte, value })
        })
    }

    /// Measured analytes with their values, in form order.
    pub fn entries(&self) -> impl Iterator<Item = (Analyte, f64)> + '_ {
        Analyte::ALL
            .into_iter()
            .filter_map(|analyte| self.get(analyte).map(|value| (analyte, value)))
    }

    pub fn entered_count(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entered_count() == 0
    }
}
