//! Advisory normal ranges.
//!
//! Warnings are informational and never change the interpretation. The pH
//! band here (7.35-7.45) is separate from the exact 7.40 point
//! the rule engine classifies against.

use std::fmt;

use abg_model::LabPanel;
use serde::Serialize;

/// Normal reference range for one analyte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalRange {
    pub analyte: &'static str,
    pub low: f64,
    pub high: f64,
    pub unit: Option<&'static str>,
}

impl NormalRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

impl fmt::Display for NormalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{}-{} {}", self.low, self.high, unit),
            None => write!(f, "{}-{}", self.low, self.high),
        }
    }
}

pub const PH_RANGE: NormalRange = NormalRange {
    analyte: "pH",
    low: 7.35,
    high: 7.45,
    unit: None,
};

pub const PACO2_RANGE: NormalRange = NormalRange {
    analyte: "PaCO2",
    low: 38.0,
    high: 42.0,
    unit: Some("mmHg"),
};

pub const BICARBONATE_RANGE: NormalRange = NormalRange {
    analyte: "[HCO3-]",
    low: 22.0,
    high: 26.0,
    unit: Some("mEq/L"),
};

/// Ranges checked by [`advisory_warnings`], in report order.
pub const ADVISORY_RANGES: [NormalRange; 3] = [PH_RANGE, PACO2_RANGE, BICARBONATE_RANGE];

/// A value outside its advisory range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeWarning {
    pub range: NormalRange,
    pub value: f64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is outside the normal range ({}).",
            self.range.analyte, self.range
        )
    }
}

/// Check pH, PaCO2 and reconciled bicarbonate against their ranges.
pub fn advisory_warnings(panel: &LabPanel) -> Vec<RangeWarning> {
    [
        (PH_RANGE, panel.ph),
        (PACO2_RANGE, panel.paco2),
        (BICARBONATE_RANGE, panel.bicarbonate),
    ]
    .into_iter()
    .filter(|(range, value)| !range.contains(*value))
    .map(|(range, value)| RangeWarning { range, value })
    .collect()
}
