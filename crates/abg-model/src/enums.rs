//! Type-safe enumerations for acid-base findings.
//!
//! Each enum carries the clinical label used in reports through
//! `as_str()` / `Display`, and parses the same label back through `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four simple acid-base disorders.
///
/// Respiratory disorders are driven by PaCO2, metabolic disorders by
/// bicarbonate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisorderLabel {
    RespiratoryAcidosis,
    RespiratoryAlkalosis,
    MetabolicAcidosis,
    MetabolicAlkalosis,
}

impl DisorderLabel {
    /// Returns the clinical label as it appears in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisorderLabel::RespiratoryAcidosis => "Respiratory Acidosis",
            DisorderLabel::RespiratoryAlkalosis => "Respiratory Alkalosis",
            DisorderLabel::MetabolicAcidosis => "Metabolic Acidosis",
            DisorderLabel::MetabolicAlkalosis => "Metabolic Alkalosis",
        }
    }

    pub fn is_respiratory(&self) -> bool {
        matches!(
            self,
            DisorderLabel::RespiratoryAcidosis | DisorderLabel::RespiratoryAlkalosis
        )
    }

    pub fn is_metabolic(&self) -> bool {
        !self.is_respiratory()
    }
}

impl fmt::Display for DisorderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DisorderLabel {
    type Err = String;

    /// Parse a clinical label (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "RESPIRATORY ACIDOSIS" => Ok(DisorderLabel::RespiratoryAcidosis),
            "RESPIRATORY ALKALOSIS" => Ok(DisorderLabel::RespiratoryAlkalosis),
            "METABOLIC ACIDOSIS" => Ok(DisorderLabel::MetabolicAcidosis),
            "METABOLIC ALKALOSIS" => Ok(DisorderLabel::MetabolicAlkalosis),
            _ => Err(format!("Unknown disorder label: {s}")),
        }
    }
}

/// Blood pH relative to the 7.40 reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhStatus {
    Acidemic,
    Normal,
    Alkalemic,
}

impl PhStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhStatus::Acidemic => "Acidemic",
            PhStatus::Normal => "Normal",
            PhStatus::Alkalemic => "Alkalemic",
        }
    }
}

impl fmt::Display for PhStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Time course of a respiratory disorder, inferred from renal compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chronicity {
    Acute,
    Chronic,
}

impl Chronicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chronicity::Acute => "Acute",
            Chronicity::Chronic => "Chronic",
        }
    }
}

impl fmt::Display for Chronicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
