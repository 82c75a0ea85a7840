use serde::{Deserialize, Serialize};

use crate::enums::{Chronicity, DisorderLabel};

/// Disorders detected on the respiratory and metabolic axes.
///
/// Each axis holds at most one finding, so a panel yields zero, one or two
/// disorders. Iteration order is respiratory first, then metabolic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedDisorders {
    pub respiratory: Option<DisorderLabel>,
    pub metabolic: Option<DisorderLabel>,
}

impl DetectedDisorders {
    /// True when both axes carry a finding.
    pub fn is_mixed(&self) -> bool {
        self.respiratory.is_some() && self.metabolic.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.respiratory.is_none() && self.metabolic.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = DisorderLabel> + '_ {
        self.respiratory.into_iter().chain(self.metabolic)
    }

    /// The first finding in report order.
    pub fn first(&self) -> Option<DisorderLabel> {
        self.respiratory.or(self.metabolic)
    }

    pub fn to_vec(&self) -> Vec<DisorderLabel> {
        self.iter().collect()
    }
}

/// Expected physiological compensation for a primary disorder.
///
/// Respiratory disorders predict a pH (3 decimals); metabolic disorders
/// predict a PaCO2 in mmHg (1 decimal).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompensationResult {
    Respiratory {
        disorder: DisorderLabel,
        chronicity: Chronicity,
        expected_ph: f64,
    },
    Metabolic {
        disorder: DisorderLabel,
        expected_paco2: f64,
    },
}

impl CompensationResult {
    pub fn disorder(&self) -> DisorderLabel {
        match self {
            CompensationResult::Respiratory { disorder, .. }
            | CompensationResult::Metabolic { disorder, .. } => *disorder,
        }
    }

    /// Report label, e.g. "Chronic Respiratory Acidosis".
    pub fn type_label(&self) -> String {
        match self {
            CompensationResult::Respiratory {
                disorder,
                chronicity,
                ..
            } => format!("{chronicity} {disorder}"),
            CompensationResult::Metabolic { disorder, .. } => disorder.to_string(),
        }
    }
}

/// Anion gap figures in mEq/L, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnionGapResult {
    pub anion_gap: f64,
    /// Gap corrected for hypoalbuminemia.
    pub corrected: f64,
    /// Corrected gap above the normal value of 12 (delta anion gap).
    pub excess: f64,
}
