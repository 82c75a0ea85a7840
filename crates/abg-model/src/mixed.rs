use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::DisorderLabel;

/// Which component of a mixed disorder dominates the pH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "disorder", rename_all = "snake_case")]
pub enum PrimaryFinding {
    Disorder(DisorderLabel),
    /// The estimated pH stays inside 7.35-7.45.
    EquallyContribute,
    /// The disorder pair has no contribution model.
    Unmodeled,
}

impl fmt::Display for PrimaryFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryFinding::Disorder(label) => write!(f, "{label}"),
            PrimaryFinding::EquallyContribute => f.write_str("Both Disorders Equally Contribute"),
            PrimaryFinding::Unmodeled => f.write_str("Complex Mixed Disorder"),
        }
    }
}

/// The secondary component of a mixed disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "disorder", rename_all = "snake_case")]
pub enum ConcomitantFinding {
    Disorder(DisorderLabel),
    /// No concomitant disorder can be singled out.
    Absent,
    RequiresCorrelation,
}

impl ConcomitantFinding {
    /// The concrete disorder, if this is one.
    pub fn disorder(&self) -> Option<DisorderLabel> {
        match self {
            ConcomitantFinding::Disorder(label) => Some(*label),
            ConcomitantFinding::Absent | ConcomitantFinding::RequiresCorrelation => None,
        }
    }
}

impl fmt::Display for ConcomitantFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcomitantFinding::Disorder(label) => write!(f, "{label}"),
            ConcomitantFinding::Absent => f.write_str("None"),
            ConcomitantFinding::RequiresCorrelation => f.write_str("Requires Clinical Correlation"),
        }
    }
}

/// Estimated pH shifts of the two opposing components.
///
/// Shifts are magnitudes in pH units; `net_ph` is the resulting pH starting
/// from 7.40. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhContribution {
    pub acidosis_shift: f64,
    pub alkalosis_shift: f64,
    pub net_ph: f64,
}

/// Primary/concomitant ordering of a mixed disorder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixedResolution {
    pub primary: PrimaryFinding,
    pub concomitant: ConcomitantFinding,
    /// Present for the two modeled disorder pairs.
    pub contribution: Option<PhContribution>,
}

impl MixedResolution {
    /// The sentinel returned for pairs without a contribution model.
    pub fn unmodeled() -> Self {
        Self {
            primary: PrimaryFinding::Unmodeled,
            concomitant: ConcomitantFinding::RequiresCorrelation,
            contribution: None,
        }
    }
}
