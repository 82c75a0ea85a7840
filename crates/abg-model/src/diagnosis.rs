use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{DisorderLabel, PhStatus};
use crate::findings::{AnionGapResult, CompensationResult, DetectedDisorders};
use crate::mixed::MixedResolution;

const MIXED_LABEL: &str = "Mixed Acid-Base Disorder";
const COMPLEX_LABEL: &str = "Complex Mixed Disorder";
const CORRELATION_LABEL: &str = "Requires Clinical Correlation";

/// One entry of the final diagnosis list.
///
/// Serialized as its clinical label. The last two variants only follow
/// `MixedAcidBaseDisorder` when the disorder pair has no contribution model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DiagnosisLabel {
    MixedAcidBaseDisorder,
    Disorder(DisorderLabel),
    ComplexMixedDisorder,
    RequiresClinicalCorrelation,
}

impl fmt::Display for DiagnosisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosisLabel::MixedAcidBaseDisorder => f.write_str(MIXED_LABEL),
            DiagnosisLabel::Disorder(label) => write!(f, "{label}"),
            DiagnosisLabel::ComplexMixedDisorder => f.write_str(COMPLEX_LABEL),
            DiagnosisLabel::RequiresClinicalCorrelation => f.write_str(CORRELATION_LABEL),
        }
    }
}

impl FromStr for DiagnosisLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(MIXED_LABEL) {
            Ok(DiagnosisLabel::MixedAcidBaseDisorder)
        } else if trimmed.eq_ignore_ascii_case(COMPLEX_LABEL) {
            Ok(DiagnosisLabel::ComplexMixedDisorder)
        } else if trimmed.eq_ignore_ascii_case(CORRELATION_LABEL) {
            Ok(DiagnosisLabel::RequiresClinicalCorrelation)
        } else {
            trimmed.parse().map(DiagnosisLabel::Disorder)
        }
    }
}

impl From<DiagnosisLabel> for String {
    fn from(label: DiagnosisLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for DiagnosisLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisorderLabel> for DiagnosisLabel {
    fn from(label: DisorderLabel) -> Self {
        DiagnosisLabel::Disorder(label)
    }
}

/// Complete interpretation of one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub ph_status: PhStatus,
    pub disorders: DetectedDisorders,
    pub is_mixed: bool,
    pub compensation: Option<CompensationResult>,
    pub anion_gap: Option<AnionGapResult>,
    pub mixed: Option<MixedResolution>,
    pub diagnosis: Vec<DiagnosisLabel>,
}

impl DiagnosisResult {
    /// Diagnosis entries rendered as report strings.
    pub fn diagnosis_labels(&self) -> Vec<String> {
        self.diagnosis.iter().map(ToString::to_string).collect()
    }
}
