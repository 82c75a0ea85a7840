//! Data model for acid-base panel interpretation.
//!
//! Every type here is constructed fresh per evaluation and carries no
//! behavior beyond labeling; the rule engine lives in `abg-core`.

pub mod diagnosis;
pub mod enums;
pub mod findings;
pub mod mixed;
pub mod panel;

pub use diagnosis::{DiagnosisLabel, DiagnosisResult};
pub use enums::{Chronicity, DisorderLabel, PhStatus};
pub use findings::{AnionGapResult, CompensationResult, DetectedDisorders};
pub use mixed::{ConcomitantFinding, MixedResolution, PhContribution, PrimaryFinding};
pub use panel::LabPanel;
