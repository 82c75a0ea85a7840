use abg_model::{DiagnosisResult, LabPanel};
use tracing::{debug, info_span};

use crate::anion_gap::anion_gap;
use crate::compensation::expected_compensation;
use crate::diagnosis::compose_diagnosis;
use crate::mixed::resolve_mixed;
use crate::ph::classify_ph;
use crate::primary::detect_disorders;

/// Interpret a reconciled panel.
///
/// - compensation is computed for the respiratory finding when there is one,
///   otherwise for the metabolic finding
/// - the anion gap is computed only when a metabolic finding exists
/// - the mixed resolver runs only when both axes carry a finding
pub fn evaluate(panel: &LabPanel) -> DiagnosisResult {
    let span = info_span!("evaluate");
    let _guard = span.enter();

    let ph_status = classify_ph(panel.ph);
    let disorders = detect_disorders(panel.paco2, panel.bicarbonate);
    let is_mixed = disorders.is_mixed();
    debug!(
        ph_status = %ph_status,
        disorder_count = disorders.len(),
        is_mixed,
        "panel classified"
    );

    let compensation = expected_compensation(disorders.first(), panel.paco2, panel.bicarbonate);
    let anion_gap = disorders.metabolic.map(|_| anion_gap(panel));
    let mixed =
        is_mixed.then(|| resolve_mixed(&disorders, panel.bicarbonate, panel.paco2));
    let diagnosis = compose_diagnosis(&disorders, mixed.as_ref());

    DiagnosisResult {
        ph_status,
        disorders,
        is_mixed,
        compensation,
        anion_gap,
        mixed,
        diagnosis,
    }
}
