use anyhow::Result;
use tracing::{info, info_span, warn};

use abg_cli::logging::redact_value;
use abg_cli::report::Evaluation;
use abg_cli::summary::ranges_table;
use abg_intake::{IntakeError, IntakeOptions, RawPanelRequest, intake};

use crate::cli::EvaluateArgs;

/// Outcome of `abg evaluate`.
#[derive(Debug)]
pub enum EvaluateOutcome {
    Evaluated(Box<Evaluation>),
    /// The panel was turned away at intake; nothing was interpreted.
    Rejected(IntakeError),
}

pub fn run_evaluate(args: &EvaluateArgs) -> Result<EvaluateOutcome> {
    let span = info_span!("evaluate_command");
    let _guard = span.enter();

    let mut request = match &args.input {
        Some(path) => RawPanelRequest::from_json_file(path)?,
        None => RawPanelRequest::new(),
    };
    args.apply_overrides(&mut request);

    let options =
        IntakeOptions::default().with_max_bicarbonate_divergence(args.max_bicarbonate_divergence);
    let accepted = match intake(&request, &options) {
        Ok(accepted) => accepted,
        Err(error) if error.is_rejection() => {
            warn!(reason = rejection_reason(&error), "panel rejected at intake");
            return Ok(EvaluateOutcome::Rejected(error));
        }
        Err(error) => return Err(error.into()),
    };
    for warning in &accepted.warnings {
        warn!(
            analyte = warning.range.analyte,
            value = %redact_value(warning.value),
            range = %warning.range,
            "value outside advisory range"
        );
    }

    let evaluation = Evaluation::from_intake(accepted);
    info!(
        ph = %redact_value(evaluation.panel.ph),
        paco2 = %redact_value(evaluation.panel.paco2),
        bicarbonate = %redact_value(evaluation.panel.bicarbonate),
        ph_status = %evaluation.result.ph_status,
        diagnosis = ?evaluation.result.diagnosis_labels(),
        "panel evaluated"
    );
    Ok(EvaluateOutcome::Evaluated(Box::new(evaluation)))
}

fn rejection_reason(error: &IntakeError) -> &'static str {
    match error {
        IntakeError::InvalidNumber { .. } => "invalid_number",
        IntakeError::MissingField { .. } => "missing_field",
        IntakeError::BicarbonateDivergence { .. } => "bicarbonate_divergence",
        IntakeError::RequestRead { .. } | IntakeError::RequestParse { .. } => "request",
    }
}

pub fn run_ranges() -> Result<()> {
    println!("{}", ranges_table());
    Ok(())
}
