//! Evaluation records and the JSON report envelope.

use std::path::Path;

use abg_intake::{Intake, RangeWarning};
use abg_model::{DiagnosisResult, LabPanel};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

const REPORT_SCHEMA: &str = "abg-interpreter.diagnosis-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// An accepted panel together with its interpretation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub panel: LabPanel,
    pub warnings: Vec<RangeWarning>,
    pub result: DiagnosisResult,
}

impl Evaluation {
    /// Run the rule engine over an accepted panel.
    pub fn from_intake(intake: Intake) -> Self {
        let result = abg_core::evaluate(&intake.panel);
        Self {
            panel: intake.panel,
            warnings: intake.warnings,
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub panel: &'a LabPanel,
    pub warnings: Vec<String>,
    pub result: &'a DiagnosisResult,
}

impl<'a> ReportPayload<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            panel: &evaluation.panel,
            warnings: evaluation
                .warnings
                .iter()
                .map(ToString::to_string)
                .collect(),
            result: &evaluation.result,
        }
    }
}

pub fn report_json(evaluation: &Evaluation) -> Result<String> {
    serde_json::to_string_pretty(&ReportPayload::new(evaluation)).context("serialize report")
}

pub fn write_report_json(path: &Path, evaluation: &Evaluation) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let json = report_json(evaluation)?;
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
