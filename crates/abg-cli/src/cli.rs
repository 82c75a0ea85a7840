//! CLI argument definitions for the acid-base interpreter.

use std::path::PathBuf;

use abg_intake::reconcile::DEFAULT_MAX_BICARBONATE_DIVERGENCE;
use abg_intake::{PanelField, RawPanelRequest};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "abg",
    version,
    about = "Acid-base interpreter - classify disorders from an electrolyte and blood-gas panel",
    long_about = "Classify the acid-base disorder(s) behind an electrolyte and blood-gas panel.\n\n\
                  Reports pH status, primary disorders, expected compensation,\n\
                  anion gap with albumin correction, and mixed-disorder ordering."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow lab values to appear in logs (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interpret one panel.
    Evaluate(EvaluateArgs),

    /// List the advisory normal ranges.
    Ranges,
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// JSON request with the nine panel fields (flags override its values).
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Sodium (mEq/L).
    #[arg(long = "na", value_name = "VALUE", allow_hyphen_values = true)]
    pub sodium: Option<String>,

    /// Potassium (mEq/L).
    #[arg(long = "k", value_name = "VALUE", allow_hyphen_values = true)]
    pub potassium: Option<String>,

    /// Chloride (mEq/L).
    #[arg(long = "cl", value_name = "VALUE", allow_hyphen_values = true)]
    pub chloride: Option<String>,

    /// Bicarbonate from the metabolic panel (mEq/L).
    #[arg(long = "hco3-bmp", value_name = "VALUE", allow_hyphen_values = true)]
    pub bicarbonate_bmp: Option<String>,

    /// Albumin (g/dL).
    #[arg(long = "albumin", value_name = "VALUE", allow_hyphen_values = true)]
    pub albumin: Option<String>,

    /// Arterial pH.
    #[arg(long = "ph", value_name = "VALUE", allow_hyphen_values = true)]
    pub ph: Option<String>,

    /// PaCO2 (mmHg).
    #[arg(long = "paco2", value_name = "VALUE", allow_hyphen_values = true)]
    pub paco2: Option<String>,

    /// PaO2 (mmHg).
    #[arg(long = "pao2", value_name = "VALUE", allow_hyphen_values = true)]
    pub pao2: Option<String>,

    /// Bicarbonate from the blood gas (mEq/L).
    #[arg(long = "hco3-abg", value_name = "VALUE", allow_hyphen_values = true)]
    pub bicarbonate_abg: Option<String>,

    /// Maximum allowed difference between BMP and ABG bicarbonate (mEq/L).
    #[arg(
        long = "max-hco3-divergence",
        value_name = "MEQ_L",
        default_value_t = DEFAULT_MAX_BICARBONATE_DIVERGENCE
    )]
    pub max_bicarbonate_divergence: f64,

    /// Output format on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also write a JSON report to this path.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl EvaluateArgs {
    /// Field flags paired with their request keys.
    pub fn field_values(&self) -> [(PanelField, Option<&str>); 9] {
        [
            (PanelField::Sodium, self.sodium.as_deref()),
            (PanelField::Potassium, self.potassium.as_deref()),
            (PanelField::Chloride, self.chloride.as_deref()),
            (PanelField::BicarbonateBmp, self.bicarbonate_bmp.as_deref()),
            (PanelField::Albumin, self.albumin.as_deref()),
            (PanelField::Ph, self.ph.as_deref()),
            (PanelField::Paco2, self.paco2.as_deref()),
            (PanelField::Pao2, self.pao2.as_deref()),
            (PanelField::BicarbonateAbg, self.bicarbonate_abg.as_deref()),
        ]
    }

    /// Apply the field flags on top of `request`.
    pub fn apply_overrides(&self, request: &mut RawPanelRequest) {
        for (field, value) in self.field_values() {
            if let Some(value) = value {
                request.set(field, value);
            }
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
