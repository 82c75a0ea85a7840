//! Error types for panel intake.

use std::path::PathBuf;
use thiserror::Error;

use crate::request::PanelField;

/// Reasons a submitted panel is turned away before interpretation.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// A field is not a finite number.
    #[error("Please enter valid numeric values for all fields ({field}: '{value}').")]
    InvalidNumber { field: PanelField, value: String },

    /// A field was not supplied at all.
    #[error("Please enter valid numeric values for all fields ({field} is missing).")]
    MissingField { field: PanelField },

    /// Metabolic panel and blood gas bicarbonate disagree.
    #[error(
        "[HCO3-] values from BMP and ABG differ by more than {limit} mEq/L \
         (BMP {bmp}, ABG {abg}). Results may be uninterpretable."
    )]
    BicarbonateDivergence { bmp: f64, abg: f64, limit: f64 },

    #[error("failed to read request {path}: {source}")]
    RequestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse request {path}: {source}")]
    RequestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IntakeError {
    /// True for rejections of the submitted values themselves, as opposed to
    /// failures reading the request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            IntakeError::InvalidNumber { .. }
                | IntakeError::MissingField { .. }
                | IntakeError::BicarbonateDivergence { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
