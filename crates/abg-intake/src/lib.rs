//! Panel intake ahead of interpretation.
//!
//! This crate is the gate in front of `abg-core`: it parses the nine
//! submitted fields, reconciles the two bicarbonate readings and computes
//! advisory range warnings. A rejected panel never reaches the rule engine.
//!
//! # Example
//!
//! ```
//! use abg_intake::{IntakeOptions, PanelField, RawPanelRequest, intake};
//!
//! let request = RawPanelRequest::new()
//!     .with(PanelField::Sodium, "140")
//!     .with(PanelField::Potassium, "4.0")
//!     .with(PanelField::Chloride, "104")
//!     .with(PanelField::BicarbonateBmp, "24")
//!     .with(PanelField::Albumin, "4.0")
//!     .with(PanelField::Ph, "7.40")
//!     .with(PanelField::Paco2, "40")
//!     .with(PanelField::Pao2, "95")
//!     .with(PanelField::BicarbonateAbg, "24");
//!
//! let accepted = intake(&request, &IntakeOptions::default()).unwrap();
//! assert_eq!(accepted.panel.bicarbonate, 24.0);
//! assert!(accepted.warnings.is_empty());
//! ```

mod error;
pub mod ranges;
pub mod reconcile;
pub mod request;

pub use error::{IntakeError, Result};
pub use ranges::{ADVISORY_RANGES, NormalRange, RangeWarning, advisory_warnings};
pub use reconcile::{IntakeOptions, reconcile_bicarbonate};
pub use request::{PanelField, PanelRequest, RawPanelRequest, RawValue};

use abg_model::LabPanel;

/// A panel accepted for interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Intake {
    pub panel: LabPanel,
    pub warnings: Vec<RangeWarning>,
}

/// Parse, reconcile and annotate a raw request.
pub fn intake(request: &RawPanelRequest, options: &IntakeOptions) -> Result<Intake> {
    let panel = request.parse()?.into_panel(options)?;
    let warnings = advisory_warnings(&panel);
    Ok(Intake { panel, warnings })
}
