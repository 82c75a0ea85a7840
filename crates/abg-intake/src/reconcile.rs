//! Bicarbonate reconciliation between the metabolic panel and the blood gas.

use abg_model::LabPanel;
use tracing::{debug, warn};

use crate::error::{IntakeError, Result};
use crate::request::PanelRequest;

/// Default maximum disagreement between BMP and ABG bicarbonate (mEq/L).
pub const DEFAULT_MAX_BICARBONATE_DIVERGENCE: f64 = 3.0;

/// Options controlling intake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeOptions {
    /// Readings further apart than this make the panel unevaluable.
    pub max_bicarbonate_divergence: f64,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            max_bicarbonate_divergence: DEFAULT_MAX_BICARBONATE_DIVERGENCE,
        }
    }
}

impl IntakeOptions {
    #[must_use]
    pub fn with_max_bicarbonate_divergence(mut self, limit: f64) -> Self {
        self.max_bicarbonate_divergence = limit;
        self
    }
}

/// Average the two bicarbonate readings when they agree within the limit.
pub fn reconcile_bicarbonate(bmp: f64, abg: f64, options: &IntakeOptions) -> Result<f64> {
    let limit = options.max_bicarbonate_divergence;
    if (bmp - abg).abs() > limit {
        warn!(limit, "bicarbonate readings diverge");
        return Err(IntakeError::BicarbonateDivergence { bmp, abg, limit });
    }
    let reconciled = (bmp + abg) / 2.0;
    debug!("bicarbonate reconciled");
    Ok(reconciled)
}

impl PanelRequest {
    /// Build the reconciled panel the rule engine consumes.
    pub fn into_panel(self, options: &IntakeOptions) -> Result<LabPanel> {
        let bicarbonate =
            reconcile_bicarbonate(self.bicarbonate_bmp, self.bicarbonate_abg, options)?;
        Ok(LabPanel {
            sodium: self.sodium,
            potassium: self.potassium,
            chloride: self.chloride,
            bicarbonate,
            albumin: self.albumin,
            ph: self.ph,
            paco2: self.paco2,
            pao2: self.pao2,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_agreeing_readings() {
        let options = IntakeOptions::default();
        assert_eq!(reconcile_bicarbonate(24.0, 26.0, &options).ok(), Some(25.0));
        assert_eq!(reconcile_bicarbonate(20.0, 23.0, &options).ok(), Some(21.5));
    }

    #[test]
    fn rejects_divergent_readings() {
        let options = IntakeOptions::default();
        let error = reconcile_bicarbonate(20.0, 23.5, &options).expect_err("diverges by 3.5");
        assert!(matches!(error, IntakeError::BicarbonateDivergence { .. }));
        assert!(error.to_string().starts_with(
            "[HCO3-] values from BMP and ABG differ by more than 3 mEq/L"
        ));
    }

    #[test]
    fn limit_is_configurable() {
        let options = IntakeOptions::default().with_max_bicarbonate_divergence(5.0);
        assert_eq!(reconcile_bicarbonate(20.0, 24.0, &options).ok(), Some(22.0));
    }
}
