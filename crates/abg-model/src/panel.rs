use serde::{Deserialize, Serialize};

/// A reconciled electrolyte and blood-gas panel.
///
/// Units are fixed: electrolytes in mEq/L, albumin in g/dL, gas tensions in
/// mmHg. `bicarbonate` is the value agreed between the metabolic panel and
/// the blood gas; panels whose two bicarbonate readings disagree never reach
/// this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    #[serde(rename = "Na")]
    pub sodium: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    #[serde(rename = "Cl")]
    pub chloride: f64,
    #[serde(rename = "HCO3")]
    pub bicarbonate: f64,
    pub albumin: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    #[serde(rename = "PaCO2")]
    pub paco2: f64,
    #[serde(rename = "PaO2")]
    pub pao2: f64,
}
