//! Raw panel requests and field parsing.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IntakeError, Result};

/// The nine fields of a submitted panel, named as in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PanelField {
    #[serde(rename = "Na")]
    Sodium,
    #[serde(rename = "K")]
    Potassium,
    #[serde(rename = "Cl")]
    Chloride,
    #[serde(rename = "HCO3_bmp")]
    BicarbonateBmp,
    #[serde(rename = "albumin")]
    Albumin,
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "PaCO2")]
    Paco2,
    #[serde(rename = "PaO2")]
    Pao2,
    #[serde(rename = "HCO3_abg")]
    BicarbonateAbg,
}

impl PanelField {
    pub const ALL: [PanelField; 9] = [
        PanelField::Sodium,
        PanelField::Potassium,
        PanelField::Chloride,
        PanelField::BicarbonateBmp,
        PanelField::Albumin,
        PanelField::Ph,
        PanelField::Paco2,
        PanelField::Pao2,
        PanelField::BicarbonateAbg,
    ];

    /// Request key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelField::Sodium => "Na",
            PanelField::Potassium => "K",
            PanelField::Chloride => "Cl",
            PanelField::BicarbonateBmp => "HCO3_bmp",
            PanelField::Albumin => "albumin",
            PanelField::Ph => "pH",
            PanelField::Paco2 => "PaCO2",
            PanelField::Pao2 => "PaO2",
            PanelField::BicarbonateAbg => "HCO3_abg",
        }
    }
}

impl fmt::Display for PanelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field value as submitted: a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    fn parse(&self, field: PanelField) -> Result<f64> {
        let value = match self {
            RawValue::Number(value) => *value,
            RawValue::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| IntakeError::InvalidNumber {
                        field,
                        value: text.clone(),
                    })?
            }
        };
        if !value.is_finite() {
            return Err(IntakeError::InvalidNumber {
                field,
                value: value.to_string(),
            });
        }
        Ok(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// Unvalidated request: any subset of the nine fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPanelRequest {
    values: BTreeMap<PanelField, RawValue>,
}

impl RawPanelRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON object keyed by request field names.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| IntakeError::RequestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let request: Self =
            serde_json::from_str(&text).map_err(|source| IntakeError::RequestParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), fields = request.values.len(), "request loaded");
        Ok(request)
    }

    /// Set a field, replacing any earlier value.
    pub fn set(&mut self, field: PanelField, value: impl Into<RawValue>) {
        self.values.insert(field, value.into());
    }

    #[must_use]
    pub fn with(mut self, field: PanelField, value: impl Into<RawValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: PanelField) -> Option<&RawValue> {
        self.values.get(&field)
    }

    /// Parse every field, failing on the first missing or non-numeric one.
    pub fn parse(&self) -> Result<PanelRequest> {
        let value = |field: PanelField| -> Result<f64> {
            self.get(field)
                .ok_or(IntakeError::MissingField { field })?
                .parse(field)
        };
        Ok(PanelRequest {
            sodium: value(PanelField::Sodium)?,
            potassium: value(PanelField::Potassium)?,
            chloride: value(PanelField::Chloride)?,
            bicarbonate_bmp: value(PanelField::BicarbonateBmp)?,
            albumin: value(PanelField::Albumin)?,
            ph: value(PanelField::Ph)?,
            paco2: value(PanelField::Paco2)?,
            pao2: value(PanelField::Pao2)?,
            bicarbonate_abg: value(PanelField::BicarbonateAbg)?,
        })
    }
}

/// A request whose nine fields are all numbers.
///
/// Bicarbonate is still split between the metabolic panel (BMP) and the
/// blood gas (ABG); see [`crate::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRequest {
    #[serde(rename = "Na")]
    pub sodium: f64,
    #[serde(rename = "K")]
    pub potassium: f64,
    #[serde(rename = "Cl")]
    pub chloride: f64,
    #[serde(rename = "HCO3_bmp")]
    pub bicarbonate_bmp: f64,
    pub albumin: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    #[serde(rename = "PaCO2")]
    pub paco2: f64,
    #[serde(rename = "PaO2")]
    pub pao2: f64,
    #[serde(rename = "HCO3_abg")]
    pub bicarbonate_abg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RawPanelRequest {
        RawPanelRequest::new()
            .with(PanelField::Sodium, "140")
            .with(PanelField::Potassium, 4.2)
            .with(PanelField::Chloride, " 104 ")
            .with(PanelField::BicarbonateBmp, "24")
            .with(PanelField::Albumin, "4.0")
            .with(PanelField::Ph, "7.40")
            .with(PanelField::Paco2, "40")
            .with(PanelField::Pao2, "95")
            .with(PanelField::BicarbonateAbg, "25")
    }

    #[test]
    fn parses_text_and_numbers() {
        let request = complete().parse().expect("complete request");
        assert_eq!(request.sodium, 140.0);
        assert_eq!(request.potassium, 4.2);
        assert_eq!(request.chloride, 104.0);
        assert_eq!(request.bicarbonate_abg, 25.0);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let error = complete()
            .with(PanelField::Paco2, "forty")
            .parse()
            .expect_err("non-numeric PaCO2");
        assert!(matches!(
            error,
            IntakeError::InvalidNumber {
                field: PanelField::Paco2,
                ..
            }
        ));
        assert!(error.is_rejection());
        assert!(
            error
                .to_string()
                .starts_with("Please enter valid numeric values for all fields")
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        let error = complete()
            .with(PanelField::Ph, "NaN")
            .parse()
            .expect_err("NaN pH");
        assert!(matches!(
            error,
            IntakeError::InvalidNumber {
                field: PanelField::Ph,
                ..
            }
        ));
    }

    #[test]
    fn reports_missing_field() {
        let mut request = RawPanelRequest::new();
        for field in PanelField::ALL {
            if field != PanelField::Albumin {
                request.set(field, "1");
            }
        }
        let error = request.parse().expect_err("albumin missing");
        assert!(matches!(
            error,
            IntakeError::MissingField {
                field: PanelField::Albumin
            }
        ));
    }

    #[test]
    fn later_values_override_earlier_ones() {
        let request = complete().with(PanelField::Sodium, 135.0);
        assert_eq!(request.get(PanelField::Sodium), Some(&RawValue::Number(135.0)));
    }
}
