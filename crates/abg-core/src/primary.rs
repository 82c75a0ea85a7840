//! Primary disorder detection on the respiratory and metabolic axes.

use abg_model::{DetectedDisorders, DisorderLabel};

/// Normal PaCO2 in mmHg.
pub const NORMAL_PACO2: f64 = 40.0;
/// Lower bound of the normal bicarbonate band (mEq/L).
pub const BICARBONATE_LOW: f64 = 22.0;
/// Upper bound of the normal bicarbonate band (mEq/L).
pub const BICARBONATE_HIGH: f64 = 26.0;

pub fn respiratory_finding(paco2: f64) -> Option<DisorderLabel> {
    if paco2 > NORMAL_PACO2 {
        Some(DisorderLabel::RespiratoryAcidosis)
    } else if paco2 < NORMAL_PACO2 {
        Some(DisorderLabel::RespiratoryAlkalosis)
    } else {
        None
    }
}

pub fn metabolic_finding(bicarbonate: f64) -> Option<DisorderLabel> {
    if bicarbonate > BICARBONATE_HIGH {
        Some(DisorderLabel::MetabolicAlkalosis)
    } else if bicarbonate < BICARBONATE_LOW {
        Some(DisorderLabel::MetabolicAcidosis)
    } else {
        None
    }
}

/// Classify both axes independently.
pub fn detect_disorders(paco2: f64, bicarbonate: f64) -> DetectedDisorders {
    DetectedDisorders {
        respiratory: respiratory_finding(paco2),
        metabolic: metabolic_finding(bicarbonate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_panel_has_no_findings() {
        for bicarbonate in [22.0, 24.0, 26.0] {
            let found = detect_disorders(40.0, bicarbonate);
            assert!(found.is_empty());
            assert!(!found.is_mixed());
        }
    }

    #[test]
    fn bicarbonate_band_edges_are_normal() {
        assert_eq!(metabolic_finding(22.0), None);
        assert_eq!(metabolic_finding(26.0), None);
        assert_eq!(
            metabolic_finding(21.9),
            Some(DisorderLabel::MetabolicAcidosis)
        );
        assert_eq!(
            metabolic_finding(26.1),
            Some(DisorderLabel::MetabolicAlkalosis)
        );
    }

    #[test]
    fn any_paco2_deviation_is_a_finding() {
        assert_eq!(
            respiratory_finding(40.5),
            Some(DisorderLabel::RespiratoryAcidosis)
        );
        assert_eq!(
            respiratory_finding(39.5),
            Some(DisorderLabel::RespiratoryAlkalosis)
        );
    }

    #[test]
    fn respiratory_listed_before_metabolic() {
        let found = detect_disorders(25.0, 15.0);
        assert!(found.is_mixed());
        assert_eq!(
            found.to_vec(),
            vec![
                DisorderLabel::RespiratoryAlkalosis,
                DisorderLabel::MetabolicAcidosis
            ]
        );
    }
}
