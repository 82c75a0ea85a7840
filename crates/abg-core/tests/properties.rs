//! Property tests for the rule engine.

use abg_core::rounding::round_to;
use abg_core::{anion_gap, evaluate, expected_compensation, resolve_mixed};
use abg_model::{
    CompensationResult, DetectedDisorders, DiagnosisLabel, DisorderLabel, LabPanel, PrimaryFinding,
};
use proptest::prelude::*;

fn panel_strategy() -> impl Strategy<Value = LabPanel> {
    (
        (110.0..170.0f64, 2.0..7.0f64, 80.0..130.0f64, 4.0..50.0f64),
        (1.0..6.0f64, 6.8..7.8f64, 10.0..100.0f64, 40.0..500.0f64),
    )
        .prop_map(
            |((sodium, potassium, chloride, bicarbonate), (albumin, ph, paco2, pao2))| LabPanel {
                sodium,
                potassium,
                chloride,
                bicarbonate,
                albumin,
                ph,
                paco2,
                pao2,
            },
        )
}

fn disorder_strategy() -> impl Strategy<Value = DisorderLabel> {
    prop_oneof![
        Just(DisorderLabel::RespiratoryAcidosis),
        Just(DisorderLabel::RespiratoryAlkalosis),
        Just(DisorderLabel::MetabolicAcidosis),
        Just(DisorderLabel::MetabolicAlkalosis),
    ]
}

fn has_places(value: f64, places: i32) -> bool {
    let scaled = value * 10f64.powi(places);
    (scaled - scaled.round()).abs() < 1e-6
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(panel in panel_strategy()) {
        prop_assert_eq!(evaluate(&panel), evaluate(&panel));
    }

    #[test]
    fn mixed_flag_matches_findings_and_diagnosis(panel in panel_strategy()) {
        let result = evaluate(&panel);
        prop_assert_eq!(result.is_mixed, result.disorders.len() == 2);
        prop_assert_eq!(result.mixed.is_some(), result.is_mixed);
        prop_assert_eq!(
            result.diagnosis.first() == Some(&DiagnosisLabel::MixedAcidBaseDisorder),
            result.is_mixed
        );
        prop_assert!(result.diagnosis.len() <= 3);
        if !result.is_mixed {
            prop_assert!(result.diagnosis.len() <= 1);
        }
    }

    #[test]
    fn anion_gap_only_with_metabolic_finding(panel in panel_strategy()) {
        let result = evaluate(&panel);
        prop_assert_eq!(result.anion_gap.is_some(), result.disorders.metabolic.is_some());
    }

    #[test]
    fn anion_gap_rounds_to_one_decimal(panel in panel_strategy()) {
        let gap = anion_gap(&panel);
        prop_assert!(has_places(gap.anion_gap, 1));
        prop_assert!(has_places(gap.corrected, 1));
        prop_assert!(has_places(gap.excess, 1));
        prop_assert!(gap.corrected >= gap.anion_gap);
    }

    #[test]
    fn rounding_stays_within_half_a_unit(value in -200.0..200.0f64, places in 0usize..4) {
        let rounded = round_to(value, places);
        let half_unit = 0.5 / 10f64.powi(places as i32);
        prop_assert!((rounded - value).abs() <= half_unit + 1e-9);
        prop_assert_eq!(round_to(rounded, places), rounded);
    }

    #[test]
    fn compensation_rounding(
        disorder in disorder_strategy(),
        paco2 in 10.0..100.0f64,
        bicarbonate in 4.0..50.0f64,
    ) {
        match expected_compensation(Some(disorder), paco2, bicarbonate) {
            Some(CompensationResult::Respiratory { expected_ph, .. }) => {
                prop_assert!(disorder.is_respiratory());
                prop_assert!(has_places(expected_ph, 3));
            }
            Some(CompensationResult::Metabolic { expected_paco2, .. }) => {
                prop_assert!(disorder.is_metabolic());
                prop_assert!(has_places(expected_paco2, 1));
            }
            None => prop_assert!(false, "every disorder has a compensation"),
        }
    }

    #[test]
    fn on_axis_acidosis_alkalosis_pair_never_puts_alkalosis_first(
        paco2 in 10.0..39.9f64,
        bicarbonate in 4.0..21.9f64,
    ) {
        let disorders = DetectedDisorders {
            respiratory: Some(DisorderLabel::RespiratoryAlkalosis),
            metabolic: Some(DisorderLabel::MetabolicAcidosis),
        };
        let resolution = resolve_mixed(&disorders, bicarbonate, paco2);
        prop_assert_ne!(
            resolution.primary,
            PrimaryFinding::Disorder(DisorderLabel::RespiratoryAlkalosis)
        );
    }
}
