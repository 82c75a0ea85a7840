//! Tests for abg-model types.

use abg_model::{
    Chronicity, CompensationResult, ConcomitantFinding, DetectedDisorders, DiagnosisLabel,
    DisorderLabel, LabPanel, PrimaryFinding,
};

#[test]
fn detected_disorders_order_and_mixing() {
    let both = DetectedDisorders {
        respiratory: Some(DisorderLabel::RespiratoryAlkalosis),
        metabolic: Some(DisorderLabel::MetabolicAcidosis),
    };
    assert!(both.is_mixed());
    assert_eq!(both.len(), 2);
    assert_eq!(
        both.to_vec(),
        vec![
            DisorderLabel::RespiratoryAlkalosis,
            DisorderLabel::MetabolicAcidosis
        ]
    );
    assert_eq!(both.first(), Some(DisorderLabel::RespiratoryAlkalosis));

    let metabolic_only = DetectedDisorders {
        respiratory: None,
        metabolic: Some(DisorderLabel::MetabolicAlkalosis),
    };
    assert!(!metabolic_only.is_mixed());
    assert_eq!(metabolic_only.first(), Some(DisorderLabel::MetabolicAlkalosis));

    let none = DetectedDisorders::default();
    assert!(none.is_empty());
    assert_eq!(none.first(), None);
}

#[test]
fn compensation_type_label() {
    let chronic = CompensationResult::Respiratory {
        disorder: DisorderLabel::RespiratoryAcidosis,
        chronicity: Chronicity::Chronic,
        expected_ph: 7.37,
    };
    assert_eq!(chronic.type_label(), "Chronic Respiratory Acidosis");

    let metabolic = CompensationResult::Metabolic {
        disorder: DisorderLabel::MetabolicAcidosis,
        expected_paco2: 50.8,
    };
    assert_eq!(metabolic.type_label(), "Metabolic Acidosis");
    assert_eq!(metabolic.disorder(), DisorderLabel::MetabolicAcidosis);
}

#[test]
fn mixed_sentinels_display_report_text() {
    assert_eq!(
        PrimaryFinding::EquallyContribute.to_string(),
        "Both Disorders Equally Contribute"
    );
    assert_eq!(PrimaryFinding::Unmodeled.to_string(), "Complex Mixed Disorder");
    assert_eq!(
        ConcomitantFinding::RequiresCorrelation.to_string(),
        "Requires Clinical Correlation"
    );
    assert_eq!(ConcomitantFinding::Absent.disorder(), None);
    assert_eq!(
        ConcomitantFinding::Disorder(DisorderLabel::MetabolicAlkalosis).disorder(),
        Some(DisorderLabel::MetabolicAlkalosis)
    );
}

#[test]
fn diagnosis_label_serializes_as_text() {
    let labels = vec![
        DiagnosisLabel::MixedAcidBaseDisorder,
        DiagnosisLabel::Disorder(DisorderLabel::MetabolicAcidosis),
    ];
    let json = serde_json::to_string(&labels).expect("serialize labels");
    assert_eq!(json, r#"["Mixed Acid-Base Disorder","Metabolic Acidosis"]"#);
    let round: Vec<DiagnosisLabel> = serde_json::from_str(&json).expect("deserialize labels");
    assert_eq!(round, labels);
    assert!(serde_json::from_str::<DiagnosisLabel>(r#""Anemia""#).is_err());
}

#[test]
fn panel_uses_clinical_field_names() {
    let panel = LabPanel {
        sodium: 140.0,
        potassium: 4.0,
        chloride: 100.0,
        bicarbonate: 24.0,
        albumin: 4.0,
        ph: 7.4,
        paco2: 40.0,
        pao2: 95.0,
    };
    let value = serde_json::to_value(panel).expect("serialize panel");
    assert_eq!(value["Na"], 140.0);
    assert_eq!(value["HCO3"], 24.0);
    assert_eq!(value["pH"], 7.4);
    assert_eq!(value["PaCO2"], 40.0);
}
