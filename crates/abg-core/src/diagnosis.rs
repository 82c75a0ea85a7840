use abg_model::{
    ConcomitantFinding, DetectedDisorders, DiagnosisLabel, MixedResolution, PrimaryFinding,
};

/// Assemble the ordered diagnosis list.
///
/// A mixed state leads with "Mixed Acid-Base Disorder", followed by the
/// primary and concomitant findings unless neither dominates. An unmodeled
/// pair contributes its sentinel labels. Otherwise the single detected
/// disorder is listed, plus a concomitant disorder only when the resolution
/// names a concrete one.
pub fn compose_diagnosis(
    disorders: &DetectedDisorders,
    resolution: Option<&MixedResolution>,
) -> Vec<DiagnosisLabel> {
    let mut diagnosis = Vec::new();
    if disorders.is_mixed() {
        diagnosis.push(DiagnosisLabel::MixedAcidBaseDisorder);
        if let Some(resolution) = resolution
            && resolution.primary != PrimaryFinding::EquallyContribute
        {
            diagnosis.extend(primary_label(resolution.primary));
            diagnosis.extend(concomitant_label(resolution.concomitant));
        }
        return diagnosis;
    }
    if let Some(first) = disorders.first() {
        diagnosis.push(DiagnosisLabel::Disorder(first));
    }
    if let Some(concomitant) = resolution.and_then(|resolution| resolution.concomitant.disorder())
    {
        diagnosis.push(DiagnosisLabel::Disorder(concomitant));
    }
    diagnosis
}

fn primary_label(primary: PrimaryFinding) -> Option<DiagnosisLabel> {
    match primary {
        PrimaryFinding::Disorder(label) => Some(DiagnosisLabel::Disorder(label)),
        PrimaryFinding::Unmodeled => Some(DiagnosisLabel::ComplexMixedDisorder),
        PrimaryFinding::EquallyContribute => None,
    }
}

fn concomitant_label(concomitant: ConcomitantFinding) -> Option<DiagnosisLabel> {
    match concomitant {
        ConcomitantFinding::Disorder(label) => Some(DiagnosisLabel::Disorder(label)),
        ConcomitantFinding::RequiresCorrelation => {
            Some(DiagnosisLabel::RequiresClinicalCorrelation)
        }
        ConcomitantFinding::Absent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abg_model::DisorderLabel;

    fn mixed() -> DetectedDisorders {
        DetectedDisorders {
            respiratory: Some(DisorderLabel::RespiratoryAlkalosis),
            metabolic: Some(DisorderLabel::MetabolicAcidosis),
        }
    }

    #[test]
    fn mixed_with_dominant_component() {
        let resolution = MixedResolution {
            primary: PrimaryFinding::Disorder(DisorderLabel::MetabolicAcidosis),
            concomitant: ConcomitantFinding::Disorder(DisorderLabel::RespiratoryAlkalosis),
            contribution: None,
        };
        assert_eq!(
            compose_diagnosis(&mixed(), Some(&resolution)),
            vec![
                DiagnosisLabel::MixedAcidBaseDisorder,
                DiagnosisLabel::Disorder(DisorderLabel::MetabolicAcidosis),
                DiagnosisLabel::Disorder(DisorderLabel::RespiratoryAlkalosis),
            ]
        );
    }

    #[test]
    fn mixed_with_equal_contribution_lists_only_the_mixed_label() {
        let resolution = MixedResolution {
            primary: PrimaryFinding::EquallyContribute,
            concomitant: ConcomitantFinding::Absent,
            contribution: None,
        };
        assert_eq!(
            compose_diagnosis(&mixed(), Some(&resolution)),
            vec![DiagnosisLabel::MixedAcidBaseDisorder]
        );
    }

    #[test]
    fn unmodeled_mixed_pair_lists_sentinel_labels() {
        let disorders = DetectedDisorders {
            respiratory: Some(DisorderLabel::RespiratoryAcidosis),
            metabolic: Some(DisorderLabel::MetabolicAcidosis),
        };
        assert_eq!(
            compose_diagnosis(&disorders, Some(&MixedResolution::unmodeled())),
            vec![
                DiagnosisLabel::MixedAcidBaseDisorder,
                DiagnosisLabel::ComplexMixedDisorder,
                DiagnosisLabel::RequiresClinicalCorrelation,
            ]
        );
    }

    #[test]
    fn single_disorder() {
        let disorders = DetectedDisorders {
            respiratory: Some(DisorderLabel::RespiratoryAcidosis),
            metabolic: None,
        };
        assert_eq!(
            compose_diagnosis(&disorders, None),
            vec![DiagnosisLabel::Disorder(DisorderLabel::RespiratoryAcidosis)]
        );
        assert_eq!(
            compose_diagnosis(&disorders, Some(&MixedResolution::unmodeled())),
            vec![DiagnosisLabel::Disorder(DisorderLabel::RespiratoryAcidosis)]
        );
    }

    #[test]
    fn no_disorder_gives_empty_diagnosis() {
        assert!(compose_diagnosis(&DetectedDisorders::default(), None).is_empty());
    }
}
