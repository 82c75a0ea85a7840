//! Primary/concomitant ordering of opposing mixed disorders.
//!
//! For the two modeled pairs, each component's pH shift is estimated from
//! its deviation (bicarbonate from 24, PaCO2 from 40). The resulting pH
//! decides which component dominates: outside 7.35-7.45 the component
//! pushing in that direction is primary, inside it neither is.

use abg_model::{
    ConcomitantFinding, DetectedDisorders, DisorderLabel, MixedResolution, PhContribution,
    PrimaryFinding,
};
use tracing::debug;

use crate::compensation::NORMAL_BICARBONATE;
use crate::ph::REFERENCE_PH;
use crate::primary::NORMAL_PACO2;

/// pH shift per mEq/L bicarbonate deviation.
const METABOLIC_PH_PER_MEQ: f64 = 0.015;
/// pH shift per mmHg PaCO2 deviation.
const RESPIRATORY_PH_PER_MMHG: f64 = 0.008;

/// Lower edge of the band in which neither component dominates.
pub const BALANCED_PH_LOW: f64 = 7.35;
/// Upper edge of the band in which neither component dominates.
pub const BALANCED_PH_HIGH: f64 = 7.45;

/// Resolve which disorder of a pair is primary.
///
/// Total over every combination: pairs without a model (including a single
/// disorder or none) yield the [`MixedResolution::unmodeled`] sentinel.
pub fn resolve_mixed(
    disorders: &DetectedDisorders,
    bicarbonate: f64,
    paco2: f64,
) -> MixedResolution {
    use DisorderLabel::{
        MetabolicAcidosis, MetabolicAlkalosis, RespiratoryAcidosis, RespiratoryAlkalosis,
    };

    let resolution = match (disorders.respiratory, disorders.metabolic) {
        (Some(RespiratoryAlkalosis), Some(MetabolicAcidosis)) => {
            let acidosis_shift = (NORMAL_BICARBONATE - bicarbonate) * METABOLIC_PH_PER_MEQ;
            let alkalosis_shift = (NORMAL_PACO2 - paco2) * RESPIRATORY_PH_PER_MMHG;
            let contribution = PhContribution {
                acidosis_shift,
                alkalosis_shift,
                net_ph: REFERENCE_PH - (acidosis_shift + alkalosis_shift),
            };
            order_by_net_ph(contribution, MetabolicAcidosis, RespiratoryAlkalosis)
        }
        (Some(RespiratoryAcidosis), Some(MetabolicAlkalosis)) => {
            let alkalosis_shift = (bicarbonate - NORMAL_BICARBONATE) * METABOLIC_PH_PER_MEQ;
            let acidosis_shift = (paco2 - NORMAL_PACO2) * RESPIRATORY_PH_PER_MMHG;
            let contribution = PhContribution {
                acidosis_shift,
                alkalosis_shift,
                net_ph: REFERENCE_PH + (alkalosis_shift - acidosis_shift),
            };
            order_by_net_ph(contribution, RespiratoryAcidosis, MetabolicAlkalosis)
        }
        _ => MixedResolution::unmodeled(),
    };
    debug!(
        primary = %resolution.primary,
        concomitant = %resolution.concomitant,
        "mixed disorder resolved"
    );
    resolution
}

/// Pick the acidosis as primary below the balanced band and the alkalosis
/// above it.
fn order_by_net_ph(
    contribution: PhContribution,
    acidosis: DisorderLabel,
    alkalosis: DisorderLabel,
) -> MixedResolution {
    let (primary, concomitant) = if contribution.net_ph < BALANCED_PH_LOW {
        (
            PrimaryFinding::Disorder(acidosis),
            ConcomitantFinding::Disorder(alkalosis),
        )
    } else if contribution.net_ph > BALANCED_PH_HIGH {
        (
            PrimaryFinding::Disorder(alkalosis),
            ConcomitantFinding::Disorder(acidosis),
        )
    } else {
        (PrimaryFinding::EquallyContribute, ConcomitantFinding::Absent)
    };
    MixedResolution {
        primary,
        concomitant,
        contribution: Some(contribution),
    }
}
