//! Expected compensation for a primary disorder.
//!
//! Respiratory disorders are graded acute or chronic from the bicarbonate
//! level and predict a pH; metabolic disorders predict the PaCO2 that
//! respiratory compensation should reach.

use abg_model::{Chronicity, CompensationResult, DisorderLabel};
use tracing::debug;

use crate::ph::REFERENCE_PH;
use crate::primary::{BICARBONATE_LOW, NORMAL_PACO2};
use crate::rounding::round_to;

/// Reference bicarbonate in mEq/L.
pub const NORMAL_BICARBONATE: f64 = 24.0;

/// pH change per mmHg PaCO2 in acute respiratory disorders.
const ACUTE_PH_PER_MMHG: f64 = 0.008;
/// pH change per mmHg PaCO2 in chronic respiratory acidosis.
const CHRONIC_ACIDOSIS_PH_PER_MMHG: f64 = 0.003;
/// pH change per mmHg PaCO2 in chronic respiratory alkalosis.
const CHRONIC_ALKALOSIS_PH_PER_MMHG: f64 = -0.003;

/// PaCO2 rise per mEq/L bicarbonate lost in metabolic acidosis.
const ACIDOSIS_PACO2_PER_MEQ: f64 = 1.2;
/// PaCO2 rise per mEq/L bicarbonate gained in metabolic alkalosis.
const ALKALOSIS_PACO2_PER_MEQ: f64 = 0.7;

const PH_PLACES: usize = 3;
const PACO2_PLACES: usize = 1;

/// Compute the expected compensation for `disorder`.
///
/// Returns `None` when there is no primary disorder. Every disorder type is
/// handled; the caller decides which one to pass.
pub fn expected_compensation(
    disorder: Option<DisorderLabel>,
    paco2: f64,
    bicarbonate: f64,
) -> Option<CompensationResult> {
    let disorder = disorder?;
    let result = match disorder {
        DisorderLabel::RespiratoryAcidosis => {
            let (chronicity, coefficient) = if bicarbonate > NORMAL_BICARBONATE {
                (Chronicity::Chronic, CHRONIC_ACIDOSIS_PH_PER_MMHG)
            } else {
                (Chronicity::Acute, ACUTE_PH_PER_MMHG)
            };
            let expected = REFERENCE_PH - (paco2 - NORMAL_PACO2) * coefficient;
            CompensationResult::Respiratory {
                disorder,
                chronicity,
                expected_ph: round_to(expected, PH_PLACES),
            }
        }
        DisorderLabel::RespiratoryAlkalosis => {
            let (chronicity, coefficient) = if bicarbonate < BICARBONATE_LOW {
                (Chronicity::Chronic, CHRONIC_ALKALOSIS_PH_PER_MMHG)
            } else {
                (Chronicity::Acute, ACUTE_PH_PER_MMHG)
            };
            let expected = REFERENCE_PH + (NORMAL_PACO2 - paco2) * coefficient;
            CompensationResult::Respiratory {
                disorder,
                chronicity,
                expected_ph: round_to(expected, PH_PLACES),
            }
        }
        DisorderLabel::MetabolicAcidosis => {
            let expected =
                ACIDOSIS_PACO2_PER_MEQ * (NORMAL_BICARBONATE - bicarbonate) + NORMAL_PACO2;
            CompensationResult::Metabolic {
                disorder,
                expected_paco2: round_to(expected, PACO2_PLACES),
            }
        }
        DisorderLabel::MetabolicAlkalosis => {
            let expected =
                ALKALOSIS_PACO2_PER_MEQ * (bicarbonate - NORMAL_BICARBONATE) + NORMAL_PACO2;
            CompensationResult::Metabolic {
                disorder,
                expected_paco2: round_to(expected, PACO2_PLACES),
            }
        }
    };
    debug!(compensation = %result.type_label(), "expected compensation computed");
    Some(result)
}
