use abg_model::{AnionGapResult, LabPanel};
use tracing::debug;

use crate::rounding::round_to;

/// Albumin level (g/dL) below which the gap is corrected.
pub const NORMAL_ALBUMIN: f64 = 4.0;
/// Gap increase per g/dL of albumin below normal.
pub const ALBUMIN_CORRECTION_FACTOR: f64 = 2.5;
/// Normal anion gap in mEq/L.
pub const NORMAL_ANION_GAP: f64 = 12.0;

/// Anion gap, albumin-corrected gap and excess gap for a panel.
///
/// Only meaningful when a metabolic disorder is present; the caller gates it.
pub fn anion_gap(panel: &LabPanel) -> AnionGapResult {
    let gap = panel.sodium - (panel.chloride + panel.bicarbonate);
    let corrected = if panel.albumin < NORMAL_ALBUMIN {
        gap + ALBUMIN_CORRECTION_FACTOR * (NORMAL_ALBUMIN - panel.albumin)
    } else {
        gap
    };
    let excess = corrected - NORMAL_ANION_GAP;
    let result = AnionGapResult {
        anion_gap: round_to(gap, 1),
        corrected: round_to(corrected, 1),
        excess: round_to(excess, 1),
    };
    debug!(
        anion_gap = result.anion_gap,
        corrected = result.corrected,
        excess = result.excess,
        "anion gap computed"
    );
    result
}
