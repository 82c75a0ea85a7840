use abg_model::PhStatus;

/// Reference pH separating acidemia from alkalemia.
pub const REFERENCE_PH: f64 = 7.40;

/// Classify pH against the exact 7.40 reference point.
///
/// This is not the 7.35-7.45 advisory band; a pH of 7.42 is alkalemic here.
pub fn classify_ph(ph: f64) -> PhStatus {
    if ph > REFERENCE_PH {
        PhStatus::Alkalemic
    } else if ph < REFERENCE_PH {
        PhStatus::Acidemic
    } else {
        PhStatus::Normal
    }
}
