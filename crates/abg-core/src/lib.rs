//! Acid-base diagnostic rule engine.
//!
//! Pure, total functions over a reconciled [`LabPanel`](abg_model::LabPanel):
//!
//! - [`classify_ph`]: pH against 7.40
//! - [`detect_disorders`]: respiratory and metabolic findings
//! - [`expected_compensation`]: acute/chronic regression formulas
//! - [`anion_gap`]: gap, albumin-corrected gap, excess gap
//! - [`resolve_mixed`]: primary/concomitant ordering for opposing pairs
//! - [`compose_diagnosis`]: the final label list
//!
//! [`evaluate`] wires them together. Nothing here holds state, so panels can
//! be evaluated from any number of threads.

pub mod anion_gap;
pub mod compensation;
pub mod diagnosis;
pub mod evaluate;
pub mod mixed;
pub mod ph;
pub mod primary;
pub mod rounding;

pub use anion_gap::anion_gap;
pub use compensation::expected_compensation;
pub use diagnosis::compose_diagnosis;
pub use evaluate::evaluate;
pub use mixed::resolve_mixed;
pub use ph::classify_ph;
pub use primary::detect_disorders;
