//! Static position evaluation
//!
//! Scores a position from one side's point of view:
//! - Den occupancy (`±DEN_SCORE`)
//! - Material (`±attack * ATTACK_WEIGHT` per live piece)
//!
//! The score is antisymmetric: `evaluate(b, Dark) == -evaluate(b, Light)`.
//!
//! ## Module Organization
//!
//! - `material` - Material balance
//! - `position` - Full evaluation (dens + material)

mod material;
mod position;

pub use material::evaluate_material;
pub use position::evaluate;
