//! Deterministic splittable random number generation
//!
//! Uses the L'Ecuyer combined generator for deterministic, splittable
//! random number generation. CRITICAL: all randomness consumed by the
//! surrounding property-testing layers MUST go through this module.

mod lecuyer;
mod range;

pub use lecuyer::{GenState, GEN_MAX};
pub use range::RangeError;
