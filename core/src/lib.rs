//! Propgen Core - Splittable Generator Engine
//!
//! Deterministic, splittable pseudo-random generation for property-based
//! testing. Given an integer seed, this crate produces an immutable
//! generator state from which raw draws, independent child generators, and
//! bounded integer/long/float samples can be derived, all fully replayable
//! from the original seed.
//!
//! # Architecture
//!
//! - **gen**: Generator state, the L'Ecuyer combined recurrence, splitting,
//!   and bounded range sampling
//!
//! # Critical Invariants
//!
//! 1. Generator states are immutable values; every operation returns a new
//!    state alongside its result
//! 2. All operations are pure functions of seed and state (determinism)
//! 3. Wide-range sampling goes through arbitrary-precision arithmetic; no
//!    silent fixed-width overflow

// Module declarations
pub mod gen;

// Re-exports for convenience
pub use gen::{GenState, RangeError, GEN_MAX};
