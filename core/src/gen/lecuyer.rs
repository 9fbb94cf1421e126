//! L'Ecuyer combined generator
//!
//! Two correlated linear congruential generators combined into one stream,
//! with a period of roughly 2.3e18 and good statistical behavior at low
//! computational cost.
//!
//! # Determinism
//!
//! Same seed → same state → same sequence. This is CRITICAL for:
//! - Replaying a failing test case from its original seed
//! - Fanning one seed out into a tree of reproducible sub-generators
//! - Debugging (re-derive any branch of the generation tree exactly)
//!
//! # Immutability
//!
//! [`GenState`] is a plain `Copy` value and nothing ever mutates one in
//! place. Every operation returns a fresh state next to its result, so two
//! callers holding the same state can use it from independent threads with
//! zero synchronization.

use serde::{Deserialize, Serialize};

// Recurrence constants from L'Ecuyer (1988), "Efficient and Portable
// Combined Random Number Generators". Q/R are the Schrage decomposition
// factors that keep every intermediate product within i64.
const M1: i64 = 2_147_483_563;
const A1: i64 = 40_014;
const Q1: i64 = 53_668;
const R1: i64 = 12_211;

const M2: i64 = 2_147_483_399;
const A2: i64 = 40_692;
const Q2: i64 = 52_774;
const R2: i64 = 3_791;

/// Largest value [`GenState::next`] can return. Draws land in `[1, GEN_MAX]`.
pub const GEN_MAX: i64 = M1 - 1;

/// Immutable state of the splittable generator
///
/// Holds the two sub-seeds of the combined generator. Field invariants:
/// `1 <= s1 <= 2147483562` and `1 <= s2 <= 2147483398`. Both seeding and
/// stepping preserve them.
///
/// Serializable so that a state can be checkpointed and a failing test case
/// replayed later from the exact point it was drawn.
///
/// # Example
/// ```
/// use propgen_core_rs::GenState;
///
/// let state = GenState::from_seed(42);
/// let (value, state) = state.next();
/// assert!((1..=propgen_core_rs::GEN_MAX).contains(&value));
/// let (left, right) = state.split();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenState {
    /// First sub-seed, in `[1, 2147483562]`
    s1: i64,
    /// Second sub-seed, in `[1, 2147483398]`
    s2: i64,
}

impl GenState {
    /// Create a generator state from an integer seed
    ///
    /// Defined for every `i64`, including `i64::MIN`. Negative seeds are
    /// collapsed to their magnitude, so `from_seed(s)` and `from_seed(-s)`
    /// yield the same state. This is a documented property of the seeding
    /// scheme, not an accident.
    ///
    /// # Example
    /// ```
    /// use propgen_core_rs::GenState;
    ///
    /// assert_eq!(GenState::from_seed(-42), GenState::from_seed(42));
    /// ```
    pub fn from_seed(seed: i64) -> Self {
        let magnitude = seed.unsigned_abs();
        let q = magnitude / (M1 as u64 - 1);
        Self {
            s1: (magnitude % (M1 as u64 - 1)) as i64 + 1,
            s2: (q % (M2 as u64 - 1)) as i64 + 1,
        }
    }

    /// Advance the generator by one draw
    ///
    /// Returns the drawn value, in `[1, GEN_MAX]`, together with the
    /// successor state. Pure and total: no failure mode, no mutation.
    ///
    /// # Example
    /// ```
    /// use propgen_core_rs::GenState;
    ///
    /// let state = GenState::from_seed(0);
    /// let (value, _next) = state.next();
    /// assert_eq!(value, 2147482884);
    /// // The original state is untouched and replays identically.
    /// assert_eq!(state.next().0, 2147482884);
    /// ```
    pub fn next(&self) -> (i64, GenState) {
        let k = self.s1 / Q1;
        let mut s1 = A1 * (self.s1 - k * Q1) - k * R1;
        if s1 < 0 {
            s1 += M1;
        }

        let k = self.s2 / Q2;
        let mut s2 = A2 * (self.s2 - k * Q2) - k * R2;
        if s2 < 0 {
            s2 += M2;
        }

        let mut z = s1 - s2;
        if z < 1 {
            z += GEN_MAX;
        }
        (z, GenState { s1, s2 })
    }

    /// Split the generator into two child generators
    ///
    /// Deterministic given the parent, and consumes exactly one draw of
    /// entropy. The children's output sequences diverge after a short run
    /// of further draws; that divergence, not a proof of statistical
    /// independence, is the guarantee callers rely on. Splitting is what
    /// lets one reproducible seed fan out into arbitrarily many
    /// independent-looking sub-streams, one per generated value.
    ///
    /// # Example
    /// ```
    /// use propgen_core_rs::GenState;
    ///
    /// let (left, right) = GenState::from_seed(7).split();
    /// assert_ne!(left, right);
    /// ```
    pub fn split(&self) -> (GenState, GenState) {
        let bumped_s1 = if self.s1 == GEN_MAX { 1 } else { self.s1 + 1 };
        let bumped_s2 = if self.s2 == 1 { M2 - 1 } else { self.s2 - 1 };
        let (_, stepped) = self.next();
        (
            GenState {
                s1: bumped_s1,
                s2: stepped.s2,
            },
            GenState {
                s1: stepped.s1,
                s2: bumped_s2,
            },
        )
    }

    /// Get the raw sub-seed pair (for checkpointing/debugging)
    ///
    /// # Example
    /// ```
    /// use propgen_core_rs::GenState;
    ///
    /// assert_eq!(GenState::from_seed(0).state(), (1, 1));
    /// ```
    pub fn state(&self) -> (i64, i64) {
        (self.s1, self.s2)
    }
}
