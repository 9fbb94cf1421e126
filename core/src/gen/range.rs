//! Bounded range sampling
//!
//! Layers unbiased bounded sampling on top of the raw generator:
//! - arbitrary-precision integer sampling over any `[low, high]`
//! - machine-long sampling (same algorithm, narrowed result)
//! - float sampling by scaling a wide integer draw
//!
//! A single raw draw covers `[1, GEN_MAX]`; wider ranges fold several draws
//! into a big-integer accumulator before reducing modulo the range size.
//! The accumulator has to be arbitrary-precision: `base^n` always exceeds
//! native integer width, and the range size itself may too.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use thiserror::Error;

use super::lecuyer::{GenState, GEN_MAX};

/// Radix of the per-draw digits folded into the accumulator, one less than
/// the maximum raw draw so that `n` base-`DRAW_BASE` digits are always
/// covered by `n` draws.
const DRAW_BASE: i64 = GEN_MAX - 1;

// Fixed draw interval backing float sampling, far beyond the f64 mantissa
// so the scaled results cover the target interval densely.
const FLOAT_DRAW_LOW: i64 = -(1 << 62);
const FLOAT_DRAW_HIGH: i64 = (1 << 62) - 1;

/// Errors raised when a sampling range is malformed
///
/// These are caller contract violations, not recoverable conditions: the
/// sampler refuses the range up front instead of looping on an ill-defined
/// iteration count.
#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    /// `high < low` passed to integer or long sampling
    #[error("empty integer range: low bound {low} exceeds high bound {high}")]
    EmptyIntegerRange { low: BigInt, high: BigInt },

    /// `high < low` (or a NaN bound) passed to float sampling
    #[error("empty float range: low bound {low} exceeds high bound {high}")]
    EmptyFloatRange { low: f64, high: f64 },
}

impl GenState {
    /// Sample an integer uniformly from `[low, high]`, arbitrary precision
    ///
    /// Accumulates `digit_count(DRAW_BASE, high - low + 1)` raw draws into
    /// a big-integer accumulator, then reduces modulo the range size. The
    /// reduction is exact when the range size divides the accumulated
    /// space and has negligible bias otherwise for test-generation ranges.
    /// Always consumes at least one draw, so even a size-1 range advances
    /// the state.
    ///
    /// # Errors
    /// [`RangeError::EmptyIntegerRange`] if `high < low`.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use propgen_core_rs::GenState;
    ///
    /// let state = GenState::from_seed(7);
    /// let low = -BigInt::from(10u8).pow(30);
    /// let high = BigInt::from(10u8).pow(30);
    /// let (value, _state) = state.random_in_range(&low, &high).unwrap();
    /// assert!(low <= value && value <= high);
    /// ```
    pub fn random_in_range(
        &self,
        low: &BigInt,
        high: &BigInt,
    ) -> Result<(BigInt, GenState), RangeError> {
        if low > high {
            return Err(RangeError::EmptyIntegerRange {
                low: low.clone(),
                high: high.clone(),
            });
        }

        let base = BigInt::from(DRAW_BASE);
        let size = high - low + BigInt::one();
        let draws = digit_count(&base, &size);

        let mut acc = low.clone();
        let mut state = *self;
        for _ in 0..draws {
            let (x, stepped) = state.next();
            acc = acc * &base + BigInt::from(x);
            state = stepped;
        }
        // Floor modulus: the accumulator starts at `low` and may be
        // negative, but the offset must land in [0, size).
        Ok((low + acc.mod_floor(&size), state))
    }

    /// Sample an `i64` uniformly from `[low, high]`
    ///
    /// Identical algorithm to [`GenState::random_in_range`] with the bounds
    /// lifted to big integers; the result is narrowed back, which cannot
    /// fail because it lies between two `i64` bounds.
    ///
    /// # Errors
    /// [`RangeError::EmptyIntegerRange`] if `high < low`.
    ///
    /// # Example
    /// ```
    /// use propgen_core_rs::GenState;
    ///
    /// let (value, _state) = GenState::from_seed(7).random_long(0, 9).unwrap();
    /// assert!((0..=9).contains(&value));
    /// ```
    pub fn random_long(&self, low: i64, high: i64) -> Result<(i64, GenState), RangeError> {
        let (value, state) = self.random_in_range(&BigInt::from(low), &BigInt::from(high))?;
        let value = value
            .to_i64()
            .expect("sampled value lies between two i64 bounds");
        Ok((value, state))
    }

    /// Sample an `f64` uniformly from `[low, high]`
    ///
    /// Draws one long from a fixed `[-2^62, 2^62 - 1]` interval, then maps
    /// it into the target interval by centering at the midpoint and scaling
    /// by position. Centering keeps the arithmetic well-behaved: no
    /// catastrophic cancellation, and `low == high` returns exactly `low`.
    ///
    /// # Errors
    /// [`RangeError::EmptyFloatRange`] if `high < low` or either bound is
    /// NaN.
    ///
    /// # Example
    /// ```
    /// use propgen_core_rs::GenState;
    ///
    /// let (value, _state) = GenState::from_seed(7).random_double(-1.0, 1.0).unwrap();
    /// assert!((-1.0..=1.0).contains(&value));
    /// ```
    pub fn random_double(&self, low: f64, high: f64) -> Result<(f64, GenState), RangeError> {
        if low > high || low.is_nan() || high.is_nan() {
            return Err(RangeError::EmptyFloatRange { low, high });
        }

        let (x, state) = self
            .random_long(FLOAT_DRAW_LOW, FLOAT_DRAW_HIGH)
            .expect("float draw interval is fixed and nonempty");

        let mid = (low + high) / 2.0;
        let scale = (high - low) / (FLOAT_DRAW_HIGH as f64 - FLOAT_DRAW_LOW as f64);
        Ok((mid + scale * x as f64, state))
    }
}

/// Number of base-`base` digits needed to represent `value`
///
/// Determines how many raw draws cover a sampling range without
/// truncation. Iterative rather than recursive so pathological range
/// sizes cannot exhaust the stack.
fn digit_count(base: &BigInt, value: &BigInt) -> u32 {
    assert!(*base > BigInt::one(), "digit count requires base > 1");
    assert!(*value >= BigInt::one(), "digit count requires value >= 1");

    let mut remaining = value.clone();
    let mut digits = 1u32;
    while remaining >= *base {
        remaining /= base;
        digits += 1;
    }
    digits
}
