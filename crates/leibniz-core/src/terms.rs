//! Signed odd-integer term sequence
//!
//! For a term count `n`, the sequence runs from `1 - 2n` up to the bound
//! `2n` (inclusive) in steps of [`TermRange::STEP`]. The stride never lands
//! on `2n`, so the last term is `2n - 3` and there are exactly `n` terms.
//!
//! Every term is congruent to `1 - 2n (mod 4)`, which is odd, so zero is
//! never produced. For even `n` the terms are `≡ 1 (mod 4)` and the sum of
//! their reciprocals is the Leibniz series for π/4:
//!
//! ```text
//! n = 4:  -7, -3, 1, 5   ->   -1/7 - 1/3 + 1 + 1/5
//! ```
//!
//! For odd `n` the terms are `≡ 3 (mod 4)` (`..., -5, -1, 3, ...`) and
//! the sum converges to -π/4 instead.

use crate::error::EstimateError;
use std::iter::FusedIterator;

/// Largest accepted term count.
///
/// Keeps every term below 2^53 in magnitude so `i64 -> f64` is exact.
pub const MAX_TERMS: i64 = 1 << 52;

/// Finite, restartable iterator over the terms for a given `n`.
///
/// Cloning yields an independent iterator positioned at the same term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermRange {
    start: i64,
    stop: i64,
    next: i64,
    remaining: u64,
}

impl TermRange {
    /// Distance between consecutive terms
    pub const STEP: i64 = 4;

    /// Build the term range for `n` terms.
    ///
    /// Rejects `n <= 0` and any `n` whose terms would not be exactly
    /// representable as `f64`.
    pub fn new(n: i64) -> Result<Self, EstimateError> {
        if n <= 0 {
            return Err(EstimateError::NonPositiveTerms(n));
        }
        let stop = n.checked_mul(2).ok_or(EstimateError::TermOverflow(n))?;
        if n > MAX_TERMS {
            return Err(EstimateError::InexactTerm(n));
        }

        let start = 1 - stop;
        // stop >= start + 1 here, so the quotient is non-negative
        let count = (stop - start) / Self::STEP + 1;

        Ok(TermRange {
            start,
            stop,
            next: start,
            remaining: count as u64,
        })
    }

    /// First term, `1 - 2n`
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Inclusive upper bound, `2n`. Not itself a term.
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Last term actually produced
    pub fn last_term(&self) -> i64 {
        let span = (self.stop - self.start) / Self::STEP;
        self.start + span * Self::STEP
    }
}

impl Iterator for TermRange {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let term = self.next;
        self.remaining -= 1;
        self.next += Self::STEP;
        Some(term)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for TermRange {}

impl FusedIterator for TermRange {}
