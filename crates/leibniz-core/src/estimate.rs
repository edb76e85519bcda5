//! Pi estimation over a term range
//!
//! `estimate_pi` is the whole computation: build the terms, sum their
//! reciprocals in ascending order, multiply by four. Only the summation is
//! timed. Nothing is printed here; callers decide how to report.

use crate::error::EstimateError;
use crate::terms::TermRange;
use std::time::{Duration, Instant};
use tracing::debug;

/// Term count used by the benchmark binary
pub const DEFAULT_TERMS: i64 = 100_000_000;

/// Result of a single estimation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Number of terms summed
    pub terms: i64,
    /// First term of the range (`1 - 2n`)
    pub first_term: i64,
    /// Last term of the range (`2n - 3`)
    pub last_term: i64,
    /// `4 * Σ 1/i`
    pub value: f64,
    /// Wall-clock time spent in the summation
    pub elapsed: Duration,
}

impl Estimate {
    /// Distance from `std::f64::consts::PI`
    pub fn abs_error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }

    /// Summation throughput; zero when the clock did not advance
    pub fn terms_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.terms as f64 / secs
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::format::format_estimate(self.value))
    }
}

/// Sum `1/i` over the terms, in iteration order.
///
/// The accumulator starts at `0.0` and each reciprocal is added in turn;
/// reordering would change the rounding of the result.
pub fn sum_reciprocals(terms: TermRange) -> f64 {
    let mut sum: f64 = 0.0;
    for i in terms {
        sum += 1.0 / i as f64;
    }
    sum
}

/// Estimate π from `n` terms of the signed odd-integer series.
///
/// # Errors
///
/// Returns [`EstimateError`] when `n` is non-positive or too large for the
/// terms to convert exactly to `f64`.
pub fn estimate_pi(n: i64) -> Result<Estimate, EstimateError> {
    let terms = TermRange::new(n)?;
    let first_term = terms.start();
    let last_term = terms.last_term();
    debug!(n, first_term, last_term, "summing term range");

    let started = Instant::now();
    let value = 4.0 * sum_reciprocals(terms);
    let elapsed = started.elapsed();

    Ok(Estimate {
        terms: n,
        first_term,
        last_term,
        value,
        elapsed,
    })
}
