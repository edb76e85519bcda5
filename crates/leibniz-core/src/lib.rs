//! Leibniz π estimator
//!
//! Approximates π by summing the reciprocals of a signed odd-integer
//! sequence and multiplying by four. The alternation of the classic
//! Leibniz series `1 - 1/3 + 1/5 - ...` is folded into the sign of each
//! term, so the whole computation is a single in-order reduction.
//!
//! # Example
//!
//! ```
//! use leibniz_core::{estimate_pi, format_estimate};
//!
//! let estimate = estimate_pi(1000).unwrap();
//! assert!((estimate.value - std::f64::consts::PI).abs() < 0.01);
//! assert_eq!(format_estimate(estimate.value), "3.1405926538397972");
//! ```

pub mod error;
pub mod estimate;
pub mod format;
pub mod terms;

pub use error::EstimateError;
pub use estimate::{DEFAULT_TERMS, Estimate, estimate_pi, sum_reciprocals};
pub use format::{FRACTION_DIGITS, format_elapsed, format_estimate};
pub use terms::{MAX_TERMS, TermRange};
