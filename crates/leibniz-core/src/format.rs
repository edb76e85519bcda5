//! Output line formatting
//!
//! The benchmark prints two lines: the elapsed summation time, then the
//! estimate in fixed-point notation.

use std::time::Duration;

/// Digits printed after the decimal point of an estimate
pub const FRACTION_DIGITS: usize = 16;

/// Fixed-point rendering with exactly [`FRACTION_DIGITS`] fractional digits.
///
/// Never switches to scientific notation, whatever the magnitude.
pub fn format_estimate(value: f64) -> String {
    format!("{:.*}", FRACTION_DIGITS, value)
}

/// `time used <seconds>`, seconds as a fractional `f64`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("time used {}", elapsed.as_secs_f64())
}
