//! Estimator error types.

/// Error returned when a term count cannot produce a valid term range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateError {
    /// Term count was zero or negative
    NonPositiveTerms(i64),
    /// `2n` does not fit in an `i64`
    TermOverflow(i64),
    /// Terms would exceed 2^53 and lose precision when converted to `f64`
    InexactTerm(i64),
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::NonPositiveTerms(n) => {
                write!(f, "Term count must be positive, got {}", n)
            }
            EstimateError::TermOverflow(n) => {
                write!(f, "Term count {} overflows the term range bound 2n", n)
            }
            EstimateError::InexactTerm(n) => write!(
                f,
                "Term count {} exceeds {}; terms would not convert exactly to f64",
                n,
                crate::terms::MAX_TERMS
            ),
        }
    }
}

impl std::error::Error for EstimateError {}
