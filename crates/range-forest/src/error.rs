use thiserror::Error;

/// Rejected range bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid range: lower bound {lo} is greater than upper bound {hi}")]
    InvertedRange { lo: String, hi: String },
    #[error("invalid range: bound {0} is not comparable")]
    IncomparableBound(String),
}
