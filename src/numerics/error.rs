// src/numerics/error.rs

/// Errors raised by vector component access.
///
/// Numeric degeneracy (zero-length normalization, projection onto the zero
/// vector) is never reported here; it flows through as Infinity/NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("Illegal index: {index}")]
    InvalidIndex { index: isize },
}
