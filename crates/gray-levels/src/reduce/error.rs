//! Error types for gray-level reduction.

use std::fmt;

/// Error type for level reduction and grayscale buffer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A level count of zero was requested. There is no meaningful
    /// zero-bucket quantization, so this is rejected rather than clamped.
    ZeroLevels,
    /// Buffer length does not match the declared dimensions.
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Length of the provided buffer
        actual: usize,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::ZeroLevels => {
                write!(f, "level count must be at least 1")
            }
            LevelError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer length {} does not match dimensions (expected {})",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for LevelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_levels_display() {
        assert_eq!(
            LevelError::ZeroLevels.to_string(),
            "level count must be at least 1"
        );
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = LevelError::DimensionMismatch {
            expected: 12,
            actual: 10,
        };
        assert_eq!(
            err.to_string(),
            "pixel buffer length 10 does not match dimensions (expected 12)"
        );
    }
}
