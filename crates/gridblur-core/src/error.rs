//! Error types for grid construction and blurring.

use thiserror::Error;

/// Errors that can occur while building a [`PixelGrid`](crate::PixelGrid) or blurring it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurError {
    /// The requested dimensions are invalid (zero, negative, or too large).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// The width value.
        width: i64,
        /// The height value.
        height: i64,
        /// Why the dimensions are invalid.
        reason: &'static str,
    },

    /// The declared dimensions do not match the grid that was passed in.
    #[error(
        "declared dimensions {declared_width}x{declared_height} do not match \
         grid dimensions {actual_width}x{actual_height}"
    )]
    GridSizeMismatch {
        /// The width declared by the caller.
        declared_width: i64,
        /// The height declared by the caller.
        declared_height: i64,
        /// The grid's actual width.
        actual_width: usize,
        /// The grid's actual height.
        actual_height: usize,
    },

    /// A flat RGB buffer has the wrong number of bytes.
    #[error("pixel buffer length {actual} does not match expected {expected}")]
    BufferLengthMismatch {
        /// The expected length (`width * height * 3`).
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// Rows handed to [`PixelGrid::from_rows`](crate::PixelGrid::from_rows) are not all the same length.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

impl BlurError {
    pub(crate) fn non_positive(width: i64, height: i64) -> Self {
        BlurError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be > 0",
        }
    }

    pub(crate) fn overflow(width: i64, height: i64) -> Self {
        BlurError::InvalidDimensions {
            width,
            height,
            reason: "dimensions overflow buffer size calculation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = BlurError::non_positive(0, 3);
        assert_eq!(
            err.to_string(),
            "invalid dimensions: 0x3 (width and height must be > 0)"
        );
    }

    #[test]
    fn test_mismatch_message_names_both_sizes() {
        let err = BlurError::GridSizeMismatch {
            declared_width: 4,
            declared_height: 4,
            actual_width: 3,
            actual_height: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("4x4"), "got {msg}");
        assert!(msg.contains("3x2"), "got {msg}");
    }
}
