//! # Slider Error Types
//!
//! All errors that can occur when mutating a slider.

use thiserror::Error;

/// Errors that can occur when mutating a slider.
///
/// Every failure is synchronous and leaves the slider unchanged. Replacing
/// the value list with an empty one is deliberately NOT an error; it is a
/// silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// A value-based set named a value that is not in the slider.
    #[error("value not found: {label}")]
    ValueNotFound {
        /// Display string of the offending value.
        label: String,
    },

    /// An index-based set named a position outside the value list.
    #[error("position {position} out of range: slider has {len} values")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// Number of values in the slider.
        len: usize,
    },
}

/// Result type for slider operations.
pub type SliderResult<T> = Result<T, SliderError>;
