//! Final model error type.

use thiserror::Error;

/// Error type for the `verify` bounds pass.
///
/// A failing child fails its whole composite: composite verification
/// aggregates child results with `?`, so the first out-of-range field
/// short-circuits the aggregation and no partial sum can mask it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The field's fixed layout extends past the buffer's valid size.
    #[error("field out of range: need {needed} bytes at position {offset}, buffer size is {available}")]
    OutOfRange {
        /// Absolute position of the field (window base plus field offset).
        offset: usize,
        /// Fixed byte width of the field.
        needed: usize,
        /// Valid bytes in the buffer.
        available: usize,
    },
}
