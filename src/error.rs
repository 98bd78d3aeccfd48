//! Error types for xf-iter cursors
//!
//! Exhaustion is a normal, expected outcome and is signaled distinctly from
//! genuine failures; callers that probe with `has_next` first never see it.

/// Main error type for cursor operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XfError {
    /// `take_next` was called with no element available
    #[error("iteration exhausted: no further elements")]
    ExhaustedIteration,
    /// The cursor is read-only and does not support removal or modification
    #[error("cursor does not support mutation")]
    UnsupportedMutation,
}

/// Result type for cursor operations
pub type XfResult<T> = Result<T, XfError>;

impl XfError {
    /// Whether this error is the normal end-of-sequence signal rather than
    /// a misuse of the cursor.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, XfError::ExhaustedIteration)
    }
}
