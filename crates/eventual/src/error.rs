//! Error types for eventual

use thiserror::Error;

/// Result type alias for future operations
pub type Result<T> = std::result::Result<T, FutureError>;

/// Errors intrinsic to the completion primitive itself.
///
/// Domain failures carried by a failed future are [`ErrorInfo`] values, not
/// variants here; the primitive never interprets those.
///
/// [`ErrorInfo`]: crate::outcome::ErrorInfo
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FutureError {
    /// A completion was attempted after the future already reached a
    /// terminal state. The prior outcome is left untouched.
    #[error("future already completed")]
    AlreadyCompleted,
}
