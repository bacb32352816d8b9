//! Terminal outcome carried by a completed future.
//!
//! A completed future holds an [`Outcome`]: either a shared value or an
//! [`ErrorInfo`]. The two-accessor surface (`value()` / `error()`) is the
//! calling convention for completion handlers: exactly one of the two is
//! `Some` on every outcome.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque failure payload carried by a failed future.
///
/// The primitive stores and hands this back verbatim; it never inspects or
/// interprets the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    message: String,
}

impl ErrorInfo {
    /// Create a failure payload from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The failure message supplied at completion time
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<&str> for ErrorInfo {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorInfo {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Outcome of a completed future
///
/// The value side is shared via `Arc` because the future retains the outcome
/// for later observers after handing it to the handler.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The operation produced a value
    Success(Arc<T>),
    /// The operation failed
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    /// True if this outcome carries a value
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True if this outcome carries a failure
    pub fn failed(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The value, if the operation succeeded
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure payload, if the operation failed
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Convert into a standard `Result`
    pub fn into_result(self) -> std::result::Result<Arc<T>, ErrorInfo> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

// Manual impl: cloning shares the Arc, so no `T: Clone` bound is needed.
impl<T> Clone for Outcome<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Success(value) => Self::Success(Arc::clone(value)),
            Self::Failure(error) => Self::Failure(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let outcome = Outcome::Success(Arc::new(42));
        assert!(outcome.succeeded());
        assert!(!outcome.failed());
        assert_eq!(outcome.value(), Some(&42));
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_failure_accessors() {
        let outcome: Outcome<i32> = Outcome::Failure(ErrorInfo::new("boom"));
        assert!(outcome.failed());
        assert!(outcome.value().is_none());
        assert_eq!(outcome.error().unwrap().message(), "boom");
    }

    #[test]
    fn test_into_result() {
        let ok: Outcome<&str> = Outcome::Success(Arc::new("done"));
        assert_eq!(*ok.into_result().unwrap(), "done");

        let err: Outcome<&str> = Outcome::Failure("nope".into());
        assert_eq!(err.into_result().unwrap_err(), ErrorInfo::new("nope"));
    }

    #[test]
    fn test_clone_shares_value() {
        // Outcome<T> must clone without T: Clone
        struct NotClone(u8);
        let outcome = Outcome::Success(Arc::new(NotClone(7)));
        let copy = outcome.clone();
        assert_eq!(copy.value().unwrap().0, 7);
    }

    #[test]
    fn test_error_info_serde() {
        let info = ErrorInfo::new("connection reset");
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("connection reset"));

        let back: ErrorInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
