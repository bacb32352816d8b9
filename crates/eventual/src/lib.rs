//! Single-assignment asynchronous result primitive
//!
//! This crate provides [`Future`], a thread-safe container for the eventual
//! outcome of an operation that may not have completed yet. A producer
//! completes it exactly once, with a value or a failure; consumers inspect it
//! or register a completion handler that fires exactly once with the outcome.
//!
//! It is deliberately small: no executor, no cancellation, no timeouts, no
//! blocking wait, and no relation to [`std::future::Future`]. Callers needing
//! any of those compose them on top.
//!
//! # Example
//! ```rust
//! use eventual::{future, Future, FutureError};
//!
//! let f: Future<&str> = future();
//! assert!(!f.is_complete());
//!
//! f.set_handler(|outcome| {
//!     assert_eq!(outcome.value(), Some(&"ready"));
//!     assert!(outcome.error().is_none());
//! });
//!
//! f.complete("ready").unwrap();
//! assert_eq!(f.complete("again"), Err(FutureError::AlreadyCompleted));
//! ```

pub mod error;
pub mod future;
pub mod outcome;
pub mod state;

pub use error::{FutureError, Result};
pub use future::{failed_future, future, succeeded_future, succeeded_future_empty, Future};
pub use outcome::{ErrorInfo, Outcome};
pub use state::CompletionState;
