//! Single-assignment future handle.
//!
//! A [`Future`] represents the result of an action that may, or may not,
//! have occurred yet. A producer completes it exactly once with a value or a
//! failure; observers inspect it or register a completion handler. The handle
//! is cheap to clone and safe to share across threads, so producer and
//! consumer do not need to live on the same task.
//!
//! # Example
//! ```rust
//! use eventual::Future;
//!
//! let f: Future<u32> = Future::new();
//! f.set_handler(|outcome| {
//!     assert_eq!(outcome.value(), Some(&42));
//! });
//! f.complete(42).unwrap();
//! assert!(f.is_complete());
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::{FutureError, Result};
use crate::outcome::{ErrorInfo, Outcome};
use crate::state::CompletionState;

/// Completion callback: invoked exactly once with the terminal outcome.
type Handler<T> = Box<dyn FnOnce(Outcome<T>) + Send + 'static>;

/// Internal lifecycle. The only transition is Pending -> Terminal, guarded
/// by the handle's mutex so that exactly one completion attempt wins.
enum Lifecycle<T> {
    Pending { handler: Option<Handler<T>> },
    Terminal(Outcome<T>),
}

/// A single-assignment container for the eventual outcome of an operation.
///
/// Cloning yields another handle to the same underlying state.
pub struct Future<T> {
    inner: Arc<Mutex<Lifecycle<T>>>,
}

impl<T> Clone for Future<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Default for Future<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Future<T> {
    /// Create a future that hasn't completed yet
    ///
    /// Pre-completed futures come from the module-level factories
    /// [`succeeded_future`] and [`failed_future`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Lifecycle::Pending { handler: None })),
        }
    }

    fn terminal(outcome: Outcome<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Lifecycle::Terminal(outcome))),
        }
    }

    /// Has the future completed?
    ///
    /// It's completed if it's either succeeded or failed.
    pub fn is_complete(&self) -> bool {
        matches!(&*self.inner.lock(), Lifecycle::Terminal(_))
    }

    /// Snapshot of the lifecycle state
    pub fn state(&self) -> CompletionState {
        match &*self.inner.lock() {
            Lifecycle::Pending { .. } => CompletionState::Pending,
            Lifecycle::Terminal(outcome) if outcome.succeeded() => CompletionState::Succeeded,
            Lifecycle::Terminal(_) => CompletionState::Failed,
        }
    }

    /// True if the future completed with a value
    pub fn succeeded(&self) -> bool {
        self.state() == CompletionState::Succeeded
    }

    /// True if the future completed with a failure
    pub fn failed(&self) -> bool {
        self.state() == CompletionState::Failed
    }

    /// The stored value, if the future has succeeded
    pub fn result(&self) -> Option<Arc<T>> {
        match &*self.inner.lock() {
            Lifecycle::Terminal(Outcome::Success(value)) => Some(Arc::clone(value)),
            _ => None,
        }
    }

    /// The stored failure, if the future has failed
    pub fn cause(&self) -> Option<ErrorInfo> {
        match &*self.inner.lock() {
            Lifecycle::Terminal(Outcome::Failure(error)) => Some(error.clone()),
            _ => None,
        }
    }

    /// The whole terminal outcome, if the future has completed
    pub fn outcome(&self) -> Option<Outcome<T>> {
        match &*self.inner.lock() {
            Lifecycle::Terminal(outcome) => Some(outcome.clone()),
            Lifecycle::Pending { .. } => None,
        }
    }

    /// Set a handler for the result.
    ///
    /// If the future has already been completed it is called immediately,
    /// on the registering thread. Otherwise it is stored and called exactly
    /// once by whichever call later completes the future.
    ///
    /// Only one handler slot is retained: registering a second handler on a
    /// pending future replaces the first, which is dropped uninvoked. Callers
    /// needing fan-out must compose futures externally.
    ///
    /// Registration and completion acquire the same lock, so a registration
    /// racing a completion either sees the terminal outcome or is stored
    /// before the transition; never both, never neither.
    pub fn set_handler(&self, handler: impl FnOnce(Outcome<T>) + Send + 'static) {
        let mut guard = self.inner.lock();
        match &mut *guard {
            Lifecycle::Pending { handler: slot } => {
                if slot.replace(Box::new(handler)).is_some() {
                    trace!("replaced previously registered completion handler");
                }
            }
            Lifecycle::Terminal(outcome) => {
                let outcome = outcome.clone();
                drop(guard);
                handler(outcome);
            }
        }
    }

    /// Set the result.
    ///
    /// Marks the future as succeeded and invokes the handler, if one is
    /// registered. Returns [`FutureError::AlreadyCompleted`] if the future
    /// already reached a terminal state; the stored outcome is untouched and
    /// the handler is not re-invoked.
    pub fn complete(&self, value: T) -> Result<()> {
        self.transition(Outcome::Success(Arc::new(value)))
    }

    /// Set the failure.
    ///
    /// Marks the future as failed with an [`ErrorInfo`] built from the
    /// message and invokes the handler, if one is registered. Same
    /// already-completed policy as [`Future::complete`].
    pub fn fail(&self, message: impl Into<ErrorInfo>) -> Result<()> {
        self.transition(Outcome::Failure(message.into()))
    }

    /// Perform the single Pending -> Terminal transition.
    ///
    /// The handler slot is emptied under the lock and the handler runs after
    /// the lock is released, so a handler may touch the future it observes.
    fn transition(&self, outcome: Outcome<T>) -> Result<()> {
        let handler = {
            let mut guard = self.inner.lock();
            match &mut *guard {
                Lifecycle::Terminal(_) => {
                    debug!("rejected completion of an already completed future");
                    return Err(FutureError::AlreadyCompleted);
                }
                Lifecycle::Pending { handler } => {
                    let taken = handler.take();
                    let state = if outcome.succeeded() {
                        CompletionState::Succeeded
                    } else {
                        CompletionState::Failed
                    };
                    *guard = Lifecycle::Terminal(outcome.clone());
                    trace!(state = ?state, "future completed");
                    taken
                }
            }
        };

        if let Some(handler) = handler {
            handler(outcome);
        }
        Ok(())
    }
}

impl<T: Default> Future<T> {
    /// Complete with `T::default()`
    ///
    /// This is the empty-result form of [`Future::complete`].
    pub fn complete_empty(&self) -> Result<()> {
        self.complete(T::default())
    }
}

/// Create a future that hasn't completed yet
pub fn future<T>() -> Future<T> {
    Future::new()
}

/// Create an already-succeeded future with the given value
pub fn succeeded_future<T>(value: T) -> Future<T> {
    Future::terminal(Outcome::Success(Arc::new(value)))
}

/// Create an already-succeeded future carrying `T::default()`
pub fn succeeded_future_empty<T: Default>() -> Future<T> {
    succeeded_future(T::default())
}

/// Create an already-failed future with the given failure message
pub fn failed_future<T>(message: impl Into<ErrorInfo>) -> Future<T> {
    Future::terminal(Outcome::Failure(message.into()))
}
