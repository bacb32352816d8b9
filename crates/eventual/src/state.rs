//! Completion lifecycle states

use serde::{Deserialize, Serialize};

/// Where a future is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionState {
    /// Not yet completed
    #[default]
    Pending,
    /// Completed with a value
    Succeeded,
    /// Completed with a failure
    Failed,
}

impl CompletionState {
    /// Check if this is a terminal state
    ///
    /// A future never leaves a terminal state once entered.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
