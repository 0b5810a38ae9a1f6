//! Side effect invoked when an entity goes quiet.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::watchdog::domain::EntityId;

/// Result type for timeout callbacks.
pub type TimeoutCallbackResult = Result<(), TimeoutCallbackError>;

/// Action taken once an entity has been inactive for the threshold.
///
/// Typical callbacks archive and lock a thread. The watchdog invokes the
/// callback at most once per scheduled check and never retries it.
#[async_trait]
pub trait TimeoutCallback: Send + Sync {
    /// Handles an inactivity timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TimeoutCallbackError`] when the side effect fails. The
    /// watchdog logs the failure and forgets the entity.
    async fn on_timeout(&self, entity: &EntityId) -> TimeoutCallbackResult;
}

/// Errors raised by timeout callbacks.
#[derive(Debug, Clone, Error)]
pub enum TimeoutCallbackError {
    /// The callback reported a failure in its own terms.
    #[error("{0}")]
    Failed(String),

    /// Any other underlying failure.
    #[error("timeout callback error: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl TimeoutCallbackError {
    /// Creates a failure from a message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Wraps an arbitrary error.
    #[must_use]
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}
