//! Handler port invoked by the interaction router.

use crate::interaction::domain::InteractionEvent;
use crate::response::services::ResponseLifecycleError;
use crate::watchdog::services::WatchdogError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type returned by interaction handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Capability that handles one routed interaction.
///
/// Handlers capture whatever collaborators they need (the response lifecycle
/// service, the activity watchdog) when they are constructed. The router only
/// supplies the event.
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Handles an interaction event.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when the handler cannot complete. The router
    /// reports the failure and leaves the interaction unacknowledged.
    async fn handle(&self, event: &InteractionEvent) -> HandlerResult;
}

/// Errors raised by interaction handlers.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// A response lifecycle operation failed.
    #[error(transparent)]
    Response(#[from] ResponseLifecycleError),

    /// An activity watchdog operation failed.
    #[error(transparent)]
    Watchdog(#[from] WatchdogError),

    /// The handler reported a failure in its own terms.
    #[error("{0}")]
    Failed(String),

    /// Any other underlying failure.
    #[error("handler error: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
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
