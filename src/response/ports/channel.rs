//! Outbound response channel port.
//!
//! The channel performs the actual network calls. It applies whatever
//! transport policy it likes (rate limiting, backoff) but reports each send's
//! outcome exactly once.

use crate::interaction::domain::CorrelationId;
use crate::response::domain::{DeferredAck, InitialResponse, MessageContent};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for response channel operations.
pub type ResponseChannelResult<T> = Result<T, ResponseChannelError>;

/// Sends interaction responses to the platform.
#[async_trait]
pub trait ResponseChannel: Send + Sync {
    /// Sends the initial response.
    async fn send_initial(
        &self,
        id: &CorrelationId,
        response: &InitialResponse,
    ) -> ResponseChannelResult<()>;

    /// Sends a deferred acknowledgement.
    async fn send_deferred_ack(
        &self,
        id: &CorrelationId,
        ack: DeferredAck,
    ) -> ResponseChannelResult<()>;

    /// Sends a follow-up message.
    async fn send_followup(
        &self,
        id: &CorrelationId,
        message: &MessageContent,
    ) -> ResponseChannelResult<()>;
}

/// Errors reported by response channel implementations.
#[derive(Debug, Clone, Error)]
pub enum ResponseChannelError {
    /// The platform's acknowledgement or follow-up window has passed.
    #[error("response window expired for interaction {0}")]
    WindowExpired(CorrelationId),

    /// The platform already holds an initial response for the interaction.
    #[error("interaction {0} has already been responded to")]
    DuplicateResponse(CorrelationId),

    /// The platform does not recognise the interaction.
    #[error("unknown interaction {0}")]
    UnknownInteraction(CorrelationId),

    /// Network or protocol failure.
    #[error("response transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ResponseChannelError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
