//! In-memory response channel that records every send.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::interaction::domain::CorrelationId;
use crate::response::domain::{DeferredAck, InitialResponse, MessageContent};
use crate::response::ports::{ResponseChannel, ResponseChannelError, ResponseChannelResult};

/// A response delivered through [`RecordingResponseChannel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentResponse {
    /// An initial response.
    Initial {
        /// Interaction answered.
        id: CorrelationId,
        /// Response payload.
        response: InitialResponse,
    },
    /// A deferred acknowledgement.
    Deferred {
        /// Interaction acknowledged.
        id: CorrelationId,
        /// Acknowledgement variant.
        ack: DeferredAck,
    },
    /// A follow-up message.
    Followup {
        /// Interaction followed up.
        id: CorrelationId,
        /// Message payload.
        message: MessageContent,
    },
}

impl SentResponse {
    /// Returns the interaction the response belongs to.
    #[must_use]
    pub const fn id(&self) -> &CorrelationId {
        match self {
            Self::Initial { id, .. } | Self::Deferred { id, .. } | Self::Followup { id, .. } => id,
        }
    }
}

#[derive(Debug, Default)]
struct RecordingState {
    sent: Vec<SentResponse>,
    failures: VecDeque<ResponseChannelError>,
}

/// Response channel that keeps sends in memory.
///
/// Queued failures are returned by the next sends in order; a failed send is
/// not recorded.
#[derive(Debug, Default)]
pub struct RecordingResponseChannel {
    state: Mutex<RecordingState>,
}

impl RecordingResponseChannel {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next send fail with `err`.
    pub fn fail_next(&self, err: ResponseChannelError) {
        self.lock().failures.push_back(err);
    }

    /// Returns every successful send in order.
    #[must_use]
    pub fn sent(&self) -> Vec<SentResponse> {
        self.lock().sent.clone()
    }

    /// Returns the successful sends for one interaction.
    #[must_use]
    pub fn sent_for(&self, id: &CorrelationId) -> Vec<SentResponse> {
        self.lock()
            .sent
            .iter()
            .filter(|sent| sent.id() == id)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, sent: SentResponse) -> ResponseChannelResult<()> {
        let mut state = self.lock();
        if let Some(err) = state.failures.pop_front() {
            return Err(err);
        }
        state.sent.push(sent);
        Ok(())
    }
}

#[async_trait]
impl ResponseChannel for RecordingResponseChannel {
    async fn send_initial(
        &self,
        id: &CorrelationId,
        response: &InitialResponse,
    ) -> ResponseChannelResult<()> {
        self.record(SentResponse::Initial {
            id: id.clone(),
            response: response.clone(),
        })
    }

    async fn send_deferred_ack(
        &self,
        id: &CorrelationId,
        ack: DeferredAck,
    ) -> ResponseChannelResult<()> {
        self.record(SentResponse::Deferred {
            id: id.clone(),
            ack,
        })
    }

    async fn send_followup(
        &self,
        id: &CorrelationId,
        message: &MessageContent,
    ) -> ResponseChannelResult<()> {
        self.record(SentResponse::Followup {
            id: id.clone(),
            message: message.clone(),
        })
    }
}
