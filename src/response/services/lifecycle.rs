//! Response lifecycle service.
//!
//! Enforces the platform's response-timing contract per interaction: exactly
//! one initial response or deferred acknowledgement, then any number of
//! follow-ups. Each operation performs exactly one outbound send and never
//! retries.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use thiserror::Error;
use tracing::debug;

use crate::config::ResponseConfig;
use crate::interaction::domain::CorrelationId;
use crate::response::domain::{
    DeferredAck, InitialResponse, MessageContent, ResponseDomainError, ResponseState,
};
use crate::response::ports::{ResponseChannel, ResponseChannelError, ResponseChannelResult};

/// Tracing target for response lifecycle operations.
const RESPONSE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::response");

/// Errors returned by [`ResponseLifecycleService`].
#[derive(Debug, Clone, Error)]
pub enum ResponseLifecycleError {
    /// An initial response or deferred acknowledgement already exists.
    #[error("interaction {0} has already been responded to")]
    AlreadyResponded(CorrelationId),

    /// A follow-up was attempted before the interaction was acknowledged.
    #[error("interaction {0} has not been acknowledged")]
    NotAcknowledged(CorrelationId),

    /// The platform's response window has passed.
    #[error("response window for interaction {0} has expired")]
    ResponseExpired(CorrelationId),

    /// The response content violates a platform limit.
    #[error(transparent)]
    InvalidContent(#[from] ResponseDomainError),

    /// The outbound channel failed.
    #[error(transparent)]
    Channel(#[from] ResponseChannelError),
}

/// Result type for response lifecycle operations.
pub type ResponseLifecycleResult<T> = Result<T, ResponseLifecycleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// An initial send is in flight.
    Pending,
    Settled(ResponseState),
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    phase: Phase,
    opened_at: DateTime<Utc>,
}

type Slots = Mutex<HashMap<CorrelationId, Slot>>;

fn lock_slots(slots: &Slots) -> MutexGuard<'_, HashMap<CorrelationId, Slot>> {
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Claim on the single initial response of one interaction.
///
/// Dropping an unsettled reservation releases it, so a send that failed or
/// was cancelled leaves the interaction unacknowledged.
struct Reservation<'a> {
    slots: &'a Slots,
    id: &'a CorrelationId,
    settled: bool,
}

impl Reservation<'_> {
    fn settle(mut self, state: ResponseState, now: DateTime<Utc>) {
        let mut slots = lock_slots(self.slots);
        slots
            .entry(self.id.clone())
            .and_modify(|slot| slot.phase = Phase::Settled(state))
            .or_insert(Slot {
                phase: Phase::Settled(state),
                opened_at: now,
            });
        self.settled = true;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut slots = lock_slots(self.slots);
        if slots
            .get(self.id)
            .is_some_and(|slot| slot.phase == Phase::Pending)
        {
            slots.remove(self.id);
        }
    }
}

/// Tracks and enforces the response state of every interaction.
///
/// Interactions that have never been answered have no entry and report
/// [`ResponseState::Unacknowledged`]. Entries older than the grace period
/// are evicted whenever a new interaction is reserved, or on demand by
/// [`sweep_expired`]. [`forget`] drops one entry immediately.
///
/// [`forget`]: Self::forget
/// [`sweep_expired`]: Self::sweep_expired
pub struct ResponseLifecycleService<P, C>
where
    P: ResponseChannel,
    C: Clock + Send + Sync,
{
    channel: Arc<P>,
    clock: Arc<C>,
    grace_period: TimeDelta,
    slots: Slots,
}

impl<P, C> fmt::Debug for ResponseLifecycleService<P, C>
where
    P: ResponseChannel,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseLifecycleService")
            .field("grace_period", &self.grace_period)
            .field("tracked", &self.tracked_count())
            .finish_non_exhaustive()
    }
}

impl<P, C> ResponseLifecycleService<P, C>
where
    P: ResponseChannel,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default grace period.
    #[must_use]
    pub fn new(channel: Arc<P>, clock: Arc<C>) -> Self {
        Self::with_config(channel, clock, &ResponseConfig::default())
    }

    /// Creates a service from configuration.
    #[must_use]
    pub fn with_config(channel: Arc<P>, clock: Arc<C>, config: &ResponseConfig) -> Self {
        let grace_period =
            TimeDelta::from_std(config.state_grace_period()).unwrap_or(TimeDelta::MAX);
        Self {
            channel,
            clock,
            grace_period,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the outbound channel.
    #[must_use]
    pub const fn channel(&self) -> &Arc<P> {
        &self.channel
    }

    /// Sends the initial response to an interaction.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseLifecycleError::AlreadyResponded`] when the
    /// interaction was already answered or acknowledged, whatever the
    /// content, [`ResponseLifecycleError::InvalidContent`] when the response
    /// breaks a platform limit,
    /// [`ResponseLifecycleError::ResponseExpired`] when the acknowledgement
    /// window has passed, or [`ResponseLifecycleError::Channel`] when the
    /// send fails. Only a successful send consumes the interaction.
    pub async fn respond_initial(
        &self,
        id: &CorrelationId,
        response: &InitialResponse,
    ) -> ResponseLifecycleResult<()> {
        let reservation = self.reserve(id)?;
        response.validate()?;
        self.acknowledge(reservation, id, ResponseState::Acknowledged, || {
            self.channel.send_initial(id, response)
        })
        .await
    }

    /// Acknowledges an interaction whose answer will follow later.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`respond_initial`](Self::respond_initial)
    /// apart from content validation.
    pub async fn respond_deferred(
        &self,
        id: &CorrelationId,
        ack: DeferredAck,
    ) -> ResponseLifecycleResult<()> {
        let reservation = self.reserve(id)?;
        self.acknowledge(reservation, id, ResponseState::Deferred, || {
            self.channel.send_deferred_ack(id, ack)
        })
        .await
    }

    /// Sends a follow-up message.
    ///
    /// Follow-ups are unlimited and never change the interaction's state.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseLifecycleError::NotAcknowledged`] before an initial
    /// response or deferred acknowledgement has succeeded,
    /// [`ResponseLifecycleError::InvalidContent`] for invalid content,
    /// [`ResponseLifecycleError::ResponseExpired`] when the follow-up window
    /// has passed, or [`ResponseLifecycleError::Channel`] when the send
    /// fails.
    pub async fn send_followup(
        &self,
        id: &CorrelationId,
        message: &MessageContent,
    ) -> ResponseLifecycleResult<()> {
        if !self.state(id).accepts_followups() {
            return Err(ResponseLifecycleError::NotAcknowledged(id.clone()));
        }
        message.validate()?;
        self.channel
            .send_followup(id, message)
            .await
            .map_err(|err| map_channel_error(id, err))?;
        debug!(target: RESPONSE_TARGET, interaction = %id, "follow-up sent");
        Ok(())
    }

    /// Returns the current state of an interaction.
    #[must_use]
    pub fn state(&self, id: &CorrelationId) -> ResponseState {
        match lock_slots(&self.slots).get(id).map(|slot| slot.phase) {
            Some(Phase::Settled(state)) => state,
            Some(Phase::Pending) | None => ResponseState::Unacknowledged,
        }
    }

    /// Drops the record of an interaction.
    ///
    /// Returns `true` if a record existed.
    pub fn forget(&self, id: &CorrelationId) -> bool {
        lock_slots(&self.slots).remove(id).is_some()
    }

    /// Returns the number of tracked interactions.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        lock_slots(&self.slots).len()
    }

    /// Removes records older than the grace period.
    ///
    /// Every new initial response or deferral already evicts expired
    /// records; this only forces an eviction pass when no new interaction
    /// arrives. Returns the number of records removed.
    pub fn sweep_expired(&self) -> usize {
        let mut slots = lock_slots(&self.slots);
        self.evict_expired(&mut slots)
    }

    fn evict_expired(&self, slots: &mut HashMap<CorrelationId, Slot>) -> usize {
        let cutoff = self
            .clock
            .utc()
            .checked_sub_signed(self.grace_period)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let before = slots.len();
        slots.retain(|_, slot| slot.opened_at > cutoff);
        let removed = before - slots.len();
        if removed > 0 {
            debug!(target: RESPONSE_TARGET, removed, "evicted expired response states");
        }
        removed
    }

    fn reserve<'a>(&'a self, id: &'a CorrelationId) -> ResponseLifecycleResult<Reservation<'a>> {
        let mut slots = lock_slots(&self.slots);
        self.evict_expired(&mut slots);
        if slots.contains_key(id) {
            return Err(ResponseLifecycleError::AlreadyResponded(id.clone()));
        }
        slots.insert(
            id.clone(),
            Slot {
                phase: Phase::Pending,
                opened_at: self.clock.utc(),
            },
        );
        Ok(Reservation {
            slots: &self.slots,
            id,
            settled: false,
        })
    }

    async fn acknowledge<S, F>(
        &self,
        reservation: Reservation<'_>,
        id: &CorrelationId,
        target: ResponseState,
        send: S,
    ) -> ResponseLifecycleResult<()>
    where
        S: FnOnce() -> F,
        F: Future<Output = ResponseChannelResult<()>>,
    {
        match send().await {
            Ok(()) => {
                reservation.settle(target, self.clock.utc());
                debug!(
                    target: RESPONSE_TARGET,
                    interaction = %id,
                    state = target.as_str(),
                    "interaction acknowledged"
                );
                Ok(())
            }
            Err(ResponseChannelError::DuplicateResponse(_)) => {
                reservation.settle(ResponseState::Acknowledged, self.clock.utc());
                debug!(
                    target: RESPONSE_TARGET,
                    interaction = %id,
                    "platform reports an existing response"
                );
                Err(ResponseLifecycleError::AlreadyResponded(id.clone()))
            }
            Err(err) => Err(map_channel_error(id, err)),
        }
    }
}

fn map_channel_error(id: &CorrelationId, err: ResponseChannelError) -> ResponseLifecycleError {
    match err {
        ResponseChannelError::WindowExpired(_) => {
            ResponseLifecycleError::ResponseExpired(id.clone())
        }
        other => ResponseLifecycleError::Channel(other),
    }
}
