//! Activity watchdog service.
//!
//! Each touch records the entity's last activity and schedules a one-shot
//! check on the tokio timer. A check fires the timeout callback only if no
//! later touch has superseded it, so a burst of activity produces exactly one
//! timeout, measured from the last touch.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use thiserror::Error;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::WatchdogConfig;
use crate::watchdog::domain::{EntityId, TouchReceipt, TouchToken};
use crate::watchdog::ports::TimeoutCallback;

/// Tracing target for watchdog operations.
const WATCHDOG_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::watchdog");

/// Errors returned by [`ActivityWatchdog`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WatchdogError {
    /// The watchdog was used outside a tokio runtime, so no check can be
    /// scheduled.
    #[error("activity watchdog requires a tokio runtime")]
    NoRuntime,
}

/// Result type for watchdog operations.
pub type WatchdogResult<T> = Result<T, WatchdogError>;

struct ActivityRecord {
    last_activity: DateTime<Utc>,
    token: TouchToken,
    callback: Arc<dyn TimeoutCallback>,
}

struct WatchdogState<C> {
    clock: Arc<C>,
    threshold: Duration,
    next_token: AtomicU64,
    records: Mutex<HashMap<EntityId, ActivityRecord>>,
}

impl<C> WatchdogState<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn records(&self) -> MutexGuard<'_, HashMap<EntityId, ActivityRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes the record if `token` still identifies its latest touch.
    fn take_if_current(
        &self,
        entity: &EntityId,
        token: TouchToken,
    ) -> Option<Arc<dyn TimeoutCallback>> {
        let mut records = self.records();
        if records.get(entity).is_some_and(|record| record.token == token) {
            records.remove(entity).map(|record| record.callback)
        } else {
            None
        }
    }

    async fn check(&self, entity: &EntityId, token: TouchToken) {
        let Some(callback) = self.take_if_current(entity, token) else {
            debug!(
                target: WATCHDOG_TARGET,
                entity = %entity,
                token = token.value(),
                "check superseded"
            );
            return;
        };
        debug!(
            target: WATCHDOG_TARGET,
            entity = %entity,
            token = token.value(),
            "inactivity threshold reached"
        );
        if let Err(err) = callback.on_timeout(entity).await {
            warn!(
                target: WATCHDOG_TARGET,
                entity = %entity,
                error = %err,
                "timeout callback failed"
            );
        }
    }
}

/// Fires a callback once an entity has been quiet for a threshold.
///
/// Cloning is cheap; clones share the same records. Scheduled checks hold a
/// weak reference, so dropping every clone cancels pending timeouts.
pub struct ActivityWatchdog<C>
where
    C: Clock + Send + Sync + 'static,
{
    state: Arc<WatchdogState<C>>,
}

impl<C> Clone for ActivityWatchdog<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<C> fmt::Debug for ActivityWatchdog<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivityWatchdog")
            .field("threshold", &self.state.threshold)
            .field("tracked", &self.tracked_count())
            .finish_non_exhaustive()
    }
}

impl<C> ActivityWatchdog<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a watchdog with the given inactivity threshold.
    #[must_use]
    pub fn new(clock: Arc<C>, threshold: Duration) -> Self {
        Self {
            state: Arc::new(WatchdogState {
                clock,
                threshold,
                next_token: AtomicU64::new(1),
                records: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Creates a watchdog from configuration.
    #[must_use]
    pub fn with_config(clock: Arc<C>, config: &WatchdogConfig) -> Self {
        Self::new(clock, config.inactivity_threshold())
    }

    /// Returns the inactivity threshold.
    #[must_use]
    pub fn threshold(&self) -> Duration {
        self.state.threshold
    }

    /// Records activity on an entity and schedules a delayed check.
    ///
    /// Any check scheduled by an earlier touch of the same entity becomes a
    /// no-op, and `callback` replaces the previously registered one. Tokens
    /// are issued under the records lock, so the stored record always holds
    /// the newest token.
    ///
    /// # Errors
    ///
    /// Returns [`WatchdogError::NoRuntime`] when called outside a tokio
    /// runtime. Nothing is recorded in that case.
    pub fn touch(
        &self,
        entity: EntityId,
        callback: Arc<dyn TimeoutCallback>,
    ) -> WatchdogResult<TouchReceipt> {
        let runtime = Handle::try_current().map_err(|_| WatchdogError::NoRuntime)?;
        let (token, touched_at) = {
            let mut records = self.state.records();
            let token = TouchToken::new(self.state.next_token.fetch_add(1, Ordering::Relaxed));
            let touched_at = self.state.clock.utc();
            records.insert(
                entity.clone(),
                ActivityRecord {
                    last_activity: touched_at,
                    token,
                    callback,
                },
            );
            (token, touched_at)
        };
        let deadline = TimeDelta::from_std(self.state.threshold)
            .ok()
            .and_then(|delta| touched_at.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        debug!(
            target: WATCHDOG_TARGET,
            entity = %entity,
            token = token.value(),
            "activity recorded"
        );

        let state = Arc::downgrade(&self.state);
        let threshold = self.state.threshold;
        let scheduled = entity.clone();
        runtime.spawn(async move {
            tokio::time::sleep(threshold).await;
            if let Some(live) = Weak::upgrade(&state) {
                live.check(&scheduled, token).await;
            }
        });

        Ok(TouchReceipt::new(entity, token, touched_at, deadline))
    }

    /// Stops tracking an entity that was closed by other means.
    ///
    /// Pending checks for the entity become no-ops. Returns `true` if the
    /// entity was tracked.
    pub fn close(&self, entity: &EntityId) -> bool {
        let removed = self.state.records().remove(entity).is_some();
        if removed {
            debug!(target: WATCHDOG_TARGET, entity = %entity, "entity closed");
        }
        removed
    }

    /// Returns the last recorded activity of an entity.
    #[must_use]
    pub fn last_activity(&self, entity: &EntityId) -> Option<DateTime<Utc>> {
        self.state
            .records()
            .get(entity)
            .map(|record| record.last_activity)
    }

    /// Returns the number of entities with a pending timeout.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.state.records().len()
    }
}
