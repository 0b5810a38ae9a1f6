//! Interaction routing and dispatch.
//!
//! The router classifies each event, looks up its handler and runs the
//! handler on a task of its own. Malformed events, unrouted keys and handler
//! faults are contained here and reported through `tracing`; none of them
//! affects the dispatch of other interactions.

use std::any::Any;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, warn};

use crate::interaction::domain::{
    CorrelationId, InteractionEvent, MalformedEvent, RoutingKey, classify,
};
use crate::interaction::ports::{HandlerError, HandlerRegistry};

/// Tracing target for dispatch operations.
const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// A handler failed while processing an interaction.
///
/// The interaction is left unacknowledged; the platform tells the user it
/// failed.
#[derive(Debug, Clone, Error)]
pub enum HandlerFault {
    /// The handler returned an error.
    #[error("handler for {key} failed on interaction {interaction}: {source}")]
    Failed {
        /// Routing key of the handler.
        key: RoutingKey,
        /// Interaction being handled.
        interaction: CorrelationId,
        /// Error returned by the handler.
        source: HandlerError,
    },

    /// The handler panicked.
    #[error("handler for {key} panicked on interaction {interaction}: {message}")]
    Panicked {
        /// Routing key of the handler.
        key: RoutingKey,
        /// Interaction being handled.
        interaction: CorrelationId,
        /// Panic payload rendered as text.
        message: String,
    },

    /// The handler task was cancelled before completing.
    #[error("handler for {key} was cancelled on interaction {interaction}")]
    Cancelled {
        /// Routing key of the handler.
        key: RoutingKey,
        /// Interaction being handled.
        interaction: CorrelationId,
    },
}

/// Result of dispatching one event.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// The handler ran to completion.
    Handled(RoutingKey),
    /// No handler is registered for the key; the event was ignored.
    Unrouted(RoutingKey),
    /// The event could not be classified and was dropped.
    Malformed(MalformedEvent),
    /// The handler failed.
    Faulted(HandlerFault),
}

impl DispatchOutcome {
    /// Returns `true` when a handler ran to completion.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Routes interaction events to registered handlers.
#[derive(Debug)]
pub struct InteractionRouter<R>
where
    R: HandlerRegistry,
{
    registry: Arc<R>,
}

impl<R> Clone for InteractionRouter<R>
where
    R: HandlerRegistry,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<R> InteractionRouter<R>
where
    R: HandlerRegistry + 'static,
{
    /// Creates a router over a fully populated registry.
    #[must_use]
    pub const fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }

    /// Returns the registry the router reads from.
    #[must_use]
    pub const fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Classifies, routes and handles one event.
    ///
    /// Never fails: every failure mode is reported and returned as a
    /// [`DispatchOutcome`] variant.
    pub async fn dispatch(&self, event: InteractionEvent) -> DispatchOutcome {
        let classification = match classify(&event) {
            Ok(classification) => classification,
            Err(malformed) => {
                warn!(
                    target: DISPATCH_TARGET,
                    interaction = %event.id(),
                    kind = event.kind().as_str(),
                    error = %malformed,
                    "dropping malformed interaction"
                );
                return DispatchOutcome::Malformed(malformed);
            }
        };
        let key = classification.routing_key().clone();

        let Some(handler) = self.registry.lookup(&key) else {
            debug!(
                target: DISPATCH_TARGET,
                interaction = %event.id(),
                key = %key,
                "no handler registered; ignoring interaction"
            );
            return DispatchOutcome::Unrouted(key);
        };

        debug!(
            target: DISPATCH_TARGET,
            interaction = %event.id(),
            key = %key,
            kind = classification.kind().as_str(),
            "routing interaction"
        );

        let interaction = event.id().clone();
        let task = tokio::spawn(async move { handler.handle(&event).await });
        match task.await {
            Ok(Ok(())) => DispatchOutcome::Handled(key),
            Ok(Err(source)) => report_fault(HandlerFault::Failed {
                key,
                interaction,
                source,
            }),
            Err(join_error) => report_fault(fault_from_join(key, interaction, join_error)),
        }
    }

    /// Dispatches an event on a new task.
    ///
    /// Lets the transport feed events concurrently; no ordering is imposed
    /// between interactions.
    pub fn spawn(&self, event: InteractionEvent) -> JoinHandle<DispatchOutcome> {
        let router = self.clone();
        tokio::spawn(async move { router.dispatch(event).await })
    }
}

fn fault_from_join(key: RoutingKey, interaction: CorrelationId, err: JoinError) -> HandlerFault {
    match err.try_into_panic() {
        Ok(payload) => HandlerFault::Panicked {
            key,
            interaction,
            message: panic_message(payload.as_ref()),
        },
        Err(_) => HandlerFault::Cancelled { key, interaction },
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

fn report_fault(fault: HandlerFault) -> DispatchOutcome {
    error!(target: DISPATCH_TARGET, error = %fault, "interaction handler fault");
    DispatchOutcome::Faulted(fault)
}
