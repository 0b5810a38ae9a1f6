//! Closure adapter for the handler port.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::interaction::domain::InteractionEvent;
use crate::interaction::ports::{HandlerResult, InteractionHandler};

/// Handler backed by an async closure.
///
/// The closure receives its own copy of the event so the returned future can
/// be `'static`.
pub struct FnHandler<F> {
    func: F,
}

impl<F, Fut> FnHandler<F>
where
    F: Fn(InteractionEvent) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send,
{
    /// Wraps a closure.
    #[must_use]
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F, Fut> InteractionHandler for FnHandler<F>
where
    F: Fn(InteractionEvent) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send,
{
    async fn handle(&self, event: &InteractionEvent) -> HandlerResult {
        (self.func)(event.clone()).await
    }
}

/// Wraps an async closure as a shareable handler.
///
/// # Examples
///
/// ```
/// use switchyard::interaction::adapters::handler_fn;
/// use switchyard::interaction::adapters::memory::InMemoryHandlerRegistry;
/// use switchyard::interaction::domain::RoutingKey;
/// use switchyard::interaction::ports::HandlerRegistry;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut registry = InMemoryHandlerRegistry::new();
/// registry.register(
///     RoutingKey::command("ping")?,
///     handler_fn(|_event| async { Ok(()) }),
/// )?;
/// assert_eq!(registry.len(), 1);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn handler_fn<F, Fut>(func: F) -> Arc<dyn InteractionHandler>
where
    F: Fn(InteractionEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    Arc::new(FnHandler::new(func))
}
