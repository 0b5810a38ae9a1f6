//! Closure adapter for the timeout callback port.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::watchdog::domain::EntityId;
use crate::watchdog::ports::{TimeoutCallback, TimeoutCallbackResult};

/// Timeout callback backed by an async closure.
pub struct FnTimeout<F> {
    func: F,
}

impl<F, Fut> FnTimeout<F>
where
    F: Fn(EntityId) -> Fut + Send + Sync,
    Fut: Future<Output = TimeoutCallbackResult> + Send,
{
    /// Wraps a closure.
    #[must_use]
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F, Fut> TimeoutCallback for FnTimeout<F>
where
    F: Fn(EntityId) -> Fut + Send + Sync,
    Fut: Future<Output = TimeoutCallbackResult> + Send,
{
    async fn on_timeout(&self, entity: &EntityId) -> TimeoutCallbackResult {
        (self.func)(entity.clone()).await
    }
}

/// Wraps an async closure as a shareable timeout callback.
#[must_use]
pub fn timeout_fn<F, Fut>(func: F) -> Arc<dyn TimeoutCallback>
where
    F: Fn(EntityId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = TimeoutCallbackResult> + Send + 'static,
{
    Arc::new(FnTimeout::new(func))
}
