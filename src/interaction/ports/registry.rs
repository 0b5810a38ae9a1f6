//! Handler registry port.
//!
//! The registry maps routing keys to handlers. It is written once during
//! bootstrap through exclusive access and then shared read-only with the
//! router, so lookups need no locking.

use super::InteractionHandler;
use crate::interaction::domain::RoutingKey;
use std::sync::Arc;
use thiserror::Error;

/// Result type for handler registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Mapping from routing key to handler.
pub trait HandlerRegistry: Send + Sync {
    /// Registers a handler for a routing key.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] when the key already has a
    /// handler.
    fn register(
        &mut self,
        key: RoutingKey,
        handler: Arc<dyn InteractionHandler>,
    ) -> RegistryResult<()>;

    /// Looks up the handler for a routing key.
    ///
    /// Returns `None` when no handler is wired for the key. That is not a
    /// fault: platform payloads evolve and unknown keys are ignored.
    fn lookup(&self, key: &RoutingKey) -> Option<Arc<dyn InteractionHandler>>;
}

/// Errors for handler registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler is already registered for the key.
    #[error("duplicate handler registration for {0}")]
    DuplicateKey(RoutingKey),
}
