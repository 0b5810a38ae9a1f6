//! In-memory handler registry adapter.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::interaction::domain::RoutingKey;
use crate::interaction::ports::{
    HandlerRegistry, InteractionHandler, RegistryError, RegistryResult,
};

/// Hash-map backed handler registry.
///
/// Registration takes `&mut self`; once the registry is wrapped in an `Arc`
/// and handed to the router it is read-only.
#[derive(Clone, Default)]
pub struct InMemoryHandlerRegistry {
    handlers: HashMap<RoutingKey, Arc<dyn InteractionHandler>>,
}

impl InMemoryHandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from key and handler pairs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] when the same key appears
    /// twice.
    pub fn with_handlers(
        entries: impl IntoIterator<Item = (RoutingKey, Arc<dyn InteractionHandler>)>,
    ) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for (key, handler) in entries {
            registry.register(key, handler)?;
        }
        Ok(registry)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns registered keys in sorted order.
    #[must_use]
    pub fn keys(&self) -> Vec<RoutingKey> {
        let mut keys: Vec<_> = self.handlers.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl fmt::Debug for InMemoryHandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryHandlerRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl HandlerRegistry for InMemoryHandlerRegistry {
    fn register(
        &mut self,
        key: RoutingKey,
        handler: Arc<dyn InteractionHandler>,
    ) -> RegistryResult<()> {
        if self.handlers.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }
        self.handlers.insert(key, handler);
        Ok(())
    }

    fn lookup(&self, key: &RoutingKey) -> Option<Arc<dyn InteractionHandler>> {
        self.handlers.get(key).cloned()
    }
}
