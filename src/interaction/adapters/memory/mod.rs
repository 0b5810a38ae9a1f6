//! In-memory adapter implementations.

mod handler_registry;

pub use handler_registry::InMemoryHandlerRegistry;
