//! Adapters for the interaction ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryHandlerRegistry`]: hash-map backed handler registry
//! - [`handler_fn`]: wraps an async closure as an [`InteractionHandler`]
//! - [`wire::decode_interaction`]: decodes platform JSON payloads into
//!   events
//!
//! [`InteractionHandler`]: crate::interaction::ports::InteractionHandler

mod handler_fn;
pub mod memory;
pub mod wire;

pub use handler_fn::{FnHandler, handler_fn};
