//! Port contracts for interaction routing.
//!
//! Ports define the handler capability and the registry the router depends
//! on.

pub mod handler;
pub mod registry;

pub use handler::{HandlerError, HandlerResult, InteractionHandler};
pub use registry::{HandlerRegistry, RegistryError, RegistryResult};
