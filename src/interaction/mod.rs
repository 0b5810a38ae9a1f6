//! Inbound interaction classification and routing.
//!
//! Interaction events (slash commands, autocomplete requests, component
//! activations and context-menu invocations) are classified by kind, keyed by
//! command name or component custom identifier, and dispatched to exactly one
//! registered handler. The module follows hexagonal architecture:
//!
//! - Domain types and the classifier in [`domain`]
//! - Handler and registry contracts in [`ports`]
//! - Registry, closure and wire adapters in [`adapters`]
//! - The router in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
