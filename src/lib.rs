//! Switchyard: interaction dispatch and response lifecycle for chat bots.
//!
//! This crate sits between a chat platform's event transport and the bot's
//! command handlers. It classifies inbound interactions, routes each one to
//! exactly one registered handler, enforces the platform's response-timing
//! contract and tracks inactivity on long-lived entities such as threads.
//!
//! # Architecture
//!
//! Switchyard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for handlers, outbound responses
//!   and timeout side effects
//! - **Adapters**: Concrete implementations of ports (in-memory, closures,
//!   wire decoding)
//! - **Services**: Routing, response lifecycle and watchdog orchestration
//!
//! # Modules
//!
//! - [`interaction`]: Classification, handler registry and routing
//! - [`response`]: Response content, state tracking and outbound sends
//! - [`watchdog`]: Per-entity inactivity timeouts
//! - [`config`]: Runtime configuration
//! - [`telemetry`]: Structured logging setup

pub mod config;
pub mod interaction;
pub mod response;
pub mod telemetry;
pub mod watchdog;

#[cfg(test)]
mod test_support;
