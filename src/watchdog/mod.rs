//! Inactivity tracking for long-lived entities.
//!
//! Handlers touch an entity (a thread, a game channel) whenever something
//! happens in it. Once the entity has been quiet for the configured
//! threshold the watchdog removes its record and invokes the registered
//! [`ports::TimeoutCallback`], for example to archive and lock the thread.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
