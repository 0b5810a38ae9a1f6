//! Response lifecycle for routed interactions.
//!
//! Every interaction must receive exactly one initial response or deferred
//! acknowledgement within the platform's window, after which any number of
//! follow-up messages may be sent. This module validates outbound content,
//! tracks per-interaction state and performs the sends through the
//! [`ports::ResponseChannel`] port.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
