//! Adapter implementations of the response ports.

pub mod memory;
