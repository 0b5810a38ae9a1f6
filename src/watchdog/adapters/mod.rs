//! Adapter implementations of the watchdog ports.

mod timeout_fn;

pub use timeout_fn::{FnTimeout, timeout_fn};
