//! Port contracts for the activity watchdog.

pub mod timeout;

pub use timeout::{TimeoutCallback, TimeoutCallbackError, TimeoutCallbackResult};
