//! Port contracts for the response lifecycle.

pub mod channel;

pub use channel::{ResponseChannel, ResponseChannelError, ResponseChannelResult};
