//! Domain model for activity tracking.

mod error;
mod ids;
mod receipt;

pub use error::WatchdogDomainError;
pub use ids::{EntityId, TouchToken};
pub use receipt::TouchReceipt;
