//! Error types for the watchdog domain.

use thiserror::Error;

/// Errors raised when constructing watchdog domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WatchdogDomainError {
    /// The entity identifier is empty.
    #[error("entity identifier must not be empty")]
    EmptyEntityId,
}
