//! Error types for interaction domain construction and classification.

use super::{InteractionKind, RouteNamespace};
use thiserror::Error;

/// Errors returned while constructing interaction domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InteractionDomainError {
    /// The correlation identifier is empty.
    #[error("correlation identifier must not be empty")]
    EmptyCorrelationId,

    /// A routing key name is empty.
    #[error("{} routing key must not be empty", .0.as_str())]
    EmptyRoutingKey(RouteNamespace),
}

/// The classifier could not derive a unique routing key from an event.
///
/// Malformed events are reported and dropped; they never abort dispatch of
/// other interactions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedEvent {
    /// The event data does not belong to the declared kind.
    #[error("{} event carries data for a different interaction kind", .kind.as_str())]
    PayloadMismatch {
        /// Declared event kind.
        kind: InteractionKind,
    },

    /// The command name or custom identifier is empty.
    #[error("{} event has an empty routing key", .kind.as_str())]
    EmptyRoutingKey {
        /// Declared event kind.
        kind: InteractionKind,
    },

    /// An autocomplete request did not mark exactly one option as focused.
    #[error("autocomplete for '{command}' marks {count} options focused, expected exactly one")]
    FocusedOptionCount {
        /// Command the request belongs to.
        command: String,
        /// Number of focused options found.
        count: usize,
    },

    /// A context-menu invocation did not reference a target.
    #[error("context-menu invocation of '{command}' has no target")]
    MissingTarget {
        /// Context-menu command name.
        command: String,
    },
}
