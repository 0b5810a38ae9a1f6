//! Identifiers used by the activity watchdog.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WatchdogDomainError;

/// Identifier of a tracked entity, for example a thread or channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an entity identifier.
    ///
    /// # Errors
    ///
    /// Returns [`WatchdogDomainError::EmptyEntityId`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, WatchdogDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(WatchdogDomainError::EmptyEntityId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marks one touch of an entity.
///
/// Tokens increase monotonically per watchdog. A delayed check acts only if
/// the entity's current token is still the one that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TouchToken(u64);

impl TouchToken {
    /// Wraps a raw token value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TouchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
