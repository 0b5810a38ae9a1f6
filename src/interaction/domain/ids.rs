//! Identifier and routing-key types for the interaction domain.

use super::InteractionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque platform token identifying one interaction instance.
///
/// Every response to an interaction is addressed by this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Creates a correlation identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionDomainError::EmptyCorrelationId`] when the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, InteractionDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(InteractionDomainError::EmptyCorrelationId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CorrelationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace a routing key belongs to.
///
/// Command invocations, autocomplete requests and context-menu invocations
/// share the command namespace. Components are keyed by their custom
/// identifier in a namespace of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteNamespace {
    /// Registered command names.
    Command,
    /// Author-assigned component custom identifiers.
    Component,
}

impl RouteNamespace {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Component => "component",
        }
    }
}

/// Key used to look up the handler for an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoutingKey {
    namespace: RouteNamespace,
    name: String,
}

impl RoutingKey {
    /// Creates a routing key for a registered command name.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionDomainError::EmptyRoutingKey`] when the name is
    /// empty.
    pub fn command(name: impl Into<String>) -> Result<Self, InteractionDomainError> {
        Self::new(RouteNamespace::Command, name)
    }

    /// Creates a routing key for a component custom identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionDomainError::EmptyRoutingKey`] when the custom
    /// identifier is empty.
    pub fn component(custom_id: impl Into<String>) -> Result<Self, InteractionDomainError> {
        Self::new(RouteNamespace::Component, custom_id)
    }

    /// Creates a routing key in the given namespace.
    ///
    /// Names are kept verbatim; lookups compare them exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionDomainError::EmptyRoutingKey`] when the name is
    /// empty after trimming.
    pub fn new(
        namespace: RouteNamespace,
        name: impl Into<String>,
    ) -> Result<Self, InteractionDomainError> {
        let raw = name.into();
        if raw.trim().is_empty() {
            return Err(InteractionDomainError::EmptyRoutingKey(namespace));
        }
        Ok(Self {
            namespace,
            name: raw,
        })
    }

    /// Returns the key namespace.
    #[must_use]
    pub const fn namespace(&self) -> RouteNamespace {
        self.namespace
    }

    /// Returns the command name or component custom identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace.as_str(), self.name)
    }
}
