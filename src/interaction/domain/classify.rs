//! Classification of inbound interaction events.
//!
//! The classifier is a pure function of the event: it confirms that the
//! event data matches its declared kind and extracts the routing key used to
//! select a handler. Autocomplete requests additionally expose the option the
//! user is typing into.

use super::{
    CommandData, CommandOption, InteractionData, InteractionEvent, InteractionKind,
    MalformedEvent, RouteNamespace, RoutingKey,
};

/// The option an autocomplete request is asking suggestions for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedOption {
    /// Declared option name.
    pub name: String,
    /// Partial user input; empty when the value is not a string.
    pub value: String,
}

impl FocusedOption {
    fn from_option(option: &CommandOption) -> Self {
        Self {
            name: option.name.clone(),
            value: option.string_value().unwrap_or_default().to_owned(),
        }
    }
}

/// Result of classifying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    kind: InteractionKind,
    routing_key: RoutingKey,
    focused: Option<FocusedOption>,
}

impl Classification {
    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Returns the routing key for handler lookup.
    #[must_use]
    pub const fn routing_key(&self) -> &RoutingKey {
        &self.routing_key
    }

    /// Returns the focused option of an autocomplete request.
    ///
    /// Always `Some` for autocomplete events and `None` otherwise.
    #[must_use]
    pub const fn focused_option(&self) -> Option<&FocusedOption> {
        self.focused.as_ref()
    }
}

/// Classifies an event and extracts its routing key.
///
/// # Errors
///
/// Returns [`MalformedEvent`] when the data does not match the kind, the
/// routing key is empty, an autocomplete request does not focus exactly one
/// option, or a context-menu invocation has no target.
pub fn classify(event: &InteractionEvent) -> Result<Classification, MalformedEvent> {
    let kind = event.kind();
    match (kind, event.data()) {
        (InteractionKind::CommandInvocation, InteractionData::Command(data)) => {
            Ok(Classification {
                kind,
                routing_key: command_key(kind, data)?,
                focused: None,
            })
        }
        (InteractionKind::ContextMenuInvocation, InteractionData::Command(data)) => {
            let routing_key = command_key(kind, data)?;
            if data.target.is_none() {
                return Err(MalformedEvent::MissingTarget {
                    command: data.name.clone(),
                });
            }
            Ok(Classification {
                kind,
                routing_key,
                focused: None,
            })
        }
        (InteractionKind::Autocomplete, InteractionData::Command(data)) => {
            let routing_key = command_key(kind, data)?;
            let focused = single_focused_option(data)?;
            Ok(Classification {
                kind,
                routing_key,
                focused: Some(focused),
            })
        }
        (InteractionKind::ComponentActivation, InteractionData::Component(data)) => {
            let routing_key = RoutingKey::new(RouteNamespace::Component, data.custom_id.as_str())
                .map_err(|_| MalformedEvent::EmptyRoutingKey { kind })?;
            Ok(Classification {
                kind,
                routing_key,
                focused: None,
            })
        }
        _ => Err(MalformedEvent::PayloadMismatch { kind }),
    }
}

fn command_key(kind: InteractionKind, data: &CommandData) -> Result<RoutingKey, MalformedEvent> {
    RoutingKey::new(RouteNamespace::Command, data.name.as_str())
        .map_err(|_| MalformedEvent::EmptyRoutingKey { kind })
}

/// Finds the one focused option, searching through sub-command nesting.
fn single_focused_option(data: &CommandData) -> Result<FocusedOption, MalformedEvent> {
    let mut focused = Vec::new();
    collect_focused(&data.options, &mut focused);
    match focused.as_slice() {
        [only] => Ok(FocusedOption::from_option(only)),
        other => Err(MalformedEvent::FocusedOptionCount {
            command: data.name.clone(),
            count: other.len(),
        }),
    }
}

fn collect_focused<'a>(options: &'a [CommandOption], found: &mut Vec<&'a CommandOption>) {
    for option in options {
        if option.focused {
            found.push(option);
        }
        collect_focused(&option.options, found);
    }
}
