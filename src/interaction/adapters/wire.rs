//! JSON wire decoding for inbound interaction payloads.
//!
//! The transport hands over the raw `INTERACTION_CREATE` payload. This
//! adapter maps the platform's numeric type codes onto [`InteractionKind`]
//! and builds an [`InteractionEvent`]. Routing-level validation stays with
//! the classifier; decoding only rejects payloads it cannot represent, such
//! as pings and modal submissions.

use std::collections::HashMap;

use mockable::Clock;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::interaction::domain::{
    CommandData, CommandOption, ComponentData, ComponentType, ContextTarget, CorrelationId,
    InteractionData, InteractionDomainError, InteractionEvent, InteractionKind,
};

const TYPE_APPLICATION_COMMAND: u8 = 2;
const TYPE_MESSAGE_COMPONENT: u8 = 3;
const TYPE_AUTOCOMPLETE: u8 = 4;

const COMMAND_CHAT_INPUT: u8 = 1;
const COMMAND_USER: u8 = 2;
const COMMAND_MESSAGE: u8 = 3;

const COMPONENT_BUTTON: u8 = 2;

/// Errors raised while decoding an interaction payload.
#[derive(Debug, Error)]
pub enum WireError {
    /// The payload is not valid JSON or does not match the envelope shape.
    #[error("malformed interaction payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Pings and modal submissions are not routed by this core.
    #[error("unsupported interaction type {0}")]
    UnsupportedType(u8),

    /// The application command type is unknown.
    #[error("unsupported application command type {0}")]
    UnsupportedCommandType(u8),

    /// The payload omits the `data` object.
    #[error("interaction payload has no data")]
    MissingData,

    /// A field required for the interaction type is absent.
    #[error("interaction payload is missing '{0}'")]
    MissingField(&'static str),

    /// The payload identifier is invalid.
    #[error(transparent)]
    Domain(#[from] InteractionDomainError),
}

#[derive(Debug, Deserialize)]
struct WireInteraction {
    id: String,
    #[serde(rename = "type")]
    kind: u8,
    data: Option<WireData>,
    channel_id: Option<String>,
    member: Option<WireMember>,
    user: Option<WireUser>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireData {
    name: Option<String>,
    #[serde(rename = "type")]
    command_type: Option<u8>,
    options: Vec<WireOption>,
    target_id: Option<String>,
    resolved: Option<WireResolved>,
    custom_id: Option<String>,
    component_type: Option<u8>,
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireOption {
    name: String,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    focused: bool,
    #[serde(default)]
    options: Vec<WireOption>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResolved {
    messages: HashMap<String, WireMessage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireMember {
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    id: String,
}

impl From<WireOption> for CommandOption {
    fn from(option: WireOption) -> Self {
        Self {
            name: option.name,
            value: option.value,
            focused: option.focused,
            options: option.options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Decodes a raw interaction payload into an event.
///
/// # Errors
///
/// Returns [`WireError`] when the payload is not valid JSON, has an
/// unsupported type, or lacks fields its type requires.
pub fn decode_interaction(
    payload: &str,
    clock: &impl Clock,
) -> Result<InteractionEvent, WireError> {
    let wire: WireInteraction = serde_json::from_str(payload)?;
    let id = CorrelationId::new(wire.id)?;
    let data = wire.data.ok_or(WireError::MissingData);

    let (kind, interaction_data) = match wire.kind {
        TYPE_APPLICATION_COMMAND => decode_application_command(data?)?,
        TYPE_AUTOCOMPLETE => (
            InteractionKind::Autocomplete,
            InteractionData::Command(decode_command_data(data?)?),
        ),
        TYPE_MESSAGE_COMPONENT => (
            InteractionKind::ComponentActivation,
            InteractionData::Component(decode_component_data(data?)?),
        ),
        other => return Err(WireError::UnsupportedType(other)),
    };

    let user_id = wire
        .member
        .and_then(|member| member.user)
        .or(wire.user)
        .map(|user| user.id);

    let mut event = InteractionEvent::new(id, kind, interaction_data, clock);
    if let Some(channel_id) = wire.channel_id {
        event = event.with_channel(channel_id);
    }
    if let Some(user) = user_id {
        event = event.with_user(user);
    }
    Ok(event)
}

fn decode_application_command(
    data: WireData,
) -> Result<(InteractionKind, InteractionData), WireError> {
    let command_type = data.command_type.unwrap_or(COMMAND_CHAT_INPUT);
    let kind = match command_type {
        COMMAND_CHAT_INPUT => InteractionKind::CommandInvocation,
        COMMAND_USER | COMMAND_MESSAGE => InteractionKind::ContextMenuInvocation,
        other => return Err(WireError::UnsupportedCommandType(other)),
    };
    let command = decode_command_data(data)?;
    Ok((kind, InteractionData::Command(command)))
}

fn decode_command_data(data: WireData) -> Result<CommandData, WireError> {
    let WireData {
        name: command_name,
        command_type,
        options,
        target_id,
        resolved,
        ..
    } = data;
    let name = command_name.ok_or(WireError::MissingField("data.name"))?;
    let target = target_id.map(|id| resolve_target(command_type, id, resolved));

    Ok(CommandData {
        name,
        options: options.into_iter().map(Into::into).collect(),
        target,
    })
}

fn resolve_target(
    command_type: Option<u8>,
    id: String,
    resolved: Option<WireResolved>,
) -> ContextTarget {
    if command_type == Some(COMMAND_MESSAGE) {
        let content = resolved
            .and_then(|mut lookup| lookup.messages.remove(&id))
            .map(|message| message.content)
            .unwrap_or_default();
        ContextTarget::Message { id, content }
    } else {
        ContextTarget::User { id }
    }
}

fn decode_component_data(data: WireData) -> Result<ComponentData, WireError> {
    let custom_id = data
        .custom_id
        .ok_or(WireError::MissingField("data.custom_id"))?;
    let component_type = match data.component_type {
        Some(COMPONENT_BUTTON) => ComponentType::Button,
        Some(_) => ComponentType::SelectMenu,
        None => return Err(WireError::MissingField("data.component_type")),
    };
    Ok(ComponentData {
        custom_id,
        component_type,
        values: data.values,
    })
}
