//! Inbound interaction events and their kind-specific data.

use super::CorrelationId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of inbound interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// A slash command was invoked.
    CommandInvocation,
    /// The user is typing into an autocomplete-enabled option.
    Autocomplete,
    /// A button or select menu was activated.
    ComponentActivation,
    /// A user or message context-menu command was invoked.
    ContextMenuInvocation,
}

impl InteractionKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommandInvocation => "command_invocation",
            Self::Autocomplete => "autocomplete",
            Self::ComponentActivation => "component_activation",
            Self::ContextMenuInvocation => "context_menu_invocation",
        }
    }
}

/// One option value supplied with a command, possibly nested.
///
/// Sub-commands and sub-command groups carry no value and hold their own
/// options in [`CommandOption::options`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Declared option name.
    pub name: String,
    /// Supplied value, absent for sub-commands.
    #[serde(default)]
    pub value: Option<Value>,
    /// Whether the user is currently typing into this option.
    #[serde(default)]
    pub focused: bool,
    /// Nested options for sub-commands and groups.
    #[serde(default)]
    pub options: Vec<Self>,
}

impl CommandOption {
    /// Creates an option without a value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            focused: false,
            options: Vec::new(),
        }
    }

    /// Sets the option value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Marks the option as focused.
    #[must_use]
    pub const fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    /// Sets nested options.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = Self>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Returns the value as a string slice when it is a JSON string.
    #[must_use]
    pub fn string_value(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_str)
    }
}

/// Target of a context-menu invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextTarget {
    /// A user was right-clicked.
    User {
        /// Target user identifier.
        id: String,
    },
    /// A message was right-clicked.
    Message {
        /// Target message identifier.
        id: String,
        /// Text content of the target message.
        content: String,
    },
}

/// Data carried by command, autocomplete and context-menu interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandData {
    /// Registered command name.
    pub name: String,
    /// Top-level options.
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// Context-menu target, when the command is a context-menu command.
    #[serde(default)]
    pub target: Option<ContextTarget>,
}

impl CommandData {
    /// Creates command data with no options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            target: None,
        }
    }

    /// Adds a top-level option.
    #[must_use]
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Sets the context-menu target.
    #[must_use]
    pub fn with_target(mut self, target: ContextTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Finds a top-level option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

/// Type of component that was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// A button.
    Button,
    /// A select menu.
    SelectMenu,
}

/// Data carried by component activations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentData {
    /// Author-assigned custom identifier of the component.
    pub custom_id: String,
    /// Component type.
    pub component_type: ComponentType,
    /// Selected values for select menus; empty for buttons.
    #[serde(default)]
    pub values: Vec<String>,
}

impl ComponentData {
    /// Creates data for a button activation.
    #[must_use]
    pub fn button(custom_id: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            component_type: ComponentType::Button,
            values: Vec::new(),
        }
    }

    /// Creates data for a select-menu activation.
    #[must_use]
    pub fn select(
        custom_id: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            custom_id: custom_id.into(),
            component_type: ComponentType::SelectMenu,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Kind-specific interaction data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InteractionData {
    /// Command, autocomplete or context-menu data.
    Command(CommandData),
    /// Component activation data.
    Component(ComponentData),
}

/// Immutable interaction event delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionEvent {
    id: CorrelationId,
    kind: InteractionKind,
    data: InteractionData,
    channel_id: Option<String>,
    user_id: Option<String>,
    received_at: DateTime<Utc>,
}

impl InteractionEvent {
    /// Creates an event stamped with the current clock time.
    #[must_use]
    pub fn new(
        id: CorrelationId,
        kind: InteractionKind,
        data: InteractionData,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            kind,
            data,
            channel_id: None,
            user_id: None,
            received_at: clock.utc(),
        }
    }

    /// Creates a slash-command invocation event.
    #[must_use]
    pub fn command(id: CorrelationId, data: CommandData, clock: &impl Clock) -> Self {
        Self::new(
            id,
            InteractionKind::CommandInvocation,
            InteractionData::Command(data),
            clock,
        )
    }

    /// Creates an autocomplete request event.
    #[must_use]
    pub fn autocomplete(id: CorrelationId, data: CommandData, clock: &impl Clock) -> Self {
        Self::new(
            id,
            InteractionKind::Autocomplete,
            InteractionData::Command(data),
            clock,
        )
    }

    /// Creates a context-menu invocation event.
    #[must_use]
    pub fn context_menu(id: CorrelationId, data: CommandData, clock: &impl Clock) -> Self {
        Self::new(
            id,
            InteractionKind::ContextMenuInvocation,
            InteractionData::Command(data),
            clock,
        )
    }

    /// Creates a component activation event.
    #[must_use]
    pub fn component(id: CorrelationId, data: ComponentData, clock: &impl Clock) -> Self {
        Self::new(
            id,
            InteractionKind::ComponentActivation,
            InteractionData::Component(data),
            clock,
        )
    }

    /// Sets the channel the interaction originated from.
    #[must_use]
    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Sets the invoking user.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Returns the correlation identifier.
    #[must_use]
    pub const fn id(&self) -> &CorrelationId {
        &self.id
    }

    /// Returns the interaction kind.
    #[must_use]
    pub const fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Returns the kind-specific data.
    #[must_use]
    pub const fn data(&self) -> &InteractionData {
        &self.data
    }

    /// Returns command data when the event carries it.
    #[must_use]
    pub const fn command_data(&self) -> Option<&CommandData> {
        match &self.data {
            InteractionData::Command(data) => Some(data),
            InteractionData::Component(_) => None,
        }
    }

    /// Returns component data when the event carries it.
    #[must_use]
    pub const fn component_data(&self) -> Option<&ComponentData> {
        match &self.data {
            InteractionData::Component(data) => Some(data),
            InteractionData::Command(_) => None,
        }
    }

    /// Returns the originating channel, if known.
    #[must_use]
    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    /// Returns the invoking user, if known.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Returns the time the event was received.
    #[must_use]
    pub const fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}
