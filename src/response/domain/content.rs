//! Outbound response content: messages, components and autocomplete choices.

use super::ResponseDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum characters of message text.
pub const MAX_CONTENT_LENGTH: usize = 2000;
/// Maximum action rows per message.
pub const MAX_ACTION_ROWS: usize = 5;
/// Maximum buttons per action row.
pub const MAX_ROW_BUTTONS: usize = 5;
/// Maximum options in one select menu.
pub const MAX_SELECT_OPTIONS: usize = 25;
/// Maximum choices in one autocomplete result.
pub const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Blurple call to action.
    Primary,
    /// Grey secondary action.
    Secondary,
    /// Green confirmation.
    Success,
    /// Red destructive action.
    Danger,
    /// Navigates to a URL instead of raising an interaction.
    Link,
}

/// What activating a button does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Raises a component interaction with this custom identifier.
    CustomId(String),
    /// Opens a URL; only valid for [`ButtonStyle::Link`].
    Url(String),
}

/// A clickable button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Display label.
    pub label: String,
    /// Visual style.
    pub style: ButtonStyle,
    /// Activation behaviour.
    pub action: ButtonAction,
    /// Optional emoji shown before the label.
    pub emoji: Option<String>,
    /// Whether the button is greyed out.
    pub disabled: bool,
}

impl Button {
    /// Creates a button that raises a component interaction.
    #[must_use]
    pub fn action(
        label: impl Into<String>,
        style: ButtonStyle,
        custom_id: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            style,
            action: ButtonAction::CustomId(custom_id.into()),
            emoji: None,
            disabled: false,
        }
    }

    /// Creates a link button.
    #[must_use]
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: ButtonStyle::Link,
            action: ButtonAction::Url(url.into()),
            emoji: None,
            disabled: false,
        }
    }

    /// Sets the emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Disables the button.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn validate(&self) -> Result<(), ResponseDomainError> {
        match (&self.action, self.style) {
            (ButtonAction::Url(_), ButtonStyle::Link) => Ok(()),
            (ButtonAction::CustomId(custom_id), style) if style != ButtonStyle::Link => {
                require_custom_id(custom_id)
            }
            _ => Err(ResponseDomainError::LinkButtonMismatch {
                label: self.label.clone(),
            }),
        }
    }
}

/// One entry in a select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label.
    pub label: String,
    /// Value reported when selected.
    pub value: String,
    /// Optional secondary text.
    pub description: Option<String>,
    /// Whether the option is preselected.
    pub default: bool,
}

impl SelectOption {
    /// Creates an option.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            default: false,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A dropdown of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectMenu {
    /// Author-assigned custom identifier.
    pub custom_id: String,
    /// Text shown when nothing is selected.
    pub placeholder: Option<String>,
    /// Selectable options.
    pub options: Vec<SelectOption>,
    /// Minimum number of selections.
    pub min_values: usize,
    /// Maximum number of selections.
    pub max_values: usize,
}

impl SelectMenu {
    /// Creates a single-choice select menu.
    #[must_use]
    pub fn new(
        custom_id: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        Self {
            custom_id: custom_id.into(),
            placeholder: None,
            options: options.into_iter().collect(),
            min_values: 1,
            max_values: 1,
        }
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the selection range.
    #[must_use]
    pub const fn with_range(mut self, min_values: usize, max_values: usize) -> Self {
        self.min_values = min_values;
        self.max_values = max_values;
        self
    }

    fn validate(&self) -> Result<(), ResponseDomainError> {
        require_custom_id(&self.custom_id)?;
        let count = self.options.len();
        if count == 0 || count > MAX_SELECT_OPTIONS {
            return Err(ResponseDomainError::SelectOptionCount {
                custom_id: self.custom_id.clone(),
                count,
            });
        }
        if self.min_values > self.max_values || self.max_values > count {
            return Err(ResponseDomainError::InvalidSelectRange {
                custom_id: self.custom_id.clone(),
                min: self.min_values,
                max: self.max_values,
            });
        }
        Ok(())
    }
}

/// An interactive component placed in an action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// A button.
    Button(Button),
    /// A select menu.
    SelectMenu(SelectMenu),
}

/// A horizontal row of components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRow {
    /// Components in display order.
    pub components: Vec<Component>,
}

impl ActionRow {
    /// Creates a row of buttons.
    #[must_use]
    pub fn buttons(buttons: impl IntoIterator<Item = Button>) -> Self {
        Self {
            components: buttons.into_iter().map(Component::Button).collect(),
        }
    }

    /// Creates a row holding a single select menu.
    #[must_use]
    pub fn select(menu: SelectMenu) -> Self {
        Self {
            components: vec![Component::SelectMenu(menu)],
        }
    }

    fn validate(&self, row: usize) -> Result<(), ResponseDomainError> {
        let has_select = self
            .components
            .iter()
            .any(|component| matches!(component, Component::SelectMenu(_)));
        if self.components.is_empty() {
            return Err(ResponseDomainError::EmptyActionRow { row });
        }
        if has_select && self.components.len() > 1 {
            return Err(ResponseDomainError::SelectMenuNotAlone { row });
        }
        if self.components.len() > MAX_ROW_BUTTONS {
            return Err(ResponseDomainError::TooManyButtons {
                row,
                count: self.components.len(),
            });
        }
        self.components
            .iter()
            .try_for_each(|component| match component {
                Component::Button(button) => button.validate(),
                Component::SelectMenu(menu) => menu.validate(),
            })
    }
}

/// Text and components of a message-style response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    /// Message text.
    pub content: Option<String>,
    /// Whether only the invoking user can see the message.
    pub ephemeral: bool,
    /// Component rows.
    pub components: Vec<ActionRow>,
}

impl MessageContent {
    /// Creates a text message.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: false,
            components: Vec::new(),
        }
    }

    /// Marks the message as visible only to the invoking user.
    #[must_use]
    pub const fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    /// Appends a component row.
    #[must_use]
    pub fn with_row(mut self, row: ActionRow) -> Self {
        self.components.push(row);
        self
    }

    /// Checks the message against platform limits.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDomainError`] describing the first violated limit.
    pub fn validate(&self) -> Result<(), ResponseDomainError> {
        let text = self.content.as_deref().unwrap_or_default();
        if text.trim().is_empty() && self.components.is_empty() {
            return Err(ResponseDomainError::EmptyMessage);
        }
        let length = text.chars().count();
        if length > MAX_CONTENT_LENGTH {
            return Err(ResponseDomainError::ContentTooLong { length });
        }
        if self.components.len() > MAX_ACTION_ROWS {
            return Err(ResponseDomainError::TooManyActionRows {
                count: self.components.len(),
            });
        }
        self.components
            .iter()
            .enumerate()
            .try_for_each(|(row, action_row)| action_row.validate(row))
    }
}

/// One suggestion returned for an autocomplete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteChoice {
    /// Text shown to the user.
    pub name: String,
    /// Value submitted when chosen.
    pub value: Value,
}

impl AutocompleteChoice {
    /// Creates a choice.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The single initial response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum InitialResponse {
    /// Replies with a new message.
    Message(MessageContent),
    /// Edits the message the activated component is attached to.
    UpdateMessage(MessageContent),
    /// Returns suggestions for an autocomplete request.
    AutocompleteResult(Vec<AutocompleteChoice>),
}

impl InitialResponse {
    /// Checks the response against platform limits.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDomainError`] describing the first violated limit.
    pub fn validate(&self) -> Result<(), ResponseDomainError> {
        match self {
            Self::Message(content) | Self::UpdateMessage(content) => content.validate(),
            Self::AutocompleteResult(choices) if choices.len() > MAX_AUTOCOMPLETE_CHOICES => {
                Err(ResponseDomainError::TooManyChoices {
                    count: choices.len(),
                })
            }
            Self::AutocompleteResult(_) => Ok(()),
        }
    }
}

/// Acknowledgement sent when the real answer will follow later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeferredAck {
    /// Shows a "thinking" indicator; the answer arrives as a follow-up.
    ChannelMessage {
        /// Whether the eventual answer is ephemeral.
        ephemeral: bool,
    },
    /// Acknowledges a component without a visible change.
    UpdateMessage,
}

impl Default for DeferredAck {
    fn default() -> Self {
        Self::ChannelMessage { ephemeral: false }
    }
}

fn require_custom_id(custom_id: &str) -> Result<(), ResponseDomainError> {
    if custom_id.trim().is_empty() {
        return Err(ResponseDomainError::EmptyCustomId);
    }
    Ok(())
}
