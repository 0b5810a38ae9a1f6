//! Error types for response content validation.

use thiserror::Error;

use super::content::{
    MAX_ACTION_ROWS, MAX_AUTOCOMPLETE_CHOICES, MAX_CONTENT_LENGTH, MAX_ROW_BUTTONS,
    MAX_SELECT_OPTIONS,
};

/// Response content violates a platform limit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResponseDomainError {
    /// The message has neither text nor components.
    #[error("message must have text or components")]
    EmptyMessage,

    /// The message text is too long.
    #[error("message text is {length} characters, limit is {limit}", limit = MAX_CONTENT_LENGTH)]
    ContentTooLong {
        /// Character count of the text.
        length: usize,
    },

    /// Too many action rows.
    #[error("message has {count} action rows, limit is {limit}", limit = MAX_ACTION_ROWS)]
    TooManyActionRows {
        /// Number of rows.
        count: usize,
    },

    /// An action row has no components.
    #[error("action row {row} is empty")]
    EmptyActionRow {
        /// Zero-based row index.
        row: usize,
    },

    /// A select menu shares its row with other components.
    #[error("select menu in action row {row} must be the only component")]
    SelectMenuNotAlone {
        /// Zero-based row index.
        row: usize,
    },

    /// Too many buttons in a row.
    #[error("action row {row} has {count} buttons, limit is {limit}", limit = MAX_ROW_BUTTONS)]
    TooManyButtons {
        /// Zero-based row index.
        row: usize,
        /// Number of buttons.
        count: usize,
    },

    /// A link button lacks a URL, or a non-link button has one.
    #[error("button '{label}' must use a URL exactly when styled as a link")]
    LinkButtonMismatch {
        /// Button label.
        label: String,
    },

    /// A component custom identifier is empty.
    #[error("component custom identifier must not be empty")]
    EmptyCustomId,

    /// A select menu has no options or too many.
    #[error("select menu '{custom_id}' has {count} options, expected 1 to {limit}", limit = MAX_SELECT_OPTIONS)]
    SelectOptionCount {
        /// Select menu custom identifier.
        custom_id: String,
        /// Number of options.
        count: usize,
    },

    /// The selection range is inconsistent with the options.
    #[error("select menu '{custom_id}' has invalid selection range {min}..={max}")]
    InvalidSelectRange {
        /// Select menu custom identifier.
        custom_id: String,
        /// Minimum selections.
        min: usize,
        /// Maximum selections.
        max: usize,
    },

    /// Too many autocomplete choices.
    #[error("autocomplete result has {count} choices, limit is {limit}", limit = MAX_AUTOCOMPLETE_CHOICES)]
    TooManyChoices {
        /// Number of choices.
        count: usize,
    },
}
