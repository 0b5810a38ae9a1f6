//! Domain model for interaction responses.
//!
//! Response content types mirror what the platform accepts and validate
//! themselves against its limits before anything is sent.

mod content;
mod error;
mod state;

pub use content::{
    ActionRow, AutocompleteChoice, Button, ButtonAction, ButtonStyle, Component, DeferredAck,
    InitialResponse, MAX_ACTION_ROWS, MAX_AUTOCOMPLETE_CHOICES, MAX_CONTENT_LENGTH,
    MAX_ROW_BUTTONS, MAX_SELECT_OPTIONS, MessageContent, SelectMenu, SelectOption,
};
pub use error::ResponseDomainError;
pub use state::ResponseState;
