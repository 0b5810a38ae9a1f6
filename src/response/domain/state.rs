//! Response lifecycle state.

use serde::{Deserialize, Serialize};

/// Acknowledgement state of one interaction.
///
/// Exactly one transition out of [`ResponseState::Unacknowledged`] is
/// permitted. Follow-ups never change the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseState {
    /// Nothing has been sent yet.
    #[default]
    Unacknowledged,
    /// An initial response was sent.
    Acknowledged,
    /// A deferred acknowledgement was sent; the answer follows later.
    Deferred,
}

impl ResponseState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unacknowledged => "unacknowledged",
            Self::Acknowledged => "acknowledged",
            Self::Deferred => "deferred",
        }
    }

    /// Returns `true` when follow-up messages may be sent.
    #[must_use]
    pub const fn accepts_followups(self) -> bool {
        matches!(self, Self::Acknowledged | Self::Deferred)
    }
}
