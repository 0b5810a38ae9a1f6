//! Receipt returned for each recorded touch.

use chrono::{DateTime, Utc};

use super::{EntityId, TouchToken};

/// Describes the check scheduled by one touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchReceipt {
    entity: EntityId,
    token: TouchToken,
    touched_at: DateTime<Utc>,
    deadline: DateTime<Utc>,
}

impl TouchReceipt {
    /// Creates a receipt.
    #[must_use]
    pub const fn new(
        entity: EntityId,
        token: TouchToken,
        touched_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            entity,
            token,
            touched_at,
            deadline,
        }
    }

    /// Returns the touched entity.
    #[must_use]
    pub const fn entity(&self) -> &EntityId {
        &self.entity
    }

    /// Returns the supersession token of the touch.
    #[must_use]
    pub const fn token(&self) -> TouchToken {
        self.token
    }

    /// Returns when the touch was recorded.
    #[must_use]
    pub const fn touched_at(&self) -> DateTime<Utc> {
        self.touched_at
    }

    /// Returns when the timeout fires unless superseded.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }
}
