//! Domain model for inbound interactions.
//!
//! Interaction events are immutable values delivered by the transport. The
//! classifier turns an event into a routing key without touching any
//! infrastructure.

mod classify;
mod error;
mod event;
mod ids;

pub use classify::{Classification, FocusedOption, classify};
pub use error::{InteractionDomainError, MalformedEvent};
pub use event::{
    CommandData, CommandOption, ComponentData, ComponentType, ContextTarget, InteractionData,
    InteractionEvent, InteractionKind,
};
pub use ids::{CorrelationId, RouteNamespace, RoutingKey};
