//! Application services for interaction routing.

mod router;

pub use router::{DispatchOutcome, HandlerFault, InteractionRouter};
