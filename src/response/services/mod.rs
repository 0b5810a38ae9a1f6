//! Response lifecycle services.

mod lifecycle;

pub use lifecycle::{ResponseLifecycleError, ResponseLifecycleResult, ResponseLifecycleService};
