//! Activity watchdog services.

mod watchdog;

pub use watchdog::{ActivityWatchdog, WatchdogError, WatchdogResult};
