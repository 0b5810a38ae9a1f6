//! Shared world state for interaction flow BDD scenarios.

use rstest::fixture;
use switchyard::interaction::services::DispatchOutcome;

use crate::test_helpers::ShowcaseBot;

/// Scenario world for interaction flow behaviour tests.
pub struct FlowWorld {
    pub bot: ShowcaseBot,
    pub last_outcome: Option<DispatchOutcome>,
}

impl FlowWorld {
    /// Creates a world around a fresh bot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bot: ShowcaseBot::new(),
            last_outcome: None,
        }
    }
}

impl Default for FlowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FlowWorld {
    FlowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
