//! Fixtures shared by the in-memory integration tests.

use rstest::fixture;

use crate::test_helpers::ShowcaseBot;

/// Provides a freshly wired showcase bot for each test.
#[fixture]
pub fn bot() -> ShowcaseBot {
    ShowcaseBot::new()
}
