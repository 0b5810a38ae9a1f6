//! Given steps for interaction flow BDD scenarios.

use super::world::FlowWorld;
use crate::test_helpers::ShowcaseBot;
use rstest_bdd_macros::given;

#[given("a showcase bot")]
fn showcase_bot(world: &mut FlowWorld) {
    world.bot = ShowcaseBot::new();
    world.last_outcome = None;
}
