//! When steps for interaction flow BDD scenarios.

use super::world::{FlowWorld, run_async};
use crate::test_helpers::{command_event, component_event};
use rstest_bdd_macros::when;
use switchyard::interaction::domain::ComponentData;

#[when(r#"the "{name}" command is invoked as interaction "{id}""#)]
fn command_invoked(world: &mut FlowWorld, name: String, id: String) {
    let outcome = run_async(world.bot.router.dispatch(command_event(&id, &name)));
    world.last_outcome = Some(outcome);
}

#[when(r#"option "{value}" is chosen from the "{custom_id}" menu as interaction "{id}""#)]
fn option_chosen(world: &mut FlowWorld, value: String, custom_id: String, id: String) {
    let event = component_event(&id, ComponentData::select(custom_id, [value]));
    let outcome = run_async(world.bot.router.dispatch(event));
    world.last_outcome = Some(outcome);
}
