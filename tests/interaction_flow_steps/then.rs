//! Then steps for interaction flow BDD scenarios.

use super::world::FlowWorld;
use crate::test_helpers::{interaction_id, message_text};
use rstest_bdd_macros::then;
use switchyard::interaction::services::DispatchOutcome;
use switchyard::response::services::ResponseLifecycleError;

fn last_outcome(world: &FlowWorld) -> Result<&DispatchOutcome, eyre::Report> {
    world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing dispatch outcome in scenario world"))
}

#[then("the interaction is handled")]
fn interaction_handled(world: &FlowWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if !outcome.is_handled() {
        return Err(eyre::eyre!("expected a handled interaction, found {outcome:?}"));
    }
    Ok(())
}

#[then("the interaction is ignored")]
fn interaction_ignored(world: &FlowWorld) -> Result<(), eyre::Report> {
    match last_outcome(world)? {
        DispatchOutcome::Unrouted(_) => Ok(()),
        other => Err(eyre::eyre!("expected an unrouted interaction, found {other:?}")),
    }
}

#[then(r#"the outbound send count for interaction "{id}" is {count:usize}"#)]
fn outbound_send_count(world: &FlowWorld, id: String, count: usize) -> Result<(), eyre::Report> {
    let sent = world.bot.channel.sent_for(&interaction_id(&id));
    if sent.len() != count {
        return Err(eyre::eyre!(
            "expected {count} sends for {id}, found {}: {sent:?}",
            sent.len()
        ));
    }
    Ok(())
}

#[then(r#"the handler was told interaction "{id}" was already answered"#)]
fn handler_told_already_answered(world: &FlowWorld, id: String) -> Result<(), eyre::Report> {
    let expected = interaction_id(&id);
    let rejected = world.bot.rejections().iter().any(|err| {
        matches!(err, ResponseLifecycleError::AlreadyResponded(rejected) if *rejected == expected)
    });
    if !rejected {
        return Err(eyre::eyre!(
            "expected an already-responded rejection for {id}"
        ));
    }
    Ok(())
}

#[then(r#"the first response to interaction "{id}" reads "{text}""#)]
fn first_response_reads(world: &FlowWorld, id: String, text: String) -> Result<(), eyre::Report> {
    let sent = world.bot.channel.sent_for(&interaction_id(&id));
    let first = sent.first().and_then(message_text);
    if first != Some(text.as_str()) {
        return Err(eyre::eyre!("expected first response {text:?}, found {first:?}"));
    }
    Ok(())
}
