//! In-memory integration tests for command prompts and component answers.

use crate::in_memory::helpers::bot;
use crate::test_helpers::{
    BUTTONS_PROMPT, ShowcaseBot, command_event, component_event, interaction_id, message_text,
};
use rstest::rstest;
use switchyard::interaction::domain::ComponentData;
use switchyard::interaction::services::DispatchOutcome;
use switchyard::response::adapters::memory::SentResponse;
use switchyard::response::domain::{Component, InitialResponse, ResponseState};
use switchyard::response::services::ResponseLifecycleError;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buttons_command_answers_once(bot: ShowcaseBot) {
    let outcome = bot.router.dispatch(command_event("buttons-1", "buttons")).await;

    assert!(outcome.is_handled(), "unexpected outcome: {outcome:?}");
    let id = interaction_id("buttons-1");
    let sent = bot.channel.sent_for(&id);
    assert_eq!(sent.len(), 1, "only the first initial response is sent");
    assert_eq!(sent.first().and_then(message_text), Some(BUTTONS_PROMPT));
    assert_eq!(bot.lifecycle.state(&id), ResponseState::Acknowledged);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_initial_response_is_rejected_with_already_responded(bot: ShowcaseBot) {
    bot.router.dispatch(command_event("buttons-2", "buttons")).await;

    let rejections = bot.rejections();
    assert!(
        matches!(
            rejections.as_slice(),
            [ResponseLifecycleError::AlreadyResponded(id)] if *id == interaction_id("buttons-2")
        ),
        "unexpected rejections: {rejections:?}"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buttons_prompt_offers_yes_no_and_link(bot: ShowcaseBot) {
    bot.router.dispatch(command_event("buttons-3", "buttons")).await;

    let sent = bot.channel.sent_for(&interaction_id("buttons-3"));
    let Some(SentResponse::Initial {
        response: InitialResponse::Message(message),
        ..
    }) = sent.first()
    else {
        panic!("expected an initial message, got {sent:?}");
    };
    let labels: Vec<&str> = message
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            Component::Button(button) => Some(button.label.as_str()),
            Component::SelectMenu(_) => None,
        })
        .collect();
    assert_eq!(labels, ["Yes", "No", "Discord Developers server"]);
    assert!(message.ephemeral);
}

#[rstest]
#[case::yes("fd_yes", "Great!")]
#[case::no("fd_no", "Maybe some of these resources might help you?")]
#[tokio::test(flavor = "multi_thread")]
async fn button_activation_routes_by_custom_id(
    bot: ShowcaseBot,
    #[case] custom_id: &str,
    #[case] expected: &str,
) {
    let outcome = bot
        .router
        .dispatch(component_event("press-1", ComponentData::button(custom_id)))
        .await;

    assert!(outcome.is_handled(), "unexpected outcome: {outcome:?}");
    let sent = bot.channel.sent_for(&interaction_id("press-1"));
    assert_eq!(sent.first().and_then(message_text), Some(expected));
}

#[rstest]
#[case::go("go", "This is the way.")]
#[case::python("py", "It is not the way to go.")]
#[tokio::test(flavor = "multi_thread")]
async fn select_activation_sends_initial_then_two_followups(
    bot: ShowcaseBot,
    #[case] value: &str,
    #[case] verdict: &str,
) {
    let outcome = bot
        .router
        .dispatch(component_event(
            "choice-1",
            ComponentData::select("select", [value]),
        ))
        .await;

    assert!(outcome.is_handled(), "unexpected outcome: {outcome:?}");
    let sent = bot.channel.sent_for(&interaction_id("choice-1"));
    assert_eq!(sent.len(), 3);
    assert!(matches!(sent.first(), Some(SentResponse::Initial { .. })));
    assert_eq!(sent.first().and_then(message_text), Some(verdict));
    assert!(
        sent.iter()
            .skip(1)
            .all(|response| matches!(response, SentResponse::Followup { .. })),
        "expected follow-ups after the initial response: {sent:?}"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn select_command_and_component_share_a_name(bot: ShowcaseBot) {
    let command = bot.router.dispatch(command_event("menu-1", "select")).await;
    let component = bot
        .router
        .dispatch(component_event("menu-2", ComponentData::select("select", ["js"])))
        .await;

    assert!(command.is_handled());
    assert!(component.is_handled());
    assert_eq!(bot.channel.sent_for(&interaction_id("menu-1")).len(), 1);
    assert_eq!(bot.channel.sent_for(&interaction_id("menu-2")).len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregistered_command_sends_nothing(bot: ShowcaseBot) {
    let outcome = bot.router.dispatch(command_event("lost-1", "teleport")).await;

    assert!(matches!(outcome, DispatchOutcome::Unrouted(_)));
    assert!(bot.channel.sent().is_empty());
    assert_eq!(
        bot.lifecycle.state(&interaction_id("lost-1")),
        ResponseState::Unacknowledged
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn select_without_values_faults_and_stays_unacknowledged(bot: ShowcaseBot) {
    let empty: [&str; 0] = [];
    let outcome = bot
        .router
        .dispatch(component_event("empty-1", ComponentData::select("select", empty)))
        .await;

    assert!(matches!(outcome, DispatchOutcome::Faulted(_)));
    assert_eq!(
        bot.lifecycle.state(&interaction_id("empty-1")),
        ResponseState::Unacknowledged
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_interactions_are_answered_independently(bot: ShowcaseBot) {
    let handles: Vec<_> = (0..6)
        .flat_map(|index| {
            [
                command_event(&format!("burst-command-{index}"), "buttons"),
                component_event(
                    &format!("burst-press-{index}"),
                    ComponentData::button("fd_yes"),
                ),
            ]
        })
        .map(|event| bot.router.spawn(event))
        .collect();

    for handle in handles {
        let outcome = handle.await.expect("dispatch task should join");
        assert!(outcome.is_handled(), "unexpected outcome: {outcome:?}");
    }
    assert_eq!(bot.channel.sent().len(), 12);
    assert_eq!(bot.rejections().len(), 6);
}
