//! In-memory integration tests for autocomplete suggestions.

use crate::in_memory::helpers::bot;
use crate::test_helpers::{LANGUAGES, ShowcaseBot, interaction_id, message_text};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;
use switchyard::interaction::domain::{CommandData, CommandOption, InteractionEvent};
use switchyard::interaction::services::DispatchOutcome;
use switchyard::response::adapters::memory::SentResponse;
use switchyard::response::domain::{InitialResponse, ResponseState};

fn typing(id: &str, partial: &str) -> InteractionEvent {
    let data = CommandData::new("multi")
        .with_option(CommandOption::new("language").with_value(partial).focused());
    InteractionEvent::autocomplete(interaction_id(id), data, &DefaultClock)
}

fn suggestions(bot: &ShowcaseBot, id: &str) -> Vec<String> {
    let sent = bot.channel.sent_for(&interaction_id(id));
    match sent.as_slice() {
        [
            SentResponse::Initial {
                response: InitialResponse::AutocompleteResult(choices),
                ..
            },
        ] => choices.iter().map(|choice| choice.name.clone()).collect(),
        other => panic!("expected one autocomplete result, got {other:?}"),
    }
}

#[rstest]
#[case::prefix("ty", &["typescript"])]
#[case::shared_prefix("j", &["javascript"])]
#[case::upper_case("RU", &["rust"])]
#[case::no_match("cobol", &[])]
#[tokio::test(flavor = "multi_thread")]
async fn suggestions_follow_the_focused_value(
    bot: ShowcaseBot,
    #[case] partial: &str,
    #[case] expected: &[&str],
) {
    let outcome = bot.router.dispatch(typing("typing-1", partial)).await;

    assert!(outcome.is_handled(), "unexpected outcome: {outcome:?}");
    assert_eq!(suggestions(&bot, "typing-1"), expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_input_suggests_every_language(bot: ShowcaseBot) {
    bot.router.dispatch(typing("typing-2", "")).await;

    assert_eq!(suggestions(&bot, "typing-2"), LANGUAGES);
    assert_eq!(
        bot.lifecycle.state(&interaction_id("typing-2")),
        ResponseState::Acknowledged
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invocation_of_the_same_command_gets_a_message(bot: ShowcaseBot) {
    let data = CommandData::new("multi")
        .with_option(CommandOption::new("language").with_value("rust"));
    let event = InteractionEvent::command(interaction_id("pick-1"), data, &DefaultClock);

    let outcome = bot.router.dispatch(event).await;

    assert!(outcome.is_handled(), "unexpected outcome: {outcome:?}");
    let sent = bot.channel.sent_for(&interaction_id("pick-1"));
    assert_eq!(sent.first().and_then(message_text), Some("You picked rust."));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn autocomplete_without_focus_is_dropped(bot: ShowcaseBot) {
    let data = CommandData::new("multi")
        .with_option(CommandOption::new("language").with_value(json!("ru")));
    let event = InteractionEvent::autocomplete(interaction_id("typing-3"), data, &DefaultClock);

    let outcome = bot.router.dispatch(event).await;

    assert!(matches!(outcome, DispatchOutcome::Malformed(_)));
    assert!(bot.channel.sent().is_empty());
}
