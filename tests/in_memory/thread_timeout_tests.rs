//! In-memory integration tests for archiving quiet game threads.

use std::time::Duration;

use crate::in_memory::helpers::bot;
use crate::test_helpers::{GAME_THRESHOLD, ShowcaseBot, command_event, component_event};
use rstest::rstest;
use switchyard::interaction::domain::ComponentData;
use switchyard::interaction::services::DispatchOutcome;
use switchyard::watchdog::domain::EntityId;

/// Advances the paused clock and lets woken checks run.
async fn advance(duration: Duration) {
    tokio::time::advance(duration).await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn thread(name: &str) -> EntityId {
    EntityId::new(name).expect("valid entity id")
}

async fn ping(bot: &ShowcaseBot, id: &str, channel: &str) -> DispatchOutcome {
    bot.router
        .dispatch(command_event(id, "ping").with_channel(channel))
        .await
}

async fn pong(bot: &ShowcaseBot, id: &str, channel: &str) -> DispatchOutcome {
    bot.router
        .dispatch(component_event(id, ComponentData::button("pong")).with_channel(channel))
        .await
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn quiet_thread_is_archived_after_threshold(bot: ShowcaseBot) {
    assert!(ping(&bot, "ping-1", "thread-1").await.is_handled());

    advance(GAME_THRESHOLD - Duration::from_secs(1)).await;
    assert!(bot.archived().is_empty());

    advance(Duration::from_secs(1)).await;
    assert_eq!(bot.archived(), [thread("thread-1")]);
    assert_eq!(bot.watchdog.tracked_count(), 0);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn activity_postpones_archiving(bot: ShowcaseBot) {
    ping(&bot, "ping-2", "thread-2").await;
    advance(Duration::from_secs(7)).await;
    assert!(pong(&bot, "pong-2", "thread-2").await.is_handled());

    advance(Duration::from_secs(7)).await;
    assert!(bot.archived().is_empty(), "pong should keep the thread alive");

    advance(Duration::from_secs(3)).await;
    assert_eq!(bot.archived(), [thread("thread-2")]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn threads_time_out_independently(bot: ShowcaseBot) {
    ping(&bot, "ping-3", "thread-a").await;
    advance(Duration::from_secs(5)).await;
    ping(&bot, "ping-4", "thread-b").await;

    advance(Duration::from_secs(5)).await;
    assert_eq!(bot.archived(), [thread("thread-a")]);

    advance(Duration::from_secs(5)).await;
    assert_eq!(bot.archived(), [thread("thread-a"), thread("thread-b")]);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn closed_thread_is_never_archived(bot: ShowcaseBot) {
    ping(&bot, "ping-5", "thread-5").await;
    assert!(bot.watchdog.close(&thread("thread-5")));

    advance(GAME_THRESHOLD * 2).await;
    assert!(bot.archived().is_empty());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn ping_outside_a_channel_faults(bot: ShowcaseBot) {
    let outcome = bot.router.dispatch(command_event("ping-6", "ping")).await;

    assert!(matches!(outcome, DispatchOutcome::Faulted(_)));
    assert_eq!(bot.watchdog.tracked_count(), 0);
}
