mod common;

use std::sync::Arc;

use common::{run_until, FakeSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hnfeed::{
    core::{msg::feed::FeedMsg, pager::Sentinel},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event},
    },
    integration::app_runner::AppRunner,
};
use pretty_assertions::assert_eq;

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn runner(events: Vec<Event>, source: FakeSource) -> color_eyre::Result<AppRunner<TestTui>> {
    let config = Config::embedded()?;
    let tui = TestTui::with_events(60, 20, events)?;
    Ok(AppRunner::new(config, Arc::new(source), tui))
}

#[tokio::test]
async fn test_quit_key_ends_session() -> color_eyre::Result<()> {
    let mut runner = runner(vec![Event::Init, Event::Render, key('q')], FakeSource::default())?;

    runner.run().await?;

    assert!(runner.runtime().state().system.should_quit);
    assert!(!runner.tui().is_entered());
    assert_eq!(runner.tui().draw_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_closed_event_stream_ends_session() -> color_eyre::Result<()> {
    let mut runner = runner(vec![Event::Tick], FakeSource::default())?;

    runner.run().await?;

    assert!(runner.runtime().state().system.should_quit);
    Ok(())
}

#[test]
fn test_render_shows_heading_and_placeholders() -> color_eyre::Result<()> {
    let mut runner = runner(vec![], FakeSource::default())?;

    runner.render()?;

    let lines = runner.tui().screen_lines();
    assert!(lines[0].starts_with("Top stories"), "{lines:?}");
    assert!(lines[2].starts_with("  1. ░"), "{lines:?}");
    Ok(())
}

#[test]
fn test_render_list_error() -> color_eyre::Result<()> {
    let mut runner = runner(vec![], FakeSource::default())?;
    runner
        .runtime_mut()
        .send_msg(FeedMsg::ItemListError("network down".to_string()).into());
    runner.runtime_mut().process_turn();

    runner.render()?;

    let text = runner.tui().screen_text();
    assert!(text.contains("network down"), "{text}");
    assert_eq!(runner.pager().observing(), None);
    Ok(())
}

#[tokio::test]
async fn test_render_loaded_stories() -> color_eyre::Result<()> {
    let mut runner = runner(vec![], FakeSource::with_stories(10))?;
    runner.runtime_mut().start();
    run_until(runner.runtime_mut(), |state| state.feed.merged_count() == 10).await;

    runner.render()?;

    let text = runner.tui().screen_text();
    assert!(text.contains("  1. Story number 1"), "{text}");
    assert!(text.contains("user1 | "), "{text}");
    assert!(text.contains("example.com"), "{text}");
    Ok(())
}

#[tokio::test]
async fn test_sentinel_on_screen_requests_next_page() -> color_eyre::Result<()> {
    let mut config = Config::embedded()?;
    config.feed.items_per_page = 3;
    let tui = TestTui::new(60, 20)?;
    let mut runner = AppRunner::new(config, Arc::new(FakeSource::with_stories(10)), tui);
    runner.runtime_mut().start();
    run_until(runner.runtime_mut(), |state| state.feed.merged_count() == 3).await;

    // 3 rows of 3 lines leave room for the sentinel on the first frame
    runner.render()?;
    assert_eq!(runner.pager().observing(), Some(Sentinel(3)));

    runner.runtime_mut().process_turn();
    assert_eq!(runner.runtime().state().feed.page, 2);

    // page 2 is in flight, so the pager lets go of the old sentinel
    runner.render()?;
    assert_eq!(runner.pager().observing(), None);
    Ok(())
}
