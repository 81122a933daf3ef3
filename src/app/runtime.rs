use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::sources::NewsSource;
use crate::state::{AppState, LoadStatus};
use crate::theme::Settings;
use crate::ui::ui;

use super::background::{Channels, FetchMessage, spawn_event_thread, spawn_timers};
use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that skips terminal setup (used by tests).
pub const HEADLESS_ENV: &str = "NEWSDESK_TEST_HEADLESS";

/// What: Apply a fetch worker message to the application state.
///
/// Inputs:
/// - `app`: Application state.
/// - `msg`: Progress or result from the fetch worker.
pub fn handle_fetch_message(app: &mut AppState, msg: FetchMessage) {
    match msg {
        FetchMessage::Started => app.status = LoadStatus::Loading,
        FetchMessage::Finished(Ok(items)) => {
            tracing::info!(count = items.len(), "news list updated");
            app.apply_news(items);
        }
        FetchMessage::Finished(Err(msg)) => {
            tracing::error!(error = %msg, "failed to refresh news");
            app.apply_error(msg);
        }
    }
}

/// What: Run the newsdesk TUI end-to-end: set up the terminal, spawn the input thread,
/// fetch worker, and timers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `settings`: Effective settings (file values with CLI overrides applied).
/// - `source`: Where news comes from.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - With `NEWSDESK_TEST_HEADLESS=1` no terminal is touched and nothing is drawn.
/// - A first fetch is requested immediately.
pub async fn run(settings: Settings, source: NewsSource) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let result = run_loop(&settings, source, headless).await;
    if !headless && let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    result
}

/// Event loop body; terminal setup/restore is handled by [`run`].
async fn run_loop(settings: &Settings, source: NewsSource, headless: bool) -> Result<()> {
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::new(settings);
    app.source_label = source.describe();

    let mut channels = Channels::new(source);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_timers(
        settings.refresh_interval_secs,
        channels.refresh_tx.clone(),
        channels.tick_tx.clone(),
    );
    let _ = channels.refresh_tx.send(());

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            tracing::warn!(error = %e, "draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.refresh_tx) {
                    break;
                }
            }
            Some(msg) = channels.fetch_rx.recv() => {
                handle_fetch_message(&mut app, msg);
            }
            Some(()) = channels.tick_rx.recv() => {}
            else => break,
        }
    }

    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NewsItem;

    #[test]
    /// What: Fetch messages drive the load status and item list.
    ///
    /// Inputs:
    /// - `Started`, then `Finished(Ok)`, then `Finished(Err)`.
    ///
    /// Output:
    /// - Status goes Loading -> Loaded -> Failed; items survive the failure.
    fn fetch_messages_update_state() {
        let mut app = AppState::default();
        handle_fetch_message(&mut app, FetchMessage::Started);
        assert_eq!(app.status, LoadStatus::Loading);

        let item = NewsItem::new("Sport", "A", "2020-05-01T14:30:00Z", None, "u")
            .expect("valid item");
        handle_fetch_message(&mut app, FetchMessage::Finished(Ok(vec![item])));
        assert!(matches!(app.status, LoadStatus::Loaded(_)));
        assert_eq!(app.rows.len(), 1);

        handle_fetch_message(&mut app, FetchMessage::Finished(Err("timeout".into())));
        assert_eq!(app.status, LoadStatus::Failed("timeout".into()));
        assert_eq!(app.rows.len(), 1);
    }
}
