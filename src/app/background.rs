//! Background workers: fetch worker, timers, and the terminal input thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::{
    sync::mpsc,
    time::{Duration, MissedTickBehavior, interval},
};

use crate::sources::{self, NewsSource};
use crate::state::NewsItem;

/// Messages sent from the fetch worker to the event loop.
#[derive(Debug)]
pub enum FetchMessage {
    /// A fetch started.
    Started,
    /// A fetch finished with items or an error message.
    Finished(Result<Vec<NewsItem>, String>),
}

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the senders and receivers used between the main event loop and the
///   input thread, the fetch worker, and the timers.
pub struct Channels {
    /// Terminal input events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of `event_tx`, drained by the event loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Refresh requests for the fetch worker.
    pub refresh_tx: mpsc::UnboundedSender<()>,
    /// Fetch progress and results.
    pub fetch_rx: mpsc::UnboundedReceiver<FetchMessage>,
    /// Redraw ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving end of `tick_tx`, drained by the event loop.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and spawn the fetch worker.
    ///
    /// Inputs:
    /// - `source`: News source the worker fetches from.
    ///
    /// Output:
    /// - `Channels` with all senders and receivers initialized.
    pub fn new(source: NewsSource) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (refresh_tx, refresh_rx) = mpsc::unbounded_channel::<()>();
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel::<FetchMessage>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        spawn_fetch_worker(source, refresh_rx, fetch_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            refresh_tx,
            fetch_rx,
            tick_tx,
            tick_rx,
        }
    }
}

/// What: Spawn the worker that performs one fetch per refresh request.
///
/// Inputs:
/// - `source`: Where to fetch from.
/// - `refresh_rx`: Refresh requests.
/// - `fetch_tx`: Progress and results for the event loop.
///
/// Details:
/// - Requests that pile up while a fetch runs are coalesced into the next fetch.
/// - Exits when either channel closes.
fn spawn_fetch_worker(
    source: NewsSource,
    mut refresh_rx: mpsc::UnboundedReceiver<()>,
    fetch_tx: mpsc::UnboundedSender<FetchMessage>,
) {
    tokio::spawn(async move {
        while refresh_rx.recv().await.is_some() {
            while refresh_rx.try_recv().is_ok() {}
            if fetch_tx.send(FetchMessage::Started).is_err() {
                break;
            }
            let res = sources::fetch_news(&source).await.map_err(|e| {
                tracing::warn!(error = %e, "news fetch failed");
                e.to_string()
            });
            if fetch_tx.send(FetchMessage::Finished(res)).is_err() {
                break;
            }
        }
        tracing::debug!("fetch worker stopped");
    });
}

/// What: Spawn the periodic refresh and redraw timers.
///
/// Inputs:
/// - `refresh_interval_secs`: Automatic refresh period; 0 disables it.
/// - `refresh_tx`: Where refresh requests go.
/// - `tick_tx`: Redraw ticks (once per second).
pub fn spawn_timers(
    refresh_interval_secs: u64,
    refresh_tx: mpsc::UnboundedSender<()>,
    tick_tx: mpsc::UnboundedSender<()>,
) {
    if refresh_interval_secs > 0 {
        tokio::spawn(async move {
            let mut every = interval(Duration::from_secs(refresh_interval_secs));
            every.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick fires immediately; startup already requested a fetch.
            every.tick().await;
            loop {
                every.tick().await;
                tracing::debug!("automatic refresh");
                if refresh_tx.send(()).is_err() {
                    break;
                }
            }
        });
    }
    tokio::spawn(async move {
        let mut every = interval(Duration::from_secs(1));
        loop {
            every.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the OS thread that forwards terminal input events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned.
/// - `event_tx`: Channel for input events.
/// - `cancelled`: Flag checked between 50ms polls; set on exit.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// What: The fetch worker reports start and result for a refresh request.
    ///
    /// Inputs:
    /// - File source pointing at a missing file.
    ///
    /// Output:
    /// - `Started` followed by `Finished(Err(_))`.
    async fn worker_reports_start_and_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let channels = Channels::new(NewsSource::File(dir.path().join("missing.json")));
        let mut fetch_rx = channels.fetch_rx;
        channels.refresh_tx.send(()).expect("send refresh");
        assert!(matches!(fetch_rx.recv().await, Some(FetchMessage::Started)));
        assert!(matches!(
            fetch_rx.recv().await,
            Some(FetchMessage::Finished(Err(_)))
        ));
    }

    #[test]
    fn headless_event_thread_is_not_spawned() {
        let (tx, _rx) = mpsc::unbounded_channel();
        spawn_event_thread(true, tx, Arc::new(AtomicBool::new(false)));
    }
}
