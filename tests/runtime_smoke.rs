//! End-to-end runtime smoke test (headless)
//!
//! Tests cover:
//! - Application initialization without panicking
//! - Headless mode operation with `NEWSDESK_TEST_HEADLESS=1`
//! - Task cancellation handling

use std::time::Duration;

use newsdesk::sources::NewsSource;
use newsdesk::theme::Settings;

#[tokio::test]
/// What: Test end-to-end runtime initialization and execution in headless mode.
///
/// Inputs:
/// - `NEWSDESK_TEST_HEADLESS=1` environment variable to bypass raw TTY setup/restore.
/// - A file news source so no network access happens.
///
/// Output:
/// - Application initializes without panicking.
/// - Task either completes successfully or can be cleanly cancelled.
///
/// Details:
/// - Starts `newsdesk::app::run` in the background and waits briefly (100ms) to let
///   the first fetch complete.
/// - If still running, aborts the task and verifies clean cancellation.
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var(newsdesk::app::HEADLESS_ENV, "1");
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("news.json");
    std::fs::write(
        &path,
        concat!(
            r#"{"response":{"status":"ok","results":[{"sectionName":"Sport","webTitle":"A","#,
            r#""webPublicationDate":"2020-05-01T14:30:00Z","webUrl":"https://example.com/a"}]}}"#,
        ),
    )
    .expect("write fixture");

    let handle = tokio::spawn(async move {
        newsdesk::app::run(Settings::default(), NewsSource::File(path)).await
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => {
                panic!("app::run task panicked: {join_err}");
            }
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
