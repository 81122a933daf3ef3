//! newsdesk binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use newsdesk::{app, args, theme, util};

struct NewsdeskTimer;

impl tracing_subscriber::fmt::time::FormatTime for NewsdeskTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to `<config>/logs/newsdesk.log`, falling back to stderr.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset.
fn init_logging(level: &str) {
    let mut log_path = theme::logs_dir();
    log_path.push("newsdesk.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NewsdeskTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(NewsdeskTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let settings = cli.apply_to(theme::settings());
    let source = cli.news_source(&settings);
    tracing::info!(source = %source.describe(), list = cli.list, "newsdesk starting");

    if cli.list {
        match args::list::handle_list(&settings, &source, !cli.no_color).await {
            Ok(count) => tracing::info!(count, "listed news"),
            Err(e) => {
                eprintln!("newsdesk: failed to fetch news: {e}");
                tracing::error!(error = %e, "failed to fetch news");
                std::process::exit(1);
            }
        }
        return;
    }

    let code = exit_code(&app::run(settings, source).await);
    tracing::info!(code, "newsdesk exited");
    if code != 0 {
        std::process::exit(code);
    }
}

/// What: Map the TUI result to a process exit status, reporting any error.
///
/// Inputs:
/// - `result`: Outcome of `app::run`.
///
/// Output:
/// - `0` on success; `1` after printing the error to stderr and the log.
fn exit_code<E: fmt::Debug + fmt::Display>(result: &Result<(), E>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("newsdesk: {err}");
            tracing::error!(error = ?err, "application error");
            1
        }
    }
}
