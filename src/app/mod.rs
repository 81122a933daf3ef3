//! newsdesk application runtime: terminal handling, background workers, and the
//! event loop.

/// Channels, fetch worker, timers, and the input thread.
mod background;
/// Event loop.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use background::FetchMessage;
pub use runtime::{HEADLESS_ENV, handle_fetch_message, run};
