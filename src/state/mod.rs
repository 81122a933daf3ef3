//! Application state and the value types it holds.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, LoadStatus};
pub use types::{InvalidNewsItem, NewsItem};
