//! Theme palette, user settings, and config/log paths for newsdesk.

/// Default settings file content.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{load_settings_from, parse_settings, settings};
pub use types::{DEFAULT_API_KEY, DEFAULT_API_URL, MAX_PAGE_SIZE, OrderBy, Settings, Theme};

/// Return the application's theme palette.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}
