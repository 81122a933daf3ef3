use std::env;
use std::path::{Path, PathBuf};

/// Name of the per-user configuration directory.
const APP_DIR: &str = "newsdesk";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/newsdesk`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    let dir = Path::new(&home).join(".config").join(APP_DIR);
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// XDG config directory for newsdesk (ensured to exist).
///
/// Prefers `$XDG_CONFIG_HOME/newsdesk`, then `$HOME/.config/newsdesk`.
pub fn config_dir() -> PathBuf {
    let xdg_set = env::var("XDG_CONFIG_HOME").is_ok_and(|v| !v.trim().is_empty());
    if !xdg_set && let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Location of `settings.conf` inside the config directory.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}
