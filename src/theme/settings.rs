use std::fs;
use std::path::Path;

use super::config::SKELETON_SETTINGS_CONTENT;
use super::parsing::{normalize_key, parse_color_value, strip_inline_comment};
use super::paths::settings_path;
use super::types::{MAX_PAGE_SIZE, OrderBy, Settings};
use crate::row::{ClockStyle, DateStyle, Section};

/// What: Load user settings from `settings.conf`, writing a skeleton on first run.
///
/// Inputs: none
///
/// Output:
/// - Parsed settings; `Settings::default()` when the file is missing or unreadable.
pub fn settings() -> Settings {
    let path = settings_path();
    if !path.exists() {
        match fs::write(&path, SKELETON_SETTINGS_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to write settings skeleton"
                );
            }
        }
    }
    load_settings_from(&path)
}

/// What: Load settings from an explicit file path.
///
/// Inputs:
/// - `path`: Settings file to read.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "settings not readable; using defaults"
            );
            Settings::default()
        }
    }
}

/// What: Parse `settings.conf` content.
///
/// Inputs:
/// - `content`: Full file text.
///
/// Output:
/// - Settings with recognized keys applied over the defaults.
///
/// Details:
/// - Blank lines, `#`/`//` comments, lines without `=`, unknown keys, and invalid values
///   are ignored (invalid values are logged at warn level).
/// - `page_size` is clamped to `1..=50`.
/// - Empty `query`/`section` values clear the filter.
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = normalize_key(raw_key);
        let val = strip_inline_comment(val_raw);
        if !apply_setting(&mut out, &key, val) {
            tracing::warn!(line = idx + 1, key = %key, value = %val, "ignoring invalid setting");
        }
    }
    out
}

/// What: Apply one `key = value` pair.
///
/// Output:
/// - `false` when the value could not be parsed for a known key; `true` otherwise
///   (unknown keys are accepted and ignored).
fn apply_setting(out: &mut Settings, key: &str, val: &str) -> bool {
    match key {
        "api_url" | "url" => {
            if val.is_empty() {
                return false;
            }
            out.api_url = val.to_string();
        }
        "api_key" | "key" => out.api_key = val.to_string(),
        "query" | "q" => out.query = non_empty(val),
        "section" => out.section = non_empty(val),
        "page_size" => match val.parse::<u16>() {
            Ok(v) => out.page_size = v.clamp(1, MAX_PAGE_SIZE),
            Err(_) => return false,
        },
        "order_by" | "order" => match OrderBy::from_config_key(val) {
            Some(o) => out.order_by = o,
            None => return false,
        },
        "refresh_interval_secs" | "refresh_interval" => match val.parse::<u64>() {
            Ok(v) => out.refresh_interval_secs = v,
            Err(_) => return false,
        },
        "date_style" | "date_format" => match DateStyle::from_config_key(val) {
            Some(s) => out.display.date = s,
            None => return false,
        },
        "clock" | "time_format" => match ClockStyle::from_config_key(val) {
            Some(s) => out.display.clock = s,
            None => return false,
        },
        "unknown_date_label" => out.unknown_date_label = val.to_string(),
        "color_default" | "color_fallback" => match parse_color_value(val) {
            Some(c) => out.palette.set_fallback(c),
            None => return false,
        },
        _ => {
            if let Some(slug) = key.strip_prefix("color_")
                && let Some(section) = Section::from_config_slug(slug)
            {
                match parse_color_value(val) {
                    Some(c) => out.palette.set_section_color(section, c),
                    None => return false,
                }
            }
        }
    }
    true
}

/// `Some(value)` unless the value is empty.
fn non_empty(val: &str) -> Option<String> {
    (!val.is_empty()).then(|| val.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::SectionPalette;
    use ratatui::style::Color;

    #[test]
    /// What: The written skeleton parses back to the defaults.
    ///
    /// Inputs:
    /// - `SKELETON_SETTINGS_CONTENT`.
    ///
    /// Output:
    /// - Equal to `Settings::default()`.
    fn skeleton_matches_defaults() {
        assert_eq!(parse_settings(SKELETON_SETTINGS_CONTENT), Settings::default());
    }

    #[test]
    fn recognized_keys_apply() {
        let s = parse_settings(
            "api-key = secret\n\
             Query = climate # topic\n\
             section = sport\n\
             page_size = 35\n\
             order_by = relevance\n\
             refresh_interval_secs = 300\n\
             date_style = short\n\
             clock = 12h\n\
             unknown_date_label = n/a\n",
        );
        assert_eq!(s.api_key, "secret");
        assert_eq!(s.query.as_deref(), Some("climate"));
        assert_eq!(s.section.as_deref(), Some("sport"));
        assert_eq!(s.page_size, 35);
        assert_eq!(s.order_by, OrderBy::Relevance);
        assert_eq!(s.refresh_interval_secs, 300);
        assert_eq!(s.display.date, DateStyle::Short);
        assert_eq!(s.display.clock, ClockStyle::TwelveHour);
        assert_eq!(s.unknown_date_label, "n/a");
    }

    #[test]
    /// What: Invalid values, unknown keys, and comments leave defaults untouched.
    ///
    /// Inputs:
    /// - Bad numbers, unknown styles, a stray line without `=`, comment lines.
    ///
    /// Output:
    /// - Defaults preserved; page size clamped at the bounds.
    fn invalid_values_are_ignored_and_page_size_clamped() {
        let s = parse_settings(
            "# comment\n// other comment\nnot a setting\n\
             page_size = lots\norder_by = random\nclock = 25h\nmystery = 1\n",
        );
        assert_eq!(s, Settings::default());
        assert_eq!(parse_settings("page_size = 0").page_size, 1);
        assert_eq!(parse_settings("page_size = 500").page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn section_colors_override_palette() {
        let s = parse_settings(
            "color_politics = #010203\n\
             color_life_and_style = 4,5,6\n\
             color_default = #ffffff\n\
             color_weather = #000000\n",
        );
        assert_eq!(s.palette.color_for("Politics"), Color::Rgb(1, 2, 3));
        assert_eq!(s.palette.color_for("Life and style"), Color::Rgb(4, 5, 6));
        assert_eq!(s.palette.color_for("Weather"), Color::Rgb(255, 255, 255));
        assert_eq!(
            s.palette.color_for("Sport"),
            SectionPalette::default().color_for("Sport")
        );
    }

    #[test]
    fn empty_query_clears_filter() {
        let s = parse_settings("query = climate\nquery =\n");
        assert_eq!(s.query, None);
    }

    #[test]
    fn load_from_file_and_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "page_size = 7\n").expect("write settings");
        assert_eq!(load_settings_from(&path).page_size, 7);
        assert_eq!(
            load_settings_from(&dir.path().join("missing.conf")),
            Settings::default()
        );
    }
}
