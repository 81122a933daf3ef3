//! Command-line `--list` mode: print bound rows to stdout.

use crossterm::style::{Color as CColor, Stylize, style};
use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::row::{RowBinder, RowWidgets};
use crate::sources::{self, NewsSource};
use crate::state::NewsItem;
use crate::theme::Settings;
use crate::ui::rows::{badge_width, date_time_text};

/// Convert a palette color to a terminal color for ANSI output.
const fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        _ => CColor::Reset,
    }
}

/// What: Format bound rows as plain text lines.
///
/// Inputs:
/// - `rows`: Bound rows in display order.
/// - `items`: Items the rows were bound from (for URLs), same order.
/// - `unknown_date_label`: Placeholder for rows without a date.
/// - `color`: Whether to emit ANSI colors for section badges.
///
/// Output:
/// - Three lines per row: badge and title, author and date/time, URL.
///
/// Details:
/// - A hidden author slot is omitted.
#[must_use]
pub fn format_rows(
    rows: &[RowWidgets],
    items: &[NewsItem],
    unknown_date_label: &str,
    color: bool,
) -> Vec<String> {
    let width = badge_width(rows);
    let indent = " ".repeat(width + 3);
    let mut out = Vec::with_capacity(rows.len() * 3);
    for (row, item) in rows.iter().zip(items) {
        let pad = width.saturating_sub(UnicodeWidthStr::width(row.section.as_str()));
        let badge = if color {
            style(format!(" {}{} ", row.section, " ".repeat(pad)))
                .on(to_crossterm(row.section_color))
                .with(CColor::Black)
                .bold()
                .to_string()
        } else {
            format!("[{}]{}", row.section, " ".repeat(pad))
        };
        out.push(format!("{badge} {}", row.title));

        let (when, _) = date_time_text(row, unknown_date_label);
        if row.author_visible {
            out.push(format!("{indent}{}  {when}", row.author));
        } else {
            out.push(format!("{indent}{when}"));
        }
        out.push(format!("{indent}{}", item.url()));
    }
    out
}

/// What: Fetch once, bind, and print the list.
///
/// Inputs:
/// - `settings`: Effective settings (palette, format, placeholder).
/// - `source`: News source.
/// - `color`: Whether to colorize section badges.
///
/// Output:
/// - `Ok(count)` with the number of printed items.
///
/// # Errors
/// - Propagates fetch failures.
pub async fn handle_list(
    settings: &Settings,
    source: &NewsSource,
    color: bool,
) -> sources::Result<usize> {
    tracing::info!(source = %source.describe(), "list mode requested from CLI");
    let items = sources::fetch_news(source).await?;
    let binder = RowBinder::new(settings.palette, settings.display);
    let mut rows = Vec::new();
    binder.bind_all(&items, &mut rows);
    for line in format_rows(&rows, &items, &settings.unknown_date_label, color) {
        println!("{line}");
    }
    Ok(items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(items: &[NewsItem]) -> Vec<RowWidgets> {
        let mut rows = Vec::new();
        RowBinder::default().bind_all(items, &mut rows);
        rows
    }

    #[test]
    /// What: Plain output lists badge, title, author, date/time, and URL.
    ///
    /// Inputs:
    /// - One item with author and valid date, one without author and with a bad date.
    ///
    /// Output:
    /// - Six lines; the second item shows the placeholder and no author.
    fn plain_output_layout() {
        let items = vec![
            NewsItem::new(
                "Sport",
                "Season resumes",
                "2020-05-01T14:30:00Z",
                Some("Jane Doe".into()),
                "https://example.com/a",
            )
            .expect("valid item"),
            NewsItem::new("Books", "Read this", "20200501", None, "https://example.com/b")
                .expect("valid item"),
        ];
        let rows = bound(&items);
        let lines = format_rows(&rows, &items, "unknown date", false);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[Sport] Season resumes");
        assert_eq!(lines[1].trim_start(), "Jane Doe  2020-05-01 14:30:00");
        assert_eq!(lines[2].trim_start(), "https://example.com/a");
        assert_eq!(lines[3], "[Books] Read this");
        assert_eq!(lines[4].trim_start(), "unknown date");
    }

    #[test]
    fn colored_output_contains_escape_codes() {
        let items = vec![
            NewsItem::new("Money", "Rates", "2020-05-01T14:30:00Z", None, "u").expect("valid item"),
        ];
        let rows = bound(&items);
        let lines = format_rows(&rows, &items, "unknown date", true);
        assert!(lines[0].contains('\u{1b}'));
        assert!(lines[0].contains("Rates"));
    }
}
