use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};
use unicode_width::UnicodeWidthStr;

use crate::row::RowWidgets;
use crate::theme::Theme;

/// What: Width of the widest section label among the rows.
///
/// Inputs:
/// - `rows`: Bound rows.
///
/// Output:
/// - Display width in terminal cells (0 for an empty list).
pub fn badge_width(rows: &[RowWidgets]) -> usize {
    rows.iter()
        .map(|r| UnicodeWidthStr::width(r.section.as_str()))
        .max()
        .unwrap_or(0)
}

/// What: Format the date/time part of a row.
///
/// Inputs:
/// - `row`: Bound row.
/// - `unknown_date_label`: Placeholder used when the row has no date.
///
/// Output:
/// - `(text, is_placeholder)`.
pub fn date_time_text(row: &RowWidgets, unknown_date_label: &str) -> (String, bool) {
    match (&row.date, &row.time) {
        (Some(date), Some(time)) => (format!("{date} {time}"), false),
        (Some(date), None) => (date.clone(), false),
        _ => (unknown_date_label.to_string(), true),
    }
}

/// What: Render one bound row as a two-line list item.
///
/// Inputs:
/// - `row`: Bound row (read only).
/// - `badge_width`: Width the section badge is padded to.
/// - `unknown_date_label`: Placeholder for rows without a date.
/// - `th`: Theme colors.
///
/// Output:
/// - `ListItem` with the colored section badge and title on the first line, and
///   author plus date/time on the second.
///
/// Details:
/// - A hidden author slot is omitted entirely rather than shown blank.
/// - The placeholder date is dimmed and italic.
pub fn build_row_item(
    row: &RowWidgets,
    badge_width: usize,
    unknown_date_label: &str,
    th: &Theme,
) -> ListItem<'static> {
    let pad = badge_width.saturating_sub(UnicodeWidthStr::width(row.section.as_str()));
    let badge = format!(" {}{} ", row.section, " ".repeat(pad));
    let first = Line::from(vec![
        Span::styled(
            badge,
            Style::default()
                .bg(row.section_color)
                .fg(th.badge_text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            row.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut second = vec![Span::raw(" ".repeat(badge_width + 3))];
    if row.author_visible {
        second.push(Span::styled(row.author.clone(), Style::default().fg(th.subtext)));
        second.push(Span::raw("  "));
    }
    let (when, placeholder) = date_time_text(row, unknown_date_label);
    let when_style = if placeholder {
        Style::default().fg(th.overlay).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(th.overlay)
    };
    second.push(Span::styled(when, when_style));

    ListItem::new(vec![first, Line::from(second)])
}
