//! TUI rendering for newsdesk.
//!
//! `ui()` draws the header, the news list built from the bound row pool, and the
//! status/keybind footer. Rendering only reads `AppState`.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, LoadStatus};
use crate::theme::{Theme, theme};

/// Row rendering helpers.
pub mod rows;

/// Keybinds listed in the footer.
const KEYBINDS: &[(&str, &str)] = &[
    ("↑/↓ j/k", "move"),
    ("PgUp/PgDn", "page"),
    ("Enter/o", "open"),
    ("r", "refresh"),
    ("q", "quit"),
];

/// What: Render one frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; only `list_state` offset is updated by rendering.
///
/// Output:
/// - Draws header, list, and footer into the frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    render_header(f, app, chunks[0], &th);
    render_list(f, app, chunks[1], &th);
    render_footer(f, app, chunks[2], &th);
}

/// Draw the one-line header with the application name and source description.
fn render_header(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " newsdesk ",
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.source_label.clone(), Style::default().fg(th.subtext)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Draw the scrollable news list.
fn render_list(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let title = format!(" Headlines ({}) ", app.rows.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.overlay))
        .title(Span::styled(title, Style::default().fg(th.accent)));

    let items: Vec<ListItem> = if app.rows.is_empty() {
        let msg = match app.status {
            LoadStatus::Loading | LoadStatus::Idle => "Loading news…",
            LoadStatus::Loaded(_) => "No news items.",
            LoadStatus::Failed(_) => "Could not load news. Press r to retry.",
        };
        vec![ListItem::new(Line::from(Span::styled(
            msg,
            Style::default().fg(th.overlay),
        )))]
    } else {
        let width = rows::badge_width(&app.rows);
        app.rows
            .iter()
            .map(|row| rows::build_row_item(row, width, &app.unknown_date_label, th))
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(th.selection))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Draw the status line and keybind hints.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let status = match &app.status {
        LoadStatus::Idle => Span::styled("Ready", Style::default().fg(th.subtext)),
        LoadStatus::Loading => Span::styled("Refreshing…", Style::default().fg(th.yellow)),
        LoadStatus::Loaded(at) => Span::styled(
            format!("Updated {}", at.format("%H:%M:%S")),
            Style::default().fg(th.subtext),
        ),
        LoadStatus::Failed(msg) => {
            Span::styled(format!("Error: {msg}"), Style::default().fg(th.red))
        }
    };
    let mut hints: Vec<Span> = Vec::new();
    for (key, action) in KEYBINDS {
        hints.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(th.accent).add_modifier(Modifier::BOLD),
        ));
        hints.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(th.subtext),
        ));
    }
    let text = vec![Line::from(status), Line::from(hints)];
    f.render_widget(Paragraph::new(text), area);
}
