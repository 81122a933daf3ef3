//! Central `AppState` container.

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;

use crate::row::{RowBinder, RowWidgets};
use crate::state::types::NewsItem;
use crate::theme::Settings;

/// Progress of the most recent fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// No fetch has completed yet and none is running.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded at the given time.
    Loaded(DateTime<Local>),
    /// The last fetch failed with the given message.
    Failed(String),
}

/// Global application state shared by the event, networking, and UI layers.
#[derive(Debug)]
pub struct AppState {
    /// Items in display order, as last received from the source.
    pub items: Vec<NewsItem>,
    /// Bound rows; `rows[i]` always shows `items[i]`.
    pub rows: Vec<RowWidgets>,
    /// List selection state for the news list.
    pub list_state: ListState,
    /// Fetch progress for the status line.
    pub status: LoadStatus,
    /// Human-readable description of the news source.
    pub source_label: String,
    /// Text shown when a row has no date.
    pub unknown_date_label: String,
    /// Binder used to fill `rows`.
    binder: RowBinder,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AppState {
    /// What: Create an empty state configured from settings.
    ///
    /// Inputs:
    /// - `settings`: Palette, display format, and placeholder label.
    ///
    /// Output:
    /// - State with no items, no selection, and `LoadStatus::Idle`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            items: Vec::new(),
            rows: Vec::new(),
            list_state: ListState::default(),
            status: LoadStatus::Idle,
            source_label: String::new(),
            unknown_date_label: settings.unknown_date_label.clone(),
            binder: RowBinder::new(settings.palette, settings.display),
        }
    }

    /// What: Replace the item list and rebind the row pool.
    ///
    /// Inputs:
    /// - `items`: New items in display order.
    ///
    /// Output:
    /// - `items`/`rows` updated; selection kept on the same URL when still present,
    ///   otherwise clamped to the new length (or cleared when empty).
    pub fn apply_news(&mut self, items: Vec<NewsItem>) {
        let selected_url = self.selected_item().map(|i| i.url().to_string());
        self.items = items;
        self.binder.bind_all(&self.items, &mut self.rows);

        let next = selected_url
            .and_then(|url| self.items.iter().position(|i| i.url() == url))
            .or_else(|| {
                self.list_state
                    .selected()
                    .map(|s| s.min(self.items.len().saturating_sub(1)))
            })
            .or(Some(0));
        self.list_state
            .select(if self.items.is_empty() { None } else { next });
        self.status = LoadStatus::Loaded(Local::now());
    }

    /// Record a failed fetch; the current list stays as it was.
    pub fn apply_error(&mut self, message: String) {
        self.status = LoadStatus::Failed(message);
    }

    /// Currently highlighted item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.list_state.selected().and_then(|i| self.items.get(i))
    }

    /// What: Move the selection by a signed offset, clamping at both ends.
    ///
    /// Inputs:
    /// - `delta`: Rows to move (negative = up).
    ///
    /// Output:
    /// - Selection updated; no-op when the list is empty.
    pub fn move_selection(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// Select the first row.
    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Select the last row.
    pub fn select_last(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.list_state.select(Some(last));
        }
    }
}
