//! Row view model and the binder that writes one news item into it.
//!
//! A [`RowWidgets`] is the reusable container behind one visible list row. The
//! binder only writes to it; the UI only reads from it.

mod datetime;
mod section;

pub use datetime::{
    ClockStyle, DateStyle, DateTimeError, DateTimeParts, DisplayFormat, parse_date_time,
    split_date_time,
};
pub use section::{Section, SectionPalette, color_for};

use ratatui::style::Color;

use crate::state::NewsItem;

/// Display slots of a single list row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowWidgets {
    /// Section label text.
    pub section: String,
    /// Fill color of the section badge.
    pub section_color: Color,
    /// Headline text.
    pub title: String,
    /// Author text; meaningful only while `author_visible` is `true`.
    pub author: String,
    /// Whether the author slot is shown.
    pub author_visible: bool,
    /// Formatted date, `None` when the item's date-time could not be parsed.
    pub date: Option<String>,
    /// Formatted time, `None` when the item's date-time could not be parsed.
    pub time: Option<String>,
}

impl Default for RowWidgets {
    fn default() -> Self {
        Self {
            section: String::new(),
            section_color: SectionPalette::default().fallback(),
            title: String::new(),
            author: String::new(),
            author_visible: true,
            date: None,
            time: None,
        }
    }
}

impl RowWidgets {
    /// What: Return every slot to its default state.
    ///
    /// Inputs: none
    ///
    /// Output:
    /// - Row equal to `RowWidgets::default()`; string buffers keep their capacity.
    pub fn reset(&mut self) {
        self.section.clear();
        self.section_color = SectionPalette::default().fallback();
        self.title.clear();
        self.author.clear();
        self.author_visible = true;
        self.date = None;
        self.time = None;
    }
}

/// Writes [`NewsItem`] fields into [`RowWidgets`] using a palette and display format.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowBinder {
    /// Section badge colors.
    palette: SectionPalette,
    /// Date and clock styles.
    format: DisplayFormat,
}

impl RowBinder {
    /// Create a binder with the given palette and display format.
    #[must_use]
    pub const fn new(palette: SectionPalette, format: DisplayFormat) -> Self {
        Self { palette, format }
    }

    /// Palette used for section badges.
    #[must_use]
    pub const fn palette(&self) -> &SectionPalette {
        &self.palette
    }

    /// What: Bind one news item into a (possibly reused) row.
    ///
    /// Inputs:
    /// - `item`: Item to display.
    /// - `row`: Row container to overwrite.
    ///
    /// Output:
    /// - The same `row`, now showing `item`.
    ///
    /// Details:
    /// - Resets the row first so state from a previously bound item never leaks.
    /// - Unknown sections get the palette fallback color, a missing author hides the
    ///   author slot, and an unparsable date-time leaves date and time as `None`.
    /// - Binding the same item twice yields an identical row.
    pub fn bind<'r>(&self, item: &NewsItem, row: &'r mut RowWidgets) -> &'r mut RowWidgets {
        row.reset();

        row.section.push_str(item.section());
        row.section_color = self.palette.color_for(item.section());
        row.title.push_str(item.title());

        match item.author() {
            Some(author) => {
                row.author.push_str(author);
                row.author_visible = true;
            }
            None => row.author_visible = false,
        }

        match split_date_time(item.date_time(), self.format) {
            Ok(DateTimeParts { date, time }) => {
                row.date = Some(date);
                row.time = Some(time);
            }
            Err(e) => {
                tracing::debug!(
                    date_time = item.date_time(),
                    error = %e,
                    "leaving date and time empty"
                );
            }
        }
        row
    }

    /// What: Bind a whole item list into a pool of reusable rows.
    ///
    /// Inputs:
    /// - `items`: Items in display order.
    /// - `rows`: Row pool; grown or truncated to `items.len()`.
    ///
    /// Output:
    /// - `rows[i]` shows `items[i]` for every index.
    ///
    /// Details:
    /// - Existing rows are rebound in place; only missing rows are allocated.
    pub fn bind_all(&self, items: &[NewsItem], rows: &mut Vec<RowWidgets>) {
        rows.truncate(items.len());
        rows.resize_with(items.len(), RowWidgets::default);
        for (item, row) in items.iter().zip(rows.iter_mut()) {
            self.bind(item, row);
        }
    }
}
