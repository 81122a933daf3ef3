//! Core value types shared by the sources, row binding, and UI layers.

use std::fmt;

/// A single news headline as decoded from the news API.
///
/// Fields are set once by [`NewsItem::new`] and exposed through accessors only;
/// an item is never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NewsItem {
    /// Section label (e.g., "Sport", "Politics").
    section: String,
    /// Headline text (never empty).
    title: String,
    /// Combined publication date and time (e.g., `2020-05-01T14:30:00Z`).
    date_time: String,
    /// Byline; `None` when the record carries no author.
    author: Option<String>,
    /// Web URL of the full article.
    url: String,
}

/// Reasons a decoded record cannot become a [`NewsItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNewsItem {
    /// The headline was missing or contained only whitespace.
    EmptyTitle,
}

impl fmt::Display for InvalidNewsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "news item has an empty title"),
        }
    }
}

impl std::error::Error for InvalidNewsItem {}

impl NewsItem {
    /// What: Construct a validated news item.
    ///
    /// Inputs:
    /// - `section`: Section label, stored verbatim.
    /// - `title`: Headline text; must contain a non-whitespace character.
    /// - `date_time`: Combined date-time string, stored verbatim (not validated).
    /// - `author`: Optional byline.
    /// - `url`: Article URL, stored verbatim.
    ///
    /// Output:
    /// - `Ok(NewsItem)` on success; `Err(InvalidNewsItem::EmptyTitle)` for a blank title.
    ///
    /// # Errors
    /// - Returns `InvalidNewsItem::EmptyTitle` when `title` is empty after trimming.
    ///
    /// Details:
    /// - An empty or whitespace-only `author` is normalized to `None` so the row binder
    ///   hides the author slot instead of showing a blank one.
    pub fn new(
        section: impl Into<String>,
        title: impl Into<String>,
        date_time: impl Into<String>,
        author: Option<String>,
        url: impl Into<String>,
    ) -> Result<Self, InvalidNewsItem> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(InvalidNewsItem::EmptyTitle);
        }
        Ok(Self {
            section: section.into(),
            title,
            date_time: date_time.into(),
            author: author.filter(|a| !a.trim().is_empty()),
            url: url.into(),
        })
    }

    /// Section label of the item.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Headline text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Combined date-time string as received.
    #[must_use]
    pub fn date_time(&self) -> &str {
        &self.date_time
    }

    /// Byline, if any.
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Article URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
