use ratatui::style::Color;

use crate::row::{DisplayFormat, SectionPalette};

/// Default news search endpoint.
pub const DEFAULT_API_URL: &str = "https://content.guardianapis.com/search";
/// Public developer key accepted by the Guardian Content API.
pub const DEFAULT_API_KEY: &str = "test";
/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u16 = 50;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for authors and timestamps.
    pub subtext: Color,
    /// Muted color for borders and placeholders.
    pub overlay: Color,
    /// Background of the highlighted row.
    pub selection: Color,
    /// Foreground used on top of section badges.
    pub badge_text: Color,
    /// Accent for headings.
    pub accent: Color,
    /// Warning/attention color.
    pub yellow: Color,
    /// Error color.
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xa6, 0xad, 0xc8),
            overlay: Color::Rgb(0x7f, 0x84, 0x9c),
            selection: Color::Rgb(0x45, 0x47, 0x5a),
            badge_text: Color::Rgb(0x11, 0x11, 0x1b),
            accent: Color::Rgb(0x89, 0xb4, 0xfa),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
        }
    }
}

/// Ordering requested from the news API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderBy {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Search relevance.
    Relevance,
}

impl OrderBy {
    /// Parse a settings value.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "relevance" => Some(Self::Relevance),
            _ => None,
        }
    }

    /// Query parameter value understood by the API.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Relevance => "relevance",
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Search endpoint of the news API.
    pub api_url: String,
    /// API key sent as `api-key`.
    pub api_key: String,
    /// Optional free-text query (`q`).
    pub query: Option<String>,
    /// Optional section filter (API section id, e.g. `sport`).
    pub section: Option<String>,
    /// Number of items requested per fetch (1..=50).
    pub page_size: u16,
    /// Result ordering.
    pub order_by: OrderBy,
    /// Automatic refresh interval in seconds; 0 disables it.
    pub refresh_interval_secs: u64,
    /// Date and clock styles used by the row binder.
    pub display: DisplayFormat,
    /// Text shown in place of a date that could not be parsed.
    pub unknown_date_label: String,
    /// Section badge colors.
    pub palette: SectionPalette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            query: None,
            section: None,
            page_size: 20,
            order_by: OrderBy::Newest,
            refresh_interval_secs: 0,
            display: DisplayFormat::default(),
            unknown_date_label: "unknown date".to_string(),
            palette: SectionPalette::default(),
        }
    }
}
