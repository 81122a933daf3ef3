//! Section names and the section-to-color mapping used for row badges.

use ratatui::style::Color;

/// Known news sections with a dedicated badge color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// "Sport"
    Sport,
    /// "Music"
    Music,
    /// "Life and style"
    LifeAndStyle,
    /// "Books"
    Books,
    /// "Business"
    Business,
    /// "Money"
    Money,
    /// "Politics"
    Politics,
    /// "Football"
    Football,
    /// "Media"
    Media,
    /// "Stage"
    Stage,
}

impl Section {
    /// All known sections in palette order.
    pub const ALL: [Self; 10] = [
        Self::Sport,
        Self::Music,
        Self::LifeAndStyle,
        Self::Books,
        Self::Business,
        Self::Money,
        Self::Politics,
        Self::Football,
        Self::Media,
        Self::Stage,
    ];

    /// What: Resolve a section display name to a known section.
    ///
    /// Inputs:
    /// - `name`: Section label exactly as delivered by the news API.
    ///
    /// Output:
    /// - `Some(Section)` for one of the ten known names; `None` otherwise.
    ///
    /// Details:
    /// - Matching is exact and case-sensitive, like the API's own labels.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Sport" => Some(Self::Sport),
            "Music" => Some(Self::Music),
            "Life and style" => Some(Self::LifeAndStyle),
            "Books" => Some(Self::Books),
            "Business" => Some(Self::Business),
            "Money" => Some(Self::Money),
            "Politics" => Some(Self::Politics),
            "Football" => Some(Self::Football),
            "Media" => Some(Self::Media),
            "Stage" => Some(Self::Stage),
            _ => None,
        }
    }

    /// Display name as used by the news API.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sport => "Sport",
            Self::Music => "Music",
            Self::LifeAndStyle => "Life and style",
            Self::Books => "Books",
            Self::Business => "Business",
            Self::Money => "Money",
            Self::Politics => "Politics",
            Self::Football => "Football",
            Self::Media => "Media",
            Self::Stage => "Stage",
        }
    }

    /// Settings key suffix (e.g., `life_and_style` for `color_life_and_style`).
    #[must_use]
    pub const fn config_slug(self) -> &'static str {
        match self {
            Self::Sport => "sport",
            Self::Music => "music",
            Self::LifeAndStyle => "life_and_style",
            Self::Books => "books",
            Self::Business => "business",
            Self::Money => "money",
            Self::Politics => "politics",
            Self::Football => "football",
            Self::Media => "media",
            Self::Stage => "stage",
        }
    }

    /// What: Resolve a settings key suffix back to a section.
    ///
    /// Inputs:
    /// - `slug`: Normalized key suffix such as `"sport"` or `"life_and_style"`.
    ///
    /// Output:
    /// - Matching section, or `None` for unknown suffixes.
    #[must_use]
    pub fn from_config_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.config_slug() == slug)
    }

    /// Position of this section inside [`SectionPalette`].
    const fn index(self) -> usize {
        self as usize
    }
}

/// Badge colors for every known section plus the fallback for anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionPalette {
    /// Colors indexed by [`Section`] order.
    colors: [Color; 10],
    /// Color for unknown or empty section names.
    fallback: Color,
}

impl Default for SectionPalette {
    fn default() -> Self {
        Self {
            colors: [
                Color::Rgb(0x2e, 0x86, 0xc1), // Sport
                Color::Rgb(0xb8, 0x45, 0x92), // Music
                Color::Rgb(0xe6, 0x9f, 0x00), // Life and style
                Color::Rgb(0x8e, 0x44, 0xad), // Books
                Color::Rgb(0x1f, 0x61, 0x8d), // Business
                Color::Rgb(0x11, 0x7a, 0x65), // Money
                Color::Rgb(0xc0, 0x39, 0x2b), // Politics
                Color::Rgb(0x27, 0xae, 0x60), // Football
                Color::Rgb(0xd3, 0x54, 0x00), // Media
                Color::Rgb(0x7d, 0x3c, 0x98), // Stage
            ],
            fallback: Color::Rgb(0x7f, 0x8c, 0x8d),
        }
    }
}

impl SectionPalette {
    /// What: Look up the badge color for a section name.
    ///
    /// Inputs:
    /// - `section`: Any section label, including empty or unknown ones.
    ///
    /// Output:
    /// - The configured color for a known section; the fallback color otherwise.
    ///
    /// Details:
    /// - Total function: every input maps to a color.
    #[must_use]
    pub fn color_for(&self, section: &str) -> Color {
        Section::from_name(section).map_or(self.fallback, |s| self.colors[s.index()])
    }

    /// Color assigned to a known section.
    #[must_use]
    pub const fn section_color(&self, section: Section) -> Color {
        self.colors[section.index()]
    }

    /// Color used for unknown sections.
    #[must_use]
    pub const fn fallback(&self) -> Color {
        self.fallback
    }

    /// Override the color of one known section.
    pub const fn set_section_color(&mut self, section: Section, color: Color) {
        self.colors[section.index()] = color;
    }

    /// Override the fallback color.
    pub const fn set_fallback(&mut self, color: Color) {
        self.fallback = color;
    }
}

/// What: Badge color for a section name using the built-in palette.
///
/// Inputs:
/// - `section`: Any section label.
///
/// Output:
/// - Mapped color for the ten known sections; the default color for everything else.
#[must_use]
pub fn color_for(section: &str) -> Color {
    SectionPalette::default().color_for(section)
}
