//! Command-line argument definition and settings overrides.

use std::path::PathBuf;

use clap::Parser;

use crate::sources::NewsSource;
use crate::theme::{MAX_PAGE_SIZE, Settings};

/// newsdesk - section-colored news headlines in your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "newsdesk")]
#[command(version)]
#[command(about = "Section-colored news headlines in your terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Free-text search query (overrides `query` in settings.conf)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Section filter, e.g. "sport" (overrides `section` in settings.conf)
    #[arg(long)]
    pub section: Option<String>,

    /// Number of items to fetch, 1-50 (overrides `page_size` in settings.conf)
    #[arg(long)]
    pub page_size: Option<u16>,

    /// News API key (overrides `api_key` in settings.conf)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Read news from a local JSON file in the API response format instead of the network
    #[arg(long, value_name = "PATH")]
    pub from_file: Option<PathBuf>,

    /// Print the news list to stdout and exit instead of starting the TUI
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Disable colored output in --list mode
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// What: Apply command-line overrides on top of file settings.
    ///
    /// Inputs:
    /// - `base`: Settings loaded from `settings.conf`.
    ///
    /// Output:
    /// - Effective settings; `page_size` is clamped to `1..=50`.
    #[must_use]
    pub fn apply_to(&self, mut base: Settings) -> Settings {
        if let Some(q) = &self.query {
            base.query = (!q.trim().is_empty()).then(|| q.clone());
        }
        if let Some(s) = &self.section {
            base.section = (!s.trim().is_empty()).then(|| s.clone());
        }
        if let Some(n) = self.page_size {
            base.page_size = n.clamp(1, MAX_PAGE_SIZE);
        }
        if let Some(k) = &self.api_key {
            base.api_key.clone_from(k);
        }
        base
    }

    /// What: Choose the news source.
    ///
    /// Inputs:
    /// - `settings`: Effective settings.
    ///
    /// Output:
    /// - `NewsSource::File` when `--from-file` is given; `NewsSource::Api` otherwise.
    #[must_use]
    pub fn news_source(&self, settings: &Settings) -> NewsSource {
        self.from_file.as_ref().map_or_else(
            || NewsSource::Api(Box::new(settings.clone())),
            |path| NewsSource::File(path.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Parse flags and apply them over file settings.
    ///
    /// Inputs:
    /// - `--query climate --section sport --page-size 99 --api-key k`.
    ///
    /// Output:
    /// - Overrides applied; page size clamped to 50.
    fn overrides_apply_and_clamp() {
        let args = Args::parse_from([
            "newsdesk",
            "--query",
            "climate",
            "--section",
            "sport",
            "--page-size",
            "99",
            "--api-key",
            "k",
        ]);
        let s = args.apply_to(Settings::default());
        assert_eq!(s.query.as_deref(), Some("climate"));
        assert_eq!(s.section.as_deref(), Some("sport"));
        assert_eq!(s.page_size, MAX_PAGE_SIZE);
        assert_eq!(s.api_key, "k");
    }

    #[test]
    fn no_flags_keep_file_settings() {
        let args = Args::parse_from(["newsdesk"]);
        let base = Settings {
            query: Some("keep".into()),
            ..Settings::default()
        };
        assert_eq!(args.apply_to(base.clone()), base);
        assert_eq!(args.log_level, "info");
        assert!(!args.list);
    }

    #[test]
    fn from_file_selects_file_source() {
        let args = Args::parse_from(["newsdesk", "--from-file", "news.json", "-l"]);
        assert!(args.list);
        assert_eq!(
            args.news_source(&Settings::default()),
            NewsSource::File(PathBuf::from("news.json"))
        );
        let api = Args::parse_from(["newsdesk"]).news_source(&Settings::default());
        assert!(matches!(api, NewsSource::Api(_)));
    }
}
