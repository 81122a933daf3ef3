//! News retrieval: remote API fetch or local JSON file, decoded into [`NewsItem`]s.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use tracing::{info, warn};

use crate::state::NewsItem;
use crate::theme::Settings;

mod guardian;

pub use guardian::{ApiError, build_request_url, http_error, parse_news_response};

/// Result type alias for news source operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with connection pooling for news requests.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(20))
        .user_agent(format!("newsdesk/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default HTTP client");
            reqwest::Client::new()
        })
});

/// Where news items come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewsSource {
    /// Remote news API configured by settings.
    Api(Box<Settings>),
    /// Local file holding a response in the API's JSON shape.
    File(PathBuf),
}

impl NewsSource {
    /// Short human-readable description for the header and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Api(settings) => {
                let mut label = settings
                    .section
                    .clone()
                    .unwrap_or_else(|| "all sections".to_string());
                if let Some(q) = settings.query.as_deref() {
                    label.push_str(&format!(" / \"{q}\""));
                }
                label
            }
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// What: Fetch and decode the current news list.
///
/// Inputs:
/// - `source`: Remote API settings or a local file path.
///
/// Output:
/// - `Ok(Vec<NewsItem>)` in display order; `Err` on I/O, network, or decode failures.
///
/// # Errors
/// - Network failures and non-success HTTP statuses.
/// - File read failures for `NewsSource::File`.
/// - JSON decode failures and API error statuses (see [`parse_news_response`]).
pub async fn fetch_news(source: &NewsSource) -> Result<Vec<NewsItem>> {
    let body = match source {
        NewsSource::Api(settings) => fetch_body(settings).await?,
        NewsSource::File(path) => {
            let path = path.clone();
            tokio::task::spawn_blocking(move || std::fs::read_to_string(path)).await??
        }
    };
    let items = parse_news_response(&body)?;
    info!(count = items.len(), source = %source.describe(), "fetched news");
    Ok(items)
}

/// What: Perform the HTTP request for the configured search.
///
/// Inputs:
/// - `settings`: API configuration.
///
/// Output:
/// - Response body text.
///
/// # Errors
/// - Request building, transport, and HTTP status failures.
async fn fetch_body(settings: &Settings) -> Result<String> {
    let url = build_request_url(settings)?;
    // The key is part of the query string; keep it out of the logs.
    tracing::debug!(endpoint = %settings.api_url, "requesting news");
    let response = HTTP_CLIENT.get(url).send().await.map_err(|e| {
        warn!(error = %e, "news request failed");
        e
    })?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(http_error(status, &body));
    }
    Ok(body)
}
