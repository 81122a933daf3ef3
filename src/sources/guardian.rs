//! Guardian Content API request building and response decoding.

use serde::Deserialize;
use std::fmt;

use crate::state::NewsItem;
use crate::theme::Settings;

/// Result type alias for news source operations.
type Result<T> = super::Result<T>;

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    /// Payload.
    response: ResponseBody,
}

/// Search response body.
#[derive(Debug, Deserialize)]
struct ResponseBody {
    /// `"ok"` on success, `"error"` otherwise.
    status: String,
    /// Error message for non-ok responses.
    #[serde(default)]
    message: Option<String>,
    /// Result records.
    #[serde(default)]
    results: Vec<ApiResult>,
}

/// One search result record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResult {
    #[serde(default)]
    section_name: Option<String>,
    #[serde(default)]
    web_title: Option<String>,
    #[serde(default)]
    web_publication_date: Option<String>,
    #[serde(default)]
    web_url: Option<String>,
    #[serde(default)]
    tags: Vec<ApiTag>,
}

/// Tag attached to a record (only contributor tags are used).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTag {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    web_title: String,
}

/// Top-level `message` some error responses carry instead of an envelope.
#[derive(Debug, Deserialize)]
struct BareError {
    #[serde(default)]
    message: Option<String>,
}

/// A non-"ok" status reported by the news API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Status string from the response.
    pub status: String,
    /// Error message from the response, if any.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "news API returned status {:?}: {msg}", self.status),
            None => write!(f, "news API returned status {:?}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}

/// What: Build the search URL for the configured query.
///
/// Inputs:
/// - `settings`: API endpoint, key, query, section filter, page size, and ordering.
///
/// Output:
/// - Fully encoded request URL.
///
/// # Errors
/// - Returns `Err` when `api_url` is not a valid URL.
pub fn build_request_url(settings: &Settings) -> Result<reqwest::Url> {
    let page_size = settings.page_size.to_string();
    let mut params: Vec<(&str, &str)> = vec![
        ("api-key", settings.api_key.as_str()),
        ("show-tags", "contributor"),
        ("page-size", page_size.as_str()),
        ("order-by", settings.order_by.as_param()),
    ];
    if let Some(q) = settings.query.as_deref() {
        params.push(("q", q));
    }
    if let Some(section) = settings.section.as_deref() {
        params.push(("section", section));
    }
    Ok(reqwest::Url::parse_with_params(&settings.api_url, &params)?)
}

/// What: Describe a non-success HTTP response.
///
/// Inputs:
/// - `status`: HTTP status of the response.
/// - `body`: Response body text (JSON envelope, bare JSON error, or anything else).
///
/// Output:
/// - `ApiError` when the body is an envelope with a non-"ok" status; otherwise an error
///   naming the HTTP status plus the top-level `message`, if the body has one.
pub fn http_error(
    status: reqwest::StatusCode,
    body: &str,
) -> Box<dyn std::error::Error + Send + Sync> {
    if let Ok(envelope) = serde_json::from_str::<Envelope>(body)
        && envelope.response.status != "ok"
    {
        return Box::new(ApiError {
            status: envelope.response.status,
            message: envelope.response.message,
        });
    }
    let message = serde_json::from_str::<BareError>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());
    match message {
        Some(msg) => format!("news API returned HTTP {status}: {msg}").into(),
        None => format!("news API returned HTTP {status}").into(),
    }
}

/// What: Decode a search response body into news items.
///
/// Inputs:
/// - `body`: JSON text of a Guardian-style search response.
///
/// Output:
/// - Items in response order.
///
/// # Errors
/// - Returns `Err` when the JSON does not match the response envelope.
/// - Returns `ApiError` when the response status is not `"ok"`.
///
/// Details:
/// - Records with a missing or blank title are skipped with a warning.
/// - Missing section, date, and URL fields become empty strings.
/// - The author is the contributor tag names joined with `", "`; no contributors means
///   no author.
pub fn parse_news_response(body: &str) -> Result<Vec<NewsItem>> {
    let envelope: Envelope = serde_json::from_str(body)?;
    let response = envelope.response;
    if response.status != "ok" {
        return Err(Box::new(ApiError {
            status: response.status,
            message: response.message,
        }));
    }
    let total = response.results.len();
    let items: Vec<NewsItem> = response
        .results
        .into_iter()
        .enumerate()
        .filter_map(|(idx, r)| {
            let contributors: Vec<&str> = r
                .tags
                .iter()
                .filter(|t| t.kind == "contributor" && !t.web_title.trim().is_empty())
                .map(|t| t.web_title.trim())
                .collect();
            let author = (!contributors.is_empty()).then(|| contributors.join(", "));
            match NewsItem::new(
                r.section_name.unwrap_or_default(),
                r.web_title.unwrap_or_default(),
                r.web_publication_date.unwrap_or_default(),
                author,
                r.web_url.unwrap_or_default(),
            ) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "skipping news record");
                    None
                }
            }
        })
        .collect();
    tracing::debug!(total, kept = items.len(), "decoded news response");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "response": {
        "status": "ok",
        "total": 3,
        "results": [
          {
            "id": "sport/2020/may/01/a",
            "sectionName": "Sport",
            "webPublicationDate": "2020-05-01T14:30:00Z",
            "webTitle": "Season resumes",
            "webUrl": "https://www.theguardian.com/sport/a",
            "tags": [
              {"type": "contributor", "webTitle": "Jane Doe"},
              {"type": "keyword", "webTitle": "Cricket"},
              {"type": "contributor", "webTitle": "John Roe"}
            ]
          },
          {
            "sectionName": "Weather",
            "webPublicationDate": "2020-05-01T09:00:00Z",
            "webTitle": "Rain later",
            "webUrl": "https://www.theguardian.com/weather/b"
          },
          {
            "sectionName": "Music",
            "webTitle": "   ",
            "webUrl": "https://www.theguardian.com/music/c"
          }
        ]
      }
    }"#;

    #[test]
    /// What: Decode the Guardian response shape.
    ///
    /// Inputs:
    /// - Three records: one with two contributors, one without tags, one with a blank title.
    ///
    /// Output:
    /// - Two items; contributors joined; blank-title record skipped.
    fn decodes_results_and_skips_blank_titles() {
        let items = parse_news_response(SAMPLE).expect("decodes");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].section(), "Sport");
        assert_eq!(items[0].title(), "Season resumes");
        assert_eq!(items[0].date_time(), "2020-05-01T14:30:00Z");
        assert_eq!(items[0].author(), Some("Jane Doe, John Roe"));
        assert_eq!(items[0].url(), "https://www.theguardian.com/sport/a");
        assert_eq!(items[1].section(), "Weather");
        assert_eq!(items[1].author(), None);
    }

    #[test]
    fn error_status_is_reported() {
        let body =
            r#"{"response":{"status":"error","message":"Invalid authentication credentials"}}"#;
        let err = parse_news_response(body).expect_err("error status");
        let api = err.downcast_ref::<ApiError>().expect("ApiError");
        assert_eq!(api.status, "error");
        assert_eq!(
            api.message.as_deref(),
            Some("Invalid authentication credentials")
        );
    }

    #[test]
    /// What: Non-success HTTP responses keep the status in the error text.
    ///
    /// Inputs:
    /// - 401 with a bare `{"message": ..}` body, 502 with an HTML page, 403 with an envelope.
    ///
    /// Output:
    /// - Status and message for the bare body; status for HTML; `ApiError` for the envelope.
    fn http_errors_name_the_status() {
        let err = http_error(reqwest::StatusCode::UNAUTHORIZED, r#"{"message":"Unauthorized"}"#);
        assert_eq!(err.to_string(), "news API returned HTTP 401 Unauthorized: Unauthorized");

        let err = http_error(reqwest::StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>");
        assert_eq!(err.to_string(), "news API returned HTTP 502 Bad Gateway");

        let err = http_error(
            reqwest::StatusCode::FORBIDDEN,
            r#"{"response":{"status":"error","message":"quota exceeded"}}"#,
        );
        let api = err.downcast_ref::<ApiError>().expect("ApiError");
        assert_eq!(api.message.as_deref(), Some("quota exceeded"));

        let err = http_error(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"response":{"status":"ok","results":[]}}"#,
        );
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_news_response("{\"results\": []}").is_err());
        assert!(parse_news_response("not json").is_err());
    }

    #[test]
    fn empty_result_list_is_ok() {
        let items = parse_news_response(r#"{"response":{"status":"ok"}}"#).expect("decodes");
        assert!(items.is_empty());
    }

    #[test]
    /// What: Build the request URL with optional filters.
    ///
    /// Inputs:
    /// - Default settings, then settings with query and section.
    ///
    /// Output:
    /// - URL carries key, tags, page size, order, and the optional `q`/`section`.
    fn request_url_contains_params() {
        let mut settings = Settings::default();
        let url = build_request_url(&settings).expect("url");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("api-key".into(), "test".into())));
        assert!(pairs.contains(&("show-tags".into(), "contributor".into())));
        assert!(pairs.contains(&("page-size".into(), "20".into())));
        assert!(pairs.contains(&("order-by".into(), "newest".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "q"));

        settings.query = Some("climate change".into());
        settings.section = Some("environment".into());
        let url = build_request_url(&settings).expect("url");
        let q: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(q.contains(&("q".into(), "climate change".into())));
        assert!(q.contains(&("section".into(), "environment".into())));
    }

    #[test]
    fn invalid_api_url_is_an_error() {
        let settings = Settings {
            api_url: "not a url".into(),
            ..Settings::default()
        };
        assert!(build_request_url(&settings).is_err());
    }
}
