//! Wikipedia-backed person lookup.
//!
//! Two read-only calls per name: an OpenSearch query for the best matching
//! title, then a REST page-summary fetch for that exact title. If the summary
//! fetch is refused, the short description from the search step is used.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use notable_core::config::WikipediaConfig;
use notable_core::{LookupOutcome, LookupResult};

use crate::source::LookupSource;

#[derive(Debug, thiserror::Error)]
pub enum WikipediaError {
    #[error("Wikipedia search failed: {0}")]
    Http(reqwest::Error),

    #[error("Unexpected Wikipedia response format: {0}")]
    Malformed(String),

    #[error("Invalid Wikipedia configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for WikipediaError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            WikipediaError::Malformed(e.to_string())
        } else {
            WikipediaError::Http(e)
        }
    }
}

/// First OpenSearch hit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchHit {
    title: String,
    description: Option<String>,
    url: Option<String>,
}

pub struct WikipediaSearch {
    client: reqwest::Client,
    api_url: Url,
    summary_base: Url,
}

impl WikipediaSearch {
    /// Build a client carrying the configured User-Agent and timeout.
    pub fn new(config: &WikipediaConfig) -> Result<Self, WikipediaError> {
        let api_url = Url::parse(&config.api_url)
            .map_err(|e| WikipediaError::Config(format!("api_url '{}': {e}", config.api_url)))?;
        let summary_base = Url::parse(&config.summary_url).map_err(|e| {
            WikipediaError::Config(format!("summary_url '{}': {e}", config.summary_url))
        })?;
        if summary_base.cannot_be_a_base() {
            return Err(WikipediaError::Config(format!(
                "summary_url '{}' cannot take path segments",
                config.summary_url
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(WikipediaError::Http)?;

        Ok(Self {
            client,
            api_url,
            summary_base,
        })
    }

    async fn search(&self, full_name: &str) -> Result<LookupOutcome, WikipediaError> {
        debug!(name = %full_name, url = %self.api_url, "Wikipedia opensearch");

        let payload: Value = self
            .client
            .get(self.api_url.clone())
            .query(&[
                ("action", "opensearch"),
                ("search", full_name),
                ("limit", "1"),
                ("namespace", "0"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hit = match parse_opensearch(&payload)? {
            Some(hit) => hit,
            None => return Ok(LookupOutcome::NotFound),
        };

        let summary = match self.fetch_extract(&hit.title).await? {
            Some(extract) => extract,
            None => hit.description.unwrap_or_default(),
        };

        Ok(LookupOutcome::Found {
            title: hit.title,
            summary,
            url: hit.url,
        })
    }

    /// `Ok(None)` when the summary endpoint answers with a non-success status.
    async fn fetch_extract(&self, title: &str) -> Result<Option<String>, WikipediaError> {
        let url = summary_endpoint(&self.summary_base, title);
        debug!(%url, "Wikipedia page summary");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(title, %status, "summary fetch refused, using search description");
            return Ok(None);
        }

        let body: Value = response.json().await?;
        let extract = body
            .get("extract")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(Some(extract))
    }
}

#[async_trait]
impl LookupSource for WikipediaSearch {
    async fn lookup(&self, first: &str, last: &str) -> LookupResult {
        let full_name = format!("{} {}", first, last);

        match self.search(&full_name).await {
            Ok(outcome) => {
                if let LookupOutcome::Found { title, .. } = &outcome {
                    info!(name = %full_name, title = %title, "Wikipedia article found");
                } else {
                    info!(name = %full_name, "no Wikipedia article");
                }
                LookupResult {
                    name: full_name,
                    outcome,
                }
            }
            Err(e) => {
                warn!(name = %full_name, error = %e, "Wikipedia lookup failed");
                LookupResult::failed(full_name, e.to_string())
            }
        }
    }

    fn source_name(&self) -> &str {
        "wikipedia"
    }
}

/// Parse an OpenSearch payload: `[query, [titles], [descriptions], [urls]]`.
fn parse_opensearch(payload: &Value) -> Result<Option<SearchHit>, WikipediaError> {
    let parts = payload
        .as_array()
        .ok_or_else(|| WikipediaError::Malformed("expected a JSON array".into()))?;
    let titles = parts
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| WikipediaError::Malformed("missing titles array at index 1".into()))?;

    let Some(first) = titles.first() else {
        return Ok(None);
    };
    let title = first
        .as_str()
        .ok_or_else(|| WikipediaError::Malformed("title is not a string".into()))?
        .to_string();

    Ok(Some(SearchHit {
        title,
        description: first_string(parts.get(2)),
        url: first_string(parts.get(3)),
    }))
}

fn first_string(column: Option<&Value>) -> Option<String> {
    column
        .and_then(Value::as_array)
        .and_then(|values| values.first())
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// `{summary_base}/{Title_With_Underscores}`, percent-encoded as one path segment.
fn summary_endpoint(summary_base: &Url, title: &str) -> Url {
    let mut url = summary_base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(&title.replace(' ', "_"));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn parse_opensearch_hit() {
        let payload = json!([
            "Isaac Newton",
            ["Isaac Newton"],
            ["English polymath (1642-1727)"],
            ["https://en.wikipedia.org/wiki/Isaac_Newton"]
        ]);
        let hit = parse_opensearch(&payload).unwrap().unwrap();
        assert_eq!(hit.title, "Isaac Newton");
        assert_eq!(hit.description.as_deref(), Some("English polymath (1642-1727)"));
        assert_eq!(
            hit.url.as_deref(),
            Some("https://en.wikipedia.org/wiki/Isaac_Newton")
        );
    }

    #[test]
    fn parse_opensearch_no_titles_is_not_found() {
        let payload = json!(["Zyx Qwv", [], [], []]);
        assert_eq!(parse_opensearch(&payload).unwrap(), None);
    }

    #[test]
    fn parse_opensearch_missing_columns() {
        let payload = json!(["Isaac Newton", ["Isaac Newton"]]);
        let hit = parse_opensearch(&payload).unwrap().unwrap();
        assert_eq!(hit.description, None);
        assert_eq!(hit.url, None);
    }

    #[test]
    fn parse_opensearch_rejects_object() {
        let payload = json!({"error": "nope"});
        match parse_opensearch(&payload) {
            Err(WikipediaError::Malformed(msg)) => assert!(msg.contains("array")),
            other => panic!("expected Malformed, got: {other:?}"),
        }
    }

    #[test]
    fn parse_opensearch_rejects_missing_titles() {
        let payload = json!(["Isaac Newton"]);
        assert!(matches!(
            parse_opensearch(&payload),
            Err(WikipediaError::Malformed(_))
        ));
    }

    #[test]
    fn malformed_error_mentions_format() {
        let e = WikipediaError::Malformed("x".into());
        assert!(e.to_string().starts_with("Unexpected Wikipedia response format"));
    }

    #[test]
    fn summary_endpoint_encodes_title() {
        let base = Url::parse("https://en.wikipedia.org/api/rest_v1/page/summary").unwrap();
        let url = summary_endpoint(&base, "AC/DC Band");
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/AC%2FDC_Band"
        );
    }

    #[test]
    fn summary_endpoint_handles_trailing_slash() {
        let base = Url::parse("https://example.org/summary/").unwrap();
        let url = summary_endpoint(&base, "Isaac Newton");
        assert_eq!(url.as_str(), "https://example.org/summary/Isaac_Newton");
    }

    #[test]
    fn new_rejects_bad_url() {
        let config = WikipediaConfig {
            api_url: "not a url".into(),
            ..WikipediaConfig::default()
        };
        assert!(matches!(
            WikipediaSearch::new(&config),
            Err(WikipediaError::Config(_))
        ));
    }

    // ── Local HTTP fixture ──────────────────────────────────────

    /// Serve canned responses on an ephemeral port. `route` maps a request
    /// path (with query) to `(status, body)`.
    async fn serve(route: fn(&str) -> (u16, String)) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&buf);
                    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                    let (status, body) = route(&path);
                    let response = format!(
                        "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{addr}")
    }

    fn search_for(base: &str) -> WikipediaSearch {
        WikipediaSearch::new(&WikipediaConfig {
            api_url: format!("{base}/w/api.php"),
            summary_url: format!("{base}/summary"),
            ..WikipediaConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn lookup_found_uses_extract() {
        let base = serve(|path| {
            if path.starts_with("/w/api.php") {
                (
                    200,
                    r#"["Isaac Newton",["Isaac Newton"],["English polymath"],["https://en.wikipedia.org/wiki/Isaac_Newton"]]"#.into(),
                )
            } else if path == "/summary/Isaac_Newton" {
                (200, r#"{"extract":"Isaac Newton was an English mathematician."}"#.into())
            } else {
                (404, "{}".into())
            }
        })
        .await;

        let result = search_for(&base).lookup("Isaac", "Newton").await;
        assert_eq!(result.name, "Isaac Newton");
        assert_eq!(result.title(), Some("Isaac Newton"));
        assert_eq!(result.summary(), Some("Isaac Newton was an English mathematician."));
        assert_eq!(result.url(), Some("https://en.wikipedia.org/wiki/Isaac_Newton"));
    }

    #[tokio::test]
    async fn lookup_falls_back_to_description_when_summary_refused() {
        let base = serve(|path| {
            if path.starts_with("/w/api.php") {
                (200, r#"["Ada Lovelace",["Ada Lovelace"],["English mathematician"],[]]"#.into())
            } else {
                (503, "{}".into())
            }
        })
        .await;

        let result = search_for(&base).lookup("Ada", "Lovelace").await;
        assert!(result.is_found());
        assert_eq!(result.summary(), Some("English mathematician"));
        assert_eq!(result.url(), None);
    }

    #[tokio::test]
    async fn lookup_summary_refused_without_description_is_empty() {
        let base = serve(|path| {
            if path.starts_with("/w/api.php") {
                (200, r#"["Ada Lovelace",["Ada Lovelace"],[],[]]"#.into())
            } else {
                (404, "{}".into())
            }
        })
        .await;

        let result = search_for(&base).lookup("Ada", "Lovelace").await;
        assert_eq!(result.summary(), Some(""));
    }

    #[tokio::test]
    async fn lookup_no_match_has_no_error() {
        let base = serve(|_| (200, r#"["Zyx Qwv",[],[],[]]"#.into())).await;

        let result = search_for(&base).lookup("Zyx", "Qwv").await;
        assert_eq!(result.outcome, LookupOutcome::NotFound);
        assert_eq!(result.error(), None);
    }

    #[tokio::test]
    async fn lookup_server_error_is_failed() {
        let base = serve(|_| (500, "{}".into())).await;

        let result = search_for(&base).lookup("Isaac", "Newton").await;
        let reason = result.error().expect("expected a failure reason");
        assert!(reason.starts_with("Wikipedia search failed"));
    }

    #[tokio::test]
    async fn lookup_unexpected_shape_is_failed() {
        let base = serve(|_| (200, r#"{"query":{}}"#.into())).await;

        let result = search_for(&base).lookup("Isaac", "Newton").await;
        let reason = result.error().expect("expected a failure reason");
        assert!(reason.starts_with("Unexpected Wikipedia response format"));
    }

    #[tokio::test]
    async fn lookup_connection_refused_is_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = search_for(&format!("http://{addr}")).lookup("Isaac", "Newton").await;
        assert!(!result.is_found());
        assert!(result.error().is_some());
    }

    /// Accept connections and read requests without ever answering.
    async fn serve_silent() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut chunk = [0u8; 1024];
                    while let Ok(n) = socket.read(&mut chunk).await {
                        if n == 0 {
                            return;
                        }
                    }
                });
            }
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn lookup_timeout_is_failed() {
        let base = serve_silent().await;
        let search = WikipediaSearch::new(&WikipediaConfig {
            api_url: format!("{base}/w/api.php"),
            summary_url: format!("{base}/summary"),
            timeout_secs: 1,
            ..WikipediaConfig::default()
        })
        .unwrap();

        let result = search.lookup("Isaac", "Newton").await;
        assert!(matches!(result.outcome, LookupOutcome::Failed { .. }));
        let reason = result.error().expect("expected a failure reason");
        assert!(reason.starts_with("Wikipedia search failed"), "reason: {reason}");
    }
}
