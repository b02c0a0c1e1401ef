//! Passage sources. Every network call for scripture text goes through
//! [`PassageSource`]; handlers never talk to BibleGateway directly.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::extract::extract_passage;
use super::Passage;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Placeholder queries rejected without a network round trip.
const REJECTED_QUERIES: &[&str] = &["invalid query", "invalid", "test"];

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid passage query: '{0}'")]
    InvalidQuery(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream returned status {status}")]
    Status { status: u16 },

    #[error("No passage text found for '{0}'")]
    NotFound(String),
}

#[async_trait]
pub trait PassageSource: Send + Sync {
    async fn fetch(&self, query: &str, version: &str) -> Result<Passage, FetchError>;
}

/// Rejects empty and placeholder queries. Returns the trimmed query.
pub fn validate_query(query: &str) -> Result<&str, FetchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() || REJECTED_QUERIES.contains(&trimmed.to_lowercase().as_str()) {
        return Err(FetchError::InvalidQuery(query.to_string()));
    }
    Ok(trimmed)
}

/// Scrapes passages from the BibleGateway passage page.
#[derive(Clone)]
pub struct BibleGatewayClient {
    client: Client,
    base_url: String,
}

impl BibleGatewayClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn passage_url(&self) -> String {
        format!("{}/passage/", self.base_url)
    }
}

#[async_trait]
impl PassageSource for BibleGatewayClient {
    async fn fetch(&self, query: &str, version: &str) -> Result<Passage, FetchError> {
        let query = validate_query(query)?;

        let response = self
            .client
            .get(self.passage_url())
            .query(&[("search", query), ("version", version)])
            .send()
            .await?;

        let url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "BibleGateway returned an error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        debug!(%url, bytes = html.len(), "fetched passage page");

        let extracted =
            extract_passage(&html, query).ok_or_else(|| FetchError::NotFound(query.to_string()))?;

        info!(reference = %extracted.reference, version, "passage fetched");

        Ok(Passage {
            text: extracted.text,
            reference: extracted.reference,
            version: version.to_string(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_rejects_placeholders() {
        for query in ["", "   ", "invalid query", "Invalid", " TEST "] {
            assert!(
                matches!(validate_query(query), Err(FetchError::InvalidQuery(_))),
                "{query:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_query_accepts_references() {
        assert_eq!(validate_query(" John 3:16 ").unwrap(), "John 3:16");
        assert_eq!(validate_query("testimony").unwrap(), "testimony");
    }

    #[test]
    fn test_passage_url_trims_trailing_slash() {
        let client =
            BibleGatewayClient::new("https://www.biblegateway.com/", Duration::from_secs(10))
                .unwrap();
        assert_eq!(client.passage_url(), "https://www.biblegateway.com/passage/");
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_query_without_network() {
        // Unroutable base URL: reaching the network would surface as Http, not InvalidQuery.
        let client = BibleGatewayClient::new("http://127.0.0.1:9", Duration::from_millis(50)).unwrap();
        let err = client.fetch("invalid", "NIV").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidQuery(_)));
    }
}
