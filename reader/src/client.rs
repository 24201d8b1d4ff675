//! HTTP client for the tl;dr news API
//!
//! Every fetch runs the same single-attempt pipeline:
//! request -> status check -> parse -> validate -> decode.
//! No retries, no timeouts beyond reqwest's defaults, no caching.

use std::sync::Arc;

use prost::Message;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use tldr_proto::{GetNewsSummaryResponse, ListNewsSummariesResponse, PROTOBUF_MEDIA_TYPE};

use crate::config::{ReaderConfig, WireFormat};
use crate::error::ReaderError;
use crate::schema::{SchemaRegistry, ShapedMessage};

/// Path of the summary list endpoint
pub const NEWS_PATH: &str = "/api/news";

/// One day for which a summary exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReference {
    pub date: String,
}

/// The full summary for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDetail {
    pub date: String,
    /// Markdown-formatted text
    pub content: String,
}

impl From<tldr_proto::NewsSummary> for SummaryReference {
    fn from(summary: tldr_proto::NewsSummary) -> Self {
        Self { date: summary.date }
    }
}

impl From<GetNewsSummaryResponse> for SummaryDetail {
    fn from(response: GetNewsSummaryResponse) -> Self {
        Self {
            date: response.date,
            content: response.content,
        }
    }
}

/// HTTP client for communicating with the news API
#[derive(Clone)]
pub struct NewsClient {
    client: reqwest::Client,
    base_url: String,
    wire_format: WireFormat,
    schemas: Arc<SchemaRegistry>,
}

impl NewsClient {
    /// Create a client from loaded configuration
    pub fn from_config(config: &ReaderConfig) -> Result<Self, ReaderError> {
        Self::new(&config.api_url, config.wire_format)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str, wire_format: WireFormat) -> Result<Self, ReaderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(wire_format.media_type()));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ReaderError::Request(format!("Failed to build HTTP client: {}", e)))?;

        let schemas = SchemaRegistry::new()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            wire_format,
            schemas: Arc::new(schemas),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    /// Fetch every date for which a summary exists, in the order the API sent them
    pub async fn fetch_summary_list(&self) -> Result<Vec<SummaryReference>, ReaderError> {
        let response: ListNewsSummariesResponse = self.get_message(NEWS_PATH).await?;

        Ok(response
            .summaries
            .into_iter()
            .map(SummaryReference::from)
            .collect())
    }

    /// Fetch the summary for one date
    pub async fn fetch_summary_detail(&self, date: &str) -> Result<SummaryDetail, ReaderError> {
        if date.is_empty() {
            return Err(ReaderError::Request(
                "summary date must not be empty".to_string(),
            ));
        }

        let path = format!("{}/{}", NEWS_PATH, urlencoding::encode(date));
        let response: GetNewsSummaryResponse = self.get_message(&path).await?;

        Ok(response.into())
    }

    // --- Internal helpers ---

    async fn get_message<M>(&self, path: &str) -> Result<M, ReaderError>
    where
        M: ShapedMessage + Message + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        let result = self.fetch_and_decode(&url).await;

        if let Err(e) = &result {
            tracing::warn!(path, kind = e.kind(), "Failed to fetch {}: {}", M::SHAPE, e);
        }

        result
    }

    async fn fetch_and_decode<M>(&self, url: &str) -> Result<M, ReaderError>
    where
        M: ShapedMessage + Message + Default,
    {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ReaderError::Request(format!("GET {} failed: {}", url, e)))?;

        // Fail fast: a non-success body is never parsed
        let status = response.status();
        if !status.is_success() {
            return Err(ReaderError::Request(format!("GET {} returned {}", url, status)));
        }

        let is_protobuf = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with(PROTOBUF_MEDIA_TYPE))
            .unwrap_or(false);

        let body = response
            .bytes()
            .await
            .map_err(|e| ReaderError::Request(format!("Failed to read response body: {}", e)))?;

        if is_protobuf {
            // Binary messages are typed by construction; only framing can be wrong
            return M::decode(body.as_ref()).map_err(|e| ReaderError::Parse(e.to_string()));
        }

        let json: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| ReaderError::Parse(e.to_string()))?;

        Ok(self.schemas.validate_and_decode(json)?)
    }
}
