//! `tldr.news.v1` messages
//!
//! Field tags mirror `proto/news.proto`. `prost::Message` supplies the `Debug` and
//! `Default` impls, so neither is derived here.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// One day for which a summary exists
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize, Deserialize, JsonSchema)]
pub struct NewsSummary {
    /// Calendar date (`YYYY-MM-DD`)
    #[prost(string, tag = "1")]
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub date: String,
}

/// Response body of `GET /api/news`
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize, JsonSchema)]
pub struct ListNewsSummariesResponse {
    #[prost(message, repeated, tag = "1")]
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<NewsSummary>>")]
    pub summaries: Vec<NewsSummary>,
}

/// Response body of `GET /api/news/{date}`
#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize, JsonSchema)]
pub struct GetNewsSummaryResponse {
    /// Calendar date (`YYYY-MM-DD`)
    #[prost(string, tag = "1")]
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub date: String,

    /// Markdown-formatted summary
    #[prost(string, tag = "2")]
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<String>")]
    pub content: String,
}

impl NewsSummary {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }
}

impl ListNewsSummariesResponse {
    pub fn new(summaries: Vec<NewsSummary>) -> Self {
        Self { summaries }
    }
}

impl GetNewsSummaryResponse {
    pub fn new(date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            content: content.into(),
        }
    }
}

/// Protobuf JSON treats an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
