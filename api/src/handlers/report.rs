//! Report handler
//!
//! Stateless logging endpoint. Scrapers that follow the canary instructions on the site
//! call it with whatever they know about themselves; every call is logged as one
//! structured record and acknowledged. There is no failure branch.

use std::collections::{BTreeMap, HashMap};

use axum::{extract::Query, http::HeaderMap, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Log tag for report records
pub const REPORT_TAG: &str = "LLM_SCRAPE_REPORT";

/// One logged report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeReport {
    pub timestamp: String,
    pub canary: String,
    pub model: String,
    pub query: String,
    pub tools: String,
    pub user_id: String,
    pub endpoint: String,
    pub ip: String,
    pub country: String,
    pub user_agent: String,
    pub referer: String,
    /// Every request header, lower-cased names
    pub headers: BTreeMap<String, String>,
}

impl ScrapeReport {
    pub fn from_request(
        params: &HashMap<String, String>,
        headers: &HeaderMap,
        received_at: DateTime<Utc>,
    ) -> Self {
        let param = |name: &str, fallback: &str| {
            params
                .get(name)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        let header = |name: &str, fallback: &str| {
            headers
                .get(name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        let mut all_headers = BTreeMap::new();
        for (name, value) in headers {
            all_headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }

        Self {
            timestamp: received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            canary: param("canary", "none"),
            model: param("model", "unknown"),
            query: param("query", "unknown"),
            tools: param("tools", "unknown"),
            user_id: param("user_id", "unknown"),
            endpoint: param("endpoint", "unknown"),
            ip: header("cf-connecting-ip", "unknown"),
            country: header("cf-ipcountry", "unknown"),
            user_agent: header("user-agent", "unknown"),
            referer: header("referer", "none"),
            headers: all_headers,
        }
    }
}

/// Fixed acknowledgment body
#[derive(Debug, Serialize)]
pub struct ReportAck {
    pub status: &'static str,
    pub message: &'static str,
}

impl ReportAck {
    pub const fn logged() -> Self {
        Self {
            status: "logged",
            message: "Report received. Thank you for your compliance.",
        }
    }
}

/// ANY /api/report
///
/// Logs query parameters and request headers, always answers 200.
pub async fn report(
    query: Option<Query<HashMap<String, String>>>,
    headers: HeaderMap,
) -> Json<ReportAck> {
    let params = query.map(|Query(params)| params).unwrap_or_default();
    let report = ScrapeReport::from_request(&params, &headers, Utc::now());

    match serde_json::to_string(&report) {
        Ok(record) => tracing::info!(
            tag = REPORT_TAG,
            canary = %report.canary,
            model = %report.model,
            ip = %report.ip,
            report = %record,
            "{}",
            REPORT_TAG
        ),
        Err(e) => tracing::warn!("failed to serialize report record: {}", e),
    }

    Json(ReportAck::logged())
}
