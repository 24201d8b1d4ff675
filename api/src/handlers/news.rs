//! News handlers
//!
//! Endpoints for listing and reading daily summaries.
//! Supports content negotiation: Accept: application/x-protobuf for binary protobuf,
//! otherwise JSON.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use prost::Message;
use serde::Serialize;
use tldr_proto::PROTOBUF_MEDIA_TYPE;

use crate::error::AppError;
use crate::AppState;

/// Check if the client wants a protobuf response
fn wants_protobuf(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains(PROTOBUF_MEDIA_TYPE))
        .unwrap_or(false)
}

/// Encode a message in the representation the client asked for
fn negotiate<M>(headers: &HeaderMap, message: M) -> Response
where
    M: Message + Serialize,
{
    if wants_protobuf(headers) {
        (
            [(header::CONTENT_TYPE, PROTOBUF_MEDIA_TYPE)],
            message.encode_to_vec(),
        )
            .into_response()
    } else {
        Json(message).into_response()
    }
}

/// GET /api/news
///
/// Lists the dates for which a summary exists.
pub async fn list_news(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let summaries = state.news_service.list_summaries().await.map_err(|e| {
        tracing::error!("failed to list news summaries: {}", e);
        AppError::Internal("failed to list news summaries".to_string())
    })?;

    Ok(negotiate(&headers, summaries))
}

/// GET /api/news/:date
///
/// Returns the Markdown summary for one date.
pub async fn get_news(
    State(state): State<AppState>,
    Path(date): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let summary = state.news_service.get_summary(&date).await?;

    Ok(negotiate(&headers, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};
    use axum_test::TestServer;
    use tldr_proto::{GetNewsSummaryResponse, ListNewsSummariesResponse};

    use crate::test_utils::{sample_summary_content, test_state, InMemorySummaryStore};

    fn server(store: InMemorySummaryStore) -> TestServer {
        TestServer::new(crate::build_router(test_state(store))).unwrap()
    }

    #[test]
    fn wants_protobuf_detects_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_protobuf(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        assert!(!wants_protobuf(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/x-protobuf, application/json;q=0.5"),
        );
        assert!(wants_protobuf(&headers));
    }

    #[tokio::test]
    async fn list_news_returns_json_summaries() {
        let server = server(
            InMemorySummaryStore::new()
                .with_summary("2025-05-06", "a")
                .with_summary("2025-05-07", "b"),
        );

        let response = server.get("/api/news").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            serde_json::json!({"summaries": [{"date": "2025-05-06"}, {"date": "2025-05-07"}]})
        );
    }

    #[tokio::test]
    async fn list_news_returns_protobuf_when_asked() {
        let server = server(InMemorySummaryStore::new().with_summary("2025-05-07", "b"));

        let response = server
            .get("/api/news")
            .add_header(
                header::ACCEPT,
                HeaderValue::from_static(PROTOBUF_MEDIA_TYPE),
            )
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE),
            HeaderValue::from_static(PROTOBUF_MEDIA_TYPE)
        );
        let decoded = ListNewsSummariesResponse::decode(response.as_bytes().as_ref()).unwrap();
        assert_eq!(decoded.summaries.len(), 1);
        assert_eq!(decoded.summaries[0].date, "2025-05-07");
    }

    #[tokio::test]
    async fn list_news_store_failure_is_500() {
        let server = server(InMemorySummaryStore::failing());

        let response = server.get("/api/news").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn get_news_returns_detail() {
        let server =
            server(InMemorySummaryStore::new().with_summary("2024-01-15", sample_summary_content()));

        let response = server.get("/api/news/2024-01-15").await;

        response.assert_status_ok();
        let detail: GetNewsSummaryResponse = response.json();
        assert_eq!(detail.date, "2024-01-15");
        assert_eq!(detail.content, sample_summary_content());
    }

    #[tokio::test]
    async fn get_news_missing_is_404() {
        let server = server(InMemorySummaryStore::new());

        let response = server.get("/api/news/2024-01-15").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn get_news_malformed_date_is_400() {
        let server = server(InMemorySummaryStore::new());

        let response = server.get("/api/news/yesterday").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn get_news_signed_or_unpadded_date_is_400() {
        let server = server(
            InMemorySummaryStore::new().with_summary("2025-01-01", sample_summary_content()),
        );

        for path in ["/api/news/+2025-1-01", "/api/news/%202025-1-01", "/api/news/2025-1-01"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn get_news_protobuf_round_trips_content() {
        let server =
            server(InMemorySummaryStore::new().with_summary("2024-01-15", sample_summary_content()));

        let response = server
            .get("/api/news/2024-01-15")
            .add_header(
                header::ACCEPT,
                HeaderValue::from_static(PROTOBUF_MEDIA_TYPE),
            )
            .await;

        let decoded = GetNewsSummaryResponse::decode(response.as_bytes().as_ref()).unwrap();
        assert_eq!(decoded.content, sample_summary_content());
    }
}
