use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::client::NewsClient;
use crate::views::{
    display_date, render_page, render_sidebar, render_summary, render_welcome, SITE_TITLE,
};

#[derive(Clone)]
pub struct ReaderState {
    pub client: NewsClient,
}

impl ReaderState {
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }
}

pub fn router(state: ReaderState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/news", get(index))
        .route("/news/:date", get(summary))
        .route("/healthz", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// GET / and GET /news
async fn index(State(state): State<ReaderState>) -> Response {
    let summaries = state.client.fetch_summary_list().await;
    let status = if summaries.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    let page = render_page(
        SITE_TITLE,
        &render_sidebar(&summaries, None),
        &render_welcome(),
    );
    (status, Html(page)).into_response()
}

/// GET /news/:date
async fn summary(State(state): State<ReaderState>, Path(date): Path<String>) -> Response {
    let (summaries, detail) = tokio::join!(
        state.client.fetch_summary_list(),
        state.client.fetch_summary_detail(&date),
    );

    if let Err(e) = &detail {
        tracing::debug!(date = %date, kind = e.kind(), "summary unavailable");
    }
    let status = if detail.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    let title = format!("tl;dr on {}", display_date(&date));
    let page = render_page(
        &title,
        &render_sidebar(&summaries, Some(&date)),
        &render_summary(&date, &detail),
    );
    (status, Html(page)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WireFormat;
    use axum::http::header;
    use axum_test::TestServer;

    async fn spawn_api(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn fake_api() -> Router {
        Router::new()
            .route(
                "/api/news",
                get(|| async {
                    (
                        [(header::CONTENT_TYPE, "application/json")],
                        r#"{"summaries":[{"date":"2024-01-15"},{"date":"2024-01-14"}]}"#,
                    )
                }),
            )
            .route(
                "/api/news/2024-01-15",
                get(|| async {
                    (
                        [(header::CONTENT_TYPE, "application/json")],
                        r##"{"date":"2024-01-15","content":"# Major AI Breakthrough\n\nDetails."}"##,
                    )
                }),
            )
    }

    async fn reader_for(api: Router) -> TestServer {
        let base_url = spawn_api(api).await;
        let client = NewsClient::new(&base_url, WireFormat::Json).unwrap();
        TestServer::new(router(ReaderState::new(client))).unwrap()
    }

    #[tokio::test]
    async fn index_lists_summaries() {
        let server = reader_for(fake_api()).await;

        let response = server.get("/").await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("January 15th, 2024"));
        assert!(body.contains("January 14th, 2024"));
        assert!(body.contains("Pick a day"));
    }

    #[tokio::test]
    async fn news_path_serves_index() {
        let server = reader_for(fake_api()).await;

        let response = server.get("/news").await;

        response.assert_status_ok();
        assert!(response.text().contains(r#"href="/news/2024-01-15""#));
    }

    #[tokio::test]
    async fn summary_page_renders_content() {
        let server = reader_for(fake_api()).await;

        let response = server.get("/news/2024-01-15").await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("<title>tl;dr on January 15th, 2024</title>"));
        assert!(body.contains("<h1>Major AI Breakthrough</h1>"));
        assert!(body.contains(r#"<li class="selected">"#));
    }

    #[tokio::test]
    async fn missing_summary_shows_content_error() {
        let server = reader_for(fake_api()).await;

        let response = server.get("/news/2023-12-31").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body = response.text();
        assert!(body.contains("Failed to load content"));
        // sidebar still loads
        assert!(body.contains("January 15th, 2024"));
    }

    #[tokio::test]
    async fn failing_api_shows_list_error() {
        let api = Router::new().route(
            "/api/news",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let server = reader_for(api).await;

        let response = server.get("/").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(response.text().contains("Failed to load summaries"));
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let server = reader_for(fake_api()).await;

        let response = server.get("/healthz").await;

        response.assert_status_ok();
        response.assert_text("OK");
    }
}
