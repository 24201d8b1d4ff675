//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use crate::app::NewsService;
use crate::config::Config;
use crate::domain::ports::SummaryStore;
use crate::AppState;

use super::InMemorySummaryStore;

/// Markdown body used across tests
pub fn sample_summary_content() -> &'static str {
    "# Major AI Breakthrough\n\n\
     This week saw significant **advances** in natural language processing.\n\n\
     ## Key Points:\n\
     - 40% improvement in efficiency\n\
     - Better multilingual support\n"
}

/// Configuration that never touches the real environment
pub fn test_config() -> Config {
    Config {
        summaries_dir: "./data".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        allowed_cors: vec!["http://localhost:5173".to_string()],
    }
}

/// App state backed by the given in-memory store
pub fn test_state(store: InMemorySummaryStore) -> AppState {
    let store: Arc<dyn SummaryStore> = Arc::new(store);
    AppState {
        news_service: Arc::new(NewsService::new(store)),
        config: test_config(),
    }
}
