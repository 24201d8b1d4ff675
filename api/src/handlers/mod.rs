//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod news;
pub mod report;

pub use news::{get_news, list_news};
pub use report::report;
