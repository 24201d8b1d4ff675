//! Summary store port trait
//!
//! Summaries are produced elsewhere and land in an object store as
//! `news/<date>.md`. The API only reads them.

use async_trait::async_trait;

use crate::domain::entities::SummaryDate;
use crate::error::StorageError;

/// Read-only access to stored daily summaries
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// List summary file names (e.g. `2025-05-07.md`) in store order
    async fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Fetch the Markdown content for a date, `None` if no summary exists
    async fn get(&self, date: &SummaryDate) -> Result<Option<String>, StorageError>;
}
