//! News service
//!
//! Turns stored summary objects into `tldr.news.v1` responses.

use std::sync::Arc;

use tldr_proto::{GetNewsSummaryResponse, ListNewsSummariesResponse, NewsSummary};

use crate::domain::entities::summary::date_from_file_name;
use crate::domain::entities::SummaryDate;
use crate::domain::ports::SummaryStore;
use crate::error::DomainError;

/// Service for reading stored summaries
pub struct NewsService<S>
where
    S: SummaryStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> NewsService<S>
where
    S: SummaryStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every stored summary, in store order
    pub async fn list_summaries(&self) -> Result<ListNewsSummariesResponse, DomainError> {
        let file_names = self.store.list().await?;

        let summaries = file_names
            .iter()
            .map(|name| NewsSummary::new(date_from_file_name(name)))
            .collect();

        Ok(ListNewsSummariesResponse::new(summaries))
    }

    /// Fetch one summary by its `YYYY-MM-DD` date
    pub async fn get_summary(&self, raw_date: &str) -> Result<GetNewsSummaryResponse, DomainError> {
        let date = SummaryDate::parse(raw_date)?;

        tracing::debug!("Fetching news object with key: {}", date.key());

        let content = self
            .store
            .get(&date)
            .await?
            .ok_or_else(|| DomainError::NotFound(date.key().to_string()))?;

        Ok(GetNewsSummaryResponse::new(date.to_string(), content))
    }
}
