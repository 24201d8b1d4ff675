//! Filesystem adapter for SummaryStore
//!
//! Lays summaries out the way the object store does: `<root>/news/<date>.md`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::entities::summary::{SUMMARY_PREFIX, SUMMARY_SUFFIX};
use crate::domain::entities::SummaryDate;
use crate::domain::ports::SummaryStore;
use crate::error::StorageError;

/// Filesystem implementation of SummaryStore
pub struct FsSummaryStore {
    root: PathBuf,
}

impl FsSummaryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn news_dir(&self) -> PathBuf {
        self.root.join(SUMMARY_PREFIX.trim_end_matches('/'))
    }
}

#[async_trait]
impl SummaryStore for FsSummaryStore {
    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut entries = match tokio::fs::read_dir(self.news_dir()).await {
            Ok(entries) => entries,
            // An empty bucket has no prefix yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                tracing::warn!("Skipping non UTF-8 summary file name: {:?}", name);
                continue;
            };
            if name.ends_with(SUMMARY_SUFFIX) {
                names.push(name.to_string());
            }
        }

        // Object stores list keys in lexicographic order
        names.sort();
        Ok(names)
    }

    async fn get(&self, date: &SummaryDate) -> Result<Option<String>, StorageError> {
        let path = self.root.join(date.key().as_str());
        match tokio::fs::read(&path).await {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| StorageError::InvalidEncoding(date.key().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
