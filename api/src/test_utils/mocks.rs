//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::summary::SUMMARY_SUFFIX;
use crate::domain::entities::SummaryDate;
use crate::domain::ports::SummaryStore;
use crate::error::StorageError;

// ============================================================================
// In-Memory Summary Store
// ============================================================================

#[derive(Default)]
pub struct InMemorySummaryStore {
    /// file name -> content, ordered like an object-store listing
    objects: Arc<RwLock<BTreeMap<String, String>>>,
    fail: bool,
}

impl InMemorySummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with an I/O error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a summary for testing
    pub fn with_summary(self, date: &str, content: &str) -> Self {
        self.objects
            .write()
            .unwrap()
            .insert(format!("{}{}", date, SUMMARY_SUFFIX), content.to_string());
        self
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store unavailable",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SummaryStore for InMemorySummaryStore {
    async fn list(&self) -> Result<Vec<String>, StorageError> {
        self.check()?;
        Ok(self.objects.read().unwrap().keys().cloned().collect())
    }

    async fn get(&self, date: &SummaryDate) -> Result<Option<String>, StorageError> {
        self.check()?;
        let name = format!("{}{}", date, SUMMARY_SUFFIX);
        Ok(self.objects.read().unwrap().get(&name).cloned())
    }
}
