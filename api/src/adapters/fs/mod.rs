//! Filesystem adapters

pub mod summary_store;

pub use summary_store::FsSummaryStore;
