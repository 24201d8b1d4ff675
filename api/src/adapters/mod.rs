//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod fs;

pub use fs::FsSummaryStore;
