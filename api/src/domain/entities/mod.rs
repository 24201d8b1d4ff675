//! Domain entities

pub mod summary;

pub use summary::{SummaryDate, SummaryKey};
