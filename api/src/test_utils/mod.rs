//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Services are generic over their store; `AppState` erases it to
//! `dyn SummaryStore`, so handler tests run the real router against these mocks.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
