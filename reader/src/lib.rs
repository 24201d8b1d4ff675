//! Reader for the tl;dr news API
//!
//! Fetches daily summaries over JSON or protobuf, validates JSON payloads against
//! schemas derived from the wire messages, and renders them as server-side HTML pages.

pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod schema;
pub mod server;
pub mod views;

pub use client::{NewsClient, SummaryDetail, SummaryReference};
pub use config::{ReaderConfig, WireFormat};
pub use error::{ReaderError, SchemaError};
pub use server::{router, ReaderState};
