//! tl;dr news wire messages
//!
//! Rust bindings for `proto/news.proto` (package `tldr.news.v1`).
//! Every message speaks two encodings:
//! - JSON via serde, with protobuf JSON defaults (absent or `null` fields decode to empty values)
//! - binary protocol buffers via prost
//!
//! Each message also describes its JSON shape through schemars, which consumers use to
//! validate untrusted JSON before decoding it.

pub mod news;

pub use news::{GetNewsSummaryResponse, ListNewsSummariesResponse, NewsSummary};

/// Media type for JSON-encoded messages
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Media type for binary protobuf-encoded messages
pub const PROTOBUF_MEDIA_TYPE: &str = "application/x-protobuf";

/// Fully-qualified protobuf package name
pub const PACKAGE: &str = "tldr.news.v1";
