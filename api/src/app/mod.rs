//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod news_service;

pub use news_service::NewsService;
