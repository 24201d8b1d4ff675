use std::env;

use anyhow::{bail, Context, Result};

/// Encoding the reader asks the API for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    #[default]
    Json,
    Protobuf,
}

impl WireFormat {
    pub fn media_type(&self) -> &'static str {
        match self {
            WireFormat::Json => tldr_proto::JSON_MEDIA_TYPE,
            WireFormat::Protobuf => tldr_proto::PROTOBUF_MEDIA_TYPE,
        }
    }
}

impl std::str::FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(WireFormat::Json),
            "protobuf" | "proto" => Ok(WireFormat::Protobuf),
            _ => Err(format!("Unknown wire format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Base URL of the news API host (read once at startup)
    pub api_url: String,
    pub host: String,
    pub port: u16,
    pub wire_format: WireFormat,
}

impl ReaderConfig {
    /// Load configuration from the environment
    ///
    /// Required env vars:
    /// - API_URL: Base URL of the news API (e.g., https://tldr.solanyn.dev)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_url = env::var("API_URL").context("API_URL not set")?;
        if api_url.trim().is_empty() {
            bail!("API_URL is empty");
        }

        let wire_format = match env::var("TLDR_WIRE_FORMAT") {
            Ok(raw) => raw.parse().map_err(anyhow::Error::msg)?,
            Err(_) => WireFormat::default(),
        };

        Ok(Self {
            api_url,
            host: env::var("READER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("READER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            wire_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
