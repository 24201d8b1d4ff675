use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory holding `news/<date>.md` objects
    pub summaries_dir: String,
    pub server_host: String,
    pub server_port: u16,
    /// Origins allowed by CORS (empty = no cross-origin access)
    pub allowed_cors: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            summaries_dir: env::var("SUMMARIES_DIR").unwrap_or_else(|_| "./data".to_string()),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            allowed_cors: parse_cors(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_cors(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
