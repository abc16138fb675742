//! Configuration module
//!
//! All runtime configuration is loaded once at startup into an explicit
//! struct. Business logic never reads the environment directly.

use std::env;

const DEFAULT_SERVER_PORT: u16 = 5000;
const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    /// External analysis webhook endpoint. The only outbound dependency.
    pub webhook_url: String,
    /// Total bound for a single webhook call, in seconds.
    pub webhook_timeout_secs: u64,
    /// Upper bound for the request body, enforced at the router layer.
    pub max_upload_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let webhook_url = env::var("N8N_WEBHOOK_URL")
            .map_err(|_| anyhow::anyhow!("N8N_WEBHOOK_URL must be set"))?;

        Ok(Self {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT),
            cors_origins: env_list("CORS_ORIGINS", &["*"]),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            webhook_url,
            webhook_timeout_secs: env_parse("WEBHOOK_TIMEOUT_SECS", DEFAULT_WEBHOOK_TIMEOUT_SECS),
            max_upload_size_bytes: env_parse(
                "MAX_UPLOAD_SIZE_BYTES",
                DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            ),
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_list(key: &str, default: &[&str]) -> Vec<String> {
    env::var(key)
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_else(|_| default.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            webhook_url: "http://localhost:5678/webhook/analyze".to_string(),
            webhook_timeout_secs: DEFAULT_WEBHOOK_TIMEOUT_SECS,
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
        }
    }

    #[test]
    fn test_is_production() {
        let mut config = test_config();
        assert!(!config.is_production());

        config.environment = "production".to_string();
        assert!(config.is_production());

        config.environment = "PROD".to_string();
        assert!(config.is_production());
    }

    #[test]
    fn test_defaults() {
        let config = test_config();
        assert_eq!(config.webhook_timeout_secs, 30);
        assert_eq!(config.max_upload_size_bytes, 16 * 1024 * 1024);
    }
}
