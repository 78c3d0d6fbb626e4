use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod server;
pub mod telemetry;

pub use server::ServerConfig;
pub use telemetry::{init_tracing, LogFormat};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => LogFormat::from_str(&value)?,
            None => LogFormat::Text,
        };

        Ok(Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format,
            },
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("SERVER_PORT must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "SERVER_WORKERS must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Default tracing filter, `RUST_LOG` takes precedence
    pub fn default_log_filter(&self) -> String {
        format!("netcost={},actix_web=info", self.app.log_level)
    }
}
