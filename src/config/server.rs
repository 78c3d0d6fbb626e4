use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: num_cpus::get() * 2,
        }
    }

    /// Read SERVER_HOST, SERVER_PORT and SERVER_WORKERS
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("SERVER_PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| AppError::configuration(format!("Invalid SERVER_PORT: {}", value)))?,
            None => 8080,
        };

        let mut config = Self::new(host, port);
        if let Some(value) = lookup("SERVER_WORKERS") {
            config.workers = value.parse().map_err(|_| {
                AppError::configuration(format!("Invalid SERVER_WORKERS: {}", value))
            })?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
