//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// Maximum JSON request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_size: default_max_body_size(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

/// Cross-origin access for browser consoles
///
/// Disabled unless `enabled` is set. An empty origin list or a `*` entry
/// admits any origin, which cannot be combined with credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    /// Preflight cache lifetime in seconds
    #[serde(default = "default_preflight_max_age")]
    pub max_age: u32,
    #[serde(default)]
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            max_age: default_preflight_max_age(),
            allow_credentials: false,
        }
    }
}

/// Origins a CORS layer should admit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    Listed(Vec<String>),
}

impl CorsConfig {
    /// Origins to admit, or an error when the settings contradict each other
    pub fn resolve(&self) -> Result<CorsOrigins, String> {
        let any = self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*");
        if !any {
            return Ok(CorsOrigins::Listed(self.allowed_origins.clone()));
        }
        if self.enabled && self.allow_credentials {
            return Err("cors.allow_credentials requires explicit cors.allowed_origins".to_string());
        }
        Ok(CorsOrigins::Any)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.resolve().map(|_| ())
    }
}

fn default_preflight_max_age() -> u32 {
    3600
}
