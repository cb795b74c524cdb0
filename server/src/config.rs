//! Configuration management for Order Desk.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Order storage configuration
    pub storage: StorageConfig,
    /// Metrics configuration
    pub metrics: MetricsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Tracing filter directives (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Order storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON document holding every order
    pub db_path: PathBuf,
}

/// Metrics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Install the Prometheus recorder and serve `/metrics`
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            server: ServerConfig {
                host: lookup("HOST")
                    .unwrap_or_else(|| "0.0.0.0".to_string()),
                port: lookup("PORT")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(3000),
                log_level: lookup("RUST_LOG")
                    .unwrap_or_else(|| "order_desk=info,tower_http=debug".to_string()),
            },
            storage: StorageConfig {
                db_path: lookup("ORDERS_DB_PATH")
                    .map_or_else(|| PathBuf::from("db.json"), PathBuf::from),
            },
            metrics: MetricsConfig {
                enabled: lookup("METRICS_ENABLED")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(false),
            },
        }
    }

    /// `host:port` to bind the HTTP listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.storage.db_path, PathBuf::from("db.json"));
        assert!(!config.metrics.enabled);
    }

    #[test]
    fn overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ORDERS_DB_PATH", "/var/lib/orders/db.json"),
            ("METRICS_ENABLED", "true"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(ToString::to_string));

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.storage.db_path, PathBuf::from("/var/lib/orders/db.json"));
        assert!(config.metrics.enabled);
    }

    #[test]
    fn unparseable_values_fall_back() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            "METRICS_ENABLED" => Some("yes".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 3000);
        assert!(!config.metrics.enabled);
    }
}
