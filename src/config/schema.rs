//! Configuration schema definitions.
//!
//! All types derive Serde traits so the same structure deserializes from a
//! TOML file and accepts CLI flag overrides.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,

    /// Backend database settings.
    pub database: DatabaseConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1").
    pub listen_address: String,

    /// Listen port.
    pub listen_port: u16,

    /// Enable debug logging (sensitive data may reach the log).
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "127.0.0.1".to_string(),
            listen_port: 8080,
            debug: false,
        }
    }
}

/// Backend database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Driver name; must be a scheme the Any pool supports.
    pub driver: String,

    /// Server hostname or IP address. Required.
    pub hostname: String,

    /// Server port.
    pub port: u16,

    /// Named instance (optional; carried as a query parameter).
    pub instance: Option<String>,

    /// Schema (database) name. Required.
    pub schema: String,

    /// Username. Required.
    pub user: String,

    /// Password. Required; never logged unredacted.
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: "postgres".to_string(),
            hostname: String::new(),
            port: 5432,
            instance: None,
            schema: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

impl ServerConfig {
    /// Socket address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_address, self.listen_port)
    }
}
