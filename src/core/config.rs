//! Server settings, read once at startup.
//!
//! Everything has a default; `MCP_*` environment variables (optionally from
//! a `.env` file) override them.

use super::transport::TransportConfig;
use crate::domains::catalog::ALBUMS_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Default location of the key-value document holding the album list.
pub const DEFAULT_ALBUMS_PATH: &str = "data/albums.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
    pub transport: TransportConfig,
}

/// Identity reported to clients on initialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

/// Where the album collection is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON key-value document on disk.
    pub albums_path: PathBuf,
    /// Key holding the album array inside that document.
    pub albums_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `album_list_mcp_server=debug`.
    pub level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            albums_path: PathBuf::from(DEFAULT_ALBUMS_PATH),
            albums_key: ALBUMS_KEY.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "pitchfork-list".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

/// Non-blank value of `name`, if set.
fn env_value(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if value.trim().is_empty() => {
            debug!("Ignoring blank {}", name);
            None
        }
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

impl Config {
    /// Defaults overridden by `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_ALBUMS_PATH`, `MCP_ALBUMS_KEY` and the transport variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Some(name) = env_value("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        if let Some(level) = env_value("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(path) = env_value("MCP_ALBUMS_PATH") {
            config.catalog.albums_path = PathBuf::from(path);
        }
        if let Some(key) = env_value("MCP_ALBUMS_KEY") {
            config.catalog.albums_key = key;
        }
        config.transport = TransportConfig::from_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests in this module mutate process-wide variables.
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "pitchfork-list");
        assert_eq!(config.catalog.albums_path, PathBuf::from("data/albums.json"));
        assert_eq!(config.catalog.albums_key, "albums");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_catalog_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ALBUMS_PATH", "/srv/lists/2000s.json");
            std::env::set_var("MCP_ALBUMS_KEY", "best_of_2000s");
        }
        let config = Config::from_env();
        assert_eq!(
            config.catalog.albums_path,
            PathBuf::from("/srv/lists/2000s.json")
        );
        assert_eq!(config.catalog.albums_key, "best_of_2000s");
        unsafe {
            std::env::remove_var("MCP_ALBUMS_PATH");
            std::env::remove_var("MCP_ALBUMS_KEY");
        }
    }

    #[test]
    fn test_blank_albums_key_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ALBUMS_KEY", "  ");
        }
        let config = Config::from_env();
        assert_eq!(config.catalog.albums_key, ALBUMS_KEY);
        unsafe {
            std::env::remove_var("MCP_ALBUMS_KEY");
        }
    }
}
