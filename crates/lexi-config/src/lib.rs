//! # lexi-config
//!
//! Layered configuration loading for Lexi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEXI_*` prefix, `__` as separator)
//! 2. Project-level `.lexi/config.toml`
//! 3. User-level `~/.config/lexi/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEXI_DATABASE__PATH` -> `database.path`,
//! `LEXI_SERVER__PORT` -> `server.port`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lexi_config::LexiConfig;
//!
//! let config = LexiConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexiConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl LexiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the server
    /// binary and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lexi/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("LEXI_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexi").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` exists.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LexiConfig::default();
        assert_eq!(config.database.path, "lexi.db");
        assert_eq!(config.server.port, 5173);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_| {
            let config: LexiConfig = LexiConfig::figment().extract()?;
            assert_eq!(config.database.path, "lexi.db");
            assert_eq!(config.server.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LEXI_DATABASE__PATH", "/tmp/words.db");
            jail.set_env("LEXI_SERVER__PORT", "8080");
            let config: LexiConfig = LexiConfig::figment().extract()?;
            assert_eq!(config.database.path, "/tmp/words.db");
            assert_eq!(config.server.port, 8080);
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".lexi")?;
            jail.create_file(
                ".lexi/config.toml",
                r#"
                [database]
                path = "project.db"

                [server]
                port = 9000
                "#,
            )?;
            jail.set_env("LEXI_SERVER__PORT", "9001");
            let config: LexiConfig = LexiConfig::figment().extract()?;
            assert_eq!(config.database.path, "project.db");
            assert_eq!(config.server.port, 9001);
            Ok(())
        });
    }
}
