//! Database configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_path() -> String {
    "lexi.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file. `:memory:` is accepted for
    /// throwaway instances.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether this config points at an in-memory database.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "lexi.db");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn in_memory_detection() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
        };
        assert!(config.is_in_memory());
    }
}
