//! Store configuration.
//!
//! # Responsibility
//! - Describe where the SQLite file lives and how the pool is sized.
//! - Provide defaults so partial config documents deserialize cleanly.
//!
//! # Invariants
//! - `max_connections` is at least 1.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

const DEFAULT_DB_FILE: &str = "todo.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 8;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Invalid store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroConnections,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroConnections => write!(f, "max_connections must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Connection settings for the list store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file.
    pub path: PathBuf,
    /// Pool ceiling shared by all concurrent callers.
    pub max_connections: u32,
    /// How long a connection waits on a locked database.
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_FILE),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Default settings pointed at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_connections == 0 {
            return Err(ConfigError::ZeroConnections);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, StoreConfig};
    use std::path::PathBuf;

    #[test]
    fn new_keeps_defaults_except_path() {
        let config = StoreConfig::new("/tmp/lists.db");
        assert_eq!(config.path, PathBuf::from("/tmp/lists.db"));
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.busy_timeout_ms, 5_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_connections_is_rejected() {
        let config = StoreConfig {
            max_connections: 0,
            ..StoreConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroConnections));
    }
}
