//! Database configuration and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for database connections.
///
/// Contains all parameters needed to open and configure a database
/// connection: the database file path, lock timeout, and access modes.
///
/// # Examples
///
/// ```
/// use photohold::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/photohold.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the connection waits on a
    /// locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory for photohold.
///
/// The default is `~/.photohold`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".photohold"))
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$PHOTOHOLD_DATA_DIR/photohold.db` if `PHOTOHOLD_DATA_DIR` is set
/// 2. `~/.photohold/photohold.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `PHOTOHOLD_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("PHOTOHOLD_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join("photohold.db"))
    } else {
        Ok(default_data_dir()?.join("photohold.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_with_busy_timeout() {
        let config =
            DatabaseConfig::new("/tmp/test.db").with_busy_timeout(Duration::from_millis(10000));
        assert_eq!(config.busy_timeout, Duration::from_millis(10000));
    }

    #[test]
    fn test_config_read_only() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_default_data_dir() {
        if home::home_dir().is_some() {
            let dir = default_data_dir().unwrap();
            assert!(dir.ends_with(".photohold"));
        }
    }

    #[test]
    #[serial]
    fn test_resolve_database_path() {
        let saved = std::env::var("PHOTOHOLD_DATA_DIR").ok();

        std::env::remove_var("PHOTOHOLD_DATA_DIR");
        if home::home_dir().is_some() {
            let path = resolve_database_path().unwrap();
            assert!(path.ends_with("photohold.db"));
        }

        std::env::set_var("PHOTOHOLD_DATA_DIR", "/custom/data");
        let path = resolve_database_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/data/photohold.db"));

        match saved {
            Some(val) => std::env::set_var("PHOTOHOLD_DATA_DIR", val),
            None => std::env::remove_var("PHOTOHOLD_DATA_DIR"),
        }
    }
}
