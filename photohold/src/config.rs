//! Configuration loading for photohold.
//!
//! Configuration lives in an optional YAML file (`config.yaml` in the
//! data directory); the CLI layers its flags and environment variables on
//! top. Unknown keys are rejected so typos surface instead of silently
//! doing nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Application configuration.
///
/// # Examples
///
/// ```
/// use photohold::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// assert!(config.maximum_lock_wait_seconds.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Upper bound on how long a connection waits for the database lock,
    /// in seconds. Falls back to the built-in busy timeout when unset.
    #[serde(default)]
    pub maximum_lock_wait_seconds: Option<u64>,
}

/// Builder for loading [`Config`] from an optional file.
///
/// # Examples
///
/// ```no_run
/// use photohold::ConfigBuilder;
/// use std::path::Path;
///
/// let config = ConfigBuilder::new()
///     .with_file(Path::new("/home/user/.photohold/config.yaml"))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder with no configuration file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration file to load.
    ///
    /// A missing file is not an error; defaults apply.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn build(self) -> Result<Config> {
        match self.file {
            Some(ref path) if path.exists() => {
                let contents = std::fs::read_to_string(path)?;
                let config = serde_yaml::from_str(&contents)?;
                Ok(config)
            }
            _ => Ok(Config::default()),
        }
    }
}
