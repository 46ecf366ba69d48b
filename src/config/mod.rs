//! Configuration for the embedded Firebird instance.
//!
//! Provides hierarchical configuration loading with:
//! - Default values as code base (the fixed embedded-example constants)
//! - Configuration file specified by `CONFIG_PATH`
//! - Environment variable overrides (highest priority)

#[cfg(test)]
mod config_test;

use std::env;
use std::path::PathBuf;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Main configuration container for the embedded database configurer.
///
/// The defaults reproduce the fixed location the configurer was designed
/// around: one database file under `target/`, owned by `sysdba` with an empty
/// password. Overrides exist for tests and local setups, not for running
/// several instances side by side.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct FirebirdConfig {
    /// Database file location and credentials
    pub database: DatabaseConfig,
    /// Native client library settings
    pub native: NativeLibraryConfig,
}

/// Database file location and connection credentials
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Path of the database file; the parent directory is created on demand
    ///
    /// Default: `default_db_path()` (target/embedded-example.fdb)
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// Database owner account
    ///
    /// Default: `default_username()` (sysdba)
    #[serde(default = "default_username")]
    pub username: String,

    /// Connection character set advertised in the URL
    ///
    /// Default: `default_charset()` (utf-8)
    #[serde(default = "default_charset")]
    pub charset: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            username: default_username(),
            charset: default_charset(),
        }
    }
}

/// Location of the bundled native client library
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NativeLibraryConfig {
    /// Directory holding the embedded Firebird client library; resolved to an
    /// absolute path and published process-wide during `configure`
    ///
    /// Default: `default_library_dir()` (firebird)
    #[serde(default = "default_library_dir")]
    pub library_dir: PathBuf,
}

impl Default for NativeLibraryConfig {
    fn default() -> Self {
        Self {
            library_dir: default_library_dir(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("target/embedded-example.fdb")
}

fn default_username() -> String {
    "sysdba".to_string()
}

fn default_charset() -> String {
    "utf-8".to_string()
}

fn default_library_dir() -> PathBuf {
    PathBuf::from("firebird")
}

impl FirebirdConfig {
    /// Loads configuration from hierarchical sources without validation.
    ///
    /// Configuration sources are merged in the following order (later sources
    /// override earlier):
    /// 1. Type defaults (lowest priority)
    /// 2. Configuration file from `CONFIG_PATH` environment variable (if set)
    /// 3. Environment variables with `FIREBIRD__` prefix (highest priority)
    ///
    /// Callers should run `validate()` on the result before using it.
    pub fn new() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Ok(config_path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&config_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("FIREBIRD")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validates configuration consistency
    ///
    /// # Errors
    /// Returns `Error::Config` if any configuration rules are violated
    pub fn validate(self) -> Result<Self> {
        if self.database.path.as_os_str().is_empty() {
            return Err(Error::Config(ConfigError::Message(
                "database.path cannot be empty".into(),
            )));
        }
        if self.database.username.is_empty() {
            return Err(Error::Config(ConfigError::Message(
                "database.username cannot be empty".into(),
            )));
        }
        if self.database.charset.is_empty() {
            return Err(Error::Config(ConfigError::Message(
                "database.charset cannot be empty".into(),
            )));
        }
        Ok(self)
    }
}
