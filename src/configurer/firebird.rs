//! The embedded Firebird configurer.
//!
//! ## Key Responsibilities
//! - Owns the process-wide singleton handle to the engine manager
//! - Populates connection properties for the fixed database location
//! - Drives the engine lifecycle: start, create database, drop database, stop
//!
//! The caller is expected to serialize `configure`/`shutdown` pairs; the only
//! guarded concurrency concern is first-time construction of the singleton.

use std::sync::Arc;

use lazy_static::lazy_static;
use tracing::info;

use super::native_library::publish_library_path;
use super::native_library::resolve_library_dir;
use super::ConnectionProperties;
use super::EmbeddedDatabaseConfigurer;
use crate::config::FirebirdConfig;
use crate::manager::EngineManager;
use crate::manager::EngineState;
use crate::manager::FileEngineManager;
use crate::utils::ensure_parent_dir;
use crate::Result;

/// Driver identifier published in the connection properties, consumed by
/// downstream JDBC-style connection establishment.
pub const DRIVER_CLASS: &str = "org.firebirdsql.jdbc.FBDriver";

lazy_static! {
    static ref INSTANCE: Arc<FirebirdEmbeddedConfigurer> =
        Arc::new(FirebirdEmbeddedConfigurer::new(FirebirdConfig::default()));
}

/// Configurer for a single embedded Firebird database instance.
pub struct FirebirdEmbeddedConfigurer {
    config: FirebirdConfig,
    manager: Box<dyn EngineManager>,
}

impl FirebirdEmbeddedConfigurer {
    /// Returns the process-wide configurer instance, lazily constructed on
    /// first access. Concurrent first callers observe the same instance.
    /// Construction performs no I/O.
    pub fn instance() -> Arc<FirebirdEmbeddedConfigurer> {
        INSTANCE.clone()
    }

    /// Builds a configurer backed by the default file engine manager.
    pub fn new(config: FirebirdConfig) -> Self {
        Self::with_manager(config, Box::new(FileEngineManager::new()))
    }

    /// Builds a configurer backed by a custom engine manager.
    pub fn with_manager(config: FirebirdConfig, manager: Box<dyn EngineManager>) -> Self {
        Self { config, manager }
    }

    /// Current lifecycle state of the underlying engine manager.
    pub fn engine_state(&self) -> EngineState {
        self.manager.state()
    }

    fn build_url(&self) -> String {
        format!(
            "jdbc:firebirdsql:embedded:{}?charSet={}",
            self.config.database.path.display(),
            self.config.database.charset
        )
    }
}

impl EmbeddedDatabaseConfigurer for FirebirdEmbeddedConfigurer {
    fn configure_connection_properties(
        &self,
        properties: &mut ConnectionProperties,
        _database_name: &str,
    ) -> Result<()> {
        properties.driver = DRIVER_CLASS.to_string();
        properties.url = self.build_url();
        properties.username = self.config.database.username.clone();
        properties.password = String::new();

        let library_dir = resolve_library_dir(&self.config.native.library_dir)?;
        publish_library_path(&library_dir);

        info!("embedded firebird - starting");
        self.manager.start()?;

        ensure_parent_dir(&self.config.database.path)?;
        self.manager.create_database(
            &self.config.database.path,
            &self.config.database.username,
            "",
        )?;
        info!("embedded firebird - started");
        Ok(())
    }

    fn shutdown(
        &self,
        _data_source: Option<&ConnectionProperties>,
        _database_name: &str,
    ) -> Result<()> {
        info!("embedded firebird - closing");
        // A drop failure propagates immediately; stop is not attempted then.
        self.manager.drop_database(
            &self.config.database.path,
            &self.config.database.username,
            "",
        )?;
        self.manager.stop()?;
        info!("embedded firebird - closed");
        Ok(())
    }
}
