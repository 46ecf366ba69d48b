//! Embedded Firebird Lifecycle Error Hierarchy
//!
//! Defines error types for the embedded database configurer, categorized by
//! configuration concerns and engine lifecycle steps. Every failure is fatal
//! to the calling operation and carries its originating cause; nothing is
//! retried or silently recovered at this layer.

use std::path::PathBuf;

use crate::manager::EngineState;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Resource and filesystem preparation failures around the database
    /// location and the native client library
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Engine-manager lifecycle step failures
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Settings loading and validation failures
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Native library directory could not be resolved to an absolute path
    #[error("cannot resolve native library directory: {path}")]
    NativeLibraryPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parent of the database path exists but is not a directory
    #[error("cannot create database file: {path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Parent directory creation failed
    #[error("failed to create database directory: {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One variant per lifecycle step, each wrapping the underlying engine or
/// filesystem failure.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("error starting embedded Firebird")]
    Start(#[source] EngineFault),

    #[error("error creating embedded Firebird database")]
    Create(#[source] EngineFault),

    #[error("error dropping embedded Firebird database")]
    Drop(#[source] EngineFault),

    #[error("error stopping embedded Firebird")]
    Stop(#[source] EngineFault),
}

/// Root cause of an engine lifecycle failure.
#[derive(Debug, thiserror::Error)]
pub enum EngineFault {
    /// Disk I/O failure while touching the database file
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The operation was attempted out of lifecycle order
    #[error("cannot {operation} while engine is {actual:?}")]
    InvalidState {
        operation: &'static str,
        actual: EngineState,
    },
}
