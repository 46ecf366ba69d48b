use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::Result;

/// Lifecycle states of the managed engine.
///
/// Happy path: `Uninitialized → Started → DatabaseCreated → DatabaseDropped →
/// Stopped`. No transition skips a predecessor; a failed step leaves the
/// machine in the state reached by the last successful step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Started,
    DatabaseCreated,
    DatabaseDropped,
    Stopped,
}

/// Capability responsible for starting/stopping the embedded engine and
/// creating/dropping database files.
///
/// All methods are synchronous and run to completion or fail; implementations
/// guard their state internally so callers can share a handle.
#[cfg_attr(test, automock)]
pub trait EngineManager: Send + Sync + 'static {
    /// Starts the embedded engine.
    fn start(&self) -> Result<()>;

    /// Creates the database file at `path`, owned by `username`.
    fn create_database(&self, path: &Path, username: &str, password: &str) -> Result<()>;

    /// Drops the database file at `path`.
    fn drop_database(&self, path: &Path, username: &str, password: &str) -> Result<()>;

    /// Stops the embedded engine.
    fn stop(&self) -> Result<()>;

    /// Current lifecycle state of the managed engine.
    fn state(&self) -> EngineState;
}
