//! Native client library search path handling.
//!
//! The embedded engine needs a native shared library at runtime. The bundled
//! library directory is resolved to an absolute path and published through a
//! process-global environment variable. Publication is isolated here so that
//! tests exercising the configurer through a fake engine manager never touch
//! process-global state.

use std::env;
use std::path::Path;
use std::path::PathBuf;

use tracing::info;

use crate::errors::ConfigurationError;
use crate::Result;

/// Environment variable through which the resolved library directory is
/// published.
pub const LIBRARY_PATH_VAR: &str = "FIREBIRD_LIBRARY_PATH";

/// Resolves the bundled native library directory to an absolute path.
pub fn resolve_library_dir(dir: &Path) -> Result<PathBuf> {
    dir.canonicalize().map_err(|e| {
        ConfigurationError::NativeLibraryPath {
            path: dir.to_path_buf(),
            source: e,
        }
        .into()
    })
}

/// Publishes the native library search path for the embedded client library.
///
/// Process-global; persists for the process lifetime and is not undone on
/// shutdown.
pub fn publish_library_path(path: &Path) {
    info!(
        "attempting to set {} to: {}",
        LIBRARY_PATH_VAR,
        path.display()
    );
    env::set_var(LIBRARY_PATH_VAR, path);
}
