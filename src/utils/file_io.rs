use std::fs::create_dir_all;
use std::path::Path;

use tracing::debug;
use tracing::error;

use crate::errors::ConfigurationError;
use crate::Result;

/// Ensures the parent directory of `path` exists before a database file is
/// created there, creating missing ancestors on demand.
///
/// An existing non-directory occupying the parent path is a fatal
/// configuration error.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    if !parent.exists() {
        debug!("creating database directory: {}", parent.display());
        create_dir_all(parent).map_err(|e| {
            error!("failed to create database directory: {e:?}");
            ConfigurationError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            }
        })?;
    } else if !parent.is_dir() {
        return Err(ConfigurationError::NotADirectory {
            path: parent.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
