use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use parking_lot::Mutex;
use tracing::debug;

use super::EngineManager;
use super::EngineState;
use crate::errors::EngineError;
use crate::errors::EngineFault;
use crate::Result;

/// Magic header written at the start of every database file this manager
/// creates.
const DB_MAGIC: &[u8] = b"FBEMBED1";

/// In-process engine manager backing the configurer.
///
/// Stands in for the native Firebird embedded manager: it tracks the engine
/// lifecycle and materializes create/drop as filesystem operations on the
/// database file. Every operation validates the current [`EngineState`] and
/// reports the step-specific [`EngineError`] on failure, leaving the state
/// untouched.
pub struct FileEngineManager {
    state: Mutex<EngineState>,
}

impl FileEngineManager {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(EngineState::Uninitialized),
        }
    }

    fn invalid(operation: &'static str, actual: EngineState) -> EngineFault {
        EngineFault::InvalidState { operation, actual }
    }
}

impl Default for FileEngineManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineManager for FileEngineManager {
    fn start(&self) -> Result<()> {
        let mut state = self.state.lock();
        match *state {
            EngineState::Uninitialized | EngineState::Stopped => {
                *state = EngineState::Started;
                debug!("embedded engine manager started");
                Ok(())
            }
            actual => Err(EngineError::Start(Self::invalid("start", actual)).into()),
        }
    }

    fn create_database(&self, path: &Path, username: &str, _password: &str) -> Result<()> {
        let mut state = self.state.lock();
        if *state != EngineState::Started {
            return Err(EngineError::Create(Self::invalid("create database", *state)).into());
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| EngineError::Create(e.into()))?;
        file.write_all(DB_MAGIC)
            .map_err(|e| EngineError::Create(e.into()))?;

        *state = EngineState::DatabaseCreated;
        debug!(path = %path.display(), user = username, "database created");
        Ok(())
    }

    fn drop_database(&self, path: &Path, _username: &str, _password: &str) -> Result<()> {
        let mut state = self.state.lock();
        if *state != EngineState::DatabaseCreated {
            return Err(EngineError::Drop(Self::invalid("drop database", *state)).into());
        }

        fs::remove_file(path).map_err(|e| EngineError::Drop(e.into()))?;

        *state = EngineState::DatabaseDropped;
        debug!(path = %path.display(), "database dropped");
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        let mut state = self.state.lock();
        match *state {
            EngineState::Started | EngineState::DatabaseCreated | EngineState::DatabaseDropped => {
                *state = EngineState::Stopped;
                debug!("embedded engine manager stopped");
                Ok(())
            }
            actual => Err(EngineError::Stop(Self::invalid("stop", actual)).into()),
        }
    }

    fn state(&self) -> EngineState {
        *self.state.lock()
    }
}
