use super::ConnectionProperties;
use crate::Result;

/// Narrow interface through which container/bootstrap code drives the
/// embedded database lifecycle.
pub trait EmbeddedDatabaseConfigurer: Send + Sync {
    /// Populates `properties` with everything needed to connect to the
    /// embedded database, then brings the engine up and creates the database
    /// file if absent.
    ///
    /// `database_name` is accepted for interface compatibility; this
    /// configurer manages a single fixed location per process and does not
    /// derive the path from the name.
    ///
    /// Expected to be called once per process. Calling it twice without an
    /// intervening `shutdown` is caller responsibility and yields undefined
    /// engine-manager behavior.
    fn configure_connection_properties(
        &self,
        properties: &mut ConnectionProperties,
        database_name: &str,
    ) -> Result<()>;

    /// Drops the database, then stops the engine.
    ///
    /// `data_source` and `database_name` are accepted for contract symmetry
    /// only; the configured fixed path and user are used. A drop failure is
    /// raised immediately and the engine is NOT stopped in that case — the
    /// ordering is kept for compatibility with the original design even
    /// though it can leave the engine running.
    fn shutdown(
        &self,
        data_source: Option<&ConnectionProperties>,
        database_name: &str,
    ) -> Result<()>;
}
