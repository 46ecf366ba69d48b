//! Lifecycle management for a single embedded Firebird database instance.
//!
//! The crate owns one concern: producing connection configuration for an
//! embedded Firebird database, starting the engine and creating the database
//! file on demand, and tearing it down (drop, then stop) on shutdown. It is
//! meant for throwaway databases in tests and local development, where exactly
//! one engine instance exists per process.
//!
//! ## Example
//! ```no_run
//! use firebird_embedded::ConnectionProperties;
//! use firebird_embedded::EmbeddedDatabaseConfigurer;
//! use firebird_embedded::FirebirdEmbeddedConfigurer;
//!
//! # fn main() -> firebird_embedded::Result<()> {
//! let configurer = FirebirdEmbeddedConfigurer::instance();
//!
//! let mut properties = ConnectionProperties::default();
//! configurer.configure_connection_properties(&mut properties, "example")?;
//! // hand `properties` to the connection layer, run the test workload...
//! configurer.shutdown(None, "example")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod configurer;
mod errors;
mod manager;
pub mod utils;

pub use config::*;
pub use configurer::*;
pub use errors::*;
pub use manager::*;
pub use utils::*;
