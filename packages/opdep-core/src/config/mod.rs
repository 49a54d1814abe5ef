//! Configuration for dependency graph construction
//!
//! Two ways in:
//! - Builder API: `DependencyGraphConfig::default().include_data(false)`
//! - YAML (versioned schema):
//!
//! ```yaml
//! version: 1
//! dependency_graph:
//!   include_sequencing: true
//!   include_data: true
//!   max_nodes: 50000
//! ```

pub mod dependency_config;
pub mod error;
pub mod io;
pub mod validation;

pub use dependency_config::DependencyGraphConfig;
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
pub use validation::Validatable;
