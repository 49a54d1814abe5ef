//! Dependency graph builder configuration

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_nodes`
pub const MAX_NODES_LIMIT: usize = 1_000_000;

/// Dependency Graph Configuration
///
/// Defaults reproduce the plain algorithm: both dependency rules on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyGraphConfig {
    /// Add edges to the immediate predecessor in the same block (default: true)
    pub include_sequencing: bool,

    /// Add edges from reads to the last writer of the symbol (default: true)
    pub include_data: bool,

    /// Maximum distinct operations per body (1..=1000000)
    pub max_nodes: usize,
}

impl DependencyGraphConfig {
    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_nodes == 0 || self.max_nodes > MAX_NODES_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_nodes",
                self.max_nodes,
                1,
                MAX_NODES_LIMIT,
                "Node limit must allow at least one operation",
            ));
        }

        if !self.include_sequencing && !self.include_data {
            return Err(ConfigError::Validation(
                "at least one of include_sequencing or include_data must be enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder: Set include_sequencing
    pub fn include_sequencing(mut self, v: bool) -> Self {
        self.include_sequencing = v;
        self
    }

    /// Builder: Set include_data
    pub fn include_data(mut self, v: bool) -> Self {
        self.include_data = v;
        self
    }

    /// Builder: Set max_nodes
    pub fn max_nodes(mut self, v: usize) -> Self {
        self.max_nodes = v;
        self
    }
}

impl Default for DependencyGraphConfig {
    fn default() -> Self {
        Self {
            include_sequencing: true,
            include_data: true,
            max_nodes: 100_000,
        }
    }
}

impl Validatable for DependencyGraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        DependencyGraphConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "DependencyGraphConfig"
    }
}
