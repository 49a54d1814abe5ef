//! Dependency Graph Ports
//!
//! - `DependencyAnalyzer`: turns a procedure body into a graph
//! - `DependencyGraphPort`: read-only surface consumed by presentation layers

use crate::errors::Result;
use crate::features::dependency_graph::infrastructure::DependencyGraph;
use crate::shared::models::{OperationId, ProcedureBody};
use std::collections::BTreeSet;

/// Builds a dependency graph for one body
///
/// Implementations must keep all traversal state call-local so that one
/// analyzer can be shared across threads.
pub trait DependencyAnalyzer: Send + Sync {
    fn analyze(&self, body: &ProcedureBody) -> Result<DependencyGraph>;
}

/// Read-only graph queries
pub trait DependencyGraphPort: Send + Sync {
    /// Every node, in first-seen order
    fn node_ids(&self) -> Vec<OperationId>;

    /// Direct dependencies of `node` (empty if unknown)
    fn dependencies(&self, node: OperationId) -> BTreeSet<OperationId>;
}

impl DependencyGraphPort for DependencyGraph {
    fn node_ids(&self) -> Vec<OperationId> {
        self.nodes().collect()
    }

    fn dependencies(&self, node: OperationId) -> BTreeSet<OperationId> {
        self.dependency_set(node)
    }
}
