//! Graph assertions

use opdep_core::{DependencyGraph, DependencyType, OperationId};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

/// Assert the exact dependency set of `op`
pub fn assert_dependencies(graph: &DependencyGraph, op: OperationId, expected: &[OperationId]) {
    let expected: BTreeSet<OperationId> = expected.iter().copied().collect();
    assert_eq!(
        graph.dependency_set(op),
        expected,
        "dependency set of {} differs",
        op
    );
}

/// Assert an edge exists with the given provenance
pub fn assert_edge_type(
    graph: &DependencyGraph,
    dependent: OperationId,
    dependency: OperationId,
    expected: DependencyType,
) {
    assert_eq!(
        graph.dependency_type(dependent, dependency),
        Some(expected),
        "edge {} -> {}",
        dependent,
        dependency
    );
}
