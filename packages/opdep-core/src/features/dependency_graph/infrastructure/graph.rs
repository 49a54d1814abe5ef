/*
 * Dependency Graph Container
 *
 * Node set + "depends on" edge set over operation handles.
 *
 * - petgraph GraphMap keyed by OperationId (no node duplication)
 * - Edge direction: dependent -> dependency
 * - Set semantics per pair; provenance merged on re-insertion
 * - Backward/forward slicing over the finished graph
 */

use crate::features::dependency_graph::domain::{
    DependencyEdge, DependencyGraphSummary, DependencyReason, DependencyType,
};
use crate::shared::models::{OperationId, SymbolId};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Serializable edge record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DependencyEdgeDto {
    pub dependent: OperationId,
    pub dependency: OperationId,
    pub dependency_type: DependencyType,
    pub symbols: Vec<SymbolId>,
}

/// Serializable DTO for DependencyGraph
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DependencyGraphDto {
    pub function_id: String,
    pub nodes: Vec<OperationId>,
    pub edges: Vec<DependencyEdgeDto>,
}

/// Dependency Graph
///
/// Every registered operation is a node, even without edges. Nodes iterate
/// in the order they were first registered.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraphMap<OperationId, DependencyEdge>,
    /// Function ID this graph belongs to
    pub function_id: String,
}

// Custom serde implementation via DTO
impl serde::Serialize for DependencyGraph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_dto().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for DependencyGraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let dto = DependencyGraphDto::deserialize(deserializer)?;
        Ok(DependencyGraph::from_dto(dto))
    }
}

impl DependencyGraph {
    /// Create new empty graph
    pub fn new(function_id: impl Into<String>) -> Self {
        DependencyGraph {
            graph: DiGraphMap::new(),
            function_id: function_id.into(),
        }
    }

    /// Register `op` if absent. Idempotent.
    pub fn add_node(&mut self, op: OperationId) {
        self.graph.add_node(op);
    }

    /// Record that `dependent` requires `dependency`.
    ///
    /// Both ends are registered. Returns `true` if the pair is new; adding an
    /// existing pair only merges `reason` into its provenance.
    pub fn add_dependency(
        &mut self,
        dependent: OperationId,
        dependency: OperationId,
        reason: DependencyReason,
    ) -> bool {
        self.add_node(dependent);
        self.add_node(dependency);

        if let Some(edge) = self.graph.edge_weight_mut(dependent, dependency) {
            edge.record(reason);
            return false;
        }

        self.graph
            .add_edge(dependent, dependency, DependencyEdge::new(reason));
        true
    }

    pub fn contains_node(&self, op: OperationId) -> bool {
        self.graph.contains_node(op)
    }

    pub fn contains_dependency(&self, dependent: OperationId, dependency: OperationId) -> bool {
        self.graph.contains_edge(dependent, dependency)
    }

    /// All nodes, first-registered first
    pub fn nodes(&self) -> impl Iterator<Item = OperationId> + '_ {
        self.graph.nodes()
    }

    /// Direct dependencies of `op` (empty for unknown nodes)
    pub fn dependencies_of(&self, op: OperationId) -> impl Iterator<Item = OperationId> + '_ {
        self.graph.neighbors_directed(op, Direction::Outgoing)
    }

    /// Direct dependencies of `op` as a set
    pub fn dependency_set(&self, op: OperationId) -> BTreeSet<OperationId> {
        self.dependencies_of(op).collect()
    }

    /// Operations that directly depend on `op`
    pub fn dependents_of(&self, op: OperationId) -> impl Iterator<Item = OperationId> + '_ {
        self.graph.neighbors_directed(op, Direction::Incoming)
    }

    /// Every node with its full dependency set
    pub fn dependency_map(&self) -> impl Iterator<Item = (OperationId, BTreeSet<OperationId>)> + '_ {
        self.nodes().map(move |op| (op, self.dependency_set(op)))
    }

    /// Provenance of a single pair
    pub fn edge(&self, dependent: OperationId, dependency: OperationId) -> Option<&DependencyEdge> {
        self.graph.edge_weight(dependent, dependency)
    }

    pub fn dependency_type(
        &self,
        dependent: OperationId,
        dependency: OperationId,
    ) -> Option<DependencyType> {
        self.edge(dependent, dependency).map(|e| e.dependency_type)
    }

    /// All edges as (dependent, dependency, provenance)
    pub fn edges(&self) -> impl Iterator<Item = (OperationId, OperationId, &DependencyEdge)> + '_ {
        self.graph.all_edges()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Underlying petgraph map, for running petgraph algorithms directly
    pub fn as_graph_map(&self) -> &DiGraphMap<OperationId, DependencyEdge> {
        &self.graph
    }

    /// Backward slice: every operation `target` transitively depends on
    ///
    /// BFS over dependency edges. `max_depth = Some(0)` yields only the target.
    /// Unknown targets yield an empty set.
    pub fn backward_slice(
        &self,
        target: OperationId,
        max_depth: Option<usize>,
    ) -> HashSet<OperationId> {
        self.slice_filtered(target, max_depth, true, true, Direction::Outgoing)
    }

    /// Backward slice following only the selected dependency kinds
    pub fn backward_slice_filtered(
        &self,
        target: OperationId,
        max_depth: Option<usize>,
        include_sequencing: bool,
        include_data: bool,
    ) -> HashSet<OperationId> {
        self.slice_filtered(
            target,
            max_depth,
            include_sequencing,
            include_data,
            Direction::Outgoing,
        )
    }

    /// Thin slice: backward slice over data dependencies only
    pub fn thin_slice(&self, target: OperationId, max_depth: Option<usize>) -> HashSet<OperationId> {
        self.slice_filtered(target, max_depth, false, true, Direction::Outgoing)
    }

    /// Forward slice: every operation that transitively depends on `source`
    pub fn forward_slice(
        &self,
        source: OperationId,
        max_depth: Option<usize>,
    ) -> HashSet<OperationId> {
        self.slice_filtered(source, max_depth, true, true, Direction::Incoming)
    }

    /// Forward slice following only the selected dependency kinds
    pub fn forward_slice_filtered(
        &self,
        source: OperationId,
        max_depth: Option<usize>,
        include_sequencing: bool,
        include_data: bool,
    ) -> HashSet<OperationId> {
        self.slice_filtered(
            source,
            max_depth,
            include_sequencing,
            include_data,
            Direction::Incoming,
        )
    }

    fn slice_filtered(
        &self,
        start: OperationId,
        max_depth: Option<usize>,
        include_sequencing: bool,
        include_data: bool,
        direction: Direction,
    ) -> HashSet<OperationId> {
        let max_depth = max_depth.unwrap_or(usize::MAX);
        let mut visited = HashSet::new();
        let mut worklist: VecDeque<(OperationId, usize)> = VecDeque::new();

        if !self.graph.contains_node(start) {
            return visited;
        }

        worklist.push_back((start, 0));

        while let Some((current, depth)) = worklist.pop_front() {
            if depth > max_depth || !visited.insert(current) {
                continue;
            }

            for next in self.graph.neighbors_directed(current, direction) {
                let edge = match direction {
                    Direction::Outgoing => self.graph.edge_weight(current, next),
                    Direction::Incoming => self.graph.edge_weight(next, current),
                };
                let should_follow = edge.map_or(false, |e| {
                    (include_sequencing && e.dependency_type.includes_sequencing())
                        || (include_data && e.dependency_type.includes_data())
                });

                if should_follow && !visited.contains(&next) {
                    worklist.push_back((next, depth + 1));
                }
            }
        }

        visited
    }

    /// Get statistics
    pub fn stats(&self) -> DependencyGraphStats {
        let mut stats = DependencyGraphStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            ..DependencyGraphStats::default()
        };

        for (_, _, edge) in self.graph.all_edges() {
            match edge.dependency_type {
                DependencyType::Sequencing => stats.sequencing_edges += 1,
                DependencyType::Data => stats.data_edges += 1,
                DependencyType::Both => stats.both_edges += 1,
            }
        }

        stats
    }

    pub fn summary(&self) -> DependencyGraphSummary {
        let stats = self.stats();
        DependencyGraphSummary {
            function_id: self.function_id.clone(),
            node_count: stats.node_count,
            sequencing_edges: stats.sequencing_edges + stats.both_edges,
            data_edges: stats.data_edges + stats.both_edges,
        }
    }

    pub fn to_dto(&self) -> DependencyGraphDto {
        DependencyGraphDto {
            function_id: self.function_id.clone(),
            nodes: self.graph.nodes().collect(),
            edges: self
                .graph
                .all_edges()
                .map(|(dependent, dependency, edge)| DependencyEdgeDto {
                    dependent,
                    dependency,
                    dependency_type: edge.dependency_type,
                    symbols: edge.symbols.iter().copied().collect(),
                })
                .collect(),
        }
    }

    pub fn from_dto(dto: DependencyGraphDto) -> Self {
        let mut graph = DependencyGraph::new(dto.function_id);

        for node in dto.nodes {
            graph.add_node(node);
        }

        for edge in dto.edges {
            graph.add_node(edge.dependent);
            graph.add_node(edge.dependency);
            graph.graph.add_edge(
                edge.dependent,
                edge.dependency,
                DependencyEdge {
                    dependency_type: edge.dependency_type,
                    symbols: edge.symbols.into_iter().collect(),
                },
            );
        }

        graph
    }

    /// JSON export of the DTO
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_dto())
    }
}

/// Dependency graph statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub sequencing_edges: usize,
    pub data_edges: usize,
    pub both_edges: usize,
}
