/*
 * Dependency Graph Builder
 *
 * Single forward pass over the blocks of one body:
 * - Sequencing: each operation depends on its predecessor in the same block
 * - Data: each read depends on the current last writer of the symbol
 *
 * The last-writer map is carried across block boundaries and overwritten
 * destructively. This is a linear approximation, not reaching definitions:
 * after a merge point a read only sees the writer from whichever block was
 * enumerated last, and loop back edges are never revisited.
 */

use crate::config::DependencyGraphConfig;
use crate::errors::{DependencyGraphError, Result};
use crate::features::dependency_graph::domain::DependencyReason;
use crate::features::dependency_graph::ports::DependencyAnalyzer;
use crate::shared::models::{OperationId, ProcedureBody, SymbolId};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::graph::DependencyGraph;

/// Traversal state left over after a build
#[derive(Debug, Clone, Default)]
pub struct BuildTrace {
    /// Operation -> its immediate predecessor in the same block
    pub previous_in_block: FxHashMap<OperationId, OperationId>,
    /// Symbol -> last operation that wrote it, at the end of the pass
    pub last_writer: FxHashMap<SymbolId, OperationId>,
    /// Assignments whose target did not resolve to a symbol
    pub unresolved_targets: Vec<OperationId>,
}

impl BuildTrace {
    pub fn previous_in_block(&self, op: OperationId) -> Option<OperationId> {
        self.previous_in_block.get(&op).copied()
    }

    pub fn last_writer(&self, symbol: SymbolId) -> Option<OperationId> {
        self.last_writer.get(&symbol).copied()
    }
}

/// Dependency Graph Builder
///
/// Holds configuration only; all traversal state is local to one `build`
/// call, so a single builder can serve many bodies concurrently.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraphBuilder {
    config: DependencyGraphConfig,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with a validated configuration
    pub fn with_config(config: DependencyGraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DependencyGraphConfig {
        &self.config
    }

    /// Build the dependency graph of `body`
    ///
    /// # Errors
    ///
    /// - `UnknownOperation` if a block lists a handle missing from the arena
    /// - `DuplicateOperation` if a handle appears more than once in the body
    /// - `NodeLimitExceeded` if the body has more than `max_nodes` operations
    pub fn build(&self, body: &ProcedureBody) -> Result<DependencyGraph> {
        self.build_with_trace(body).map(|(graph, _)| graph)
    }

    /// Same as `build`, also returning the traversal state
    pub fn build_with_trace(&self, body: &ProcedureBody) -> Result<(DependencyGraph, BuildTrace)> {
        debug!(
            function = %body.name,
            blocks = body.cfg.blocks.len(),
            "building dependency graph"
        );

        let mut graph = DependencyGraph::new(body.name.clone());
        let mut state = BuildTrace::default();
        let mut visited: FxHashSet<OperationId> = FxHashSet::default();

        for block in &body.cfg.blocks {
            debug!(block = block.ordinal, operations = block.operations.len(), "block");

            let mut prev_op: Option<OperationId> = None;

            for &op_id in &block.operations {
                let operation = body.operations.get(op_id).ok_or_else(|| {
                    DependencyGraphError::unknown_operation(&body.name, block.ordinal, op_id)
                })?;
                trace!(operation = %operation.label(), kind = operation.kind.as_str(), "operation");

                // A handle listed twice would make earlier operations depend on later ones
                if !visited.insert(op_id) {
                    return Err(DependencyGraphError::duplicate_operation(
                        &body.name,
                        block.ordinal,
                        op_id,
                    ));
                }

                graph.add_node(op_id);
                if graph.node_count() > self.config.max_nodes {
                    return Err(DependencyGraphError::NodeLimitExceeded {
                        function_id: body.name.clone(),
                        limit: self.config.max_nodes,
                    });
                }

                // Sequencing: current depends on previous, same block only
                if let Some(prev) = prev_op {
                    if self.config.include_sequencing {
                        graph.add_dependency(op_id, prev, DependencyReason::Sequencing);
                    }
                    state.previous_in_block.insert(op_id, prev);
                }
                prev_op = Some(op_id);

                // Writes first, so a read of the written symbol in the same
                // operation resolves to the operation itself
                match operation.written_symbol() {
                    Some(symbol) => {
                        state.last_writer.insert(symbol, op_id);
                    }
                    None if operation.has_unresolved_target() => {
                        trace!(operation = %operation.label(), "unresolved assignment target");
                        state.unresolved_targets.push(op_id);
                    }
                    None => {}
                }

                if self.config.include_data {
                    for symbol in operation.read_symbols() {
                        if let Some(&writer) = state.last_writer.get(&symbol) {
                            graph.add_dependency(op_id, writer, DependencyReason::Data(symbol));
                        }
                    }
                }
            }
        }

        debug!(
            function = %body.name,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            unresolved = state.unresolved_targets.len(),
            "dependency graph built"
        );

        Ok((graph, state))
    }
}

impl DependencyAnalyzer for DependencyGraphBuilder {
    fn analyze(&self, body: &ProcedureBody) -> Result<DependencyGraph> {
        self.build(body)
    }
}
