/*
 * opdep-core - Operation Dependency Graphs
 *
 * Feature-First Hexagonal Architecture:
 * - shared/   : Operation model handed over by the front end
 * - features/ : Dependency graph construction and queries
 * - config/   : Builder configuration (YAML + builder API)
 * - errors    : Error types
 *
 * Graph construction is one synchronous pass per procedure body; bodies can be
 * built in parallel with rayon.
 */

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::DependencyGraphConfig;
pub use errors::{DependencyGraphError, Result};
pub use features::dependency_graph::{
    BuildDependencyGraphUseCase, BuildTrace, DependencyAnalyzer, DependencyEdge, DependencyGraph,
    DependencyGraphBuilder, DependencyGraphPort, DependencyReason, DependencyType,
};
pub use shared::models::{
    BasicBlock, ControlFlowGraph, Expression, Operation, OperationArena, OperationId,
    OperationKind, ProcedureBody, ProcedureBodyBuilder, SymbolId, SymbolKind, SymbolTable,
};
