//! Operation dependency graph
//!
//! Sequencing (intra-block order) + data (last writer of each read symbol)
//! dependencies over the operations of one procedure body.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::BuildDependencyGraphUseCase;
pub use domain::{DependencyEdge, DependencyGraphSummary, DependencyReason, DependencyType};
pub use infrastructure::{
    BuildTrace, DependencyGraph, DependencyGraphBuilder, DependencyGraphDto, DependencyGraphStats,
};
pub use ports::{DependencyAnalyzer, DependencyGraphPort};
