//! Dependency graph domain models

use crate::shared::models::SymbolId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which rule(s) produced an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyType {
    /// Immediate predecessor in the same block
    Sequencing,
    /// Last writer of a symbol the dependent reads
    Data,
    /// Both rules produced the same pair
    Both,
}

impl DependencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Sequencing => "SEQUENCING",
            DependencyType::Data => "DATA",
            DependencyType::Both => "BOTH",
        }
    }

    pub fn includes_sequencing(&self) -> bool {
        matches!(self, DependencyType::Sequencing | DependencyType::Both)
    }

    pub fn includes_data(&self) -> bool {
        matches!(self, DependencyType::Data | DependencyType::Both)
    }

    pub fn merge(self, other: DependencyType) -> DependencyType {
        if self == other {
            self
        } else {
            DependencyType::Both
        }
    }
}

/// Why a single `add_dependency` call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyReason {
    Sequencing,
    Data(SymbolId),
}

impl DependencyReason {
    pub fn dependency_type(&self) -> DependencyType {
        match self {
            DependencyReason::Sequencing => DependencyType::Sequencing,
            DependencyReason::Data(_) => DependencyType::Data,
        }
    }
}

/// Provenance stored on each (dependent, dependency) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub dependency_type: DependencyType,
    /// Symbols whose reads resolved to this writer
    pub symbols: BTreeSet<SymbolId>,
}

impl DependencyEdge {
    pub fn new(reason: DependencyReason) -> Self {
        let mut edge = DependencyEdge {
            dependency_type: reason.dependency_type(),
            symbols: BTreeSet::new(),
        };
        if let DependencyReason::Data(symbol) = reason {
            edge.symbols.insert(symbol);
        }
        edge
    }

    /// Fold another reason for the same pair into this edge
    pub fn record(&mut self, reason: DependencyReason) {
        self.dependency_type = self.dependency_type.merge(reason.dependency_type());
        if let DependencyReason::Data(symbol) = reason {
            self.symbols.insert(symbol);
        }
    }
}

/// Dependency graph summary for one body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraphSummary {
    pub function_id: String,
    pub node_count: usize,
    pub sequencing_edges: usize,
    pub data_edges: usize,
}
