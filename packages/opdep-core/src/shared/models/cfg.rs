//! Control flow graph as seen by dependency analysis
//!
//! Only block membership and intra-block order are exposed. Predecessor and
//! successor edges stay with the front end.

use super::operation::OperationId;
use serde::{Deserialize, Serialize};

/// Straight-line run of operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicBlock {
    /// Position in the front end's canonical block enumeration
    pub ordinal: usize,
    /// Operations in execution order
    pub operations: Vec<OperationId>,
}

impl BasicBlock {
    pub fn new(ordinal: usize, operations: Vec<OperationId>) -> Self {
        Self {
            ordinal,
            operations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Ordered blocks of one procedure body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFlowGraph {
    pub blocks: Vec<BasicBlock>,
}

impl ControlFlowGraph {
    pub fn new(blocks: Vec<BasicBlock>) -> Self {
        Self { blocks }
    }

    /// Append a block; its ordinal is its position
    pub fn push_block(&mut self, operations: Vec<OperationId>) -> usize {
        let ordinal = self.blocks.len();
        self.blocks.push(BasicBlock::new(ordinal, operations));
        ordinal
    }

    pub fn operation_count(&self) -> usize {
        self.blocks.iter().map(|b| b.operations.len()).sum()
    }

    /// All operation handles in traversal order
    pub fn operations(&self) -> impl Iterator<Item = OperationId> + '_ {
        self.blocks.iter().flat_map(|b| b.operations.iter().copied())
    }
}
