//! Operation model
//!
//! Read-only view of a procedure body as handed over by the front end:
//! - Symbols (locals, parameters, fields) behind stable handles
//! - Operations stored in an arena and referenced by `OperationId`
//! - Basic blocks listing operation handles in execution order

pub mod body;
pub mod cfg;
pub mod expression;
pub mod operation;
pub mod span;
pub mod symbol;

pub use body::{ProcedureBody, ProcedureBodyBuilder};
pub use cfg::{BasicBlock, ControlFlowGraph};
pub use expression::{BinaryOperator, Expression, Literal, UnaryOperator};
pub use operation::{Operation, OperationArena, OperationId, OperationKind};
pub use span::Span;
pub use symbol::{Symbol, SymbolId, SymbolKind, SymbolTable};

/// Handle for the next entry of an arena holding `len` entries
///
/// Arenas are indexed by `u32`; growing one past `u32::MAX` entries is a
/// front-end bug, not an input condition.
pub(crate) fn next_handle(len: usize) -> u32 {
    u32::try_from(len).expect("arena holds at most u32::MAX entries")
}
