//! Procedure body bundle and its builder

use super::cfg::ControlFlowGraph;
use super::expression::Expression;
use super::operation::{OperationArena, OperationId, OperationKind};
use super::span::Span;
use super::symbol::{SymbolId, SymbolKind, SymbolTable};
use serde::{Deserialize, Serialize};

/// Everything the front end hands over for one procedure body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcedureBody {
    /// Fully qualified name, used as the graph's function id
    pub name: String,
    pub symbols: SymbolTable,
    pub operations: OperationArena,
    pub cfg: ControlFlowGraph,
}

impl ProcedureBody {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Fluent construction of a `ProcedureBody`
///
/// Operations are appended to the current block; `next_block` closes it.
///
/// ```rust,ignore
/// let mut b = ProcedureBodyBuilder::new("Example.Test");
/// let a = b.local("a");
/// b.declare(a, Expression::int(5), "int a = 5");
/// b.next_block();
/// b.expression(Expression::call("Print", vec![Expression::local(a)]), "Print(a)");
/// let body = b.build();
/// ```
#[derive(Debug)]
pub struct ProcedureBodyBuilder {
    body: ProcedureBody,
    current: Vec<OperationId>,
    next_line: u32,
}

impl ProcedureBodyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: ProcedureBody::new(name),
            current: Vec::new(),
            next_line: 1,
        }
    }

    pub fn local(&mut self, name: &str) -> SymbolId {
        self.body.symbols.declare(name, SymbolKind::Local)
    }

    pub fn parameter(&mut self, name: &str) -> SymbolId {
        self.body.symbols.declare(name, SymbolKind::Parameter)
    }

    pub fn field(&mut self, name: &str) -> SymbolId {
        self.body.symbols.declare(name, SymbolKind::Field)
    }

    /// Append an operation of any kind to the current block
    pub fn push(&mut self, kind: OperationKind, syntax: &str) -> OperationId {
        let line = self.next_line;
        self.next_line += 1;
        let span = Span::line(line, 0, syntax.len() as u32);
        let id = self
            .body
            .operations
            .alloc_with_syntax(kind, Some(syntax.to_string()), Some(span));
        self.current.push(id);
        id
    }

    pub fn assign(&mut self, target: Expression, value: Expression, syntax: &str) -> OperationId {
        self.push(OperationKind::Assignment { target, value }, syntax)
    }

    pub fn declare(&mut self, symbol: SymbolId, initializer: Expression, syntax: &str) -> OperationId {
        self.push(
            OperationKind::VariableDeclarator {
                symbol,
                initializer,
            },
            syntax,
        )
    }

    pub fn bind_parameter(&mut self, parameter: SymbolId, value: Expression, syntax: &str) -> OperationId {
        self.push(OperationKind::ParameterInitializer { parameter, value }, syntax)
    }

    pub fn expression(&mut self, expr: Expression, syntax: &str) -> OperationId {
        self.push(OperationKind::Other(expr), syntax)
    }

    /// Close the current block and start a new one
    pub fn next_block(&mut self) -> &mut Self {
        let ops = std::mem::take(&mut self.current);
        self.body.cfg.push_block(ops);
        self
    }

    /// Close the current block (kept even when empty) and return the body
    pub fn build(mut self) -> ProcedureBody {
        self.next_block();
        self.body
    }
}
