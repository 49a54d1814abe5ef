//! Elementary operations
//!
//! Operations are owned by the front end's `OperationArena`; analyses only
//! hold `OperationId` handles, so graphs never borrow from the CFG they were
//! derived from.

use super::expression::Expression;
use super::span::Span;
use super::symbol::SymbolId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable operation identity (arena index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperationId(pub u32);

impl OperationId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op{}", self.0)
    }
}

/// Closed set of operation shapes the dependency rules distinguish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationKind {
    /// `target = value`
    Assignment { target: Expression, value: Expression },
    /// `T symbol = initializer`
    VariableDeclarator {
        symbol: SymbolId,
        initializer: Expression,
    },
    /// Implicit binding of an argument to a parameter on entry
    ParameterInitializer {
        parameter: SymbolId,
        value: Expression,
    },
    /// Anything else: conditions, calls, expression statements
    Other(Expression),
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Assignment { .. } => "assignment",
            OperationKind::VariableDeclarator { .. } => "variable_declarator",
            OperationKind::ParameterInitializer { .. } => "parameter_initializer",
            OperationKind::Other(_) => "other",
        }
    }

    /// Top-level expressions of this operation, in source order
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            OperationKind::Assignment { target, value } => vec![target, value],
            OperationKind::VariableDeclarator { initializer, .. } => vec![initializer],
            OperationKind::ParameterInitializer { value, .. } => vec![value],
            OperationKind::Other(expr) => vec![expr],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub kind: OperationKind,
    /// Source text, for diagnostics only
    pub syntax: Option<String>,
    pub span: Option<Span>,
}

impl Operation {
    /// Symbol assigned by this operation.
    ///
    /// `None` both for kinds that write nothing and for assignments whose
    /// target is not a local, parameter or field reference.
    pub fn written_symbol(&self) -> Option<SymbolId> {
        match &self.kind {
            OperationKind::Assignment { target, .. } => resolve_target(target),
            OperationKind::VariableDeclarator { symbol, .. } => Some(*symbol),
            OperationKind::ParameterInitializer { parameter, .. } => Some(*parameter),
            OperationKind::Other(_) => None,
        }
    }

    /// True for an assignment whose target cannot be resolved to a symbol
    pub fn has_unresolved_target(&self) -> bool {
        match &self.kind {
            OperationKind::Assignment { target, .. } => resolve_target(target).is_none(),
            _ => false,
        }
    }

    /// Every local and parameter referenced anywhere in this operation.
    ///
    /// Assignment targets are scanned like any other sub-expression. The
    /// same symbol may be yielded more than once.
    pub fn read_symbols(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.kind
            .expressions()
            .into_iter()
            .flat_map(|expr| expr.descendants())
            .filter_map(|expr| match expr {
                Expression::LocalReference(s) | Expression::ParameterReference(s) => Some(*s),
                _ => None,
            })
    }

    /// Label for log output
    pub fn label(&self) -> String {
        match &self.syntax {
            Some(text) => text.trim().to_string(),
            None => format!("{} ({})", self.id, self.kind.as_str()),
        }
    }
}

fn resolve_target(target: &Expression) -> Option<SymbolId> {
    match target {
        Expression::LocalReference(s) | Expression::ParameterReference(s) => Some(*s),
        Expression::FieldReference { field, .. } => Some(*field),
        _ => None,
    }
}

/// Operation storage owned by the front end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationArena {
    operations: Vec<Operation>,
}

impl OperationArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, kind: OperationKind) -> OperationId {
        self.alloc_with_syntax(kind, None, None)
    }

    pub fn alloc_with_syntax(
        &mut self,
        kind: OperationKind,
        syntax: Option<String>,
        span: Option<Span>,
    ) -> OperationId {
        let id = OperationId(super::next_handle(self.operations.len()));
        self.operations.push(Operation {
            id,
            kind,
            syntax,
            span,
        });
        id
    }

    pub fn get(&self, id: OperationId) -> Option<&Operation> {
        self.operations.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }
}
