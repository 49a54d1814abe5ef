//! Expression trees attached to operations
//!
//! Only the shapes that matter for dependency analysis are modelled: symbol
//! references (the leaves that are read or written) and the composite nodes
//! that can nest them arbitrarily deep.

use super::symbol::SymbolId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Bool(bool),
    Str(String),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    Neg,
    Not,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    LocalReference(SymbolId),
    ParameterReference(SymbolId),
    FieldReference {
        instance: Option<Box<Expression>>,
        field: SymbolId,
    },
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    Invocation {
        method: String,
        receiver: Option<Box<Expression>>,
        arguments: Vec<Expression>,
    },
    ElementAccess {
        collection: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Literal(Literal::Int(value))
    }

    pub fn local(symbol: SymbolId) -> Self {
        Expression::LocalReference(symbol)
    }

    pub fn parameter(symbol: SymbolId) -> Self {
        Expression::ParameterReference(symbol)
    }

    pub fn field(instance: Option<Expression>, field: SymbolId) -> Self {
        Expression::FieldReference {
            instance: instance.map(Box::new),
            field,
        }
    }

    pub fn binary(op: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOperator, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(method: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Expression::Invocation {
            method: method.into(),
            receiver: None,
            arguments,
        }
    }

    pub fn element(collection: Expression, index: Expression) -> Self {
        Expression::ElementAccess {
            collection: Box::new(collection),
            index: Box::new(index),
        }
    }

    /// Direct children, left to right
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Literal(_)
            | Expression::LocalReference(_)
            | Expression::ParameterReference(_) => Vec::new(),
            Expression::FieldReference { instance, .. } => instance.iter().map(|e| &**e).collect(),
            Expression::Binary { left, right, .. } => vec![&**left, &**right],
            Expression::Unary { operand, .. } => vec![&**operand],
            Expression::Invocation {
                receiver,
                arguments,
                ..
            } => receiver
                .iter()
                .map(|e| &**e)
                .chain(arguments.iter())
                .collect(),
            Expression::ElementAccess { collection, index } => vec![&**collection, &**index],
        }
    }

    /// This expression and every nested sub-expression, pre-order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Symbol named directly by this expression, if it is a reference
    pub fn referenced_symbol(&self) -> Option<SymbolId> {
        match self {
            Expression::LocalReference(s) | Expression::ParameterReference(s) => Some(*s),
            Expression::FieldReference { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Pre-order walk over an expression tree
pub struct Descendants<'a> {
    stack: Vec<&'a Expression>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Reverse so the leftmost child is visited first
        self.stack.extend(current.children().into_iter().rev());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_preorder() {
        let a = SymbolId(0);
        let b = SymbolId(1);
        // a + (b * 2)
        let expr = Expression::binary(
            BinaryOperator::Add,
            Expression::local(a),
            Expression::binary(BinaryOperator::Mul, Expression::local(b), Expression::int(2)),
        );

        let refs: Vec<_> = expr
            .descendants()
            .filter_map(|e| e.referenced_symbol())
            .collect();
        assert_eq!(refs, vec![a, b]);
        assert_eq!(expr.descendants().count(), 5);
    }

    #[test]
    fn test_invocation_children_include_receiver() {
        let obj = SymbolId(0);
        let arg = SymbolId(1);
        let expr = Expression::Invocation {
            method: "Push".to_string(),
            receiver: Some(Box::new(Expression::local(obj))),
            arguments: vec![Expression::parameter(arg)],
        };

        let children = expr.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].referenced_symbol(), Some(obj));
        assert_eq!(children[1].referenced_symbol(), Some(arg));
    }

    #[test]
    fn test_field_without_instance_is_leaf() {
        let expr = Expression::field(None, SymbolId(3));
        assert!(expr.children().is_empty());
        assert_eq!(expr.referenced_symbol(), Some(SymbolId(3)));
    }
}
