//! Property-based tests for dependency graph construction
//!
//! Invariants that must hold for ALL bodies:
//! - Totality: every operation is exactly one node
//! - No forward edges
//! - Sequencing edges only to the immediate predecessor in the same block
//! - Data edges only to the most recent earlier writer (shadowing)
//! - Reads with no earlier writer add nothing
//! - Re-adding edges is a no-op

use opdep_core::shared::models::{BinaryOperator, Expression};
use opdep_core::{
    DependencyGraphBuilder, DependencyReason, OperationId, ProcedureBody, ProcedureBodyBuilder,
    SymbolId,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

const SYMBOLS: usize = 4;

#[derive(Debug, Clone)]
enum OpShape {
    Declare { symbol: usize, reads: Vec<usize> },
    Assign { symbol: usize, reads: Vec<usize> },
    /// Assignment through an element access: no resolvable target
    Store { reads: Vec<usize> },
    Other { reads: Vec<usize> },
}

fn op_shape() -> impl Strategy<Value = OpShape> {
    let reads = prop::collection::vec(0..SYMBOLS, 0..4);
    prop_oneof![
        (0..SYMBOLS, reads.clone()).prop_map(|(symbol, reads)| OpShape::Declare { symbol, reads }),
        (0..SYMBOLS, reads.clone()).prop_map(|(symbol, reads)| OpShape::Assign { symbol, reads }),
        reads.clone().prop_map(|reads| OpShape::Store { reads }),
        reads.prop_map(|reads| OpShape::Other { reads }),
    ]
}

fn block_shapes() -> impl Strategy<Value = Vec<Vec<OpShape>>> {
    prop::collection::vec(prop::collection::vec(op_shape(), 0..6), 1..6)
}

/// One operation as the oracle sees it
struct Expected {
    id: OperationId,
    block: usize,
    writes: Option<SymbolId>,
    reads: Vec<SymbolId>,
}

fn reference(symbols: &[SymbolId], index: usize) -> Expression {
    // Symbol 0 is the parameter
    if index == 0 {
        Expression::parameter(symbols[index])
    } else {
        Expression::local(symbols[index])
    }
}

fn read_expression(symbols: &[SymbolId], reads: &[usize]) -> Expression {
    reads.iter().fold(Expression::int(0), |acc, &r| {
        Expression::binary(BinaryOperator::Add, acc, reference(symbols, r))
    })
}

fn build_body(blocks: &[Vec<OpShape>]) -> (ProcedureBody, Vec<Expected>) {
    let mut body = ProcedureBodyBuilder::new("prop");
    let symbols: Vec<SymbolId> = (0..SYMBOLS)
        .map(|i| {
            if i == 0 {
                body.parameter("p")
            } else {
                body.local(&format!("v{}", i))
            }
        })
        .collect();

    let mut expected = Vec::new();
    for (block_idx, block) in blocks.iter().enumerate() {
        if block_idx > 0 {
            body.next_block();
        }
        for shape in block {
            let (id, writes, reads) = match shape {
                OpShape::Declare { symbol, reads } => {
                    let id = body.declare(symbols[*symbol], read_expression(&symbols, reads), "decl");
                    let reads = reads.iter().map(|&r| symbols[r]).collect();
                    (id, Some(symbols[*symbol]), reads)
                }
                OpShape::Assign { symbol, reads } => {
                    let id = body.assign(
                        reference(&symbols, *symbol),
                        read_expression(&symbols, reads),
                        "assign",
                    );
                    let reads = std::iter::once(symbols[*symbol])
                        .chain(reads.iter().map(|&r| symbols[r]))
                        .collect();
                    (id, Some(symbols[*symbol]), reads)
                }
                OpShape::Store { reads } => {
                    let id = body.assign(
                        Expression::element(Expression::int(0), Expression::int(1)),
                        read_expression(&symbols, reads),
                        "store",
                    );
                    (id, None, reads.iter().map(|&r| symbols[r]).collect())
                }
                OpShape::Other { reads } => {
                    let id = body.expression(read_expression(&symbols, reads), "expr");
                    (id, None, reads.iter().map(|&r| symbols[r]).collect())
                }
            };
            expected.push(Expected {
                id,
                block: block_idx,
                writes,
                reads,
            });
        }
    }

    (body.build(), expected)
}

/// (dependent, dependency) -> (sequencing, data)
fn expected_edges(ops: &[Expected]) -> BTreeMap<(OperationId, OperationId), (bool, bool)> {
    let mut edges: BTreeMap<(OperationId, OperationId), (bool, bool)> = BTreeMap::new();

    for (pos, op) in ops.iter().enumerate() {
        if pos > 0 && ops[pos - 1].block == op.block {
            edges.entry((op.id, ops[pos - 1].id)).or_default().0 = true;
        }

        for symbol in &op.reads {
            // Most recent writer at or before this position
            let writer = ops[..=pos]
                .iter()
                .rev()
                .find(|candidate| candidate.writes == Some(*symbol));
            if let Some(writer) = writer {
                edges.entry((op.id, writer.id)).or_default().1 = true;
            }
        }
    }

    edges
}

proptest! {
    #[test]
    fn prop_every_operation_is_one_node(blocks in block_shapes()) {
        let (body, ops) = build_body(&blocks);
        let graph = DependencyGraphBuilder::new().build(&body).unwrap();

        let nodes: Vec<OperationId> = graph.nodes().collect();
        let expected: Vec<OperationId> = ops.iter().map(|o| o.id).collect();
        prop_assert_eq!(nodes, expected);
    }

    #[test]
    fn prop_no_forward_edges(blocks in block_shapes()) {
        let (body, ops) = build_body(&blocks);
        let graph = DependencyGraphBuilder::new().build(&body).unwrap();

        let position: HashMap<OperationId, usize> =
            ops.iter().enumerate().map(|(pos, o)| (o.id, pos)).collect();
        for (dependent, dependency, _) in graph.edges() {
            prop_assert!(position[&dependency] <= position[&dependent]);
        }
    }

    #[test]
    fn prop_edges_match_reference(blocks in block_shapes()) {
        let (body, ops) = build_body(&blocks);
        let graph = DependencyGraphBuilder::new().build(&body).unwrap();
        let expected = expected_edges(&ops);

        let actual: BTreeSet<(OperationId, OperationId)> =
            graph.edges().map(|(a, b, _)| (a, b)).collect();
        let wanted: BTreeSet<(OperationId, OperationId)> = expected.keys().copied().collect();
        prop_assert_eq!(actual, wanted);

        for ((dependent, dependency), (sequencing, data)) in expected {
            let kind = graph.dependency_type(dependent, dependency).unwrap();
            prop_assert_eq!(kind.includes_sequencing(), sequencing);
            prop_assert_eq!(kind.includes_data(), data);
        }
    }

    #[test]
    fn prop_unresolved_stores_are_traced(blocks in block_shapes()) {
        let (body, _) = build_body(&blocks);
        let (_, trace) = DependencyGraphBuilder::new().build_with_trace(&body).unwrap();

        let stores = blocks
            .iter()
            .flatten()
            .filter(|shape| matches!(shape, OpShape::Store { .. }))
            .count();
        prop_assert_eq!(trace.unresolved_targets.len(), stores);
    }

    #[test]
    fn prop_reinserting_edges_is_noop(blocks in block_shapes()) {
        let (body, _) = build_body(&blocks);
        let mut graph = DependencyGraphBuilder::new().build(&body).unwrap();
        let before = graph.to_dto();

        let edges: Vec<_> = graph
            .edges()
            .map(|(a, b, e)| (a, b, e.dependency_type, e.symbols.clone()))
            .collect();
        for (dependent, dependency, kind, symbols) in edges {
            if kind.includes_sequencing() {
                prop_assert!(!graph.add_dependency(dependent, dependency, DependencyReason::Sequencing));
            }
            for symbol in symbols {
                prop_assert!(!graph.add_dependency(dependent, dependency, DependencyReason::Data(symbol)));
            }
        }
        for node in before.nodes.clone() {
            graph.add_node(node);
        }

        prop_assert_eq!(graph.to_dto(), before);
    }
}
