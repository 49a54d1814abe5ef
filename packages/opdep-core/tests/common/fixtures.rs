//! Procedure body fixtures
//!
//! Each fixture returns the body plus the handles a test needs to assert on.

use opdep_core::shared::models::{BinaryOperator, Expression};
use opdep_core::{OperationId, ProcedureBody, ProcedureBodyBuilder, SymbolId};

/// Handles of the `a / b / if / Print` example
pub struct ExampleOps {
    pub a: SymbolId,
    pub b: SymbolId,
    pub decl_a: OperationId,
    pub decl_b: OperationId,
    pub condition: OperationId,
    pub assign_a: OperationId,
    pub print: OperationId,
}

fn example_body(split_blocks: bool) -> (ProcedureBody, ExampleOps) {
    let mut body = ProcedureBodyBuilder::new("Example.Test");
    let a = body.local("a");
    let b = body.local("b");

    let decl_a = body.declare(a, Expression::int(5), "int a = 5;");
    let decl_b = body.declare(
        b,
        Expression::binary(BinaryOperator::Add, Expression::local(a), Expression::int(3)),
        "int b = a + 3;",
    );
    let condition = body.expression(
        Expression::binary(BinaryOperator::Gt, Expression::local(b), Expression::int(0)),
        "b > 0",
    );
    if split_blocks {
        body.next_block();
    }
    let assign_a = body.assign(
        Expression::local(a),
        Expression::binary(BinaryOperator::Mul, Expression::local(b), Expression::int(2)),
        "a = b * 2;",
    );
    if split_blocks {
        body.next_block();
    }
    let print = body.expression(
        Expression::call("Console.WriteLine", vec![Expression::local(a)]),
        "Console.WriteLine(a);",
    );

    (
        body.build(),
        ExampleOps {
            a,
            b,
            decl_a,
            decl_b,
            condition,
            assign_a,
            print,
        },
    )
}

/// The example laid out as one straight-line block
pub fn example_single_block() -> (ProcedureBody, ExampleOps) {
    example_body(false)
}

/// The example as a front end lowers it: condition block, guarded block,
/// join block
pub fn example_branching() -> (ProcedureBody, ExampleOps) {
    example_body(true)
}

/// `if (c) { a = 1; } else { a = 2; } Print(a);` with the else block
/// enumerated after the then block
pub struct DiamondOps {
    pub a: SymbolId,
    pub then_write: OperationId,
    pub else_write: OperationId,
    pub print: OperationId,
}

pub fn diamond() -> (ProcedureBody, DiamondOps) {
    let mut body = ProcedureBodyBuilder::new("Example.Diamond");
    let c = body.parameter("c");
    let a = body.local("a");

    body.bind_parameter(c, Expression::Literal(opdep_core::shared::models::Literal::Bool(true)), "c");
    body.next_block();
    body.expression(Expression::parameter(c), "c");
    body.next_block();
    let then_write = body.assign(Expression::local(a), Expression::int(1), "a = 1;");
    body.next_block();
    let else_write = body.assign(Expression::local(a), Expression::int(2), "a = 2;");
    body.next_block();
    let print = body.expression(Expression::call("Print", vec![Expression::local(a)]), "Print(a);");

    (
        body.build(),
        DiamondOps {
            a,
            then_write,
            else_write,
            print,
        },
    )
}

/// `int t = 0; int i = 0; while (i < 10) { Print(t); t = i; i = i + 1; }`
pub struct LoopOps {
    pub t: SymbolId,
    pub i: SymbolId,
    pub decl_t: OperationId,
    pub decl_i: OperationId,
    pub header: OperationId,
    pub print_t: OperationId,
    pub assign_t: OperationId,
    pub increment: OperationId,
}

pub fn counting_loop() -> (ProcedureBody, LoopOps) {
    let mut body = ProcedureBodyBuilder::new("Example.Loop");
    let t = body.local("t");
    let i = body.local("i");

    let decl_t = body.declare(t, Expression::int(0), "int t = 0;");
    let decl_i = body.declare(i, Expression::int(0), "int i = 0;");
    body.next_block();
    let header = body.expression(
        Expression::binary(BinaryOperator::Lt, Expression::local(i), Expression::int(10)),
        "i < 10",
    );
    body.next_block();
    let print_t = body.expression(Expression::call("Print", vec![Expression::local(t)]), "Print(t);");
    let assign_t = body.assign(Expression::local(t), Expression::local(i), "t = i;");
    let increment = body.assign(
        Expression::local(i),
        Expression::binary(BinaryOperator::Add, Expression::local(i), Expression::int(1)),
        "i = i + 1;",
    );

    (
        body.build(),
        LoopOps {
            t,
            i,
            decl_t,
            decl_i,
            header,
            print_t,
            assign_t,
            increment,
        },
    )
}
