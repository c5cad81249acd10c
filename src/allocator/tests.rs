//! Unit tests for the storage allocator.
//!
//! This module contains tests for parameter and local variable offsets,
//! area sizes and the presence or absence of the outgoing area.

use crate::ast::declarations::{
    GlobalDeclaration, ParameterDeclaration, ProcedureDeclaration, Program, VariableDeclaration,
};
use crate::ast::expressions::Expression;
use crate::ast::statements::Statement;
use crate::ast::types::TypeExpression;
use crate::allocator::allocator::allocate_vars;
use crate::table::builder::build_table;
use crate::table::entry::{Entry, ProcedureEntry, VariableEntry};
use crate::table::table::SymbolTable;
use crate::Position;

fn int_type() -> TypeExpression {
    TypeExpression::Named {
        name: "int".to_string(),
        position: Position::new(1, 1),
    }
}

fn vector_type() -> TypeExpression {
    TypeExpression::Array {
        base_type: Box::new(int_type()),
        size: 10,
        position: Position::new(1, 1),
    }
}

fn parameter(name: &str, type_expression: TypeExpression, is_reference: bool) -> ParameterDeclaration {
    ParameterDeclaration {
        name: name.to_string(),
        type_expression,
        is_reference,
        position: Position::new(1, 1),
    }
}

fn local(name: &str, type_expression: TypeExpression) -> VariableDeclaration {
    VariableDeclaration {
        name: name.to_string(),
        type_expression,
        position: Position::new(1, 1),
    }
}

fn call(name: &str) -> Statement {
    Statement::Call {
        name: name.to_string(),
        arguments: Vec::new(),
        position: Position::new(1, 1),
    }
}

fn procedure(
    name: &str,
    parameters: Vec<ParameterDeclaration>,
    variables: Vec<VariableDeclaration>,
    body: Vec<Statement>,
) -> GlobalDeclaration {
    GlobalDeclaration::Procedure(ProcedureDeclaration {
        name: name.to_string(),
        parameters,
        variables,
        body,
        position: Position::new(1, 1),
    })
}

fn allocate(mut declarations: Vec<GlobalDeclaration>) -> SymbolTable {
    declarations.push(procedure("main", Vec::new(), Vec::new(), Vec::new()));
    let program = Program { declarations };
    let mut table = build_table(&program).expect("table building should succeed");
    allocate_vars(&program, &mut table);
    table
}

fn procedure_entry<'a>(table: &'a SymbolTable, name: &str) -> &'a ProcedureEntry {
    table
        .lookup(SymbolTable::GLOBAL, name)
        .and_then(Entry::as_procedure)
        .expect("procedure should be in the table")
}

fn variable_entry<'a>(table: &'a SymbolTable, procedure: &str, name: &str) -> &'a VariableEntry {
    let scope = procedure_entry(table, procedure).local_scope;
    table
        .lookup_local(scope, name)
        .and_then(Entry::as_variable)
        .expect("variable should be in the local scope")
}

#[test]
fn test_parameter_offsets_count_up_in_declaration_order() {
    let table = allocate(vec![procedure(
        "p",
        vec![
            parameter("a", int_type(), false),
            parameter("b", vector_type(), true),
            parameter("c", int_type(), false),
        ],
        vec![],
        vec![],
    )]);

    assert_eq!(variable_entry(&table, "p", "a").offset, Some(0));
    // a reference parameter occupies one word, not the array's size
    assert_eq!(variable_entry(&table, "p", "b").offset, Some(4));
    assert_eq!(variable_entry(&table, "p", "c").offset, Some(8));

    let p = procedure_entry(&table, "p");
    assert_eq!(p.argument_area_size, 12);
    assert_eq!(p.parameter_types[0].offset, Some(0));
    assert_eq!(p.parameter_types[1].offset, Some(4));
    assert_eq!(p.parameter_types[2].offset, Some(8));
}

#[test]
fn test_local_variable_offsets_count_down_in_declaration_order() {
    let table = allocate(vec![procedure(
        "p",
        vec![],
        vec![local("x", int_type()), local("v", vector_type())],
        vec![],
    )]);

    assert_eq!(variable_entry(&table, "p", "x").offset, Some(-4));
    assert_eq!(variable_entry(&table, "p", "v").offset, Some(-44));
    assert_eq!(procedure_entry(&table, "p").local_var_area_size, 44);
}

#[test]
fn test_empty_procedure_has_empty_areas() {
    let table = allocate(vec![]);
    let main = procedure_entry(&table, "main");

    assert_eq!(main.argument_area_size, 0);
    assert_eq!(main.local_var_area_size, 0);
    assert_eq!(main.outgoing_area_size, None);
}

#[test]
fn test_leaf_procedure_has_no_outgoing_area() {
    let table = allocate(vec![procedure(
        "p",
        vec![],
        vec![local("x", int_type())],
        vec![Statement::Assign {
            target: crate::ast::expressions::Variable::Named {
                name: "x".to_string(),
                position: Position::new(1, 1),
            },
            value: Expression::IntLiteral {
                value: 0,
                position: Position::new(1, 1),
            },
            position: Position::new(1, 1),
        }],
    )]);

    assert_eq!(procedure_entry(&table, "p").outgoing_area_size, None);
}

#[test]
fn test_call_of_parameterless_procedure_yields_empty_outgoing_area() {
    let table = allocate(vec![procedure("p", vec![], vec![], vec![call("exit")])]);

    assert_eq!(procedure_entry(&table, "p").outgoing_area_size, Some(0));
}

#[test]
fn test_outgoing_area_is_the_widest_callee_argument_area() {
    let table = allocate(vec![procedure(
        "p",
        vec![],
        vec![],
        vec![call("printi"), call("drawLine"), call("setPixel")],
    )]);

    // drawLine takes five words
    assert_eq!(procedure_entry(&table, "p").outgoing_area_size, Some(20));
}

#[test]
fn test_calls_nested_in_control_flow_are_found() {
    let condition = Expression::IntLiteral {
        value: 1,
        position: Position::new(1, 1),
    };
    let table = allocate(vec![procedure(
        "p",
        vec![],
        vec![],
        vec![Statement::While {
            condition: condition.clone(),
            body: Box::new(Statement::If {
                condition,
                then_part: Box::new(Statement::Compound {
                    statements: vec![call("printi")],
                    position: Position::new(1, 1),
                }),
                else_part: None,
                position: Position::new(1, 1),
            }),
            position: Position::new(1, 1),
        }],
    )]);

    assert_eq!(procedure_entry(&table, "p").outgoing_area_size, Some(4));
}

#[test]
fn test_forward_calls_see_the_callee_frame() {
    // p calls q, which is declared later with a two-word argument area
    let table = allocate(vec![
        procedure("p", vec![], vec![], vec![call("q")]),
        procedure(
            "q",
            vec![
                parameter("a", int_type(), false),
                parameter("b", int_type(), false),
            ],
            vec![],
            vec![],
        ),
    ]);

    assert_eq!(procedure_entry(&table, "p").outgoing_area_size, Some(8));
}
