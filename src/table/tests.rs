//! Unit tests for the symbol table and the table builder.
//!
//! This module contains tests for structural type equality, scoped name
//! lookup, duplicate detection and the validation of the program shape.

use crate::ast::declarations::{
    GlobalDeclaration, ParameterDeclaration, ProcedureDeclaration, Program, TypeDeclaration,
    VariableDeclaration,
};
use crate::ast::types::TypeExpression;
use crate::errors::errors::{Error, ErrorImpl};
use crate::table::builder::build_table;
use crate::table::entry::{Entry, VariableEntry};
use crate::table::table::SymbolTable;
use crate::table::types::Type;
use crate::Position;

fn named_type(name: &str) -> TypeExpression {
    TypeExpression::Named {
        name: name.to_string(),
        position: Position::new(1, 1),
    }
}

fn array_of(base: TypeExpression, size: usize) -> TypeExpression {
    TypeExpression::Array {
        base_type: Box::new(base),
        size,
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

fn variable(name: &str, type_expression: TypeExpression) -> VariableDeclaration {
    VariableDeclaration {
        name: name.to_string(),
        type_expression,
        position: Position::new(1, 1),
    }
}

fn procedure(
    name: &str,
    parameters: Vec<ParameterDeclaration>,
    variables: Vec<VariableDeclaration>,
) -> GlobalDeclaration {
    GlobalDeclaration::Procedure(ProcedureDeclaration {
        name: name.to_string(),
        parameters,
        variables,
        body: Vec::new(),
        position: Position::new(1, 1),
    })
}

fn program_with_main(mut declarations: Vec<GlobalDeclaration>) -> Program {
    declarations.push(procedure("main", Vec::new(), Vec::new()));
    Program { declarations }
}

#[test]
fn test_array_type_equality_is_structural() {
    let first = Type::Array {
        base_type: Box::new(Type::Int),
        size: 10,
    };
    let second = Type::Array {
        base_type: Box::new(Type::Int),
        size: 10,
    };
    let shorter = Type::Array {
        base_type: Box::new(Type::Int),
        size: 9,
    };

    assert_eq!(first, second);
    assert_ne!(first, shorter);
}

#[test]
fn test_array_byte_size() {
    let vector = Type::Array {
        base_type: Box::new(Type::Int),
        size: 10,
    };
    let matrix = Type::Array {
        base_type: Box::new(vector.clone()),
        size: 3,
    };

    assert_eq!(Type::Int.byte_size(), 4);
    assert_eq!(vector.byte_size(), 40);
    assert_eq!(matrix.byte_size(), 120);
}

#[test]
fn test_lookup_walks_to_parent_scope() {
    let mut table = SymbolTable::new();
    let local = table.create_scope(SymbolTable::GLOBAL);

    let entry = table.lookup(local, "int");
    assert!(matches!(entry, Some(Entry::Type(_))));
    assert!(table.lookup_local(local, "int").is_none());
}

#[test]
fn test_shadowing_is_legal_but_duplicates_are_not() {
    let mut table = SymbolTable::new();
    let local = table.create_scope(SymbolTable::GLOBAL);
    let duplicate_error = || {
        Error::new(
            ErrorImpl::RedeclarationAsVariable {
                name: "int".to_string(),
            },
            Position::new(2, 1),
        )
    };

    // shadowing the global type name with a local variable is allowed
    let shadowing = table.enter(
        local,
        Entry::Variable(VariableEntry {
            name: "int".to_string(),
            type_: Type::Int,
            is_reference: false,
            offset: None,
        }),
        duplicate_error(),
    );
    assert!(shadowing.is_ok());

    // a second entry of the same name in the same scope is not
    let result = table.enter(
        local,
        Entry::Variable(VariableEntry {
            name: "int".to_string(),
            type_: Type::Int,
            is_reference: false,
            offset: None,
        }),
        duplicate_error(),
    );
    assert_eq!(
        result.unwrap_err().get_error_name(),
        "RedeclarationAsVariable"
    );

    // the local binding now shadows the global one
    assert!(matches!(table.lookup(local, "int"), Some(Entry::Variable(_))));
}

#[test]
fn test_predefined_procedures() {
    let table = SymbolTable::new();

    let printi = table
        .lookup(SymbolTable::GLOBAL, "printi")
        .and_then(Entry::as_procedure)
        .expect("printi should be predefined");
    assert_eq!(printi.argument_area_size, 4);
    assert!(!printi.parameter_types[0].is_reference);

    let readi = table
        .lookup(SymbolTable::GLOBAL, "readi")
        .and_then(Entry::as_procedure)
        .expect("readi should be predefined");
    assert!(readi.parameter_types[0].is_reference);

    let exit = table
        .lookup(SymbolTable::GLOBAL, "exit")
        .and_then(Entry::as_procedure)
        .expect("exit should be predefined");
    assert_eq!(exit.argument_area_size, 0);

    let draw_line = table
        .lookup(SymbolTable::GLOBAL, "drawLine")
        .and_then(Entry::as_procedure)
        .expect("drawLine should be predefined");
    assert_eq!(draw_line.parameter_types.len(), 5);
    assert_eq!(draw_line.argument_area_size, 20);
    assert_eq!(draw_line.parameter_types[4].offset, Some(16));
}

#[test]
fn test_build_table_resolves_type_aliases() {
    let program = program_with_main(vec![
        GlobalDeclaration::Type(TypeDeclaration {
            name: "vec".to_string(),
            type_expression: array_of(named_type("int"), 10),
            position: Position::new(1, 1),
        }),
        procedure("p", vec![], vec![variable("v", named_type("vec"))]),
    ]);

    let table = build_table(&program).expect("table building should succeed");
    let p = table
        .lookup(SymbolTable::GLOBAL, "p")
        .and_then(Entry::as_procedure)
        .unwrap();
    let v = table
        .lookup(p.local_scope, "v")
        .and_then(Entry::as_variable)
        .unwrap();

    assert_eq!(
        v.type_,
        Type::Array {
            base_type: Box::new(Type::Int),
            size: 10
        }
    );
}

#[test]
fn test_undefined_type_is_rejected() {
    let program = program_with_main(vec![procedure(
        "p",
        vec![],
        vec![variable("v", named_type("vec"))],
    )]);

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "UndefinedType");
}

#[test]
fn test_procedure_used_as_type_is_rejected() {
    let program = program_with_main(vec![
        procedure("p", vec![], vec![]),
        procedure("q", vec![], vec![variable("v", named_type("p"))]),
    ]);

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "NotAType");
}

#[test]
fn test_duplicate_procedure_is_rejected() {
    let program = program_with_main(vec![
        procedure("foo", vec![], vec![]),
        procedure("foo", vec![], vec![]),
    ]);

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "RedeclarationAsProcedure");
}

#[test]
fn test_duplicate_parameter_is_rejected() {
    let program = program_with_main(vec![procedure(
        "p",
        vec![
            parameter("a", named_type("int"), false),
            parameter("a", named_type("int"), false),
        ],
        vec![],
    )]);

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "RedeclarationAsParameter");
}

#[test]
fn test_variable_clashing_with_parameter_is_rejected() {
    let program = program_with_main(vec![procedure(
        "p",
        vec![parameter("a", named_type("int"), false)],
        vec![variable("a", named_type("int"))],
    )]);

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "RedeclarationAsVariable");
}

#[test]
fn test_missing_main_is_rejected() {
    let program = Program {
        declarations: vec![procedure("p", vec![], vec![])],
    };

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "MainIsMissing");
    assert!(error.get_position().is_null());
}

#[test]
fn test_main_must_be_a_procedure() {
    let program = Program {
        declarations: vec![GlobalDeclaration::Type(TypeDeclaration {
            name: "main".to_string(),
            type_expression: named_type("int"),
            position: Position::new(1, 1),
        })],
    };

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "MainIsNotAProcedure");
}

#[test]
fn test_main_must_not_have_parameters() {
    let program = Program {
        declarations: vec![procedure(
            "main",
            vec![parameter("a", named_type("int"), false)],
            vec![],
        )],
    };

    let error = build_table(&program).unwrap_err();
    assert_eq!(error.get_error_name(), "MainMustNotHaveParameters");
}
