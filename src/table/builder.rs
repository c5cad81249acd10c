use crate::ast::declarations::{
    GlobalDeclaration, ProcedureDeclaration, Program, TypeDeclaration,
};
use crate::ast::types::TypeExpression;
use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

use super::entry::{Entry, ParameterType, ProcedureEntry, TypeEntry, VariableEntry};
use super::table::{ScopeId, SymbolTable};
use super::types::Type;

/// Builds the symbol table for a program in one forward pass over its
/// global declarations, then validates the program shape around `main`.
pub fn build_table(program: &Program) -> Result<SymbolTable, Error> {
    let mut table = SymbolTable::new();
    for declaration in &program.declarations {
        match declaration {
            GlobalDeclaration::Type(type_declaration) => {
                enter_type_declaration(&mut table, type_declaration)?
            }
            GlobalDeclaration::Procedure(procedure_declaration) => {
                enter_procedure_declaration(&mut table, procedure_declaration)?
            }
        }
    }
    check_main(&table)?;
    Ok(table)
}

/// Resolves a syntactic type expression to a semantic type. Named type
/// expressions go through the symbol table; array shapes are built
/// structurally around their resolved base type.
pub fn resolve_type_expression(
    table: &SymbolTable,
    type_expression: &TypeExpression,
) -> Result<Type, Error> {
    match type_expression {
        TypeExpression::Named { name, position } => {
            let entry = table.lookup_or(
                SymbolTable::GLOBAL,
                name,
                Error::new(ErrorImpl::UndefinedType { name: name.clone() }, *position),
            )?;
            match entry {
                Entry::Type(type_entry) => Ok(type_entry.type_.clone()),
                _ => Err(Error::new(
                    ErrorImpl::NotAType { name: name.clone() },
                    *position,
                )),
            }
        }
        TypeExpression::Array {
            base_type, size, ..
        } => {
            let base = resolve_type_expression(table, base_type)?;
            Ok(Type::Array {
                base_type: Box::new(base),
                size: *size,
            })
        }
    }
}

fn enter_type_declaration(
    table: &mut SymbolTable,
    declaration: &TypeDeclaration,
) -> Result<(), Error> {
    let type_ = resolve_type_expression(table, &declaration.type_expression)?;
    table.enter(
        SymbolTable::GLOBAL,
        Entry::Type(TypeEntry {
            name: declaration.name.clone(),
            type_,
        }),
        Error::new(
            ErrorImpl::RedeclarationAsType {
                name: declaration.name.clone(),
            },
            declaration.position,
        ),
    )
}

fn enter_procedure_declaration(
    table: &mut SymbolTable,
    declaration: &ProcedureDeclaration,
) -> Result<(), Error> {
    if table
        .lookup_local(SymbolTable::GLOBAL, &declaration.name)
        .is_some()
    {
        return Err(Error::new(
            ErrorImpl::RedeclarationAsProcedure {
                name: declaration.name.clone(),
            },
            declaration.position,
        ));
    }

    let local_scope = table.create_scope(SymbolTable::GLOBAL);
    let mut parameter_types = Vec::new();

    for parameter in &declaration.parameters {
        let type_ = resolve_type_expression(table, &parameter.type_expression)?;
        parameter_types.push(ParameterType {
            type_: type_.clone(),
            is_reference: parameter.is_reference,
            offset: None,
        });
        table.enter(
            local_scope,
            Entry::Variable(VariableEntry {
                name: parameter.name.clone(),
                type_,
                is_reference: parameter.is_reference,
                offset: None,
            }),
            Error::new(
                ErrorImpl::RedeclarationAsParameter {
                    name: parameter.name.clone(),
                },
                parameter.position,
            ),
        )?;
    }

    for variable in &declaration.variables {
        let type_ = resolve_type_expression(table, &variable.type_expression)?;
        table.enter(
            local_scope,
            Entry::Variable(VariableEntry {
                name: variable.name.clone(),
                type_,
                is_reference: false,
                offset: None,
            }),
            Error::new(
                ErrorImpl::RedeclarationAsVariable {
                    name: variable.name.clone(),
                },
                variable.position,
            ),
        )?;
    }

    table.enter(
        SymbolTable::GLOBAL,
        Entry::Procedure(ProcedureEntry {
            name: declaration.name.clone(),
            local_scope,
            parameter_types,
            argument_area_size: 0,
            local_var_area_size: 0,
            outgoing_area_size: None,
        }),
        Error::new(
            ErrorImpl::RedeclarationAsProcedure {
                name: declaration.name.clone(),
            },
            declaration.position,
        ),
    )
}

/// The whole program is only valid if a parameterless procedure named
/// `main` exists; any violation here is fatal for the compilation.
fn check_main(table: &SymbolTable) -> Result<(), Error> {
    match table.lookup(SymbolTable::GLOBAL, "main") {
        None => Err(Error::new(ErrorImpl::MainIsMissing, Position::null())),
        Some(Entry::Procedure(entry)) => {
            if entry.parameter_types.is_empty() {
                Ok(())
            } else {
                Err(Error::new(
                    ErrorImpl::MainMustNotHaveParameters,
                    Position::null(),
                ))
            }
        }
        Some(_) => Err(Error::new(ErrorImpl::MainIsNotAProcedure, Position::null())),
    }
}
