use crate::ast::declarations::{GlobalDeclaration, Program};
use crate::ast::expressions::{Expression, Variable};
use crate::ast::statements::Statement;
use crate::errors::errors::{Error, ErrorImpl};
use crate::table::entry::Entry;
use crate::table::table::{ScopeId, SymbolTable};
use crate::table::types::Type;

/// Checks every procedure body of the program against the symbol table.
pub fn check_program(program: &Program, table: &SymbolTable) -> Result<(), Error> {
    for declaration in &program.declarations {
        if let GlobalDeclaration::Procedure(procedure) = declaration {
            let entry = table
                .lookup(SymbolTable::GLOBAL, &procedure.name)
                .and_then(Entry::as_procedure)
                .unwrap_or_else(|| panic!("procedure {} missing from table", procedure.name));
            let local_scope = entry.local_scope;
            for statement in &procedure.body {
                check_statement(table, local_scope, statement)?;
            }
        }
    }
    Ok(())
}

fn check_statement(
    table: &SymbolTable,
    scope: ScopeId,
    statement: &Statement,
) -> Result<(), Error> {
    match statement {
        Statement::Empty { .. } => Ok(()),
        Statement::Compound { statements, .. } => {
            for statement in statements {
                check_statement(table, scope, statement)?;
            }
            Ok(())
        }
        Statement::Assign {
            target,
            value,
            position,
        } => {
            let target_type = check_variable(table, scope, target)?;
            let value_type = check_expression(table, scope, value)?;
            if target_type != value_type {
                return Err(Error::new(
                    ErrorImpl::AssignmentHasDifferentTypes,
                    *position,
                ));
            }
            Ok(())
        }
        Statement::If {
            condition,
            then_part,
            else_part,
            ..
        } => {
            let condition_type = check_expression(table, scope, condition)?;
            if condition_type != Type::Bool {
                return Err(Error::new(
                    ErrorImpl::IfConditionMustBeBoolean,
                    condition.get_position(),
                ));
            }
            check_statement(table, scope, then_part)?;
            if let Some(else_part) = else_part {
                check_statement(table, scope, else_part)?;
            }
            Ok(())
        }
        Statement::While {
            condition, body, ..
        } => {
            let condition_type = check_expression(table, scope, condition)?;
            if condition_type != Type::Bool {
                return Err(Error::new(
                    ErrorImpl::WhileConditionMustBeBoolean,
                    condition.get_position(),
                ));
            }
            check_statement(table, scope, body)
        }
        Statement::Call {
            name,
            arguments,
            position,
        } => check_call(table, scope, name, arguments, *position),
    }
}

fn check_call(
    table: &SymbolTable,
    scope: ScopeId,
    name: &str,
    arguments: &[Expression],
    position: crate::Position,
) -> Result<(), Error> {
    let entry = table.lookup_or(
        scope,
        name,
        Error::new(
            ErrorImpl::UndefinedProcedure {
                name: name.to_string(),
            },
            position,
        ),
    )?;
    let procedure = entry.as_procedure().ok_or_else(|| {
        Error::new(
            ErrorImpl::CallOfNonProcedure {
                name: name.to_string(),
            },
            position,
        )
    })?;

    if arguments.len() > procedure.parameter_types.len() {
        return Err(Error::new(
            ErrorImpl::TooManyArguments {
                name: name.to_string(),
            },
            position,
        ));
    }
    if arguments.len() < procedure.parameter_types.len() {
        return Err(Error::new(
            ErrorImpl::TooFewArguments {
                name: name.to_string(),
            },
            position,
        ));
    }

    // all argument expressions are checked before any mode/type rules
    let mut argument_types = Vec::with_capacity(arguments.len());
    for argument in arguments {
        argument_types.push(check_expression(table, scope, argument)?);
    }

    for (index, (argument, parameter)) in arguments
        .iter()
        .zip(&procedure.parameter_types)
        .enumerate()
    {
        if parameter.is_reference && !matches!(argument, Expression::Variable { .. }) {
            return Err(Error::new(
                ErrorImpl::ArgumentMustBeAVariable {
                    name: name.to_string(),
                    index: index + 1,
                },
                argument.get_position(),
            ));
        }
        // arrays are always passed by reference; copying one through the
        // argument area is rejected
        if argument_types[index].is_array() && !parameter.is_reference {
            return Err(Error::new(
                ErrorImpl::MustBeAReferenceParameter {
                    name: name.to_string(),
                    index: index + 1,
                },
                argument.get_position(),
            ));
        }
        if argument_types[index] != parameter.type_ {
            return Err(Error::new(
                ErrorImpl::ArgumentTypeMismatch {
                    name: name.to_string(),
                    index: index + 1,
                },
                argument.get_position(),
            ));
        }
    }
    Ok(())
}

/// Infers and validates the type of an expression. The result depends
/// only on the expression's subtree and the symbol table.
fn check_expression(
    table: &SymbolTable,
    scope: ScopeId,
    expression: &Expression,
) -> Result<Type, Error> {
    match expression {
        Expression::IntLiteral { .. } => Ok(Type::Int),
        Expression::Variable { variable, .. } => check_variable(table, scope, variable),
        Expression::Binary {
            operator,
            left,
            right,
            position,
        } => {
            let left_type = check_expression(table, scope, left)?;
            let right_type = check_expression(table, scope, right)?;
            if left_type != right_type {
                return Err(Error::new(ErrorImpl::OperatorDifferentTypes, *position));
            }
            if operator.is_arithmetic() {
                if left_type != Type::Int {
                    return Err(Error::new(ErrorImpl::ArithmeticOperatorNonInteger, *position));
                }
                Ok(Type::Int)
            } else {
                if left_type != Type::Int {
                    return Err(Error::new(
                        ErrorImpl::ComparisonNonInteger,
                        left.get_position(),
                    ));
                }
                Ok(Type::Bool)
            }
        }
    }
}

fn check_variable(table: &SymbolTable, scope: ScopeId, variable: &Variable) -> Result<Type, Error> {
    match variable {
        Variable::Named { name, position } => match table.lookup(scope, name) {
            None => Err(Error::new(
                ErrorImpl::UndefinedVariable { name: name.clone() },
                *position,
            )),
            Some(Entry::Variable(entry)) => Ok(entry.type_.clone()),
            Some(_) => Err(Error::new(
                ErrorImpl::NotAVariable { name: name.clone() },
                *position,
            )),
        },
        Variable::ArrayAccess { array, index, .. } => {
            let array_type = check_variable(table, scope, array)?;
            let index_type = check_expression(table, scope, index)?;
            let base_type = match array_type {
                Type::Array { base_type, .. } => *base_type,
                _ => {
                    return Err(Error::new(
                        ErrorImpl::IndexingNonArray,
                        array.get_position(),
                    ))
                }
            };
            if index_type != Type::Int {
                return Err(Error::new(
                    ErrorImpl::IndexingWithNonInteger,
                    index.get_position(),
                ));
            }
            Ok(base_type)
        }
    }
}
