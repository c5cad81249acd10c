use crate::ast::declarations::{GlobalDeclaration, ProcedureDeclaration, Program};
use crate::ast::statements::Statement;
use crate::table::entry::{Entry, ProcedureEntry, VariableEntry};
use crate::table::table::{ScopeId, SymbolTable};

/// Size of a reference cell in the argument area. Reference parameters
/// pass an address, so their footprint is one word regardless of the
/// referenced type.
pub const REFERENCE_BYTE_SIZE: i32 = 4;

/// Assigns frame offsets and area sizes for every procedure of the
/// program.
///
/// Runs in two passes: the first lays out each procedure's own frame,
/// the second sizes the outgoing area from the argument areas of all
/// callees. The split matters because a call site may precede its
/// callee's declaration.
pub fn allocate_vars(program: &Program, table: &mut SymbolTable) {
    for declaration in &program.declarations {
        if let GlobalDeclaration::Procedure(procedure) = declaration {
            allocate_frame(procedure, table);
        }
    }
    for declaration in &program.declarations {
        if let GlobalDeclaration::Procedure(procedure) = declaration {
            allocate_outgoing_area(procedure, table);
        }
    }
}

fn allocate_frame(procedure: &ProcedureDeclaration, table: &mut SymbolTable) {
    let local_scope = procedure_entry(table, &procedure.name).local_scope;

    // parameters grow upward from the frame pointer
    let mut offset = 0;
    let mut parameter_offsets = Vec::with_capacity(procedure.parameters.len());
    for parameter in &procedure.parameters {
        let entry = variable_entry(table, local_scope, &parameter.name);
        let size = if entry.is_reference {
            REFERENCE_BYTE_SIZE
        } else {
            entry.type_.byte_size()
        };
        parameter_offsets.push(offset);
        offset += size;
    }
    let argument_area_size = offset;

    for (parameter, &parameter_offset) in procedure.parameters.iter().zip(&parameter_offsets) {
        set_variable_offset(table, local_scope, &parameter.name, parameter_offset);
    }

    // local variables grow downward from the frame pointer
    let mut offset = 0;
    for variable in &procedure.variables {
        let size = variable_entry(table, local_scope, &variable.name)
            .type_
            .byte_size();
        offset -= size;
        set_variable_offset(table, local_scope, &variable.name, offset);
    }
    let local_var_area_size = -offset;

    match table.entry_mut(SymbolTable::GLOBAL, &procedure.name) {
        Some(Entry::Procedure(entry)) => {
            entry.argument_area_size = argument_area_size;
            entry.local_var_area_size = local_var_area_size;
            for (parameter_type, &parameter_offset) in
                entry.parameter_types.iter_mut().zip(&parameter_offsets)
            {
                parameter_type.offset = Some(parameter_offset);
            }
        }
        _ => panic!("procedure {} missing from table", procedure.name),
    }
}

fn allocate_outgoing_area(procedure: &ProcedureDeclaration, table: &mut SymbolTable) {
    let mut outgoing_area_size = None;
    for statement in &procedure.body {
        size_calls(statement, table, &mut outgoing_area_size);
    }
    match table.entry_mut(SymbolTable::GLOBAL, &procedure.name) {
        Some(Entry::Procedure(entry)) => entry.outgoing_area_size = outgoing_area_size,
        _ => panic!("procedure {} missing from table", procedure.name),
    }
}

/// Folds the argument area sizes of all calls reachable in `statement`
/// into `outgoing_area_size`. Any call at all turns the area from absent
/// into present, even a zero-byte one.
fn size_calls(statement: &Statement, table: &SymbolTable, outgoing_area_size: &mut Option<i32>) {
    match statement {
        Statement::Call { name, .. } => {
            let callee_area = procedure_entry(table, name).argument_area_size;
            *outgoing_area_size =
                Some(outgoing_area_size.map_or(callee_area, |current| current.max(callee_area)));
        }
        Statement::Compound { statements, .. } => {
            for statement in statements {
                size_calls(statement, table, outgoing_area_size);
            }
        }
        Statement::If {
            then_part,
            else_part,
            ..
        } => {
            size_calls(then_part, table, outgoing_area_size);
            if let Some(else_part) = else_part {
                size_calls(else_part, table, outgoing_area_size);
            }
        }
        Statement::While { body, .. } => size_calls(body, table, outgoing_area_size),
        Statement::Empty { .. } | Statement::Assign { .. } => {}
    }
}

fn procedure_entry<'a>(table: &'a SymbolTable, name: &str) -> &'a ProcedureEntry {
    table
        .lookup(SymbolTable::GLOBAL, name)
        .and_then(Entry::as_procedure)
        .unwrap_or_else(|| panic!("procedure {name} missing from table"))
}

fn variable_entry<'a>(table: &'a SymbolTable, scope: ScopeId, name: &str) -> &'a VariableEntry {
    table
        .lookup_local(scope, name)
        .and_then(Entry::as_variable)
        .unwrap_or_else(|| panic!("variable {name} missing from scope"))
}

fn set_variable_offset(table: &mut SymbolTable, scope: ScopeId, name: &str, offset: i32) {
    match table.entry_mut(scope, name) {
        Some(Entry::Variable(entry)) => entry.offset = Some(offset),
        _ => panic!("variable {name} missing from scope"),
    }
}
