use crate::ast::expressions::{Expression, Operator, Variable};
use crate::errors::errors::Error;
use crate::table::entry::{Entry, VariableEntry};
use crate::table::table::{ScopeId, SymbolTable};
use crate::table::types::Type;

use super::codegen::CodeGenerator;
use super::output::Register;

/// Evaluates an expression into a freshly pushed register.
///
/// The register holding the result is the topmost one; the caller pops
/// it once the value is consumed. Comparison operators never reach this
/// function, the checker confines them to condition context where
/// [`gen_condition`] turns them into branches.
pub fn gen_expression(
    generator: &mut CodeGenerator<'_>,
    expression: &Expression,
) -> Result<Register, Error> {
    match expression {
        Expression::IntLiteral { value, .. } => {
            let register = generator.registers.push()?;
            generator.sink.emit3("add", register, Register::ZERO, *value);
            Ok(register)
        }
        Expression::Variable { variable, .. } => {
            let register = gen_variable_address(generator, variable)?;
            generator.sink.emit3("ldw", register, register, 0);
            Ok(register)
        }
        Expression::Binary {
            operator,
            left,
            right,
            ..
        } => {
            let left_register = gen_expression(generator, left)?;
            let right_register = gen_expression(generator, right)?;
            let opcode = match operator {
                Operator::Add => "add",
                Operator::Sub => "sub",
                Operator::Mul => "mul",
                Operator::Div => "div",
                _ => panic!("comparison evaluated outside of a condition"),
            };
            generator
                .sink
                .emit3(opcode, left_register, left_register, right_register);
            generator.registers.pop();
            Ok(left_register)
        }
    }
}

/// Emits a condition as a branch on its negation: when the comparison
/// does not hold, control transfers to `false_label` and falls through
/// otherwise. Both operand registers are released.
pub fn gen_condition(
    generator: &mut CodeGenerator<'_>,
    condition: &Expression,
    false_label: &str,
) -> Result<(), Error> {
    match condition {
        Expression::Binary {
            operator,
            left,
            right,
            ..
        } if operator.is_comparison() => {
            let left_register = gen_expression(generator, left)?;
            let right_register = gen_expression(generator, right)?;
            let opcode = match operator {
                Operator::Equ => "bne",
                Operator::Neq => "beq",
                Operator::Lst => "bge",
                Operator::Lse => "bgt",
                Operator::Grt => "ble",
                Operator::Gre => "blt",
                _ => unreachable!(),
            };
            generator
                .sink
                .emit3(opcode, left_register, right_register, false_label);
            generator.registers.pop();
            generator.registers.pop();
            Ok(())
        }
        _ => panic!("condition is not a comparison"),
    }
}

/// Computes the address of a variable into a freshly pushed register.
///
/// Named variables are frame pointer relative; a reference parameter
/// holds an address in its slot, so one extra load indirects through it.
/// Array accesses bounds-check the index against the array length and
/// trap to `_indexError` on violation.
pub fn gen_variable_address(
    generator: &mut CodeGenerator<'_>,
    variable: &Variable,
) -> Result<Register, Error> {
    match variable {
        Variable::Named { name, .. } => {
            let entry = variable_entry(generator.table, generator.current_scope, name);
            let offset = entry
                .offset
                .unwrap_or_else(|| panic!("offset of {name} was never allocated"));
            let is_reference = entry.is_reference;
            let register = generator.registers.push()?;
            generator.sink.emit3("add", register, Register::FP, offset);
            if is_reference {
                generator.sink.emit3("ldw", register, register, 0);
            }
            Ok(register)
        }
        Variable::ArrayAccess { array, index, .. } => {
            let (length, element_size) =
                match variable_type(generator.table, generator.current_scope, array) {
                    Type::Array { base_type, size } => (size as i32, base_type.byte_size()),
                    _ => panic!("indexed variable is not an array"),
                };
            let address_register = gen_variable_address(generator, array)?;
            let index_register = gen_expression(generator, index)?;
            let length_register = generator.registers.push()?;
            generator
                .sink
                .emit3("add", length_register, Register::ZERO, length);
            generator
                .sink
                .emit3("bgeu", index_register, length_register, "_indexError");
            generator.registers.pop();
            generator
                .sink
                .emit3("mul", index_register, index_register, element_size);
            generator
                .sink
                .emit3("add", address_register, address_register, index_register);
            generator.registers.pop();
            Ok(address_register)
        }
    }
}

/// The static type of a variable, as the checker established it.
fn variable_type(table: &SymbolTable, scope: ScopeId, variable: &Variable) -> Type {
    match variable {
        Variable::Named { name, .. } => variable_entry(table, scope, name).type_.clone(),
        Variable::ArrayAccess { array, .. } => match variable_type(table, scope, array) {
            Type::Array { base_type, .. } => *base_type,
            _ => panic!("indexed variable is not an array"),
        },
    }
}

fn variable_entry<'a>(table: &'a SymbolTable, scope: ScopeId, name: &str) -> &'a VariableEntry {
    table
        .lookup(scope, name)
        .and_then(Entry::as_variable)
        .unwrap_or_else(|| panic!("variable {name} missing from table"))
}
