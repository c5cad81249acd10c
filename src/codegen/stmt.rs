use crate::ast::expressions::Expression;
use crate::ast::statements::Statement;
use crate::errors::errors::Error;
use crate::table::entry::Entry;

use super::codegen::CodeGenerator;
use super::expr::{gen_condition, gen_expression, gen_variable_address};
use super::output::Register;

/// Emits the code for one statement. All registers pushed while
/// evaluating subexpressions are released again, so statement emission
/// starts and ends with an empty register stack.
pub fn gen_statement(generator: &mut CodeGenerator<'_>, statement: &Statement) -> Result<(), Error> {
    match statement {
        Statement::Empty { .. } => Ok(()),
        Statement::Compound { statements, .. } => {
            for statement in statements {
                gen_statement(generator, statement)?;
            }
            Ok(())
        }
        Statement::Assign { target, value, .. } => {
            let target_register = gen_variable_address(generator, target)?;
            let value_register = gen_expression(generator, value)?;
            generator
                .sink
                .emit3("stw", value_register, target_register, 0);
            generator.registers.pop();
            generator.registers.pop();
            Ok(())
        }
        Statement::If {
            condition,
            then_part,
            else_part: None,
            ..
        } => {
            let end_label = generator.new_label();
            gen_condition(generator, condition, &end_label)?;
            gen_statement(generator, then_part)?;
            generator.sink.label(&end_label);
            Ok(())
        }
        Statement::If {
            condition,
            then_part,
            else_part: Some(else_part),
            ..
        } => {
            let else_label = generator.new_label();
            let end_label = generator.new_label();
            gen_condition(generator, condition, &else_label)?;
            gen_statement(generator, then_part)?;
            generator.sink.emit1("j", end_label.as_str());
            generator.sink.label(&else_label);
            gen_statement(generator, else_part)?;
            generator.sink.label(&end_label);
            Ok(())
        }
        Statement::While {
            condition, body, ..
        } => {
            let start_label = generator.new_label();
            let end_label = generator.new_label();
            generator.sink.label(&start_label);
            gen_condition(generator, condition, &end_label)?;
            gen_statement(generator, body)?;
            generator.sink.emit1("j", start_label.as_str());
            generator.sink.label(&end_label);
            Ok(())
        }
        Statement::Call {
            name, arguments, ..
        } => gen_call(generator, name, arguments),
    }
}

/// Marshals the arguments into the outgoing area and jumps to the
/// callee. Value arguments are evaluated, reference arguments pass the
/// address of their variable; either way one word lands at the
/// parameter's offset above the stack pointer.
fn gen_call(
    generator: &mut CodeGenerator<'_>,
    name: &str,
    arguments: &[Expression],
) -> Result<(), Error> {
    let table = generator.table;
    let entry = table
        .lookup(generator.current_scope, name)
        .and_then(Entry::as_procedure)
        .unwrap_or_else(|| panic!("procedure {name} missing from table"));

    for (argument, parameter) in arguments.iter().zip(&entry.parameter_types) {
        let register = if parameter.is_reference {
            match argument {
                Expression::Variable { variable, .. } => {
                    gen_variable_address(generator, variable)?
                }
                _ => panic!("reference argument is not a variable"),
            }
        } else {
            gen_expression(generator, argument)?
        };
        let offset = parameter
            .offset
            .unwrap_or_else(|| panic!("parameter offset of {name} was never allocated"));
        generator.sink.emit3("stw", register, Register::SP, offset);
        generator.registers.pop();
    }

    generator.sink.emit1("jal", name);
    Ok(())
}
