#![allow(clippy::module_inception)]

use std::fmt::Display;

use colored::Colorize;

pub mod allocator;
pub mod ast;
pub mod codegen;
pub mod errors;
pub mod table;
pub mod type_checker;

use crate::ast::declarations::Program;
use crate::errors::errors::Error;

/// A line/column location in the source file.
///
/// Positions are produced by the parser, carried on every AST node and
/// reported verbatim in diagnostics. Errors that are not tied to a single
/// node (a missing `main`, register exhaustion) use [`Position::null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Runs the full backend pipeline on a parsed program.
///
/// The passes are strictly sequential: symbol table construction, procedure
/// body checking, storage allocation and code generation. The first error in
/// any pass aborts the whole compilation; on success the returned string is
/// the complete assembly text for the target machine.
pub fn compile(program: &Program) -> Result<String, Error> {
    let mut table = table::builder::build_table(program)?;
    type_checker::type_checker::check_program(program, &table)?;
    allocator::allocator::allocate_vars(program, &mut table);
    let code = codegen::codegen::generate(program, &table)?;
    Ok(code.to_string())
}

/// Prints a compilation error to stderr for a driver to surface.
pub fn display_error(error: &Error) {
    if error.get_position().is_null() {
        eprintln!("{} {}", "Error:".red().bold(), error.to_string().bold());
    } else {
        eprintln!(
            "{} {} {}",
            "Error:".red().bold(),
            error.to_string().bold(),
            format!("({})", error.get_position())
        );
    }
}
