use crate::ast::declarations::{GlobalDeclaration, ProcedureDeclaration, Program};
use crate::errors::errors::{Error, ErrorImpl};
use crate::table::entry::{Entry, ProcedureEntry};
use crate::table::table::{ScopeId, SymbolTable};
use crate::Position;

use super::output::{CodeSink, Register};
use super::stmt::gen_statement;

/// Number of general purpose registers available for expression
/// evaluation.
pub const REGISTER_POOL_SIZE: u8 = 16;

/// First register of the evaluation pool; the registers below it are
/// reserved for the calling convention.
pub const FIRST_FREE_REGISTER: u8 = 8;

/// The expression evaluation registers, managed in stack discipline.
///
/// Expressions allocate registers strictly last-in first-out, so a plain
/// depth counter is enough. Exhausting the pool is a reportable
/// compilation error, not a panic; popping an empty stack is a bug in
/// the generator itself.
#[derive(Debug)]
pub struct RegisterStack {
    depth: u8,
}

impl RegisterStack {
    pub fn new() -> Self {
        RegisterStack { depth: 0 }
    }

    pub fn push(&mut self) -> Result<Register, Error> {
        if self.depth == REGISTER_POOL_SIZE {
            return Err(Error::new(ErrorImpl::RegisterOverflow, Position::null()));
        }
        let register = Register(FIRST_FREE_REGISTER + self.depth);
        self.depth += 1;
        Ok(register)
    }

    pub fn pop(&mut self) {
        self.depth = self
            .depth
            .checked_sub(1)
            .expect("register stack underflow");
    }
}

impl Default for RegisterStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame geometry of one procedure, derived from its table entry.
///
/// The frame always holds the local variable area and the saved frame
/// pointer. A procedure that performs calls additionally reserves the
/// outgoing argument area and a save slot for the return register.
struct FrameLayout {
    size: i32,
    fp_offset: i32,
    ra_offset: Option<i32>,
}

impl FrameLayout {
    fn of(entry: &ProcedureEntry) -> Self {
        match entry.outgoing_area_size {
            Some(outgoing_area_size) => FrameLayout {
                size: entry.local_var_area_size + 4 + outgoing_area_size + 4,
                fp_offset: outgoing_area_size + 4,
                ra_offset: Some(-(entry.local_var_area_size + 8)),
            },
            None => FrameLayout {
                size: entry.local_var_area_size + 4,
                fp_offset: 0,
                ra_offset: None,
            },
        }
    }
}

/// Generates the assembly text for a fully analyzed program.
pub fn generate(program: &Program, table: &SymbolTable) -> Result<CodeSink, Error> {
    let mut generator = CodeGenerator::new(table);
    generator.prolog();
    for declaration in &program.declarations {
        if let GlobalDeclaration::Procedure(procedure) = declaration {
            generator.generate_procedure(procedure)?;
        }
    }
    Ok(generator.sink)
}

/// State shared by all emission routines of one compilation.
pub struct CodeGenerator<'a> {
    pub(super) table: &'a SymbolTable,
    pub(super) sink: CodeSink,
    pub(super) registers: RegisterStack,
    pub(super) current_scope: ScopeId,
    label_counter: usize,
}

impl<'a> CodeGenerator<'a> {
    fn new(table: &'a SymbolTable) -> Self {
        CodeGenerator {
            table,
            sink: CodeSink::new(),
            registers: RegisterStack::new(),
            current_scope: SymbolTable::GLOBAL,
            label_counter: 0,
        }
    }

    /// Returns a fresh label, unique across the whole compilation.
    pub(super) fn new_label(&mut self) -> String {
        let label = format!("L{}", self.label_counter);
        self.label_counter += 1;
        label
    }

    /// Emits the import list for the runtime procedures and the bounds
    /// check handler, then opens the code segment.
    fn prolog(&mut self) {
        self.sink.import("printi");
        self.sink.import("printc");
        self.sink.import("readi");
        self.sink.import("readc");
        self.sink.import("exit");
        self.sink.import("time");
        self.sink.import("clearAll");
        self.sink.import("setPixel");
        self.sink.import("drawLine");
        self.sink.import("drawCircle");
        self.sink.import("_indexError");
        self.sink.blank();
        self.sink.directive(".code");
        self.sink.directive(".align\t4");
    }

    fn generate_procedure(&mut self, procedure: &ProcedureDeclaration) -> Result<(), Error> {
        let entry = self
            .table
            .lookup(SymbolTable::GLOBAL, &procedure.name)
            .and_then(Entry::as_procedure)
            .unwrap_or_else(|| panic!("procedure {} missing from table", procedure.name));
        let frame = FrameLayout::of(entry);
        self.current_scope = entry.local_scope;

        self.sink.blank();
        self.sink.export(&procedure.name);
        self.sink.label(&procedure.name);
        self.sink
            .emit3_commented("sub", Register::SP, Register::SP, frame.size, "allocate frame");
        self.sink.emit3_commented(
            "stw",
            Register::FP,
            Register::SP,
            frame.fp_offset,
            "save old frame pointer",
        );
        self.sink.emit3_commented(
            "add",
            Register::FP,
            Register::SP,
            frame.size,
            "setup new frame pointer",
        );
        if let Some(ra_offset) = frame.ra_offset {
            self.sink.emit3_commented(
                "stw",
                Register::RA,
                Register::FP,
                ra_offset,
                "save return register",
            );
        }

        for statement in &procedure.body {
            gen_statement(self, statement)?;
        }

        if let Some(ra_offset) = frame.ra_offset {
            self.sink.emit3_commented(
                "ldw",
                Register::RA,
                Register::FP,
                ra_offset,
                "restore return register",
            );
        }
        self.sink.emit3_commented(
            "ldw",
            Register::FP,
            Register::SP,
            frame.fp_offset,
            "restore old frame pointer",
        );
        self.sink
            .emit3_commented("add", Register::SP, Register::SP, frame.size, "release frame");
        self.sink.emit1_commented("jr", Register::RA, "return");
        Ok(())
    }
}
