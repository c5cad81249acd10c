use std::fmt::{self, Display, Formatter};

/// A machine register, printed as `$n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register(pub u8);

impl Register {
    /// Hardwired zero.
    pub const ZERO: Register = Register(0);
    /// Frame pointer.
    pub const FP: Register = Register(25);
    /// Stack pointer.
    pub const SP: Register = Register(29);
    /// Return address, written by `jal`.
    pub const RA: Register = Register(31);
}

impl Display for Register {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// One operand of an emitted instruction.
#[derive(Debug, Clone)]
pub enum Operand {
    Register(Register),
    Immediate(i32),
    Label(String),
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(register) => write!(f, "{register}"),
            Operand::Immediate(value) => write!(f, "{value}"),
            Operand::Label(name) => write!(f, "{name}"),
        }
    }
}

impl From<Register> for Operand {
    fn from(register: Register) -> Self {
        Operand::Register(register)
    }
}

impl From<i32> for Operand {
    fn from(value: i32) -> Self {
        Operand::Immediate(value)
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Label(name.to_string())
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Operand::Label(name)
    }
}

#[derive(Debug)]
enum AsmItem {
    Instruction {
        opcode: &'static str,
        operands: Vec<Operand>,
        comment: Option<&'static str>,
    },
    Label(String),
    Import(&'static str),
    Export(String),
    Blank,
    Directive(&'static str),
}

/// Collects assembly items in emission order and renders them as the
/// final assembly text.
#[derive(Debug, Default)]
pub struct CodeSink {
    items: Vec<AsmItem>,
}

impl CodeSink {
    pub fn new() -> Self {
        CodeSink { items: Vec::new() }
    }

    fn emit(&mut self, opcode: &'static str, operands: Vec<Operand>, comment: Option<&'static str>) {
        self.items.push(AsmItem::Instruction {
            opcode,
            operands,
            comment,
        });
    }

    pub fn emit1(&mut self, opcode: &'static str, operand: impl Into<Operand>) {
        self.emit(opcode, vec![operand.into()], None);
    }

    pub fn emit1_commented(
        &mut self,
        opcode: &'static str,
        operand: impl Into<Operand>,
        comment: &'static str,
    ) {
        self.emit(opcode, vec![operand.into()], Some(comment));
    }

    pub fn emit3(
        &mut self,
        opcode: &'static str,
        first: impl Into<Operand>,
        second: impl Into<Operand>,
        third: impl Into<Operand>,
    ) {
        self.emit(opcode, vec![first.into(), second.into(), third.into()], None);
    }

    pub fn emit3_commented(
        &mut self,
        opcode: &'static str,
        first: impl Into<Operand>,
        second: impl Into<Operand>,
        third: impl Into<Operand>,
        comment: &'static str,
    ) {
        self.emit(
            opcode,
            vec![first.into(), second.into(), third.into()],
            Some(comment),
        );
    }

    pub fn label(&mut self, name: &str) {
        self.items.push(AsmItem::Label(name.to_string()));
    }

    pub fn import(&mut self, name: &'static str) {
        self.items.push(AsmItem::Import(name));
    }

    pub fn export(&mut self, name: &str) {
        self.items.push(AsmItem::Export(name.to_string()));
    }

    pub fn blank(&mut self) {
        self.items.push(AsmItem::Blank);
    }

    pub fn directive(&mut self, text: &'static str) {
        self.items.push(AsmItem::Directive(text));
    }
}

impl Display for CodeSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            match item {
                AsmItem::Instruction {
                    opcode,
                    operands,
                    comment,
                } => {
                    write!(f, "\t{opcode}\t")?;
                    for (index, operand) in operands.iter().enumerate() {
                        if index > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{operand}")?;
                    }
                    if let Some(comment) = comment {
                        write!(f, "\t\t; {comment}")?;
                    }
                    writeln!(f)?;
                }
                AsmItem::Label(name) => writeln!(f, "{name}:")?,
                AsmItem::Import(name) => writeln!(f, "\t.import\t{name}")?,
                AsmItem::Export(name) => writeln!(f, "\t.export\t{name}")?,
                AsmItem::Blank => writeln!(f)?,
                AsmItem::Directive(text) => writeln!(f, "\t{text}")?,
            }
        }
        Ok(())
    }
}
