//! Code generation module.
//!
//! This module turns the checked and allocated program into assembly text
//! for the target machine. Expressions are evaluated in a stack of
//! general purpose registers, conditions branch on their negation to a
//! false continuation label, and every procedure body is wrapped in the
//! frame prologue and epilogue its table entry describes.
//!
//! One [`codegen::CodeGenerator`](codegen::CodeGenerator) instance owns
//! the label counter and the register stack for a whole compilation, so
//! labels are unique across procedures.

pub mod codegen;
pub mod expr;
pub mod output;
pub mod stmt;
