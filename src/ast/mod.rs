//! AST (Abstract Syntax Tree) module
//!
//! Contains all definitions related to the AST structure the parser hands
//! to the backend. The node shapes are an input contract and are not
//! interpreted here; every pass walks them with exhaustive matches.
//!
//! Submodules:
//! - declarations: Program, global declarations, parameters and variables
//! - expressions: Expression and variable nodes plus binary operators
//! - statements: Definitions for various statement types
//! - types: Syntactic type expressions (resolved by the table builder)
pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;
