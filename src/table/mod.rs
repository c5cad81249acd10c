//! Symbol table and type system module.
//!
//! This module holds the data the whole backend shares:
//!
//! - Semantic types with structural equality and byte sizes
//! - Symbol table entries for variables, procedures and type aliases
//! - A scope arena with outward lookup and scope-local insertion
//! - The table builder pass that populates scopes from global declarations
//!
//! The table is built once, read by the checker, written with offsets by
//! the allocator and read again by the code generator.

pub mod builder;
pub mod entry;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;
