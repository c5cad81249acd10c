//! Storage allocation module.
//!
//! This module assigns a frame-relative byte offset to every parameter
//! and local variable and computes the three area sizes of each
//! procedure's frame:
//!
//! - `argument_area_size`: bytes of incoming arguments, offsets counting
//!   up from 0 in declaration order
//! - `local_var_area_size`: bytes of local variables, offsets counting
//!   down from 0 in declaration order
//! - `outgoing_area_size`: the widest argument area of any procedure
//!   called from the body, or nothing at all for a leaf procedure
//!
//! Allocation runs after type checking and cannot fail; it only fills in
//! the table entries the code generator reads.

pub mod allocator;

#[cfg(test)]
mod tests;
