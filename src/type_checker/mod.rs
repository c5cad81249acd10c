//! Type checking and semantic analysis module.
//!
//! This module re-walks every procedure body against the local scope the
//! table builder created. It:
//!
//! - Resolves variable references and rejects non-variables
//! - Infers the type of every expression from its subtree
//! - Enforces assignment compatibility and array indexing rules
//! - Checks call sites for arity, argument modes and argument types
//! - Requires boolean conditions on `if` and `while`
//!
//! Types are threaded through return values; no AST node is mutated. The
//! first violation aborts the whole analysis.

pub mod type_checker;
