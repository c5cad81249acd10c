//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the backend. It
//! includes:
//!
//! - An error structure carrying source position information
//! - The closed set of error variants the passes can produce
//! - Error formatting and display functionality
//!
//! Every pass fails fast: the first error aborts the pass and the whole
//! compilation, so an [`Error`](errors::Error) always describes the first
//! violation found.

pub mod errors;

#[cfg(test)]
mod tests;
