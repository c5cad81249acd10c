//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UndefinedVariable {
            name: "x".to_string(),
        },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "UndefinedVariable");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::AssignmentHasDifferentTypes, Position::new(42, 1));

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_error_message() {
    let error = Error::new(
        ErrorImpl::UndefinedType {
            name: "vec".to_string(),
        },
        Position::new(1, 9),
    );

    assert_eq!(error.to_string(), "undefined type vec");
}

#[test]
fn test_argument_error_message() {
    let error = Error::new(
        ErrorImpl::ArgumentMustBeAVariable {
            name: "swap".to_string(),
            index: 2,
        },
        Position::new(5, 12),
    );

    assert_eq!(
        error.to_string(),
        "procedure swap argument 2 must be a variable"
    );
}

#[test]
fn test_program_shape_errors_have_null_position() {
    let error = Error::new(ErrorImpl::MainIsMissing, Position::null());

    assert!(error.get_position().is_null());
    assert_eq!(error.to_string(), "procedure 'main' is missing");
}

#[test]
fn test_register_overflow_message() {
    let error = Error::new(ErrorImpl::RegisterOverflow, Position::null());

    assert_eq!(error.get_error_name(), "RegisterOverflow");
    assert_eq!(
        error.to_string(),
        "there are not enough registers to run this program"
    );
}
