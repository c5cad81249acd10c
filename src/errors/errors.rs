use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A compilation error: one of the closed set of violations in
/// [`ErrorImpl`], plus the source position it was detected at.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Stable discriminator for the error kind, independent of the
    /// rendered message.
    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::UndefinedProcedure { .. } => "UndefinedProcedure",
            ErrorImpl::UndefinedType { .. } => "UndefinedType",
            ErrorImpl::NotAVariable { .. } => "NotAVariable",
            ErrorImpl::NotAType { .. } => "NotAType",
            ErrorImpl::NotAProcedure { .. } => "NotAProcedure",
            ErrorImpl::RedeclarationAsProcedure { .. } => "RedeclarationAsProcedure",
            ErrorImpl::RedeclarationAsVariable { .. } => "RedeclarationAsVariable",
            ErrorImpl::RedeclarationAsParameter { .. } => "RedeclarationAsParameter",
            ErrorImpl::RedeclarationAsType { .. } => "RedeclarationAsType",
            ErrorImpl::AssignmentHasDifferentTypes => "AssignmentHasDifferentTypes",
            ErrorImpl::ArithmeticOperatorNonInteger => "ArithmeticOperatorNonInteger",
            ErrorImpl::ComparisonNonInteger => "ComparisonNonInteger",
            ErrorImpl::OperatorDifferentTypes => "OperatorDifferentTypes",
            ErrorImpl::IfConditionMustBeBoolean => "IfConditionMustBeBoolean",
            ErrorImpl::WhileConditionMustBeBoolean => "WhileConditionMustBeBoolean",
            ErrorImpl::IndexingNonArray => "IndexingNonArray",
            ErrorImpl::IndexingWithNonInteger => "IndexingWithNonInteger",
            ErrorImpl::CallOfNonProcedure { .. } => "CallOfNonProcedure",
            ErrorImpl::TooManyArguments { .. } => "TooManyArguments",
            ErrorImpl::TooFewArguments { .. } => "TooFewArguments",
            ErrorImpl::ArgumentMustBeAVariable { .. } => "ArgumentMustBeAVariable",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
            ErrorImpl::MustBeAReferenceParameter { .. } => "MustBeAReferenceParameter",
            ErrorImpl::MainIsMissing => "MainIsMissing",
            ErrorImpl::MainIsNotAProcedure => "MainIsNotAProcedure",
            ErrorImpl::MainMustNotHaveParameters => "MainMustNotHaveParameters",
            ErrorImpl::RegisterOverflow => "RegisterOverflow",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

/// The closed set of violations the backend can report.
///
/// Name-resolution and redeclaration errors come out of the table builder,
/// typing and call-site errors out of the procedure body checker, the
/// program-shape errors out of the final `main` validation and
/// `RegisterOverflow` out of code generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("undefined variable {name}")]
    UndefinedVariable { name: String },
    #[error("undefined procedure {name}")]
    UndefinedProcedure { name: String },
    #[error("undefined type {name}")]
    UndefinedType { name: String },
    #[error("{name} is not a variable")]
    NotAVariable { name: String },
    #[error("{name} is not a type")]
    NotAType { name: String },
    #[error("{name} is not a procedure")]
    NotAProcedure { name: String },
    #[error("redeclaration of {name} as procedure")]
    RedeclarationAsProcedure { name: String },
    #[error("redeclaration of {name} as variable")]
    RedeclarationAsVariable { name: String },
    #[error("redeclaration of {name} as parameter")]
    RedeclarationAsParameter { name: String },
    #[error("redeclaration of {name} as type")]
    RedeclarationAsType { name: String },
    #[error("assignment has different types")]
    AssignmentHasDifferentTypes,
    #[error("arithmetic operation requires integer operands")]
    ArithmeticOperatorNonInteger,
    #[error("comparison requires integer operands")]
    ComparisonNonInteger,
    #[error("expression combines different types")]
    OperatorDifferentTypes,
    #[error("'if' test expression must be of type boolean")]
    IfConditionMustBeBoolean,
    #[error("'while' test expression must be of type boolean")]
    WhileConditionMustBeBoolean,
    #[error("illegal indexing a non-array")]
    IndexingNonArray,
    #[error("illegal indexing with a non-integer")]
    IndexingWithNonInteger,
    #[error("call of non-procedure {name}")]
    CallOfNonProcedure { name: String },
    #[error("procedure {name} called with too many arguments")]
    TooManyArguments { name: String },
    #[error("procedure {name} called with too few arguments")]
    TooFewArguments { name: String },
    #[error("procedure {name} argument {index} must be a variable")]
    ArgumentMustBeAVariable { name: String, index: usize },
    #[error("procedure {name} argument {index} type mismatch")]
    ArgumentTypeMismatch { name: String, index: usize },
    #[error("procedure {name} argument {index} must be a reference parameter")]
    MustBeAReferenceParameter { name: String, index: usize },
    #[error("procedure 'main' is missing")]
    MainIsMissing,
    #[error("'main' is not a procedure")]
    MainIsNotAProcedure,
    #[error("procedure 'main' must not have any parameters")]
    MainMustNotHaveParameters,
    #[error("there are not enough registers to run this program")]
    RegisterOverflow,
}
