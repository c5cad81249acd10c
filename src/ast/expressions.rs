use crate::Position;

/// Binary operators of the language.
///
/// Arithmetic operators combine two integer operands into an integer;
/// comparison operators combine two integer operands into a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Equ,
    Neq,
    Lst,
    Lse,
    Grt,
    Gre,
}

impl Operator {
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div
        )
    }

    pub fn is_comparison(self) -> bool {
        !self.is_arithmetic()
    }
}

#[derive(Debug, Clone)]
pub enum Expression {
    IntLiteral {
        value: i32,
        position: Position,
    },
    /// A variable read; the variable itself may be a plain name or an
    /// array element.
    Variable {
        variable: Variable,
        position: Position,
    },
    Binary {
        operator: Operator,
        left: Box<Expression>,
        right: Box<Expression>,
        position: Position,
    },
}

impl Expression {
    pub fn get_position(&self) -> Position {
        match self {
            Expression::IntLiteral { position, .. } => *position,
            Expression::Variable { position, .. } => *position,
            Expression::Binary { position, .. } => *position,
        }
    }
}

/// An assignable location: a named variable, possibly indexed.
#[derive(Debug, Clone)]
pub enum Variable {
    Named {
        name: String,
        position: Position,
    },
    ArrayAccess {
        array: Box<Variable>,
        index: Box<Expression>,
        position: Position,
    },
}

impl Variable {
    pub fn get_position(&self) -> Position {
        match self {
            Variable::Named { position, .. } => *position,
            Variable::ArrayAccess { position, .. } => *position,
        }
    }
}
