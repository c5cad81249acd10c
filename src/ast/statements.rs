use crate::Position;

use super::expressions::{Expression, Variable};

#[derive(Debug, Clone)]
pub enum Statement {
    Empty {
        position: Position,
    },
    Compound {
        statements: Vec<Statement>,
        position: Position,
    },
    Assign {
        target: Variable,
        value: Expression,
        position: Position,
    },
    If {
        condition: Expression,
        then_part: Box<Statement>,
        else_part: Option<Box<Statement>>,
        position: Position,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
        position: Position,
    },
    Call {
        name: String,
        arguments: Vec<Expression>,
        position: Position,
    },
}

impl Statement {
    pub fn get_position(&self) -> Position {
        match self {
            Statement::Empty { position } => *position,
            Statement::Compound { position, .. } => *position,
            Statement::Assign { position, .. } => *position,
            Statement::If { position, .. } => *position,
            Statement::While { position, .. } => *position,
            Statement::Call { position, .. } => *position,
        }
    }
}
