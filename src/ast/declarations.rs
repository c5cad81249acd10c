use crate::Position;

use super::statements::Statement;
use super::types::TypeExpression;

#[derive(Debug, Clone)]
pub struct ParameterDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    /// `true` for reference-mode parameters; fixed at declaration.
    pub is_reference: bool,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct ProcedureDeclaration {
    pub name: String,
    pub parameters: Vec<ParameterDeclaration>,
    pub variables: Vec<VariableDeclaration>,
    pub body: Vec<Statement>,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub enum GlobalDeclaration {
    Procedure(ProcedureDeclaration),
    Type(TypeDeclaration),
}

impl GlobalDeclaration {
    pub fn get_name(&self) -> &str {
        match self {
            GlobalDeclaration::Procedure(declaration) => &declaration.name,
            GlobalDeclaration::Type(declaration) => &declaration.name,
        }
    }

    pub fn get_position(&self) -> Position {
        match self {
            GlobalDeclaration::Procedure(declaration) => declaration.position,
            GlobalDeclaration::Type(declaration) => declaration.position,
        }
    }
}

/// The root node handed over by the parser: an ordered sequence of global
/// declarations.
#[derive(Debug, Clone)]
pub struct Program {
    pub declarations: Vec<GlobalDeclaration>,
}
