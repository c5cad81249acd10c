use crate::Position;

/// A syntactic type annotation as written in the source.
///
/// Type expressions are stored as names and array shapes during parsing and
/// resolved to semantic [`Type`](crate::table::types::Type) values by the
/// table builder.
#[derive(Debug, Clone)]
pub enum TypeExpression {
    Named {
        name: String,
        position: Position,
    },
    Array {
        base_type: Box<TypeExpression>,
        size: usize,
        position: Position,
    },
}

impl TypeExpression {
    pub fn get_position(&self) -> Position {
        match self {
            TypeExpression::Named { position, .. } => *position,
            TypeExpression::Array { position, .. } => *position,
        }
    }
}
