use std::fmt::Display;

/// The semantic type of an expression or variable.
///
/// Equality is structural: two array types are equal iff their base types
/// are equal and their lengths are equal, no matter where they were
/// declared. `Bool` only ever arises from comparison operators; the
/// language has no boolean variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
    Array { base_type: Box<Type>, size: usize },
}

impl Type {
    /// Bytes required to hold a value of this type. Scalars occupy one
    /// 4-byte machine word; arrays are laid out contiguously.
    pub fn byte_size(&self) -> i32 {
        match self {
            Type::Int | Type::Bool => 4,
            Type::Array { base_type, size } => base_type.byte_size() * *size as i32,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Type::Array { .. })
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "boolean"),
            Type::Array { base_type, size } => {
                write!(f, "array [{}] of {}", size, base_type)
            }
        }
    }
}
