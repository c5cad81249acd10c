use super::table::ScopeId;
use super::types::Type;

/// A declared variable or parameter.
///
/// `offset` stays `None` until the storage allocator assigns the frame
/// offset: non-negative for parameters, negative for local variables.
#[derive(Debug, Clone)]
pub struct VariableEntry {
    pub name: String,
    pub type_: Type,
    pub is_reference: bool,
    pub offset: Option<i32>,
}

/// Calling-convention information about one parameter of a procedure.
///
/// The mode is fixed at declaration; `offset` is the byte position inside
/// the argument area, assigned in declaration order by the allocator.
#[derive(Debug, Clone)]
pub struct ParameterType {
    pub type_: Type,
    pub is_reference: bool,
    pub offset: Option<i32>,
}

/// A declared procedure together with its frame layout.
///
/// `outgoing_area_size` is `None` for a procedure whose body contains no
/// call statements; `Some(0)` means calls exist but need no argument bytes.
#[derive(Debug, Clone)]
pub struct ProcedureEntry {
    pub name: String,
    pub local_scope: ScopeId,
    pub parameter_types: Vec<ParameterType>,
    pub argument_area_size: i32,
    pub local_var_area_size: i32,
    pub outgoing_area_size: Option<i32>,
}

/// A named type alias; resolves to the aliased semantic type.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub name: String,
    pub type_: Type,
}

#[derive(Debug, Clone)]
pub enum Entry {
    Variable(VariableEntry),
    Procedure(ProcedureEntry),
    Type(TypeEntry),
}

impl Entry {
    pub fn get_name(&self) -> &str {
        match self {
            Entry::Variable(entry) => &entry.name,
            Entry::Procedure(entry) => &entry.name,
            Entry::Type(entry) => &entry.name,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableEntry> {
        match self {
            Entry::Variable(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_procedure(&self) -> Option<&ProcedureEntry> {
        match self {
            Entry::Procedure(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeEntry> {
        match self {
            Entry::Type(entry) => Some(entry),
            _ => None,
        }
    }
}
