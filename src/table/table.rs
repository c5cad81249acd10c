use std::collections::HashMap;

use crate::errors::errors::Error;

use super::entry::{Entry, ParameterType, ProcedureEntry, TypeEntry};
use super::types::Type;

/// Handle to one scope in the table's arena.
///
/// Scopes never move or disappear during a compilation, so a `ScopeId`
/// stays valid for the lifetime of the [`SymbolTable`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(pub usize);

#[derive(Debug)]
struct Scope {
    entries: HashMap<String, Entry>,
    parent: Option<ScopeId>,
}

/// The symbol table: an arena of nested scopes.
///
/// Lookups are case-sensitive and walk outward through parent scopes, so
/// the nearest enclosing declaration wins. Insertion is always into one
/// named scope; shadowing a name from an outer scope is legal, duplicating
/// a name within the same scope is not.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// The global scope, holding type aliases and procedures. Created
    /// first, so its handle is fixed.
    pub const GLOBAL: ScopeId = ScopeId(0);

    /// Creates a table whose global scope already holds the predefined
    /// type and the predefined runtime procedures.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            scopes: vec![Scope {
                entries: HashMap::new(),
                parent: None,
            }],
        };
        table.enter_predefined_types();
        table.enter_predefined_procedures();
        table
    }

    pub fn create_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope {
            entries: HashMap::new(),
            parent: Some(parent),
        });
        ScopeId(self.scopes.len() - 1)
    }

    /// Looks a name up in `scope` and, failing that, in its ancestors.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Entry> {
        let mut current = Some(scope);
        while let Some(scope_id) = current {
            let scope = &self.scopes[scope_id.0];
            if let Some(entry) = scope.entries.get(name) {
                return Some(entry);
            }
            current = scope.parent;
        }
        None
    }

    /// Like [`lookup`](Self::lookup), but fails with the given error when
    /// the name is not bound anywhere.
    pub fn lookup_or(&self, scope: ScopeId, name: &str, error: Error) -> Result<&Entry, Error> {
        self.lookup(scope, name).ok_or(error)
    }

    /// Looks a name up in `scope` only, without walking to parents.
    pub fn lookup_local(&self, scope: ScopeId, name: &str) -> Option<&Entry> {
        self.scopes[scope.0].entries.get(name)
    }

    /// Inserts an entry into `scope`, failing with the given error if the
    /// name is already bound in that same scope.
    pub fn enter(&mut self, scope: ScopeId, entry: Entry, error: Error) -> Result<(), Error> {
        let entries = &mut self.scopes[scope.0].entries;
        if entries.contains_key(entry.get_name()) {
            return Err(error);
        }
        entries.insert(entry.get_name().to_string(), entry);
        Ok(())
    }

    /// Mutable access to an entry of `scope` itself; used by the storage
    /// allocator to fill in offsets and area sizes.
    pub fn entry_mut(&mut self, scope: ScopeId, name: &str) -> Option<&mut Entry> {
        self.scopes[scope.0].entries.get_mut(name)
    }

    fn enter_predefined_types(&mut self) {
        self.scopes[Self::GLOBAL.0].entries.insert(
            "int".to_string(),
            Entry::Type(TypeEntry {
                name: "int".to_string(),
                type_: Type::Int,
            }),
        );
    }

    /// Enters the runtime procedures. They have no bodies to analyze, so
    /// their parameter offsets and argument area sizes are final here.
    fn enter_predefined_procedures(&mut self) {
        // printi(i: int)
        self.enter_predefined_procedure("printi", &[false]);
        // printc(c: int)
        self.enter_predefined_procedure("printc", &[false]);
        // readi(ref i: int)
        self.enter_predefined_procedure("readi", &[true]);
        // readc(ref c: int)
        self.enter_predefined_procedure("readc", &[true]);
        // exit()
        self.enter_predefined_procedure("exit", &[]);
        // time(ref t: int)
        self.enter_predefined_procedure("time", &[true]);
        // clearAll(color: int)
        self.enter_predefined_procedure("clearAll", &[false]);
        // setPixel(x: int, y: int, color: int)
        self.enter_predefined_procedure("setPixel", &[false; 3]);
        // drawLine(x1: int, y1: int, x2: int, y2: int, color: int)
        self.enter_predefined_procedure("drawLine", &[false; 5]);
        // drawCircle(x0: int, y0: int, radius: int, color: int)
        self.enter_predefined_procedure("drawCircle", &[false; 4]);
    }

    fn enter_predefined_procedure(&mut self, name: &str, reference_flags: &[bool]) {
        let mut parameter_types = Vec::new();
        let mut offset = 0;
        for &is_reference in reference_flags {
            parameter_types.push(ParameterType {
                type_: Type::Int,
                is_reference,
                offset: Some(offset),
            });
            // int parameters and reference cells are both one word
            offset += Type::Int.byte_size();
        }

        let local_scope = self.create_scope(Self::GLOBAL);
        self.scopes[Self::GLOBAL.0].entries.insert(
            name.to_string(),
            Entry::Procedure(ProcedureEntry {
                name: name.to_string(),
                local_scope,
                parameter_types,
                argument_area_size: offset,
                local_var_area_size: 0,
                outgoing_area_size: None,
            }),
        );
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
