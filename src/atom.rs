//! The variable arena.
//!
//! A [`Variable`] is identified by a stable name (the decimal string of its
//! DIMACS index) and owns a tri-state assignment. The arena guarantees that
//! every occurrence of the same name across all clauses shares one
//! [`Variable`]; that sharing is what canonicalisation means in this crate.

use std::collections::HashMap;
use std::fmt;

/// The value of a [`Variable`] under the current assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Unassigned,
    True,
    False,
}

impl Value {
    pub fn from_bool(value: bool) -> Value {
        if value {
            Value::True
        } else {
            Value::False
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Unassigned => None,
            Value::True => Some(true),
            Value::False => Some(false),
        }
    }
}

/// A stable index into the [`VariableStore`]. Cheap to copy, used as the
/// identity of a variable everywhere else in the crate (graph nodes, literal
/// antecedents, assignment lookups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub u32);

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Owns every [`Variable`] for the duration of one solve call. Names map to
/// ids through a side table so repeated clause construction (and
/// canonicalisation of externally built clauses) always resolves to the same
/// id for the same name.
#[derive(Debug, Default)]
pub struct VariableStore {
    names: Vec<String>,
    values: Vec<Value>,
    by_name: HashMap<String, VarId>,
}

impl VariableStore {
    pub fn new() -> VariableStore {
        VariableStore::default()
    }

    /// Return the id for `name`, interning a new unassigned variable if this
    /// is the first time `name` has been seen.
    pub fn intern(&mut self, name: &str) -> VarId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let id = VarId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.values.push(Value::Unassigned);
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn name(&self, id: VarId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn value(&self, id: VarId) -> Value {
        self.values[id.0 as usize]
    }

    pub fn assign(&mut self, id: VarId, value: bool) {
        self.values[id.0 as usize] = Value::from_bool(value);
    }

    pub fn unassign(&mut self, id: VarId) {
        self.values[id.0 as usize] = Value::Unassigned;
    }

    /// Reset every variable to unassigned, so a fresh solve run never sees
    /// leftover state from canonicalisation.
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = Value::Unassigned);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = VarId> {
        (0..self.names.len() as u32).map(VarId)
    }
}
