//! The public, read-only view of a satisfying assignment.
//!
//! `VariableStore` (see `atom.rs`) is the mutable tri-state table the solver
//! mutates while searching. Once a solve call succeeds, the solver freezes
//! that state into an `Assignment`: a total `variable name -> bool` map,
//! which is what `Solver::assignment()` hands back to callers.

use std::collections::HashMap;

use crate::atom::VariableStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: HashMap<String, bool>,
}

impl Assignment {
    /// Snapshot every variable in `store`. Every variable must be assigned;
    /// this is only called after the driver has reported SAT.
    pub fn snapshot(store: &VariableStore) -> Assignment {
        let mut values = HashMap::with_capacity(store.len());
        for id in store.ids() {
            let value = store
                .value(id)
                .as_bool()
                .expect("assignment snapshot taken while a variable is unassigned");
            values.insert(store.name(id).to_string(), value);
        }
        Assignment { values }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
