//! Decision heuristics.
//!
//! `DecisionHeuristic` exposes a single `choose` operation, with concrete
//! strategies plugged in as a trait object held by the driver. `External`
//! generalises "ask a human at the keyboard" to "ask a pluggable oracle",
//! so tests and other callers can script decisions deterministically.

use std::collections::HashMap;

use crate::atom::{VarId, VariableStore};
use crate::clause::Clause;
use crate::error::SolverError;

/// A variable to assign plus the polarity to assign it.
pub type Choice = (VarId, bool);

pub trait DecisionHeuristic {
    /// Pick one unassigned variable and a polarity. `unresolved` holds every
    /// clause that is not yet satisfied. Returns `Ok(None)` when every
    /// clause is satisfied or no unresolved clause has an unassigned
    /// variable left.
    fn choose(
        &mut self,
        unresolved: &[&Clause],
        store: &VariableStore,
    ) -> Result<Option<Choice>, SolverError>;
}

/// Select any unresolved clause, then any unassigned literal within it, and
/// assign its variable to true.
#[derive(Debug, Default)]
pub struct FirstFit;

impl DecisionHeuristic for FirstFit {
    fn choose(
        &mut self,
        unresolved: &[&Clause],
        store: &VariableStore,
    ) -> Result<Option<Choice>, SolverError> {
        for clause in unresolved {
            for literal in clause.literals() {
                if literal.is_unassigned(store) {
                    return Ok(Some((literal.variable, true)));
                }
            }
        }
        Ok(None)
    }
}

/// Dynamic Largest Individual Sum: pick the unassigned variable with the
/// highest positive-or-negative occurrence count across unresolved clauses,
/// assigning the polarity with the larger count. Ties broken by insertion
/// order.
#[derive(Debug, Default)]
pub struct Dlis;

impl DecisionHeuristic for Dlis {
    fn choose(
        &mut self,
        unresolved: &[&Clause],
        store: &VariableStore,
    ) -> Result<Option<Choice>, SolverError> {
        let mut positive: HashMap<VarId, usize> = HashMap::new();
        let mut negative: HashMap<VarId, usize> = HashMap::new();
        let mut order: Vec<VarId> = Vec::new();

        for clause in unresolved {
            for literal in clause.literals() {
                if !literal.is_unassigned(store) {
                    continue;
                }
                if !positive.contains_key(&literal.variable) {
                    order.push(literal.variable);
                }
                let counter = if literal.polarity.is_positive() {
                    &mut positive
                } else {
                    &mut negative
                };
                *counter.entry(literal.variable).or_insert(0) += 1;
            }
        }

        if order.is_empty() {
            return Ok(None);
        }

        let best = order
            .into_iter()
            .max_by_key(|v| {
                let p = *positive.get(v).unwrap_or(&0);
                let n = *negative.get(v).unwrap_or(&0);
                p.max(n)
            })
            .expect("non-empty order guarantees a maximum");

        let p = *positive.get(&best).unwrap_or(&0);
        let n = *negative.get(&best).unwrap_or(&0);
        Ok(Some((best, p >= n)))
    }
}

/// Consult an external oracle (e.g. a test harness) for the next choice.
pub trait ExternalOracle {
    /// Return the next `(variable name, value)` to assign, or `None` if the
    /// oracle has nothing left to contribute (falls back to reporting no
    /// more decisions).
    fn next_choice(&mut self, unresolved: &[&Clause], store: &VariableStore) -> Option<(String, bool)>;
}

pub struct External<O: ExternalOracle> {
    oracle: O,
}

impl<O: ExternalOracle> External<O> {
    pub fn new(oracle: O) -> External<O> {
        External { oracle }
    }
}

impl<O: ExternalOracle> DecisionHeuristic for External<O> {
    fn choose(
        &mut self,
        unresolved: &[&Clause],
        store: &VariableStore,
    ) -> Result<Option<Choice>, SolverError> {
        match self.oracle.next_choice(unresolved, store) {
            None => Ok(None),
            Some((name, value)) => {
                let variable = store
                    .ids()
                    .find(|&id| store.name(id) == name)
                    .ok_or(SolverError::UserAbort(name))?;
                Ok(Some((variable, value)))
            }
        }
    }
}
