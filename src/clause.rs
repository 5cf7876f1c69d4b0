//! Clauses: an ordered disjunction of literals, plus status predicates
//! derived on demand from the current assignment.

use std::collections::HashSet;

use crate::atom::VariableStore;
use crate::literal::Literal;

/// The derived status of a clause under the current assignment. Mutually
/// exclusive and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Satisfied,
    Falsified,
    /// Exactly one unassigned literal, all others false; carries that
    /// literal so callers don't have to re-scan for it.
    Unit(Literal),
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Clause {
        Clause { literals }
    }

    pub fn empty() -> Clause {
        Clause { literals: Vec::new() }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Compute this clause's status. Empty clauses are immediately
    /// falsified.
    pub fn status(&self, store: &VariableStore) -> Status {
        if self.literals.is_empty() {
            return Status::Falsified;
        }

        let mut unassigned = None;
        for &literal in &self.literals {
            if literal.is_true(store) {
                return Status::Satisfied;
            }
            if literal.is_unassigned(store) {
                if unassigned.is_some() {
                    // more than one unassigned literal: can be neither unit
                    // nor falsified.
                    return Status::Unresolved;
                }
                unassigned = Some(literal);
            }
        }

        match unassigned {
            Some(literal) => Status::Unit(literal),
            None => Status::Falsified,
        }
    }

    pub fn is_satisfied(&self, store: &VariableStore) -> bool {
        matches!(self.status(store), Status::Satisfied)
    }

    pub fn is_falsified(&self, store: &VariableStore) -> bool {
        matches!(self.status(store), Status::Falsified)
    }

    pub fn is_unresolved(&self, store: &VariableStore) -> bool {
        matches!(self.status(store), Status::Unresolved)
    }

    /// Resolution of two clauses: the union of their literals with every
    /// complementary pair removed. When the operands share more than one
    /// complementary pair this performs simultaneous resolution on all of
    /// them at once, which is fine for iterated resolution of antecedents.
    pub fn resolve(&self, other: &Clause) -> Clause {
        if self.literals.is_empty() {
            return other.clone();
        }
        if other.literals.is_empty() {
            return self.clone();
        }

        let mut positive: HashSet<Literal> = HashSet::new();
        let mut negative: HashSet<Literal> = HashSet::new();

        for &literal in self.literals.iter().chain(other.literals.iter()) {
            if literal.polarity.is_positive() {
                positive.insert(literal);
            } else {
                negative.insert(literal);
            }
        }

        let negative_vars: HashSet<_> = negative.iter().map(|l| l.variable).collect();
        let positive_vars: HashSet<_> = positive.iter().map(|l| l.variable).collect();

        let mut resolvent: Vec<Literal> = positive
            .into_iter()
            .filter(|l| !negative_vars.contains(&l.variable))
            .collect();
        resolvent.extend(
            negative
                .into_iter()
                .filter(|l| !positive_vars.contains(&l.variable)),
        );

        Clause::new(resolvent)
    }
}
