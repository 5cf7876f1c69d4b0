//! Boolean Constraint Propagation.
//!
//! Saturates the unit rule by rescanning every clause each round. A
//! two-watched-literal scheme would be a faster way to find the same unit
//! clauses, but full scanning is simpler and semantically equivalent.

use log::{debug, trace};

use crate::atom::VariableStore;
use crate::clause::{Clause, Status};
use crate::error::SolverError;
use crate::graph::ImplicationGraph;

pub enum BcpOutcome {
    Success,
    /// A clause was falsified; BCP stops at the first conflict found.
    Conflict,
}

/// Run the unit rule to fixpoint at `level`. Clauses are scanned in
/// insertion order, both for unit selection and for the post-assignment
/// falsification scan, so the result is deterministic given the input
/// order.
pub fn propagate(
    clauses: &[Clause],
    store: &mut VariableStore,
    graph: &mut ImplicationGraph,
    level: usize,
) -> Result<BcpOutcome, SolverError> {
    loop {
        let mut progressed = false;

        for clause in clauses {
            if let Status::Unit(literal) = clause.status(store) {
                literal.assign_true(store);
                trace!(
                    "bcp: {} @ {}; antecedent has {} literals",
                    literal.display(store),
                    level,
                    clause.literals().len()
                );
                graph.add_forced(
                    literal.variable,
                    literal.polarity.is_positive(),
                    clause.clone(),
                    level,
                );
                progressed = true;
            }
        }

        if let Some((idx, clause)) = clauses
            .iter()
            .enumerate()
            .find(|(_, clause)| clause.is_falsified(store))
        {
            // An empty clause has no literal to pick a variable from: the
            // conflict node it produces has no predecessors.
            let variable = clause.literals().first().map(|lit| lit.variable);
            debug!("bcp: conflict with clause #{idx}");
            graph.add_conflict(variable, clause.clone(), level);
            return Ok(BcpOutcome::Conflict);
        }

        if !progressed {
            return Ok(BcpOutcome::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::Literal;

    #[test]
    fn chains_unit_propagation_to_fixpoint() {
        let mut store = VariableStore::new();
        let x1 = store.intern("1");
        let x2 = store.intern("2");
        let x3 = store.intern("3");
        let x4 = store.intern("4");

        // (!1 v 2)(!2 v 3)(!3 v 4)(1) with 1 already assigned true (S5).
        store.assign(x1, true);
        let clauses = vec![
            Clause::new(vec![Literal::negative(x1), Literal::positive(x2)]),
            Clause::new(vec![Literal::negative(x2), Literal::positive(x3)]),
            Clause::new(vec![Literal::negative(x3), Literal::positive(x4)]),
            Clause::new(vec![Literal::positive(x1)]),
        ];

        let mut graph = ImplicationGraph::new();
        graph.add_decision(x1, true, 1);
        let outcome = propagate(&clauses, &mut store, &mut graph, 1).unwrap();

        assert!(matches!(outcome, BcpOutcome::Success));
        assert_eq!(store.value(x2).as_bool(), Some(true));
        assert_eq!(store.value(x3).as_bool(), Some(true));
        assert_eq!(store.value(x4).as_bool(), Some(true));
    }

    #[test]
    fn detects_conflict_from_empty_clause() {
        let mut store = VariableStore::new();
        let mut graph = ImplicationGraph::new();
        let clauses = vec![Clause::empty()];

        let outcome = propagate(&clauses, &mut store, &mut graph, 0).unwrap();
        assert!(matches!(outcome, BcpOutcome::Conflict));
        assert!(graph.has_conflict());
    }
}
