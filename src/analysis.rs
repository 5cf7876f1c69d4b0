//! Conflict analysis: first-UIP, resolution-folded learned clause,
//! non-chronological backjump.

use log::{debug, trace};

use crate::atom::VariableStore;
use crate::clause::Clause;
use crate::error::SolverError;
use crate::graph::ImplicationGraph;

pub enum AnalysisOutcome {
    /// A backjump occurred and a clause was learned; the caller should keep
    /// searching at the new (lower) decision level.
    BackjumpTo(usize),
    /// The conflict was at decision level 0 (or had fewer than two distinct
    /// antecedent levels): the formula is UNSAT.
    Unsat,
}

/// Analyse the current conflict and, if possible, backjump. Called only
/// when BCP has just reported a conflict.
pub fn resolve_conflict(
    clauses: &mut Vec<Clause>,
    store: &mut VariableStore,
    graph: &mut ImplicationGraph,
    decision_level: usize,
) -> Result<AnalysisOutcome, SolverError> {
    if !graph.has_conflict() {
        // No-op: nothing to analyse. The driver only calls this after an
        // actual conflict, but callers may stay conservative and check it
        // too.
        return Ok(AnalysisOutcome::BackjumpTo(decision_level));
    }

    if decision_level == 0 {
        debug!("analysis: conflict at decision level 0, UNSAT");
        return Ok(AnalysisOutcome::Unsat);
    }

    let uip = graph.first_uip().ok_or_else(|| {
        SolverError::InternalInvariantViolation(
            "conflict node present but no first UIP could be found".to_string(),
        )
    })?;

    let (antecedents, levels) = graph.conflict_info(uip);
    trace!("analysis: decision levels involved: {levels:?}");

    if levels.len() < 2 {
        debug!("analysis: fewer than two distinct antecedent levels, UNSAT");
        return Ok(AnalysisOutcome::Unsat);
    }

    let backjump_level = levels[1];

    // Fold resolution over the antecedents in deterministic (clause
    // insertion / collection) order.
    let mut learned = Clause::empty();
    for antecedent in &antecedents {
        learned = learned.resolve(antecedent);
    }

    graph.truncate(backjump_level, store);
    clauses.push(learned.clone());
    debug!(
        "analysis: backjump to level {backjump_level}; learned clause with {} literals",
        learned.literals().len()
    );

    Ok(AnalysisOutcome::BackjumpTo(backjump_level))
}
