//! The error taxonomy for the solver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    /// A DIMACS token could not be parsed, or a clause/header was malformed.
    /// Zero clauses is *not* an error: an empty formula is SAT by convention.
    #[error("malformed DIMACS input: {0}")]
    MalformedInput(String),

    /// A bug: BCP found a clause it believed unit with zero unassigned
    /// literals, or conflict analysis could not locate a predecessor node a
    /// clause referenced. These must never be swallowed.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// The external decision oracle returned a variable unknown to the
    /// solver (only reachable with `Heuristic::External`).
    #[error("external heuristic returned an unrecognised variable: {0}")]
    UserAbort(String),
}
