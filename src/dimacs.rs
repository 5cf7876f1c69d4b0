//! A small DIMACS CNF parser.
//!
//! Accepts the usual whitespace-separated signed-integer format: `c` and
//! `p` header lines are ignored, a `0` terminates the current clause, and a
//! variable's name is the decimal string of its absolute value (so `-3` and
//! `3` both resolve to the variable named `"3"`, with opposite polarity).
//! Returns the clauses as `(name, positive)` pairs, ready for
//! `solver::canonicalise`/`Solver::from_named_clauses`.

use crate::error::SolverError;

/// Parse `text` into clauses of `(variable name, polarity)` literals.
pub fn parse(text: &str) -> Result<Vec<Vec<(String, bool)>>, SolverError> {
    let mut clauses = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }

        for token in line.split_whitespace() {
            let value: i64 = token.parse().map_err(|_| {
                SolverError::MalformedInput(format!("not an integer literal: {token:?}"))
            })?;

            if value == 0 {
                clauses.push(std::mem::take(&mut current));
                continue;
            }

            let name = value.unsigned_abs().to_string();
            current.push((name, value > 0));
        }
    }

    if !current.is_empty() {
        // A clause with no trailing `0` is still a clause: keep it rather
        // than silently dropping the tail of a malformed file.
        clauses.push(current);
    }

    Ok(clauses)
}

/// The DIMACS text behind the canonical five-clause SAT scenario used
/// throughout the test suite and in doctests.
pub const SAMPLE_DIMACS: &str = "\
c A small satisfiable instance.
p cnf 4 5
1 2 0
-1 -2 0
3 4 0
-2 4 2 0
-3 -4 0
";
