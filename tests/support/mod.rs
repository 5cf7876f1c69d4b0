//! An exhaustive-search oracle used only to check the CDCL solver's
//! verdicts against ground truth on small instances, plus a tiny random
//! 3-CNF generator for the ratio-driven scenario test.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Generate a random 3-CNF over `num_vars` variables named `"1"..=num_vars`
/// with `num_clauses` clauses, each three distinct variables with a random
/// polarity. Deterministic for a given `seed`.
pub fn random_3cnf(num_vars: u32, num_clauses: u32, seed: u64) -> Vec<Vec<(String, bool)>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..num_clauses)
        .map(|_| {
            let mut vars = HashSet::new();
            while vars.len() < 3 {
                vars.insert(rng.gen_range(1..=num_vars));
            }
            vars.into_iter()
                .map(|v| (v.to_string(), rng.gen_bool(0.5)))
                .collect()
        })
        .collect()
}

/// Brute-force satisfiability by trying every assignment of every variable
/// named across `clauses`, recursively, shortest path first.
pub fn brute_force_sat(clauses: &[Vec<(String, bool)>]) -> bool {
    let mut names: Vec<String> = clauses
        .iter()
        .flat_map(|clause| clause.iter().map(|(name, _)| name.clone()))
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    names.sort();

    assign_next(clauses, &names, 0, &mut HashMap::new())
}

fn assign_next(
    clauses: &[Vec<(String, bool)>],
    names: &[String],
    index: usize,
    assignment: &mut HashMap<String, bool>,
) -> bool {
    if index == names.len() {
        return clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|(name, positive)| assignment.get(name) == Some(&positive.clone()))
        });
    }

    let name = &names[index];
    for &value in &[true, false] {
        assignment.insert(name.clone(), value);
        if assign_next(clauses, names, index + 1, assignment) {
            return true;
        }
    }
    assignment.remove(name);
    false
}
