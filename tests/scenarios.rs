//! Concrete end-to-end solving scenarios, plus a handful of boundary
//! behaviours (empty formulas, unit clauses, direct contradictions).

use simplesat::solver::{Heuristic, Solver, SolverConfig};
use simplesat::Verdict;

mod support;

fn lit(name: &str, positive: bool) -> (String, bool) {
    (name.to_string(), positive)
}

fn satisfies(clauses: &[Vec<(String, bool)>], solver: &Solver) -> bool {
    let assignment = solver.assignment().expect("expected a SAT assignment");
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|(name, positive)| assignment.get(name) == Some(*positive))
    })
}

#[test]
fn s1_sample_instance_is_satisfiable() {
    // 1 2 0 -1 -2 0 3 4 0 -2 4 2 0 -3 -4 0
    let clauses = vec![
        vec![lit("1", true), lit("2", true)],
        vec![lit("1", false), lit("2", false)],
        vec![lit("3", true), lit("4", true)],
        vec![lit("2", false), lit("4", true), lit("2", true)],
        vec![lit("3", false), lit("4", false)],
    ];
    let mut solver = Solver::from_named_clauses(clauses.clone(), SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Sat);
    assert!(satisfies(&clauses, &solver));
}

#[test]
fn s2_direct_contradiction_is_unsat_at_level_zero() {
    // 1 0 -1 0
    let clauses = vec![vec![lit("1", true)], vec![lit("1", false)]];
    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Unsat);
}

#[test]
fn s3_pigeonhole_three_into_two_is_unsat() {
    // 3 pigeons, 2 holes: x_ph named "p-h". At least one hole per pigeon,
    // at most one pigeon per hole.
    let v = |pigeon: u32, hole: u32| format!("{pigeon}-{hole}");
    let mut clauses = Vec::new();
    for pigeon in 1..=3u32 {
        clauses.push(vec![lit(&v(pigeon, 1), true), lit(&v(pigeon, 2), true)]);
    }
    for hole in 1..=2u32 {
        for (a, b) in [(1, 2), (1, 3), (2, 3)] {
            clauses.push(vec![lit(&v(a, hole), false), lit(&v(b, hole), false)]);
        }
    }

    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Unsat);
}

#[test]
fn s4_four_clause_two_variable_contradiction_is_unsat() {
    // 1 2 0 1 -2 0 -1 2 0 -1 -2 0: every combination of (1, 2) is ruled out.
    let clauses = vec![
        vec![lit("1", true), lit("2", true)],
        vec![lit("1", true), lit("2", false)],
        vec![lit("1", false), lit("2", true)],
        vec![lit("1", false), lit("2", false)],
    ];
    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Unsat);
}

#[test]
fn s5_chain_is_solved_entirely_by_bcp_after_one_decision() {
    // (!1 v 2)(!2 v 3)(!3 v 4)(1)
    let clauses = vec![
        vec![lit("1", false), lit("2", true)],
        vec![lit("2", false), lit("3", true)],
        vec![lit("3", false), lit("4", true)],
        vec![lit("1", true)],
    ];
    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Sat);
    let assignment = solver.assignment().unwrap();
    for name in ["1", "2", "3", "4"] {
        assert_eq!(assignment.get(name), Some(true), "variable {name}");
    }
}

#[test]
fn s6_random_3_cnf_matches_the_brute_force_oracle() {
    // 10 vars, 42 clauses (ratio 4.2), generated with a fixed seed so the
    // instance is reproducible.
    let clauses = support::random_3cnf(10, 42, 0xC0FFEE);
    let expected = support::brute_force_sat(&clauses);

    let mut solver = Solver::from_named_clauses(clauses.clone(), SolverConfig::default());
    let verdict = solver.solve().unwrap();
    assert_eq!(verdict == Verdict::Sat, expected);
    if verdict == Verdict::Sat {
        assert!(satisfies(&clauses, &solver));
    }
}

#[test]
fn empty_clause_set_is_sat_with_empty_assignment() {
    let mut solver = Solver::from_named_clauses(vec![], SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Sat);
    assert!(solver.assignment().unwrap().is_empty());
}

#[test]
fn formula_containing_the_empty_clause_is_unsat() {
    let clauses = vec![vec![], vec![lit("1", true)]];
    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Unsat);
}

#[test]
fn single_positive_unit_clause_is_sat_with_true() {
    let clauses = vec![vec![lit("1", true)]];
    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Sat);
    assert_eq!(solver.assignment().unwrap().get("1"), Some(true));
}

#[test]
fn single_negative_unit_clause_is_sat_with_false() {
    let clauses = vec![vec![lit("1", false)]];
    let mut solver = Solver::from_named_clauses(clauses, SolverConfig::default());
    assert_eq!(solver.solve().unwrap(), Verdict::Sat);
    assert_eq!(solver.assignment().unwrap().get("1"), Some(false));
}

#[test]
fn dlis_heuristic_agrees_with_first_fit_on_the_sample_instance() {
    let clauses = vec![
        vec![lit("1", true), lit("2", true)],
        vec![lit("1", false), lit("2", false)],
        vec![lit("3", true), lit("4", true)],
        vec![lit("2", false), lit("4", true), lit("2", true)],
        vec![lit("3", false), lit("4", false)],
    ];
    let config = SolverConfig { heuristic: Heuristic::Dlis };
    let mut solver = Solver::from_named_clauses(clauses.clone(), config);
    assert_eq!(solver.solve().unwrap(), Verdict::Sat);
    assert!(satisfies(&clauses, &solver));
}
