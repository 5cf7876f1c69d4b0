//! The CDCL driver: orchestrates decide/BCP/conflict analysis and exposes
//! the public `solve`/`assignment` API.

use log::{info, trace};

use crate::analysis::{self, AnalysisOutcome};
use crate::assignment::Assignment;
use crate::atom::{VarId, VariableStore};
use crate::bcp::{self, BcpOutcome};
use crate::clause::Clause;
use crate::error::SolverError;
use crate::graph::ImplicationGraph;
use crate::heuristic::{DecisionHeuristic, Dlis, FirstFit};

/// Selects the decision policy. Default is `FirstFit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    FirstFit,
    Dlis,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    pub heuristic: Heuristic,
}

/// A structured trace event, delivered at the pre/post boundaries of
/// decide, BCP, and conflict-resolution phases.
/// These exist for testing and pedagogy; they never affect the result.
#[derive(Debug, Clone)]
pub enum Event {
    PreDecide { level: usize },
    PostDecide { level: usize, success: bool },
    PreBcp { level: usize },
    PostBcp { level: usize, success: bool },
    PreResolve { level: usize },
    PostResolve { level: usize, success: bool },
}

pub trait EventSink {
    fn on_event(&mut self, event: Event);
}

/// The default, no-op sink.
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: Event) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Sat,
    Unsat,
}

/// Canonicalise `raw_clauses` (built over possibly-duplicated variable
/// references identified only by name) into one clause list sharing a
/// single `VariableStore`.
pub fn canonicalise(raw_clauses: Vec<Vec<(String, bool)>>) -> (VariableStore, Vec<Clause>) {
    let mut store = VariableStore::new();
    let clauses = raw_clauses
        .into_iter()
        .map(|literals| {
            let literals = literals
                .into_iter()
                .map(|(name, positive)| {
                    let variable = store.intern(&name);
                    if positive {
                        crate::literal::Literal::positive(variable)
                    } else {
                        crate::literal::Literal::negative(variable)
                    }
                })
                .collect();
            Clause::new(literals)
        })
        .collect();
    store.reset();
    (store, clauses)
}

pub struct Solver {
    store: VariableStore,
    clauses: Vec<Clause>,
    graph: ImplicationGraph,
    decision_level: usize,
    heuristic: Box<dyn DecisionHeuristic>,
    sink: Box<dyn EventSink>,
    assignment: Option<Assignment>,
}

impl Solver {
    pub fn new(store: VariableStore, clauses: Vec<Clause>, config: SolverConfig) -> Solver {
        let heuristic: Box<dyn DecisionHeuristic> = match config.heuristic {
            Heuristic::FirstFit => Box::new(FirstFit),
            Heuristic::Dlis => Box::new(Dlis),
        };
        Solver {
            store,
            clauses,
            graph: ImplicationGraph::new(),
            decision_level: 0,
            heuristic,
            sink: Box::new(NullSink),
            assignment: None,
        }
    }

    /// Build a solver directly from clauses over named literals, matching
    /// the DIMACS-derived `(name, positive)` representation. Performs
    /// canonicalisation internally.
    pub fn from_named_clauses(raw_clauses: Vec<Vec<(String, bool)>>, config: SolverConfig) -> Solver {
        let (store, clauses) = canonicalise(raw_clauses);
        Solver::new(store, clauses, config)
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn DecisionHeuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_event_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    fn unresolved_clauses(&self) -> Vec<&Clause> {
        self.clauses
            .iter()
            .filter(|c| !c.is_satisfied(&self.store))
            .collect()
    }

    fn decide(&mut self) -> Result<bool, SolverError> {
        let unresolved = self.unresolved_clauses();
        match self.heuristic.choose(&unresolved, &self.store)? {
            None => Ok(false),
            Some((variable, value)) => {
                self.store.assign(variable, value);
                self.graph.add_decision(variable, value, self.decision_level);
                trace!("decision: {} = {} @ {}", variable, value, self.decision_level);
                Ok(true)
            }
        }
    }

    fn bcp(&mut self) -> Result<bool, SolverError> {
        let outcome = bcp::propagate(&self.clauses, &mut self.store, &mut self.graph, self.decision_level)?;
        Ok(matches!(outcome, BcpOutcome::Success))
    }

    fn resolve_conflict(&mut self) -> Result<bool, SolverError> {
        let outcome = analysis::resolve_conflict(
            &mut self.clauses,
            &mut self.store,
            &mut self.graph,
            self.decision_level,
        )?;
        match outcome {
            AnalysisOutcome::BackjumpTo(level) => {
                self.decision_level = level;
                Ok(true)
            }
            AnalysisOutcome::Unsat => Ok(false),
        }
    }

    /// Run the CDCL main loop.
    pub fn solve(&mut self) -> Result<Verdict, SolverError> {
        info!(
            "solve: {} variables, {} clauses",
            self.store.len(),
            self.clauses.len()
        );

        self.sink.on_event(Event::PreBcp { level: self.decision_level });
        let bcp_ok = self.bcp()?;
        self.sink.on_event(Event::PostBcp { level: self.decision_level, success: bcp_ok });
        if !bcp_ok {
            self.sink.on_event(Event::PreResolve { level: self.decision_level });
            let resolved = self.resolve_conflict()?;
            self.sink.on_event(Event::PostResolve { level: self.decision_level, success: resolved });
            if !resolved {
                return Ok(Verdict::Unsat);
            }
        }

        loop {
            self.decision_level += 1;

            self.sink.on_event(Event::PreDecide { level: self.decision_level });
            let decided = self.decide()?;
            self.sink.on_event(Event::PostDecide { level: self.decision_level, success: decided });
            if !decided {
                self.assignment = Some(Assignment::snapshot(&self.store));
                return Ok(Verdict::Sat);
            }

            loop {
                self.sink.on_event(Event::PreBcp { level: self.decision_level });
                let bcp_ok = self.bcp()?;
                self.sink.on_event(Event::PostBcp { level: self.decision_level, success: bcp_ok });
                if bcp_ok {
                    break;
                }

                self.sink.on_event(Event::PreResolve { level: self.decision_level });
                let resolved = self.resolve_conflict()?;
                self.sink.on_event(Event::PostResolve { level: self.decision_level, success: resolved });
                if !resolved {
                    return Ok(Verdict::Unsat);
                }
            }
        }
    }

    /// The satisfying assignment from the most recent SAT verdict. `None`
    /// before any solve call or after an UNSAT verdict.
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    pub fn variable_store(&self) -> &VariableStore {
        &self.store
    }

    pub fn variable_id(&self, name: &str) -> Option<VarId> {
        self.store.ids().find(|&id| self.store.name(id) == name)
    }
}
