//! The implication graph.
//!
//! Nodes are kept in an arena and referenced by index (`NodeId`), never by
//! owning reference, so the graph can hold predecessor edges without
//! fighting the borrow checker. Because a node is only ever created after
//! every variable its antecedent depends on already has a current node,
//! insertion order is a valid topological order and node levels are
//! non-decreasing along it; a conflict is always resolved (and the graph
//! truncated) before the next decision level's nodes are appended. That
//! lets `truncate` simply drop a trailing suffix of the arena instead of
//! doing general graph surgery.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::atom::{VarId, VariableStore};
use crate::clause::Clause;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A free choice or a BCP-forced assignment. Distinguished from each
    /// other only by whether `predecessors` is empty.
    Decision { variable: VarId, value: bool },
    /// `variable` is `None` only for the degenerate empty-clause conflict:
    /// no literal exists to tag the node with, and the node has no
    /// predecessors.
    Conflict { variable: Option<VarId> },
}

#[derive(Debug, Clone)]
struct Node {
    level: usize,
    kind: NodeKind,
    predecessors: Vec<NodeId>,
    /// The clause that forced this node (forced-decision / conflict nodes)
    /// or `None` for a free decision.
    antecedent: Option<Clause>,
}

#[derive(Debug, Default)]
pub struct ImplicationGraph {
    nodes: Vec<Node>,
    /// The node currently representing each assigned variable.
    current_node: HashMap<VarId, NodeId>,
    /// Free-decision nodes in insertion order; the k-th entry has level k.
    decision_stack: Vec<NodeId>,
    conflict: Option<NodeId>,
}

impl ImplicationGraph {
    pub fn new() -> ImplicationGraph {
        ImplicationGraph::default()
    }

    pub fn has_conflict(&self) -> bool {
        self.conflict.is_some()
    }

    pub fn decision_stack_len(&self) -> usize {
        self.decision_stack.len()
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Insert an isolated decision node for a free choice.
    pub fn add_decision(&mut self, variable: VarId, value: bool, level: usize) -> NodeId {
        let id = self.push_node(Node {
            level,
            kind: NodeKind::Decision { variable, value },
            predecessors: Vec::new(),
            antecedent: None,
        });
        self.current_node.insert(variable, id);
        self.decision_stack.push(id);
        id
    }

    /// Insert a decision node forced by BCP, with an edge from the current
    /// node of every other variable in `antecedent`.
    pub fn add_forced(
        &mut self,
        variable: VarId,
        value: bool,
        antecedent: Clause,
        level: usize,
    ) -> NodeId {
        let predecessors = antecedent
            .literals()
            .iter()
            .filter(|lit| lit.variable != variable)
            .map(|lit| {
                *self
                    .current_node
                    .get(&lit.variable)
                    .expect("antecedent references a variable with no current graph node")
            })
            .collect();

        let id = self.push_node(Node {
            level,
            kind: NodeKind::Decision { variable, value },
            predecessors,
            antecedent: Some(antecedent),
        });
        self.current_node.insert(variable, id);
        id
    }

    /// Create the single conflict node for `clause`, which is falsified
    /// under the current assignment. `variable` is `None` only when
    /// `clause` is empty.
    pub fn add_conflict(&mut self, variable: Option<VarId>, clause: Clause, level: usize) -> NodeId {
        let predecessors = clause
            .literals()
            .iter()
            .map(|lit| {
                *self
                    .current_node
                    .get(&lit.variable)
                    .expect("conflict clause references a variable with no current graph node")
            })
            .collect();

        let id = self.push_node(Node {
            level,
            kind: NodeKind::Conflict { variable },
            predecessors,
            antecedent: Some(clause),
        });
        self.conflict = Some(id);
        id
    }

    fn successors_of(&self, target: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        for (idx, node) in self.nodes.iter().enumerate() {
            if node.predecessors.contains(&target) {
                result.push(NodeId(idx));
            }
        }
        result
    }

    fn bfs(&self, start: NodeId, forward: bool) -> HashSet<NodeId> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let neighbours = if forward {
                self.successors_of(node)
            } else {
                self.nodes[node.0].predecessors.clone()
            };
            for next in neighbours {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Whether, within `relevant`, `conflict` remains reachable from `start`
    /// after excluding `without`.
    fn reaches_without(
        &self,
        start: NodeId,
        conflict: NodeId,
        without: NodeId,
        relevant: &HashSet<NodeId>,
    ) -> bool {
        if start == without {
            return false;
        }
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            if node == conflict {
                return true;
            }
            for next in self.successors_of(node) {
                if next == without || !relevant.contains(&next) {
                    continue;
                }
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Find the first UIP for the current conflict: the dominator of the
    /// conflict node (relative to the latest free decision) nearest the
    /// conflict. Returns `None` if there is no conflict or no decisions.
    pub fn first_uip(&self) -> Option<NodeId> {
        let conflict = self.conflict?;
        let last_decision = *self.decision_stack.last()?;

        let reachable_from_last = self.bfs(last_decision, true);
        let ancestors_of_conflict = self.bfs(conflict, false);
        let relevant: HashSet<NodeId> = reachable_from_last
            .intersection(&ancestors_of_conflict)
            .copied()
            .collect();

        if !relevant.contains(&last_decision) || !relevant.contains(&conflict) {
            // No path from the latest decision to the conflict: shouldn't
            // happen for a conflict BCP just derived, but guard rather than
            // panic so callers can treat it as "no UIP found".
            return None;
        }

        relevant
            .iter()
            .filter(|&&candidate| candidate != conflict)
            .filter(|&&candidate| {
                !self.reaches_without(last_decision, conflict, candidate, &relevant)
            })
            .max_by_key(|candidate| candidate.0)
            .copied()
    }

    /// For each direct successor of `uip` at the conflict's decision level,
    /// collect its antecedent clause and the decision levels of its direct
    /// predecessors. Restricting to the conflict's level matters because a
    /// UIP can have successors left over from an earlier level once
    /// truncated graphs are reused; only same-level successors belong to
    /// this conflict.
    pub fn conflict_info(&self, uip: NodeId) -> (Vec<Clause>, Vec<usize>) {
        let conflict = self.conflict.expect("conflict_info called with no active conflict");
        let conflict_level = self.nodes[conflict.0].level;

        let mut antecedents: Vec<Clause> = Vec::new();
        let mut levels: Vec<usize> = Vec::new();

        for successor in self.successors_of(uip) {
            let successor_node = &self.nodes[successor.0];
            if successor_node.level != conflict_level {
                continue;
            }
            levels.push(successor_node.level);

            if let Some(clause) = &successor_node.antecedent {
                if !antecedents.contains(clause) {
                    antecedents.push(clause.clone());
                }
            }
            for &pred in &successor_node.predecessors {
                levels.push(self.nodes[pred.0].level);
            }
        }

        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();
        (antecedents, levels)
    }

    /// Remove every node with level > `keep_level`, reset the corresponding
    /// variables to unassigned, pop the decision stack down to
    /// `keep_level` entries, and clear the conflict node.
    pub fn truncate(&mut self, keep_level: usize, store: &mut VariableStore) {
        let cutoff = self
            .nodes
            .iter()
            .position(|node| node.level > keep_level)
            .unwrap_or(self.nodes.len());

        for node in &self.nodes[cutoff..] {
            if let NodeKind::Decision { variable, .. } = node.kind {
                store.unassign(variable);
                self.current_node.remove(&variable);
            }
        }

        self.nodes.truncate(cutoff);
        self.decision_stack.truncate(keep_level);
        self.conflict = None;
    }
}
