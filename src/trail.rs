//! Trail & decision stack.
//!
//! Owns the [`Assignment`] map and the [`VarOrder`] decision pool, since
//! every trail mutation has to keep both in lockstep (enqueueing assigns a
//! variable and removes it from the order pool; backtracking unassigns and
//! reinserts). Decision boundaries are recorded as trail positions in
//! `trail_lim`, and `qhead` marks how far propagation has consumed the
//! trail.

use crate::arena::CRef;
use crate::assignment::Assignment;
use crate::order::VarOrder;
use crate::var::{Lit, Var};

/// Why a literal landed on the trail. Carried only for diagnostics;
/// backtracking operates purely on trail/trail_lim positions, not on
/// reasons.
#[derive(Clone, Copy, Debug)]
pub enum Reason {
    Decision,
    Propagated(CRef),
    Axiom,
}

pub struct Trail {
    trail: Vec<Lit>,
    reasons: Vec<Reason>,
    trail_lim: Vec<usize>,
    qhead: usize,
    assignment: Assignment,
    order: VarOrder,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            trail: Vec::new(),
            reasons: Vec::new(),
            trail_lim: Vec::new(),
            qhead: 0,
            assignment: Assignment::new(),
            order: VarOrder::new(),
        }
    }

    /// Grow the assignment map and order pool for a freshly-seen variable.
    pub fn add_var(&mut self, v: Var) {
        self.assignment.expand(v);
        self.order.insert(v);
    }

    pub fn num_vars(&self) -> usize {
        self.assignment.num_vars()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    pub fn qhead(&self) -> usize {
        self.qhead
    }

    pub fn set_qhead(&mut self, qhead: usize) {
        self.qhead = qhead;
    }

    pub fn advance_qhead(&mut self) {
        self.qhead += 1;
    }

    pub fn get(&self, pos: usize) -> Option<Lit> {
        self.trail.get(pos).copied()
    }

    pub fn decision_level(&self) -> usize {
        self.trail_lim.len()
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// `enqueue(l)`: precondition `lit_var(l)` is UNASSIGNED.
    pub fn enqueue(&mut self, l: Lit, reason: Reason) {
        debug_assert!(self.assignment.is_unassigned(l));
        self.assignment.assign(l);
        self.order.remove(l.var());
        self.trail.push(l);
        self.reasons.push(reason);
    }

    /// `new_decision(l)`: opens a new decision level, then enqueues `l`.
    pub fn new_decision(&mut self, l: Lit) {
        self.trail_lim.push(self.trail.len());
        self.enqueue(l, Reason::Decision);
    }

    /// `last_decision()`: the literal opening the current decision level.
    pub fn last_decision(&self) -> Option<Lit> {
        let &cut = self.trail_lim.last()?;
        Some(self.trail[cut])
    }

    /// `backtrack_one_level()`. No-op precondition: `decision_level() > 0`.
    pub fn backtrack_one_level(&mut self) {
        debug_assert!(self.decision_level() > 0);
        let cut = *self.trail_lim.last().unwrap();

        for lit in self.trail[cut..].iter().rev() {
            self.assignment.unassign(lit.var());
            self.order.insert(lit.var());
        }

        self.trail.truncate(cut);
        self.reasons.truncate(cut);
        self.qhead = cut;
        self.trail_lim.pop();
    }

    pub fn decide_next(&mut self) -> Option<Var> {
        self.order.pop_min()
    }

    pub fn is_true(&self, l: Lit) -> bool {
        self.assignment.is_true(l)
    }

    pub fn is_false(&self, l: Lit) -> bool {
        self.assignment.is_false(l)
    }

    pub fn is_unassigned(&self, l: Lit) -> bool {
        self.assignment.is_unassigned(l)
    }

    pub fn is_clause_satisfied(&self, clause: &[Lit]) -> bool {
        clause.iter().any(|&l| self.is_true(l))
    }

    pub fn reason(&self, pos: usize) -> Reason {
        self.reasons[pos]
    }

    pub fn iter(&self) -> impl Iterator<Item = Lit> + '_ {
        self.trail.iter().copied()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
