//! Watched-literal unit propagation.
//!
//! Each watcher carries a `blocker` literal from the same clause: if the
//! blocker is already true, the clause is satisfied and the watcher is kept
//! without ever touching the arena. Otherwise the clause is scanned for a
//! fresh literal to watch instead.
//!
//! Uses [`WatchLists::take`]/[`WatchLists::restore`] rather than
//! `Vec::retain`: a watcher that migrates to another literal's list during
//! the scan must not be written back into the list being traversed, even
//! when that migration targets the very same list later in the scan.
//! `retain` can't express that; detach-then-restore makes it structural.

use crate::arena::CRef;
use crate::trail::Reason;
use crate::watch::Watcher;
use crate::Solver;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationResult {
    Contradiction(CRef),
    Done,
}

impl Solver {
    /// `propagate()`.
    pub(crate) fn propagate(&mut self) -> PropagationResult {
        while self.trail.qhead() < self.trail.len() {
            let l = self.trail.get(self.trail.qhead()).expect("qhead < len");
            self.trail.advance_qhead();
            debug_assert!(self.trail.is_true(l));

            if let Some(conflict) = self.propagate_one(l) {
                return PropagationResult::Contradiction(conflict);
            }
        }
        PropagationResult::Done
    }

    /// Re-examines every watcher on `l` now that `l` has become true: these
    /// are exactly the clauses watching `l` because their watched literal at
    /// that position is `¬l`, which just became false.
    /// Returns the conflicting clause's `cref`, if any.
    fn propagate_one(&mut self, l: crate::var::Lit) -> Option<CRef> {
        let neg_l = -l;
        let watchers = self.watches.take(l);
        let mut kept = Vec::with_capacity(watchers.len());
        let mut conflict = None;

        for watcher in watchers {
            if conflict.is_some() {
                kept.push(watcher);
                continue;
            }

            if self.trail.is_true(watcher.blocker) {
                kept.push(watcher);
                continue;
            }

            let cref = watcher.cref;
            let clause = self.arena.get_mut(cref);

            // Ensure lits[1] == neg_l, swapping with lits[0] if necessary.
            if clause[0] == neg_l {
                clause.swap(0, 1);
            }
            debug_assert_eq!(clause[1], neg_l);

            let first = clause[0];
            if first != watcher.blocker && self.trail.is_true(first) {
                kept.push(Watcher { cref, blocker: first });
                continue;
            }

            let mut migrated = false;
            for k in 2..clause.len() {
                if !self.trail.is_false(clause[k]) {
                    clause.swap(1, k);
                    let new_watch_lit = -clause[1];
                    self.watches.attach(new_watch_lit, Watcher { cref, blocker: first });
                    migrated = true;
                    break;
                }
            }
            if migrated {
                continue;
            }

            kept.push(Watcher { cref, blocker: first });
            if self.trail.is_false(first) {
                conflict = Some(cref);
            } else {
                debug_assert!(self.trail.is_unassigned(first));
                self.trail.enqueue(first, Reason::Propagated(cref));
                self.stats.propagations += 1;
            }
        }

        self.watches.restore(l, kept);
        conflict
    }
}

#[cfg(test)]
mod tests {
    use crate::{SolveResult, Solver};

    #[test]
    fn unit_propagation_forces_the_only_literal() {
        let mut s = Solver::new();
        s.add_clause([1]);
        s.add_clause([1, 2]);
        s.add_clause([-1, 2]);
        match s.solve() {
            SolveResult::Sat(model) => assert!(model.lit(2)),
            SolveResult::Unsat => panic!("expected SAT"),
        }
    }

    #[test]
    fn conflicting_units_are_unsat() {
        let mut s = Solver::new();
        assert!(s.add_clause([1]));
        assert!(!s.add_clause([-1]));
    }

    #[test]
    fn watcher_migration_keeps_clause_satisfiable_under_later_assignment() {
        let mut s = Solver::new();
        s.add_clause([1, 2, 3]);
        s.add_clause([-1]);
        s.add_clause([-2]);
        match s.solve() {
            SolveResult::Sat(model) => assert!(model.lit(3)),
            SolveResult::Unsat => panic!("expected SAT"),
        }
    }
}
