//! Search driver: propagate, check for contradiction, check for completion,
//! decide — repeated until the formula is satisfied or the root level
//! itself contradicts. Backtracking is purely chronological: on conflict,
//! the most recent decision is undone and its literal flipped; there is no
//! conflict-clause learning or non-chronological backjumping.

use tracing::debug;

use crate::propagate::PropagationResult;
use crate::trail::Reason;
use crate::Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DriverResult {
    Sat,
    Unsat,
}

impl Solver {
    pub(crate) fn run_search(&mut self) -> DriverResult {
        loop {
            self.log_state();
            match self.propagate() {
                PropagationResult::Contradiction(conflict) => {
                    self.stats.conflicts += 1;
                    debug!("conflict in clause {conflict:?} at level {}", self.trail.decision_level());

                    if self.trail.decision_level() == 0 {
                        self.stats.root_level_conflicts += 1;
                        return DriverResult::Unsat;
                    }

                    let last = self
                        .trail
                        .last_decision()
                        .expect("decision_level() > 0 implies a decision exists");
                    self.trail.backtrack_one_level();
                    self.stats.backtracks += 1;
                    // Flip the last decision: it is now a forced consequence,
                    // not a fresh branch, so it is enqueued rather than
                    // opening another decision level.
                    self.trail.enqueue(-last, Reason::Propagated(conflict));
                }
                PropagationResult::Done => match self.decide() {
                    Some(lit) => {
                        self.stats.decisions += 1;
                        debug!("deciding {lit} at level {}", self.trail.decision_level() + 1);
                        self.trail.new_decision(lit);
                    }
                    None => return DriverResult::Sat,
                },
            }
        }
    }

    /// Pop the smallest-indexed unassigned variable and return its literal
    /// with false polarity.
    fn decide(&mut self) -> Option<crate::var::Lit> {
        let var = self.trail.decide_next()?;
        Some(crate::var::Lit::negative(var))
    }
}
