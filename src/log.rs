//! Structured `tracing` events plus ANSI-coloured trail/clause formatters,
//! emitted at each search-loop iteration in debug builds.

use tracing::{debug, instrument};

use crate::trail::{Reason, Trail};
use crate::var::Lit;
use crate::Solver;

const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const END: &str = "\u{1b}[0m";

impl Solver {
    #[instrument(skip_all)]
    pub(crate) fn log_state(&self) {
        if cfg!(debug_assertions) {
            debug!("trail: {}", self.trail.fmt_trail());
            for cls in self.arena.iter() {
                debug!("{}", self.trail.fmt_clause(cls));
            }
        }
    }
}

impl Trail {
    pub(crate) fn fmt_lit(&self, lit: Lit) -> String {
        if self.is_true(lit) {
            format!("{GREEN}{lit}{END}")
        } else if self.is_false(lit) {
            format!("{RED}{lit}{END}")
        } else {
            format!("{lit}")
        }
    }

    pub(crate) fn fmt_clause(&self, clause: &[Lit]) -> String {
        clause
            .iter()
            .map(|&lit| self.fmt_lit(lit))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn fmt_trail(&self) -> String {
        let entries: Vec<String> = (0..self.len())
            .map(|pos| {
                let lit = self.get(pos).expect("pos < len");
                let marker = match self.reason(pos) {
                    Reason::Decision => "D",
                    Reason::Propagated(_) => "P",
                    Reason::Axiom => "A",
                };
                format!("{lit}{marker}")
            })
            .collect();
        format!("[{}]", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::Solver;

    #[test]
    fn log_state_does_not_panic_on_a_populated_solver() {
        let mut s = Solver::new();
        s.add_clause([1, 2]);
        s.add_clause([-1, 2]);
        s.log_state();
    }
}
