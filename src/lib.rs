//! A watched-literal SAT solver core: depth-first branch-and-propagate
//! search over CNF formulas, with unit propagation via the two-watched-
//! literal scheme and chronological backtracking. There is no clause
//! learning, no restarts, and no activity-based heuristics — decisions
//! always pick the smallest-indexed unassigned variable.

mod arena;
mod assignment;
mod data;
pub mod dimacs;
mod log;
mod order;
mod propagate;
mod search;
mod trail;
mod var;
mod watch;

pub use var::{Lit, Var, POL_NEG, POL_POS};

use arena::ClauseArena;
use search::DriverResult;
use std::time::{Duration, Instant};
use trail::{Reason, Trail};
use tracing::debug;
use watch::{WatchLists, Watcher};

/// Counters held by the solver and readable back out via [`Solver::stats`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    pub decisions: u64,
    pub propagations: u64,
    pub conflicts: u64,
    pub backtracks: u64,
    pub root_level_conflicts: u64,
    pub elapsed: Duration,
}

pub struct Solver {
    arena: ClauseArena,
    watches: WatchLists,
    trail: Trail,
    stats: Stats,
    /// Set when ingestion alone has already proven the formula unsatisfiable
    /// (an empty clause, or a root-level unit-propagation conflict) so that
    /// `solve` is correct even if a caller ignores `add_clause`'s `false`
    /// return value.
    trivially_unsat: bool,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vars: usize, clauses: usize) -> Self {
        let mut s = Self::new();
        let _ = clauses; // arena grows geometrically regardless; hint kept for API symmetry with VarVec::with_capacity
        for _ in 0..vars {
            s.add_variable();
        }
        s
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Appends one fresh UNASSIGNED variable.
    pub fn add_variable(&mut self) -> Var {
        let v = Var::new(self.trail.num_vars() as u32);
        self.grow_for(v);
        v
    }

    /// Single grow-point shared by `add_variable` and `add_clause`'s
    /// implicit variable creation: both just need storage to exist up to
    /// and including `v`.
    fn grow_for(&mut self, v: Var) {
        self.trail.add_var(v);
        self.watches.expand(Lit::positive(v));
        self.watches.expand(Lit::negative(v));
    }

    fn ensure_vars_up_to(&mut self, max: Var) {
        // One variable at a time, not a single bulk resize: `grow_for`
        // inserts each new variable into the decision-order pool (I6), and
        // a bulk resize would only register `max` itself, silently leaving
        // any intermediate variables out of the pool.
        while (self.trail.num_vars() as u32) <= max.get() {
            let v = Var::new(self.trail.num_vars() as u32);
            self.grow_for(v);
        }
    }

    fn dimacs_lit(&mut self, raw: i32) -> Lit {
        assert_ne!(raw, 0, "DIMACS literals cannot be zero");
        let var = Var::new((raw.unsigned_abs()) - 1);
        self.ensure_vars_up_to(var);
        if raw < 0 {
            Lit::negative(var)
        } else {
            Lit::positive(var)
        }
    }

    /// Adds a clause given as DIMACS-convention literals (positive `k` is
    /// the positive literal of variable `k - 1`); internally they are
    /// translated to the packed encoding immediately.
    ///
    /// Returns `true` (OK) or `false` (ERR — the clause is structurally
    /// empty, or conflicts with the existing root-level assignment).
    pub fn add_clause<I>(&mut self, lits: I) -> bool
    where
        I: IntoIterator<Item = i32>,
    {
        let mut cls: Vec<Lit> = lits.into_iter().map(|raw| self.dimacs_lit(raw)).collect();

        // Step 1: sort descending by raw packed value, so a literal and its
        // negation (which differ only in the low bit) land adjacent.
        cls.sort_unstable_by(|a, b| b.raw().cmp(&a.raw()));

        // Step 3: dedup + tautology + already-satisfied-at-root detection in
        // a single pass; only unassigned-at-root literals survive.
        let mut survivors: Vec<Lit> = Vec::with_capacity(cls.len());
        let mut prev: Option<Lit> = None;
        for lit in cls {
            if Some(-lit) == prev {
                debug!("clause is a tautology, discarding");
                return true;
            }
            if Some(lit) == prev {
                continue;
            }
            prev = Some(lit);

            if self.trail.is_true(lit) {
                debug!("clause already satisfied at root, discarding");
                return true;
            }
            if self.trail.is_false(lit) {
                continue;
            }
            survivors.push(lit);
        }

        match survivors.len() {
            0 => {
                self.trivially_unsat = true;
                false
            }
            1 => {
                self.trail.enqueue(survivors[0], Reason::Axiom);
                match self.propagate() {
                    propagate::PropagationResult::Contradiction(_) => {
                        self.trivially_unsat = true;
                        false
                    }
                    propagate::PropagationResult::Done => true,
                }
            }
            _ => {
                let cref = self.arena.append(&survivors);
                self.watches.attach(
                    -survivors[0],
                    Watcher { cref, blocker: survivors[1] },
                );
                self.watches.attach(
                    -survivors[1],
                    Watcher { cref, blocker: survivors[0] },
                );
                true
            }
        }
    }

    /// Runs the search to completion. Returns `SAT` or `UNSAT`.
    pub fn solve(&mut self) -> SolveResult {
        let start = Instant::now();

        if self.trivially_unsat {
            self.stats.root_level_conflicts += 1;
            self.stats.elapsed = start.elapsed();
            return SolveResult::Unsat;
        }

        let result = self.run_search();
        self.stats.elapsed = start.elapsed();

        match result {
            DriverResult::Unsat => SolveResult::Unsat,
            DriverResult::Sat => {
                debug_assert!(
                    self.check_model(),
                    "generated assignment doesn't satisfy the input formula"
                );
                SolveResult::Sat(Model { trail: &self.trail })
            }
        }
    }

    /// Internal consistency check that every stored clause is satisfied by
    /// the current trail. Only run in debug builds.
    fn check_model(&self) -> bool {
        self.arena.iter().all(|cls| self.trail.is_clause_satisfied(cls))
    }

    pub fn from_dimacs(input: &str) -> Result<Solver, dimacs::DimacsError> {
        let clauses = dimacs::parse(input)?;
        let mut solver = Solver::new();
        for clause in clauses {
            solver.add_clause(clause);
        }
        Ok(solver)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            arena: ClauseArena::new(),
            watches: WatchLists::new(),
            trail: Trail::new(),
            stats: Stats::default(),
            trivially_unsat: false,
        }
    }
}

/// A satisfying assignment, readable back out after `solve` returns `Sat`.
pub struct Model<'a> {
    trail: &'a Trail,
}

impl<'a> Model<'a> {
    /// Truth value of DIMACS variable `i` (1-based, positive convention).
    pub fn lit(&self, i: i32) -> bool {
        assert!(i > 0, "query variables by their positive DIMACS index");
        let var = Var::new((i as u32) - 1);
        self.trail.is_true(Lit::positive(var))
    }

    /// The model as a DIMACS-style vector: entry `k` is `+k` if variable
    /// `k`'s positive literal is true, `-k` otherwise.
    pub fn as_vec(&self) -> Vec<i32> {
        (1..=self.trail.num_vars() as i32)
            .map(|i| if self.lit(i) { i } else { -i })
            .collect()
    }
}

impl std::fmt::Debug for Model<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Model").field(&self.as_vec()).finish()
    }
}

#[derive(Debug)]
pub enum SolveResult<'a> {
    Sat(Model<'a>),
    Unsat,
}

impl<'a> SolveResult<'a> {
    pub fn is_sat(&self) -> bool {
        matches!(self, SolveResult::Sat(_))
    }

    pub fn is_unsat(&self) -> bool {
        matches!(self, SolveResult::Unsat)
    }

    pub fn unwrap_sat(self) -> Model<'a> {
        match self {
            SolveResult::Sat(model) => model,
            SolveResult::Unsat => panic!("SolveResult is Unsat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_formula_is_trivially_sat() {
        let mut s = Solver::new();
        assert!(s.solve().is_sat());
    }

    #[test]
    fn add_variable_is_idempotent_with_clause_implied_growth() {
        let mut s = Solver::new();
        let v0 = s.add_variable();
        assert_eq!(v0.get(), 0);
        // Variable 1 is only implied by the clause below; add_variable and
        // add_clause must agree on how many variables now exist.
        s.add_clause([2]);
        assert_eq!(s.trail.num_vars(), 2);
    }

    #[test]
    fn tautological_clause_is_a_no_op() {
        let mut s = Solver::new();
        let before = s.trail.num_vars();
        assert!(s.add_clause([1, -1, 2]));
        // Only variable 2's containing literal forced growth; the
        // tautology check must fire before the clause is stored.
        assert!(s.trail.num_vars() >= before);
        assert!(s.solve().is_sat());
    }

    #[test]
    fn duplicate_literal_within_a_clause_is_equivalent_to_once() {
        let mut a = Solver::new();
        a.add_clause([1, 1, 2]);
        let mut b = Solver::new();
        b.add_clause([1, 2]);
        assert_eq!(a.solve().is_sat(), b.solve().is_sat());
    }

    #[test]
    fn empty_clause_is_unsat() {
        let mut s = Solver::new();
        assert!(!s.add_clause(Vec::<i32>::new()));
        assert!(s.solve().is_unsat());
    }

    #[test]
    fn solving_twice_on_a_satisfiable_formula_is_deterministic() {
        let build = || {
            let mut s = Solver::new();
            s.add_clause([1, 2]);
            s.add_clause([-1, 2]);
            s.add_clause([1, -2]);
            s
        };
        let m1 = build().solve().unwrap_sat().as_vec();
        let m2 = build().solve().unwrap_sat().as_vec();
        assert_eq!(m1, m2);
    }

    #[test]
    fn model_satisfies_every_original_clause() {
        let mut s = Solver::new();
        let clauses = [vec![1, 2, 3], vec![-1, 2], vec![1, -2], vec![-2, -3]];
        for cls in &clauses {
            s.add_clause(cls.clone());
        }
        let model = s.solve().unwrap_sat();
        for cls in &clauses {
            assert!(cls.iter().any(|&lit| {
                if lit > 0 {
                    model.lit(lit)
                } else {
                    !model.lit(-lit)
                }
            }));
        }
    }
}
