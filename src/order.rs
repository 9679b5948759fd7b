//! Decision heuristic: a maintained sorted set of unassigned variables.
//! Popping always yields the smallest-indexed unassigned variable;
//! tie-breaking is by variable index since the set carries no other key.
//!
//! A `BTreeSet` keeps every unassigned variable exactly once and supports
//! O(log n) removal and (re)insertion, so backtracking can cheaply put a
//! variable back into contention.

use std::collections::BTreeSet;

use crate::var::Var;

#[derive(Default)]
pub struct VarOrder(BTreeSet<Var>);

impl VarOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, v: Var) {
        self.0.insert(v);
    }

    pub fn remove(&mut self, v: Var) {
        self.0.remove(&v);
    }

    /// Pop and return the smallest unassigned variable, or `None` if every
    /// variable is assigned.
    pub fn pop_min(&mut self) -> Option<Var> {
        let &v = self.0.iter().next()?;
        self.0.remove(&v);
        Some(v)
    }

    #[cfg(test)]
    pub fn contains(&self, v: Var) -> bool {
        self.0.contains(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_min_returns_smallest_first() {
        let mut order = VarOrder::new();
        order.insert(Var::new(3));
        order.insert(Var::new(1));
        order.insert(Var::new(2));
        assert_eq!(order.pop_min(), Some(Var::new(1)));
        assert_eq!(order.pop_min(), Some(Var::new(2)));
        assert_eq!(order.pop_min(), Some(Var::new(3)));
        assert_eq!(order.pop_min(), None);
    }

    #[test]
    fn remove_and_reinsert_round_trips() {
        let mut order = VarOrder::new();
        order.insert(Var::new(0));
        order.remove(Var::new(0));
        assert!(!order.contains(Var::new(0)));
        order.insert(Var::new(0));
        assert!(order.contains(Var::new(0)));
    }
}
