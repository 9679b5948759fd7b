//! The assignment map: variable -> {TRUE, FALSE, UNASSIGNED}.
//!
//! Stores the polarity bit a variable was set to, rather than a plain
//! `bool`, so a literal's truth value is a direct comparison against its
//! own polarity bit with no branching.

use crate::data::VarVec;
use crate::var::{Lit, LBool, Var};

#[derive(Default)]
pub struct Assignment {
    /// `None` = unassigned; `Some(pol)` = the variable is assigned such
    /// that a literal with polarity `pol` over it is TRUE: a literal agrees
    /// with the assignment when its polarity bit matches the stored value
    /// of its variable.
    values: VarVec<Option<u32>>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, v: Var) {
        self.values.expand(v, None);
    }

    pub fn value(&self, l: Lit) -> LBool {
        match self.values[l.var()] {
            None => LBool::Unassigned,
            Some(pol) if pol == l.pol() => LBool::True,
            Some(_) => LBool::False,
        }
    }

    pub fn is_true(&self, l: Lit) -> bool {
        self.value(l) == LBool::True
    }

    pub fn is_false(&self, l: Lit) -> bool {
        self.value(l) == LBool::False
    }

    pub fn is_unassigned(&self, l: Lit) -> bool {
        self.value(l) == LBool::Unassigned
    }

    pub fn is_var_assigned(&self, v: Var) -> bool {
        self.values[v].is_some()
    }

    /// Sets the variable's assignment to `lit_pol(l)`, making `l` TRUE.
    pub fn assign(&mut self, l: Lit) {
        debug_assert!(self.is_unassigned(l));
        self.values[l.var()] = Some(l.pol());
    }

    pub fn unassign(&mut self, v: Var) {
        debug_assert!(self.values[v].is_some());
        self.values[v] = None;
    }

    pub fn num_vars(&self) -> usize {
        self.values.len()
    }
}
