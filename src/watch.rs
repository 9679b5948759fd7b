//! Watch lists: per-literal lists of clauses watching that literal.
//!
//! A watcher `(cref, blocker)` is attached to the literal whose negation
//! triggers re-examination of the clause. `blocker` is a literal from the
//! same clause other than the one watched on; it lets the propagator skip
//! the arena entirely when the blocker is already satisfied.

use crate::arena::CRef;
use crate::data::LitVec;
use crate::var::Lit;

#[derive(Clone, Copy, Debug)]
pub struct Watcher {
    pub cref: CRef,
    pub blocker: Lit,
}

#[derive(Default)]
pub struct WatchLists(LitVec<Vec<Watcher>>);

impl WatchLists {
    pub fn new() -> Self {
        Self(LitVec::new())
    }

    pub fn expand(&mut self, l: Lit) {
        self.0.expand(l, Vec::new());
    }

    /// `attach(l, watcher)`: append a watcher to `l`'s list.
    pub fn attach(&mut self, l: Lit, watcher: Watcher) {
        self.0[l].push(watcher);
    }

    /// Remove `l`'s list for exclusive in-place processing, leaving an empty
    /// stand-in behind. The caller rebuilds the kept watchers and calls
    /// [`WatchLists::restore`] when done; watchers it migrates elsewhere are
    /// pushed directly via `attach` on the new literal and are never part of
    /// the list the caller restores.
    pub fn take(&mut self, l: Lit) -> Vec<Watcher> {
        std::mem::take(&mut self.0[l])
    }

    pub fn restore(&mut self, l: Lit, watchers: Vec<Watcher>) {
        self.0[l] = watchers;
    }
}
