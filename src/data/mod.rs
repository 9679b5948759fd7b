//! Generic dense containers indexed by [`crate::Var`] / [`crate::Lit`].
//!
//! The algorithmic core never reaches for a raw `Vec<T>` indexed by a bare
//! integer; it always goes through one of these wrappers so that variable-
//! and literal-indexing stays a type error to get wrong.

mod litvec;
mod varvec;

pub use litvec::LitVec;
pub use varvec::VarVec;
