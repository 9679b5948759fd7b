//! DIMACS CNF text ingestion: an external collaborator, not part of the
//! search core. This module only ever calls into the public
//! `Solver::add_clause`/`Solver::from_dimacs` surface — it never reaches
//! into the solver's internals.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimacsError {
    /// A literal token failed to parse as a signed 32-bit integer.
    BadLiteral { line: usize, token: String },
}

impl fmt::Display for DimacsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimacsError::BadLiteral { line, token } => {
                write!(f, "line {line}: not a valid literal: {token:?}")
            }
        }
    }
}

impl std::error::Error for DimacsError {}

/// Parse a DIMACS CNF document into clauses of signed literals (positive
/// `k` is the positive literal of variable `k - 1`). Comment lines (`c ...`)
/// and the problem header (`p cnf V C`) are skipped; each remaining line is
/// one clause, terminated by a `0` which is dropped.
pub fn parse(input: &str) -> Result<Vec<Vec<i32>>, DimacsError> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .filter(|(_, line)| !line.starts_with('c'))
        .filter(|(_, line)| !line.starts_with('p'))
        .map(|(line_no, line)| {
            line.split_whitespace()
                .map(|tok| {
                    tok.parse::<i32>().map_err(|_| DimacsError::BadLiteral {
                        line: line_no,
                        token: tok.to_string(),
                    })
                })
                .filter(|tok| !matches!(tok, Ok(0)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}
