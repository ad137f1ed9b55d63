#![forbid(missing_docs)]
//! # `dfamin`
//! The `dfamin` crate minimizes deterministic finite automata (DFAs): given a
//! DFA that recognizes some regular language, it produces an equivalent DFA
//! with the minimum possible number of states that still recognizes the same
//! language.
//! Minimization matters wherever a DFA is executed on a hot path and the state
//! count dictates memory and dispatch cost, e.g. in lexer construction for
//! compilers, in regex engines, or in protocol conformance checkers.
//! The minimization combines equivalence-class refinement over a weighted,
//! path-compressing union-find structure with dead-state detection via
//! Warshall transitive closure.
//! Automata can be read from a whitespace-delimited text format and rendered
//! back as a transition table, so the crate also works as a small command line
//! tool.

/// Module that provides the DFA type.
mod dfa;
pub use dfa::{Dfa, StateAttribute};

/// Module that provides the DFA builder.
mod dfa_builder;
pub use dfa_builder::DfaBuilder;

/// Module with error definitions
mod errors;
pub use errors::{DfaminError, DfaminErrorKind, ParseError, Result};

/// The module with internal implementation details.
mod internal;
pub use internal::{StateID, SymbolID};
