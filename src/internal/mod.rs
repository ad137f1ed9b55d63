/// Module that provides the compressor which rebuilds a DFA from a partition.
pub(crate) mod compressor;

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module for several ID types.
mod ids;
pub use ids::{StateID, SymbolID};
pub(crate) use ids::{StateIDBase, SymbolIDBase};

/// Module that provides the minimization orchestration.
pub(crate) mod minimizer;

/// Module that provides the parser for the textual DFA format.
pub(crate) mod parser;

/// Module that provides the dead-state pass.
pub(crate) mod reachability;

/// Module that provides the partition refiner.
pub(crate) mod refiner;

/// Module that provides the union-find structure.
pub(crate) mod union_find;
