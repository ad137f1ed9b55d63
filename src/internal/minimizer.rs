use log::trace;

use super::compressor::compress;
use super::reachability::mark_dead;
use super::refiner::{initial_partition, refine};
use crate::Dfa;

/// The minimizer drives the minimization pipeline: partition refinement to a
/// fixpoint, compression of the classes into a fresh DFA, and the dead-state
/// pass on the result. The dead-state pass runs after compression so that it
/// works on the smallest graph.
#[derive(Debug)]
pub(crate) struct Minimizer;

impl Minimizer {
    /// Minimize the DFA. Every step runs unconditionally; the pipeline has no
    /// error paths because the input DFA is validated on construction.
    pub(crate) fn minimize(dfa: &Dfa) -> Dfa {
        trace!("minimize DFA with {} states", dfa.nstates());
        let mut rep = initial_partition(dfa);
        while refine(dfa, &mut rep) {}
        let mut minimized = compress(dfa, &mut rep);
        mark_dead(&mut minimized);
        trace!("minimized DFA has {} states", minimized.nstates());
        minimized
    }
}
