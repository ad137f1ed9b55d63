//! This module contains the dead-state pass.
//! A state is dead if it is unreachable from the initial state or if no
//! accepting state is reachable from it. Reachability is computed with
//! Warshall's transitive closure over a dense boolean connectivity matrix that
//! lives only for the duration of the pass.

use log::trace;

use super::StateID;
use crate::{Dfa, StateAttribute};

/// A dense boolean matrix `conn` where `conn[i][j]` is true iff state j is
/// reachable from state i via zero or more transitions.
#[derive(Debug)]
pub(crate) struct ConnectivityMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl ConnectivityMatrix {
    /// Build the direct-connectivity matrix of the DFA: every state reaches
    /// itself, and its transition targets in one step.
    pub(crate) fn from_dfa(dfa: &Dfa) -> Self {
        let n = dfa.nstates();
        let mut cells = vec![false; n * n];
        for state in dfa.state_ids() {
            cells[state.as_usize() * n + state.as_usize()] = true;
            for symbol in dfa.symbol_ids() {
                if let Some(target) = dfa.transition(state, symbol) {
                    cells[state.as_usize() * n + target.as_usize()] = true;
                }
            }
        }
        ConnectivityMatrix { n, cells }
    }

    /// Check whether `to` is reachable from `from`.
    #[inline]
    pub(crate) fn is_connected(&self, from: StateID, to: StateID) -> bool {
        self.cells[from.as_usize() * self.n + to.as_usize()]
    }

    /// Compute the full transitive closure in place with Warshall's algorithm.
    /// Loop order is k outermost, then i, then j (the k-i-j variant); the
    /// resulting closure is independent of the ordering.
    pub(crate) fn transitive_closure(&mut self) {
        let n = self.n;
        for k in 0..n {
            for i in 0..n {
                if self.cells[i * n + k] {
                    for j in 0..n {
                        self.cells[i * n + j] |= self.cells[k * n + j];
                    }
                }
            }
        }
    }
}

/// Mark every ordinary state of the DFA as dead that is unreachable from the
/// initial state or that cannot reach any accepting state. Accepting states
/// and already-dead states are never reclassified, so the attribute of an
/// accepting state survives even if it is unreachable. The language of the
/// automaton is empty iff its initial state ends up dead.
pub(crate) fn mark_dead(dfa: &mut Dfa) {
    let mut conn = ConnectivityMatrix::from_dfa(dfa);
    conn.transitive_closure();

    let init = dfa.initial_state();
    for state in dfa.state_ids() {
        if dfa.attribute(state) != StateAttribute::Normal {
            continue;
        }
        if !conn.is_connected(init, state) {
            trace!("state {} is unreachable from the initial state", state);
            dfa.set_attribute(state, StateAttribute::Dead);
        }
    }

    let accepting: Vec<StateID> = dfa.accepting_states().to_vec();
    for state in dfa.state_ids() {
        if dfa.attribute(state) != StateAttribute::Normal {
            continue;
        }
        if !accepting.iter().any(|a| conn.is_connected(state, *a)) {
            trace!("state {} cannot reach an accepting state", state);
            dfa.set_attribute(state, StateAttribute::Dead);
        }
    }
}
