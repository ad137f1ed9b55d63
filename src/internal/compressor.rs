//! This module contains the compressor.
//! It rebuilds a fresh DFA from the final partition: every class becomes
//! exactly one state, represented by its member with the smallest id, and the
//! transition table is rewritten through the class representatives.

use log::trace;

use super::union_find::UnionFind;
use super::{StateID, StateIDBase};
use crate::{Dfa, StateAttribute};

/// Build the minimized DFA from `dfa` and the final partition in `rep`.
/// Representatives are assigned new ids in ascending scan order; `map` takes
/// an old representative id to its new id and `pam` is the inverse.
pub(crate) fn compress(dfa: &Dfa, rep: &mut UnionFind) -> Dfa {
    let mut map: Vec<Option<StateID>> = vec![None; dfa.nstates()];
    let mut pam: Vec<StateID> = Vec::new();
    for state in dfa.state_ids() {
        // The first member of a class encountered during the ascending scan
        // that is its own root is the canonical representative.
        if rep.find(state) == state {
            map[state] = Some(StateID::new(pam.len() as StateIDBase));
            pam.push(state);
        }
    }
    trace!(
        "compressing {} states into {} classes",
        dfa.nstates(),
        pam.len()
    );

    let mut transitions: Vec<Option<StateID>> = Vec::with_capacity(pam.len() * dfa.nab());
    for old in pam.iter() {
        for symbol in dfa.symbol_ids() {
            // The sink propagates: no transition stays no transition.
            let target = dfa
                .transition(*old, symbol)
                .map(|t| map[rep.find(t)].unwrap());
            transitions.push(target);
        }
    }

    let attributes: Vec<StateAttribute> = pam.iter().map(|old| dfa.attribute(*old)).collect();
    let accepting_states: Vec<StateID> = attributes
        .iter()
        .enumerate()
        .filter(|(_, attribute)| **attribute == StateAttribute::Accept)
        .map(|(new_id, _)| StateID::new(new_id as StateIDBase))
        .collect();

    debug_assert_eq!(
        map[rep.find(dfa.initial_state())],
        Some(StateID::new(0)),
        "the class of the initial state must map to the new initial state"
    );

    Dfa::from_parts(
        dfa.alphabet().to_vec(),
        transitions,
        attributes,
        accepting_states,
    )
}
