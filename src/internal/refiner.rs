//! This module contains the partition refiner.
//! Starting from the two-class partition accepting/non-accepting, the refiner
//! repeatedly splits classes whose members disagree on the class of one of
//! their transition targets, until a fixpoint is reached. At the fixpoint two
//! states share a class iff they are language-equivalent.

use log::trace;
use rustc_hash::FxHashMap;

use super::union_find::UnionFind;
use super::{StateID, SymbolID};
use crate::Dfa;

/// Seed the partition with at most two classes: all accepting states in one,
/// all non-accepting states in the other. If either category is empty only
/// the other class exists.
pub(crate) fn initial_partition(dfa: &Dfa) -> UnionFind {
    let mut rep = UnionFind::new(dfa.nstates());
    let mut accepting_anchor: Option<StateID> = None;
    let mut other_anchor: Option<StateID> = None;
    for state in dfa.state_ids() {
        let anchor = if dfa.is_accepting(state) {
            &mut accepting_anchor
        } else {
            &mut other_anchor
        };
        match anchor {
            Some(first) => rep.union(*first, state),
            None => *anchor = Some(state),
        }
    }
    rep
}

/// Perform one refinement sweep over all current classes of `rep`.
/// Each class with at least two members is split into sub-classes such that
/// two states stay together iff they agree on the class of their transition
/// target for every alphabet symbol. Returns whether any split occurred.
///
/// Splits take effect immediately: `rep` is updated in place between classes,
/// so classes visited later in the same sweep already see the finer partition.
/// This is sound because any split is a valid refinement of the coarser
/// partition; it only speeds up convergence.
pub(crate) fn refine(dfa: &Dfa, rep: &mut UnionFind) -> bool {
    // Snapshot the classes at sweep start. Members are collected in ascending
    // state order, so the first member of each class is its smallest state.
    let mut classes: Vec<Vec<StateID>> = Vec::new();
    let mut group_of_root: FxHashMap<StateID, usize> = FxHashMap::default();
    for state in dfa.state_ids() {
        let root = rep.find(state);
        let group = *group_of_root.entry(root).or_insert_with(|| {
            classes.push(Vec::new());
            classes.len() - 1
        });
        classes[group].push(state);
    }
    trace!("refine sweep over {} classes", classes.len());

    let mut changed = false;
    for members in classes.iter().filter(|members| members.len() > 1) {
        // Re-partition the members of this class in a scratch union-find.
        // Elements outside the class are don't-care.
        let mut scratch = UnionFind::new(dfa.nstates());
        for i in 0..members.len() {
            for j in i + 1..members.len() {
                // Already unified with an earlier member.
                if scratch.find(members[j]) != members[j] {
                    continue;
                }
                if same_transitions(dfa, members[i], members[j], rep) {
                    scratch.union(members[i], members[j]);
                }
            }
        }
        let sub_classes = members.iter().filter(|m| scratch.find(**m) == **m).count();
        if sub_classes > 1 {
            trace!(
                "split class of {} ({} members) into {} sub-classes",
                members[0],
                members.len(),
                sub_classes
            );
            rep.adopt_refinement(members, &mut scratch);
            changed = true;
        }
    }
    changed
}

/// Two states have equivalent transitions under the current partition iff for
/// every alphabet symbol the representatives of their transition targets
/// agree. The sink (no transition) is its own distinguished class.
fn same_transitions(dfa: &Dfa, s1: StateID, s2: StateID, rep: &mut UnionFind) -> bool {
    dfa.symbol_ids().all(|symbol: SymbolID| {
        let t1 = dfa.transition(s1, symbol).map(|t| rep.find(t));
        let t2 = dfa.transition(s2, symbol).map(|t| rep.find(t));
        t1 == t2
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DfaBuilder;

    fn class_of(rep: &mut UnionFind, state: u32) -> StateID {
        rep.find(StateID::new(state))
    }

    #[test]
    fn initial_partition_separates_accepting_states() {
        let dfa = DfaBuilder::new(4, &['a'])
            .transition(0, 'a', 1)
            .transition(1, 'a', 2)
            .transition(2, 'a', 3)
            .transition(3, 'a', 3)
            .accepting(1)
            .accepting(3)
            .build()
            .unwrap();
        let mut rep = initial_partition(&dfa);
        assert_eq!(class_of(&mut rep, 1), class_of(&mut rep, 3));
        assert_eq!(class_of(&mut rep, 0), class_of(&mut rep, 2));
        assert_ne!(class_of(&mut rep, 0), class_of(&mut rep, 1));
    }

    #[test]
    fn initial_partition_with_a_single_category() {
        let dfa = DfaBuilder::new(3, &['a'])
            .transition(0, 'a', 1)
            .transition(1, 'a', 2)
            .transition(2, 'a', 0)
            .build()
            .unwrap();
        let mut rep = initial_partition(&dfa);
        assert_eq!(class_of(&mut rep, 0), class_of(&mut rep, 1));
        assert_eq!(class_of(&mut rep, 0), class_of(&mut rep, 2));
    }

    #[test]
    fn refine_splits_on_differing_targets() {
        // 0 and 1 are both non-accepting, but 1 moves into the accepting
        // class while 0 stays outside of it.
        let dfa = DfaBuilder::new(3, &['a'])
            .transition(0, 'a', 0)
            .transition(1, 'a', 2)
            .transition(2, 'a', 2)
            .accepting(2)
            .build()
            .unwrap();
        let mut rep = initial_partition(&dfa);
        assert!(refine(&dfa, &mut rep));
        assert_ne!(class_of(&mut rep, 0), class_of(&mut rep, 1));
        // A second sweep finds nothing left to split.
        assert!(!refine(&dfa, &mut rep));
    }

    #[test]
    fn refine_distinguishes_sink_from_real_targets() {
        // State 1 has no transition on 'a', state 0 has one.
        let dfa = DfaBuilder::new(3, &['a'])
            .transition(0, 'a', 2)
            .transition(2, 'a', 2)
            .accepting(2)
            .build()
            .unwrap();
        let mut rep = initial_partition(&dfa);
        assert!(refine(&dfa, &mut rep));
        assert_ne!(class_of(&mut rep, 0), class_of(&mut rep, 1));
    }

    #[test]
    fn refine_reaches_a_fixpoint_without_splits() {
        // Both accepting states loop onto themselves and behave identically.
        let dfa = DfaBuilder::new(3, &['a'])
            .transition(0, 'a', 1)
            .transition(1, 'a', 2)
            .transition(2, 'a', 2)
            .accepting(1)
            .accepting(2)
            .build()
            .unwrap();
        let mut rep = initial_partition(&dfa);
        assert!(!refine(&dfa, &mut rep));
        assert_eq!(class_of(&mut rep, 1), class_of(&mut rep, 2));
    }

    #[test]
    fn sweep_count_is_bounded_by_nstates() {
        // A chain of states needs one sweep per split to separate them all.
        let n = 8usize;
        let mut builder = DfaBuilder::new(n, &['a']);
        for s in 0..n - 1 {
            builder = builder.transition(s, 'a', s + 1);
        }
        builder = builder.transition(n - 1, 'a', n - 1).accepting(n - 1);
        let dfa = builder.build().unwrap();
        let mut rep = initial_partition(&dfa);
        let mut sweeps = 0;
        while refine(&dfa, &mut rep) {
            sweeps += 1;
            assert!(sweeps <= n);
        }
        // All states are pairwise distinguishable.
        for a in 0..n as u32 {
            for b in a + 1..n as u32 {
                assert_ne!(class_of(&mut rep, a), class_of(&mut rep, b));
            }
        }
    }
}
