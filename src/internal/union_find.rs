//! This module contains the union-find (disjoint-set) structure the
//! minimization is built on. It implements Tarjan's near-linear algorithm:
//! `find` applies full path compression and `union` is weighted, so any
//! sequence of operations runs in amortized near-constant (inverse Ackermann)
//! time per operation.

use super::ids::StateID;

/// A cell of the partition vector.
/// Following `Parent` pointers from any element terminates at a `Root` cell in
/// finitely many steps; the set of roots induces the partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    /// The element is the representative of its class; `size` counts the
    /// elements of the class, including the root itself.
    Root {
        /// Number of elements in the class.
        size: u32,
    },
    /// The element belongs to the tree rooted at the ancestor reached by
    /// following parent pointers.
    Parent(StateID),
}

/// A partition of the elements `0..len` into disjoint classes.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    cells: Vec<Cell>,
}

impl UnionFind {
    /// Create a partition where every element is a singleton class.
    pub(crate) fn new(len: usize) -> Self {
        UnionFind {
            cells: vec![Cell::Root { size: 1 }; len],
        }
    }

    /// Get the number of elements in the partition.
    #[allow(dead_code)]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return the representative (root id) of the class containing `element`.
    /// Side effect: every node traversed from `element` up to the root is
    /// re-parented directly to the root.
    pub(crate) fn find(&mut self, element: StateID) -> StateID {
        let mut root = element;
        while let Cell::Parent(parent) = self.cells[root] {
            root = parent;
        }
        // Second walk over the same path to compress it.
        let mut current = element;
        while let Cell::Parent(parent) = self.cells[current] {
            self.cells[current] = Cell::Parent(root);
            current = parent;
        }
        root
    }

    /// Merge the classes of `a` and `b`. A no-op if they already share a root.
    /// The root of the smaller tree is attached under the root of the larger
    /// tree; on equal sizes the second argument's root is attached under the
    /// first's.
    pub(crate) fn union(&mut self, a: StateID, b: StateID) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        let size_a = self.size_of_root(root_a);
        let size_b = self.size_of_root(root_b);
        if size_b > size_a {
            self.cells[root_a] = Cell::Parent(root_b);
            self.cells[root_b] = Cell::Root {
                size: size_a + size_b,
            };
        } else {
            self.cells[root_b] = Cell::Parent(root_a);
            self.cells[root_a] = Cell::Root {
                size: size_a + size_b,
            };
        }
    }

    /// Check whether `element` is the representative of its class.
    #[allow(dead_code)]
    pub(crate) fn is_root(&self, element: StateID) -> bool {
        matches!(self.cells[element], Cell::Root { .. })
    }

    /// Get the class size stored in a root cell. Must only be called for
    /// elements that are roots.
    pub(crate) fn size_of_root(&self, element: StateID) -> u32 {
        match self.cells[element] {
            Cell::Root { size } => size,
            Cell::Parent(_) => unreachable!("size_of_root called on a non-root element"),
        }
    }

    /// Overwrite the cells of `members` with the classes of `refinement`,
    /// which must be a partition of the same element range whose classes over
    /// `members` are subsets of a single class of `self`.
    /// Cells of elements outside `members` are left untouched.
    pub(crate) fn adopt_refinement(&mut self, members: &[StateID], refinement: &mut UnionFind) {
        debug_assert_eq!(self.cells.len(), refinement.cells.len());
        for &member in members {
            let root = refinement.find(member);
            self.cells[member] = if root == member {
                Cell::Root {
                    size: refinement.size_of_root(root),
                }
            } else {
                Cell::Parent(root)
            };
        }
    }

    /// Get the parent of `element`, or `None` if it is a root.
    #[cfg(test)]
    pub(crate) fn parent(&self, element: StateID) -> Option<StateID> {
        match self.cells[element] {
            Cell::Parent(parent) => Some(parent),
            Cell::Root { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: u32) -> StateID {
        StateID::new(index)
    }

    /// A naive disjoint-set reference that maps every element to an explicit
    /// class label.
    struct NaiveSets {
        labels: Vec<usize>,
    }

    impl NaiveSets {
        fn new(len: usize) -> Self {
            NaiveSets {
                labels: (0..len).collect(),
            }
        }

        fn union(&mut self, a: usize, b: usize) {
            let (from, to) = (self.labels[a], self.labels[b]);
            for label in self.labels.iter_mut() {
                if *label == from {
                    *label = to;
                }
            }
        }

        fn same(&self, a: usize, b: usize) -> bool {
            self.labels[a] == self.labels[b]
        }
    }

    #[test]
    fn singletons_are_their_own_roots() {
        let mut uf = UnionFind::new(4);
        for e in 0..4 {
            assert_eq!(uf.find(id(e)), id(e));
            assert!(uf.is_root(id(e)));
            assert_eq!(uf.size_of_root(id(e)), 1);
        }
    }

    #[test]
    fn union_merges_and_weights_accumulate() {
        let mut uf = UnionFind::new(6);
        uf.union(id(0), id(1));
        uf.union(id(2), id(3));
        uf.union(id(0), id(2));
        let root = uf.find(id(3));
        assert_eq!(uf.find(id(0)), root);
        assert_eq!(uf.find(id(1)), root);
        assert_eq!(uf.find(id(2)), root);
        assert_eq!(uf.size_of_root(root), 4);
        // Untouched elements stay singletons.
        assert_eq!(uf.find(id(4)), id(4));
        assert_eq!(uf.find(id(5)), id(5));
    }

    #[test]
    fn equal_sizes_attach_second_under_first() {
        let mut uf = UnionFind::new(4);
        uf.union(id(2), id(1));
        assert_eq!(uf.find(id(1)), id(2));
        // Two classes of size 2: the first argument's root survives.
        uf.union(id(0), id(3));
        uf.union(id(0), id(2));
        assert_eq!(uf.find(id(2)), id(0));
    }

    #[test]
    fn smaller_tree_goes_under_larger_root() {
        let mut uf = UnionFind::new(5);
        uf.union(id(3), id(4));
        uf.union(id(3), id(2));
        // Class {2, 3, 4} outweighs the singleton {0} even though it is the
        // second argument.
        uf.union(id(0), id(3));
        assert_eq!(uf.find(id(0)), id(3));
        assert_eq!(uf.size_of_root(id(3)), 4);
    }

    #[test]
    fn matches_naive_reference_after_arbitrary_unions() {
        const LEN: usize = 32;
        let pairs: Vec<(usize, usize)> = (0..LEN)
            .flat_map(|i| [(i, (i * 7 + 3) % LEN), ((i * 5) % LEN, i / 2)])
            .collect();
        let mut uf = UnionFind::new(LEN);
        let mut naive = NaiveSets::new(LEN);
        for (a, b) in pairs {
            uf.union(id(a as u32), id(b as u32));
            naive.union(a, b);
        }
        for a in 0..LEN {
            for b in 0..LEN {
                assert_eq!(
                    uf.find(id(a as u32)) == uf.find(id(b as u32)),
                    naive.same(a, b),
                    "disagreement for elements {} and {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn find_compresses_the_traversed_path() {
        // Unify pairwise in a chain 0-1, 1-2, ..., (n-2)-(n-1), then query the
        // deepest element; afterwards every cell along the path must point
        // directly at the final root.
        const LEN: u32 = 64;
        let mut uf = UnionFind::new(LEN as usize);
        for e in 0..LEN - 1 {
            uf.union(id(e), id(e + 1));
        }
        let root = uf.find(id(0));
        for e in 0..LEN {
            if e == root.id() {
                assert!(uf.is_root(id(e)));
            } else {
                // Parent chain of length at most 1.
                assert_eq!(uf.parent(id(e)), Some(root));
            }
        }
    }

    #[test]
    fn find_reparents_intermediate_nodes_to_the_root() {
        let mut uf = UnionFind::new(8);
        uf.union(id(0), id(1));
        uf.union(id(2), id(3));
        uf.union(id(4), id(5));
        uf.union(id(6), id(7));
        uf.union(id(0), id(2));
        uf.union(id(4), id(6));
        uf.union(id(0), id(4));
        // The merges above leave the path 7 -> 6 -> 4 -> 0 uncompressed.
        assert_eq!(uf.parent(id(7)), Some(id(6)));
        let root = uf.find(id(7));
        assert_eq!(root, id(0));
        assert_eq!(uf.parent(id(7)), Some(root));
        assert_eq!(uf.parent(id(6)), Some(root));
        assert_eq!(uf.parent(id(4)), Some(root));
    }

    #[test]
    fn adopt_refinement_splits_a_class_in_place() {
        let mut uf = UnionFind::new(4);
        for e in 1..4 {
            uf.union(id(0), id(e));
        }
        let mut scratch = UnionFind::new(4);
        scratch.union(id(0), id(1));
        scratch.union(id(2), id(3));
        let members: Vec<StateID> = (0..4).map(id).collect();
        uf.adopt_refinement(&members, &mut scratch);
        assert_eq!(uf.find(id(1)), id(0));
        assert_eq!(uf.find(id(3)), id(2));
        assert_ne!(uf.find(id(0)), uf.find(id(2)));
        assert_eq!(uf.size_of_root(id(0)), 2);
        assert_eq!(uf.size_of_root(id(2)), 2);
    }
}
