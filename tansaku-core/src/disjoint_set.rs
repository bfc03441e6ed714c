//! Union-find (disjoint set union) used by Kruskal's algorithm.
//!
//! Each minimum spanning tree computation builds a fresh set over the vertex
//! ids, merges components as edges are accepted, and discards it afterwards.
//! Unions attach the smaller component beneath the larger one; lookups halve
//! the path they walk.
//!
//! Indices must be smaller than the size the set was created with.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            let grandparent = self.parent[self.parent[node]];
            self.parent[node] = grandparent;
            node = grandparent;
        }
        node
    }

    /// Merges the components holding `left` and `right`.
    ///
    /// Returns `false` when both already share a component.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        self.size[parent] = self.size[parent].saturating_add(self.size[child]);
        true
    }

    pub(crate) fn same_component(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    #[cfg(test)]
    fn component_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }
}

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for union-find invariants.

    use super::DisjointSet;

    /// Verifies that any sequence of unions keeps `find` idempotent and that
    /// merged elements report the same component.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_union_joins_components_4_nodes() {
        let mut set = DisjointSet::new(4);
        for _ in 0..3 {
            let left: usize = kani::any();
            let right: usize = kani::any();
            kani::assume(left < 4 && right < 4);
            set.union(left, right);
            kani::assert(
                set.same_component(left, right),
                "union must join both elements",
            );
        }

        for node in 0..4 {
            let root = set.find(node);
            kani::assert(set.find(root) == root, "roots must be fixed points");
        }
    }
}
