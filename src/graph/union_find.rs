// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Disjoint-set forest (union-find).
//!
//! Used by Kruskal's algorithm to reject cycle-forming edges, and by the
//! catenary threshold search to count components as edges are added.

/// Disjoint sets over `0..n` with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Number of disjoint sets
    count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    /// Representative of the set containing `node`, compressing the path to it.
    ///
    /// # Panics
    ///
    /// Panics if `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        self.check(node);
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merge the sets containing `left` and `right`.
    ///
    /// Returns false if they were already in the same set.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.count -= 1;
        true
    }

    /// Check if two nodes are in the same set.
    pub fn connected(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Number of disjoint sets.
    pub fn count_sets(&self) -> usize {
        self.count
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    #[inline]
    fn check(&self, node: usize) {
        assert!(
            node < self.parent.len(),
            "Union-find node {} out of range (size {})",
            node,
            self.parent.len()
        );
    }
}
