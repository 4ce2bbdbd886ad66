// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental connectivity queries.
//!
//! The catenary searches only ever ask two questions of a factorization
//! graph: "how many components are there?" and "are these two nodes
//! joined?". Edges are only ever added, so a disjoint-set forest answers both.

use crate::graph::union_find::DisjointSet;

/// An undirected graph on `0..nodes` that only supports adding edges.
#[derive(Debug, Clone)]
pub struct ConnectivityGraph {
    components: DisjointSet,
    edges: usize,
}

impl ConnectivityGraph {
    /// A graph with `nodes` isolated nodes.
    pub fn new(nodes: usize) -> Self {
        Self {
            components: DisjointSet::new(nodes),
            edges: 0,
        }
    }

    /// Add the edge `a - b`.
    ///
    /// Returns true if the edge merged two components.
    pub fn add_edge(&mut self, a: usize, b: usize) -> bool {
        self.edges += 1;
        self.components.union(a, b)
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        self.components.count_sets()
    }

    /// Check if there is a path between `a` and `b`.
    pub fn path_exists(&mut self, a: usize, b: usize) -> bool {
        self.components.connected(a, b)
    }

    /// Check if the graph is a single component.
    ///
    /// The empty graph has no components and is not connected.
    pub fn is_connected(&self) -> bool {
        self.component_count() == 1
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.components.len()
    }

    /// Number of edges added, including redundant ones.
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
