// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph utilities over factorization sets.
//!
//! This module contains the graph machinery the monoid engine needs:
//! - DisjointSet: union-find with path compression
//! - minimum_spanning_forest: Kruskal over a candidate edge list
//! - ConnectivityGraph: component counting and reachability as edges are added
//! - AdjacencyMatrix: boolean reachability for Betti detection

pub mod adjacency;
pub mod connectivity;
pub mod kruskal;
pub mod union_find;

// Re-export for convenience
pub use adjacency::AdjacencyMatrix;
pub use connectivity::ConnectivityGraph;
pub use kruskal::{minimum_spanning_forest, IndexPair};
pub use union_find::DisjointSet;
