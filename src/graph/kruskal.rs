// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kruskal's minimum spanning forest over a candidate edge list.
//!
//! The result spans the graph formed by the *supplied* edges, not the
//! complete graph on the vertices. When the candidate edges leave the
//! vertices disconnected, the result is a forest with one tree per
//! component, so it has fewer than `vertices.len() - 1` edges.
//!
//! # Example
//!
//! ```
//! use numerical_monoid::graph::minimum_spanning_forest;
//!
//! let points = [0.0, 1.0, 5.0, 6.0];
//! let distance = |a: &f64, b: &f64| (a - b).abs();
//!
//! // Complete candidate set: one tree with 3 edges
//! let all = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
//! assert_eq!(minimum_spanning_forest(&points, &all, distance), vec![(0, 1), (2, 3), (1, 2)]);
//!
//! // Restricted candidate set: a forest of two trees
//! let restricted = [(0, 1), (2, 3)];
//! assert_eq!(minimum_spanning_forest(&points, &restricted, distance).len(), 2);
//! ```

use crate::graph::union_find::DisjointSet;

/// An undirected edge as a pair of vertex indices.
pub type IndexPair = (usize, usize);

/// Minimum spanning forest of `edges` over `vertices`, weighted by `metric`.
///
/// Edges are considered in ascending weight; equal weights keep their input
/// order. An edge is accepted when its endpoints are still in different
/// components. Accepted edges are returned as given, in acceptance order.
///
/// # Panics
///
/// Panics if an edge refers to a vertex index outside `vertices`.
pub fn minimum_spanning_forest<T, F>(vertices: &[T], edges: &[IndexPair], metric: F) -> Vec<IndexPair>
where
    F: Fn(&T, &T) -> f64,
{
    let mut weighted: Vec<(f64, IndexPair)> = edges
        .iter()
        .map(|&(u, v)| {
            assert!(
                u < vertices.len() && v < vertices.len(),
                "Edge ({}, {}) out of range for {} vertices",
                u,
                v,
                vertices.len()
            );
            (metric(&vertices[u], &vertices[v]), (u, v))
        })
        .collect();

    // sort_by is stable: ties stay in input order
    weighted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut forest = DisjointSet::new(vertices.len());
    let mut accepted = Vec::with_capacity(vertices.len().saturating_sub(1));
    for (_, (u, v)) in weighted {
        if forest.union(u, v) {
            accepted.push((u, v));
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: &i32, b: &i32) -> f64 {
        f64::from((a - b).abs())
    }

    #[test]
    fn test_empty_inputs() {
        let none: [i32; 0] = [];
        assert!(minimum_spanning_forest(&none, &[], distance).is_empty());
        assert!(minimum_spanning_forest(&[7], &[(0, 0)], distance).is_empty());
    }

    #[test]
    fn test_spanning_tree_of_complete_graph() {
        let vertices = [0, 10, 3, 4];
        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                edges.push((i, j));
            }
        }
        let tree = minimum_spanning_forest(&vertices, &edges, distance);
        assert_eq!(tree.len(), vertices.len() - 1);
        let weight: f64 = tree
            .iter()
            .map(|&(u, v)| distance(&vertices[u], &vertices[v]))
            .sum();
        // 3-4 (1), 0-3 (3), 4-10 (6)
        assert_eq!(weight, 10.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let vertices = [0, 1, 2];
        // (0,1) and (1,2) and (0,2) reversed: all tie except (0,2)
        let edges = [(2, 1), (1, 0), (0, 2)];
        let tree = minimum_spanning_forest(&vertices, &edges, distance);
        assert_eq!(tree, vec![(2, 1), (1, 0)]);
    }

    #[test]
    fn test_restricted_edges_give_forest() {
        let vertices = [0, 1, 100, 101, 500];
        let edges = [(0, 1), (2, 3)];
        let forest = minimum_spanning_forest(&vertices, &edges, distance);
        assert_eq!(forest, vec![(0, 1), (2, 3)]);
        assert!(forest.len() < vertices.len() - 1);
    }

    #[test]
    fn test_rejects_cycles_and_self_loops() {
        let vertices = [0, 1, 2];
        let edges = [(0, 0), (0, 1), (1, 0), (1, 2), (0, 2)];
        let tree = minimum_spanning_forest(&vertices, &edges, distance);
        assert_eq!(tree, vec![(0, 1), (1, 2)]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_edge_out_of_range() {
        minimum_spanning_forest(&[0, 1], &[(0, 2)], distance);
    }
}
