// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use numerical_monoid::graph::{minimum_spanning_forest, ConnectivityGraph, DisjointSet, IndexPair};
use numerical_monoid::{Factorization, Metric, NumericalMonoid};

/// Build a monoid from generators known to be valid.
pub fn monoid(generators: &[i64]) -> NumericalMonoid {
    NumericalMonoid::new(generators)
        .unwrap_or_else(|e| panic!("{:?} should be valid: {}", generators, e))
}

/// Shorthand for a factorization literal.
pub fn fac<const N: usize>(coords: [u32; N]) -> Factorization {
    Factorization::from(coords)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Is the graph joining every pair at distance `<= threshold` connected?
pub fn connected_at(factorizations: &[Factorization], metric: Metric, threshold: f64) -> bool {
    let mut graph = ConnectivityGraph::new(factorizations.len());
    for i in 0..factorizations.len() {
        for j in i + 1..factorizations.len() {
            if metric.distance(&factorizations[i], &factorizations[j]) <= threshold {
                graph.add_edge(i, j);
            }
        }
    }
    graph.is_connected()
}

/// Largest edge of a minimum spanning tree of the complete factorization graph.
pub fn bottleneck(factorizations: &[Factorization], metric: Metric) -> f64 {
    let edges: Vec<IndexPair> = (0..factorizations.len())
        .flat_map(|i| (i + 1..factorizations.len()).map(move |j| (i, j)))
        .collect();
    minimum_spanning_forest(factorizations, &edges, |a, b| metric.distance(a, b))
        .into_iter()
        .map(|(i, j)| metric.distance(&factorizations[i], &factorizations[j]))
        .fold(0.0, f64::max)
}

/// Number of classes of factorizations linked by sharing a generator.
pub fn r_classes(factorizations: &[Factorization]) -> usize {
    let mut classes = DisjointSet::new(factorizations.len());
    for i in 0..factorizations.len() {
        for j in i + 1..factorizations.len() {
            if factorizations[i].gcd(&factorizations[j]).size() > 0 {
                classes.union(i, j);
            }
        }
    }
    classes.count_sets()
}

/// Check that `tree` is a spanning tree on `vertices` vertices.
pub fn assert_spanning_tree(vertices: usize, tree: &[IndexPair]) {
    assert_eq!(tree.len(), vertices.saturating_sub(1), "edge count");
    let mut components = DisjointSet::new(vertices);
    for &(i, j) in tree {
        assert!(i < vertices && j < vertices, "edge ({}, {}) out of range", i, j);
        assert!(components.union(i, j), "edge ({}, {}) closes a cycle", i, j);
    }
}
