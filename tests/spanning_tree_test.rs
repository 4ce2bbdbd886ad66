// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{assert_spanning_tree, fac, monoid};
use numerical_monoid::graph::{minimum_spanning_forest, IndexPair};
use numerical_monoid::Metric;
use strum::IntoEnumIterator;

#[test]
fn test_edge_counts() {
    let mut monoid = monoid(&[11, 12, 14]);
    for metric in Metric::iter() {
        for n in [100, 1000] {
            let tree = monoid.minimal_spanning_tree_by_metric(n, metric);
            assert_eq!(tree.len(), monoid.factorizations(n).len() - 1, "{} under {}", n, metric);
        }
    }
}

#[test]
fn test_every_tree_spans() {
    let mut monoid = monoid(&[11, 12, 14]);
    for metric in Metric::iter() {
        for n in 0..=300 {
            let tree = monoid.minimal_spanning_tree_by_metric(n, metric);
            assert_spanning_tree(monoid.factorizations(n).len(), &tree);
        }
    }
}

#[test]
fn test_below_betti_is_minimum_of_complete_graph() {
    let mut monoid = monoid(&[3, 5, 7]);
    for n in 0..=14 {
        let factorizations = monoid.factorizations(n);
        let complete: Vec<IndexPair> = (0..factorizations.len())
            .flat_map(|i| (i + 1..factorizations.len()).map(move |j| (i, j)))
            .collect();
        let expected = minimum_spanning_forest(&factorizations, &complete, |a, b| {
            Metric::Euclidean.distance(a, b)
        });
        assert_eq!(
            &monoid.minimal_spanning_tree_by_metric(n, Metric::Euclidean)[..],
            &expected[..]
        );
    }
}

#[test]
fn test_inherited_tree() {
    let mut monoid = monoid(&[3, 5, 7]);
    assert_eq!(
        &monoid.factorizations(30)[..],
        &[
            fac([10, 0, 0]),
            fac([6, 1, 1]),
            fac([5, 3, 0]),
            fac([3, 0, 3]),
            fac([2, 2, 2]),
            fac([1, 4, 1]),
            fac([0, 6, 0]),
        ]
    );
    assert_eq!(
        &monoid.minimal_spanning_tree_by_metric(30, Metric::ClassicCatenary)[..],
        &[(1, 2), (3, 4), (4, 5), (5, 6), (0, 1), (1, 3)]
    );
    assert_eq!(
        monoid.minimal_spanning_tree_factorizations(30, Metric::ClassicCatenary)[0],
        (fac([6, 1, 1]), fac([5, 3, 0]))
    );
}

#[test]
fn test_cached_per_metric() {
    let mut monoid = monoid(&[11, 12, 14]);
    let classic = monoid.minimal_spanning_tree_by_metric(200, Metric::ClassicCatenary);
    let again = monoid.minimal_spanning_tree_by_metric(200, Metric::ClassicCatenary);
    assert!(std::sync::Arc::ptr_eq(&classic, &again));
    let euclidean = monoid.minimal_spanning_tree_by_metric(200, Metric::Euclidean);
    assert!(!std::sync::Arc::ptr_eq(&classic, &euclidean));
}

#[test]
fn test_single_generator() {
    let mut monoid = monoid(&[1]);
    for n in [0, 1, 10, 200] {
        assert!(monoid
            .minimal_spanning_tree_by_metric(n, Metric::Euclidean)
            .is_empty());
        assert_eq!(monoid.factorizations(n).len(), 1);
    }
}
