// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal spanning trees of factorization graphs.
//!
//! Up to the largest Betti element the candidate edges are every pair of
//! factorizations. Beyond it, each generator `g_i` contributes the tree of
//! `n - g_i` with every factorization shifted by `e_i`; those shifted edges,
//! not the complete graph, are handed to Kruskal.
//!
//! The inherited regime would recurse once per generator step down to the
//! largest Betti element, so trees are built from an explicit work stack
//! in dependency order, as factorizations are.

use crate::factorization::{Factorization, Metric};
use crate::graph::{minimum_spanning_forest, IndexPair};
use crate::monoid::{FactorizationPair, NumericalMonoid};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, trace};

impl NumericalMonoid {
    /// A minimum spanning tree of `factorizations(n)` under `metric`, as
    /// index pairs into `factorizations(n)`.
    ///
    /// Has `|factorizations(n)| - 1` edges; empty when `n` is not an element.
    pub fn minimal_spanning_tree_by_metric(&mut self, n: i64, metric: Metric) -> Arc<[IndexPair]> {
        if let Some(tree) = self.spanning_trees.get(&(metric, n)) {
            return tree.clone();
        }
        let largest_betti = self.largest_betti_element();
        debug!(element = n, %metric, largest_betti = ?largest_betti, "building spanning tree");

        let mut pending = vec![n];
        while let Some(&m) = pending.last() {
            if self.spanning_trees.contains_key(&(metric, m)) {
                pending.pop();
                continue;
            }
            let inherits = self.has_element(m) && largest_betti.map_or(true, |b| m > b);
            if inherits {
                let waiting = pending.len();
                for &g in &self.generators {
                    if !self.spanning_trees.contains_key(&(metric, m - g)) {
                        pending.push(m - g);
                    }
                }
                if pending.len() > waiting {
                    continue;
                }
            }
            pending.pop();
            let tree = self.spanning_tree_of(m, metric, inherits);
            self.spanning_trees.insert((metric, m), tree);
        }

        match self.spanning_trees.get(&(metric, n)) {
            Some(tree) => tree.clone(),
            None => Arc::from(Vec::<IndexPair>::new()),
        }
    }

    /// The spanning tree of `n` as pairs of factorizations.
    pub fn minimal_spanning_tree_factorizations(
        &mut self,
        n: i64,
        metric: Metric,
    ) -> Vec<FactorizationPair> {
        let tree = self.minimal_spanning_tree_by_metric(n, metric);
        let factorizations = self.factorizations(n);
        tree.iter()
            .map(|&(i, j)| (factorizations[i].clone(), factorizations[j].clone()))
            .collect()
    }

    /// Kruskal over the candidate edges of `m`. When `inherits`, every
    /// predecessor tree must already be stored.
    fn spanning_tree_of(&mut self, m: i64, metric: Metric, inherits: bool) -> Arc<[IndexPair]> {
        let factorizations = self.factorizations(m);
        let edges = if inherits {
            self.inherited_edges(m, metric, &factorizations)
        } else {
            complete_edges(factorizations.len())
        };
        trace!(element = m, inherits, candidates = edges.len(), "spanning tree candidates");
        let tree = minimum_spanning_forest(&factorizations, &edges, |a, b| metric.distance(a, b));
        Arc::from(tree)
    }

    /// Predecessor tree edges shifted into `factorizations(m)` index space.
    fn inherited_edges(
        &mut self,
        m: i64,
        metric: Metric,
        factorizations: &[Factorization],
    ) -> Vec<IndexPair> {
        let index: FxHashMap<&Factorization, usize> = factorizations
            .iter()
            .enumerate()
            .map(|(i, factorization)| (factorization, i))
            .collect();

        let mut edges = Vec::new();
        for (i, g) in self.generators.clone().into_iter().enumerate() {
            let predecessor = m - g;
            let shifted = self.factorizations(predecessor);
            let Some(tree) = self.spanning_trees.get(&(metric, predecessor)) else {
                continue;
            };
            for &(a, b) in tree.iter() {
                let from = index.get(&shifted[a].increment_at(i));
                let to = index.get(&shifted[b].increment_at(i));
                if let (Some(&from), Some(&to)) = (from, to) {
                    edges.push((from, to));
                }
            }
        }
        edges
    }
}

/// Every unordered pair `i < j` of `0..count`.
fn complete_edges(count: usize) -> Vec<IndexPair> {
    (0..count)
        .flat_map(|i| (i + 1..count).map(move |j| (i, j)))
        .collect()
}
