// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Betti elements.
//!
//! The factorizations of `n` split into classes by which generators they
//! use. Call a generator `g` an *ancestor* of `n` when `n - g` is an element,
//! and join two ancestors `g_i`, `g_j` when `n - g_i - g_j` is an element (some
//! factorization uses both). `n` is a Betti element exactly when this ancestor
//! graph is disconnected: its factorizations cannot be linked one generator
//! exchange at a time through smaller elements.
//!
//! Every Betti element has the form `w + g` for an Apéry element `w` (with
//! respect to the multiplicity) and a generator `g`, so only those
//! candidates are tested.

use crate::graph::AdjacencyMatrix;
use crate::monoid::NumericalMonoid;
use rustc_hash::FxHashSet;
use tracing::debug;

impl NumericalMonoid {
    /// Check if `n` is a Betti element.
    pub fn is_betti(&mut self, n: i64) -> bool {
        !self.is_not_betti(n)
    }

    /// Check if the ancestor graph of `n` is connected (so `n` is not Betti).
    ///
    /// With at most one ancestor the graph is trivially connected.
    pub fn is_not_betti(&mut self, n: i64) -> bool {
        let ancestors = self.ancestors(n);
        if ancestors.len() <= 1 {
            return true;
        }
        self.ancestor_graph(n, &ancestors).is_fully_connected()
    }

    /// Apéry element plus generator, for every pair, without repeats.
    ///
    /// A superset of the Betti elements.
    pub fn betti_element_candidates(&mut self) -> Vec<i64> {
        let apery = self.apery_residues(self.multiplicity());
        let mut seen = FxHashSet::default();
        let mut candidates = Vec::with_capacity(apery.len() * self.dimension());
        for &g in &self.generators {
            for &w in &apery {
                if seen.insert(w + g) {
                    candidates.push(w + g);
                }
            }
        }
        candidates
    }

    /// All Betti elements, ascending.
    ///
    /// Empty for a single generator: there are no relations.
    pub fn betti_elements(&mut self) -> Vec<i64> {
        if let Some(known) = &self.betti_elements {
            return known.clone();
        }
        let mut result = Vec::new();
        if self.dimension() > 1 {
            let candidates = self.betti_element_candidates();
            debug!(count = candidates.len(), "testing Betti candidates");
            for candidate in candidates {
                if self.is_betti(candidate) {
                    result.push(candidate);
                }
            }
            result.sort_unstable();
        }
        debug!(generators = ?self.generators, betti = ?result, "Betti elements");
        self.betti_elements = Some(result.clone());
        result
    }

    /// Largest Betti element, if any.
    pub fn largest_betti_element(&mut self) -> Option<i64> {
        self.betti_elements().last().copied()
    }

    /// Generators `g` with `n - g` an element.
    fn ancestors(&mut self, n: i64) -> Vec<i64> {
        let generators = self.generators.clone();
        generators
            .into_iter()
            .filter(|&g| self.has_element(n - g))
            .collect()
    }

    /// Adjacency of ancestors: `(i, j)` set when `n - a_i - a_j` is an element.
    fn ancestor_graph(&mut self, n: i64, ancestors: &[i64]) -> AdjacencyMatrix {
        let mut adjacency = AdjacencyMatrix::new(ancestors.len());
        for i in 0..ancestors.len() {
            for j in i..ancestors.len() {
                if self.has_element(n - ancestors[i] - ancestors[j]) {
                    adjacency.connect(i, j);
                }
            }
        }
        adjacency
    }
}
