// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catenary degrees and maximal non-reducible edges.
//!
//! The catenary degree of `n` is the smallest threshold `c` such that the
//! graph on `factorizations(n)`, with an edge between every pair at distance
//! at most `c`, is connected.
//!
//! Rather than rebuild the graph for `c = 0, 1, 2, ...`, the pairs are sorted
//! by distance once and added to a [`ConnectivityGraph`] in that order. The
//! distance of the edge that leaves a single component is the answer: every
//! pair below it was already added and did not connect the graph.

use crate::factorization::{Factorization, Metric};
use crate::graph::ConnectivityGraph;
use crate::monoid::{MonoidError, NumericalMonoid, Result};
use crate::tuple;
use tracing::{debug, warn};

/// Two factorizations of the same element.
pub type FactorizationPair = (Factorization, Factorization);

/// A weighted candidate edge `(distance, i, j)` between factorization indices.
type WeightedPair<D> = (D, usize, usize);

impl NumericalMonoid {
    /// The classic catenary degree of `n`.
    ///
    /// Zero when `n` has a single factorization.
    pub fn catenary_degree(&mut self, n: i64) -> Result<u64> {
        if let Some(&degree) = self.catenary_degrees.get(&n) {
            return Ok(degree);
        }
        let factorizations = self.factorizations(n);
        if factorizations.is_empty() {
            return Err(MonoidError::NotAnElement(n));
        }

        let mut pairs = Vec::new();
        for (i, a) in factorizations.iter().enumerate() {
            for (j, b) in factorizations.iter().enumerate().skip(i + 1) {
                pairs.push((
                    tuple::classic_catenary_distance(a.as_slice(), b.as_slice()),
                    i,
                    j,
                ));
            }
        }
        pairs.sort_by_key(|pair| pair.0);

        // The complete graph is always connected
        let degree = connecting_threshold(factorizations.len(), &pairs).unwrap_or(0);
        debug!(element = n, degree, "catenary degree");
        self.catenary_degrees.insert(n, degree);
        Ok(degree)
    }

    /// The catenary degree of `n` under `metric`.
    ///
    /// Thresholds are drawn from the pairwise distances. Unless `n` is itself
    /// a Betti element, only distances up to the largest catenary degree of a
    /// Betti element are tried; if those leave the graph disconnected the
    /// search falls back to every pairwise distance.
    pub fn catenary_degree_by_metric(&mut self, n: i64, metric: Metric) -> Result<f64> {
        if let Some(&degree) = self.catenary_degrees_by_metric.get(&(metric, n)) {
            return Ok(degree);
        }
        let factorizations = self.factorizations(n);
        if factorizations.is_empty() {
            return Err(MonoidError::NotAnElement(n));
        }

        let betti = self.betti_elements();
        let bound = if betti.contains(&n) {
            None
        } else {
            let mut bound: Option<f64> = None;
            for b in betti {
                let degree = self.catenary_degree_by_metric(b, metric)?;
                bound = Some(bound.map_or(degree, |known| known.max(degree)));
            }
            bound
        };

        let pairs = metric_pairs(&factorizations, metric, bound);
        let degree = match connecting_threshold(factorizations.len(), &pairs) {
            Some(degree) => degree,
            None => {
                warn!(
                    element = n,
                    %metric,
                    bound = ?bound,
                    "Betti bound does not connect the factorizations, trying every distance"
                );
                let pairs = metric_pairs(&factorizations, metric, None);
                connecting_threshold(factorizations.len(), &pairs).unwrap_or(0.0)
            }
        };
        debug!(element = n, %metric, degree, "catenary degree by metric");
        self.catenary_degrees_by_metric.insert((metric, n), degree);
        Ok(degree)
    }

    /// The catenary degree of `n` under the Euclidean metric.
    pub fn catenary_degree_euclidean(&mut self, n: i64) -> Result<f64> {
        self.catenary_degree_by_metric(n, Metric::Euclidean)
    }

    /// Pairs at exactly the classic catenary degree of `n` whose endpoints
    /// are not already joined by a chain of strictly shorter steps.
    pub fn max_non_reducible_edges(&mut self, n: i64) -> Result<Vec<FactorizationPair>> {
        let degree = self.catenary_degree(n)? as f64;
        let factorizations = self.factorizations(n);
        Ok(irreducible_maximal_edges(
            &factorizations,
            Metric::ClassicCatenary,
            degree,
        ))
    }

    /// As [`max_non_reducible_edges`](Self::max_non_reducible_edges), with
    /// distances and the degree taken under `metric`.
    pub fn max_non_reducible_edges_by_metric(
        &mut self,
        n: i64,
        metric: Metric,
    ) -> Result<Vec<FactorizationPair>> {
        let degree = self.catenary_degree_by_metric(n, metric)?;
        let factorizations = self.factorizations(n);
        Ok(irreducible_maximal_edges(&factorizations, metric, degree))
    }

    /// Maximal non-reducible edges under the Euclidean metric.
    pub fn max_non_reducible_edges_euclidean(&mut self, n: i64) -> Result<Vec<FactorizationPair>> {
        self.max_non_reducible_edges_by_metric(n, Metric::Euclidean)
    }
}

/// Distance of the edge that first connects `nodes` nodes, adding `pairs`
/// in order. `pairs` must be sorted by ascending distance.
///
/// `None` if the pairs never connect the graph.
fn connecting_threshold<D: Copy + Default>(nodes: usize, pairs: &[WeightedPair<D>]) -> Option<D> {
    if nodes <= 1 {
        return Some(D::default());
    }
    let mut graph = ConnectivityGraph::new(nodes);
    for &(distance, i, j) in pairs {
        graph.add_edge(i, j);
        if graph.is_connected() {
            return Some(distance);
        }
    }
    None
}

/// Unordered pairs `i < j` with their distance, ascending. With a bound,
/// only pairs at most that far apart.
fn metric_pairs(
    factorizations: &[Factorization],
    metric: Metric,
    bound: Option<f64>,
) -> Vec<WeightedPair<f64>> {
    let mut pairs = Vec::new();
    for (i, a) in factorizations.iter().enumerate() {
        for (j, b) in factorizations.iter().enumerate().skip(i + 1) {
            let distance = metric.distance(a, b);
            if bound.map_or(true, |bound| distance <= bound) {
                pairs.push((distance, i, j));
            }
        }
    }
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    pairs
}

/// Pairs at distance exactly `degree` that the strictly shorter pairs do
/// not already join, in factorization order, each unordered pair once.
fn irreducible_maximal_edges(
    factorizations: &[Factorization],
    metric: Metric,
    degree: f64,
) -> Vec<FactorizationPair> {
    let mut below = ConnectivityGraph::new(factorizations.len());
    let mut maximal = Vec::new();
    for (i, a) in factorizations.iter().enumerate() {
        for (j, b) in factorizations.iter().enumerate().skip(i + 1) {
            let distance = metric.distance(a, b);
            if distance < degree {
                below.add_edge(i, j);
            } else if distance == degree {
                maximal.push((i, j));
            }
        }
    }

    maximal
        .into_iter()
        .filter(|&(i, j)| !below.path_exists(i, j))
        .map(|(i, j)| (factorizations[i].clone(), factorizations[j].clone()))
        .collect()
}
