// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural invariants of numerical monoids.
//!
//! A numerical monoid is the set of non-negative integer combinations of a
//! finite list of coprime positive generators. This crate computes, for a
//! fixed generator list:
//!
//! - every factorization of an element (the ways to write it as a sum of
//!   generators)
//! - the Frobenius number and Apéry sets
//! - the Betti elements
//! - catenary degrees, classic or under a chosen [`Metric`], and the
//!   maximal factorization pairs that realize them
//! - minimal spanning trees of the factorization graph
//!
//! # Architecture
//!
//! [`NumericalMonoid`] is the only stateful type. Every query memoizes its
//! result on the instance, so repeated and overlapping queries are cheap,
//! and the deep recurrences (factorizations, inherited spanning trees) run
//! from explicit work stacks rather than recursion.
//!
//! The supporting modules are plain data and algorithms:
//! - [`tuple`]: arithmetic on coordinate tuples
//! - [`factorization`]: the [`Factorization`] type, its keyed hash set, and metrics
//! - [`graph`]: union-find, Kruskal, incremental connectivity, boolean reachability
//!
//! # Example
//!
//! ```
//! use numerical_monoid::{Metric, NumericalMonoid};
//!
//! let mut monoid = NumericalMonoid::new(&[3, 5, 7]).unwrap();
//! assert_eq!(monoid.frobenius(), 4);
//! assert_eq!(monoid.betti_elements(), vec![10, 12, 14]);
//! assert_eq!(monoid.catenary_degree(15).unwrap(), 4);
//!
//! let tree = monoid.minimal_spanning_tree_by_metric(30, Metric::ClassicCatenary);
//! assert_eq!(tree.len(), monoid.factorizations(30).len() - 1);
//! ```

pub mod factorization;
pub mod graph;
pub mod monoid;
pub mod tuple;

// Re-export commonly used types
pub use factorization::{Factorization, FactorizationSet, Metric};
pub use graph::IndexPair;
pub use monoid::{
    BoundHypothesis, FactorizationPair, MonoidBuilder, MonoidError, NumericalMonoid, Result,
};
