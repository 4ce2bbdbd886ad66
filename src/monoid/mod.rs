// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The numerical monoid engine.
//!
//! A [`NumericalMonoid`] owns its (sorted, immutable) generators and a set of
//! memo tables, one per query:
//!
//! | Table | Key | Value |
//! |---|---|---|
//! | factorizations | element | every factorization, in a fixed order |
//! | Betti elements | (once) | sorted Betti elements |
//! | catenary degrees | element | classic catenary degree |
//! | catenary degrees by metric | (metric, element) | threshold |
//! | spanning trees | (metric, element) | index pairs into factorizations |
//!
//! Entries are written once and never invalidated: the generators cannot
//! change after construction. Every query consults its table first.
//!
//! # Factorization recurrence
//!
//! ```text
//! factorizations(n) = {}                     if n < 0
//!                   = {(0, ..., 0)}          if n = 0
//!                   = ∪_i { f + e_i : f ∈ factorizations(n - g_i) }
//! ```
//!
//! The union is evaluated with an explicit work stack in dependency order
//! (`n` is combined only once every `n - g_i` is memoized), so large elements
//! never exhaust the call stack.
//!
//! # Example
//!
//! ```
//! use numerical_monoid::{Factorization, NumericalMonoid};
//!
//! let mut monoid = NumericalMonoid::new(&[35, 11, 34]).unwrap();
//! assert_eq!(monoid.generators(), &[11, 34, 35]);
//!
//! let facs = monoid.factorizations(68);
//! assert_eq!(&facs[..], &[Factorization::from([3, 0, 1]), Factorization::from([0, 2, 0])]);
//! assert!(!monoid.has_element(12));
//! assert_eq!(monoid.frobenius(), 164);
//! ```

pub mod betti;
pub mod builder;
pub mod catenary;
pub mod error;
pub mod hypothesis;
pub mod spanning;

pub use builder::MonoidBuilder;
pub use catenary::FactorizationPair;
pub use error::{MonoidError, Result};
pub use hypothesis::BoundHypothesis;

use crate::factorization::{Factorization, FactorizationSet, Metric};
use crate::graph::IndexPair;
use crate::tuple;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Callback fired once for every element whose factorizations are newly computed.
pub type ProgressHook = Box<dyn FnMut(i64) + Send>;

/// A numerical monoid with memoized invariants.
pub struct NumericalMonoid {
    /// Generators, ascending
    generators: Vec<i64>,

    /// Factorizations of every positive element computed so far
    factorizations: FxHashMap<i64, Arc<[Factorization]>>,

    /// `factorizations(0)`
    zero: Arc<[Factorization]>,

    /// `factorizations(n)` for `n < 0`
    empty: Arc<[Factorization]>,

    frobenius: Option<i64>,

    /// Sorted Betti elements, once computed
    betti_elements: Option<Vec<i64>>,

    catenary_degrees: FxHashMap<i64, u64>,

    catenary_degrees_by_metric: FxHashMap<(Metric, i64), f64>,

    /// Minimal spanning trees as index pairs into `factorizations(n)`
    spanning_trees: FxHashMap<(Metric, i64), Arc<[IndexPair]>>,

    on_new_element: Option<ProgressHook>,
}

impl NumericalMonoid {
    /// Create the monoid generated by `generators` (in any order).
    ///
    /// Generators must be positive, distinct, and have greatest common
    /// divisor 1.
    pub fn new(generators: &[i64]) -> Result<Self> {
        Self::with_hook(generators, None)
    }

    /// Start building a monoid with optional instrumentation.
    pub fn builder() -> MonoidBuilder {
        MonoidBuilder::new()
    }

    pub(crate) fn with_hook(generators: &[i64], on_new_element: Option<ProgressHook>) -> Result<Self> {
        let generators = validate_generators(generators)?;
        let dimension = generators.len();
        Ok(Self {
            generators,
            factorizations: FxHashMap::default(),
            zero: Arc::from(vec![Factorization::zero(dimension)]),
            empty: Arc::from(Vec::<Factorization>::new()),
            frobenius: None,
            betti_elements: None,
            catenary_degrees: FxHashMap::default(),
            catenary_degrees_by_metric: FxHashMap::default(),
            spanning_trees: FxHashMap::default(),
            on_new_element,
        })
    }

    /// The generators, in ascending order.
    pub fn generators(&self) -> &[i64] {
        &self.generators
    }

    /// Number of generators.
    pub fn dimension(&self) -> usize {
        self.generators.len()
    }

    /// Smallest generator (the multiplicity).
    pub fn multiplicity(&self) -> i64 {
        self.generators[0]
    }

    /// Number of positive elements whose factorizations are memoized.
    pub fn memoized_elements(&self) -> usize {
        self.factorizations.len()
    }

    /// Every factorization of `n`, in a fixed order.
    ///
    /// Empty for integers outside the monoid (including every `n < 0`).
    /// Indices into this sequence are stable for the life of the monoid and
    /// are what spanning trees refer to.
    pub fn factorizations(&mut self, n: i64) -> Arc<[Factorization]> {
        if let Some(known) = self.memoized(n) {
            return known;
        }

        let mut pending = vec![n];
        while let Some(&m) = pending.last() {
            if self.factorizations.contains_key(&m) {
                pending.pop();
                continue;
            }
            let waiting = pending.len();
            for &g in &self.generators {
                let predecessor = m - g;
                if predecessor > 0 && !self.factorizations.contains_key(&predecessor) {
                    pending.push(predecessor);
                }
            }
            if pending.len() == waiting {
                pending.pop();
                let combined = self.combine_predecessors(m);
                self.factorizations.insert(m, combined);
            }
        }

        match self.memoized(n) {
            Some(computed) => computed,
            None => self.empty.clone(),
        }
    }

    /// Check whether `n` is an element (has at least one factorization).
    pub fn has_element(&mut self, n: i64) -> bool {
        !self.factorizations(n).is_empty()
    }

    /// The largest integer that is not an element; -1 when every
    /// non-negative integer is.
    ///
    /// Scans `n = 0, 1, 2, ...` for the first run of `multiplicity`
    /// consecutive elements `n, ..., n + multiplicity - 1`. Adding the
    /// smallest generator then reaches every larger integer, so `n - 1` is
    /// the answer. Terminates because the generators are coprime.
    pub fn frobenius(&mut self) -> i64 {
        if let Some(frobenius) = self.frobenius {
            return frobenius;
        }
        let run = tuple::range(self.multiplicity() as usize);
        let mut n = 0;
        while !run.clone().all(|offset| self.has_element(n + offset as i64)) {
            n += 1;
        }
        self.frobenius = Some(n - 1);
        n - 1
    }

    /// The Apéry set with respect to `modulus`: for each residue `r` in
    /// `0..modulus`, the smallest element congruent to `r`.
    pub fn apery_set(&mut self, modulus: i64) -> Result<Vec<i64>> {
        if modulus <= 0 {
            return Err(MonoidError::NonPositiveModulus(modulus));
        }
        Ok(self.apery_residues(modulus))
    }

    pub(crate) fn apery_residues(&mut self, modulus: i64) -> Vec<i64> {
        tuple::range(modulus as usize)
            .map(|residue| {
                let mut element = residue as i64;
                while !self.has_element(element) {
                    element += modulus;
                }
                element
            })
            .collect()
    }

    /// Cached or base-case factorizations, without computing anything.
    fn memoized(&self, n: i64) -> Option<Arc<[Factorization]>> {
        match n {
            n if n < 0 => Some(self.empty.clone()),
            0 => Some(self.zero.clone()),
            n => self.factorizations.get(&n).cloned(),
        }
    }

    /// Union over generators of `factorizations(m - g_i)` shifted by `e_i`.
    ///
    /// Every predecessor must already be memoized.
    fn combine_predecessors(&mut self, m: i64) -> Arc<[Factorization]> {
        if let Some(hook) = self.on_new_element.as_mut() {
            hook(m);
        }

        let mut set = FactorizationSet::new();
        for (i, &g) in self.generators.iter().enumerate() {
            if let Some(predecessors) = self.memoized(m - g) {
                for factorization in predecessors.iter() {
                    set.add(&factorization.increment_at(i));
                }
            }
        }
        trace!(element = m, count = set.len(), "memoized factorizations");
        Arc::from(set.to_sequence())
    }
}

impl fmt::Debug for NumericalMonoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericalMonoid")
            .field("generators", &self.generators)
            .field("memoized_elements", &self.factorizations.len())
            .field("betti_elements", &self.betti_elements)
            .field("has_hook", &self.on_new_element.is_some())
            .finish()
    }
}

/// Sort and check a generator list.
fn validate_generators(generators: &[i64]) -> Result<Vec<i64>> {
    if generators.is_empty() {
        return Err(MonoidError::NoGenerators);
    }
    if let Some(&g) = generators.iter().find(|&&g| g <= 0) {
        return Err(MonoidError::NonPositiveGenerator(g));
    }
    let mut sorted = generators.to_vec();
    sorted.sort_unstable();
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(MonoidError::DuplicateGenerator(pair[0]));
    }
    let common = sorted.iter().fold(0, |acc, &g| tuple::integer_gcd(acc, g));
    if common != 1 {
        return Err(MonoidError::CommonFactor(common));
    }
    Ok(sorted)
}
