// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Factorizations of monoid elements.
//!
//! A factorization `(a_1, ..., a_d)` of `n` over generators `(g_1, ..., g_d)`
//! expresses `n = a_1*g_1 + ... + a_d*g_d`. Two factorizations are the same
//! when their coordinates are equal.
//!
//! This module contains:
//! - Factorization: the coordinate tuple newtype
//! - TupleHashSet: deduplicating set keyed by a reversible encoding
//! - Metric: the distances used for catenary degrees and spanning trees

pub mod hash_set;
pub mod metric;

pub use hash_set::{DelimitedKey, FactorizationSet, ReversibleHash, TupleHashSet};
pub use metric::Metric;

use crate::tuple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A factorization: one non-negative coefficient per generator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Factorization(Vec<u32>);

impl Factorization {
    /// The all-zero factorization of `0` over `dimension` generators.
    pub fn zero(dimension: usize) -> Self {
        Self(vec![0; dimension])
    }

    /// Number of coordinates (the number of generators).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The coefficients as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Coefficient of generator `index`.
    pub fn get(&self, index: usize) -> u32 {
        self.0[index]
    }

    /// A new factorization with one more copy of generator `index`.
    pub fn increment_at(&self, index: usize) -> Self {
        Self(tuple::increment_at(&self.0, index))
    }

    /// Total number of generators used (the length of the factorization).
    pub fn size(&self) -> u64 {
        tuple::sum(&self.0) as u64
    }

    /// The element this factorization represents over `generators`.
    pub fn evaluate(&self, generators: &[i64]) -> i64 {
        assert_eq!(
            self.0.len(),
            generators.len(),
            "Factorization has {} coordinates but there are {} generators",
            self.0.len(),
            generators.len()
        );
        self.0
            .iter()
            .zip(generators)
            .map(|(&a, &g)| i64::from(a) * g)
            .sum()
    }

    /// The common part `gcd(self, other)` of two factorizations.
    pub fn gcd(&self, other: &Factorization) -> Factorization {
        Self(tuple::gcd(&self.0, &other.0))
    }
}

impl From<Vec<u32>> for Factorization {
    fn from(coordinates: Vec<u32>) -> Self {
        Self(coordinates)
    }
}

impl From<&[u32]> for Factorization {
    fn from(coordinates: &[u32]) -> Self {
        Self(coordinates.to_vec())
    }
}

impl<const N: usize> From<[u32; N]> for Factorization {
    fn from(coordinates: [u32; N]) -> Self {
        Self(coordinates.to_vec())
    }
}

impl fmt::Display for Factorization {
    /// Format as "(3, 0, 1)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", a)?;
        }
        write!(f, ")")
    }
}
