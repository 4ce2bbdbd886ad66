// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Distances between factorizations.
//!
//! Catenary degrees and spanning trees are parameterized by a metric. The
//! metrics form a closed set, so each one is an enum variant and caches are
//! keyed by `(Metric, element)`.

use crate::factorization::Factorization;
use crate::tuple;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// A distance between two factorizations of the same element.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCountMacro,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// `max(|a - gcd(a,b)|, |b - gcd(a,b)|)`: generators exchanged per step.
    ClassicCatenary,
    /// Straight-line distance between the factorizations as lattice points.
    Euclidean,
}

impl Metric {
    /// Distance between two factorizations under this metric.
    pub fn distance(self, a: &Factorization, b: &Factorization) -> f64 {
        match self {
            Metric::ClassicCatenary => {
                tuple::classic_catenary_distance(a.as_slice(), b.as_slice()) as f64
            }
            Metric::Euclidean => tuple::euclidean_distance(a.as_slice(), b.as_slice()),
        }
    }
}
