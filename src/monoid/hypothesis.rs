// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The catenary bound hypothesis.
//!
//! Conjecture: past `frobenius() + max(betti_elements())` the catenary
//! degree is periodic with period `lcm(generators)`. The check compares the
//! degree at that bound with the degree one period later.

use crate::factorization::Metric;
use crate::monoid::{NumericalMonoid, Result};
use crate::tuple;
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Catenary degrees at the bound and one period later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundHypothesis {
    pub metric: Metric,
    /// `frobenius() + max(betti_elements())`
    pub bound: i64,
    /// `lcm(generators)`
    pub period: i64,
    pub degree_at_bound: f64,
    pub degree_after_period: f64,
}

impl BoundHypothesis {
    /// True if both degrees agree.
    pub fn holds(&self) -> bool {
        self.degree_at_bound == self.degree_after_period
    }
}

impl fmt::Display for BoundHypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: catenary degree {} at {}, {} at {} (+{}): {}",
            self.metric,
            self.degree_at_bound,
            self.bound,
            self.degree_after_period,
            self.bound + self.period,
            self.period,
            if self.holds() { "holds" } else { "fails" }
        )
    }
}

impl NumericalMonoid {
    /// Compute both sides of the bound hypothesis under `metric`.
    ///
    /// `None` when there are no Betti elements to bound by.
    pub fn catenary_bound_hypothesis(&mut self, metric: Metric) -> Result<Option<BoundHypothesis>> {
        let Some(largest_betti) = self.largest_betti_element() else {
            return Ok(None);
        };
        let bound = self.frobenius() + largest_betti;
        let period = tuple::lcm(&self.generators);
        info!(bound, period, %metric, "checking catenary bound hypothesis");

        let degree_at_bound = self.catenary_degree_by_metric(bound, metric)?;
        info!(element = bound, degree = degree_at_bound, "catenary degree");
        let degree_after_period = self.catenary_degree_by_metric(bound + period, metric)?;
        info!(
            element = bound + period,
            degree = degree_after_period,
            memoized = self.memoized_elements(),
            "catenary degree"
        );

        Ok(Some(BoundHypothesis {
            metric,
            bound,
            period,
            degree_at_bound,
            degree_after_period,
        }))
    }

    /// Check that the catenary degree repeats one period past the bound.
    ///
    /// Vacuously true without Betti elements.
    pub fn satisfies_catenary_bound_hypothesis(&mut self, metric: Metric) -> Result<bool> {
        Ok(self
            .catenary_bound_hypothesis(metric)?
            .map_or(true, |hypothesis| hypothesis.holds()))
    }
}
