// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Builder for [`NumericalMonoid`].
//!
//! # Example
//!
//! ```
//! use numerical_monoid::MonoidBuilder;
//!
//! let mut monoid = MonoidBuilder::new()
//!     .generator(12)
//!     .generators([11, 14])
//!     .on_new_element(|n| tracing::trace!(element = n, "factoring"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(monoid.generators(), &[11, 12, 14]);
//! assert_eq!(monoid.factorizations(100).len(), 4);
//! ```

use crate::monoid::{NumericalMonoid, ProgressHook, Result};
use std::fmt;

/// Collects generators and options, then validates them in [`build`](Self::build).
#[derive(Default)]
pub struct MonoidBuilder {
    generators: Vec<i64>,
    on_new_element: Option<ProgressHook>,
}

impl MonoidBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one generator.
    pub fn generator(mut self, generator: i64) -> Self {
        self.generators.push(generator);
        self
    }

    /// Add several generators.
    pub fn generators(mut self, generators: impl IntoIterator<Item = i64>) -> Self {
        self.generators.extend(generators);
        self
    }

    /// Call `hook(n)` each time the factorizations of a new element `n` are
    /// computed. Purely observational.
    pub fn on_new_element<F>(mut self, hook: F) -> Self
    where
        F: FnMut(i64) + Send + 'static,
    {
        self.on_new_element = Some(Box::new(hook));
        self
    }

    /// Validate the generators and create the monoid.
    pub fn build(self) -> Result<NumericalMonoid> {
        NumericalMonoid::with_hook(&self.generators, self.on_new_element)
    }
}

impl fmt::Debug for MonoidBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonoidBuilder")
            .field("generators", &self.generators)
            .field("has_hook", &self.on_new_element.is_some())
            .finish()
    }
}
