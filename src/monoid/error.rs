// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the monoid engine.

use thiserror::Error;

/// Errors reported by [`NumericalMonoid`](crate::NumericalMonoid) construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonoidError {
    /// The generator list was empty.
    #[error("A numerical monoid needs at least one generator")]
    NoGenerators,

    /// A generator was zero or negative.
    #[error("Generator {0} is not positive")]
    NonPositiveGenerator(i64),

    /// A generator was listed twice.
    #[error("Generator {0} is listed more than once")]
    DuplicateGenerator(i64),

    /// The generators share a common factor, so infinitely many integers are
    /// not representable and the Frobenius number does not exist.
    #[error("Generators share the common factor {0}")]
    CommonFactor(i64),

    /// The query needs at least one factorization of the element.
    #[error("{0} is not an element of the monoid")]
    NotAnElement(i64),

    /// Apéry sets are taken with respect to a positive modulus.
    #[error("Apéry set modulus must be positive, got {0}")]
    NonPositiveModulus(i64),
}

/// Result type for monoid operations.
pub type Result<T> = std::result::Result<T, MonoidError>;
