// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arithmetic over fixed-length integer tuples.
//!
//! Factorizations are tuples of non-negative coordinates, one per generator.
//! Every binary function here requires both tuples to have the same length and
//! panics with a descriptive message otherwise: a length mismatch means two
//! factorizations from different monoids were mixed, which is a bug.
//!
//! # Example
//!
//! ```
//! use numerical_monoid::tuple;
//!
//! let a = [3, 0, 1];
//! let b = [0, 2, 0];
//! assert_eq!(tuple::gcd(&a, &b), vec![0, 0, 0]);
//! assert_eq!(tuple::classic_catenary_distance(&a, &b), 4);
//! assert_eq!(tuple::increment_at(&b, 0), vec![1, 2, 0]);
//! ```

use std::ops::Range;

#[inline]
fn check_lengths(a: &[u32], b: &[u32]) {
    assert_eq!(
        a.len(),
        b.len(),
        "Tuple length mismatch: {} vs {}",
        a.len(),
        b.len()
    );
}

/// Element-wise minimum (the "greatest common divisor" of two factorizations).
pub fn gcd(a: &[u32], b: &[u32]) -> Vec<u32> {
    check_lengths(a, b);
    a.iter().zip(b).map(|(&x, &y)| x.min(y)).collect()
}

/// Element-wise difference `a - b`.
///
/// Coordinates may be negative in general. After `gcd` the result is always
/// non-negative, which is the only way the catenary distance uses it.
pub fn subtract(a: &[u32], b: &[u32]) -> Vec<i64> {
    check_lengths(a, b);
    a.iter()
        .zip(b)
        .map(|(&x, &y)| i64::from(x) - i64::from(y))
        .collect()
}

/// Total of all coordinates.
pub fn sum<T: Copy + Into<i64>>(tuple: &[T]) -> i64 {
    tuple.iter().map(|&x| x.into()).sum()
}

/// Product of all values; 1 for an empty slice.
pub fn product(values: &[i64]) -> i64 {
    values.iter().product()
}

/// Least common multiple of all values; 1 for an empty slice.
pub fn lcm(values: &[i64]) -> i64 {
    values.iter().fold(1, |acc, &x| {
        if x == 0 {
            0
        } else {
            let x = x.abs();
            acc / integer_gcd(acc, x) * x
        }
    })
}

/// Greatest common divisor of two integers (always non-negative).
pub fn integer_gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Euclidean distance between two tuples viewed as lattice points.
pub fn euclidean_distance(a: &[u32], b: &[u32]) -> f64 {
    check_lengths(a, b);
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = f64::from(x) - f64::from(y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// The classic catenary distance: `max(|a - gcd(a,b)|, |b - gcd(a,b)|)`.
///
/// This is the number of generators that must be exchanged to turn one
/// factorization into the other.
pub fn classic_catenary_distance(a: &[u32], b: &[u32]) -> u64 {
    let common = gcd(a, b);
    let left = sum(&subtract(a, &common));
    let right = sum(&subtract(b, &common));
    // Both sides are non-negative after removing the common part.
    left.max(right) as u64
}

/// Copy of `tuple` with coordinate `index` incremented by one.
///
/// # Panics
///
/// Panics if `index >= tuple.len()`.
pub fn increment_at(tuple: &[u32], index: usize) -> Vec<u32> {
    assert!(
        index < tuple.len(),
        "Coordinate {} out of range for tuple of length {}",
        index,
        tuple.len()
    );
    let mut result = tuple.to_vec();
    result[index] += 1;
    result
}

/// The integers `0, 1, ..., n-1`.
///
/// `Range` is lazy and `Clone`, so the sequence can be restarted.
pub fn range(n: usize) -> Range<usize> {
    0..n
}
