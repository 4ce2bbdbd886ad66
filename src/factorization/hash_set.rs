// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deduplicating set of integer tuples.
//!
//! Values are stored by a canonical, reversible key (for factorizations, the
//! delimited string `"3,0,1"`). Structural equality of two tuples becomes key
//! equality, so membership is a single hash lookup, and the stored keys can be
//! turned back into values when the set is read out.
//!
//! Iteration follows insertion order, which makes the order of
//! `factorizations(n)` (and therefore spanning-tree indices) deterministic.
//!
//! # Example
//!
//! ```
//! use numerical_monoid::factorization::{Factorization, FactorizationSet};
//!
//! let mut set = FactorizationSet::new();
//! assert!(set.add(&Factorization::from([1, 1, 1])));
//! assert!(set.add(&Factorization::from([5, 0, 0])));
//! assert!(!set.add(&Factorization::from([1, 1, 1])));
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.has(&Factorization::from([5, 0, 0])));
//! assert_eq!(set.to_sequence()[0], Factorization::from([1, 1, 1]));
//! ```

use crate::factorization::Factorization;
use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A value-to-key mapping that can be undone.
///
/// `reverse(&hash_value(v)) == v` must hold for every value.
pub trait ReversibleHash<T> {
    /// The canonical key type.
    type Key: Eq + Hash + Clone + fmt::Debug;

    /// Encode a value as its canonical key.
    fn hash_value(value: &T) -> Self::Key;

    /// Decode a key produced by `hash_value`.
    fn reverse(key: &Self::Key) -> T;
}

/// Comma-delimited decimal encoding of a factorization: `(3, 0, 1)` ↔ `"3,0,1"`.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedKey;

impl ReversibleHash<Factorization> for DelimitedKey {
    type Key = String;

    fn hash_value(value: &Factorization) -> String {
        let mut key = String::with_capacity(value.len() * 3);
        for (i, a) in value.as_slice().iter().enumerate() {
            if i > 0 {
                key.push(',');
            }
            key.push_str(&a.to_string());
        }
        key
    }

    fn reverse(key: &String) -> Factorization {
        if key.is_empty() {
            return Factorization::zero(0);
        }
        // Keys only ever come from hash_value, so every part is a run of digits.
        key.split(',')
            .map(|part| {
                part.bytes()
                    .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'))
            })
            .collect::<Vec<_>>()
            .into()
    }
}

/// Insertion-ordered set of tuples keyed by a reversible hash.
#[derive(Debug, Clone)]
pub struct TupleHashSet<T, H: ReversibleHash<T>> {
    /// Keys in insertion order
    keys: Vec<H::Key>,
    /// Membership index over `keys`
    index: FxHashSet<H::Key>,
    _values: PhantomData<fn() -> T>,
}

/// The set used to deduplicate factorizations.
pub type FactorizationSet = TupleHashSet<Factorization, DelimitedKey>;

impl<T, H: ReversibleHash<T>> TupleHashSet<T, H> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            index: FxHashSet::default(),
            _values: PhantomData,
        }
    }

    /// Add a value. Returns true if it was not already present.
    pub fn add(&mut self, value: &T) -> bool {
        let key = H::hash_value(value);
        if self.index.contains(&key) {
            return false;
        }
        self.index.insert(key.clone());
        self.keys.push(key);
        true
    }

    /// Check whether a structurally equal value was added.
    pub fn has(&self, value: &T) -> bool {
        self.index.contains(&H::hash_value(value))
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The stored keys, in insertion order.
    pub fn keys(&self) -> &[H::Key] {
        &self.keys
    }

    /// Decode the values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.keys.iter().map(H::reverse)
    }

    /// All values, in insertion order.
    pub fn to_sequence(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T, H: ReversibleHash<T>> Default for TupleHashSet<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H: ReversibleHash<T>> Extend<T> for TupleHashSet<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.add(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = FactorizationSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.to_sequence().is_empty());
    }

    #[test]
    fn test_key_format() {
        let key = DelimitedKey::hash_value(&Factorization::from([16, 1, 0]));
        assert_eq!(key, "16,1,0");
        assert_eq!(DelimitedKey::reverse(&key), Factorization::from([16, 1, 0]));
    }

    #[test]
    fn test_empty_tuple_round_trip() {
        let key = DelimitedKey::hash_value(&Factorization::zero(0));
        assert_eq!(key, "");
        assert!(DelimitedKey::reverse(&key).is_empty());
    }

    #[test]
    fn test_structural_deduplication() {
        let mut set = FactorizationSet::new();
        let a = Factorization::from(vec![2, 2, 2]);
        let b = Factorization::from([2, 2, 2]);
        assert!(set.add(&a));
        assert!(!set.add(&b));
        assert_eq!(set.len(), 1);
        assert!(set.has(&Factorization::from([2, 2, 2])));
        assert!(!set.has(&Factorization::from([2, 2, 1])));
    }

    #[test]
    fn test_insertion_order() {
        let mut set = FactorizationSet::new();
        set.extend([
            Factorization::from([0, 3, 0]),
            Factorization::from([5, 0, 0]),
            Factorization::from([0, 3, 0]),
            Factorization::from([1, 1, 1]),
        ]);
        assert_eq!(
            set.to_sequence(),
            vec![
                Factorization::from([0, 3, 0]),
                Factorization::from([5, 0, 0]),
                Factorization::from([1, 1, 1]),
            ]
        );
        assert_eq!(set.keys(), &["0,3,0", "5,0,0", "1,1,1"]);
    }

    #[test]
    fn test_no_collision_between_digit_runs() {
        // "1,11" and "11,1" must stay distinct
        let mut set = FactorizationSet::new();
        set.add(&Factorization::from([1, 11]));
        set.add(&Factorization::from([11, 1]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let len = rng.usize(1..8);
            let coordinates: Vec<u32> = (0..len).map(|_| rng.u32(..)).collect();
            let value = Factorization::from(coordinates);
            let key = DelimitedKey::hash_value(&value);
            assert_eq!(DelimitedKey::reverse(&key), value);
        }
    }
}
