// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{fac, monoid};
use numerical_monoid::{FactorizationSet, MonoidError, NumericalMonoid};

#[test]
fn test_factorizations_sum_to_element() {
    let mut monoid = monoid(&[11, 34, 35]);
    for n in 0..400 {
        let factorizations = monoid.factorizations(n);
        let mut distinct = FactorizationSet::new();
        for factorization in factorizations.iter() {
            assert_eq!(factorization.len(), 3);
            assert_eq!(factorization.evaluate(&[11, 34, 35]), n);
            assert!(distinct.add(factorization), "{} repeated for {}", factorization, n);
        }
    }
}

#[test]
fn test_betti_element_factorizations() {
    let mut monoid = monoid(&[11, 34, 35]);
    assert_eq!(&monoid.factorizations(68)[..], &[fac([3, 0, 1]), fac([0, 2, 0])]);
    assert_eq!(&monoid.factorizations(209)[..], &[fac([19, 0, 0]), fac([0, 1, 5])]);
    assert_eq!(&monoid.factorizations(210)[..], &[fac([16, 1, 0]), fac([0, 0, 6])]);

    let mut monoid = common::monoid(&[11, 12, 14]);
    assert_eq!(&monoid.factorizations(36)[..], &[fac([2, 0, 1]), fac([0, 3, 0])]);
    assert_eq!(&monoid.factorizations(56)[..], &[fac([4, 1, 0]), fac([0, 0, 4])]);
    assert_eq!(&monoid.factorizations(66)[..], &[fac([6, 0, 0]), fac([0, 2, 3])]);
}

#[test]
fn test_factorization_counts() {
    let mut monoid = monoid(&[11, 12, 14]);
    assert_eq!(monoid.factorizations(100).len(), 4);
    assert_eq!(monoid.factorizations(1000).len(), 283);
}

#[test]
fn test_two_generators() {
    let mut monoid = monoid(&[3, 5]);
    assert_eq!(&monoid.factorizations(15)[..], &[fac([5, 0]), fac([0, 3])]);
    assert!(monoid.factorizations(7).is_empty());
}

#[test]
fn test_large_element_uses_work_stack() {
    let mut monoid = monoid(&[11, 34, 35]);
    let factorizations = monoid.factorizations(3000);
    assert!(!factorizations.is_empty());
    for factorization in factorizations.iter() {
        assert_eq!(factorization.evaluate(monoid.generators()), 3000);
    }
    assert!(monoid.memoized_elements() <= 3000);
}

#[test]
fn test_frobenius_numbers() {
    let cases: &[(&[i64], i64)] = &[
        (&[1], -1),
        (&[2, 3], 1),
        (&[5, 7], 23),
        (&[3, 5, 7], 4),
        (&[11, 34, 35], 164),
        (&[11, 12, 14], 43),
        (&[4, 6, 9], 11),
        (&[5, 6, 7, 8], 9),
        (&[6, 7, 8, 9, 10], 11),
    ];
    for &(generators, expected) in cases {
        assert_eq!(monoid(generators).frobenius(), expected, "{:?}", generators);
    }
}

#[test]
fn test_frobenius_is_largest_gap() {
    for generators in [&[5, 7][..], &[11, 34, 35], &[6, 9, 20]] {
        let mut monoid = monoid(generators);
        let frobenius = monoid.frobenius();
        assert!(!monoid.has_element(frobenius));
        for n in frobenius + 1..=frobenius + 50 {
            assert!(monoid.has_element(n), "{} in {:?}", n, generators);
        }
    }
}

#[test]
fn test_two_generator_formula() {
    for (a, b) in [(2, 5), (3, 8), (7, 9), (10, 13)] {
        assert_eq!(monoid(&[a, b]).frobenius(), a * b - a - b);
    }
}

#[test]
fn test_apery_set_is_minimal() {
    let mut monoid = monoid(&[11, 12, 14]);
    for modulus in [11, 12, 25] {
        let apery = monoid.apery_set(modulus).unwrap();
        assert_eq!(apery.len(), modulus as usize);
        for (residue, &w) in apery.iter().enumerate() {
            assert_eq!(w % modulus, residue as i64);
            assert!(monoid.has_element(w));
            assert!(!monoid.has_element(w - modulus));
        }
    }
}

#[test]
fn test_apery_set_with_respect_to_multiplicity() {
    let mut monoid = monoid(&[11, 34, 35]);
    let apery = monoid.apery_set(11).unwrap();
    assert_eq!(apery, vec![0, 34, 35, 69, 70, 104, 105, 139, 140, 174, 175]);
    // The largest Apéry element minus the modulus is the Frobenius number
    assert_eq!(apery.iter().max().unwrap() - 11, monoid.frobenius());
    assert_eq!(monoid.apery_set(-3), Err(MonoidError::NonPositiveModulus(-3)));
}

#[test]
fn test_generators_with_common_factor() {
    assert_eq!(
        NumericalMonoid::new(&[6, 10, 14]).unwrap_err(),
        MonoidError::CommonFactor(2)
    );
    // Pairwise common factors are fine as long as the whole set is coprime
    assert_eq!(monoid(&[6, 10, 15]).frobenius(), 29);
}
