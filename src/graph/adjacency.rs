// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small square boolean matrices for reachability.
//!
//! Betti detection builds the adjacency matrix `A` of a graph on at most `d`
//! vertices (one per generator) and asks whether every vertex reaches every
//! other. The reachability matrix is the power sum
//!
//! ```text
//! C = I + A + A^2 + ... + A^dim
//! ```
//!
//! computed over the boolean semiring (`+` is OR, `*` is AND), so entries
//! never overflow. Any simple path in a `dim`-vertex graph has fewer than
//! `dim` edges, which makes `C` the reflexive transitive closure for every
//! `dim`; the tests check this against Warshall's algorithm.

use std::fmt;

/// A `dim × dim` boolean matrix, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    dim: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// The all-false matrix.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![false; dim * dim],
        }
    }

    /// The identity matrix.
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::new(dim);
        for i in 0..dim {
            m.set(i, i, true);
        }
        m
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get entry `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= dim`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)]
    }

    /// Set entry `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let offset = self.offset(row, col);
        self.cells[offset] = value;
    }

    /// Mark `i` and `j` adjacent (both `(i, j)` and `(j, i)`).
    pub fn connect(&mut self, i: usize, j: usize) {
        self.set(i, j, true);
        self.set(j, i, true);
    }

    /// Boolean matrix product `self * other`.
    pub fn multiply(&self, other: &AdjacencyMatrix) -> AdjacencyMatrix {
        assert_eq!(
            self.dim, other.dim,
            "Matrix dimension mismatch: {} vs {}",
            self.dim, other.dim
        );
        let mut product = AdjacencyMatrix::new(self.dim);
        for i in 0..self.dim {
            for k in 0..self.dim {
                if !self.get(i, k) {
                    continue;
                }
                for j in 0..self.dim {
                    if other.get(k, j) {
                        product.set(i, j, true);
                    }
                }
            }
        }
        product
    }

    /// Entry-wise OR of `other` into `self`.
    pub fn accumulate(&mut self, other: &AdjacencyMatrix) {
        assert_eq!(
            self.dim, other.dim,
            "Matrix dimension mismatch: {} vs {}",
            self.dim, other.dim
        );
        for (cell, &o) in self.cells.iter_mut().zip(&other.cells) {
            *cell |= o;
        }
    }

    /// `I + A + A^2 + ... + A^dim`: which vertices reach which.
    pub fn power_sum(&self) -> AdjacencyMatrix {
        let mut sum = AdjacencyMatrix::identity(self.dim);
        let mut power = AdjacencyMatrix::identity(self.dim);
        for _ in 0..self.dim {
            power = power.multiply(self);
            sum.accumulate(&power);
        }
        sum
    }

    /// Reflexive transitive closure by Warshall's algorithm.
    pub fn transitive_closure(&self) -> AdjacencyMatrix {
        let mut closure = self.clone();
        closure.accumulate(&AdjacencyMatrix::identity(self.dim));
        for k in 0..self.dim {
            for i in 0..self.dim {
                if !closure.get(i, k) {
                    continue;
                }
                for j in 0..self.dim {
                    if closure.get(k, j) {
                        closure.set(i, j, true);
                    }
                }
            }
        }
        closure
    }

    /// Check that every pair of distinct vertices is joined by some path.
    ///
    /// Only the upper triangle of the reachability matrix is inspected, which
    /// is enough for the symmetric matrices built by `connect`.
    pub fn is_fully_connected(&self) -> bool {
        let reach = self.power_sum();
        (0..self.dim).all(|i| ((i + 1)..self.dim).all(|j| reach.get(i, j)))
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.dim && col < self.dim,
            "Matrix cell ({}, {}) out of range for dimension {}",
            row,
            col,
            self.dim
        );
        row * self.dim + col
    }
}

impl fmt::Debug for AdjacencyMatrix {
    /// One row per line, `1` for true and `.` for false.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AdjacencyMatrix({})", self.dim)?;
        for i in 0..self.dim {
            for j in 0..self.dim {
                write!(f, "{}", if self.get(i, j) { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
