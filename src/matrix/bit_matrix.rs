// src/matrix/bit_matrix.rs

use bitvec::prelude::*;
use crate::integer_math::error::MathError;

/// Dense matrix over GF(2), packed into one contiguous bit buffer in
/// row-major order.
///
/// Row and column arguments on the public entry operations are signed and
/// wrap into range by floor modulo: index -1 addresses the last row or
/// column, `rows` wraps back to 0, and so on. The wraparound is part of
/// the addressing contract, not an accident of the index type.
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    bits: BitVec,
    rank: Option<usize>,
}

impl BitMatrix {
    pub fn new(rows: usize, cols: usize) -> Result<Self, MathError> {
        if rows == 0 || cols == 0 {
            return Err(MathError::InvalidInput("matrix dimensions must be positive"));
        }
        Ok(BitMatrix {
            rows,
            cols,
            bits: bitvec![0; rows * cols],
            rank: None,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rank found by the last `row_reduction` run, if any. Mutating the
    /// matrix clears it.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    fn wrap(value: i64, extent: usize) -> usize {
        let extent = extent as i64;
        (((value % extent) + extent) % extent) as usize
    }

    fn index(&self, i: i64, j: i64) -> usize {
        Self::wrap(i, self.rows) * self.cols + Self::wrap(j, self.cols)
    }

    // Unwrapped accessor for the elimination loops below.
    fn bit(&self, row: usize, col: usize) -> bool {
        self.bits[row * self.cols + col]
    }

    pub fn get(&self, i: i64, j: i64) -> bool {
        self.bits[self.index(i, j)]
    }

    pub fn set(&mut self, i: i64, j: i64, bit: bool) {
        let index = self.index(i, j);
        self.bits.set(index, bit);
        self.rank = None;
    }

    pub fn flip(&mut self, i: i64, j: i64) {
        let index = self.index(i, j);
        let current = self.bits[index];
        self.bits.set(index, !current);
        self.rank = None;
    }

    /// XORs `bit` into the entry.
    pub fn xor_bit(&mut self, i: i64, j: i64, bit: bool) {
        if bit {
            self.flip(i, j);
        }
    }

    /// ANDs `bit` into the entry.
    pub fn and_bit(&mut self, i: i64, j: i64, bit: bool) {
        if !bit {
            self.set(i, j, false);
        }
    }

    pub fn clear_bit(&mut self, i: i64, j: i64) {
        self.set(i, j, false);
    }

    pub fn fill(&mut self, bit: bool) {
        self.bits.fill(bit);
        self.rank = None;
    }

    pub fn fill_row(&mut self, i: i64, bit: bool) {
        let row = Self::wrap(i, self.rows);
        self.bits[row * self.cols..(row + 1) * self.cols].fill(bit);
        self.rank = None;
    }

    pub fn fill_column(&mut self, j: i64, bit: bool) {
        let col = Self::wrap(j, self.cols);
        for row in 0..self.rows {
            self.bits.set(row * self.cols + col, bit);
        }
        self.rank = None;
    }

    pub fn swap_rows(&mut self, i1: i64, i2: i64) {
        let a = Self::wrap(i1, self.rows);
        let b = Self::wrap(i2, self.rows);
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.bits.swap(a * self.cols + col, b * self.cols + col);
        }
        self.rank = None;
    }

    /// Elementwise `row to ^= row from`.
    pub fn xor_rows(&mut self, to: i64, from: i64) {
        let to = Self::wrap(to, self.rows);
        let from = Self::wrap(from, self.rows);
        for col in 0..self.cols {
            if self.bits[from * self.cols + col] {
                let index = to * self.cols + col;
                let current = self.bits[index];
                self.bits.set(index, !current);
            }
        }
        self.rank = None;
    }

    /// In-place Gaussian elimination. Each pivot is cleared from every
    /// other row, above and below, so the surviving rows are in reduced
    /// echelon form. Returns the rank.
    pub fn row_reduction(&mut self) -> usize {
        let mut rank = 0usize;
        let mut target = 0usize;

        for col in 0..self.cols {
            if target >= self.rows {
                break;
            }

            let pivot = match (target..self.rows).find(|&row| self.bit(row, col)) {
                Some(row) => row,
                // No pivot in this column; move on without burning a row.
                None => continue,
            };
            if pivot != target {
                self.swap_rows(target as i64, pivot as i64);
            }

            for row in 0..self.rows {
                if row != target && self.bit(row, col) {
                    self.xor_rows(row as i64, target as i64);
                }
            }

            rank += 1;
            target += 1;
        }

        self.rank = Some(rank);
        rank
    }

    /// Basis of the null space, one vector per free column in increasing
    /// column order; `cols - rank` vectors in total. Requires a prior
    /// `row_reduction`.
    pub fn kernel(&self) -> Vec<BitVec> {
        let rank = match self.rank {
            Some(rank) => rank,
            None => panic!("row_reduction must run before kernel extraction"),
        };

        let mut basis = Vec::with_capacity(self.cols - rank);
        let mut pivots: Vec<usize> = Vec::with_capacity(rank);
        let mut next_row = 0usize;

        for col in 0..self.cols {
            if next_row < self.rows && self.bit(next_row, col) {
                // Leading 1 of the next echelon row: a pivot column.
                pivots.push(col);
                next_row += 1;
                continue;
            }

            // Free column: its basis vector copies the column's entries
            // into the pivot coordinates and sets its own coordinate.
            let mut vector = bitvec![0; self.cols];
            for (row, &pivot_col) in pivots.iter().enumerate() {
                if self.bit(row, col) {
                    vector.set(pivot_col, true);
                }
            }
            vector.set(col, true);
            basis.push(vector);
        }

        basis
    }
}
