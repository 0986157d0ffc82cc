// src/relation_sieve/block.rs

use num::{BigInt, Integer, One, Zero};
use crate::core::factor_base::{FactorBase, FactorBasePrime};
use crate::relation_sieve::relation::Relation;

/// Number of contiguous candidate offsets processed per sieve pass.
pub const BLOCK_SIZE: usize = 256;

/// One sieve block: the polynomial values `(base + offset + i)^2 - n`
/// for `i` in `[0, BLOCK_SIZE)`, plus a per-position exponent counter
/// for every factor-base prime. Applying the whole base divides each
/// value down to its non-smooth residual; positions that reach 1 are
/// smooth relations.
pub struct SieveBlock {
    offset: u64,
    values: Vec<BigInt>,
    counts: Vec<Vec<u32>>,
}

impl SieveBlock {
    pub fn new(n: &BigInt, poly_base: &BigInt, offset: u64, base_size: usize) -> Self {
        let mut values = Vec::with_capacity(BLOCK_SIZE);
        for i in 0..BLOCK_SIZE {
            let a = poly_base + BigInt::from(offset + i as u64);
            values.push(&a * &a - n);
        }
        SieveBlock {
            offset,
            values,
            counts: vec![vec![0u32; base_size]; BLOCK_SIZE],
        }
    }

    pub fn apply_base(&mut self, base: &FactorBase) {
        for (index, entry) in base.iter().enumerate() {
            self.apply_prime(index, entry);
        }
    }

    /// Walks the block at stride `p` from each root's block-relative
    /// start and divides the prime out of every value it lands on.
    fn apply_prime(&mut self, index: usize, entry: &FactorBasePrime) {
        let p = BigInt::from(entry.p);
        for &root_offset in &entry.offsets {
            let start = Self::block_start(entry.p, root_offset, self.offset);
            let mut position = start as usize;
            while position < BLOCK_SIZE {
                loop {
                    let value = &self.values[position];
                    if value.is_zero() || !value.mod_floor(&p).is_zero() {
                        break;
                    }
                    self.values[position] /= &p;
                    self.counts[position][index] += 1;
                }
                position += entry.p as usize;
            }
        }
    }

    /// First block position landing on the arithmetic progression
    /// `root_offset mod p`, given the block's absolute offset.
    fn block_start(p: u64, root_offset: u64, block_offset: u64) -> u64 {
        (root_offset + p - block_offset % p) % p
    }

    /// Smooth positions in increasing position order.
    pub fn harvest(&self, poly_base: &BigInt) -> Vec<Relation> {
        let mut relations = Vec::new();
        for (i, value) in self.values.iter().enumerate() {
            if value.is_one() {
                let a = poly_base + BigInt::from(self.offset + i as u64);
                relations.push(Relation::new(a, self.counts[i].clone()));
            }
        }
        relations
    }
}
