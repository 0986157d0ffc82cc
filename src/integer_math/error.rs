// src/integer_math/error.rs

use std::error::Error;
use std::fmt;

/// Precondition failures raised by the arithmetic toolkit and the bit
/// matrix. These surface immediately at the offending call; the sieve
/// pipeline never converts them into a factoring outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// A non-positive modulus or dimension where a positive one is required.
    InvalidInput(&'static str),
    /// Modular inverse requested for a pair that is not coprime.
    NoInverse,
    /// The Tonelli-Shanks discrete-log search ran past its bound; the
    /// argument was not a quadratic residue of the modulus.
    NoRoot,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::InvalidInput(what) => write!(f, "invalid input: {}", what),
            MathError::NoInverse => write!(f, "no modular inverse exists"),
            MathError::NoRoot => write!(f, "no modular square root exists"),
        }
    }
}

impl Error for MathError {}
