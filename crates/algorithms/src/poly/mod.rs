//! Polynomial engine for truncated rings `Z[x]/(x^N - 1)`
//!
//! This module provides the value types and algorithms the rest of the
//! library operates on: dense integer polynomials, sparse ternary and
//! product-form polynomials, rejection sampling, ring multiplication,
//! modular inversion, and the bit-exact byte codecs.

pub mod invert;
pub mod mult;
pub mod polynomial;
pub mod sampling;
pub mod serialize;
pub mod ternary;

use ntrupoly_params::MAX_DEGREE;

/// Dense coefficient capacity: the largest supported ring degree plus
/// headroom for the multiplier's over-allocation, rounded to a multiple
/// of eight so bulk loops never run past the end.
pub const INT_POLY_CAPACITY: usize = (MAX_DEGREE + 16 + 7) & !7;

/// Number of `u64` words needed to bit-pack `N+1` binary coefficients
/// for any supported `N`.
pub(crate) const BITVEC_WORDS: usize = (MAX_DEGREE + 1 + 63) / 64;

/// Number of bits needed to represent values in `[0, n]`.
pub fn num_bits(n: u16) -> u8 {
    let mut n = n;
    let mut b = 1;
    while {
        n >>= 1;
        n != 0
    } {
        b += 1;
    }
    b
}

/// Floor of the base-2 logarithm. `n` must be nonzero.
pub fn log2(n: u16) -> u8 {
    debug_assert!(n != 0);
    15 - n.leading_zeros() as u8
}

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::invert::invert;
    pub use super::polynomial::IntPoly;
    pub use super::sampling::{rand_prod, rand_tern};
    pub use super::serialize::enc_len;
    pub use super::ternary::{PrivPoly, ProdPoly, TernPoly};
    pub use super::{log2, num_bits};
}
