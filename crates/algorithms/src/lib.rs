//! Polynomial-ring arithmetic for NTRU-family lattice cryptography
//!
//! Implements the truncated ring `Z[x]/(x^N - 1)` with power-of-two
//! coefficient moduli: dense and sparse polynomial types, rejection
//! sampling, Karatsuba and sparse multiplication, inversion of `1 + 3a`
//! via GF(2) almost-inverse plus Newton lifting, bit-exact byte codecs,
//! and the public/private key records built from them.
//!
//! Parameter-set constants live in the companion `ntrupoly-params` crate
//! and are re-exported here as [`params`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod key;
pub mod poly;

pub use ntrupoly_params as params;

pub use error::{Error, Result};
pub use key::{PrivateKey, PublicKey};
pub use poly::polynomial::IntPoly;
pub use poly::ternary::{PrivPoly, ProdPoly, TernPoly};

/// Prelude re-exporting the types and functions most callers need.
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use super::key::{PrivateKey, PublicKey};
    pub use super::poly::prelude::*;
}
