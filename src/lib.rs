//! Facade crate re-exporting the `ntrupoly` workspace
//!
//! Depend on this crate to get the polynomial engine and the parameter
//! catalog under one roof:
//!
//! ```
//! use ntrupoly::prelude::*;
//! use ntrupoly::params::EES401EP1;
//!
//! # fn main() -> Result<()> {
//! let mut rng = rand::thread_rng();
//! let t = rand_tern(EES401EP1.n, EES401EP1.df1, EES401EP1.df1, &mut rng)?;
//! let a = PrivPoly::Ternary(t);
//! match invert(&a, EES401EP1.q - 1) {
//!     Ok(fq) => assert_eq!(fq.degree(), EES401EP1.n),
//!     Err(Error::NotInvertible) => {} // resample and retry
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use ntrupoly_algorithms as algorithms;
pub use ntrupoly_params as params;

pub use rand;
pub use subtle;
pub use zeroize;

pub use algorithms::{Error, IntPoly, PrivPoly, PrivateKey, ProdPoly, PublicKey, Result, TernPoly};

/// Prelude re-exporting the types and functions most callers need.
pub mod prelude {
    pub use super::algorithms::prelude::*;
}
