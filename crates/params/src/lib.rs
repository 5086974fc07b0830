//! Parameter-set constants for NTRU-family polynomial rings.
//!
//! Each [`ParamSet`] names a truncated ring `Z[x]/(x^N - 1)` together with the
//! power-of-two coefficient modulus `q` and the sparsity counts used when
//! sampling private polynomials. The engine only consumes these values; it
//! never derives or validates them beyond exact-match lookups.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// A named NTRU parameter set.
///
/// `df2` and `df3` are zero for plain-ternary sets; product-form sets
/// (`prod_flag`) use all three counts for the factors `f1`, `f2`, `f3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSet {
    /// Parameter-set name, e.g. `"EES1087EP2"`.
    pub name: &'static str,
    /// Ring degree N.
    pub n: u16,
    /// Coefficient modulus q (a power of two).
    pub q: u16,
    /// Whether private keys use the product form `f1*f2 + f3`.
    pub prod_flag: bool,
    /// Number of +1 coefficients in `f` (plain) or `f1` (product form).
    pub df1: u16,
    /// Number of +1 coefficients in `f2` (product form only).
    pub df2: u16,
    /// Number of +1 coefficients in `f3` (product form only).
    pub df3: u16,
}

/// N = 401, conservative plain-ternary set at the 112-bit level.
pub const EES401EP1: ParamSet = ParamSet {
    name: "EES401EP1",
    n: 401,
    q: 2048,
    prod_flag: false,
    df1: 113,
    df2: 0,
    df3: 0,
};

/// N = 449, plain-ternary set at the 128-bit level.
pub const EES449EP1: ParamSet = ParamSet {
    name: "EES449EP1",
    n: 449,
    q: 2048,
    prod_flag: false,
    df1: 134,
    df2: 0,
    df3: 0,
};

/// N = 677, plain-ternary set at the 192-bit level.
pub const EES677EP1: ParamSet = ParamSet {
    name: "EES677EP1",
    n: 677,
    q: 2048,
    prod_flag: false,
    df1: 157,
    df2: 0,
    df3: 0,
};

/// N = 1087, plain-ternary set at the 256-bit level.
pub const EES1087EP2: ParamSet = ParamSet {
    name: "EES1087EP2",
    n: 1087,
    q: 2048,
    prod_flag: false,
    df1: 120,
    df2: 0,
    df3: 0,
};

/// N = 541, size-optimized plain-ternary set at the 112-bit level.
pub const EES541EP1: ParamSet = ParamSet {
    name: "EES541EP1",
    n: 541,
    q: 2048,
    prod_flag: false,
    df1: 49,
    df2: 0,
    df3: 0,
};

/// N = 613, size-optimized plain-ternary set at the 128-bit level.
pub const EES613EP1: ParamSet = ParamSet {
    name: "EES613EP1",
    n: 613,
    q: 2048,
    prod_flag: false,
    df1: 55,
    df2: 0,
    df3: 0,
};

/// N = 887, size-optimized plain-ternary set at the 192-bit level.
pub const EES887EP1: ParamSet = ParamSet {
    name: "EES887EP1",
    n: 887,
    q: 2048,
    prod_flag: false,
    df1: 81,
    df2: 0,
    df3: 0,
};

/// N = 1171, size-optimized plain-ternary set at the 256-bit level.
pub const EES1171EP1: ParamSet = ParamSet {
    name: "EES1171EP1",
    n: 1171,
    q: 2048,
    prod_flag: false,
    df1: 106,
    df2: 0,
    df3: 0,
};

/// N = 659, speed-optimized plain-ternary set at the 112-bit level.
pub const EES659EP1: ParamSet = ParamSet {
    name: "EES659EP1",
    n: 659,
    q: 2048,
    prod_flag: false,
    df1: 38,
    df2: 0,
    df3: 0,
};

/// N = 761, speed-optimized plain-ternary set at the 128-bit level.
pub const EES761EP1: ParamSet = ParamSet {
    name: "EES761EP1",
    n: 761,
    q: 2048,
    prod_flag: false,
    df1: 42,
    df2: 0,
    df3: 0,
};

/// N = 1087, speed-optimized plain-ternary set at the 192-bit level.
pub const EES1087EP1: ParamSet = ParamSet {
    name: "EES1087EP1",
    n: 1087,
    q: 2048,
    prod_flag: false,
    df1: 63,
    df2: 0,
    df3: 0,
};

/// N = 1499, speed-optimized plain-ternary set at the 256-bit level.
/// Largest ring degree in the catalog.
pub const EES1499EP1: ParamSet = ParamSet {
    name: "EES1499EP1",
    n: 1499,
    q: 2048,
    prod_flag: false,
    df1: 79,
    df2: 0,
    df3: 0,
};

/// N = 401, product-form set at the 112-bit level.
pub const EES401EP2: ParamSet = ParamSet {
    name: "EES401EP2",
    n: 401,
    q: 2048,
    prod_flag: true,
    df1: 8,
    df2: 8,
    df3: 6,
};

/// N = 439, product-form set at the 128-bit level.
pub const EES439EP1: ParamSet = ParamSet {
    name: "EES439EP1",
    n: 439,
    q: 2048,
    prod_flag: true,
    df1: 9,
    df2: 8,
    df3: 5,
};

/// N = 443, product-form set at the 128-bit level.
pub const EES443EP1: ParamSet = ParamSet {
    name: "EES443EP1",
    n: 443,
    q: 2048,
    prod_flag: true,
    df1: 9,
    df2: 8,
    df3: 5,
};

/// N = 593, product-form set at the 192-bit level.
pub const EES593EP1: ParamSet = ParamSet {
    name: "EES593EP1",
    n: 593,
    q: 2048,
    prod_flag: true,
    df1: 10,
    df2: 10,
    df3: 8,
};

/// N = 587, product-form set at the 192-bit level.
pub const EES587EP1: ParamSet = ParamSet {
    name: "EES587EP1",
    n: 587,
    q: 2048,
    prod_flag: true,
    df1: 10,
    df2: 10,
    df3: 8,
};

/// N = 743, product-form set at the 256-bit level.
pub const EES743EP1: ParamSet = ParamSet {
    name: "EES743EP1",
    n: 743,
    q: 2048,
    prod_flag: true,
    df1: 11,
    df2: 11,
    df3: 15,
};

/// Every parameter set known to this crate, in lookup order.
pub const ALL_PARAM_SETS: &[ParamSet] = &[
    EES401EP1,
    EES449EP1,
    EES677EP1,
    EES1087EP2,
    EES541EP1,
    EES613EP1,
    EES887EP1,
    EES1171EP1,
    EES659EP1,
    EES761EP1,
    EES1087EP1,
    EES1499EP1,
    EES401EP2,
    EES439EP1,
    EES443EP1,
    EES593EP1,
    EES587EP1,
    EES743EP1,
];

/// Largest ring degree across [`ALL_PARAM_SETS`].
pub const MAX_DEGREE: usize = 1499;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moduli_are_powers_of_two() {
        for set in ALL_PARAM_SETS {
            assert!(set.q.is_power_of_two(), "{} has q = {}", set.name, set.q);
        }
    }

    #[test]
    fn degrees_within_max() {
        for set in ALL_PARAM_SETS {
            assert!((set.n as usize) <= MAX_DEGREE);
            assert!(set.n % 2 == 1, "{} has even N", set.name);
        }
    }

    #[test]
    fn product_form_sets_carry_all_counts() {
        for set in ALL_PARAM_SETS {
            if set.prod_flag {
                assert!(set.df2 > 0 && set.df3 > 0, "{}", set.name);
            } else {
                assert_eq!((set.df2, set.df3), (0, 0), "{}", set.name);
            }
        }
    }
}
