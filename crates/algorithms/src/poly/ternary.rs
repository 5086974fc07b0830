//! Sparse ternary and product-form polynomials
//!
//! Ternary polynomials have every coefficient in `{-1, 0, +1}` and are kept
//! as the index sets of their nonzero positions. Product-form polynomials
//! represent `f1*f2 + f3` by its three ternary factors and never materialize
//! the product; multiplying by one costs three sparse multiplications.

use zeroize::Zeroize;

use super::polynomial::IntPoly;
use crate::error::{Error, Result};
use ntrupoly_params::MAX_DEGREE;

/// A sparse ternary polynomial: the positions holding +1 and the positions
/// holding -1. The two index sets are disjoint subsets of `[0, N)`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct TernPoly {
    n: u16,
    ones: Vec<u16>,
    neg_ones: Vec<u16>,
}

impl TernPoly {
    /// Creates a ternary polynomial after validating the index sets.
    pub fn new(n: u16, ones: Vec<u16>, neg_ones: Vec<u16>) -> Result<Self> {
        if n == 0 || n as usize > MAX_DEGREE {
            return Err(Error::Parameter {
                name: "n",
                reason: "ring degree must be in [1, MAX_DEGREE]",
            });
        }
        let mut occupied = [false; MAX_DEGREE];
        for &idx in ones.iter().chain(neg_ones.iter()) {
            if idx >= n {
                return Err(Error::Parameter {
                    name: "ones/neg_ones",
                    reason: "index out of ring range",
                });
            }
            if occupied[idx as usize] {
                return Err(Error::Parameter {
                    name: "ones/neg_ones",
                    reason: "index sets overlap",
                });
            }
            occupied[idx as usize] = true;
        }
        Ok(Self { n, ones, neg_ones })
    }

    /// Construction path for the sampler and decoder, which guarantee the
    /// invariants themselves.
    pub(crate) fn from_parts(n: u16, ones: Vec<u16>, neg_ones: Vec<u16>) -> Self {
        Self { n, ones, neg_ones }
    }

    /// Returns the ring degree N.
    pub fn degree(&self) -> u16 {
        self.n
    }

    /// Indices holding +1.
    pub fn ones(&self) -> &[u16] {
        &self.ones
    }

    /// Indices holding -1.
    pub fn neg_ones(&self) -> &[u16] {
        &self.neg_ones
    }

    /// Number of +1 coefficients.
    pub fn num_ones(&self) -> u16 {
        self.ones.len() as u16
    }

    /// Number of -1 coefficients.
    pub fn num_neg_ones(&self) -> u16 {
        self.neg_ones.len() as u16
    }

    /// Dense equivalent with coefficients in `{-1, 0, 1}`.
    pub fn to_int_poly(&self) -> Result<IntPoly> {
        let mut poly = IntPoly::zero(self.n)?;
        let coeffs = poly.coeffs_mut();
        for &idx in &self.ones {
            coeffs[idx as usize] = 1;
        }
        for &idx in &self.neg_ones {
            coeffs[idx as usize] = -1;
        }
        Ok(poly)
    }

    /// Scrubs the index sets in place. Counts remain readable but carry no
    /// secrets.
    pub fn clear(&mut self) {
        self.ones.as_mut_slice().zeroize();
        self.neg_ones.as_mut_slice().zeroize();
    }
}

/// A product-form polynomial `f1*f2 + f3` over three ternary factors of the
/// same ring degree.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct ProdPoly {
    n: u16,
    f1: TernPoly,
    f2: TernPoly,
    f3: TernPoly,
}

impl ProdPoly {
    /// Combines three ternary factors; all must share one ring degree.
    pub fn new(f1: TernPoly, f2: TernPoly, f3: TernPoly) -> Result<Self> {
        let n = f1.degree();
        for f in [&f2, &f3] {
            if f.degree() != n {
                return Err(Error::DimensionMismatch {
                    context: "ProdPoly::new",
                    left: n,
                    right: f.degree(),
                });
            }
        }
        Ok(Self { n, f1, f2, f3 })
    }

    /// Returns the ring degree N.
    pub fn degree(&self) -> u16 {
        self.n
    }

    /// First factor.
    pub fn f1(&self) -> &TernPoly {
        &self.f1
    }

    /// Second factor.
    pub fn f2(&self) -> &TernPoly {
        &self.f2
    }

    /// Additive term.
    pub fn f3(&self) -> &TernPoly {
        &self.f3
    }

    /// Scrubs all three factors.
    pub fn clear(&mut self) {
        self.f1.clear();
        self.f2.clear();
        self.f3.clear();
    }
}

/// A private polynomial: either plain ternary or product form.
///
/// An explicit sum type so every arithmetic entry point matches
/// exhaustively instead of trusting a flag to agree with the payload.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub enum PrivPoly {
    /// Plain ternary private polynomial.
    Ternary(TernPoly),
    /// Product-form private polynomial `f1*f2 + f3`.
    Product(ProdPoly),
}

impl PrivPoly {
    /// Returns the ring degree N.
    pub fn degree(&self) -> u16 {
        match self {
            PrivPoly::Ternary(t) => t.degree(),
            PrivPoly::Product(p) => p.degree(),
        }
    }

    /// The primary sparsity count used for parameter-set matching:
    /// `num_ones` of the polynomial itself, or of `f1` in product form.
    pub fn primary_df(&self) -> u16 {
        match self {
            PrivPoly::Ternary(t) => t.num_ones(),
            PrivPoly::Product(p) => p.f1().num_ones(),
        }
    }

    /// True for the product-form variant.
    pub fn is_product(&self) -> bool {
        matches!(self, PrivPoly::Product(_))
    }

    /// Dense equivalent reduced by `mod_mask`. The product form is expanded
    /// here and only here.
    pub fn to_int_poly(&self, mod_mask: u16) -> Result<IntPoly> {
        match self {
            PrivPoly::Ternary(t) => {
                let mut poly = t.to_int_poly()?;
                poly.mod_mask(mod_mask);
                Ok(poly)
            }
            PrivPoly::Product(p) => {
                let f1 = p.f1().to_int_poly()?;
                let mut poly = f1.mult_tern(p.f2(), mod_mask)?;
                let f3 = p.f3().to_int_poly()?;
                poly.add_assign(&f3)?;
                poly.mod_mask(mod_mask);
                Ok(poly)
            }
        }
    }

    /// Scrubs the contained index sets.
    pub fn clear(&mut self) {
        match self {
            PrivPoly::Ternary(t) => t.clear(),
            PrivPoly::Product(p) => p.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_indices() {
        assert!(TernPoly::new(11, vec![1, 3], vec![5]).is_ok());
        assert!(TernPoly::new(11, vec![11], vec![]).is_err());
        assert!(TernPoly::new(11, vec![4], vec![4]).is_err());
        assert!(TernPoly::new(0, vec![], vec![]).is_err());
    }

    #[test]
    fn dense_conversion() {
        let t = TernPoly::new(7, vec![0, 2], vec![5]).unwrap();
        let p = t.to_int_poly().unwrap();
        assert_eq!(p.coeffs(), &[1, 0, 1, 0, 0, -1, 0]);
    }

    #[test]
    fn prod_requires_matching_degree() {
        let f = |n| TernPoly::new(n, vec![1], vec![2]).unwrap();
        assert!(ProdPoly::new(f(11), f(11), f(11)).is_ok());
        assert!(ProdPoly::new(f(11), f(13), f(11)).is_err());
    }

    #[test]
    fn clear_scrubs_indices() {
        let mut t = TernPoly::new(11, vec![1, 3], vec![5]).unwrap();
        t.clear();
        assert_eq!(t.ones(), &[0, 0]);
        assert_eq!(t.neg_ones(), &[0]);
    }

    #[test]
    fn priv_poly_primary_df() {
        let t = TernPoly::new(11, vec![1, 3], vec![5]).unwrap();
        assert_eq!(PrivPoly::Ternary(t.clone()).primary_df(), 2);

        let p = ProdPoly::new(
            TernPoly::new(11, vec![1, 2, 3], vec![4]).unwrap(),
            t.clone(),
            t,
        )
        .unwrap();
        let p = PrivPoly::Product(p);
        assert_eq!(p.primary_df(), 3);
        assert!(p.is_product());
    }
}
