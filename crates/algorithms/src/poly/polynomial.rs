//! Dense integer polynomials with in-place modular reduction

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::INT_POLY_CAPACITY;
use crate::error::{Error, Result};
use ntrupoly_params::MAX_DEGREE;

/// A dense polynomial in `Z[x]/(x^N - 1)` with 16-bit signed coefficients.
///
/// Coefficient arithmetic wraps modulo 2^16; callers reduce explicitly via
/// [`mod_mask`](IntPoly::mod_mask) or [`mod3`](IntPoly::mod3) when a
/// canonical representative is needed. The backing array is larger than any
/// supported `N`; entries past `N` stay zero so the multiplier may read
/// whole blocks without masking.
#[derive(Clone, Zeroize)]
pub struct IntPoly {
    n: u16,
    coeffs: [i16; INT_POLY_CAPACITY],
}

impl IntPoly {
    /// Creates the zero polynomial of ring degree `n`.
    pub fn zero(n: u16) -> Result<Self> {
        if n == 0 || n as usize > MAX_DEGREE {
            return Err(Error::Parameter {
                name: "n",
                reason: "ring degree must be in [1, MAX_DEGREE]",
            });
        }
        Ok(Self {
            n,
            coeffs: [0; INT_POLY_CAPACITY],
        })
    }

    /// Creates a polynomial from a slice of coefficients; the slice length
    /// is the ring degree.
    pub fn from_coeffs(coeffs_slice: &[i16]) -> Result<Self> {
        if coeffs_slice.is_empty() || coeffs_slice.len() > MAX_DEGREE {
            return Err(Error::Parameter {
                name: "coeffs_slice",
                reason: "ring degree must be in [1, MAX_DEGREE]",
            });
        }
        let mut poly = Self::zero(coeffs_slice.len() as u16)?;
        poly.coeffs[..coeffs_slice.len()].copy_from_slice(coeffs_slice);
        Ok(poly)
    }

    /// The multiplicative identity of the ring of degree `n`.
    pub fn one(n: u16) -> Result<Self> {
        let mut poly = Self::zero(n)?;
        poly.coeffs[0] = 1;
        Ok(poly)
    }

    /// Returns the ring degree N.
    pub fn degree(&self) -> u16 {
        self.n
    }

    /// Returns a view of the N live coefficients.
    pub fn coeffs(&self) -> &[i16] {
        &self.coeffs[..self.n as usize]
    }

    /// Returns a mutable view of the N live coefficients.
    pub fn coeffs_mut(&mut self) -> &mut [i16] {
        &mut self.coeffs[..self.n as usize]
    }

    /// Full backing buffer, including the zero tail past N. The multiplier
    /// writes intermediate results here.
    pub(crate) fn buffer_mut(&mut self) -> &mut [i16; INT_POLY_CAPACITY] {
        &mut self.coeffs
    }

    /// Full backing buffer, read-only.
    pub(crate) fn buffer(&self) -> &[i16; INT_POLY_CAPACITY] {
        &self.coeffs
    }

    /// Coefficient-wise addition over `other`'s degree, wrapping mod 2^16.
    pub fn add_assign(&mut self, other: &IntPoly) -> Result<()> {
        if self.n != other.n {
            return Err(Error::DimensionMismatch {
                context: "add",
                left: self.n,
                right: other.n,
            });
        }
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs()) {
            *a = a.wrapping_add(*b);
        }
        Ok(())
    }

    /// Coefficient-wise subtraction, wrapping mod 2^16.
    pub fn sub_assign(&mut self, other: &IntPoly) -> Result<()> {
        if self.n != other.n {
            return Err(Error::DimensionMismatch {
                context: "sub",
                left: self.n,
                right: other.n,
            });
        }
        for (a, b) in self.coeffs.iter_mut().zip(other.coeffs()) {
            *a = a.wrapping_sub(*b);
        }
        Ok(())
    }

    /// Replaces every coefficient `c` with `modulus - c`.
    pub fn neg_mod(&mut self, modulus: u16) {
        for c in self.coeffs_mut() {
            *c = (modulus as i16).wrapping_sub(*c);
        }
    }

    /// Multiplies every coefficient by `factor`, wrapping mod 2^16.
    pub fn mult_fac(&mut self, factor: i16) {
        for c in self.coeffs_mut() {
            *c = c.wrapping_mul(factor);
        }
    }

    /// Adds `value` to the constant term, wrapping mod 2^16.
    pub(crate) fn add_constant(&mut self, value: i16) {
        self.coeffs[0] = self.coeffs[0].wrapping_add(value);
    }

    /// Reduces every coefficient modulo a power of two given `mask = q - 1`.
    pub fn mod_mask(&mut self, mask: u16) {
        for c in self.coeffs_mut() {
            *c &= mask as i16;
        }
    }

    /// Reduces every coefficient to its representative in `{0, 1, 2}`.
    pub fn mod3(&mut self) {
        for c in self.coeffs_mut() {
            let mut r = *c % 3;
            if r == -2 {
                r = 1;
            }
            if r == -1 {
                r = 2;
            }
            *c = r;
        }
    }

    /// Masks to `[0, modulus)` and re-centers into the balanced range
    /// `(-modulus/2, modulus/2]`.
    pub fn mod_center(&mut self, modulus: u16) {
        let m2 = (modulus / 2) as i32;
        let mask = modulus - 1;
        for c in self.coeffs_mut() {
            let mut v = ((*c as u16) & mask) as i32;
            if v > m2 {
                v -= modulus as i32;
            }
            *c = v as i16;
        }
    }

    /// True iff this polynomial is the multiplicative identity.
    /// Constant-time over the live coefficients.
    pub fn equals_one(&self) -> bool {
        let mut acc = self.coeffs[0].ct_eq(&1);
        for c in &self.coeffs[1..self.n as usize] {
            acc &= c.ct_eq(&0);
        }
        bool::from(acc)
    }

    /// Zeroes all coefficients, keeping the degree.
    pub fn clear(&mut self) {
        self.coeffs.zeroize();
    }
}

// Comparisons may touch secret-adjacent data, so they run in constant time
// over the live coefficient range.
impl PartialEq for IntPoly {
    fn eq(&self, other: &Self) -> bool {
        if self.n != other.n {
            return false;
        }
        let n = self.n as usize;
        bool::from(self.coeffs[..n].ct_eq(&other.coeffs[..n]))
    }
}

impl Eq for IntPoly {}

impl fmt::Debug for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntPoly")
            .field("n", &self.n)
            .field("coeffs", &self.coeffs())
            .finish()
    }
}
