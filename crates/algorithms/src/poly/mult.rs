//! Ring multiplication in `Z[x]/(x^N - 1)`
//!
//! Three strategies, chosen by operand shape:
//!
//! * dense x dense: schoolbook convolution below [`KARATSUBA_THRESHOLD`],
//!   recursive Karatsuba above it;
//! * dense x ternary: one cyclic rotation add/subtract per nonzero
//!   coefficient, `O(N * weight)`;
//! * dense x product form: three ternary multiplications and one addition,
//!   never materializing `f1*f2`.
//!
//! Intermediate results live in fixed-capacity stack buffers; the hot path
//! performs no heap allocation.

use super::polynomial::IntPoly;
use super::ternary::{PrivPoly, ProdPoly, TernPoly};
use super::INT_POLY_CAPACITY;
use crate::error::{Error, Result};

/// Operand length below which schoolbook multiplication beats the
/// Karatsuba split.
pub const KARATSUBA_THRESHOLD: usize = 40;

/// Schoolbook convolution of `a[..len]` and `b[..len]`, accumulated into
/// `c` with output indices folded into the cyclic space `[0, n)`.
fn mult_base(a: &[i16], b: &[i16], c: &mut [i16], len: usize, n: usize) {
    for x in c[..2 * len - 1].iter_mut() {
        *x = 0;
    }
    let mut c_idx = 0;
    for k in 0..2 * len - 1 {
        let istart = (k + 1).saturating_sub(len);
        let iend = (k + 1).min(len);
        let mut ck: i16 = 0;
        for (&bi, &ai) in b[istart..iend]
            .iter()
            .zip(a[k + 1 - iend..=k - istart].iter().rev())
        {
            ck = ck.wrapping_add(bi.wrapping_mul(ai));
        }
        c[c_idx] = c[c_idx].wrapping_add(ck);
        c_idx += 1;
        if c_idx >= n {
            c_idx = 0;
        }
    }
}

/// Recursive Karatsuba split: multiply low and high halves plus the sum of
/// halves, then recombine `z0 + (z1-z0-z2)*x^half + z2*x^(2*half)` into the
/// cyclic index space.
fn mult_karatsuba(a: &[i16], b: &[i16], c: &mut [i16; INT_POLY_CAPACITY], len: usize, n: usize) {
    if len < KARATSUBA_THRESHOLD {
        mult_base(a, b, c, len, n);
        return;
    }

    let len2 = len / 2;
    let mut z0 = [0i16; INT_POLY_CAPACITY];
    let mut z1 = [0i16; INT_POLY_CAPACITY];
    let mut z2 = [0i16; INT_POLY_CAPACITY];

    mult_karatsuba(a, b, &mut z0, len2, n);
    mult_karatsuba(&a[len2..], &b[len2..], &mut z2, len - len2, n);

    let mut lh1 = [0i16; INT_POLY_CAPACITY];
    let mut lh2 = [0i16; INT_POLY_CAPACITY];
    for i in 0..len2 {
        lh1[i] = a[i].wrapping_add(a[len2 + i]);
        lh2[i] = b[i].wrapping_add(b[len2 + i]);
    }
    if len % 2 != 0 {
        lh1[len - len2 - 1] = a[len - 1];
        lh2[len - len2 - 1] = b[len - 1];
    }
    mult_karatsuba(&lh1, &lh2, &mut z1, len - len2, n);

    for i in 0..2 * len2 - 1 {
        z1[i] = z1[i].wrapping_sub(z0[i]);
    }
    z1[len] = 0;
    for i in 0..2 * (len - len2) - 1 {
        z1[i] = z1[i].wrapping_sub(z2[i]);
    }

    c.fill(0);
    c[..2 * len2 - 1].copy_from_slice(&z0[..2 * len2 - 1]);
    let mut c_idx = len2;
    for &z in z1[..2 * (len - len2) - 1].iter() {
        c[c_idx] = c[c_idx].wrapping_add(z);
        c_idx += 1;
        if c_idx >= n {
            c_idx = 0;
        }
    }
    let mut c_idx = 2 * len2;
    if c_idx >= n {
        c_idx = 0;
    }
    for &z in z2[..2 * (len - len2) - 1].iter() {
        c[c_idx] = c[c_idx].wrapping_add(z);
        c_idx += 1;
        if c_idx >= n {
            c_idx = 0;
        }
    }
}

impl IntPoly {
    /// Cyclic convolution of two dense polynomials, masked to `mod_mask`.
    pub fn mult_int(&self, other: &IntPoly, mod_mask: u16) -> Result<IntPoly> {
        let n = self.degree();
        if n != other.degree() {
            return Err(Error::DimensionMismatch {
                context: "mult_int",
                left: n,
                right: other.degree(),
            });
        }

        let mut c = IntPoly::zero(n)?;
        mult_karatsuba(
            &self.buffer()[..],
            &other.buffer()[..],
            c.buffer_mut(),
            n as usize,
            n as usize,
        );
        c.mod_mask(mod_mask);
        Ok(c)
    }

    /// Multiplication by a sparse ternary polynomial: one rotation of `self`
    /// added (for +1) or subtracted (for -1) per nonzero index.
    pub fn mult_tern(&self, other: &TernPoly, mod_mask: u16) -> Result<IntPoly> {
        let n = self.degree();
        if n != other.degree() {
            return Err(Error::DimensionMismatch {
                context: "mult_tern",
                left: n,
                right: other.degree(),
            });
        }
        let n = n as usize;

        let mut c = IntPoly::zero(self.degree())?;
        let a = self.buffer();
        let out = c.buffer_mut();

        for &k in other.ones() {
            let mut idx = k as usize;
            for &aj in &a[..n] {
                out[idx] = out[idx].wrapping_add(aj);
                idx += 1;
                if idx >= n {
                    idx = 0;
                }
            }
        }
        for &k in other.neg_ones() {
            let mut idx = k as usize;
            for &aj in &a[..n] {
                out[idx] = out[idx].wrapping_sub(aj);
                idx += 1;
                if idx >= n {
                    idx = 0;
                }
            }
        }

        c.mod_mask(mod_mask);
        Ok(c)
    }

    /// Multiplication by a product-form polynomial: `(self*f1)*f2 + self*f3`.
    pub fn mult_prod(&self, other: &ProdPoly, mod_mask: u16) -> Result<IntPoly> {
        if self.degree() != other.degree() {
            return Err(Error::DimensionMismatch {
                context: "mult_prod",
                left: self.degree(),
                right: other.degree(),
            });
        }

        let temp = self.mult_tern(other.f1(), mod_mask)?;
        let mut c = temp.mult_tern(other.f2(), mod_mask)?;
        let f3a = self.mult_tern(other.f3(), mod_mask)?;
        c.add_assign(&f3a)?;
        c.mod_mask(mod_mask);
        Ok(c)
    }

    /// Multiplication by a private polynomial, dispatching on its shape.
    pub fn mult_priv(&self, other: &PrivPoly, mod_mask: u16) -> Result<IntPoly> {
        match other {
            PrivPoly::Ternary(t) => self.mult_tern(t, mod_mask),
            PrivPoly::Product(p) => self.mult_prod(p, mod_mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_poly(rng: &mut StdRng, n: u16, q: u16) -> IntPoly {
        let coeffs: Vec<i16> = (0..n).map(|_| rng.gen_range(0..q as i16)).collect();
        IntPoly::from_coeffs(&coeffs).unwrap()
    }

    /// Reference cyclic convolution, quadratic and obviously correct.
    fn reference_mult(a: &IntPoly, b: &IntPoly, mod_mask: u16) -> IntPoly {
        let n = a.degree() as usize;
        let mut c = IntPoly::zero(a.degree()).unwrap();
        for k in 0..n {
            let mut ck: i16 = 0;
            for i in 0..n {
                let j = (k + n - i) % n;
                ck = ck.wrapping_add(a.coeffs()[i].wrapping_mul(b.coeffs()[j]));
            }
            c.coeffs_mut()[k] = ck;
        }
        c.mod_mask(mod_mask);
        c
    }

    #[test]
    fn identity_element() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in [11u16, 40, 131, 401] {
            let a = random_poly(&mut rng, n, 2048);
            let one = IntPoly::one(n).unwrap();
            let mut expected = a.clone();
            expected.mod_mask(2047);
            assert_eq!(a.mult_int(&one, 2047).unwrap(), expected);
        }
    }

    #[test]
    fn matches_reference_below_and_above_threshold() {
        let mut rng = StdRng::seed_from_u64(2);
        for n in [11u16, 39, 40, 41, 89, 197, 401] {
            let a = random_poly(&mut rng, n, 2048);
            let b = random_poly(&mut rng, n, 2048);
            let got = a.mult_int(&b, 2047).unwrap();
            let want = reference_mult(&a, &b, 2047);
            assert_eq!(got, want, "N = {}", n);
        }
    }

    #[test]
    fn commutativity() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in [31u16, 130, 467] {
            let a = random_poly(&mut rng, n, 2048);
            let b = random_poly(&mut rng, n, 2048);
            assert_eq!(
                a.mult_int(&b, 2047).unwrap(),
                b.mult_int(&a, 2047).unwrap()
            );
        }
    }

    #[test]
    fn ternary_consistency_with_dense() {
        let mut rng = StdRng::seed_from_u64(4);
        let n = 197u16;
        let a = random_poly(&mut rng, n, 2048);
        let t = crate::poly::sampling::rand_tern(n, 24, 23, &mut rng).unwrap();
        let sparse = a.mult_tern(&t, 2047).unwrap();
        let dense = a.mult_int(&t.to_int_poly().unwrap(), 2047).unwrap();
        assert_eq!(sparse, dense);
    }

    #[test]
    fn product_form_consistency_with_dense() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = 197u16;
        let a = random_poly(&mut rng, n, 2048);
        let p = crate::poly::sampling::rand_prod(n, 5, 4, 6, 5, &mut rng).unwrap();
        let via_prod = a.mult_prod(&p, 2047).unwrap();

        let dense = crate::poly::ternary::PrivPoly::Product(p)
            .to_int_poly(2047)
            .unwrap();
        let via_dense = a.mult_int(&dense, 2047).unwrap();
        assert_eq!(via_prod, via_dense);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let a = IntPoly::zero(11).unwrap();
        let b = IntPoly::zero(13).unwrap();
        assert!(matches!(
            a.mult_int(&b, 2047),
            Err(Error::DimensionMismatch { .. })
        ));

        let t = TernPoly::new(13, vec![1], vec![2]).unwrap();
        assert!(a.mult_tern(&t, 2047).is_err());
    }
}
