//! Inversion of `1 + 3a` in `Z[x]/(x^N - 1)` modulo a power of two
//!
//! Two stages: an almost-inverse computation over GF(2) on bit-packed
//! coefficient vectors, then a Newton lift doubling the modulus precision
//! until it reaches `q`. Non-invertibility is an ordinary outcome during
//! key generation; callers resample and try again.

use core::mem;

use super::polynomial::IntPoly;
use super::ternary::PrivPoly;
use super::BITVEC_WORDS;
use crate::error::{Error, Result};

#[inline]
fn bit(words: &[u64], i: usize) -> u64 {
    (words[i / 64] >> (i % 64)) & 1
}

#[inline]
fn flip_bit(words: &mut [u64], i: usize) {
    words[i / 64] ^= 1u64 << (i % 64);
}

/// Degree of a bit-packed binary polynomial spanning `len` words.
fn deg(words: &[u64], len: usize) -> usize {
    let mut deg = 64 * len - 1;
    let mut len = len - 1;
    while len > 0 && words[len] == 0 {
        len -= 1;
        deg -= 64;
    }
    while deg > 0 && words[len] >> (deg % 64) == 0 {
        deg -= 1;
    }
    deg
}

fn xor_into(dst: &mut [u64], src: &[u64], len: usize) {
    for (d, s) in dst[..len].iter_mut().zip(&src[..len]) {
        *d ^= *s;
    }
}

/// Reduces a private polynomial mod 2 into a bit vector. The product form
/// expands `f1*f2` by XORing one bit per index pair, then folds in `f3`.
fn priv_to_mod2(a: &PrivPoly, out: &mut [u64; BITVEC_WORDS]) {
    out.fill(0);
    match a {
        PrivPoly::Ternary(t) => {
            for &i in t.ones().iter().chain(t.neg_ones()) {
                flip_bit(out, i as usize);
            }
        }
        PrivPoly::Product(p) => {
            let n = p.degree() as usize;
            for &i in p.f1().ones().iter().chain(p.f1().neg_ones()) {
                for &j in p.f2().ones().iter().chain(p.f2().neg_ones()) {
                    let mut bidx = i as usize + j as usize;
                    if bidx >= n {
                        bidx -= n;
                    }
                    flip_bit(out, bidx);
                }
            }
            for &i in p.f3().ones().iter().chain(p.f3().neg_ones()) {
                flip_bit(out, i as usize);
            }
        }
    }
}

/// Lifts an inverse of `1 + 3a` mod 2 to an inverse mod `q` by Newton
/// iteration, doubling precision per round.
fn lift_inverse(a: &PrivPoly, mut fq: IntPoly, q: u16) -> Result<IntPoly> {
    let mut v = 2u32;
    while v < q as u32 {
        v *= v;

        // temp = 2 - (1+3a)*Fq, then Fq = temp*Fq
        let mut temp = fq.mult_priv(a, q - 1)?;
        temp.mult_fac(3);
        temp.add_assign(&fq)?;
        temp.neg_mod(q);
        temp.add_constant(2);
        fq = temp.mult_int(&fq, q - 1)?;
    }
    Ok(fq)
}

/// Computes the inverse of `1 + 3a` modulo `q = mod_mask + 1`.
///
/// Almost-inverse over GF(2): maintain `f = 1 + a mod 2`, `g = x^N + 1`,
/// `b = 1`, `c = 0` with the invariant that `b` tracks the Bezout
/// coefficient of `f` up to a power of `x` counted in `k`. Returns
/// [`Error::NotInvertible`] when no inverse exists.
pub fn invert(a: &PrivPoly, mod_mask: u16) -> Result<IntPoly> {
    let n = a.degree() as usize;
    let n64 = (n + 1 + 63) / 64;
    let mut k = 0usize;

    let mut b = [0u64; BITVEC_WORDS];
    b[0] = 1;
    let mut c = [0u64; BITVEC_WORDS];

    // f = 3a + 1; the factor 3 vanishes mod 2
    let mut f = [0u64; BITVEC_WORDS];
    priv_to_mod2(a, &mut f);
    f[0] ^= 1;

    // g = x^N + 1
    let mut g = [0u64; BITVEC_WORDS];
    g[0] = 1;
    g[n / 64] |= 1u64 << (n % 64);

    let mut deg_f = deg(&f, n64);
    let mut deg_g = n;
    loop {
        let mut num_zeros = 0usize;
        while num_zeros <= n && bit(&f, num_zeros) == 0 {
            num_zeros += 1;
        }
        if num_zeros >= n {
            return Err(Error::NotInvertible);
        }
        k += num_zeros;

        // shift whole words first, then the remaining bits:
        // c gains the factor x^num_zeros that f loses
        if num_zeros >= 64 {
            let words = num_zeros / 64;
            c.copy_within(0..n64 - words, words);
            c[..words].fill(0);
            f.copy_within(words..n64, 0);
            f[n64 - words..n64].fill(0);
            deg_f -= words * 64;
            num_zeros %= 64;
        }
        if num_zeros > 0 {
            for i in (1..n64).rev() {
                c[i] = (c[i] << num_zeros) | (c[i - 1] >> (64 - num_zeros));
            }
            c[0] <<= num_zeros;
            for i in 1..n64 {
                f[i - 1] = (f[i - 1] >> num_zeros) | (f[i] << (64 - num_zeros));
            }
            f[n64 - 1] >>= num_zeros;
        }
        deg_f -= num_zeros;

        if deg_f == 0 && f[0] == 1 {
            break;
        }
        if deg_f < deg_g {
            mem::swap(&mut f, &mut g);
            mem::swap(&mut deg_f, &mut deg_g);
            mem::swap(&mut b, &mut c);
        }
        xor_into(&mut f, &g, n64);
        // the addition may have lowered deg(f)
        while deg_f > 0 && bit(&f, deg_f) == 0 {
            deg_f -= 1;
        }
        xor_into(&mut b, &c, n64);
    }

    if bit(&b, n) != 0 {
        return Err(Error::NotInvertible);
    }

    // Fq = x^(N-k) * b
    let mut fq = IntPoly::zero(a.degree())?;
    k %= n;
    {
        let coeffs = fq.coeffs_mut();
        for i in (0..n).rev() {
            let j = (i + n - k) % n;
            coeffs[j] = bit(&b, i) as i16;
        }
    }

    lift_inverse(a, fq, mod_mask + 1)
}
