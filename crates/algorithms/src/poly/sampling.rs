//! Rejection sampling of sparse ternary polynomials
//!
//! Randomness is drawn in batches of 16-bit words; each word is shifted
//! down to the bit width of `N` and accepted when it lands in `[0, N)` on
//! an unoccupied position. The batch is sized for the requested weight plus
//! slack for a handful of rejections, so most calls touch the generator
//! once.

use rand::{CryptoRng, RngCore};

use super::ternary::{ProdPoly, TernPoly};
use super::num_bits;
use crate::error::{Error, Result};
use ntrupoly_params::MAX_DEGREE;

/// Extra 16-bit draws per batch beyond the requested weight, absorbing
/// occasional rejections without another generator call.
const BATCH_SLACK: usize = 10;

struct DrawBatch {
    buf: Vec<u8>,
    idx: usize,
}

impl DrawBatch {
    fn fill<R: RngCore + CryptoRng>(rng: &mut R, words: usize) -> Result<Self> {
        let mut buf = vec![0u8; words * 2];
        rng.try_fill_bytes(&mut buf)
            .map_err(|_| Error::RandomGeneration {
                context: "rand_tern",
            })?;
        Ok(Self { buf, idx: 0 })
    }

    /// Next 16-bit draw, little-endian, refilling the batch when drained.
    fn next<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<u16> {
        if self.idx >= self.buf.len() {
            self.idx = 0;
            rng.try_fill_bytes(&mut self.buf)
                .map_err(|_| Error::RandomGeneration {
                    context: "rand_tern",
                })?;
        }
        let r = u16::from_le_bytes([self.buf[self.idx], self.buf[self.idx + 1]]);
        self.idx += 2;
        Ok(r)
    }
}

/// Samples a uniform ternary polynomial of ring degree `n` with exactly
/// `num_ones` coefficients equal to +1 and `num_neg_ones` equal to -1, at
/// distinct positions.
pub fn rand_tern<R: RngCore + CryptoRng>(
    n: u16,
    num_ones: u16,
    num_neg_ones: u16,
    rng: &mut R,
) -> Result<TernPoly> {
    if n == 0 || (num_ones as usize + num_neg_ones as usize) > n as usize {
        return Err(Error::Parameter {
            name: "num_ones/num_neg_ones",
            reason: "requested weight exceeds ring degree",
        });
    }
    if (n as usize) > MAX_DEGREE {
        return Err(Error::Parameter {
            name: "n",
            reason: "ring degree exceeds supported maximum",
        });
    }

    let mut occupied = [false; MAX_DEGREE];
    let shift = 16 - num_bits(n) as u32;
    let mut batch = DrawBatch::fill(
        rng,
        num_ones as usize + num_neg_ones as usize + BATCH_SLACK,
    )?;

    let mut ones = Vec::with_capacity(num_ones as usize);
    while ones.len() < num_ones as usize {
        let r = batch.next(rng)? >> shift;
        if r < n && !occupied[r as usize] {
            occupied[r as usize] = true;
            ones.push(r);
        }
    }

    let mut neg_ones = Vec::with_capacity(num_neg_ones as usize);
    while neg_ones.len() < num_neg_ones as usize {
        let r = batch.next(rng)? >> shift;
        if r < n && !occupied[r as usize] {
            occupied[r as usize] = true;
            neg_ones.push(r);
        }
    }

    Ok(TernPoly::from_parts(n, ones, neg_ones))
}

/// Samples a product-form polynomial: `f1` and `f2` balanced with `df1`
/// resp. `df2` coefficients of each sign, `f3` with the given counts.
pub fn rand_prod<R: RngCore + CryptoRng>(
    n: u16,
    df1: u16,
    df2: u16,
    df3_ones: u16,
    df3_neg_ones: u16,
    rng: &mut R,
) -> Result<ProdPoly> {
    let f1 = rand_tern(n, df1, df1, rng)?;
    let f2 = rand_tern(n, df2, df2, rng)?;
    let f3 = rand_tern(n, df3_ones, df3_neg_ones, rng)?;
    ProdPoly::new(f1, f2, f3)
}
