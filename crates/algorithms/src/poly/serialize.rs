//! Bit-exact byte codecs for polynomials
//!
//! Dense polynomials pack each coefficient into `log2(q)` bits, least
//! significant bit first within a little-endian bit stream. Ternary
//! polynomials store their two index-set sizes as big-endian `u16`s
//! followed by the indices at `log2(N-1) + 1` bits each, packed the same
//! way. Both layouts are wire formats; changing a single bit here breaks
//! interoperability with existing key material.

use byteorder::{BigEndian, ByteOrder};

use super::polynomial::IntPoly;
use super::ternary::TernPoly;
use super::log2;
use crate::error::{Error, Result};
use ntrupoly_params::MAX_DEGREE;

/// Number of bytes a dense polynomial of degree `n` occupies when encoded
/// modulo `q`.
pub fn enc_len(n: u16, q: u16) -> usize {
    (n as usize * log2(q) as usize + 7) / 8
}

/// Bits per index in the ternary encoding for ring degree `n`.
fn bits_per_idx(n: u16) -> u32 {
    log2(n - 1) as u32 + 1
}

struct BitWriter {
    out: Vec<u8>,
    buf: u32,
    bits: u32,
}

impl BitWriter {
    fn with_capacity(bytes: usize) -> Self {
        Self {
            out: Vec::with_capacity(bytes),
            buf: 0,
            bits: 0,
        }
    }

    fn push(&mut self, value: u32, width: u32) {
        self.buf |= value << self.bits;
        self.bits += width;
        while self.bits >= 8 {
            self.out.push((self.buf & 0xFF) as u8);
            self.buf >>= 8;
            self.bits -= 8;
        }
    }

    fn finish(mut self) -> Vec<u8> {
        if self.bits > 0 {
            self.out.push((self.buf & 0xFF) as u8);
        }
        self.out
    }
}

struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    buf: u32,
    bits: u32,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            buf: 0,
            bits: 0,
        }
    }

    fn pull(&mut self, width: u32) -> u32 {
        while self.bits < width {
            self.buf |= (self.bytes[self.pos] as u32) << self.bits;
            self.pos += 1;
            self.bits += 8;
        }
        let value = self.buf & ((1u32 << width) - 1);
        self.buf >>= width;
        self.bits -= width;
        value
    }
}

fn check_modulus(q: u16) -> Result<()> {
    if q < 4 || !q.is_power_of_two() {
        return Err(Error::Parameter {
            name: "q",
            reason: "modulus must be a power of two, at least 4",
        });
    }
    Ok(())
}

impl IntPoly {
    /// Encodes the coefficients modulo `q` into `log2(q)` bits each.
    pub fn to_arr(&self, q: u16) -> Result<Vec<u8>> {
        check_modulus(q)?;
        let log_q = log2(q) as u32;
        let mask = (q - 1) as u32;
        let mut w = BitWriter::with_capacity(enc_len(self.degree(), q));
        for &c in self.coeffs() {
            w.push(c as u16 as u32 & mask, log_q);
        }
        Ok(w.finish())
    }

    /// Decodes a polynomial of degree `n` from its `log2(q)`-bit packing.
    /// Accepts trailing bytes so key parsers can pass a whole record.
    pub fn from_arr(bytes: &[u8], n: u16, q: u16) -> Result<IntPoly> {
        check_modulus(q)?;
        let expected = enc_len(n, q);
        if bytes.len() < expected {
            return Err(Error::Length {
                context: "from_arr",
                expected,
                actual: bytes.len(),
            });
        }
        let log_q = log2(q) as u32;
        let mut r = BitReader::new(bytes);
        let mut poly = IntPoly::zero(n)?;
        for c in poly.coeffs_mut() {
            *c = r.pull(log_q) as i16;
        }
        Ok(poly)
    }

    /// Encodes the coefficients modulo 4 into two bits each.
    pub fn to_arr4(&self) -> Vec<u8> {
        let mut w = BitWriter::with_capacity((self.degree() as usize * 2 + 7) / 8);
        for &c in self.coeffs() {
            w.push(c as u16 as u32 & 3, 2);
        }
        w.finish()
    }

    /// Decodes a polynomial of degree `n` from its two-bit packing.
    pub fn from_arr4(bytes: &[u8], n: u16) -> Result<IntPoly> {
        let expected = (n as usize * 2 + 7) / 8;
        if bytes.len() < expected {
            return Err(Error::Length {
                context: "from_arr4",
                expected,
                actual: bytes.len(),
            });
        }
        let mut r = BitReader::new(bytes);
        let mut poly = IntPoly::zero(n)?;
        for c in poly.coeffs_mut() {
            *c = r.pull(2) as i16;
        }
        Ok(poly)
    }
}

impl TernPoly {
    /// Number of bytes the ternary encoding occupies for the given counts.
    pub fn enc_len(n: u16, num_ones: u16, num_neg_ones: u16) -> usize {
        let idx_bits = bits_per_idx(n) as usize * (num_ones + num_neg_ones) as usize;
        4 + (idx_bits + 7) / 8
    }

    /// Encodes the index sets: two big-endian counts, then all indices at
    /// `log2(N-1) + 1` bits each, ones first.
    pub fn to_arr(&self) -> Vec<u8> {
        let mut out = vec![0u8; 4];
        BigEndian::write_u16(&mut out[0..2], self.num_ones());
        BigEndian::write_u16(&mut out[2..4], self.num_neg_ones());

        let width = bits_per_idx(self.degree());
        let mut w = BitWriter::with_capacity(
            Self::enc_len(self.degree(), self.num_ones(), self.num_neg_ones()) - 4,
        );
        for &idx in self.ones().iter().chain(self.neg_ones()) {
            w.push(idx as u32, width);
        }
        out.extend_from_slice(&w.finish());
        out
    }

    /// Decodes a ternary polynomial of ring degree `n`, returning it along
    /// with the number of bytes consumed.
    pub fn from_arr(bytes: &[u8], n: u16) -> Result<(TernPoly, usize)> {
        if n < 2 || n as usize > MAX_DEGREE {
            return Err(Error::Parameter {
                name: "n",
                reason: "ring degree must be in [2, MAX_DEGREE]",
            });
        }
        if bytes.len() < 4 {
            return Err(Error::Length {
                context: "tern_from_arr",
                expected: 4,
                actual: bytes.len(),
            });
        }
        let num_ones = BigEndian::read_u16(&bytes[0..2]);
        let num_neg_ones = BigEndian::read_u16(&bytes[2..4]);
        if (num_ones as usize + num_neg_ones as usize) > n as usize {
            return Err(Error::Encoding {
                context: "tern_from_arr",
                details: "index counts exceed ring degree",
            });
        }

        let consumed = Self::enc_len(n, num_ones, num_neg_ones);
        if bytes.len() < consumed {
            return Err(Error::Length {
                context: "tern_from_arr",
                expected: consumed,
                actual: bytes.len(),
            });
        }

        let width = bits_per_idx(n);
        let mut r = BitReader::new(&bytes[4..]);
        let mut occupied = [false; MAX_DEGREE];
        let mut read_set = |count: u16| -> Result<Vec<u16>> {
            let mut set = Vec::with_capacity(count as usize);
            for _ in 0..count {
                let idx = r.pull(width) as u16;
                if idx >= n {
                    return Err(Error::Encoding {
                        context: "tern_from_arr",
                        details: "index out of ring range",
                    });
                }
                if occupied[idx as usize] {
                    return Err(Error::Encoding {
                        context: "tern_from_arr",
                        details: "duplicate index",
                    });
                }
                occupied[idx as usize] = true;
                set.push(idx);
            }
            Ok(set)
        };
        let ones = read_set(num_ones)?;
        let neg_ones = read_set(num_neg_ones)?;

        Ok((TernPoly::from_parts(n, ones, neg_ones), consumed))
    }
}
