//! Public and private key records
//!
//! A public key is the ring degree, the modulus, and the dense polynomial
//! `h`; a private key is the degree, the modulus, and the sparse private
//! polynomial. Both serialize to self-describing byte records that carry
//! `N` and `q` in their header, so import needs no out-of-band parameter
//! set. Private keys additionally match themselves back to a catalog entry
//! via `(N, df)`.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::poly::polynomial::IntPoly;
use crate::poly::serialize::enc_len;
use crate::poly::ternary::{PrivPoly, ProdPoly, TernPoly};
use ntrupoly_params::{ParamSet, ALL_PARAM_SETS};

/// Flag bits of the private-key record: the low two bits mark the ternary
/// index encoding and must both be set, bit 2 marks product form.
const PRIV_FLAG_BASE: u8 = 3;
const PRIV_FLAG_PROD: u8 = 4;

/// A public key for the ring `Z[x]/(x^N - 1)` modulo `q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// Coefficient modulus, a power of two.
    pub q: u16,
    /// The public polynomial.
    pub h: IntPoly,
}

impl PublicKey {
    /// Serializes to big-endian `N`, big-endian `q`, then the dense
    /// `log2(q)`-bit packing of `h`.
    pub fn export(&self) -> Result<Vec<u8>> {
        let mut out = vec![0u8; 4];
        BigEndian::write_u16(&mut out[0..2], self.h.degree());
        BigEndian::write_u16(&mut out[2..4], self.q);
        out.extend_from_slice(&self.h.to_arr(self.q)?);
        Ok(out)
    }

    /// Parses a public key, returning it with the number of bytes consumed.
    pub fn import(bytes: &[u8]) -> Result<(PublicKey, usize)> {
        if bytes.len() < 4 {
            return Err(Error::Length {
                context: "import_pub",
                expected: 4,
                actual: bytes.len(),
            });
        }
        let n = BigEndian::read_u16(&bytes[0..2]);
        let q = BigEndian::read_u16(&bytes[2..4]);
        let h = IntPoly::from_arr(&bytes[4..], n, q)?;
        Ok((PublicKey { q, h }, 4 + enc_len(n, q)))
    }

    /// Exported length in bytes for a catalog entry.
    pub fn export_len(params: &ParamSet) -> usize {
        4 + enc_len(params.n, params.q)
    }
}

/// A private key: the sparse polynomial and the modulus it was generated
/// for. Dropping scrubs the index sets.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct PrivateKey {
    /// Coefficient modulus, a power of two.
    pub q: u16,
    /// The private polynomial.
    pub t: PrivPoly,
}

impl PrivateKey {
    /// Serializes to big-endian `N`, big-endian `q`, one flag byte, then
    /// the ternary encoding of the polynomial (three of them in product
    /// form).
    pub fn export(&self) -> Vec<u8> {
        let mut out = vec![0u8; 5];
        BigEndian::write_u16(&mut out[0..2], self.t.degree());
        BigEndian::write_u16(&mut out[2..4], self.q);
        out[4] = PRIV_FLAG_BASE
            | if self.t.is_product() {
                PRIV_FLAG_PROD
            } else {
                0
            };

        match &self.t {
            PrivPoly::Ternary(t) => out.extend_from_slice(&t.to_arr()),
            PrivPoly::Product(p) => {
                out.extend_from_slice(&p.f1().to_arr());
                out.extend_from_slice(&p.f2().to_arr());
                out.extend_from_slice(&p.f3().to_arr());
            }
        }
        out
    }

    /// Parses a private key, returning it with the number of bytes
    /// consumed. Rejects records whose flag byte announces an index
    /// encoding other than the one in use.
    pub fn import(bytes: &[u8]) -> Result<(PrivateKey, usize)> {
        if bytes.len() < 5 {
            return Err(Error::Length {
                context: "import_priv",
                expected: 5,
                actual: bytes.len(),
            });
        }
        let n = BigEndian::read_u16(&bytes[0..2]);
        let q = BigEndian::read_u16(&bytes[2..4]);
        let flags = bytes[4];
        if flags & PRIV_FLAG_BASE != PRIV_FLAG_BASE {
            return Err(Error::Encoding {
                context: "import_priv",
                details: "unsupported index encoding in flag byte",
            });
        }

        let mut pos = 5;
        let t = if flags & PRIV_FLAG_PROD != 0 {
            let (f1, used) = TernPoly::from_arr(&bytes[pos..], n)?;
            pos += used;
            let (f2, used) = TernPoly::from_arr(&bytes[pos..], n)?;
            pos += used;
            let (f3, used) = TernPoly::from_arr(&bytes[pos..], n)?;
            pos += used;
            PrivPoly::Product(ProdPoly::new(f1, f2, f3)?)
        } else {
            let (t, used) = TernPoly::from_arr(&bytes[pos..], n)?;
            pos += used;
            PrivPoly::Ternary(t)
        };

        Ok((PrivateKey { q, t }, pos))
    }

    /// Exported length in bytes for a catalog entry.
    pub fn export_len(params: &ParamSet) -> usize {
        if params.prod_flag {
            5 + TernPoly::enc_len(params.n, params.df1, params.df1)
                + TernPoly::enc_len(params.n, params.df2, params.df2)
                + TernPoly::enc_len(params.n, params.df3, params.df3)
        } else {
            5 + TernPoly::enc_len(params.n, params.df1, params.df1)
        }
    }

    /// Finds the catalog entry this key was generated under by matching
    /// the ring degree and the primary sparsity count. The key's shape is
    /// deliberately not part of the match: `(N, df)` identifies the entry
    /// on its own.
    pub fn params(&self) -> Result<&'static ParamSet> {
        let n = self.t.degree();
        let df = self.t.primary_df();
        ALL_PARAM_SETS
            .iter()
            .find(|p| p.n == n && p.df1 == df)
            .ok_or(Error::UnknownParameterSet { n, df })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::sampling::{rand_prod, rand_tern};
    use ntrupoly_params::{EES401EP1, EES401EP2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn public_key_round_trip() {
        let coeffs: Vec<i16> = (0..401).map(|i| (i * 13 + 7) % 2048).collect();
        let key = PublicKey {
            q: 2048,
            h: IntPoly::from_coeffs(&coeffs).unwrap(),
        };
        let arr = key.export().unwrap();
        assert_eq!(arr.len(), PublicKey::export_len(&EES401EP1));

        let (back, consumed) = PublicKey::import(&arr).unwrap();
        assert_eq!(consumed, arr.len());
        assert_eq!(back, key);
    }

    #[test]
    fn ternary_private_key_round_trip() {
        let mut rng = StdRng::seed_from_u64(21);
        let t = rand_tern(EES401EP1.n, EES401EP1.df1, EES401EP1.df1, &mut rng).unwrap();
        let key = PrivateKey {
            q: EES401EP1.q,
            t: PrivPoly::Ternary(t),
        };
        let arr = key.export();
        assert_eq!(arr.len(), PrivateKey::export_len(&EES401EP1));
        assert_eq!(arr[4], 3);

        let (back, consumed) = PrivateKey::import(&arr).unwrap();
        assert_eq!(consumed, arr.len());
        assert_eq!(back, key);
        assert_eq!(back.params().unwrap().name, EES401EP1.name);
    }

    #[test]
    fn product_private_key_round_trip() {
        let mut rng = StdRng::seed_from_u64(22);
        let p = rand_prod(
            EES401EP2.n,
            EES401EP2.df1,
            EES401EP2.df2,
            EES401EP2.df3,
            EES401EP2.df3,
            &mut rng,
        )
        .unwrap();
        let key = PrivateKey {
            q: EES401EP2.q,
            t: PrivPoly::Product(p),
        };
        let arr = key.export();
        assert_eq!(arr.len(), PrivateKey::export_len(&EES401EP2));
        assert_eq!(arr[4], 7);

        let (back, consumed) = PrivateKey::import(&arr).unwrap();
        assert_eq!(consumed, arr.len());
        assert_eq!(back, key);
        assert_eq!(back.params().unwrap().name, EES401EP2.name);
    }

    #[test]
    fn bad_flag_byte_is_rejected() {
        let mut rng = StdRng::seed_from_u64(23);
        let t = rand_tern(11, 3, 2, &mut rng).unwrap();
        let key = PrivateKey {
            q: 2048,
            t: PrivPoly::Ternary(t),
        };
        let mut arr = key.export();
        arr[4] = 1;
        assert!(matches!(
            PrivateKey::import(&arr),
            Err(Error::Encoding { .. })
        ));
    }

    #[test]
    fn params_match_on_degree_and_count_only() {
        // a plain-ternary key whose (N, df) lines up with a product-form
        // catalog entry still resolves to that entry
        let mut rng = StdRng::seed_from_u64(25);
        let t = rand_tern(EES401EP2.n, EES401EP2.df1, EES401EP2.df1, &mut rng).unwrap();
        let key = PrivateKey {
            q: EES401EP2.q,
            t: PrivPoly::Ternary(t),
        };
        assert_eq!(key.params().unwrap().name, EES401EP2.name);
    }

    #[test]
    fn unknown_parameters_are_reported() {
        let mut rng = StdRng::seed_from_u64(24);
        let t = rand_tern(11, 3, 2, &mut rng).unwrap();
        let key = PrivateKey {
            q: 2048,
            t: PrivPoly::Ternary(t),
        };
        assert_eq!(
            key.params(),
            Err(Error::UnknownParameterSet { n: 11, df: 3 })
        );
    }
}
