//! End-to-end exercise of the engine through the facade: sample a private
//! polynomial, invert it, derive a public polynomial, and round-trip both
//! key records through their wire encodings.

use ntrupoly::params::{EES401EP1, EES401EP2};
use ntrupoly::prelude::*;
use ntrupoly::{PrivateKey, PublicKey};
use rand_chacha::ChaCha20Rng;
use rand::SeedableRng;

fn generate(params: &'static ntrupoly::params::ParamSet, rng: &mut ChaCha20Rng) -> (PrivateKey, PublicKey) {
    let mod_mask = params.q - 1;
    loop {
        let t = if params.prod_flag {
            PrivPoly::Product(
                rand_prod(
                    params.n,
                    params.df1,
                    params.df2,
                    params.df3,
                    params.df3,
                    rng,
                )
                .unwrap(),
            )
        } else {
            PrivPoly::Ternary(rand_tern(params.n, params.df1, params.df1, rng).unwrap())
        };
        match invert(&t, mod_mask) {
            Ok(fq) => {
                // h = Fq * g for some sampled g; any dense polynomial works
                // to exercise the codec, so reuse Fq itself
                let g = rand_tern(params.n, params.n / 3, params.n / 3, rng)
                    .unwrap()
                    .to_int_poly()
                    .unwrap();
                let h = fq.mult_int(&g, mod_mask).unwrap();
                return (
                    PrivateKey { q: params.q, t },
                    PublicKey { q: params.q, h },
                );
            }
            Err(Error::NotInvertible) => continue,
            Err(e) => panic!("inversion failed: {}", e),
        }
    }
}

#[test]
fn plain_ternary_key_life_cycle() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let (priv_key, pub_key) = generate(&EES401EP1, &mut rng);

    assert_eq!(priv_key.params().unwrap().name, "EES401EP1");

    let priv_arr = priv_key.export();
    let (priv_back, used) = PrivateKey::import(&priv_arr).unwrap();
    assert_eq!(used, priv_arr.len());
    assert_eq!(priv_back, priv_key);

    let pub_arr = pub_key.export().unwrap();
    let (pub_back, used) = PublicKey::import(&pub_arr).unwrap();
    assert_eq!(used, pub_arr.len());
    assert_eq!(pub_back, pub_key);
}

#[test]
fn product_form_key_life_cycle() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let (priv_key, _pub_key) = generate(&EES401EP2, &mut rng);

    assert_eq!(priv_key.params().unwrap().name, "EES401EP2");

    let arr = priv_key.export();
    let (back, used) = PrivateKey::import(&arr).unwrap();
    assert_eq!(used, arr.len());
    assert_eq!(back, priv_key);
    assert!(back.t.is_product());
}

#[test]
fn inverse_verifies_against_multiplication() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let params = &EES401EP1;
    let mod_mask = params.q - 1;

    loop {
        let t = PrivPoly::Ternary(rand_tern(params.n, params.df1, params.df1, &mut rng).unwrap());
        match invert(&t, mod_mask) {
            Ok(fq) => {
                let mut one_plus_3a = t.to_int_poly(mod_mask).unwrap();
                one_plus_3a.mult_fac(3);
                let one = IntPoly::one(params.n).unwrap();
                one_plus_3a.add_assign(&one).unwrap();
                one_plus_3a.mod_mask(mod_mask);

                let product = one_plus_3a.mult_int(&fq, mod_mask).unwrap();
                assert!(product.equals_one());
                return;
            }
            Err(Error::NotInvertible) => continue,
            Err(e) => panic!("inversion failed: {}", e),
        }
    }
}
