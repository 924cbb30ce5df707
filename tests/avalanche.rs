//! Statistical avalanche regression guard: flipping a single input bit
//! should flip around half of the output bits. Not a cryptographic proof,
//! just a cheap way to catch a broken round function.

use hash_core::crypto::keccak::sha3_256;
use hash_core::crypto::sha1::sha1;
use hash_core::rand::{Rng32, XorShift32};

const SEED: u32 = 0x1B29_A2C5;
const SAMPLES: usize = 64;

fn differing_bits(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

/// For each sample: hash a random message, flip one random bit, hash again,
/// and record the fraction of digest bits that changed
fn avalanche_fractions(hash: impl Fn(&[u8]) -> Vec<u8>, digest_bits: u32) -> Vec<f64> {
    let mut rng = XorShift32::from_seed(SEED);
    let mut fractions = Vec::with_capacity(SAMPLES);

    for _ in 0..SAMPLES {
        let len = 1 + (rng.gen() % 256) as usize;
        let mut message = rng.gen_bytes(len);
        let bit = rng.gen() as usize % (len * 8);

        let before = hash(&message);
        message[bit / 8] ^= 1 << (bit % 8);
        let after = hash(&message);

        fractions.push(f64::from(differing_bits(&before, &after)) / f64::from(digest_bits));
    }

    fractions
}

fn assert_avalanche(fractions: &[f64]) {
    for &fraction in fractions {
        assert!(
            (0.30..=0.70).contains(&fraction),
            "single sample fell outside the avalanche band: {fraction}"
        );
    }

    let mean = fractions.iter().sum::<f64>() / fractions.len() as f64;
    assert!(
        (0.45..=0.55).contains(&mean),
        "mean fraction of flipped bits strayed from one half: {mean}"
    );
}

#[test]
fn test_sha1_avalanche() {
    assert_avalanche(&avalanche_fractions(|m| sha1(m).as_ref().to_vec(), 160));
}

#[test]
fn test_sha3_256_avalanche() {
    assert_avalanche(&avalanche_fractions(|m| sha3_256(m).as_ref().to_vec(), 256));
}
