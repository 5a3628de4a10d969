//! Statistical sanity checks on the AES engines
//!
//! A single flipped input bit should flip close to half of the 128 output
//! bits on average. This is a coarse diffusion check, not a randomness test;
//! the tolerance is wide enough that a correct implementation passes with
//! overwhelming probability while a broken round function fails decisively.

use blockcrypt_api::CipherParameters;
use blockcrypt_tests::all_engines;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TRIALS: usize = 1000;

fn hamming_distance(a: &[u8; 16], b: &[u8; 16]) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

#[test]
fn single_bit_flip_avalanches() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xb10c);

    for (name, mut engine) in all_engines() {
        let mut key = [0u8; 16];
        rng.fill(&mut key);
        engine.init(true, CipherParameters::Key(&key)).unwrap();

        let mut flipped_bits_total = 0u64;
        for _ in 0..TRIALS {
            let mut block = [0u8; 16];
            rng.fill(&mut block);

            let mut baseline = [0u8; 16];
            engine.process_block(&block, 0, &mut baseline, 0).unwrap();

            // Flip one random input bit
            let bit = rng.gen_range(0..128);
            block[bit / 8] ^= 1 << (bit % 8);

            let mut perturbed = [0u8; 16];
            engine.process_block(&block, 0, &mut perturbed, 0).unwrap();

            flipped_bits_total += u64::from(hamming_distance(&baseline, &perturbed));
        }

        // Expected mean is 64 bits; per-trial stddev is under 6 bits, so
        // the mean over 1000 trials sits within a fraction of a bit.
        let mean = flipped_bits_total as f64 / TRIALS as f64;
        assert!(
            (56.0..=72.0).contains(&mean),
            "{}: poor diffusion, mean {} bits flipped",
            name,
            mean
        );
    }
}

#[test]
fn key_bit_flip_avalanches() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for (name, mut engine) in all_engines() {
        let mut flipped_bits_total = 0u64;
        for _ in 0..TRIALS {
            let mut key = [0u8; 32];
            rng.fill(&mut key);
            let mut block = [0u8; 16];
            rng.fill(&mut block);

            engine.init(true, CipherParameters::Key(&key)).unwrap();
            let mut baseline = [0u8; 16];
            engine.process_block(&block, 0, &mut baseline, 0).unwrap();

            let bit = rng.gen_range(0..256);
            key[bit / 8] ^= 1 << (bit % 8);

            engine.init(true, CipherParameters::Key(&key)).unwrap();
            let mut perturbed = [0u8; 16];
            engine.process_block(&block, 0, &mut perturbed, 0).unwrap();

            flipped_bits_total += u64::from(hamming_distance(&baseline, &perturbed));
        }

        let mean = flipped_bits_total as f64 / TRIALS as f64;
        assert!(
            (56.0..=72.0).contains(&mean),
            "{}: poor key diffusion, mean {} bits flipped",
            name,
            mean
        );
    }
}
