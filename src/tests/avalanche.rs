//! Statistical mixing quality: flipping one input bit should flip about
//! half of the digest bits.

use crate::{FixedHasher, STATE_BITS, combine, combine_with};

/// Deterministic sample source (`SplitMix64`).
struct Samples(u64);

impl Samples {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

const SAMPLES: u32 = 2_000;

/// Mean number of flipped digest bits over `SAMPLES` single-bit flips.
fn mean_flipped_bits<F: Fn(u64) -> usize>(seed: u64, digest: F) -> f64 {
    let mut samples = Samples(seed);
    let mut total = 0_u64;
    for i in 0..SAMPLES {
        let value = samples.next();
        let flipped = value ^ (1 << (i % 64));
        total += u64::from((digest(value) ^ digest(flipped)).count_ones());
    }
    total as f64 / f64::from(SAMPLES)
}

fn assert_half(mean: f64) {
    let half = f64::from(STATE_BITS) / 2.0;
    let tolerance = f64::from(STATE_BITS) * 0.1;
    assert!(
        (mean - half).abs() < tolerance,
        "mean flipped bits {mean:.2}, expected ~{half}"
    );
}

#[test]
fn single_value() {
    assert_half(mean_flipped_bits(1, |v| combine!(0, v)));
}

#[test]
fn first_of_three_values() {
    assert_half(mean_flipped_bits(2, |v| combine!(0, v, "tail", 7_u32)));
}

#[test]
fn last_of_three_values() {
    assert_half(mean_flipped_bits(3, |v| combine!(0, "head", 7_u32, v)));
}

#[test]
fn fixed_hasher() {
    assert_half(mean_flipped_bits(4, |v| combine_with!(FixedHasher; 0, v)));
}

/// Every digest bit flips at least sometimes.
#[test]
fn no_stuck_output_bits() {
    let mut samples = Samples(5);
    let mut seen = 0_usize;
    for i in 0..256 {
        let value = samples.next();
        seen |= combine!(0, value) ^ combine!(0, value ^ (1 << (i % 64)));
    }
    assert_eq!(seen, usize::MAX);
}
