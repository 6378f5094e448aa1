//! Mixer: one avalanche step folding a new input into the running state.
//!
//! Two independently tuned variants:
//!
//! - [`mix32`]: the Murmur3-32 block step
//! - [`mix64`]: the `MurmurHash64A` block step
//!
//! [`mix`] is bound to the variant matching the native pointer width at
//! compile time. All arithmetic wraps.

/// First Murmur3-32 key multiplier.
pub const C1_32: u32 = 0xcc9e_2d51;

/// Second Murmur3-32 key multiplier.
pub const C2_32: u32 = 0x1b87_3593;

/// `MurmurHash64A` multiplier.
pub const M_64: u64 = 0xc6a4_a793_5bd1_e995;

/// `MurmurHash64A` shift.
pub const R_64: u32 = 47;

/// Additive constant of the final 32-bit step. Keeps the zero state from
/// mapping to itself.
pub const ZERO_GUARD_32: u32 = 0xe654_6b64;

/// Additive constant of the final 64-bit step.
pub const ZERO_GUARD_64: u64 = 0xe654_6b64;

/// Murmur3-32 step: folds a 32-bit key `k` into state `h`.
#[must_use]
#[inline]
pub const fn mix32(mut h: u32, mut k: u32) -> u32 {
    k = k.wrapping_mul(C1_32);
    k = k.rotate_left(15);
    k = k.wrapping_mul(C2_32);

    h ^= k;
    h = h.rotate_left(13);
    h.wrapping_mul(5).wrapping_add(ZERO_GUARD_32)
}

/// `MurmurHash64A` step: folds a 64-bit key `k` into state `h`.
#[must_use]
#[inline]
pub const fn mix64(mut h: u64, mut k: u64) -> u64 {
    k = k.wrapping_mul(M_64);
    k ^= k >> R_64;
    k = k.wrapping_mul(M_64);

    h ^= k;
    h = h.wrapping_mul(M_64);
    h.wrapping_add(ZERO_GUARD_64)
}

/// Folds a native-width key into a native-width state.
#[cfg(target_pointer_width = "64")]
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn mix(state: usize, key: usize) -> usize {
    mix64(state as u64, key as u64) as usize
}

/// Folds a native-width key into a native-width state.
#[cfg(target_pointer_width = "32")]
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn mix(state: usize, key: usize) -> usize {
    mix32(state as u32, key as u32) as usize
}
