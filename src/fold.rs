//! Word folding: reduce a 64-bit intermediate hash to the native state width.
//!
//! On 32-bit targets the high half is XOR-ed into the low half so that both
//! halves contribute; on 64-bit targets folding is the identity.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("hash-state supports only 32-bit and 64-bit targets");

/// Width of the native hash state in bits.
pub const STATE_BITS: u32 = usize::BITS;

/// Folds a 64-bit value into 32 bits: `low32(a) ⊕ high32(a)`.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fold32(a: u64) -> u32 {
    (a ^ (a >> 32)) as u32
}

/// Folds a 64-bit value into 64 bits (identity).
#[must_use]
#[inline]
pub const fn fold64(a: u64) -> u64 {
    a
}

/// Folds a 64-bit value into the native state width.
#[cfg(target_pointer_width = "64")]
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn fold_to_native(a: u64) -> usize {
    fold64(a) as usize
}

/// Folds a 64-bit value into the native state width.
#[cfg(target_pointer_width = "32")]
#[must_use]
#[inline]
pub const fn fold_to_native(a: u64) -> usize {
    fold32(a) as usize
}
