//! Generic per-type hashers.
//!
//! Any `BuildHasher + Default` can serve as the generic hasher of a
//! [`HashState`](crate::HashState). Two fixed, deterministic builders are
//! provided; [`DefaultHashBuilder`] names the one used when none is given.

use core::hash::{BuildHasher, Hash};

use foldhash::fast::{FixedState, FoldHasher};

/// Seed of [`FixedHasher`] (golden ratio constant).
const FIXED_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic foldhash builder with a fixed seed.
///
/// Zero-sized; every instance produces identical hashes, across runs as well.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedHasher;

impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        FixedState::with_seed(FIXED_SEED).build_hasher()
    }
}

/// std `SipHash` with the fixed all-zero key (`DefaultHasher::new()`).
#[cfg(feature = "std")]
pub type SipHashBuilder = core::hash::BuildHasherDefault<std::hash::DefaultHasher>;

/// The generic hasher used by [`combine!`](crate::combine) and by
/// `HashState` when no hasher is named.
#[cfg(feature = "std")]
pub type DefaultHashBuilder = SipHashBuilder;

/// The generic hasher used by [`combine!`](crate::combine) and by
/// `HashState` when no hasher is named.
#[cfg(not(feature = "std"))]
pub type DefaultHashBuilder = FixedHasher;

/// Computes the 64-bit hash of a value with a fresh `S`.
#[must_use]
#[inline]
pub fn hash_one<S, T>(value: &T) -> u64
where
    S: BuildHasher + Default,
    T: Hash + ?Sized,
{
    S::default().hash_one(value)
}
