//! `HashState`: the native-width accumulator and its fold steps.

use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};
use core::marker::PhantomData;

use crate::fold::fold_to_native;
use crate::hasher::{DefaultHashBuilder, hash_one};
use crate::mix::mix;
use crate::probe::CustomHash;

/// Running hash state of a combination.
///
/// A plain `usize` at runtime; `S` only selects the generic hasher applied to
/// `Hash` values and is never stored. Each fold step consumes the state and
/// returns the next one:
///
/// ```
/// use hash_state::HashState;
///
/// let digest = HashState::<hash_state::FixedHasher>::new(0)
///     .with("Ada")
///     .with("Lovelace")
///     .with(&1815_u16)
///     .digest();
/// # let _ = digest;
/// ```
///
/// [`combine!`](crate::combine) performs the same left fold but also honors
/// [`CustomHash`] on each value.
pub struct HashState<S = DefaultHashBuilder> {
    state: usize,
    hasher: PhantomData<fn() -> S>,
}

// ---------------------------------------------------------------------------
// Fold steps (no bounds on S)
// ---------------------------------------------------------------------------

impl<S> HashState<S> {
    /// Starts a combination from `seed`.
    #[must_use]
    pub const fn new(seed: usize) -> Self {
        Self {
            state: seed,
            hasher: PhantomData,
        }
    }

    /// Returns the accumulated digest.
    #[must_use]
    pub const fn digest(self) -> usize {
        self.state
    }

    /// Folds a pre-computed 64-bit hash into the state.
    ///
    /// The hash is reduced to native width first, then mixed.
    #[must_use]
    #[inline]
    pub const fn mix_hash(self, hash: u64) -> Self {
        Self::new(mix(self.state, fold_to_native(hash)))
    }

    /// Folds a value through its [`CustomHash`] implementation.
    #[must_use]
    #[inline]
    pub fn with_custom<T: CustomHash + ?Sized>(self, value: &T) -> Self {
        self.mix_hash(value.hash_value())
    }
}

impl<S: BuildHasher + Default> HashState<S> {
    /// Folds a value through the generic hasher `S`.
    #[must_use]
    #[inline]
    pub fn with<T: Hash + ?Sized>(self, value: &T) -> Self {
        self.mix_hash(hash_one::<S, T>(value))
    }

    /// Folds every item of `values`, in iteration order, into `seed`.
    ///
    /// An empty iterator yields `seed` unchanged.
    #[must_use]
    pub fn combine_iter<I>(seed: usize, values: I) -> usize
    where
        I: IntoIterator,
        I::Item: Hash,
    {
        values
            .into_iter()
            .fold(Self::new(seed), |state, value| state.with(&value))
            .digest()
    }
}

// ---------------------------------------------------------------------------
// Std traits, implemented by hand so that S carries no bounds
// ---------------------------------------------------------------------------

impl<S> Clone for HashState<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for HashState<S> {}

impl<S> Default for HashState<S> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S> PartialEq for HashState<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S> Eq for HashState<S> {}

impl<S> fmt::Debug for HashState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashState")
            .field(&format_args!("{:#x}", self.state))
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Hasher adapter
// ---------------------------------------------------------------------------

/// Every integer is widened to `u64` and folded with one mix step, so the
/// digest does not depend on the target's byte order. Byte slices are
/// folded as 8-byte little-endian words, a short tail zero-padded, followed
/// by the slice length. `S` plays no part here.
impl<S> Hasher for HashState<S> {
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(8);
        for chunk in &mut chunks {
            let mut word = [0_u8; 8];
            word.copy_from_slice(chunk);
            self.write_u64(u64::from_le_bytes(word));
        }
        let tail = chunks.remainder();
        if !tail.is_empty() {
            let mut word = [0_u8; 8];
            word[..tail.len()].copy_from_slice(tail);
            self.write_u64(u64::from_le_bytes(word));
        }
        self.write_usize(bytes.len());
    }

    fn write_u8(&mut self, i: u8) {
        self.write_u64(u64::from(i));
    }

    fn write_u16(&mut self, i: u16) {
        self.write_u64(u64::from(i));
    }

    fn write_u32(&mut self, i: u32) {
        self.write_u64(u64::from(i));
    }

    fn write_u64(&mut self, i: u64) {
        *self = self.mix_hash(i);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_u128(&mut self, i: u128) {
        let low = i as u64;
        let high = (i >> 64) as u64;
        self.write_u64(low);
        self.write_u64(high);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn finish(&self) -> u64 {
        self.state as u64
    }
}

/// `BuildHasher` producing [`HashState`] hashers that start from `seed`.
///
/// Lets std containers key on the combinator directly:
///
/// ```
/// use std::collections::HashMap;
/// use hash_state::BuildHashState;
///
/// let mut ages: HashMap<&str, u32, BuildHashState> = HashMap::with_hasher(BuildHashState::new(17));
/// ages.insert("ada", 36);
/// assert_eq!(ages.get("ada"), Some(&36));
/// ```
///
/// Values reach the state through `Hasher` writes only, so no generic
/// hasher is involved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildHashState {
    seed: usize,
}

impl BuildHashState {
    /// Creates a builder whose hashers start from `seed`.
    #[must_use]
    pub const fn new(seed: usize) -> Self {
        Self { seed }
    }

    /// Returns the seed every produced hasher starts from.
    #[must_use]
    pub const fn seed(&self) -> usize {
        self.seed
    }
}

impl BuildHasher for BuildHashState {
    type Hasher = HashState;

    fn build_hasher(&self) -> Self::Hasher {
        HashState::new(self.seed)
    }
}
