//! Composable hash-state combinator.
//!
//! Folds an ordered, heterogeneous list of values into one native-width
//! digest, suitable as the key hash of a hash-based container. Typical use
//! is hashing a composite key without writing a mixing function by hand:
//!
//! ```
//! use std::hash::{Hash, Hasher};
//!
//! use hash_state::combine;
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//!     age: u32,
//! }
//!
//! impl Hash for Person {
//!     fn hash<H: Hasher>(&self, state: &mut H) {
//!         state.write_usize(combine!(0, self.first_name, self.last_name, self.age));
//!     }
//! }
//! ```
//!
//! # Layers
//!
//! - **Word folding** ([`fold`]): 64-bit intermediate → native width
//! - **Mixing** ([`mix`]): Murmur3-32 step on 32-bit targets,
//!   `MurmurHash64A` step on 64-bit targets, chosen at compile time
//! - **Capability probe** ([`probe`]): a type implementing [`CustomHash`]
//!   is hashed through it instead of the generic hasher
//! - **Combination** ([`combine!`], [`HashState`]): one fold step per value,
//!   strictly in argument order
//!
//! The digest is deterministic for a fixed seed and input, across runs,
//! but differs between 32-bit and 64-bit targets. It is not a
//! cryptographic hash.
//!
//! A value whose type implements neither `Hash` nor [`CustomHash`] is
//! rejected at compile time:
//!
//! ```compile_fail
//! struct Opaque;
//!
//! let _ = hash_state::combine!(0, Opaque);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod fold;
pub mod hasher;
pub mod mix;
pub mod probe;

mod state;

#[cfg(test)]
mod tests;

pub use fold::STATE_BITS;
pub use hasher::{DefaultHashBuilder, FixedHasher};
pub use probe::CustomHash;
pub use state::{BuildHashState, HashState};

#[cfg(feature = "std")]
pub use hasher::SipHashBuilder;

/// Combines a seed and a sequence of values into one digest.
///
/// `combine!(seed, v1, v2, ..., vn)` folds each value, left to right, into
/// `seed` and returns the resulting `usize`. Each value is hashed through
/// its [`CustomHash`] implementation when its type has one, and through
/// [`DefaultHashBuilder`] otherwise. Values are borrowed, never moved.
///
/// ```
/// use hash_state::combine;
///
/// let seed = 0x5eed;
/// assert_eq!(combine!(seed), seed);
/// assert_eq!(combine!(seed, "id", 42_u32), combine!(seed, "id", 42_u32));
/// assert_ne!(combine!(seed, 1_u8, 2_u8), combine!(seed, 2_u8, 1_u8));
/// ```
#[macro_export]
macro_rules! combine {
    ($seed:expr $(, $value:expr)* $(,)?) => {
        $crate::combine_with!($crate::DefaultHashBuilder; $seed $(, $value)*)
    };
}

/// [`combine!`] with an explicit generic hasher.
///
/// The hasher must be `BuildHasher + Default`; it is only consulted for
/// values without a [`CustomHash`] implementation.
///
/// ```
/// use hash_state::{FixedHasher, combine_with};
///
/// let digest = combine_with!(FixedHasher; 0, "x", 1.5_f64.to_bits());
/// assert_eq!(digest, combine_with!(FixedHasher; 0, "x", 1.5_f64.to_bits()));
/// ```
#[macro_export]
macro_rules! combine_with {
    ($hasher:ty; $seed:expr $(, $value:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{CustomKind as _, GenericKind as _};
        let state = $crate::HashState::<$hasher>::new($seed);
        $(
            let state = state.mix_hash((&$crate::probe::Probe(&$value)).key_hash::<$hasher>());
        )*
        state.digest()
    }};
}
