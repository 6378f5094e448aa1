//! Capability probe: compile-time detection of a type's custom hash.
//!
//! A type opts into custom hashing by implementing [`CustomHash`]. The probe
//! detects that implementation without touching the type itself: method
//! resolution over a zero-sized [`Probe`] prefers an impl on the bare probe
//! (the custom path) and falls back to an impl on `&Probe` (the generic
//! path). The choice is made by the type checker, so no runtime inspection
//! and no runtime cost is involved.
//!
//! The dispatch is decided on the concrete type at the macro call site. In
//! generic code that only knows `T: Hash`, the generic path is taken.

use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;

use crate::hasher::hash_one;

/// Customization point: a type-supplied hash overriding the generic hasher.
///
/// ```
/// use hash_state::{CustomHash, combine, has_custom_hash};
///
/// struct Interned {
///     id: u32,
///     text: &'static str,
/// }
///
/// impl CustomHash for Interned {
///     fn hash_value(&self) -> u64 {
///         u64::from(self.id)
///     }
/// }
///
/// assert!(has_custom_hash!(Interned));
///
/// let a = Interned { id: 7, text: "seven" };
/// let b = Interned { id: 7, text: "SEVEN" };
/// assert_eq!(combine!(0, a), combine!(0, b));
/// # let _ = (a.text, b.text);
/// ```
pub trait CustomHash {
    /// Returns the 64-bit hash of `self`.
    fn hash_value(&self) -> u64;
}

impl<T: CustomHash + ?Sized> CustomHash for &T {
    #[inline]
    fn hash_value(&self) -> u64 {
        (**self).hash_value()
    }
}

// ---------------------------------------------------------------------------
// Value dispatch
// ---------------------------------------------------------------------------

/// Borrowed value awaiting per-type hasher selection.
#[doc(hidden)]
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Custom path, selected when `T: CustomHash`.
#[doc(hidden)]
pub trait CustomKind {
    /// Hashes the probed value.
    fn key_hash<S: BuildHasher + Default>(&self) -> u64;
}

impl<T: CustomHash + ?Sized> CustomKind for Probe<'_, T> {
    #[inline]
    fn key_hash<S: BuildHasher + Default>(&self) -> u64 {
        self.0.hash_value()
    }
}

/// Generic path, reached through one extra autoref when the custom path
/// does not apply.
#[doc(hidden)]
pub trait GenericKind {
    /// Hashes the probed value.
    fn key_hash<S: BuildHasher + Default>(&self) -> u64;
}

impl<T: Hash + ?Sized> GenericKind for &Probe<'_, T> {
    #[inline]
    fn key_hash<S: BuildHasher + Default>(&self) -> u64 {
        hash_one::<S, T>(self.0)
    }
}

// ---------------------------------------------------------------------------
// Type-level predicate
// ---------------------------------------------------------------------------

/// Zero-sized stand-in for `T` used by [`has_custom_hash!`](crate::has_custom_hash).
#[doc(hidden)]
pub struct TypeProbe<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> TypeProbe<T> {
    /// Creates the probe.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for TypeProbe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
pub trait DetectCustom {
    /// `true`: the probed type implements [`CustomHash`].
    fn has_custom_hash(&self) -> bool;
}

impl<T: CustomHash + ?Sized> DetectCustom for TypeProbe<T> {
    #[inline]
    fn has_custom_hash(&self) -> bool {
        true
    }
}

#[doc(hidden)]
pub trait DetectFallback {
    /// `false`: no [`CustomHash`] impl was found.
    fn has_custom_hash(&self) -> bool;
}

impl<T: ?Sized> DetectFallback for &TypeProbe<T> {
    #[inline]
    fn has_custom_hash(&self) -> bool {
        false
    }
}

/// Evaluates to `true` iff the named type implements [`CustomHash`].
///
/// ```
/// use hash_state::has_custom_hash;
///
/// assert!(!has_custom_hash!(u64));
/// assert!(!has_custom_hash!(str));
/// ```
#[macro_export]
macro_rules! has_custom_hash {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{DetectCustom as _, DetectFallback as _};
        (&$crate::probe::TypeProbe::<$t>::new()).has_custom_hash()
    }};
}
