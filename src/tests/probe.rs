use std::hash::{Hash, Hasher};

use crate::{CustomHash, DefaultHashBuilder, HashState, combine, has_custom_hash};

/// Custom hash only.
struct Token(u32);

impl CustomHash for Token {
    fn hash_value(&self) -> u64 {
        u64::from(self.0) << 8
    }
}

/// Both `Hash` and `CustomHash`; the custom path must win.
#[derive(Hash)]
struct Both {
    payload: u64,
}

impl CustomHash for Both {
    fn hash_value(&self) -> u64 {
        0xC0FF_EE00
    }
}

/// Generic hash only.
#[derive(Hash)]
struct Plain(u64);

/// Neither.
#[allow(dead_code)]
struct Opaque;

#[test]
fn detects_custom_hash() {
    assert!(has_custom_hash!(Token));
    assert!(has_custom_hash!(Both));
}

#[test]
fn no_custom_hash_on_plain_types() {
    assert!(!has_custom_hash!(Plain));
    assert!(!has_custom_hash!(u64));
    assert!(!has_custom_hash!(str));
    assert!(!has_custom_hash!(String));
    assert!(!has_custom_hash!((u8, &str)));
}

/// Detection is binary and needs no generic fallback either.
#[test]
fn no_custom_hash_on_unhashable_types() {
    assert!(!has_custom_hash!(Opaque));
}

/// References and trait objects inherit the customization point.
#[test]
fn detection_through_references() {
    assert!(has_custom_hash!(&Token));
    assert!(has_custom_hash!(&&Both));
    assert!(has_custom_hash!(dyn CustomHash));
    assert!(!has_custom_hash!(&Plain));
}

/// A type implementing both is hashed through `CustomHash`.
#[test]
fn custom_overrides_generic() {
    let value = Both { payload: 17 };
    let custom = HashState::<DefaultHashBuilder>::new(0)
        .with_custom(&value)
        .digest();
    let generic = HashState::<DefaultHashBuilder>::new(0)
        .with(&value)
        .digest();

    assert_eq!(combine!(0, value), custom);
    assert_ne!(combine!(0, value), generic);
}

#[test]
fn custom_only_type_is_combinable() {
    let digest = combine!(3, Token(1), Token(2));
    let expected = HashState::<DefaultHashBuilder>::new(3)
        .mix_hash(1 << 8)
        .mix_hash(2 << 8)
        .digest();
    assert_eq!(digest, expected);
}

#[test]
fn reference_values_dispatch_like_owned() {
    let token = Token(9);
    let plain = Plain(9);
    assert_eq!(combine!(0, &token), combine!(0, token));
    assert_eq!(combine!(0, &plain), combine!(0, plain));
}

#[test]
fn trait_object_uses_custom_path() {
    let token = Token(4);
    let erased: &dyn CustomHash = &token;
    assert_eq!(combine!(0, erased), combine!(0, token));
}

/// In generic code only `T: Hash` is known, so the generic path is taken.
#[test]
fn generic_context_takes_generic_path() {
    fn digest_of<T: Hash>(value: &T) -> usize {
        combine!(0, *value)
    }

    let value = Both { payload: 17 };
    let generic = HashState::<DefaultHashBuilder>::new(0)
        .with(&value)
        .digest();
    assert_eq!(digest_of(&value), generic);
}

/// A custom hash may ignore fields that the generic hash would see.
#[test]
fn custom_hash_ignores_payload() {
    let a = Both { payload: 1 };
    let b = Both { payload: 2 };

    let mut ha = std::hash::DefaultHasher::new();
    a.hash(&mut ha);
    let mut hb = std::hash::DefaultHasher::new();
    b.hash(&mut hb);
    assert_ne!(ha.finish(), hb.finish());

    assert_eq!(combine!(0, a), combine!(0, b));
}
