//! Tests for the `digest` trait integration.
#![cfg(feature = "digest-trait")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon::digest::{Digest, ExtendableOutput, Update, XofReader};
use ascon::{AsconHash256, AsconXof128};

// Helper kept generic so the hasher is exercised exactly as downstream
// generic code would use it.
fn hash_generic<D: Digest>(input: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(input);
    hasher.finalize().to_vec()
}

#[test]
fn test_digest_trait_matches_native_api() {
    let expected = ascon::hash256(b"generic consumers");
    let via_trait = hash_generic::<AsconHash256>(b"generic consumers");

    assert_eq!(via_trait.as_slice(), expected.as_slice());
}

#[test]
fn test_digest_reset_via_trait() {
    let mut hasher = AsconHash256::new();
    Update::update(&mut hasher, b"thrown away");
    Digest::reset(&mut hasher);
    Update::update(&mut hasher, b"kept");

    let out = Digest::finalize(hasher);
    assert_eq!(out.as_slice(), ascon::hash256(b"kept").as_slice());
}

#[test]
fn test_extendable_output_matches_native_api() {
    let mut expected = [0u8; 80];
    ascon::xof128(b"xof through traits", &mut expected);

    let mut xof = AsconXof128::default();
    Update::update(&mut xof, b"xof through traits");
    let mut reader = xof.finalize_xof();

    let mut out = [0u8; 80];
    reader.read(&mut out[..13]);
    reader.read(&mut out[13..]);

    assert_eq!(out, expected);
}
