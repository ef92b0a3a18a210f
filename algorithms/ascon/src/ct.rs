//! Constant-Time Helpers
//!
//! The two branch-free primitives the AEAD needs: byte-array equality as a
//! mask, and mask-controlled wiping. Kept isolated so nothing else in the
//! crate touches secret-dependent comparison logic directly.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Compares two byte slices in constant time, yielding an all-or-nothing
/// [`Choice`]. Slice lengths are public and may short-circuit.
pub(crate) fn bytes_eq(a: &[u8], b: &[u8]) -> Choice {
    a.ct_eq(b)
}

/// Overwrites `buf` with zeros unless `keep` is set, without branching on
/// the mask or the buffer contents.
pub(crate) fn wipe_unless(buf: &mut [u8], keep: Choice) {
    for byte in buf.iter_mut() {
        byte.conditional_assign(&0, !keep);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
