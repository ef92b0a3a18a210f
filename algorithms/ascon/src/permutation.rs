//! Ascon Permutation
//!
//! The 320-bit permutation state and the round function shared by every
//! scheme in the suite. The round count is a const generic so each call
//! site gets a fully unrolled, compile-time checked instance.

use zeroize::Zeroize;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Maximum number of rounds a single permutation call may apply.
pub const MAX_ROUNDS: usize = 16;

/// Number of 64-bit lanes in the permutation state.
pub const LANE_COUNT: usize = 5;

/// Round constants. A call applying `R` rounds consumes the last `R`
/// entries of this table.
const ROUND_CONSTANTS: [u64; MAX_ROUNDS] = [
    0x3c, 0x2d, 0x1e, 0x0f, 0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a,
    0x4b,
];

/// Validates the const generic round count at monomorphization time.
struct RoundCount<const R: usize>;

impl<const R: usize> RoundCount<R> {
    const VALID: () = assert!(R >= 1 && R <= MAX_ROUNDS, "round count must be in 1..=16");
}

// =============================================================================
// STATE
// =============================================================================

/// The 320-bit Ascon permutation state, viewed as five 64-bit lanes.
///
/// Lane 0 holds the rate portion for the hash sponge; lanes 0 and 1 hold
/// it for the AEAD duplex. All byte-level I/O on lanes is little-endian.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsconState {
    pub(crate) lanes: [u64; LANE_COUNT],
}

impl AsconState {
    /// Creates a state from five explicit lane words.
    #[must_use]
    pub const fn new(lanes: [u64; LANE_COUNT]) -> Self {
        Self { lanes }
    }

    /// Returns a copy of the five lane words.
    #[must_use]
    pub const fn as_lanes(&self) -> [u64; LANE_COUNT] {
        self.lanes
    }

    /// Applies `R` rounds of the Ascon permutation, `1 <= R <= 16`.
    ///
    /// Out-of-range round counts are rejected at compile time.
    pub const fn permute<const R: usize>(&mut self) {
        let () = RoundCount::<R>::VALID;

        let mut i = MAX_ROUNDS - R;
        while i < MAX_ROUNDS {
            self.round(ROUND_CONSTANTS[i]);
            i += 1;
        }
    }

    /// Single round: constant addition, substitution layer, linear diffusion.
    const fn round(&mut self, rc: u64) {
        let s = &mut self.lanes;

        // Constant addition.
        s[2] ^= rc;

        // Substitution layer, the 5-bit S-box bitsliced across all 64 columns.
        s[0] ^= s[4];
        s[4] ^= s[3];
        s[2] ^= s[1];

        let t0 = s[0] ^ (!s[1] & s[2]);
        let t1 = s[1] ^ (!s[2] & s[3]);
        let t2 = s[2] ^ (!s[3] & s[4]);
        let t3 = s[3] ^ (!s[4] & s[0]);
        let t4 = s[4] ^ (!s[0] & s[1]);

        s[1] = t1 ^ t0;
        s[3] = t3 ^ t2;
        s[0] = t0 ^ t4;
        s[4] = t4;
        s[2] = !t2;

        // Linear diffusion layer.
        s[0] ^= s[0].rotate_right(19) ^ s[0].rotate_right(28);
        s[1] ^= s[1].rotate_right(61) ^ s[1].rotate_right(39);
        s[2] ^= s[2].rotate_right(1) ^ s[2].rotate_right(6);
        s[3] ^= s[3].rotate_right(10) ^ s[3].rotate_right(17);
        s[4] ^= s[4].rotate_right(7) ^ s[4].rotate_right(41);
    }
}

impl Zeroize for AsconState {
    fn zeroize(&mut self) {
        self.lanes.zeroize();
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
