//! Hash Sponge Driver
//!
//! The 64-bit-rate, 256-bit-capacity sponge shared by Hash256, XOF-128 and
//! CXOF-128. The driver is a set of free functions over an explicit
//! `(state, counter)` pair so each scheme keeps its own phase discipline on
//! top; the keyed AEAD duplex lives in its own module with a different rate
//! and padding placement.

use crate::permutation::AsconState;

/// Rate width in bytes. The rate is always lane 0.
pub(crate) const RATE_BYTES: usize = 8;

/// Rounds applied between rate blocks and at finalization.
const NUM_ROUNDS: usize = 12;

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

#[cfg(feature = "tracing")]
macro_rules! trace_state {
    ($step:literal, $state:expr) => {
        log::trace!("sponge {}: {:016x?}", $step, $state.lanes);
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_state {
    ($($args:tt)*) => {};
}

// =============================================================================
// DRIVER
// =============================================================================

/// Computes the initial state of a scheme: the IV in lane 0, zeros
/// elsewhere, then 12 rounds. Evaluated once per scheme at compile time.
pub(crate) const fn initial_state(iv: u64) -> AsconState {
    let mut state = AsconState::new([iv, 0, 0, 0, 0]);
    state.permute::<NUM_ROUNDS>();
    state
}

/// Absorbs `msg` into lane 0, little-endian, permuting at every filled
/// rate block. `offset` is the number of bytes already XORed into the
/// current block; it persists across calls, so absorption is resumable.
pub(crate) fn absorb(state: &mut AsconState, offset: &mut usize, msg: &[u8]) {
    debug_assert!(*offset < RATE_BYTES);
    trace_state!("absorb enter", state);

    let mut msg = msg;

    // Top up the in-progress rate block first.
    if *offset > 0 {
        let take = usize::min(RATE_BYTES - *offset, msg.len());
        let (head, rest) = msg.split_at(take);

        let mut word = 0u64;
        for (i, &byte) in head.iter().enumerate() {
            word |= u64::from(byte) << (8 * (*offset + i));
        }
        state.lanes[0] ^= word;
        *offset += take;
        msg = rest;

        if *offset < RATE_BYTES {
            return;
        }
        state.permute::<NUM_ROUNDS>();
        *offset = 0;
    }

    let mut blocks = msg.chunks_exact(RATE_BYTES);
    for block in &mut blocks {
        let mut bytes = [0u8; RATE_BYTES];
        bytes.copy_from_slice(block);
        state.lanes[0] ^= u64::from_le_bytes(bytes);
        state.permute::<NUM_ROUNDS>();
    }

    let rest = blocks.remainder();
    if !rest.is_empty() {
        let mut word = 0u64;
        for (i, &byte) in rest.iter().enumerate() {
            word |= u64::from(byte) << (8 * i);
        }
        state.lanes[0] ^= word;
        *offset = rest.len();
    }

    trace_state!("absorb leave", state);
}

/// Pads the in-progress rate block with the 10* rule, a single `0x01` byte
/// at the first unfilled position, and permutes. Squeezing may start after
/// this returns.
pub(crate) fn finalize(state: &mut AsconState, offset: &mut usize) {
    debug_assert!(*offset < RATE_BYTES);

    state.lanes[0] ^= 1u64 << (8 * *offset);
    state.permute::<NUM_ROUNDS>();
    *offset = 0;

    trace_state!("finalized", state);
}

/// Serializes output bytes from lane 0. `readable` counts how many bytes
/// of the current rate block are still unread; the state is permuted
/// whenever a fresh block is needed, so slicing the output stream across
/// calls is transparent.
pub(crate) fn squeeze(state: &mut AsconState, readable: &mut usize, out: &mut [u8]) {
    debug_assert!(*readable <= RATE_BYTES);

    let mut written = 0;
    while written < out.len() {
        if *readable == 0 {
            state.permute::<NUM_ROUNDS>();
            *readable = RATE_BYTES;
        }

        let bytes = state.lanes[0].to_le_bytes();
        let start = RATE_BYTES - *readable;
        let take = usize::min(*readable, out.len() - written);

        out[written..written + take].copy_from_slice(&bytes[start..start + take]);
        *readable -= take;
        written += take;
    }

    trace_state!("squeezed", state);
}

// =============================================================================
// UNIT TESTS
// =============================================================================
