//! AEAD Duplex Driver
//!
//! The keyed, 128-bit-rate duplex underneath Ascon-AEAD128. Lanes 0 and 1
//! carry the rate; the key is re-injected at both finalization boundaries.
//! Every step here processes the full input in one pass, there is no
//! resumable offset like in the hash sponge.

use crate::aead::{KEY_BYTE_LEN, NONCE_BYTE_LEN, TAG_BYTE_LEN};
use crate::constants::AEAD128_IV;
use crate::permutation::AsconState;

/// Rate width in bytes, spread over lanes 0 and 1.
pub(crate) const RATE_BYTES: usize = 16;

const ROUNDS_A: usize = 12;
const ROUNDS_B: usize = 8;

/// Splits a 16-byte rate block into its two little-endian lane words.
fn rate_words(block: &[u8; RATE_BYTES]) -> (u64, u64) {
    let mut lo = [0u8; 8];
    let mut hi = [0u8; 8];
    lo.copy_from_slice(&block[..8]);
    hi.copy_from_slice(&block[8..]);
    (u64::from_le_bytes(lo), u64::from_le_bytes(hi))
}

/// Builds the final, zero-padded rate block of `data` and marks the 10*
/// padding byte at the first unfilled position.
fn padded_final_block(data: &[u8]) -> [u8; RATE_BYTES] {
    debug_assert!(data.len() < RATE_BYTES);

    let mut block = [0u8; RATE_BYTES];
    block[..data.len()].copy_from_slice(data);
    block[data.len()] = 0x01;
    block
}

// =============================================================================
// DUPLEX STEPS
// =============================================================================

/// Loads IV, key and nonce into the state, applies 12 rounds and XORs the
/// key back into the capacity lanes.
pub(crate) fn initialize(key: &[u8; KEY_BYTE_LEN], nonce: &[u8; NONCE_BYTE_LEN]) -> AsconState {
    let (k0, k1) = rate_words(key);
    let (n0, n1) = rate_words(nonce);

    let mut state = AsconState::new([AEAD128_IV, k0, k1, n0, n1]);
    state.permute::<ROUNDS_A>();
    state.lanes[3] ^= k0;
    state.lanes[4] ^= k1;
    state
}

/// Absorbs the associated data in padded rate blocks, then mixes in the
/// one-bit domain separator. Empty associated data skips the absorption
/// entirely but still flips the separator.
pub(crate) fn absorb_associated_data(state: &mut AsconState, data: &[u8]) {
    if !data.is_empty() {
        let mut blocks = data.chunks_exact(RATE_BYTES);
        for block in &mut blocks {
            let mut bytes = [0u8; RATE_BYTES];
            bytes.copy_from_slice(block);
            let (w0, w1) = rate_words(&bytes);
            state.lanes[0] ^= w0;
            state.lanes[1] ^= w1;
            state.permute::<ROUNDS_B>();
        }

        let (w0, w1) = rate_words(&padded_final_block(blocks.remainder()));
        state.lanes[0] ^= w0;
        state.lanes[1] ^= w1;
        state.permute::<ROUNDS_B>();
    }

    // Domain separator: the final bit of the state.
    state.lanes[4] ^= 1 << 63;
}

/// Encrypts `plaintext` into `ciphertext`, block by block. The final
/// (possibly empty) block is padded into the state but only the original
/// plaintext length is emitted.
pub(crate) fn encrypt_blocks(state: &mut AsconState, plaintext: &[u8], ciphertext: &mut [u8]) {
    debug_assert_eq!(plaintext.len(), ciphertext.len());

    let mut blocks = plaintext.chunks_exact(RATE_BYTES);
    let mut off = 0;
    for block in &mut blocks {
        let mut bytes = [0u8; RATE_BYTES];
        bytes.copy_from_slice(block);
        let (w0, w1) = rate_words(&bytes);
        state.lanes[0] ^= w0;
        state.lanes[1] ^= w1;

        ciphertext[off..off + 8].copy_from_slice(&state.lanes[0].to_le_bytes());
        ciphertext[off + 8..off + RATE_BYTES].copy_from_slice(&state.lanes[1].to_le_bytes());

        state.permute::<ROUNDS_B>();
        off += RATE_BYTES;
    }

    let rest = blocks.remainder();
    let (w0, w1) = rate_words(&padded_final_block(rest));
    state.lanes[0] ^= w0;
    state.lanes[1] ^= w1;

    let mut rate = [0u8; RATE_BYTES];
    rate[..8].copy_from_slice(&state.lanes[0].to_le_bytes());
    rate[8..].copy_from_slice(&state.lanes[1].to_le_bytes());
    ciphertext[off..].copy_from_slice(&rate[..rest.len()]);
}

/// Decrypts `ciphertext` into `plaintext`. Full blocks replace the rate
/// with the ciphertext; the final partial block replaces only the leading
/// ciphertext bytes and XORs the padding into the first unfilled one.
pub(crate) fn decrypt_blocks(state: &mut AsconState, ciphertext: &[u8], plaintext: &mut [u8]) {
    debug_assert_eq!(ciphertext.len(), plaintext.len());

    let mut blocks = ciphertext.chunks_exact(RATE_BYTES);
    let mut off = 0;
    for block in &mut blocks {
        let mut bytes = [0u8; RATE_BYTES];
        bytes.copy_from_slice(block);
        let (c0, c1) = rate_words(&bytes);

        let p0 = state.lanes[0] ^ c0;
        let p1 = state.lanes[1] ^ c1;
        plaintext[off..off + 8].copy_from_slice(&p0.to_le_bytes());
        plaintext[off + 8..off + RATE_BYTES].copy_from_slice(&p1.to_le_bytes());

        state.lanes[0] = c0;
        state.lanes[1] = c1;
        state.permute::<ROUNDS_B>();
        off += RATE_BYTES;
    }

    let rest = blocks.remainder();
    let mut bytes = [0u8; RATE_BYTES];
    bytes[..rest.len()].copy_from_slice(rest);
    let (c0, c1) = rate_words(&bytes);

    let p0 = state.lanes[0] ^ c0;
    let p1 = state.lanes[1] ^ c1;

    let mut recovered = [0u8; RATE_BYTES];
    recovered[..8].copy_from_slice(&p0.to_le_bytes());
    recovered[8..].copy_from_slice(&p1.to_le_bytes());
    plaintext[off..].copy_from_slice(&recovered[..rest.len()]);

    // XORing the recovered bytes back restores the rate to the ciphertext
    // over the filled region and leaves the trailing bytes untouched.
    let (w0, w1) = rate_words(&padded_final_block(&recovered[..rest.len()]));
    state.lanes[0] ^= w0;
    state.lanes[1] ^= w1;
}

/// Re-injects the key, applies 12 rounds and extracts the 128-bit tag from
/// the key-masked capacity lanes.
pub(crate) fn finalize(state: &mut AsconState, key: &[u8; KEY_BYTE_LEN]) -> [u8; TAG_BYTE_LEN] {
    let (k0, k1) = rate_words(key);

    state.lanes[2] ^= k0;
    state.lanes[3] ^= k1;
    state.permute::<ROUNDS_A>();

    let mut tag = [0u8; TAG_BYTE_LEN];
    tag[..8].copy_from_slice(&(state.lanes[3] ^ k0).to_le_bytes());
    tag[8..].copy_from_slice(&(state.lanes[4] ^ k1).to_le_bytes());
    tag
}
