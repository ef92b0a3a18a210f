//! Ascon-Hash256
//!
//! Fixed 32-byte digests over the hash sponge. The hasher is a small phase
//! automaton: absorb any number of times, finalize once, extract the
//! digest once. `reset` returns a used instance to the absorbing phase.

use crate::constants::HASH256_IV;
use crate::permutation::AsconState;
use crate::sponge;
use crate::types::Hash256Error;
use zeroize::Zeroize;

#[cfg(feature = "digest-trait")]
use digest::typenum::U32;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, OutputSizeUser, Reset, Update};

/// Digest length in bytes.
pub const DIGEST_BYTE_LEN: usize = 32;

const INITIAL_STATE: AsconState = sponge::initial_state(HASH256_IV);

// =============================================================================
// HASHER
// =============================================================================

/// Incremental Ascon-Hash256 computation.
///
/// # Example
/// ```rust
/// use ascon::AsconHash256;
///
/// let mut hasher = AsconHash256::new();
/// hasher.absorb(b"incremental ")?;
/// hasher.absorb(b"hashing")?;
/// hasher.finalize()?;
///
/// let mut digest = [0u8; 32];
/// hasher.digest(&mut digest)?;
/// assert_eq!(digest, ascon::hash256(b"incremental hashing"));
/// # Ok::<(), ascon::Hash256Error>(())
/// ```
#[derive(Clone)]
pub struct AsconHash256 {
    state: AsconState,
    offset: usize,
    finished_absorbing: bool,
    finished_squeezing: bool,
}

impl AsconHash256 {
    /// Creates a hasher in the absorbing phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            offset: 0,
            finished_absorbing: false,
            finished_squeezing: false,
        }
    }

    /// Absorbs the next chunk of the message.
    ///
    /// # Errors
    /// [`Hash256Error::AlreadyFinalized`] once `finalize` has been called;
    /// the instance is left untouched.
    pub fn absorb(&mut self, msg: &[u8]) -> Result<(), Hash256Error> {
        if self.finished_absorbing {
            return Err(Hash256Error::AlreadyFinalized);
        }

        sponge::absorb(&mut self.state, &mut self.offset, msg);
        Ok(())
    }

    /// Ends the absorption phase, padding and permuting the state.
    ///
    /// # Errors
    /// [`Hash256Error::AlreadyFinalized`] on repeated calls.
    pub fn finalize(&mut self) -> Result<(), Hash256Error> {
        if self.finished_absorbing {
            return Err(Hash256Error::AlreadyFinalized);
        }

        sponge::finalize(&mut self.state, &mut self.offset);
        self.finished_absorbing = true;
        Ok(())
    }

    /// Writes the 32-byte digest. Valid exactly once per computation.
    ///
    /// # Errors
    /// [`Hash256Error::StillAbsorbing`] before `finalize`, and
    /// [`Hash256Error::AlreadyDigested`] on a second extraction.
    pub fn digest(&mut self, out: &mut [u8; DIGEST_BYTE_LEN]) -> Result<(), Hash256Error> {
        if !self.finished_absorbing {
            return Err(Hash256Error::StillAbsorbing);
        }
        if self.finished_squeezing {
            return Err(Hash256Error::AlreadyDigested);
        }

        let mut readable = sponge::RATE_BYTES;
        sponge::squeeze(&mut self.state, &mut readable, out);
        self.finished_squeezing = true;
        Ok(())
    }

    /// Returns the instance to the absorbing phase, as freshly created.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.state = INITIAL_STATE;
        self.offset = 0;
        self.finished_absorbing = false;
        self.finished_squeezing = false;
    }
}

impl Default for AsconHash256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AsconHash256 {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Computes the Ascon-Hash256 digest of `msg` in one call.
///
/// # Example
/// ```rust
/// let digest = ascon::hash256(b"one-shot hashing");
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
pub fn hash256(msg: &[u8]) -> [u8; DIGEST_BYTE_LEN] {
    let mut state = INITIAL_STATE;
    let mut offset = 0;

    sponge::absorb(&mut state, &mut offset, msg);
    sponge::finalize(&mut state, &mut offset);

    let mut digest = [0u8; DIGEST_BYTE_LEN];
    let mut readable = sponge::RATE_BYTES;
    sponge::squeeze(&mut state, &mut readable, &mut digest);

    state.zeroize();
    digest
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for AsconHash256 {
    type OutputSize = U32;
}

#[cfg(feature = "digest-trait")]
impl Update for AsconHash256 {
    fn update(&mut self, data: &[u8]) {
        // Trait-driven usage cannot leave the absorbing phase early.
        let _ = self.absorb(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for AsconHash256 {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        let mut digest = [0u8; DIGEST_BYTE_LEN];
        let _ = self.finalize();
        let _ = self.digest(&mut digest);
        out.copy_from_slice(&digest);
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for AsconHash256 {
    fn reset(&mut self) {
        self.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for AsconHash256 {}
