//! Ascon-XOF128
//!
//! Extendable-output function over the hash sponge. Absorption works like
//! Hash256; after finalization the output stream can be squeezed in slices
//! of any size, any number of times.

use crate::constants::XOF128_IV;
use crate::permutation::AsconState;
use crate::sponge;
use crate::types::Xof128Error;
use zeroize::Zeroize;

#[cfg(feature = "digest-trait")]
use digest::{ExtendableOutput, Update, XofReader};

const INITIAL_STATE: AsconState = sponge::initial_state(XOF128_IV);

// =============================================================================
// XOF
// =============================================================================

/// Incremental Ascon-XOF128 computation.
///
/// # Example
/// ```rust
/// use ascon::AsconXof128;
///
/// let mut xof = AsconXof128::new();
/// xof.absorb(b"variable length output")?;
/// xof.finalize()?;
///
/// let mut first = [0u8; 16];
/// let mut second = [0u8; 48];
/// xof.squeeze(&mut first)?;
/// xof.squeeze(&mut second)?;
/// # Ok::<(), ascon::Xof128Error>(())
/// ```
#[derive(Clone)]
pub struct AsconXof128 {
    state: AsconState,
    offset: usize,
    readable: usize,
    finished_absorbing: bool,
}

impl AsconXof128 {
    /// Creates a XOF instance in the absorbing phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            offset: 0,
            readable: 0,
            finished_absorbing: false,
        }
    }

    /// Absorbs the next chunk of the message.
    ///
    /// # Errors
    /// [`Xof128Error::AlreadyFinalized`] once `finalize` has been called;
    /// the instance is left untouched.
    pub fn absorb(&mut self, msg: &[u8]) -> Result<(), Xof128Error> {
        if self.finished_absorbing {
            return Err(Xof128Error::AlreadyFinalized);
        }

        sponge::absorb(&mut self.state, &mut self.offset, msg);
        Ok(())
    }

    /// Ends the absorption phase and prepares the output stream.
    ///
    /// # Errors
    /// [`Xof128Error::AlreadyFinalized`] on repeated calls.
    pub fn finalize(&mut self) -> Result<(), Xof128Error> {
        if self.finished_absorbing {
            return Err(Xof128Error::AlreadyFinalized);
        }

        sponge::finalize(&mut self.state, &mut self.offset);
        self.finished_absorbing = true;
        self.readable = sponge::RATE_BYTES;
        Ok(())
    }

    /// Appends `out.len()` bytes of the output stream into `out`. Squeezing
    /// zero bytes is a no-op and does not advance the stream.
    ///
    /// # Errors
    /// [`Xof128Error::StillAbsorbing`] before `finalize`.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Xof128Error> {
        if !self.finished_absorbing {
            return Err(Xof128Error::StillAbsorbing);
        }

        sponge::squeeze(&mut self.state, &mut self.readable, out);
        Ok(())
    }
}

impl Default for AsconXof128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AsconXof128 {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Squeezes `out.len()` bytes of Ascon-XOF128 output for `msg` in one call.
///
/// # Example
/// ```rust
/// let mut out = [0u8; 64];
/// ascon::xof128(b"one-shot xof", &mut out);
/// ```
pub fn xof128(msg: &[u8], out: &mut [u8]) {
    let mut state = INITIAL_STATE;
    let mut offset = 0;

    sponge::absorb(&mut state, &mut offset, msg);
    sponge::finalize(&mut state, &mut offset);

    let mut readable = sponge::RATE_BYTES;
    sponge::squeeze(&mut state, &mut readable, out);

    state.zeroize();
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

/// Streaming reader over a finalized [`AsconXof128`], produced by
/// [`ExtendableOutput::finalize_xof`].
#[cfg(feature = "digest-trait")]
pub struct Xof128Reader {
    state: AsconState,
    readable: usize,
}

#[cfg(feature = "digest-trait")]
impl XofReader for Xof128Reader {
    fn read(&mut self, buffer: &mut [u8]) {
        sponge::squeeze(&mut self.state, &mut self.readable, buffer);
    }
}

#[cfg(feature = "digest-trait")]
impl Drop for Xof128Reader {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(feature = "digest-trait")]
impl Update for AsconXof128 {
    fn update(&mut self, data: &[u8]) {
        // Trait-driven usage cannot leave the absorbing phase early.
        let _ = self.absorb(data);
    }
}

#[cfg(feature = "digest-trait")]
impl ExtendableOutput for AsconXof128 {
    type Reader = Xof128Reader;

    fn finalize_xof(mut self) -> Self::Reader {
        let _ = self.finalize();

        let mut state = AsconState::new([0; 5]);
        core::mem::swap(&mut state, &mut self.state);

        Xof128Reader {
            state,
            readable: self.readable,
        }
    }
}
