//! Ascon-CXOF128
//!
//! The customizable variant of XOF-128. A customization string of up to
//! 256 bytes is absorbed ahead of the message, prefixed by its bit length,
//! so distinct customizations yield independent output streams.

use crate::constants::CXOF128_IV;
use crate::permutation::AsconState;
use crate::sponge;
use crate::types::Cxof128Error;
use zeroize::Zeroize;

/// Maximum customization string length in bytes.
pub const CUSTOMIZATION_STRING_MAX_BYTE_LEN: usize = 256;

const INITIAL_STATE: AsconState = sponge::initial_state(CXOF128_IV);

// =============================================================================
// CXOF
// =============================================================================

/// Incremental Ascon-CXOF128 computation.
///
/// Freshly created instances await their customization string; `customize`
/// must be called exactly once before any message byte is absorbed.
///
/// # Example
/// ```rust
/// use ascon::AsconCxof128;
///
/// let mut cxof = AsconCxof128::new();
/// cxof.customize(b"session-keys-v1")?;
/// cxof.absorb(b"shared secret")?;
/// cxof.finalize()?;
///
/// let mut out = [0u8; 32];
/// cxof.squeeze(&mut out)?;
/// # Ok::<(), ascon::Cxof128Error>(())
/// ```
#[derive(Clone)]
pub struct AsconCxof128 {
    state: AsconState,
    offset: usize,
    readable: usize,
    customized: bool,
    finished_absorbing: bool,
}

impl AsconCxof128 {
    /// Creates a CXOF instance awaiting customization.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            offset: 0,
            readable: 0,
            customized: false,
            finished_absorbing: false,
        }
    }

    /// Absorbs the customization string, prefixed by the 8-byte
    /// little-endian encoding of its bit length, and finalizes the
    /// customization block. Valid exactly once, before any absorption.
    ///
    /// # Errors
    /// [`Cxof128Error::AlreadyCustomized`] on repeated calls, and
    /// [`Cxof128Error::CustomizationTooLong`] for strings over 256 bytes;
    /// the instance is left untouched in both cases.
    pub fn customize(&mut self, cust_str: &[u8]) -> Result<(), Cxof128Error> {
        if self.customized {
            return Err(Cxof128Error::AlreadyCustomized);
        }
        if cust_str.len() > CUSTOMIZATION_STRING_MAX_BYTE_LEN {
            return Err(Cxof128Error::CustomizationTooLong);
        }

        let bit_len = (cust_str.len() as u64) * 8;
        sponge::absorb(&mut self.state, &mut self.offset, &bit_len.to_le_bytes());
        sponge::absorb(&mut self.state, &mut self.offset, cust_str);
        sponge::finalize(&mut self.state, &mut self.offset);

        self.customized = true;
        Ok(())
    }

    /// Absorbs the next chunk of the message.
    ///
    /// # Errors
    /// [`Cxof128Error::NotCustomized`] before `customize`, and
    /// [`Cxof128Error::AlreadyFinalized`] once `finalize` has been called.
    pub fn absorb(&mut self, msg: &[u8]) -> Result<(), Cxof128Error> {
        if !self.customized {
            return Err(Cxof128Error::NotCustomized);
        }
        if self.finished_absorbing {
            return Err(Cxof128Error::AlreadyFinalized);
        }

        sponge::absorb(&mut self.state, &mut self.offset, msg);
        Ok(())
    }

    /// Ends the absorption phase and prepares the output stream.
    ///
    /// # Errors
    /// [`Cxof128Error::NotCustomized`] before `customize`, and
    /// [`Cxof128Error::AlreadyFinalized`] on repeated calls.
    pub fn finalize(&mut self) -> Result<(), Cxof128Error> {
        if !self.customized {
            return Err(Cxof128Error::NotCustomized);
        }
        if self.finished_absorbing {
            return Err(Cxof128Error::AlreadyFinalized);
        }

        sponge::finalize(&mut self.state, &mut self.offset);
        self.finished_absorbing = true;
        self.readable = sponge::RATE_BYTES;
        Ok(())
    }

    /// Appends `out.len()` bytes of the output stream into `out`.
    ///
    /// # Errors
    /// [`Cxof128Error::NotCustomized`] before `customize`, and
    /// [`Cxof128Error::StillAbsorbing`] before `finalize`.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<(), Cxof128Error> {
        if !self.customized {
            return Err(Cxof128Error::NotCustomized);
        }
        if !self.finished_absorbing {
            return Err(Cxof128Error::StillAbsorbing);
        }

        sponge::squeeze(&mut self.state, &mut self.readable, out);
        Ok(())
    }
}

impl Default for AsconCxof128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AsconCxof128 {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Squeezes `out.len()` bytes of Ascon-CXOF128 output for `msg` under
/// `customization` in one call.
///
/// # Errors
/// [`Cxof128Error::CustomizationTooLong`] for customization strings over
/// 256 bytes; `out` is left untouched.
///
/// # Example
/// ```rust
/// let mut out = [0u8; 32];
/// ascon::cxof128(b"kdf-v2", b"input keying material", &mut out)?;
/// # Ok::<(), ascon::Cxof128Error>(())
/// ```
pub fn cxof128(customization: &[u8], msg: &[u8], out: &mut [u8]) -> Result<(), Cxof128Error> {
    if customization.len() > CUSTOMIZATION_STRING_MAX_BYTE_LEN {
        return Err(Cxof128Error::CustomizationTooLong);
    }

    let mut state = INITIAL_STATE;
    let mut offset = 0;

    let bit_len = (customization.len() as u64) * 8;
    sponge::absorb(&mut state, &mut offset, &bit_len.to_le_bytes());
    sponge::absorb(&mut state, &mut offset, customization);
    sponge::finalize(&mut state, &mut offset);

    sponge::absorb(&mut state, &mut offset, msg);
    sponge::finalize(&mut state, &mut offset);

    let mut readable = sponge::RATE_BYTES;
    sponge::squeeze(&mut state, &mut readable, out);

    state.zeroize();
    Ok(())
}
