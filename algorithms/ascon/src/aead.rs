//! Ascon-AEAD128
//!
//! Authenticated encryption with associated data at the 128-bit security
//! level. Encryption and decryption are one-shot calls over caller-provided
//! buffers; decryption verifies the tag in constant time and wipes the
//! recovered plaintext on mismatch.

use crate::ct;
use crate::duplex;
use crate::types::AeadError;
use zeroize::Zeroize;

/// Key length in bytes.
pub const KEY_BYTE_LEN: usize = 16;

/// Nonce length in bytes.
pub const NONCE_BYTE_LEN: usize = 16;

/// Authentication tag length in bytes.
pub const TAG_BYTE_LEN: usize = 16;

// =============================================================================
// CIPHER
// =============================================================================

/// An Ascon-AEAD128 cipher instance bound to one key.
///
/// The key copy held inside is zeroized when the instance is dropped. A
/// single instance may encrypt and decrypt any number of messages; nonce
/// uniqueness per message is the caller's responsibility.
///
/// # Example
/// ```rust
/// use ascon::AsconAead128;
///
/// let cipher = AsconAead128::new(&[0x2a; 16]);
/// let nonce = [0x17; 16];
///
/// let message = b"attack at dawn";
/// let mut ciphertext = [0u8; 14];
/// let tag = cipher.encrypt(&nonce, b"squad 7", message, &mut ciphertext);
///
/// let mut recovered = [0u8; 14];
/// cipher.decrypt(&nonce, b"squad 7", &ciphertext, &tag, &mut recovered)?;
/// assert_eq!(&recovered, message);
/// # Ok::<(), ascon::AeadError>(())
/// ```
#[derive(Clone)]
pub struct AsconAead128 {
    key: [u8; KEY_BYTE_LEN],
}

impl AsconAead128 {
    /// Creates a cipher instance from a 128-bit key.
    #[must_use]
    pub const fn new(key: &[u8; KEY_BYTE_LEN]) -> Self {
        Self { key: *key }
    }

    /// Encrypts `plaintext` into `ciphertext` and returns the 16-byte
    /// authentication tag over the ciphertext and `associated_data`.
    ///
    /// # Panics
    /// Panics if `ciphertext.len() != plaintext.len()`.
    pub fn encrypt(
        &self,
        nonce: &[u8; NONCE_BYTE_LEN],
        associated_data: &[u8],
        plaintext: &[u8],
        ciphertext: &mut [u8],
    ) -> [u8; TAG_BYTE_LEN] {
        assert_eq!(
            plaintext.len(),
            ciphertext.len(),
            "ciphertext buffer must be exactly as long as the plaintext"
        );

        let mut state = duplex::initialize(&self.key, nonce);
        duplex::absorb_associated_data(&mut state, associated_data);
        duplex::encrypt_blocks(&mut state, plaintext, ciphertext);
        let tag = duplex::finalize(&mut state, &self.key);

        state.zeroize();
        tag
    }

    /// Decrypts `ciphertext` into `plaintext` and verifies `tag`.
    ///
    /// The tag comparison is constant-time. On mismatch the `plaintext`
    /// buffer is overwritten with zeros, also without branching on secret
    /// data, and [`AeadError::TagMismatch`] is returned.
    ///
    /// # Errors
    /// Returns [`AeadError::TagMismatch`] when the tag does not
    /// authenticate the ciphertext and associated data under this key and
    /// nonce.
    ///
    /// # Panics
    /// Panics if `plaintext.len() != ciphertext.len()`.
    pub fn decrypt(
        &self,
        nonce: &[u8; NONCE_BYTE_LEN],
        associated_data: &[u8],
        ciphertext: &[u8],
        tag: &[u8; TAG_BYTE_LEN],
        plaintext: &mut [u8],
    ) -> Result<(), AeadError> {
        assert_eq!(
            ciphertext.len(),
            plaintext.len(),
            "plaintext buffer must be exactly as long as the ciphertext"
        );

        let mut state = duplex::initialize(&self.key, nonce);
        duplex::absorb_associated_data(&mut state, associated_data);
        duplex::decrypt_blocks(&mut state, ciphertext, plaintext);
        let mut expected = duplex::finalize(&mut state, &self.key);
        state.zeroize();

        let tags_match = ct::bytes_eq(&expected, tag);
        expected.zeroize();

        // Unverified plaintext never reaches the caller.
        ct::wipe_unless(plaintext, tags_match);

        if bool::from(tags_match) {
            Ok(())
        } else {
            Err(AeadError::TagMismatch)
        }
    }
}

impl Drop for AsconAead128 {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

// Key material stays out of debug output.
impl core::fmt::Debug for AsconAead128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AsconAead128").finish_non_exhaustive()
    }
}
