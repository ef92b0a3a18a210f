#![cfg_attr(not(feature = "std"), no_std)]

//! # Ascon
//!
//! The Ascon lightweight cryptography suite as standardized in NIST
//! SP 800-232: authenticated encryption ([`AsconAead128`]), fixed-output
//! hashing ([`AsconHash256`]) and extendable output ([`AsconXof128`],
//! [`AsconCxof128`]), all built on the shared 320-bit permutation
//! ([`AsconState`]).

//! # Usage
//! ```rust
//! use ascon::AsconAead128;
//!
//! // 1. Authenticated encryption
//! let cipher = AsconAead128::new(&[0x55; 16]);
//! let nonce = [0xaa; 16];
//!
//! let plaintext = b"lightweight crypto";
//! let mut ciphertext = [0u8; 18];
//! let tag = cipher.encrypt(&nonce, b"header", plaintext, &mut ciphertext);
//!
//! let mut recovered = [0u8; 18];
//! cipher.decrypt(&nonce, b"header", &ciphertext, &tag, &mut recovered)?;
//! assert_eq!(&recovered, plaintext);
//!
//! // 2. Hashing
//! let digest = ascon::hash256(b"lightweight crypto");
//!
//! // 3. Extendable output
//! let mut stream = [0u8; 64];
//! ascon::xof128(&digest, &mut stream);
//! # Ok::<(), ascon::AeadError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod aead;
mod constants;
mod ct;
mod cxof128;
mod duplex;
mod hash256;
mod permutation;
mod sponge;
mod types;
mod xof128;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;

pub use aead::{AsconAead128, KEY_BYTE_LEN, NONCE_BYTE_LEN, TAG_BYTE_LEN};
pub use cxof128::{cxof128, AsconCxof128, CUSTOMIZATION_STRING_MAX_BYTE_LEN};
pub use hash256::{hash256, AsconHash256, DIGEST_BYTE_LEN};
pub use permutation::{AsconState, LANE_COUNT, MAX_ROUNDS};
pub use types::{AeadError, Cxof128Error, Hash256Error, Xof128Error};
#[cfg(feature = "digest-trait")]
pub use xof128::Xof128Reader;
pub use xof128::{xof128, AsconXof128};
