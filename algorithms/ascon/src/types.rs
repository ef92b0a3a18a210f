//! Shared types used across the Ascon suite.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// AEAD ERRORS
// =============================================================================

/// Error returned by [`AsconAead128::decrypt`](crate::AsconAead128::decrypt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeadError {
    /// The supplied tag does not authenticate the ciphertext and associated
    /// data; the plaintext buffer has been wiped.
    TagMismatch,
}

impl fmt::Display for AeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TagMismatch => write!(f, "authentication tag mismatch, plaintext discarded"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for AeadError {}

// =============================================================================
// HASH-FAMILY PHASE ERRORS
// =============================================================================

/// Phase violations of the [`AsconHash256`](crate::AsconHash256) automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hash256Error {
    /// `absorb` or `finalize` was called after the absorption phase ended.
    AlreadyFinalized,
    /// `digest` was called before `finalize`.
    StillAbsorbing,
    /// `digest` was called a second time.
    AlreadyDigested,
}

impl fmt::Display for Hash256Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinalized => write!(f, "absorption phase already finalized"),
            Self::StillAbsorbing => write!(f, "digest requested before finalization"),
            Self::AlreadyDigested => write!(f, "digest already extracted"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Hash256Error {}

/// Phase violations of the [`AsconXof128`](crate::AsconXof128) automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Xof128Error {
    /// `absorb` or `finalize` was called after the absorption phase ended.
    AlreadyFinalized,
    /// `squeeze` was called before `finalize`.
    StillAbsorbing,
}

impl fmt::Display for Xof128Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinalized => write!(f, "absorption phase already finalized"),
            Self::StillAbsorbing => write!(f, "squeeze requested before finalization"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Xof128Error {}

/// Phase violations of the [`AsconCxof128`](crate::AsconCxof128) automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cxof128Error {
    /// An operation was attempted before `customize`.
    NotCustomized,
    /// `customize` was called a second time.
    AlreadyCustomized,
    /// The customization string exceeds 256 bytes.
    CustomizationTooLong,
    /// `absorb` or `finalize` was called after the absorption phase ended.
    AlreadyFinalized,
    /// `squeeze` was called before `finalize`.
    StillAbsorbing,
}

impl fmt::Display for Cxof128Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCustomized => write!(f, "instance has not been customized yet"),
            Self::AlreadyCustomized => write!(f, "instance was already customized"),
            Self::CustomizationTooLong => {
                write!(f, "customization string exceeds 256 bytes")
            }
            Self::AlreadyFinalized => write!(f, "absorption phase already finalized"),
            Self::StillAbsorbing => write!(f, "squeeze requested before finalization"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Cxof128Error {}
