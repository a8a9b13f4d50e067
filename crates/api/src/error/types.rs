//! Error type definitions for driver operations

#[cfg(feature = "std")]
use thiserror::Error;

use super::codes;

/// Result type for driver operations
///
/// `Ok` is `PSA_SUCCESS`; the payload is the number of bytes written where an
/// operation produces output.
pub type PsaResult<T> = core::result::Result<T, PsaError>;

/// PSA status values a driver operation can fail with
#[cfg_attr(feature = "std", derive(Error))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsaError {
    /// Malformed input rejected by the back-end (bad scalar or bad point)
    #[cfg_attr(feature = "std", error("invalid argument"))]
    InvalidArgument,

    /// Verification ran and the signature did not validate
    #[cfg_attr(feature = "std", error("invalid signature"))]
    InvalidSignature,

    /// Buffer size or encoding precondition failed before reaching the back-end
    #[cfg_attr(feature = "std", error("not supported"))]
    NotSupported,

    /// Scratch allocation failed
    #[cfg_attr(feature = "std", error("insufficient memory"))]
    InsufficientMemory,

    /// Randomness failure or an unrecognised back-end status
    #[cfg_attr(feature = "std", error("generic error"))]
    GenericError,
}

impl PsaError {
    /// Every variant, in declaration order
    pub const ALL: [PsaError; 5] = [
        PsaError::InvalidArgument,
        PsaError::InvalidSignature,
        PsaError::NotSupported,
        PsaError::InsufficientMemory,
        PsaError::GenericError,
    ];

    /// The `psa_status_t` value for this error
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidArgument => codes::PSA_ERROR_INVALID_ARGUMENT,
            Self::InvalidSignature => codes::PSA_ERROR_INVALID_SIGNATURE,
            Self::NotSupported => codes::PSA_ERROR_NOT_SUPPORTED,
            Self::InsufficientMemory => codes::PSA_ERROR_INSUFFICIENT_MEMORY,
            Self::GenericError => codes::PSA_ERROR_GENERIC_ERROR,
        }
    }

    /// Map a `psa_status_t` value back to an error
    ///
    /// Returns `None` for `PSA_SUCCESS` and for values this driver never emits.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            codes::PSA_ERROR_INVALID_ARGUMENT => Some(Self::InvalidArgument),
            codes::PSA_ERROR_INVALID_SIGNATURE => Some(Self::InvalidSignature),
            codes::PSA_ERROR_NOT_SUPPORTED => Some(Self::NotSupported),
            codes::PSA_ERROR_INSUFFICIENT_MEMORY => Some(Self::InsufficientMemory),
            codes::PSA_ERROR_GENERIC_ERROR => Some(Self::GenericError),
            _ => None,
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for PsaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Self::InvalidArgument => "invalid argument",
            Self::InvalidSignature => "invalid signature",
            Self::NotSupported => "not supported",
            Self::InsufficientMemory => "insufficient memory",
            Self::GenericError => "generic error",
        };
        f.write_str(text)
    }
}
