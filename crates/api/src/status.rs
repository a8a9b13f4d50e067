//! Result codes reported by a minimal P-256 back-end
//!
//! The back-end speaks a small integer protocol. `BackendStatus` names the
//! values it is known to produce and keeps anything else as `Other` so that
//! every integer has a representation and nothing is lost on the way in.

/// Raw integer values of the back-end result codes
pub mod codes {
    pub const P256_SUCCESS: i32 = 0;
    pub const P256_RANDOM_FAILED: i32 = -1;
    pub const P256_INVALID_PUBKEY: i32 = -2;
    pub const P256_INVALID_PRIVKEY: i32 = -3;
    pub const P256_INVALID_SIGNATURE: i32 = -4;
}

/// Status returned by every [`P256Backend`](crate::P256Backend) primitive
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendStatus {
    Success,
    RandomFailed,
    InvalidPubkey,
    InvalidPrivkey,
    InvalidSignature,
    /// A value outside the documented set
    Other(i32),
}

impl BackendStatus {
    /// Interpret a raw back-end integer
    pub const fn from_code(code: i32) -> Self {
        match code {
            codes::P256_SUCCESS => Self::Success,
            codes::P256_RANDOM_FAILED => Self::RandomFailed,
            codes::P256_INVALID_PUBKEY => Self::InvalidPubkey,
            codes::P256_INVALID_PRIVKEY => Self::InvalidPrivkey,
            codes::P256_INVALID_SIGNATURE => Self::InvalidSignature,
            other => Self::Other(other),
        }
    }

    /// The raw back-end integer for this status
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => codes::P256_SUCCESS,
            Self::RandomFailed => codes::P256_RANDOM_FAILED,
            Self::InvalidPubkey => codes::P256_INVALID_PUBKEY,
            Self::InvalidPrivkey => codes::P256_INVALID_PRIVKEY,
            Self::InvalidSignature => codes::P256_INVALID_SIGNATURE,
            Self::Other(code) => code,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<i32> for BackendStatus {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}
