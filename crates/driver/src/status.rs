//! Back-end status to PSA status translation

use p256m_api::{BackendStatus, PsaError, PsaResult};
use tracing::warn;

/// Translate a back-end status into a PSA result
///
/// Total over [`BackendStatus`]: unknown codes land in the explicit
/// `Other` arm as `GenericError`.
pub fn translate(status: BackendStatus) -> PsaResult<()> {
    match status {
        BackendStatus::Success => Ok(()),
        BackendStatus::InvalidPubkey | BackendStatus::InvalidPrivkey => {
            Err(PsaError::InvalidArgument)
        }
        BackendStatus::InvalidSignature => Err(PsaError::InvalidSignature),
        BackendStatus::RandomFailed => Err(PsaError::GenericError),
        BackendStatus::Other(code) => {
            warn!(code, "unrecognised back-end status");
            Err(PsaError::GenericError)
        }
    }
}

/// Translate a raw back-end integer
pub fn translate_code(code: i32) -> PsaResult<()> {
    translate(BackendStatus::from_code(code))
}
