//! Error handling for the PSA side of the driver boundary

pub mod types;

// Re-export the primary error type and result
pub use types::{PsaError, PsaResult};

/// PSA numeric status values
///
/// These mirror `psa_status_t` so results can be handed back to a C-shaped
/// caller without a lookup table on the other side.
pub mod codes {
    pub const PSA_SUCCESS: i32 = 0;
    pub const PSA_ERROR_GENERIC_ERROR: i32 = -132;
    pub const PSA_ERROR_NOT_SUPPORTED: i32 = -134;
    pub const PSA_ERROR_INVALID_ARGUMENT: i32 = -135;
    pub const PSA_ERROR_INSUFFICIENT_MEMORY: i32 = -141;
    pub const PSA_ERROR_INVALID_SIGNATURE: i32 = -149;
}

/// Collapse a driver result into its `psa_status_t` value
///
/// `Ok` of any payload is `PSA_SUCCESS`.
pub fn psa_status_code<T>(result: &PsaResult<T>) -> i32 {
    match result {
        Ok(_) => codes::PSA_SUCCESS,
        Err(e) => e.code(),
    }
}
