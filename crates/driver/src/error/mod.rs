//! Error handling for driver operations

pub use p256m_api::error::{psa_status_code, PsaError, PsaResult};

// Include validation submodule
pub mod validate;
