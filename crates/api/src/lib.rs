//! Public API types for the p256m PSA driver
//!
//! This crate provides the surface shared by the driver, its back-ends and its
//! callers: the PSA-side error enumeration, the back-end status enumeration,
//! key attribute and key material types, and the collaborator traits that the
//! driver delegates to.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod status;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{psa_status_code, PsaError, PsaResult};
pub use status::BackendStatus;
pub use types::*;

pub use traits::{P256Backend, PublicKeyExporter};
