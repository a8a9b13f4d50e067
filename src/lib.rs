//! # p256m-psa
//!
//! PSA crypto driver adapter for SECP256R1 over a minimal, fixed-layout P-256
//! back-end.
//!
//! ## Usage
//!
//! ```rust
//! use p256m_psa::prelude::*;
//!
//! let driver = P256mDriver::new(RustCryptoBackend::new());
//!
//! let mut private_key = [0u8; 32];
//! driver.generate_key(&mut private_key)?;
//!
//! let hash = [0x42u8; 32];
//! let mut signature = [0u8; 64];
//! driver.sign_hash(&private_key, Algorithm::ECDSA_SHA256, &hash, &mut signature)?;
//!
//! let key = KeyMaterial::KeyPair(&private_key);
//! driver.verify_hash(key, Algorithm::ECDSA_SHA256, &hash, &signature)?;
//! # Ok::<(), PsaError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `backend` (default): the RustCrypto back-end in [`backend`]
//! - `serde`: serialization of attribute and error types
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`p256m-api`]: error, status and key types, collaborator traits
//! - [`p256m-params`]: sizes and constants
//! - [`p256m-common`]: scratch memory
//! - [`p256m-driver`]: the driver entry points
//! - [`p256m-backend`]: RustCrypto `p256` back-end

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use p256m_api as api;
pub use p256m_common as common;
pub use p256m_driver as driver;
pub use p256m_params as params;

// Feature-gated re-exports
#[cfg(feature = "backend")]
pub use p256m_backend as backend;

pub use zeroize;

/// Common imports for p256m users
pub mod prelude {
    pub use crate::api::{
        psa_status_code, Algorithm, BackendStatus, KeyAttributes, KeyMaterial, P256Backend,
        PsaError, PsaResult, PublicKeyExporter,
    };

    pub use crate::common::{HeapAllocator, ScratchAllocator};

    pub use crate::driver::{BackendExporter, P256mDriver};

    #[cfg(feature = "backend")]
    pub use crate::backend::{EntropySource, RustCryptoBackend};
}
