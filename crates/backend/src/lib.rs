//! SECP256R1 back-end for the p256m PSA driver
//!
//! [`RustCryptoBackend`] exposes the fixed-layout, integer-status calling
//! convention of [`P256Backend`](p256m_api::P256Backend) on top of the
//! RustCrypto `p256` crate. Randomness for key generation comes from an
//! [`EntropySource`].

#![cfg_attr(not(feature = "std"), no_std)]

pub mod entropy;
pub mod rustcrypto;

pub use entropy::EntropySource;
pub use rustcrypto::RustCryptoBackend;
