//! PSA driver entry points for SECP256R1 on a minimal P-256 back-end
//!
//! The front-end works with opaque key buffers, key attributes and PSA status
//! values; the back-end works with fixed-size raw arrays and a small integer
//! status. [`P256mDriver`] sits between the two:
//!
//! - buffer sizes and encodings are checked before any back-end call, and a
//!   failed check is `NotSupported` with no output written
//! - the `0x04` tag of uncompressed public keys is stripped on the way in and
//!   added on the way out
//! - every back-end status crosses the boundary through [`status::translate`]
//!
//! Verification with a key pair first derives the public key through a
//! [`PublicKeyExporter`](p256m_api::PublicKeyExporter) into scratch memory
//! owned by that single call.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod driver;
pub mod error;
pub mod export;
pub mod status;

pub use driver::P256mDriver;
pub use export::{export_public_key, BackendExporter};
pub use status::{translate, translate_code};
