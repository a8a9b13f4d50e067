//! Minimal P-256 back-end interface
//!
//! The back-end works on fixed-size raw arrays only: 32-byte scalars, 64-byte
//! untagged `X || Y` points, 64-byte `R || S` signatures. It never sees PSA
//! framing such as the `0x04` point tag.

use crate::status::BackendStatus;
use p256m_params::driver::{
    P256_PRIVATE_KEY_SIZE, P256_RAW_PUBLIC_KEY_SIZE, P256_SHARED_SECRET_SIZE, P256_SIGNATURE_SIZE,
};

/// Fixed-layout SECP256R1 primitives
///
/// Every method returns a [`BackendStatus`]; output arrays are only meaningful
/// when the status is `Success`.
pub trait P256Backend {
    /// Generate a key pair
    fn gen_keypair(
        &self,
        private_key: &mut [u8; P256_PRIVATE_KEY_SIZE],
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus;

    /// Compute the ECDH shared secret (X coordinate of `d * Q`)
    fn ecdh_shared_secret(
        &self,
        shared_secret: &mut [u8; P256_SHARED_SECRET_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        peer_public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus;

    /// Sign an already-computed hash
    fn ecdsa_sign(
        &self,
        signature: &mut [u8; P256_SIGNATURE_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus;

    /// Verify a signature over an already-computed hash
    fn ecdsa_verify(
        &self,
        signature: &[u8; P256_SIGNATURE_SIZE],
        public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus;

    /// Compute the public key `d * G` belonging to a private key
    fn public_from_private(
        &self,
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
    ) -> BackendStatus;
}

impl<B: P256Backend + ?Sized> P256Backend for &B {
    fn gen_keypair(
        &self,
        private_key: &mut [u8; P256_PRIVATE_KEY_SIZE],
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus {
        (**self).gen_keypair(private_key, public_key)
    }

    fn ecdh_shared_secret(
        &self,
        shared_secret: &mut [u8; P256_SHARED_SECRET_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        peer_public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus {
        (**self).ecdh_shared_secret(shared_secret, private_key, peer_public_key)
    }

    fn ecdsa_sign(
        &self,
        signature: &mut [u8; P256_SIGNATURE_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus {
        (**self).ecdsa_sign(signature, private_key, hash)
    }

    fn ecdsa_verify(
        &self,
        signature: &[u8; P256_SIGNATURE_SIZE],
        public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus {
        (**self).ecdsa_verify(signature, public_key, hash)
    }

    fn public_from_private(
        &self,
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
    ) -> BackendStatus {
        (**self).public_from_private(public_key, private_key)
    }
}
