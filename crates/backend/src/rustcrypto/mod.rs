//! [`P256Backend`] over the RustCrypto `p256` crate
//!
//! Inputs arrive as raw arrays and leave as raw arrays; every failure of the
//! underlying crate is folded into one of the back-end status codes:
//!
//! - scalar outside `[1, n-1]` → `InvalidPrivkey`
//! - point not on the curve → `InvalidPubkey`
//! - `R` or `S` outside `[1, n-1]`, or a failing verification equation →
//!   `InvalidSignature`
//! - entropy failure or exhausted key-generation attempts → `RandomFailed`

use crate::entropy::EntropySource;
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, FieldBytes, PublicKey, SecretKey};
use p256m_api::{BackendStatus, P256Backend};
use p256m_params::driver::{
    P256_HASH_SIZE, P256_KEYGEN_ATTEMPTS, P256_PRIVATE_KEY_SIZE, P256_RAW_PUBLIC_KEY_SIZE,
    P256_SHARED_SECRET_SIZE, P256_SIGNATURE_SIZE,
};
use rand::rngs::OsRng;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Status for a signing failure the status set has no name for
///
/// RFC 6979 nonces make `r = 0` or `s = 0` a property of the inputs, so there
/// is nothing to retry.
pub const P256_SIGN_FAILED: i32 = -5;

/// SECP256R1 primitives with RustCrypto arithmetic
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoBackend<E = OsRng> {
    entropy: E,
}

impl RustCryptoBackend<OsRng> {
    /// Back-end drawing key material from the operating system
    pub const fn new() -> Self {
        Self { entropy: OsRng }
    }
}

impl<E: EntropySource> RustCryptoBackend<E> {
    pub const fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }
}

fn decode_private(private_key: &[u8; P256_PRIVATE_KEY_SIZE]) -> Result<SecretKey, BackendStatus> {
    SecretKey::from_bytes(FieldBytes::from_slice(private_key))
        .map_err(|_| BackendStatus::InvalidPrivkey)
}

fn decode_public(public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE]) -> Result<PublicKey, BackendStatus> {
    let point = EncodedPoint::from_untagged_bytes(public_key.into());
    Option::<PublicKey>::from(PublicKey::from_encoded_point(&point)).ok_or(BackendStatus::InvalidPubkey)
}

fn encode_public(public: &PublicKey, out: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE]) {
    let point = public.to_encoded_point(false);
    // Skip the SEC1 tag
    out.copy_from_slice(&point.as_bytes()[1..]);
}

/// Reduce a hash to the 256-bit ECDSA integer input
///
/// Longer hashes keep their leftmost 256 bits; shorter ones are right-aligned,
/// which leaves their integer value unchanged.
fn digest_input(hash: &[u8]) -> [u8; P256_HASH_SIZE] {
    let mut digest = [0u8; P256_HASH_SIZE];
    if hash.len() >= P256_HASH_SIZE {
        digest.copy_from_slice(&hash[..P256_HASH_SIZE]);
    } else {
        digest[P256_HASH_SIZE - hash.len()..].copy_from_slice(hash);
    }
    digest
}

fn status_of(result: Result<(), BackendStatus>) -> BackendStatus {
    match result {
        Ok(()) => BackendStatus::Success,
        Err(status) => status,
    }
}

impl<E: EntropySource> RustCryptoBackend<E> {
    fn try_gen_keypair(
        &self,
        private_key: &mut [u8; P256_PRIVATE_KEY_SIZE],
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> Result<(), BackendStatus> {
        let mut candidate = Zeroizing::new([0u8; P256_PRIVATE_KEY_SIZE]);
        for _ in 0..P256_KEYGEN_ATTEMPTS {
            if let Err(err) = self.entropy.try_fill(&mut candidate[..]) {
                debug!(error = %err, "entropy source failed");
                return Err(BackendStatus::RandomFailed);
            }
            // Rejection sampling: out-of-range candidates are drawn again
            if let Ok(secret) = decode_private(&candidate) {
                private_key.copy_from_slice(&candidate[..]);
                encode_public(&secret.public_key(), public_key);
                return Ok(());
            }
        }
        warn!(attempts = P256_KEYGEN_ATTEMPTS, "no valid scalar drawn");
        Err(BackendStatus::RandomFailed)
    }
}

fn try_ecdh(
    shared_secret: &mut [u8; P256_SHARED_SECRET_SIZE],
    private_key: &[u8; P256_PRIVATE_KEY_SIZE],
    peer_public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
) -> Result<(), BackendStatus> {
    let secret = decode_private(private_key)?;
    let peer = decode_public(peer_public_key)?;
    let shared = p256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
    shared_secret.copy_from_slice(shared.raw_secret_bytes());
    Ok(())
}

fn try_sign(
    signature: &mut [u8; P256_SIGNATURE_SIZE],
    private_key: &[u8; P256_PRIVATE_KEY_SIZE],
    hash: &[u8],
) -> Result<(), BackendStatus> {
    let secret = decode_private(private_key)?;
    let signing_key = SigningKey::from(&secret);
    let sig: Signature = signing_key
        .sign_prehash(&digest_input(hash))
        .map_err(|_| BackendStatus::Other(P256_SIGN_FAILED))?;
    signature.copy_from_slice(&sig.to_bytes());
    Ok(())
}

fn try_verify(
    signature: &[u8; P256_SIGNATURE_SIZE],
    public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
    hash: &[u8],
) -> Result<(), BackendStatus> {
    let verifying_key = VerifyingKey::from(decode_public(public_key)?);
    let sig = Signature::from_slice(signature).map_err(|_| BackendStatus::InvalidSignature)?;
    verifying_key
        .verify_prehash(&digest_input(hash), &sig)
        .map_err(|_| BackendStatus::InvalidSignature)
}

fn try_public_from_private(
    public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
    private_key: &[u8; P256_PRIVATE_KEY_SIZE],
) -> Result<(), BackendStatus> {
    let secret = decode_private(private_key)?;
    encode_public(&secret.public_key(), public_key);
    Ok(())
}

impl<E: EntropySource> P256Backend for RustCryptoBackend<E> {
    fn gen_keypair(
        &self,
        private_key: &mut [u8; P256_PRIVATE_KEY_SIZE],
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus {
        status_of(self.try_gen_keypair(private_key, public_key))
    }

    fn ecdh_shared_secret(
        &self,
        shared_secret: &mut [u8; P256_SHARED_SECRET_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        peer_public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus {
        status_of(try_ecdh(shared_secret, private_key, peer_public_key))
    }

    fn ecdsa_sign(
        &self,
        signature: &mut [u8; P256_SIGNATURE_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus {
        status_of(try_sign(signature, private_key, hash))
    }

    fn ecdsa_verify(
        &self,
        signature: &[u8; P256_SIGNATURE_SIZE],
        public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus {
        status_of(try_verify(signature, public_key, hash))
    }

    fn public_from_private(
        &self,
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
    ) -> BackendStatus {
        status_of(try_public_from_private(public_key, private_key))
    }
}
