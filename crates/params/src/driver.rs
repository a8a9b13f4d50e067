//! Buffer layout shared by the driver and its back-end

use crate::traditional::{ecdh, ecdsa};

/// Raw big-endian private scalar
pub const P256_PRIVATE_KEY_SIZE: usize = ecdsa::ECDSA_P256_SCALAR_SIZE;

/// PSA public key: tag byte followed by `X || Y`
pub const P256_PUBLIC_KEY_SIZE: usize = ecdsa::ECDSA_P256_PUBLIC_KEY_SIZE;

/// Back-end public key: `X || Y` without the tag
pub const P256_RAW_PUBLIC_KEY_SIZE: usize = P256_PUBLIC_KEY_SIZE - 1;

/// Raw `R || S` signature
pub const P256_SIGNATURE_SIZE: usize = ecdsa::ECDSA_P256_SIGNATURE_SIZE;

/// ECDH output (X coordinate of the shared point)
pub const P256_SHARED_SECRET_SIZE: usize = ecdh::ECDH_P256_SHARED_SECRET_SIZE;

/// Digest width the back-end reduces hashes to
pub const P256_HASH_SIZE: usize = ecdsa::ECDSA_P256_HASH_SIZE;

/// SEC1 tag of an uncompressed point
pub const P256_UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Key size in bits as reported by key attributes
pub const P256_KEY_BITS: usize = 256;

/// Candidate scalars drawn before key generation gives up
pub const P256_KEYGEN_ATTEMPTS: usize = 4;
