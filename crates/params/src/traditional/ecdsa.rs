//! Constants for ECDSA over P-256

/// Size of a raw `R || S` signature in bytes
pub const ECDSA_P256_SIGNATURE_SIZE: usize = 64;

/// Size of one signature component or scalar in bytes
pub const ECDSA_P256_SCALAR_SIZE: usize = 32;

/// Size of an uncompressed public key in bytes (`0x04 || X || Y`)
pub const ECDSA_P256_PUBLIC_KEY_SIZE: usize = 65;

/// Size of a SHA-256 digest, the hash normally paired with P-256
pub const ECDSA_P256_HASH_SIZE: usize = 32;
