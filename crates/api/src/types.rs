//! Key description types used at the driver boundary
//!
//! The front-end describes a key with attributes and hands over an opaque
//! buffer. Only the facts this driver acts on are modelled: which ECC family a
//! key belongs to, how many bits it has, and whether the buffer holds a key
//! pair or only a public key.

use crate::error::{PsaError, PsaResult};
use p256m_params::driver::P256_KEY_BITS;

/// Opaque algorithm identifier (`psa_algorithm_t`)
///
/// The driver accepts it on sign and verify and only records it in logs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Algorithm(pub u32);

impl Algorithm {
    /// `PSA_ALG_ECDSA_ANY`
    pub const ECDSA_ANY: Self = Self(0x0600_0600);
    /// `PSA_ALG_ECDSA(PSA_ALG_SHA_256)`
    pub const ECDSA_SHA256: Self = Self(0x0600_0609);
    /// `PSA_ALG_ECDH`
    pub const ECDH: Self = Self(0x0902_0000);
}

/// Elliptic curve family (`psa_ecc_family_t`)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EccFamily {
    SecpK1,
    SecpR1,
    BrainpoolPR1,
    Montgomery,
}

impl EccFamily {
    pub const fn to_psa(self) -> u8 {
        match self {
            Self::SecpK1 => 0x17,
            Self::SecpR1 => 0x12,
            Self::BrainpoolPR1 => 0x30,
            Self::Montgomery => 0x41,
        }
    }

    pub const fn from_psa(value: u8) -> Option<Self> {
        match value {
            0x17 => Some(Self::SecpK1),
            0x12 => Some(Self::SecpR1),
            0x30 => Some(Self::BrainpoolPR1),
            0x41 => Some(Self::Montgomery),
            _ => None,
        }
    }
}

const PSA_KEY_TYPE_ECC_KEY_PAIR_BASE: u16 = 0x7100;
const PSA_KEY_TYPE_ECC_PUBLIC_KEY_BASE: u16 = 0x4100;
const PSA_KEY_TYPE_ECC_CURVE_MASK: u16 = 0x00ff;

/// Key type (`psa_key_type_t`), reduced to what this driver distinguishes
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    EccKeyPair(EccFamily),
    EccPublicKey(EccFamily),
    /// Any non-ECC or unrecognised key type, kept as its raw value
    Other(u16),
}

impl KeyType {
    pub const fn to_psa(self) -> u16 {
        match self {
            Self::EccKeyPair(family) => PSA_KEY_TYPE_ECC_KEY_PAIR_BASE | family.to_psa() as u16,
            Self::EccPublicKey(family) => PSA_KEY_TYPE_ECC_PUBLIC_KEY_BASE | family.to_psa() as u16,
            Self::Other(raw) => raw,
        }
    }

    pub const fn from_psa(raw: u16) -> Self {
        let base = raw & !PSA_KEY_TYPE_ECC_CURVE_MASK;
        let family = EccFamily::from_psa((raw & PSA_KEY_TYPE_ECC_CURVE_MASK) as u8);
        match (base, family) {
            (PSA_KEY_TYPE_ECC_KEY_PAIR_BASE, Some(family)) => Self::EccKeyPair(family),
            (PSA_KEY_TYPE_ECC_PUBLIC_KEY_BASE, Some(family)) => Self::EccPublicKey(family),
            _ => Self::Other(raw),
        }
    }

    pub const fn family(self) -> Option<EccFamily> {
        match self {
            Self::EccKeyPair(family) | Self::EccPublicKey(family) => Some(family),
            Self::Other(_) => None,
        }
    }
}

/// The subset of `psa_key_attributes_t` the driver reads
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyAttributes {
    pub key_type: KeyType,
    pub bits: usize,
}

impl KeyAttributes {
    pub const fn new(key_type: KeyType, bits: usize) -> Self {
        Self { key_type, bits }
    }

    /// Attributes of a SECP256R1 key pair
    pub const fn secp256r1_key_pair() -> Self {
        Self::new(KeyType::EccKeyPair(EccFamily::SecpR1), P256_KEY_BITS)
    }

    /// Attributes of a SECP256R1 public key
    pub const fn secp256r1_public_key() -> Self {
        Self::new(KeyType::EccPublicKey(EccFamily::SecpR1), P256_KEY_BITS)
    }

    /// Whether these attributes describe a key this driver can handle
    pub const fn is_p256m_supported(&self) -> bool {
        matches!(self.key_type.family(), Some(EccFamily::SecpR1)) && self.bits == P256_KEY_BITS
    }
}

/// Key buffer tagged with its representation
///
/// The front-end resolves attributes into this variant before the driver
/// dispatches, so the driver never inspects an untyped attribute blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterial<'a> {
    /// 65-byte uncompressed public key, `0x04 || X || Y`
    PublicOnly(&'a [u8]),
    /// 32-byte private scalar
    KeyPair(&'a [u8]),
}

impl<'a> KeyMaterial<'a> {
    /// Resolve a key buffer against its attributes
    ///
    /// Anything but a 256-bit SECP_R1 ECC key is `NotSupported`. Buffer sizes
    /// are not checked here; the individual operations own those checks.
    pub fn from_attributes(attributes: &KeyAttributes, buffer: &'a [u8]) -> PsaResult<Self> {
        if !attributes.is_p256m_supported() {
            return Err(PsaError::NotSupported);
        }
        match attributes.key_type {
            KeyType::EccKeyPair(_) => Ok(Self::KeyPair(buffer)),
            KeyType::EccPublicKey(_) => Ok(Self::PublicOnly(buffer)),
            KeyType::Other(_) => Err(PsaError::NotSupported),
        }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        match self {
            Self::PublicOnly(bytes) | Self::KeyPair(bytes) => bytes,
        }
    }

    pub fn is_key_pair(&self) -> bool {
        matches!(self, Self::KeyPair(_))
    }
}
