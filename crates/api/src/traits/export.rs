//! Public-key export collaborator

use crate::error::PsaResult;
use crate::types::KeyAttributes;

/// Derives the uncompressed public key of a key pair
///
/// Implementations write `0x04 || X || Y` into `data` and return the number of
/// bytes written. Their failures are already PSA statuses.
pub trait PublicKeyExporter {
    fn export_public_key(
        &self,
        attributes: &KeyAttributes,
        key_buffer: &[u8],
        data: &mut [u8],
    ) -> PsaResult<usize>;
}

impl<E: PublicKeyExporter + ?Sized> PublicKeyExporter for &E {
    fn export_public_key(
        &self,
        attributes: &KeyAttributes,
        key_buffer: &[u8],
        data: &mut [u8],
    ) -> PsaResult<usize> {
        (**self).export_public_key(attributes, key_buffer, data)
    }
}
