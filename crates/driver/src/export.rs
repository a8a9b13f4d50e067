//! Public key export
//!
//! The driver's own verify-with-key-pair path goes through a
//! [`PublicKeyExporter`]; [`BackendExporter`] is the one that derives the
//! point with the same back-end the driver signs with.

use crate::error::validate;
use crate::status::translate;
use p256m_api::{KeyAttributes, KeyMaterial, P256Backend, PsaResult, PublicKeyExporter};
use p256m_params::driver::{
    P256_PRIVATE_KEY_SIZE, P256_PUBLIC_KEY_SIZE, P256_RAW_PUBLIC_KEY_SIZE,
    P256_UNCOMPRESSED_POINT_TAG,
};
use tracing::debug;

/// Write the uncompressed public key for `key` into `data`
///
/// A key pair is reduced to its public point by the back-end; a public key
/// is checked and copied. Either way exactly 65 bytes are written and `data`
/// must hold at least that many.
pub fn export_public_key<B: P256Backend + ?Sized>(
    backend: &B,
    key: KeyMaterial<'_>,
    data: &mut [u8],
) -> PsaResult<usize> {
    debug!(
        key_pair = key.is_key_pair(),
        key_size = key.as_bytes().len(),
        data_size = data.len(),
        "p256m export_public_key"
    );
    let out = validate::prefix_array_mut::<P256_PUBLIC_KEY_SIZE>("export_public_key", data)?;

    let mut raw = [0u8; P256_RAW_PUBLIC_KEY_SIZE];
    match key {
        KeyMaterial::KeyPair(private) => {
            let private = validate::exact_array::<P256_PRIVATE_KEY_SIZE>(
                "export_public_key",
                private,
            )?;
            translate(backend.public_from_private(&mut raw, private))?;
        }
        KeyMaterial::PublicOnly(public) => {
            raw = *validate::uncompressed_point("export_public_key", public)?;
        }
    }

    out[0] = P256_UNCOMPRESSED_POINT_TAG;
    out[1..].copy_from_slice(&raw);
    Ok(P256_PUBLIC_KEY_SIZE)
}

/// [`PublicKeyExporter`] backed by a [`P256Backend`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BackendExporter<B> {
    backend: B,
}

impl<B> BackendExporter<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: P256Backend> PublicKeyExporter for BackendExporter<B> {
    fn export_public_key(
        &self,
        attributes: &KeyAttributes,
        key_buffer: &[u8],
        data: &mut [u8],
    ) -> PsaResult<usize> {
        let key = KeyMaterial::from_attributes(attributes, key_buffer)?;
        export_public_key(&self.backend, key, data)
    }
}
