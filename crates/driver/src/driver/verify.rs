use super::P256mDriver;
use crate::error::validate;
use crate::status::translate;
use p256m_api::{
    Algorithm, KeyAttributes, KeyMaterial, P256Backend, PsaResult, PublicKeyExporter,
};
use p256m_common::{ScratchAllocator, ScratchPair};
use p256m_params::driver::{P256_PUBLIC_KEY_SIZE, P256_SIGNATURE_SIZE};
use tracing::{debug, trace};

impl<B, E, A> P256mDriver<B, E, A>
where
    B: P256Backend,
    E: PublicKeyExporter,
    A: ScratchAllocator,
{
    /// ECDSA verification over a precomputed hash
    ///
    /// A key pair is first reduced to its public key through the exporter.
    /// `alg` is not interpreted.
    pub fn verify_hash(
        &self,
        key: KeyMaterial<'_>,
        alg: Algorithm,
        hash: &[u8],
        signature: &[u8],
    ) -> PsaResult<()> {
        debug!(
            alg = alg.0,
            key_pair = key.is_key_pair(),
            key_buffer_size = key.as_bytes().len(),
            hash_length = hash.len(),
            signature_length = signature.len(),
            "p256m verify_hash"
        );
        match key {
            KeyMaterial::PublicOnly(public_key) => {
                self.verify_hash_with_public_key(public_key, hash, signature)
            }
            KeyMaterial::KeyPair(private_key) => {
                self.verify_hash_with_key_pair(private_key, hash, signature)
            }
        }
    }

    /// Derive the public key of `key_buffer` into scratch memory and verify
    ///
    /// Both scratch blocks are returned to the allocator before this returns,
    /// on every path.
    pub fn verify_hash_with_key_pair(
        &self,
        key_buffer: &[u8],
        hash: &[u8],
        signature: &[u8],
    ) -> PsaResult<()> {
        let mut scratch = ScratchPair::acquire(&self.allocator, P256_PUBLIC_KEY_SIZE)?;

        let written = self
            .exporter
            .export_public_key(
                &KeyAttributes::secp256r1_key_pair(),
                key_buffer,
                scratch.key_mut(),
            )
            .map_err(|err| {
                trace!(?err, "public key export failed");
                err
            })?;
        scratch.set_length(written);

        self.verify_hash_with_public_key(scratch.written_key(), hash, signature)
    }
}

impl<B: P256Backend, E, A> P256mDriver<B, E, A> {
    /// Verify against a 65-byte uncompressed public key
    ///
    /// The key must be 65 bytes with a `0x04` tag and the signature exactly
    /// 64 bytes; the tag is stripped before the back-end sees the point.
    pub fn verify_hash_with_public_key(
        &self,
        key_buffer: &[u8],
        hash: &[u8],
        signature: &[u8],
    ) -> PsaResult<()> {
        let public_key = validate::uncompressed_point("verify_hash", key_buffer)?;
        let signature = validate::exact_array::<P256_SIGNATURE_SIZE>("verify_hash", signature)?;

        translate(self.backend.ecdsa_verify(signature, public_key, hash))
    }
}
