use super::P256mDriver;
use crate::error::validate;
use crate::status::translate;
use p256m_api::{Algorithm, P256Backend, PsaResult};
use p256m_params::driver::{P256_PRIVATE_KEY_SIZE, P256_SIGNATURE_SIZE};
use tracing::debug;

impl<B: P256Backend, E, A> P256mDriver<B, E, A> {
    /// ECDSA signature over a precomputed hash
    ///
    /// `key_buffer` must be the 32-byte private scalar and `signature` must
    /// be exactly 64 bytes; it receives `R || S`. `alg` is not interpreted:
    /// the hash is signed as given, truncated or padded by the back-end to
    /// the curve order length.
    pub fn sign_hash(
        &self,
        key_buffer: &[u8],
        alg: Algorithm,
        hash: &[u8],
        signature: &mut [u8],
    ) -> PsaResult<usize> {
        debug!(
            alg = alg.0,
            key_buffer_size = key_buffer.len(),
            hash_length = hash.len(),
            signature_size = signature.len(),
            "p256m sign_hash"
        );
        let private_key = validate::exact_array::<P256_PRIVATE_KEY_SIZE>("sign_hash", key_buffer)?;
        let out = validate::exact_array_mut::<P256_SIGNATURE_SIZE>("sign_hash", signature)?;

        translate(self.backend.ecdsa_sign(out, private_key, hash))?;
        Ok(P256_SIGNATURE_SIZE)
    }
}
