use super::P256mDriver;
use crate::error::validate;
use crate::status::translate;
use p256m_api::{Algorithm, P256Backend, PsaResult};
use p256m_params::driver::{P256_PRIVATE_KEY_SIZE, P256_SHARED_SECRET_SIZE};
use tracing::debug;
use zeroize::Zeroizing;

impl<B: P256Backend, E, A> P256mDriver<B, E, A> {
    /// Raw ECDH key agreement
    ///
    /// `key_buffer` is the 32-byte private scalar, `peer_key` the peer's
    /// 65-byte uncompressed point. The 32-byte X coordinate of the shared
    /// point goes to the front of `shared_secret`, which may be larger.
    pub fn agree_key(
        &self,
        key_buffer: &[u8],
        peer_key: &[u8],
        shared_secret: &mut [u8],
    ) -> PsaResult<usize> {
        debug!(
            alg = Algorithm::ECDH.0,
            key_buffer_size = key_buffer.len(),
            peer_key_size = peer_key.len(),
            shared_secret_size = shared_secret.len(),
            "p256m agree_key"
        );
        let private_key =
            validate::exact_array::<P256_PRIVATE_KEY_SIZE>("agree_key", key_buffer)?;
        let peer_key = validate::uncompressed_point("agree_key", peer_key)?;
        let out =
            validate::prefix_array_mut::<P256_SHARED_SECRET_SIZE>("agree_key", shared_secret)?;

        let mut secret = Zeroizing::new([0u8; P256_SHARED_SECRET_SIZE]);
        translate(self.backend.ecdh_shared_secret(&mut secret, private_key, peer_key))?;

        out.copy_from_slice(&*secret);
        Ok(P256_SHARED_SECRET_SIZE)
    }
}
