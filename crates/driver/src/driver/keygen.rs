use super::P256mDriver;
use crate::error::validate;
use crate::status::translate;
use p256m_api::{P256Backend, PsaResult};
use p256m_params::driver::{P256_PRIVATE_KEY_SIZE, P256_RAW_PUBLIC_KEY_SIZE};
use tracing::debug;
use zeroize::Zeroizing;

impl<B: P256Backend, E, A> P256mDriver<B, E, A> {
    /// Generate a key pair and store its private scalar in `key_buffer`
    ///
    /// `key_buffer` must be exactly 32 bytes. The public half is computed by
    /// the back-end and discarded; it can be recovered with
    /// [`export_public_key`](Self::export_public_key). Nothing is written to
    /// `key_buffer` unless generation succeeds.
    pub fn generate_key(&self, key_buffer: &mut [u8]) -> PsaResult<usize> {
        debug!(key_buffer_size = key_buffer.len(), "p256m generate_key");
        let out = validate::exact_array_mut::<P256_PRIVATE_KEY_SIZE>("generate_key", key_buffer)?;

        let mut private_key = Zeroizing::new([0u8; P256_PRIVATE_KEY_SIZE]);
        let mut public_key = [0u8; P256_RAW_PUBLIC_KEY_SIZE];
        translate(self.backend.gen_keypair(&mut private_key, &mut public_key))?;

        out.copy_from_slice(&*private_key);
        Ok(P256_PRIVATE_KEY_SIZE)
    }
}
