//! Observable doubles for the driver's collaborators

use core::cell::{Cell, RefCell};
use p256m_api::{BackendStatus, KeyAttributes, P256Backend, PsaError, PsaResult, PublicKeyExporter};
use p256m_backend::{EntropySource, RustCryptoBackend};
use p256m_common::{ScratchAllocator, ScratchBlock};
use p256m_params::driver::{
    P256_PRIVATE_KEY_SIZE, P256_RAW_PUBLIC_KEY_SIZE, P256_SHARED_SECRET_SIZE, P256_SIGNATURE_SIZE,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// One back-end invocation as seen by [`RecordingBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    GenKeypair,
    EcdhSharedSecret,
    EcdsaSign { hash_len: usize },
    EcdsaVerify { hash_len: usize },
    PublicFromPrivate,
}

/// Back-end wrapper that logs every call
///
/// Calls go to `inner` unless a status has been forced, in which case the
/// forced status is returned and the output arrays are left alone.
pub struct RecordingBackend<B = RustCryptoBackend> {
    inner: B,
    calls: RefCell<Vec<Call>>,
    forced: Cell<Option<BackendStatus>>,
    verified_key: Cell<Option<[u8; P256_RAW_PUBLIC_KEY_SIZE]>>,
    peer_key: Cell<Option<[u8; P256_RAW_PUBLIC_KEY_SIZE]>>,
}

impl RecordingBackend {
    /// Record calls to the default RustCrypto back-end
    pub fn new() -> Self {
        Self::wrapping(RustCryptoBackend::new())
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: P256Backend> RecordingBackend<B> {
    pub fn wrapping(inner: B) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
            forced: Cell::new(None),
            verified_key: Cell::new(None),
            peer_key: Cell::new(None),
        }
    }

    /// Answer every later call with `code`
    pub fn force(&self, code: i32) {
        self.forced.set(Some(BackendStatus::from_code(code)));
    }

    pub fn unforce(&self) {
        self.forced.set(None);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// The raw 64-byte key most recently handed to `ecdsa_verify`
    pub fn verified_key(&self) -> Option<[u8; P256_RAW_PUBLIC_KEY_SIZE]> {
        self.verified_key.get()
    }

    /// The raw 64-byte peer point most recently handed to `ecdh_shared_secret`
    pub fn peer_key(&self) -> Option<[u8; P256_RAW_PUBLIC_KEY_SIZE]> {
        self.peer_key.get()
    }

    fn record(&self, call: Call) -> Option<BackendStatus> {
        self.calls.borrow_mut().push(call);
        self.forced.get()
    }
}

impl<B: P256Backend> P256Backend for RecordingBackend<B> {
    fn gen_keypair(
        &self,
        private_key: &mut [u8; P256_PRIVATE_KEY_SIZE],
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus {
        self.record(Call::GenKeypair)
            .unwrap_or_else(|| self.inner.gen_keypair(private_key, public_key))
    }

    fn ecdh_shared_secret(
        &self,
        shared_secret: &mut [u8; P256_SHARED_SECRET_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        peer_public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
    ) -> BackendStatus {
        self.peer_key.set(Some(*peer_public_key));
        self.record(Call::EcdhSharedSecret).unwrap_or_else(|| {
            self.inner
                .ecdh_shared_secret(shared_secret, private_key, peer_public_key)
        })
    }

    fn ecdsa_sign(
        &self,
        signature: &mut [u8; P256_SIGNATURE_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus {
        self.record(Call::EcdsaSign { hash_len: hash.len() })
            .unwrap_or_else(|| self.inner.ecdsa_sign(signature, private_key, hash))
    }

    fn ecdsa_verify(
        &self,
        signature: &[u8; P256_SIGNATURE_SIZE],
        public_key: &[u8; P256_RAW_PUBLIC_KEY_SIZE],
        hash: &[u8],
    ) -> BackendStatus {
        self.verified_key.set(Some(*public_key));
        self.record(Call::EcdsaVerify { hash_len: hash.len() })
            .unwrap_or_else(|| self.inner.ecdsa_verify(signature, public_key, hash))
    }

    fn public_from_private(
        &self,
        public_key: &mut [u8; P256_RAW_PUBLIC_KEY_SIZE],
        private_key: &[u8; P256_PRIVATE_KEY_SIZE],
    ) -> BackendStatus {
        self.record(Call::PublicFromPrivate)
            .unwrap_or_else(|| self.inner.public_from_private(public_key, private_key))
    }
}

/// Allocator that counts live blocks and can refuse a chosen request
#[derive(Default)]
pub struct TrackingAllocator {
    attempts: Cell<usize>,
    live: Cell<usize>,
    peak: Cell<usize>,
    fail_at: Cell<Option<usize>>,
}

impl TrackingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse the `index`th request (zero-based); all others succeed
    pub fn failing_at(index: usize) -> Self {
        let allocator = Self::default();
        allocator.fail_at.set(Some(index));
        allocator
    }

    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn peak(&self) -> usize {
        self.peak.get()
    }
}

impl ScratchAllocator for TrackingAllocator {
    fn allocate(&self, size: usize) -> Option<ScratchBlock> {
        let index = self.attempts.get();
        self.attempts.set(index + 1);
        if self.fail_at.get() == Some(index) {
            return None;
        }
        let block = ScratchBlock::zeroed(size)?;
        self.live.set(self.live.get() + 1);
        self.peak.set(self.peak.get().max(self.live.get()));
        Some(block)
    }

    fn release(&self, block: ScratchBlock) {
        self.live.set(self.live.get() - 1);
        drop(block);
    }
}

/// Exporter that always fails with the given error and counts its calls
pub struct FailingExporter {
    error: PsaError,
    calls: Cell<usize>,
}

impl FailingExporter {
    pub fn new(error: PsaError) -> Self {
        Self {
            error,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PublicKeyExporter for FailingExporter {
    fn export_public_key(
        &self,
        _attributes: &KeyAttributes,
        _key_buffer: &[u8],
        _data: &mut [u8],
    ) -> PsaResult<usize> {
        self.calls.set(self.calls.get() + 1);
        Err(self.error)
    }
}

/// Reproducible entropy for key generation
pub struct SeededEntropy(RefCell<ChaCha20Rng>);

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self(RefCell::new(ChaCha20Rng::seed_from_u64(seed)))
    }
}

impl EntropySource for SeededEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.borrow_mut().try_fill_bytes(dest)
    }
}

/// Entropy source whose every request fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn try_fill(&self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        let code = core::num::NonZeroU32::new(rand::Error::CUSTOM_START)
            .expect("CUSTOM_START is non-zero");
        Err(rand::Error::from(code))
    }
}
