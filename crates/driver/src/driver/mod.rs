//! The driver value and its entry points
//!
//! [`P256mDriver`] owns nothing but its three collaborators: the back-end that
//! does the curve arithmetic, the exporter used to derive a public key from a
//! key pair during verification, and the allocator that supplies scratch
//! memory for that derivation. Each entry point is a separate `impl` block in
//! its own file.

mod agreement;
mod keygen;
mod sign;
mod verify;

use crate::export::{self, BackendExporter};
use p256m_api::{KeyMaterial, P256Backend, PsaResult};
use p256m_common::HeapAllocator;

/// SECP256R1 PSA driver over a [`P256Backend`]
#[derive(Debug, Clone, Default)]
pub struct P256mDriver<B, E = BackendExporter<B>, A = HeapAllocator> {
    backend: B,
    exporter: E,
    allocator: A,
}

impl<B: P256Backend + Clone> P256mDriver<B> {
    /// Driver that exports with its own back-end and allocates on the heap
    pub fn new(backend: B) -> Self {
        Self {
            exporter: BackendExporter::new(backend.clone()),
            backend,
            allocator: HeapAllocator,
        }
    }
}

impl<B, E, A> P256mDriver<B, E, A> {
    /// Driver with every collaborator supplied by the caller
    pub const fn with_parts(backend: B, exporter: E, allocator: A) -> Self {
        Self {
            backend,
            exporter,
            allocator,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn into_parts(self) -> (B, E, A) {
        (self.backend, self.exporter, self.allocator)
    }
}

impl<B: P256Backend, E, A> P256mDriver<B, E, A> {
    /// Export the uncompressed public key of `key` into `data`
    ///
    /// See [`export::export_public_key`].
    pub fn export_public_key(&self, key: KeyMaterial<'_>, data: &mut [u8]) -> PsaResult<usize> {
        export::export_public_key(&self.backend, key, data)
    }
}
