//! Scratch allocation with guaranteed release
//!
//! A [`ScratchAllocator`] hands out [`ScratchBlock`]s and takes them back.
//! Release consumes the block, so a block can be released at most once and
//! there is no null handle to release. [`ScopedBlock`] ties one block to a
//! scope; [`ScratchPair`] owns the derived-key buffer and its length cell as a
//! single unit, so neither can outlive the other.

use alloc::vec::Vec;
use core::mem;
use p256m_api::{PsaError, PsaResult};
use zeroize::Zeroizing;

/// Size of the length cell in a [`ScratchPair`]
pub const LENGTH_CELL_SIZE: usize = mem::size_of::<usize>();

/// Zero-initialised heap buffer, wiped when dropped
#[derive(Default)]
pub struct ScratchBlock {
    data: Zeroizing<Vec<u8>>,
}

impl ScratchBlock {
    /// Allocate `size` zero bytes, or `None` if the allocation fails
    pub fn zeroed(size: usize) -> Option<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size).ok()?;
        data.resize(size, 0);
        Some(Self {
            data: Zeroizing::new(data),
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl core::fmt::Debug for ScratchBlock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ScratchBlock<{}>([REDACTED])", self.len())
    }
}

/// Source of scratch memory
pub trait ScratchAllocator {
    /// Allocate a zeroed block of exactly `size` bytes
    fn allocate(&self, size: usize) -> Option<ScratchBlock>;

    /// Give a block back
    fn release(&self, block: ScratchBlock) {
        drop(block);
    }
}

impl<A: ScratchAllocator + ?Sized> ScratchAllocator for &A {
    fn allocate(&self, size: usize) -> Option<ScratchBlock> {
        (**self).allocate(size)
    }

    fn release(&self, block: ScratchBlock) {
        (**self).release(block)
    }
}

/// Global-heap allocator using fallible reservation
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapAllocator;

impl ScratchAllocator for HeapAllocator {
    fn allocate(&self, size: usize) -> Option<ScratchBlock> {
        ScratchBlock::zeroed(size)
    }
}

/// A block that is released to its allocator when the guard drops
pub struct ScopedBlock<'a, A: ScratchAllocator + ?Sized> {
    allocator: &'a A,
    block: ScratchBlock,
}

impl<'a, A: ScratchAllocator + ?Sized> ScopedBlock<'a, A> {
    /// Acquire `size` bytes from `allocator`
    ///
    /// A short or oversized block counts as a failed allocation and is
    /// returned to the allocator immediately.
    pub fn acquire(allocator: &'a A, size: usize) -> PsaResult<Self> {
        let block = allocator.allocate(size).ok_or(PsaError::InsufficientMemory)?;
        if block.len() != size {
            allocator.release(block);
            return Err(PsaError::InsufficientMemory);
        }
        Ok(Self { allocator, block })
    }

    pub fn as_slice(&self) -> &[u8] {
        self.block.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.block.as_mut_slice()
    }
}

impl<A: ScratchAllocator + ?Sized> Drop for ScopedBlock<'_, A> {
    fn drop(&mut self) {
        let block = mem::take(&mut self.block);
        self.allocator.release(block);
    }
}

/// Derived-key buffer plus its length cell, acquired and released together
pub struct ScratchPair<'a, A: ScratchAllocator + ?Sized> {
    key: ScopedBlock<'a, A>,
    length: ScopedBlock<'a, A>,
}

impl<'a, A: ScratchAllocator + ?Sized> ScratchPair<'a, A> {
    /// Acquire a `key_size`-byte buffer and a length cell
    ///
    /// If the second allocation fails the first is released before the error
    /// is returned.
    pub fn acquire(allocator: &'a A, key_size: usize) -> PsaResult<Self> {
        let key = ScopedBlock::acquire(allocator, key_size)?;
        let length = ScopedBlock::acquire(allocator, LENGTH_CELL_SIZE)?;
        Ok(Self { key, length })
    }

    pub fn key(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn key_mut(&mut self) -> &mut [u8] {
        self.key.as_mut_slice()
    }

    pub fn set_length(&mut self, length: usize) {
        self.length.as_mut_slice().copy_from_slice(&length.to_ne_bytes());
    }

    pub fn length(&self) -> usize {
        let mut raw = [0u8; LENGTH_CELL_SIZE];
        raw.copy_from_slice(self.length.as_slice());
        usize::from_ne_bytes(raw)
    }

    /// The written prefix of the key buffer, clamped to its capacity
    pub fn written_key(&self) -> &[u8] {
        let key = self.key();
        &key[..self.length().min(key.len())]
    }
}
