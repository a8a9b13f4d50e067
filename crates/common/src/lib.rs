//! Common implementations shared by the p256m driver crates
//!
//! Currently this is the scratch-memory layer: an allocator seam the driver
//! borrows its temporary buffers through, and the guards that hand those
//! buffers back on every exit path.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod security;

pub use security::{HeapAllocator, ScratchAllocator, ScratchBlock, ScratchPair, ScopedBlock};
