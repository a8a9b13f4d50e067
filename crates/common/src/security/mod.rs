//! Memory handling for sensitive intermediates

pub mod scratch;

pub use scratch::{HeapAllocator, ScratchAllocator, ScratchBlock, ScratchPair, ScopedBlock};
