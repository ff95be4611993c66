//! GPU buffer lifecycle.
//!
//! Buffers are write-once: allocated with their full contents and never
//! resized or partially updated. A [`GpuBuffer`] releases its storage exactly
//! once, either through [`BufferAllocator::release`] or when dropped.

mod allocator;
mod handle;
mod target;

pub(crate) use allocator::BufferLedger;

pub use allocator::BufferAllocator;
pub use handle::GpuBuffer;
pub use target::BufferTarget;
