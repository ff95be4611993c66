use std::sync::Arc;

use super::{BufferLedger, BufferTarget};

/// Owning handle to one immutable GPU buffer.
///
/// There is no null state: a `GpuBuffer` that exists is valid, and dropping it
/// destroys the underlying storage. Handles are not `Clone`, so the release
/// happens exactly once.
#[derive(Debug)]
pub struct GpuBuffer {
    buffer: wgpu::Buffer,
    target: BufferTarget,
    size: u64,
    ledger: Arc<BufferLedger>,
}

impl GpuBuffer {
    pub(super) fn new(
        buffer: wgpu::Buffer,
        target: BufferTarget,
        size: u64,
        ledger: Arc<BufferLedger>,
    ) -> Self {
        ledger.record_allocation(size);
        Self {
            buffer,
            target,
            size,
            ledger,
        }
    }

    #[inline]
    pub fn target(&self) -> BufferTarget {
        self.target
    }

    /// Size of the uploaded payload in bytes.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Whole-buffer slice for `set_vertex_buffer` / `set_index_buffer`.
    #[inline]
    pub fn slice(&self) -> wgpu::BufferSlice<'_> {
        self.buffer.slice(..)
    }

    #[inline]
    pub fn raw(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

impl Drop for GpuBuffer {
    fn drop(&mut self) {
        self.buffer.destroy();
        self.ledger.record_release(self.size);
        log::trace!("released {} buffer ({} bytes)", self.target.as_str(), self.size);
    }
}
