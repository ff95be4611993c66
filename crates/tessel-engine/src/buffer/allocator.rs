use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use wgpu::util::DeviceExt;

use super::{BufferTarget, GpuBuffer};

/// Live-buffer accounting shared between an allocator and its handles.
#[derive(Debug, Default)]
pub(crate) struct BufferLedger {
    live_buffers: AtomicUsize,
    live_bytes: AtomicU64,
}

impl BufferLedger {
    pub(super) fn record_allocation(&self, size: u64) {
        self.live_buffers.fetch_add(1, Ordering::Relaxed);
        self.live_bytes.fetch_add(size, Ordering::Relaxed);
    }

    pub(super) fn record_release(&self, size: u64) {
        self.live_buffers.fetch_sub(1, Ordering::Relaxed);
        self.live_bytes.fetch_sub(size, Ordering::Relaxed);
    }
}

/// Allocates immutable buffers on a device.
///
/// Thin by design: allocate-and-upload in one call, release by consuming the
/// handle. There is no resize or partial update path.
pub struct BufferAllocator<'a> {
    device: &'a wgpu::Device,
    ledger: Arc<BufferLedger>,
}

impl<'a> BufferAllocator<'a> {
    /// Creates an allocator with its own accounting.
    pub fn new(device: &'a wgpu::Device) -> Self {
        Self::with_ledger(device, Arc::default())
    }

    pub(crate) fn with_ledger(device: &'a wgpu::Device, ledger: Arc<BufferLedger>) -> Self {
        Self { device, ledger }
    }

    #[inline]
    pub fn device(&self) -> &'a wgpu::Device {
        self.device
    }

    /// Creates a buffer for `target` holding exactly `contents`.
    ///
    /// Fails on an empty payload or one larger than the device allows. Errors
    /// raised inside wgpu go to the device's uncaptured-error handler, which
    /// panics unless the host installed its own. Nothing is retried.
    pub fn allocate_and_upload(
        &self,
        target: BufferTarget,
        label: &str,
        contents: &[u8],
    ) -> Result<GpuBuffer> {
        let size = contents.len() as u64;
        anyhow::ensure!(size > 0, "refusing to allocate empty {} buffer `{label}`", target.as_str());

        let max = self.device.limits().max_buffer_size;
        anyhow::ensure!(
            size <= max,
            "{} buffer `{label}` is {size} bytes; device limit is {max}",
            target.as_str()
        );

        let buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents,
            usage: target.usages(),
        });

        log::debug!("allocated {} buffer `{label}` ({size} bytes)", target.as_str());

        Ok(GpuBuffer::new(buffer, target, size, Arc::clone(&self.ledger)))
    }

    /// Releases a buffer. The handle is consumed, so it cannot be released twice.
    pub fn release(&self, buffer: GpuBuffer) {
        drop(buffer);
    }

    /// Number of buffers allocated through this ledger and not yet released.
    pub fn live_buffers(&self) -> usize {
        self.ledger.live_buffers.load(Ordering::Relaxed)
    }

    /// Bytes held by live buffers.
    pub fn live_bytes(&self) -> u64 {
        self.ledger.live_bytes.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::test_gpu;

    #[test]
    fn upload_records_size_and_target() {
        let Some(gpu) = test_gpu() else { return };
        let alloc = gpu.allocator();

        let data = [1.0f32, 2.0, 3.0];
        let buf = alloc
            .allocate_and_upload(BufferTarget::Vertex, "test vbo", bytemuck::cast_slice(&data))
            .unwrap();

        assert_eq!(buf.size(), 12);
        assert_eq!(buf.target(), BufferTarget::Vertex);
        assert!(buf.raw().usage().contains(wgpu::BufferUsages::VERTEX));
        assert_eq!(alloc.live_buffers(), 1);
        assert_eq!(alloc.live_bytes(), 12);
    }

    #[test]
    fn release_happens_once() {
        let Some(gpu) = test_gpu() else { return };
        let alloc = gpu.allocator();

        let idx = [0u32, 1, 2];
        let buf = alloc
            .allocate_and_upload(BufferTarget::Index, "test ibo", bytemuck::cast_slice(&idx))
            .unwrap();
        assert_eq!(alloc.live_buffers(), 1);

        alloc.release(buf);
        assert_eq!(alloc.live_buffers(), 0);
        assert_eq!(alloc.live_bytes(), 0);
    }

    #[test]
    fn drop_releases() {
        let Some(gpu) = test_gpu() else { return };
        let alloc = gpu.allocator();
        {
            let _buf = alloc
                .allocate_and_upload(BufferTarget::Vertex, "scoped", &[0u8; 16])
                .unwrap();
            assert_eq!(alloc.live_buffers(), 1);
        }
        assert_eq!(alloc.live_buffers(), 0);
    }

    #[test]
    fn empty_payload_is_rejected() {
        let Some(gpu) = test_gpu() else { return };
        let alloc = gpu.allocator();

        let err = alloc
            .allocate_and_upload(BufferTarget::Index, "empty", &[])
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
        assert_eq!(alloc.live_buffers(), 0);
    }

    #[test]
    fn separate_allocators_keep_separate_ledgers() {
        let Some(gpu) = test_gpu() else { return };
        let own = BufferAllocator::new(gpu.device());

        let _buf = own
            .allocate_and_upload(BufferTarget::Vertex, "own", &[0u8; 4])
            .unwrap();
        assert_eq!(own.live_buffers(), 1);
        assert_eq!(gpu.allocator().live_buffers(), 0);
    }
}
