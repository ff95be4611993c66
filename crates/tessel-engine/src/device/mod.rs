//! Headless GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue without a surface
//! - handing out buffer allocators bound to that device

mod gpu;
mod init;

pub use gpu::Gpu;
pub use init::GpuInit;

/// Headless context for tests that need a real device.
///
/// Returns `None` on machines without any usable adapter so GPU-backed tests
/// can bail out instead of failing.
#[cfg(test)]
pub(crate) fn test_gpu() -> Option<Gpu> {
    let attempts = [
        GpuInit::default(),
        GpuInit {
            force_fallback_adapter: true,
            ..GpuInit::default()
        },
    ];

    for init in attempts {
        match Gpu::new_blocking(init) {
            Ok(gpu) => return Some(gpu),
            Err(err) => eprintln!("no gpu for this attempt: {err:#}"),
        }
    }
    eprintln!("skipping GPU-backed test: no adapter available");
    None
}
