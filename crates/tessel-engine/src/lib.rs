//! Tessel engine crate.
//!
//! Procedural primitive meshes uploaded into immutable wgpu buffers, the
//! ownership wrapper around those buffers, and a frame timer for render loops.

pub mod buffer;
pub mod device;
pub mod mesh;
pub mod time;

pub mod logging;
