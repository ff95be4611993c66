//! Procedural primitive meshes.
//!
//! Generation and upload happen in one call: each `generate_*` function
//! tessellates on the CPU, uploads into two immutable buffers and returns a
//! [`Mesh`] that owns them. The CPU halves are exposed separately for callers
//! that only need the data.

mod geometry;
#[allow(clippy::module_inception)]
mod mesh;
pub mod vertex;

pub use geometry::{
    plane_geometry, sphere_point, textured_quad_geometry, unit_sphere_geometry, Geometry,
    HALF_SIZE, QUAD_INDICES,
};
pub use mesh::{generate_plane, generate_textured_quad, generate_unit_sphere, Mesh};
pub use vertex::{Position, PositionNormal, PositionUv, Vertex};
