//! CPU-side tessellation.
//!
//! Every generator winds triangles counter-clockwise when seen from the side
//! the surface faces (right-handed coordinates), and indexes them with `u32`.

use std::f32::consts::PI;

use anyhow::Result;

use super::vertex::{Position, PositionNormal, PositionUv, Vertex};

/// Half extent of the plane and quad primitives.
pub const HALF_SIZE: f32 = 1.0;

/// Index pattern shared by every quad-shaped patch.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Vertices and triangle indices for one primitive, before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry<V: Vertex> {
    pub vertices: Vec<V>,
    pub indices: Vec<u32>,
}

impl<V: Vertex> Geometry<V> {
    #[inline]
    pub fn num_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    pub fn num_indices(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Positions of each indexed triangle, in winding order.
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize].position(),
                self.vertices[tri[1] as usize].position(),
                self.vertices[tri[2] as usize].position(),
            ]
        })
    }
}

/// Single quad in the XZ plane facing +Y.
pub fn plane_geometry() -> Geometry<PositionNormal> {
    let hs = HALF_SIZE;
    let up = [0.0, 1.0, 0.0];

    let vertices = vec![
        PositionNormal { position: [-hs, 0.0, hs], normal: up },
        PositionNormal { position: [hs, 0.0, hs], normal: up },
        PositionNormal { position: [hs, 0.0, -hs], normal: up },
        PositionNormal { position: [-hs, 0.0, -hs], normal: up },
    ];

    Geometry {
        vertices,
        indices: QUAD_INDICES.to_vec(),
    }
}

/// Single quad in the XY plane facing +Z, corners mapped onto the unit uv square.
pub fn textured_quad_geometry() -> Geometry<PositionUv> {
    let hs = HALF_SIZE;

    let vertices = vec![
        PositionUv { position: [-hs, -hs, 0.0], uv: [0.0, 0.0] },
        PositionUv { position: [hs, -hs, 0.0], uv: [1.0, 0.0] },
        PositionUv { position: [hs, hs, 0.0], uv: [1.0, 1.0] },
        PositionUv { position: [-hs, hs, 0.0], uv: [0.0, 1.0] },
    ];

    Geometry {
        vertices,
        indices: QUAD_INDICES.to_vec(),
    }
}

/// Point on the unit sphere; `theta` runs around +Y, `phi` from +Y down to -Y.
#[inline]
pub fn sphere_point(theta: f32, phi: f32) -> [f32; 3] {
    let r = phi.sin();
    [r * theta.cos(), phi.cos(), r * theta.sin()]
}

/// Latitude/longitude unit sphere with `t_samples` bands around the axis and
/// `s_samples` bands from pole to pole.
///
/// Patches do not share vertices: each emits four corners and six indices, so
/// the result has exactly `4·t·s` vertices and `6·t·s` indices. Corners are
/// named `v{phi step}{theta step}` and the two triangles are
/// `(v00, v01, v11)` and `(v11, v10, v00)`.
///
/// Zero sample counts are rejected, as are counts whose indices would not fit
/// in `u32`.
pub fn unit_sphere_geometry(t_samples: u32, s_samples: u32) -> Result<Geometry<Position>> {
    anyhow::ensure!(
        t_samples > 0 && s_samples > 0,
        "sphere needs at least one sample per direction (got t={t_samples}, s={s_samples})"
    );

    let patches = t_samples
        .checked_mul(s_samples)
        .filter(|p| p.checked_mul(6).is_some())
        .ok_or_else(|| {
            anyhow::anyhow!("sphere {t_samples}x{s_samples} exceeds the u32 index range")
        })?;

    let mut vertices = Vec::with_capacity(patches as usize * 4);
    let mut indices = Vec::with_capacity(patches as usize * 6);

    let dtheta = 2.0 * PI / t_samples as f32;
    let dphi = PI / s_samples as f32;

    for t in 0..t_samples {
        let theta = t as f32 * dtheta;
        for s in 0..s_samples {
            let phi = s as f32 * dphi;

            let v00 = sphere_point(theta, phi);
            let v01 = sphere_point(theta + dtheta, phi);
            let v10 = sphere_point(theta, phi + dphi);
            let v11 = sphere_point(theta + dtheta, phi + dphi);

            let base = vertices.len() as u32;
            vertices.extend([v00, v01, v11, v10].map(|position| Position { position }));
            indices.extend(QUAD_INDICES.map(|i| base + i));
        }
    }

    Ok(Geometry { vertices, indices })
}
