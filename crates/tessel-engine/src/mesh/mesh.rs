use std::ops::Range;

use anyhow::{Context, Result};

use super::geometry::{plane_geometry, textured_quad_geometry, unit_sphere_geometry, Geometry};
use super::vertex::Vertex;
use crate::buffer::{BufferAllocator, BufferTarget, GpuBuffer};

/// One drawable primitive: a vertex buffer, an index buffer and their counts.
///
/// The mesh exclusively owns both buffers. They are released together, once,
/// by [`Mesh::dispose`] or when the mesh is dropped. Binding only borrows, so
/// a mesh can be bound for any number of draws in between.
#[derive(Debug)]
pub struct Mesh {
    label: &'static str,
    vertex_buffer: GpuBuffer,
    index_buffer: GpuBuffer,
    num_vertices: u32,
    num_indices: u32,
    vertex_layout: wgpu::VertexBufferLayout<'static>,
}

impl Mesh {
    /// Uploads `geometry` and takes ownership of the resulting buffers.
    ///
    /// The scratch geometry is consumed. If the index upload fails, the vertex
    /// buffer is released before the error is returned.
    pub fn upload<V: Vertex>(
        alloc: &BufferAllocator<'_>,
        label: &'static str,
        geometry: Geometry<V>,
    ) -> Result<Self> {
        let num_vertices = geometry.num_vertices();
        let num_indices = geometry.num_indices();

        let vertex_buffer = alloc
            .allocate_and_upload(
                BufferTarget::Vertex,
                label,
                bytemuck::cast_slice(&geometry.vertices),
            )
            .with_context(|| format!("failed to upload vertices of `{label}`"))?;

        let index_buffer = alloc
            .allocate_and_upload(
                BufferTarget::Index,
                label,
                bytemuck::cast_slice(&geometry.indices),
            )
            .with_context(|| format!("failed to upload indices of `{label}`"))?;

        log::debug!("mesh `{label}`: {num_vertices} vertices, {num_indices} indices");

        Ok(Self {
            label,
            vertex_buffer,
            index_buffer,
            num_vertices,
            num_indices,
            vertex_layout: V::layout(),
        })
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn num_vertices(&self) -> u32 {
        self.num_vertices
    }

    #[inline]
    pub fn num_indices(&self) -> u32 {
        self.num_indices
    }

    #[inline]
    pub fn vertex_buffer(&self) -> &GpuBuffer {
        &self.vertex_buffer
    }

    #[inline]
    pub fn index_buffer(&self) -> &GpuBuffer {
        &self.index_buffer
    }

    /// Layout of the vertex buffer, for building a matching pipeline.
    #[inline]
    pub fn vertex_layout(&self) -> wgpu::VertexBufferLayout<'static> {
        self.vertex_layout.clone()
    }

    /// Makes both buffers current on `pass`: vertices on slot 0, `u32` indices.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice());
        pass.set_index_buffer(self.index_buffer.slice(), wgpu::IndexFormat::Uint32);
    }

    /// Binds the mesh and draws every index for `instances`.
    ///
    /// The pipeline must already be set on `pass`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, instances: Range<u32>) {
        self.bind(pass);
        pass.draw_indexed(0..self.num_indices, 0, instances);
    }

    /// Releases both buffers.
    pub fn dispose(self) {
        log::debug!("disposing mesh `{}`", self.label);
        drop(self);
    }
}

/// Uploads a unit plane in XZ facing +Y (position + normal).
pub fn generate_plane(alloc: &BufferAllocator<'_>) -> Result<Mesh> {
    Mesh::upload(alloc, "plane", plane_geometry())
}

/// Uploads a unit quad in XY facing +Z (position + uv).
pub fn generate_textured_quad(alloc: &BufferAllocator<'_>) -> Result<Mesh> {
    Mesh::upload(alloc, "textured quad", textured_quad_geometry())
}

/// Uploads a latitude/longitude unit sphere (position only).
///
/// See [`unit_sphere_geometry`] for the tessellation and its preconditions.
pub fn generate_unit_sphere(
    alloc: &BufferAllocator<'_>,
    t_samples: u32,
    s_samples: u32,
) -> Result<Mesh> {
    let geometry = unit_sphere_geometry(t_samples, s_samples)?;
    Mesh::upload(alloc, "unit sphere", geometry)
}
