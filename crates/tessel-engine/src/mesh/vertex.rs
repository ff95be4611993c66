//! Interleaved vertex formats produced by the generators.

use bytemuck::{Pod, Zeroable};

/// Common surface of every generated vertex format.
pub trait Vertex: Pod {
    /// Number of `f32` components per vertex.
    const FLOATS: usize;

    /// Buffer layout for pipeline creation (slot stepped per vertex).
    fn layout() -> wgpu::VertexBufferLayout<'static>;

    fn position(&self) -> [f32; 3];
}

// ── position + normal ─────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionNormal {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl PositionNormal {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];
}

impl Vertex for PositionNormal {
    const FLOATS: usize = 6;

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionNormal>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    fn position(&self) -> [f32; 3] {
        self.position
    }
}

// ── position + uv ─────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PositionUv {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl PositionUv {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x2  // uv
    ];
}

impl Vertex for PositionUv {
    const FLOATS: usize = 5;

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PositionUv>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    fn position(&self) -> [f32; 3] {
        self.position
    }
}

// ── position only ─────────────────────────────────────────────────────────

/// Bare position. On the unit sphere this doubles as the normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub position: [f32; 3],
}

impl Position {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
}

impl Vertex for Position {
    const FLOATS: usize = 3;

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Position>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    #[inline]
    fn position(&self) -> [f32; 3] {
        self.position
    }
}
