/// What a buffer is bound as.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BufferTarget {
    /// Interleaved per-vertex attributes.
    Vertex,
    /// `u32` triangle indices.
    Index,
}

impl BufferTarget {
    /// Usage flags for an immutable buffer of this target.
    ///
    /// No `COPY_DST`: contents are fixed at creation.
    pub fn usages(self) -> wgpu::BufferUsages {
        match self {
            BufferTarget::Vertex => wgpu::BufferUsages::VERTEX,
            BufferTarget::Index => wgpu::BufferUsages::INDEX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BufferTarget::Vertex => "vertex",
            BufferTarget::Index => "index",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usages_are_exclusive_and_immutable() {
        let v = BufferTarget::Vertex.usages();
        let i = BufferTarget::Index.usages();
        assert!(v.contains(wgpu::BufferUsages::VERTEX));
        assert!(i.contains(wgpu::BufferUsages::INDEX));
        assert!(!v.intersects(i));
        assert!(!v.contains(wgpu::BufferUsages::COPY_DST));
        assert!(!i.contains(wgpu::BufferUsages::COPY_DST));
    }
}
