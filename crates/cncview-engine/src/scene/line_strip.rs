use glam::Vec2;

use crate::paint::Rgba;
use crate::render::GpuVertex;
use crate::stage::{transform_stream, ClipVertex, TransformConfig, VertexAttributes};

/// Color given to vertices appended without one.
pub const DEFAULT_VERTEX_COLOR: Rgba = Rgba::white();

/// Ordered toolpath vertices drawn as one line strip.
///
/// Vertex order is buffer order; primitive assembly depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineStrip {
    vertices: Vec<VertexAttributes>,
}

impl LineStrip {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: impl IntoIterator<Item = VertexAttributes>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Appends a vertex with [`DEFAULT_VERTEX_COLOR`].
    #[inline]
    pub fn push(&mut self, position: Vec2) {
        self.push_colored(position, DEFAULT_VERTEX_COLOR);
    }

    #[inline]
    pub fn push_colored(&mut self, position: Vec2, color: Rgba) {
        self.vertices.push(VertexAttributes::new(position, color));
    }

    /// Clears vertices. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[VertexAttributes] {
        &self.vertices
    }

    /// Interleaved vertex data in upload order.
    pub fn to_gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().copied().map(GpuVertex::from).collect()
    }

    /// Runs the vertex stage over the whole strip.
    pub fn transform(&self, cfg: &TransformConfig) -> Vec<ClipVertex> {
        transform_stream(&self.vertices, cfg)
    }
}

impl Extend<VertexAttributes> for LineStrip {
    fn extend<T: IntoIterator<Item = VertexAttributes>>(&mut self, iter: T) {
        self.vertices.extend(iter);
    }
}
