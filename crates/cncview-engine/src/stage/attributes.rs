use glam::{Vec2, Vec4};

use crate::paint::Rgba;

/// Per-vertex input read from the vertex buffer.
///
/// `position` is in toolpath units (typically up to ~1000 per axis).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexAttributes {
    pub position: Vec2,
    pub color: Rgba,
}

impl VertexAttributes {
    #[inline]
    pub const fn new(position: Vec2, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// Per-vertex output handed to primitive assembly.
///
/// `clip_position` is homogeneous; no perspective divide has been applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipVertex {
    pub clip_position: Vec4,
    pub color: Rgba,
}
