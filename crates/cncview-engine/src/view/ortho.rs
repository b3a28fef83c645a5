use glam::Mat4;

/// Orthographic clip volume in eye space.
///
/// `bottom > top` is allowed and flips the y axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoBounds {
    /// Preview window: x in [-0.1, 1.8], y flipped over [-0.1, 1], depth 4..15.
    fn default() -> Self {
        Self {
            left: -0.1,
            right: 1.8,
            bottom: 1.0,
            top: -0.1,
            near: 4.0,
            far: 15.0,
        }
    }
}

impl OrthoBounds {
    /// OpenGL-convention projection (depth mapped to [-1, 1]).
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }
}
