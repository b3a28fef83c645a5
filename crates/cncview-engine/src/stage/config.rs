use glam::Mat4;

use crate::error::ConfigError;

use super::TransformMode;

/// Divisor applied to positions before the matrix in `Matrix` mode.
///
/// Brings toolpath units (~0..1000) into a unit-scale space.
pub const POSITION_DIVISOR: f32 = 1000.0;

/// z component of the homogeneous position fed to the transform.
pub const CLIP_Z: f32 = 0.0;

/// w component of the homogeneous position fed to the transform.
pub const CLIP_W: f32 = 1.0;

/// Uniform configuration bound for one draw call.
///
/// Exactly one variant is active; the stage never mixes fields of both.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformConfig {
    /// Model-view-projection matrix applied after the fixed divisor.
    Matrix(Mat4),
    /// Isotropic scale applied directly to x and y.
    Scale(f32),
}

impl TransformConfig {
    #[inline]
    pub const fn matrix(mvp: Mat4) -> Self {
        TransformConfig::Matrix(mvp)
    }

    #[inline]
    pub const fn scale(scale: f32) -> Self {
        TransformConfig::Scale(scale)
    }

    #[inline]
    pub const fn mode(&self) -> TransformMode {
        match self {
            TransformConfig::Matrix(_) => TransformMode::Matrix,
            TransformConfig::Scale(_) => TransformMode::Scale,
        }
    }

    /// Strict variant check: rejects NaN or infinite uniforms.
    ///
    /// The transform itself accepts anything; call this when the host wants
    /// bad uniforms caught before a draw instead of propagated into clip space.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self {
            TransformConfig::Matrix(mvp) if !mvp.is_finite() => {
                Err(ConfigError::NonFinite { field: "mvp_matrix" })
            }
            TransformConfig::Scale(scale) if !scale.is_finite() => {
                Err(ConfigError::NonFinite { field: "scale" })
            }
            _ => Ok(self),
        }
    }
}
