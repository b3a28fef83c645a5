//! Interleaved vertex and uniform block layouts shared with the WGSL programs.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

use crate::error::ConfigError;
use crate::stage::{TransformConfig, TransformMode, VertexAttributes};

// ── vertex ────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 2],
    pub color: [f32; 4], // straight alpha
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<VertexAttributes> for GpuVertex {
    #[inline]
    fn from(v: VertexAttributes) -> Self {
        Self {
            position: v.position.to_array(),
            color: v.color.to_array(),
        }
    }
}

impl From<GpuVertex> for VertexAttributes {
    #[inline]
    fn from(v: GpuVertex) -> Self {
        VertexAttributes::new(Vec2::from_array(v.position), v.color.into())
    }
}

// ── uniforms ──────────────────────────────────────────────────────────────

/// `Matrix` mode uniform: column-major MVP.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MatrixUniform {
    pub mvp: [[f32; 4]; 4],
}

/// `Scale` mode uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ScaleUniform {
    pub scale: f32,
    pub _pad: [f32; 3], // 16-byte alignment
}

const fn non_zero(size: usize) -> NonZeroU64 {
    match NonZeroU64::new(size as u64) {
        Some(n) => n,
        None => panic!("uniform block must not be empty"),
    }
}

const MATRIX_UBO_SIZE: NonZeroU64 = non_zero(std::mem::size_of::<MatrixUniform>());
const SCALE_UBO_SIZE: NonZeroU64 = non_zero(std::mem::size_of::<ScaleUniform>());

/// Uniform block of whichever mode a draw call binds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformBlock {
    Matrix(MatrixUniform),
    Scale(ScaleUniform),
}

impl UniformBlock {
    pub fn from_config(cfg: &TransformConfig) -> Self {
        match *cfg {
            TransformConfig::Matrix(mvp) => UniformBlock::Matrix(MatrixUniform {
                mvp: mvp.to_cols_array_2d(),
            }),
            TransformConfig::Scale(scale) => UniformBlock::Scale(ScaleUniform {
                scale,
                _pad: [0.0; 3],
            }),
        }
    }

    #[inline]
    pub const fn mode(&self) -> TransformMode {
        match self {
            UniformBlock::Matrix(_) => TransformMode::Matrix,
            UniformBlock::Scale(_) => TransformMode::Scale,
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            UniformBlock::Matrix(u) => bytemuck::bytes_of(u),
            UniformBlock::Scale(u) => bytemuck::bytes_of(u),
        }
    }

    /// Minimum binding size for the uniform buffer of `mode`.
    #[inline]
    pub const fn min_binding_size(mode: TransformMode) -> NonZeroU64 {
        match mode {
            TransformMode::Matrix => MATRIX_UBO_SIZE,
            TransformMode::Scale => SCALE_UBO_SIZE,
        }
    }

    /// Bind group layout entry for group 0, binding 0.
    pub fn layout_entry(mode: TransformMode) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(Self::min_binding_size(mode)),
            },
            count: None,
        }
    }

    /// Reads back the configuration stored in a uniform buffer of `mode`.
    pub fn decode(mode: TransformMode, bytes: &[u8]) -> Result<TransformConfig, ConfigError> {
        let expected = Self::min_binding_size(mode).get() as usize;
        let size_err = || ConfigError::UniformSize {
            mode,
            expected,
            actual: bytes.len(),
        };
        if bytes.len() != expected {
            return Err(size_err());
        }

        match mode {
            TransformMode::Matrix => {
                let u: MatrixUniform =
                    bytemuck::try_pod_read_unaligned(bytes).map_err(|_| size_err())?;
                Ok(TransformConfig::Matrix(Mat4::from_cols_array_2d(&u.mvp)))
            }
            TransformMode::Scale => {
                let u: ScaleUniform =
                    bytemuck::try_pod_read_unaligned(bytes).map_err(|_| size_err())?;
                Ok(TransformConfig::Scale(u.scale))
            }
        }
    }
}
