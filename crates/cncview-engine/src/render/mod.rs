//! GPU-facing layouts for the vertex stage.
//!
//! Convention:
//! - vertex buffers are interleaved `position: f32x2, color: f32x4`
//! - group 0 binding 0 holds the uniform block of the active mode
//! - each mode has its own WGSL program implementing the same rules as
//!   [`crate::stage::transform`]

mod gpu;
mod shader;

pub use gpu::{GpuVertex, MatrixUniform, ScaleUniform, UniformBlock};
pub use shader::{line_primitive_state, straight_alpha_blend, ShaderVariant};
