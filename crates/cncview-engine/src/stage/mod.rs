//! Vertex transform stage.
//!
//! Maps per-vertex attributes (2D position + RGBA color) into homogeneous
//! clip space. One of two uniform configurations is bound per draw call:
//!
//! - `Matrix`: `clip = mvp * [x / 1000, y / 1000, 0, 1]`
//! - `Scale`:  `clip = [s * x, s * y, 0, 1]`
//!
//! Color is forwarded untouched. The stage is stateless; every call is a pure
//! function of its inputs and may run on any thread.

mod attributes;
mod batch;
mod config;
mod settings;
mod transform;

pub use attributes::{ClipVertex, VertexAttributes};
pub use batch::{transform_into, transform_stream};
pub use config::{TransformConfig, CLIP_W, CLIP_Z, POSITION_DIVISOR};
pub use settings::{StageSettings, TransformMode, DEFAULT_SCALE};
pub use transform::transform;
