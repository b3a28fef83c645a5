//! cncview engine crate.
//!
//! This crate owns the vertex stage of the toolpath preview renderer and the
//! host-side pieces that feed it (view controls, line-strip buffers, GPU
//! layouts). Drawing itself is left to the host pipeline.

pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod stage;
pub mod view;

mod error;

pub use error::ConfigError;
pub use paint::Rgba;
pub use stage::{
    transform, transform_into, transform_stream, ClipVertex, StageSettings, TransformConfig,
    TransformMode, VertexAttributes,
};
