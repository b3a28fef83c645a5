//! Vertex streams recorded on the CPU before upload.

mod line_strip;

pub use line_strip::{LineStrip, DEFAULT_VERTEX_COLOR};
