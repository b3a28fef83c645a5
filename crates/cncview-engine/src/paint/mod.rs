//! Color model carried through the vertex stage.
//!
//! Colors here are straight-alpha RGBA as they come out of the vertex buffer.
//! Nothing in this crate clamps or premultiplies them.

pub mod color;

pub use color::Rgba;
