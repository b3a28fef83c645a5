//! Interactive view state for the toolpath preview.
//!
//! Produces the model-view-projection matrix bound in `Matrix` mode:
//! `ortho * translate(pan) * rot_x * rot_y * rot_z`.

mod controls;
mod ortho;

pub use controls::{normalize_angle, DragButton, ViewControls, ANGLE_STEPS_PER_TURN, PAN_SLIDER_DIVISOR};
pub use ortho::OrthoBounds;
