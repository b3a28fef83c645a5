use glam::{Mat4, Vec3};

use super::OrthoBounds;

/// Rotation units per full turn (angles are stored in 1/16 degree).
pub const ANGLE_STEPS_PER_TURN: i32 = 360 * 16;

/// Raw pan slider values are divided by this before use.
pub const PAN_SLIDER_DIVISOR: f32 = 1000.0;

const DRAG_GAIN: i32 = 8;
const DEFAULT_PAN: Vec3 = Vec3::new(0.0, 0.0, -10.0);

/// Wraps an angle into `[0, ANGLE_STEPS_PER_TURN]`.
///
/// Both ends are inclusive: a full turn stays a full turn instead of
/// collapsing to zero.
pub fn normalize_angle(angle: i32) -> i32 {
    if angle < 0 {
        angle.rem_euclid(ANGLE_STEPS_PER_TURN)
    } else if angle > ANGLE_STEPS_PER_TURN {
        (angle - 1) % ANGLE_STEPS_PER_TURN + 1
    } else {
        angle
    }
}

/// Mouse button held during a drag.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DragButton {
    /// Tilts around x and spins around y.
    Left,
    /// Tilts around x and spins around z.
    Right,
    Other,
}

/// Rotation + pan state driving the preview's MVP matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewControls {
    x_rot: i32,
    y_rot: i32,
    z_rot: i32,
    pan: Vec3,
    ortho: OrthoBounds,
}

impl Default for ViewControls {
    fn default() -> Self {
        Self::new(OrthoBounds::default())
    }
}

impl ViewControls {
    pub fn new(ortho: OrthoBounds) -> Self {
        Self {
            x_rot: 0,
            y_rot: 0,
            z_rot: 0,
            pan: DEFAULT_PAN,
            ortho,
        }
    }

    /// Current rotations `(x, y, z)` in 1/16 degree.
    #[inline]
    pub fn rotation(&self) -> (i32, i32, i32) {
        (self.x_rot, self.y_rot, self.z_rot)
    }

    #[inline]
    pub fn pan(&self) -> Vec3 {
        self.pan
    }

    #[inline]
    pub fn ortho(&self) -> OrthoBounds {
        self.ortho
    }

    pub fn set_ortho(&mut self, ortho: OrthoBounds) {
        self.ortho = ortho;
    }

    /// Returns `true` if the stored angle changed.
    pub fn set_x_rotation(&mut self, angle: i32) -> bool {
        Self::set_angle(&mut self.x_rot, angle, "x")
    }

    /// Returns `true` if the stored angle changed.
    pub fn set_y_rotation(&mut self, angle: i32) -> bool {
        Self::set_angle(&mut self.y_rot, angle, "y")
    }

    /// Returns `true` if the stored angle changed.
    pub fn set_z_rotation(&mut self, angle: i32) -> bool {
        Self::set_angle(&mut self.z_rot, angle, "z")
    }

    fn set_angle(slot: &mut i32, angle: i32, axis: &str) -> bool {
        let angle = normalize_angle(angle);
        if angle == *slot {
            return false;
        }
        *slot = angle;
        log::debug!("view: {axis} rotation -> {angle}/16 deg");
        true
    }

    pub fn set_x_pan(&mut self, slider: i32) {
        self.pan.x = slider as f32 / PAN_SLIDER_DIVISOR;
    }

    pub fn set_y_pan(&mut self, slider: i32) {
        self.pan.y = slider as f32 / PAN_SLIDER_DIVISOR;
    }

    pub fn set_z_pan(&mut self, slider: i32) {
        self.pan.z = slider as f32 / PAN_SLIDER_DIVISOR;
    }

    pub fn set_pan(&mut self, pan: Vec3) {
        self.pan = pan;
    }

    /// Applies a mouse drag of `(dx, dy)` pixels. Returns `true` if any angle changed.
    pub fn drag(&mut self, dx: i32, dy: i32, button: DragButton) -> bool {
        match button {
            DragButton::Left => {
                let x = self.set_x_rotation(self.x_rot + DRAG_GAIN * dy);
                let y = self.set_y_rotation(self.y_rot + DRAG_GAIN * dx);
                x || y
            }
            DragButton::Right => {
                let x = self.set_x_rotation(self.x_rot + DRAG_GAIN * dy);
                let z = self.set_z_rotation(self.z_rot + DRAG_GAIN * dx);
                x || z
            }
            DragButton::Other => false,
        }
    }

    /// Model rotation `rot_x * rot_y * rot_z`.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(steps_to_radians(self.x_rot))
            * Mat4::from_rotation_y(steps_to_radians(self.y_rot))
            * Mat4::from_rotation_z(steps_to_radians(self.z_rot))
    }

    /// Full model-view-projection matrix for `Matrix` mode.
    pub fn mvp(&self) -> Mat4 {
        self.ortho.matrix() * Mat4::from_translation(self.pan) * self.rotation_matrix()
    }
}

#[inline]
fn steps_to_radians(steps: i32) -> f32 {
    (steps as f32 / 16.0).to_radians()
}
