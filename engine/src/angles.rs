//! Shared Orientation Angles
//!
//! Pitch/yaw/roll orientation used by both the movement controller and the
//! camera rig. The head orientation is the single source of truth: the camera
//! accumulates mouse delta into it, and the movement controller projects its
//! yaw onto the horizontal plane to build the wish velocity.
//!
//! Conventions:
//! - Angles are in radians
//! - `yaw = 0, pitch = 0` looks toward -Z (+X right, +Y up)
//! - Positive pitch looks up; pitch is clamped to ±89° to prevent gimbal lock
//! - Roll is carried for completeness but zeroed by the camera every frame

use glam::Vec3;

/// Pitch limit: -89 degrees in radians.
pub const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit: +89 degrees in radians.
pub const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Head/camera orientation as Euler angles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EyeAngles {
    /// Vertical angle (radians), positive = looking up. Clamped to ±89°.
    pub pitch: f32,
    /// Horizontal angle (radians), unrestricted.
    pub yaw: f32,
    /// Roll angle (radians). Always zero after a camera update.
    pub roll: f32,
}

impl EyeAngles {
    /// Create angles from pitch and yaw with zero roll.
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch,
            yaw,
            roll: 0.0,
        }
    }

    /// The full look direction derived from yaw and pitch (normalized).
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// The right direction, perpendicular to [`forward`](Self::forward) in the
    /// horizontal plane (normalized).
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Forward direction projected onto the horizontal plane of the current
    /// yaw, ignoring pitch. This is the basis wish velocities are built in.
    #[inline]
    pub fn yaw_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Right direction in the horizontal plane of the current yaw.
    #[inline]
    pub fn yaw_right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Clamp pitch to ±89°.
    #[inline]
    pub fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }
}

/// Wrap an angle difference to [-PI, PI] so interpolation takes the short way
/// around.
pub fn wrap_angle(mut angle: f32) -> f32 {
    while angle > std::f32::consts::PI {
        angle -= 2.0 * std::f32::consts::PI;
    }
    while angle < -std::f32::consts::PI {
        angle += 2.0 * std::f32::consts::PI;
    }
    angle
}
