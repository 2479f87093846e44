//! Flat-Ground Kinematic Character
//!
//! A minimal [`CharacterBody`] implementation over an infinite ground plane.
//! Acceleration ramps velocity toward the wish over a fixed time-to-speed,
//! friction drops speed proportionally, and the move step lands on or leaves
//! the plane. There is no collision sweep or step-offset handling - real
//! hosts supply their own character controller; this one exists so the
//! controllers can be exercised headlessly.

use glam::Vec3;

use super::CharacterBody;

/// Default collision height.
pub const DEFAULT_HEIGHT: f32 = 72.0;

/// Default time in seconds for velocity to ramp to the wish speed.
pub const ACCELERATION_TIME: f32 = 0.2;

/// Kinematic body state over a flat ground plane.
#[derive(Debug, Clone)]
pub struct KinematicCharacter {
    position: Vec3,
    velocity: Vec3,
    height: f32,
    grounded: bool,
    /// Y coordinate of the ground plane.
    ground_height: f32,
    /// Time-to-speed for [`accelerate`](CharacterBody::accelerate).
    acceleration_time: f32,
}

impl Default for KinematicCharacter {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            height: DEFAULT_HEIGHT,
            grounded: true,
            ground_height: 0.0,
            acceleration_time: ACCELERATION_TIME,
        }
    }
}

impl KinematicCharacter {
    /// Create a body resting on the ground plane at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body at a specific position (grounded state is derived from
    /// the ground plane on the first move).
    pub fn with_position(position: Vec3) -> Self {
        let grounded = position.y <= 0.0;
        Self {
            position,
            grounded,
            ..Default::default()
        }
    }

    /// Create a body over a raised or lowered ground plane.
    pub fn with_ground_height(ground_height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, ground_height, 0.0),
            ground_height,
            ..Default::default()
        }
    }

    /// Y coordinate of the ground plane.
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Teleport the body, re-deriving the grounded state.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = position.y <= self.ground_height;
    }

    fn horizontal(v: Vec3) -> Vec3 {
        Vec3::new(v.x, 0.0, v.z)
    }
}

impl CharacterBody for KinematicCharacter {
    fn is_on_ground(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn accelerate(&mut self, wish: Vec3, dt: f32) {
        let dt = dt.clamp(0.0001, 0.1);

        let wish = Self::horizontal(wish);
        let wish_speed = wish.length();
        if wish_speed < 0.0001 {
            // Stopping is friction's job
            return;
        }

        let current = Self::horizontal(self.velocity);
        let diff = wish - current;
        let diff_length = diff.length();
        if diff_length < 0.0001 {
            return;
        }

        // Ramp so a standing start reaches wish speed in acceleration_time
        let max_change = if self.acceleration_time > 0.0 {
            (wish_speed / self.acceleration_time) * dt
        } else {
            f32::MAX
        };

        if diff_length <= max_change {
            self.velocity = wish + Vec3::new(0.0, self.velocity.y, 0.0);
        } else {
            self.velocity += diff.normalize() * max_change;
        }
    }

    fn apply_friction(&mut self, control: f32, dt: f32) {
        let dt = dt.clamp(0.0001, 0.1);

        let horizontal = Self::horizontal(self.velocity);
        let speed = horizontal.length();
        if speed < 0.0001 {
            return;
        }

        let drop = speed * control * dt;
        let new_speed = (speed - drop).max(0.0);
        let scaled = horizontal * (new_speed / speed);
        self.velocity = Vec3::new(scaled.x, self.velocity.y, scaled.z);
    }

    fn punch(&mut self, impulse: Vec3) {
        self.velocity += impulse;
        if impulse.y > 0.0 {
            self.grounded = false;
        }
    }

    fn move_body(&mut self, dt: f32) {
        let dt = dt.clamp(0.0001, 0.1);

        self.position += self.velocity * dt;

        if self.position.y <= self.ground_height {
            // Landed (or stayed) on the plane
            self.position.y = self.ground_height;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_grounded_at_origin() {
        let body = KinematicCharacter::new();
        assert!(body.is_on_ground());
        assert_eq!(body.position(), Vec3::ZERO);
        assert_eq!(body.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_accelerate_ramps_to_wish_speed() {
        let mut body = KinematicCharacter::new();
        let wish = Vec3::new(0.0, 0.0, -180.0);

        body.accelerate(wish, 1.0 / 60.0);
        let early_speed = body.velocity().length();
        assert!(early_speed > 0.0);
        assert!(early_speed < 180.0);

        for _ in 0..60 {
            body.accelerate(wish, 1.0 / 60.0);
        }
        assert!((body.velocity().length() - 180.0).abs() < 0.5);
    }

    #[test]
    fn test_accelerate_ignores_zero_wish() {
        let mut body = KinematicCharacter::new();
        body.set_velocity(Vec3::new(50.0, 0.0, 0.0));
        body.accelerate(Vec3::ZERO, 1.0 / 60.0);
        assert_eq!(body.velocity(), Vec3::new(50.0, 0.0, 0.0));
    }

    #[test]
    fn test_friction_decays_horizontal_speed_only() {
        let mut body = KinematicCharacter::new();
        body.set_velocity(Vec3::new(100.0, 40.0, 0.0));

        body.apply_friction(4.0, 1.0 / 60.0);

        assert!(body.velocity().x < 100.0);
        assert_eq!(body.velocity().y, 40.0);
    }

    #[test]
    fn test_friction_stops_completely() {
        let mut body = KinematicCharacter::new();
        body.set_velocity(Vec3::new(10.0, 0.0, 0.0));

        for _ in 0..600 {
            body.apply_friction(4.0, 1.0 / 60.0);
        }
        assert!(body.velocity().length() < 0.5);
    }

    #[test]
    fn test_punch_up_leaves_ground() {
        let mut body = KinematicCharacter::new();
        assert!(body.is_on_ground());

        body.punch(Vec3::Y * 325.0);

        assert!(!body.is_on_ground());
        assert_eq!(body.velocity().y, 325.0);
    }

    #[test]
    fn test_move_body_lands_on_plane() {
        let mut body = KinematicCharacter::with_position(Vec3::new(0.0, 10.0, 0.0));
        body.set_velocity(Vec3::new(0.0, -100.0, 0.0));

        for _ in 0..30 {
            body.move_body(1.0 / 60.0);
        }

        assert!(body.is_on_ground());
        assert_eq!(body.position().y, 0.0);
        assert_eq!(body.velocity().y, 0.0);
    }

    #[test]
    fn test_move_body_leaves_plane_when_rising() {
        let mut body = KinematicCharacter::new();
        body.punch(Vec3::Y * 100.0);
        body.move_body(1.0 / 60.0);

        assert!(!body.is_on_ground());
        assert!(body.position().y > 0.0);
    }

    #[test]
    fn test_raised_ground_plane() {
        let mut body = KinematicCharacter::with_ground_height(5.0);
        assert!(body.is_on_ground());

        body.set_velocity(Vec3::new(0.0, -10.0, 0.0));
        body.move_body(1.0 / 60.0);

        assert_eq!(body.position().y, 5.0);
        assert!(body.is_on_ground());
    }
}
