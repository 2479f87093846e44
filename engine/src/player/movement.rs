//! Player Movement Controller
//!
//! Converts input intent into a velocity for a host character body and keeps
//! the crouch/sprint/walk state machine. Split into two host-driven steps:
//!
//! - [`frame_update`](MovementController::frame_update) - variable rate:
//!   crouch toggle, sprint/walk flags, jump edge, visual body turning,
//!   animation sync
//! - [`physics_update`](MovementController::physics_update) - fixed rate:
//!   wish-velocity build and the grounded/airborne move step
//!
//! # Movement Model
//!
//! The wish velocity is the sum of held directional inputs projected onto the
//! horizontal plane of the head yaw, normalized, then scaled by exactly one
//! speed constant chosen by priority crouch > sprint > walk > default. On the
//! ground the body accelerates toward the wish under ground friction; in the
//! air the wish is clamped to a maximum force and air friction applies.
//! Gravity integrates as two half-steps around the move resolution.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::angles::{EyeAngles, wrap_angle};
use crate::host::{AnimationDriver, CharacterBody, MoveStyle};
use crate::input::{ActionState, InputAction};

/// Factor the collision height is divided by while crouching.
pub const CROUCH_HEIGHT_FACTOR: f32 = 1.5;

/// Movement tunables with their documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Ground friction/control factor (default: 4.0)
    pub ground_control: f32,
    /// Air friction/control factor (default: 0.1)
    pub air_control: f32,
    /// Maximum wish-velocity magnitude while airborne (default: 50.0)
    pub max_force: f32,
    /// Default movement speed (default: 180.0)
    pub speed: f32,
    /// Sprint speed (default: 280.0)
    pub run_speed: f32,
    /// Walk speed (default: 95.0)
    pub walk_speed: f32,
    /// Crouched speed (default: 90.0)
    pub crouch_speed: f32,
    /// Upward jump impulse (default: 325.0)
    pub jump_force: f32,
    /// World gravity (default: (0, -850, 0))
    pub gravity: Vec3,
    /// Speed above which the body snaps quickly toward the heading
    /// (default: 10.0)
    pub turn_speed_threshold: f32,
    /// Body turn damping while moving fast (default: 10.0, applied as dt*10)
    pub turn_fast_damping: f32,
    /// Body turn damping while slow but misaligned (default: 2.0)
    pub turn_slow_damping: f32,
    /// Misalignment beyond which a slow body still turns (default: 65°)
    pub turn_misalignment: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            ground_control: 4.0,
            air_control: 0.1,
            max_force: 50.0,
            speed: 180.0,
            run_speed: 280.0,
            walk_speed: 95.0,
            crouch_speed: 90.0,
            jump_force: 325.0,
            gravity: Vec3::new(0.0, -850.0, 0.0),
            turn_speed_threshold: 10.0,
            turn_fast_damping: 10.0,
            turn_slow_damping: 2.0,
            turn_misalignment: 65.0_f32.to_radians(),
        }
    }
}

/// Visual body transform turned toward the movement heading.
///
/// Optional: rigs without a separate body mesh simply don't attach one and
/// the turning step is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyTransform {
    /// World position, mirrored from the character body each frame.
    pub position: Vec3,
    /// Facing yaw in radians.
    pub yaw: f32,
}

/// Movement state machine driving a [`CharacterBody`].
#[derive(Debug, Clone)]
pub struct MovementController {
    config: MovementConfig,

    /// Desired horizontal velocity for the current tick.
    wish_velocity: Vec3,

    crouching: bool,
    sprinting: bool,
    walking: bool,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementController {
    /// Create a controller with default tunables.
    pub fn new() -> Self {
        Self::with_config(MovementConfig::default())
    }

    /// Create a controller with custom tunables.
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            config,
            wish_velocity: Vec3::ZERO,
            crouching: false,
            sprinting: false,
            walking: false,
        }
    }

    /// The movement tunables.
    #[inline]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Replace the movement tunables.
    pub fn set_config(&mut self, config: MovementConfig) {
        self.config = config;
    }

    /// The wish velocity built by the last physics step.
    #[inline]
    pub fn wish_velocity(&self) -> Vec3 {
        self.wish_velocity
    }

    /// Whether the player is crouching.
    #[inline]
    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Whether the player is sprinting.
    #[inline]
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    /// Whether the player is walking (never true while sprinting).
    #[inline]
    pub fn is_walking(&self) -> bool {
        self.walking
    }

    /// The speed constant currently in effect, by priority
    /// crouch > sprint > walk > default.
    pub fn active_speed(&self) -> f32 {
        if self.crouching {
            self.config.crouch_speed
        } else if self.sprinting {
            self.config.run_speed
        } else if self.walking {
            self.config.walk_speed
        } else {
            self.config.speed
        }
    }

    /// Variable-rate update: crouch toggle, movement-mode flags, jump edge,
    /// body turning, and animation sync. Run once per rendered frame, before
    /// the camera rig's frame update.
    pub fn frame_update(
        &mut self,
        dt: f32,
        input: &ActionState,
        head: &EyeAngles,
        body: &mut dyn CharacterBody,
        visual: Option<&mut BodyTransform>,
        mut animation: Option<&mut (dyn AnimationDriver + '_)>,
    ) {
        self.update_crouch(input, body);

        self.sprinting = input.down(InputAction::Sprint);
        self.walking = !self.sprinting && input.down(InputAction::Walk);

        if input.pressed(InputAction::Jump) {
            self.jump(body, animation.as_deref_mut());
        }

        self.rotate_body(dt, head, body, visual);
        self.sync_animation(head, body, animation);
    }

    /// Fixed-rate update: build the wish velocity from held inputs and run
    /// the grounded/airborne move step.
    pub fn physics_update(
        &mut self,
        dt: f32,
        input: &ActionState,
        head: &EyeAngles,
        body: &mut dyn CharacterBody,
    ) {
        self.build_wish_velocity(input, head);
        self.step(dt, body);
    }

    /// Crouch is held: the press edge crouches and shrinks the collision
    /// height, the release edge stands back up. Repeated press events while
    /// already crouching are ignored so the height is never scaled twice.
    fn update_crouch(&mut self, input: &ActionState, body: &mut dyn CharacterBody) {
        if input.pressed(InputAction::Crouch) && !self.crouching {
            self.crouching = true;
            body.set_height(body.height() / CROUCH_HEIGHT_FACTOR);
        }

        if input.released(InputAction::Crouch) && self.crouching {
            self.crouching = false;
            body.set_height(body.height() * CROUCH_HEIGHT_FACTOR);
        }
    }

    /// Jump if grounded: an instantaneous upward punch plus the animation
    /// trigger.
    fn jump(&mut self, body: &mut dyn CharacterBody, animation: Option<&mut (dyn AnimationDriver + '_)>) {
        if !body.is_on_ground() {
            return;
        }

        body.punch(Vec3::Y * self.config.jump_force);
        if let Some(animation) = animation {
            animation.trigger_jump();
        }
    }

    /// Turn the visual body toward the head yaw: quickly while moving above
    /// the speed threshold, slowly when stationary but misaligned beyond the
    /// configured angle, otherwise hold.
    fn rotate_body(
        &self,
        dt: f32,
        head: &EyeAngles,
        body: &dyn CharacterBody,
        visual: Option<&mut BodyTransform>,
    ) {
        let Some(visual) = visual else {
            return;
        };

        let difference = wrap_angle(head.yaw - visual.yaw);
        let speed = body.velocity().length();

        if speed > self.config.turn_speed_threshold {
            visual.yaw += difference * (dt * self.config.turn_fast_damping).min(1.0);
        } else if difference.abs() > self.config.turn_misalignment {
            visual.yaw += difference * (dt * self.config.turn_slow_damping).min(1.0);
        }
    }

    /// Push the current motion state into the animation rig, if one is
    /// attached.
    fn sync_animation(
        &self,
        head: &EyeAngles,
        body: &dyn CharacterBody,
        animation: Option<&mut (dyn AnimationDriver + '_)>,
    ) {
        let Some(animation) = animation else {
            return;
        };

        animation.set_wish_velocity(self.wish_velocity);
        animation.set_velocity(body.velocity());
        animation.set_aim(*head);
        animation.set_grounded(body.is_on_ground());
        animation.set_look(head.forward(), 1.0, 0.75, 0.5);
        animation.set_move_style(if self.walking {
            MoveStyle::Walk
        } else {
            MoveStyle::Run
        });
        animation.set_duck_level(if self.crouching { 1.0 } else { 0.0 });
    }

    /// Build the wish velocity: held directional inputs summed in the
    /// horizontal plane of the head yaw, normalized unless near-zero, scaled
    /// by the active speed constant.
    fn build_wish_velocity(&mut self, input: &ActionState, head: &EyeAngles) {
        let forward = head.yaw_forward();
        let right = head.yaw_right();

        let mut wish = Vec3::ZERO;
        if input.down(InputAction::MoveForward) {
            wish += forward;
        }
        if input.down(InputAction::MoveBack) {
            wish -= forward;
        }
        if input.down(InputAction::MoveLeft) {
            wish -= right;
        }
        if input.down(InputAction::MoveRight) {
            wish += right;
        }

        if wish.length_squared() > 1e-8 {
            wish = wish.normalize();
        }

        self.wish_velocity = wish * self.active_speed();
    }

    /// The move step. Gravity integrates as two half-steps around the body's
    /// move resolution; grounded state zeroes the vertical component on both
    /// sides.
    fn step(&mut self, dt: f32, body: &mut dyn CharacterBody) {
        let gravity = self.config.gravity;

        if body.is_on_ground() {
            let velocity = body.velocity();
            body.set_velocity(Vec3::new(velocity.x, 0.0, velocity.z));
            body.accelerate(self.wish_velocity, dt);
            body.apply_friction(self.config.ground_control, dt);
        } else {
            body.set_velocity(body.velocity() + gravity * (dt * 0.5));
            body.accelerate(self.wish_velocity.clamp_length_max(self.config.max_force), dt);
            body.apply_friction(self.config.air_control, dt);
        }

        body.move_body(dt);

        if body.is_on_ground() {
            let velocity = body.velocity();
            body.set_velocity(Vec3::new(velocity.x, 0.0, velocity.z));
        } else {
            body.set_velocity(body.velocity() + gravity * (dt * 0.5));
        }
    }
}
