//! Host Capability Traits
//!
//! The movement controller and camera rig do not own physics, animation,
//! rendering, or scene queries - the embedding engine does. This module
//! defines one trait per capability the controllers consume, so the core
//! stays engine-agnostic and the seams are explicit:
//!
//! - [`CharacterBody`] - character-controller physics (grounded query,
//!   velocity, collision height, impulse, move resolution)
//! - [`AnimationDriver`] - the animation rig fed once per frame
//! - [`SceneQuery`] - raycasting with tag exclusion and a probe radius
//! - [`BodyRenderer`] - shadow-only switch for the first-person body mesh
//!
//! [`KinematicCharacter`] is a minimal flat-ground implementation of
//! [`CharacterBody`] used by the sandbox binary and the integration tests.
//! It is a stand-in, not a collision engine.

pub mod kinematic;

pub use kinematic::KinematicCharacter;

use glam::Vec3;

use crate::angles::EyeAngles;

/// Character-controller physics capability.
///
/// Velocity and collision height are owned by the implementation; the
/// movement controller reads and writes them around
/// [`move_body`](CharacterBody::move_body), which resolves the body against
/// the world.
pub trait CharacterBody {
    /// Whether the body currently rests on walkable ground.
    fn is_on_ground(&self) -> bool;

    /// Current velocity in world space.
    fn velocity(&self) -> Vec3;

    /// Overwrite the current velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Current body position (feet).
    fn position(&self) -> Vec3;

    /// Current collision height.
    fn height(&self) -> f32;

    /// Set the collision height (crouching halves it and back).
    fn set_height(&mut self, height: f32);

    /// Pull velocity toward the wish velocity.
    fn accelerate(&mut self, wish: Vec3, dt: f32);

    /// Decay speed by a friction/control factor.
    fn apply_friction(&mut self, control: f32, dt: f32);

    /// Apply an instantaneous velocity impulse regardless of current
    /// velocity (used for jumping). Leaves the ground if moving upward.
    fn punch(&mut self, impulse: Vec3);

    /// Sweep the body through the world by `velocity * dt`, updating the
    /// grounded state.
    fn move_body(&mut self, dt: f32);
}

/// Movement style reported to the animation rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveStyle {
    /// Deliberate walking gait.
    Walk,
    /// Default running gait.
    #[default]
    Run,
}

/// Animation rig capability, fed once per frame by the movement controller.
///
/// All setters are cheap state pushes; the implementation decides how to
/// blend them. Optional: when absent the controller skips the sync silently.
pub trait AnimationDriver {
    /// The wish velocity the player is steering toward this tick.
    fn set_wish_velocity(&mut self, wish: Vec3);

    /// The actual body velocity after physics.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Head aim orientation.
    fn set_aim(&mut self, aim: EyeAngles);

    /// Grounded flag for the locomotion state machine.
    fn set_grounded(&mut self, grounded: bool);

    /// Look target direction with body/head/eye blend weights.
    fn set_look(&mut self, direction: Vec3, body_weight: f32, head_weight: f32, eye_weight: f32);

    /// Walk or run gait selection.
    fn set_move_style(&mut self, style: MoveStyle);

    /// Duck blend level, 0.0 standing to 1.0 fully crouched.
    fn set_duck_level(&mut self, level: f32);

    /// Fire the jump animation event.
    fn trigger_jump(&mut self);
}

/// Result of a scene trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// World position of the hit, already backed off by the probe radius.
    pub position: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
    /// Distance from the trace origin to the hit.
    pub distance: f32,
}

/// Scene raycasting capability.
pub trait SceneQuery {
    /// Cast from `from` toward `to` with a spherical probe of `radius`,
    /// ignoring geometry that carries any of `excluded_tags`.
    ///
    /// Returns the nearest hit, or `None` when the full segment is clear.
    fn trace(&self, from: Vec3, to: Vec3, radius: f32, excluded_tags: &[&str]) -> Option<TraceHit>;
}

/// How the player body mesh is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Normal rendering with shadows (third person).
    #[default]
    Normal,
    /// Mesh hidden, shadows still cast (first person).
    ShadowsOnly,
}

/// Body-mesh renderer capability. Optional: when absent the camera rig skips
/// the switch silently.
pub trait BodyRenderer {
    /// Switch between normal and shadow-only rendering.
    fn set_render_mode(&mut self, mode: RenderMode);
}
