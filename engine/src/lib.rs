//! Strider Engine Library
//!
//! A player-character toolkit: a first/third-person movement controller and an
//! attached camera rig, written against capability traits for the services a
//! host engine provides (character physics, animation rig, scene tracing).
//! The library is window-system and renderer agnostic - it only manages
//! controller state and math, and talks to the outside world through the
//! traits in [`host`].
//!
//! # Modules
//!
//! - [`angles`] - Shared pitch/yaw orientation math for head and camera
//! - [`host`] - Capability traits plus a flat-ground reference character body
//! - [`input`] - Platform-agnostic action polling (down/pressed/released + mouse delta)
//! - [`player`] - Movement controller (crouch, sprint/walk, jump, body turning)
//! - [`camera`] - Camera rig (mouse look, crouch offset, first/third-person switch)
//! - [`physics`] - Ray/AABB intersection and the tagged-box trace scene
//! - [`rig`] - The aggregate that sequences movement and camera updates
//! - [`config`] - Tunable defaults with JSON round-trip
//!
//! # Example
//!
//! ```ignore
//! use strider_engine::config::RigConfig;
//! use strider_engine::host::KinematicCharacter;
//! use strider_engine::input::{ActionState, KeyCode};
//! use strider_engine::physics::BoxScene;
//! use strider_engine::rig::PlayerRig;
//!
//! let mut rig = PlayerRig::new(
//!     RigConfig::default(),
//!     Box::new(KinematicCharacter::new()),
//!     Box::new(BoxScene::new()),
//! );
//! rig.attach_camera();
//!
//! let mut input = ActionState::new();
//!
//! // Host loop: pump events, then tick.
//! input.key_event(KeyCode::W, true);
//! rig.frame_update(1.0 / 60.0, &input);
//! rig.physics_update(1.0 / 60.0, &input);
//! input.end_frame();
//! ```

pub mod angles;
pub mod camera;
pub mod config;
pub mod host;
pub mod input;
pub mod physics;
pub mod player;
pub mod rig;

// Demo-harness modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the shared orientation type at crate level for convenience
pub use angles::EyeAngles;
// Re-export commonly used input types
pub use input::{ActionState, InputAction, KeyBindings, KeyCode};
// Re-export the controllers and the aggregate
pub use camera::{CameraMode, CameraRig};
pub use player::MovementController;
pub use rig::PlayerRig;
