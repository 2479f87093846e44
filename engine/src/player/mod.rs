//! Player Module
//!
//! The movement half of the player character: input intent to velocity,
//! crouch/sprint/walk state, jumping, and visual body turning.
//!
//! # Components
//!
//! - [`MovementController`] - per-frame state handling plus the fixed-rate
//!   physics step that drives a [`CharacterBody`](crate::host::CharacterBody)
//! - [`MovementConfig`] - all movement tunables with documented defaults
//! - [`BodyTransform`] - the optional visual body the controller turns toward
//!   the movement heading

pub mod movement;

pub use movement::{BodyTransform, CROUCH_HEIGHT_FACTOR, MovementConfig, MovementController};
