//! Sandbox Harness
//!
//! Demo-side glue for driving the player rig headlessly: an arena built out
//! of tagged trace boxes and a scripted input session. Used by the
//! `walkabout` binary; game code, not engine code.

pub mod arena;
pub mod script;

pub use arena::build_arena;
pub use script::{ScriptStep, ScriptedSession};
