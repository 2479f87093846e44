//! Camera Module
//!
//! The camera half of the player character: mouse look on the shared head
//! orientation, crouch eye offset, and the first/third-person switch with an
//! occlusion probe. Window-system agnostic - the rig only computes a pose.

pub mod rig;

pub use rig::{CameraConfig, CameraMode, CameraRig, CameraTransform};
