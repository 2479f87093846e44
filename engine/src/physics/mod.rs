//! Physics Module
//!
//! Ray/AABB intersection math and the tagged-box trace scene used to back the
//! camera occlusion probe in tests and the sandbox.

pub mod collision;

pub use collision::{BoxScene, TaggedAabb, aabb_surface_normal, ray_aabb_intersect};
