//! Sandbox Arena
//!
//! A small walled yard for the walkabout session: four walls, a pillar
//! behind the spawn so the third-person probe has something to clamp
//! against, and a player-tagged hull the probe must ignore.

use glam::Vec3;

use crate::physics::{BoxScene, TaggedAabb};

/// Half-extent of the square yard.
pub const YARD_HALF_SIZE: f32 = 600.0;

/// Wall height.
pub const WALL_HEIGHT: f32 = 200.0;

/// Build the walkabout arena.
pub fn build_arena() -> BoxScene {
    let mut scene = BoxScene::new();
    let s = YARD_HALF_SIZE;
    let h = WALL_HEIGHT;
    let t = 20.0; // wall thickness

    // Perimeter walls
    scene.add(TaggedAabb::with_tags(
        Vec3::new(-s, 0.0, -s - t),
        Vec3::new(s, h, -s),
        &["world"],
    ));
    scene.add(TaggedAabb::with_tags(
        Vec3::new(-s, 0.0, s),
        Vec3::new(s, h, s + t),
        &["world"],
    ));
    scene.add(TaggedAabb::with_tags(
        Vec3::new(-s - t, 0.0, -s),
        Vec3::new(-s, h, s),
        &["world"],
    ));
    scene.add(TaggedAabb::with_tags(
        Vec3::new(s, 0.0, -s),
        Vec3::new(s + t, h, s),
        &["world"],
    ));

    // Pillar a short way behind the spawn: the third-person camera clamps
    // against it when the player backs up
    scene.add(TaggedAabb::with_tags(
        Vec3::new(-40.0, 0.0, 80.0),
        Vec3::new(40.0, h, 120.0),
        &["world"],
    ));

    // The player's own hull; probes must skip it
    scene.add(TaggedAabb::with_tags(
        Vec3::new(-16.0, 0.0, -16.0),
        Vec3::new(16.0, 72.0, 16.0),
        &["player"],
    ));

    scene
}
