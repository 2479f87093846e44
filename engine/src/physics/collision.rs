//! Collision detection module
//!
//! Ray-AABB intersection (slab method) and a small tagged-box scene that
//! implements the [`SceneQuery`] capability. The camera rig probes this to
//! keep the third-person camera out of geometry; tests and the sandbox build
//! arenas out of it.
//!
//! # Example
//!
//! ```ignore
//! use strider_engine::host::SceneQuery;
//! use strider_engine::physics::{BoxScene, TaggedAabb};
//! use glam::Vec3;
//!
//! let mut scene = BoxScene::new();
//! scene.add(TaggedAabb::new(Vec3::new(-1.0, 0.0, -10.0), Vec3::new(1.0, 3.0, -9.0)));
//!
//! if let Some(hit) = scene.trace(Vec3::ZERO, Vec3::new(0.0, 1.0, -20.0), 0.5, &[]) {
//!     // camera clamps to hit.position
//! }
//! ```

use glam::Vec3;

use crate::host::{SceneQuery, TraceHit};

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the
/// slab method.
///
/// The slab method finds the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the
/// AABB at valid times (t_enter <= t_exit and t_exit >= 0), there is an
/// intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0;
///   zero when the origin starts inside the box)
/// * `None` - No intersection, or the box is entirely behind the origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Inverse direction with near-zero components pushed to huge values so
    // the parallel-axis case falls out of the min/max arithmetic
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 {
            1.0 / ray_dir.x
        } else {
            f32::MAX * ray_dir.x.signum()
        },
        if ray_dir.y.abs() > 1e-10 {
            1.0 / ray_dir.y
        } else {
            f32::MAX * ray_dir.y.signum()
        },
        if ray_dir.z.abs() > 1e-10 {
            1.0 / ray_dir.z
        } else {
            f32::MAX * ray_dir.z.signum()
        },
    );

    let t1 = (aabb_min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb_max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    let t3 = (aabb_min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb_max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    let t5 = (aabb_min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb_max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max < t_min || t_max < 0.0 {
        return None;
    }

    // Origin inside the box clamps to zero
    Some(t_min.max(0.0))
}

/// Compute the surface normal of an AABB at a point on (or near) its surface.
///
/// Picks the face whose plane is closest to the point. Points away from the
/// box center.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let faces = [
        ((point.x - aabb_min.x).abs(), Vec3::NEG_X),
        ((point.x - aabb_max.x).abs(), Vec3::X),
        ((point.y - aabb_min.y).abs(), Vec3::NEG_Y),
        ((point.y - aabb_max.y).abs(), Vec3::Y),
        ((point.z - aabb_min.z).abs(), Vec3::NEG_Z),
        ((point.z - aabb_max.z).abs(), Vec3::Z),
    ];

    let mut best = faces[0];
    for face in &faces[1..] {
        if face.0 < best.0 {
            best = *face;
        }
    }
    best.1
}

/// An axis-aligned box carrying string tags for trace filtering.
///
/// Tags mirror how hosts mark geometry ("player", "trigger", "world", ...);
/// the camera probe excludes the first two so the player's own hull never
/// blocks its camera.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedAabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
    tags: Vec<String>,
}

impl TaggedAabb {
    /// Create an untagged box.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            tags: Vec::new(),
        }
    }

    /// Create a box carrying the given tags.
    pub fn with_tags(min: Vec3, max: Vec3, tags: &[&str]) -> Self {
        Self {
            min,
            max,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Whether the box carries a specific tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the box carries any of the given tags.
    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|t| self.has_tag(t))
    }

    /// The tags on this box.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A trace scene made of tagged boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxScene {
    boxes: Vec<TaggedAabb>,
}

impl BoxScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box to the scene.
    pub fn add(&mut self, aabb: TaggedAabb) {
        self.boxes.push(aabb);
    }

    /// Number of boxes in the scene.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the scene contains no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate over the boxes.
    pub fn iter(&self) -> impl Iterator<Item = &TaggedAabb> {
        self.boxes.iter()
    }

    /// Remove all boxes.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }
}

impl SceneQuery for BoxScene {
    fn trace(&self, from: Vec3, to: Vec3, radius: f32, excluded_tags: &[&str]) -> Option<TraceHit> {
        let segment = to - from;
        let max_distance = segment.length();
        if max_distance < 0.0001 {
            return None;
        }
        let dir = segment / max_distance;

        let mut best: Option<(f32, &TaggedAabb)> = None;
        for aabb in &self.boxes {
            if aabb.has_any_tag(excluded_tags) {
                continue;
            }

            // Inflate by the probe radius (Minkowski sum) so the returned hit
            // already sits the probe radius off the surface
            let min = aabb.min - Vec3::splat(radius);
            let max = aabb.max + Vec3::splat(radius);

            if let Some(t) = ray_aabb_intersect(from, dir, min, max)
                && t <= max_distance
                && best.is_none_or(|(best_t, _)| t < best_t)
            {
                best = Some((t, aabb));
            }
        }

        best.map(|(t, aabb)| {
            let position = from + dir * t;
            TraceHit {
                position,
                normal: aabb_surface_normal(
                    position,
                    aabb.min - Vec3::splat(radius),
                    aabb.max + Vec3::splat(radius),
                ),
                distance: t,
            }
        })
    }
}
