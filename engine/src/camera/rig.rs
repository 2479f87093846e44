//! Camera Rig
//!
//! Derives the head orientation from mouse delta, blends a crouch eye offset,
//! toggles between first-person and third-person view distances, and places
//! the render camera with an occlusion probe so it never clips through
//! geometry.
//!
//! # State machine
//!
//! Two states, keyed off the current view distance: `0` is first person,
//! anything else third person. The view-toggle edge swaps the distance
//! between the configured starting and alternate values instantly; only the
//! crouch offset is smoothed.
//!
//! Runs after the movement controller's frame update, reading its crouch
//! flag.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::angles::EyeAngles;
use crate::host::{BodyRenderer, RenderMode, SceneQuery};
use crate::input::{ActionState, InputAction};

/// Camera tunables with their documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting view distance; 0 starts in first person (default: 150.0)
    pub distance: f32,
    /// Distance the view toggle switches to (default: 0.0, first person)
    pub alt_distance: f32,
    /// Whether the view toggle is enabled (default: true)
    pub can_switch_view: bool,
    /// Sideways shoulder offset in third person (default: 15.0)
    pub side_distance: f32,
    /// Mouse sensitivity in radians per count (default: 0.1° per count)
    pub sensitivity: f32,
    /// Downward eye shift while crouched (default: 32.0)
    pub crouch_drop: f32,
    /// Crouch offset blend damping, applied as `lerp(_, _, dt * damping)`
    /// (default: 10.0)
    pub offset_damping: f32,
    /// Occlusion probe radius (default: 5.0)
    pub probe_radius: f32,
    /// Tags the occlusion probe ignores (default: ["player", "trigger"])
    pub excluded_tags: Vec<String>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 150.0,
            alt_distance: 0.0,
            can_switch_view: true,
            side_distance: 15.0,
            sensitivity: 0.1_f32.to_radians(),
            crouch_drop: 32.0,
            offset_damping: 10.0,
            probe_radius: 5.0,
            excluded_tags: vec!["player".to_string(), "trigger".to_string()],
        }
    }
}

/// Camera view state, derived from the current distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Camera exactly at the eye point; body rendered shadow-only.
    FirstPerson,
    /// Camera behind the player at the view distance, occlusion-probed.
    ThirdPerson,
}

/// The render camera pose the rig writes each frame.
///
/// Optional on the rig: without one attached, the placement step is skipped
/// silently (orientation accumulation still runs).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraTransform {
    /// World position of the render camera.
    pub position: Vec3,
    /// Orientation of the render camera (matches the head).
    pub angles: EyeAngles,
}

/// Camera rig state.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,

    /// Current view distance; toggles between `starting_distance` and
    /// `config.alt_distance`.
    distance: f32,
    /// The configured distance captured at construction, restored by the
    /// second toggle.
    starting_distance: f32,
    /// Smoothed crouch eye offset.
    current_offset: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl CameraRig {
    /// Create a rig from camera tunables.
    pub fn new(config: CameraConfig) -> Self {
        let distance = config.distance;
        Self {
            config,
            distance,
            starting_distance: distance,
            current_offset: Vec3::ZERO,
        }
    }

    /// The camera tunables.
    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current view distance.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The smoothed crouch offset currently applied to the eye point.
    #[inline]
    pub fn current_offset(&self) -> Vec3 {
        self.current_offset
    }

    /// Whether the rig is in first person (distance exactly zero).
    #[inline]
    pub fn is_first_person(&self) -> bool {
        self.distance == 0.0
    }

    /// The current view state.
    pub fn mode(&self) -> CameraMode {
        if self.is_first_person() {
            CameraMode::FirstPerson
        } else {
            CameraMode::ThirdPerson
        }
    }

    /// Swap the view distance between the starting and alternate values.
    /// Instantaneous; toggling twice restores the original distance.
    pub fn toggle_view(&mut self) {
        if self.distance == self.starting_distance {
            self.distance = self.config.alt_distance;
        } else {
            self.distance = self.starting_distance;
        }
    }

    /// Per-frame update. Runs after the movement controller so the crouch
    /// flag read here is current.
    ///
    /// Accumulates mouse look into the shared head orientation, blends the
    /// crouch offset, handles the view toggle, and places the render camera.
    /// When no camera is attached, placement and the renderer switch are
    /// skipped silently.
    #[allow(clippy::too_many_arguments)]
    pub fn frame_update(
        &mut self,
        dt: f32,
        input: &ActionState,
        head_position: Vec3,
        angles: &mut EyeAngles,
        crouching: bool,
        scene: &dyn SceneQuery,
        camera: Option<&mut CameraTransform>,
        renderer: Option<&mut (dyn BodyRenderer + '_)>,
    ) {
        // Mouse look on the shared head orientation
        let (dx, dy) = input.mouse_delta();
        angles.yaw += dx * self.config.sensitivity;
        angles.pitch -= dy * self.config.sensitivity;
        angles.roll = 0.0;
        angles.clamp_pitch();

        // Crouch eye offset, exponentially blended toward its target
        let target_offset = if crouching {
            Vec3::NEG_Y * self.config.crouch_drop
        } else {
            Vec3::ZERO
        };
        self.current_offset = self
            .current_offset
            .lerp(target_offset, (dt * self.config.offset_damping).min(1.0));

        // View toggle edge, gated by config
        if input.pressed(InputAction::ViewToggle) && self.config.can_switch_view {
            self.toggle_view();
        }

        let Some(camera) = camera else {
            return;
        };

        let eye = head_position + self.current_offset;
        let position = if self.is_first_person() {
            // First person: exactly the eye point, no probe
            if let Some(renderer) = renderer {
                renderer.set_render_mode(RenderMode::ShadowsOnly);
            }
            eye
        } else {
            // Third person: probe from the eye back along the view direction,
            // shouldered sideways, and clamp to the first hit
            let target = eye - angles.forward() * self.distance
                + angles.right() * self.config.side_distance;
            let excluded: Vec<&str> = self.config.excluded_tags.iter().map(String::as_str).collect();

            let position = match scene.trace(eye, target, self.config.probe_radius, &excluded) {
                Some(hit) => hit.position,
                None => target,
            };

            if let Some(renderer) = renderer {
                renderer.set_render_mode(RenderMode::Normal);
            }
            position
        };

        camera.position = position;
        camera.angles = *angles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TraceHit;
    use crate::input::KeyCode;
    use crate::physics::{BoxScene, TaggedAabb};
    use std::cell::Cell;

    const DT: f32 = 1.0 / 60.0;

    /// Scene double that counts traces and never hits.
    #[derive(Default)]
    struct CountingScene {
        calls: Cell<usize>,
    }

    impl SceneQuery for CountingScene {
        fn trace(&self, _: Vec3, _: Vec3, _: f32, _: &[&str]) -> Option<TraceHit> {
            self.calls.set(self.calls.get() + 1);
            None
        }
    }

    /// Renderer double remembering the last mode set.
    #[derive(Default)]
    struct RecordingRenderer {
        mode: Option<RenderMode>,
    }

    impl BodyRenderer for RecordingRenderer {
        fn set_render_mode(&mut self, mode: RenderMode) {
            self.mode = Some(mode);
        }
    }

    fn first_person_rig() -> CameraRig {
        CameraRig::new(CameraConfig {
            distance: 0.0,
            alt_distance: 150.0,
            ..Default::default()
        })
    }

    #[test]
    fn test_pitch_clamped_under_huge_mouse_delta() {
        let mut rig = CameraRig::default();
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();

        let mut input = ActionState::new();
        input.accumulate_mouse(0.0, -1.0e6);
        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);

        assert!((angles.pitch - 89.0_f32.to_radians()).abs() < 0.001);

        input.end_frame();
        input.accumulate_mouse(0.0, 1.0e6);
        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);

        assert!((angles.pitch - (-89.0_f32).to_radians()).abs() < 0.001);
        assert_eq!(angles.roll, 0.0);
    }

    #[test]
    fn test_mouse_sensitivity_applied() {
        let mut rig = CameraRig::default();
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();

        let mut input = ActionState::new();
        input.accumulate_mouse(10.0, 0.0);
        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);

        // 10 counts at 0.1° per count
        assert!((angles.yaw - 1.0_f32.to_radians()).abs() < 0.0001);
    }

    #[test]
    fn test_view_toggle_flips_between_two_distances() {
        let mut rig = CameraRig::default();
        assert_eq!(rig.distance(), 150.0);
        assert_eq!(rig.mode(), CameraMode::ThirdPerson);

        rig.toggle_view();
        assert_eq!(rig.distance(), 0.0);
        assert_eq!(rig.mode(), CameraMode::FirstPerson);

        rig.toggle_view();
        assert_eq!(rig.distance(), 150.0);
        assert_eq!(rig.mode(), CameraMode::ThirdPerson);
    }

    #[test]
    fn test_view_toggle_input_edge_and_gate() {
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();

        let mut input = ActionState::new();
        input.key_event(KeyCode::V, true);

        let mut rig = CameraRig::default();
        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);
        assert!(rig.is_first_person());

        // Holding the key is not an edge
        input.end_frame();
        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);
        assert!(rig.is_first_person());

        // Switching disabled: the edge is ignored
        let mut locked = CameraRig::new(CameraConfig {
            can_switch_view: false,
            ..Default::default()
        });
        let mut input = ActionState::new();
        input.key_event(KeyCode::V, true);
        locked.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);
        assert_eq!(locked.distance(), 150.0);
    }

    #[test]
    fn test_first_person_places_camera_at_eye_without_trace() {
        let mut rig = first_person_rig();
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();
        let mut camera = CameraTransform::default();

        let head = Vec3::new(3.0, 64.0, -2.0);
        let input = ActionState::new();
        rig.frame_update(
            DT,
            &input,
            head,
            &mut angles,
            false,
            &scene,
            Some(&mut camera),
            None,
        );

        // Exactly head + crouch offset (zero here), and the scene untouched
        assert_eq!(camera.position, head);
        assert_eq!(scene.calls.get(), 0);
    }

    #[test]
    fn test_first_person_body_shadows_only() {
        let mut rig = first_person_rig();
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();
        let mut camera = CameraTransform::default();
        let mut renderer = RecordingRenderer::default();

        let input = ActionState::new();
        rig.frame_update(
            DT,
            &input,
            Vec3::ZERO,
            &mut angles,
            false,
            &scene,
            Some(&mut camera),
            Some(&mut renderer),
        );

        assert_eq!(renderer.mode, Some(RenderMode::ShadowsOnly));
    }

    #[test]
    fn test_third_person_full_distance_when_clear() {
        let mut rig = CameraRig::default();
        let scene = BoxScene::new();
        let mut angles = EyeAngles::default();
        let mut camera = CameraTransform::default();
        let mut renderer = RecordingRenderer::default();

        let head = Vec3::new(0.0, 64.0, 0.0);
        let input = ActionState::new();
        rig.frame_update(
            DT,
            &input,
            head,
            &mut angles,
            false,
            &scene,
            Some(&mut camera),
            Some(&mut renderer),
        );

        // Looking toward -Z: camera sits behind at +Z, shouldered +X
        let expected = head - angles.forward() * 150.0 + angles.right() * 15.0;
        assert!((camera.position - expected).length() < 0.001);
        assert_eq!(renderer.mode, Some(RenderMode::Normal));
    }

    #[test]
    fn test_third_person_clamps_to_occluder() {
        let mut rig = CameraRig::default();
        let mut scene = BoxScene::new();
        // Wall 50 units behind the head, straddling the probe path
        scene.add(TaggedAabb::new(
            Vec3::new(-100.0, 0.0, 50.0),
            Vec3::new(100.0, 200.0, 60.0),
        ));

        let mut angles = EyeAngles::default();
        let mut camera = CameraTransform::default();

        let head = Vec3::new(0.0, 64.0, 0.0);
        let input = ActionState::new();
        rig.frame_update(
            DT,
            &input,
            head,
            &mut angles,
            false,
            &scene,
            Some(&mut camera),
            None,
        );

        // Clamped well short of the configured 150
        let pulled_in = (camera.position - head).length();
        assert!(pulled_in < 60.0, "camera at {pulled_in}, expected < 60");
        // And backed off the wall face by the probe radius
        assert!(camera.position.z < 50.0);
    }

    #[test]
    fn test_third_person_probe_excludes_player_tags() {
        let mut rig = CameraRig::default();
        let mut scene = BoxScene::new();
        scene.add(TaggedAabb::with_tags(
            Vec3::new(-100.0, 0.0, 20.0),
            Vec3::new(100.0, 200.0, 30.0),
            &["player"],
        ));

        let mut angles = EyeAngles::default();
        let mut camera = CameraTransform::default();

        let head = Vec3::new(0.0, 64.0, 0.0);
        let input = ActionState::new();
        rig.frame_update(
            DT,
            &input,
            head,
            &mut angles,
            false,
            &scene,
            Some(&mut camera),
            None,
        );

        // The tagged box never blocks the camera
        let expected = head - angles.forward() * 150.0 + angles.right() * 15.0;
        assert!((camera.position - expected).length() < 0.001);
    }

    #[test]
    fn test_crouch_offset_blends_toward_drop() {
        let mut rig = CameraRig::default();
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();
        let input = ActionState::new();

        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, true, &scene, None, None);
        let after_one = rig.current_offset().y;
        assert!(after_one < 0.0);
        assert!(after_one > -32.0);

        for _ in 0..300 {
            rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, true, &scene, None, None);
        }
        assert!((rig.current_offset().y - (-32.0)).abs() < 0.1);

        // Standing back up blends toward zero
        for _ in 0..300 {
            rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);
        }
        assert!(rig.current_offset().y.abs() < 0.1);
    }

    #[test]
    fn test_no_camera_skips_placement_silently() {
        let mut rig = CameraRig::default();
        let scene = CountingScene::default();
        let mut angles = EyeAngles::default();

        let input = ActionState::new();
        rig.frame_update(DT, &input, Vec3::ZERO, &mut angles, false, &scene, None, None);

        // Third person with no camera attached: no probe either
        assert_eq!(scene.calls.get(), 0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = CameraConfig {
            distance: 120.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CameraConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
