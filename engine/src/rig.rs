//! Player Rig
//!
//! The aggregate that wires the movement controller and camera rig together:
//! it owns the shared head transform, the optional body and camera
//! transforms, and the injected host collaborators, and it fixes the update
//! order - movement first, then camera - instead of relying on host
//! scheduling order.
//!
//! The host drives two entry points: [`frame_update`](PlayerRig::frame_update)
//! once per rendered frame and [`physics_update`](PlayerRig::physics_update)
//! once per fixed physics step. Both are synchronous and single-threaded.

use glam::Vec3;

use crate::angles::EyeAngles;
use crate::camera::{CameraRig, CameraTransform};
use crate::config::RigConfig;
use crate::host::{AnimationDriver, BodyRenderer, CharacterBody, SceneQuery};
use crate::input::ActionState;
use crate::player::{BodyTransform, MovementController};

/// The shared head transform: the eye point plus the orientation both
/// controllers read and the camera writes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadTransform {
    /// Eye position in world space, following the character body.
    pub position: Vec3,
    /// Head orientation; mouse look accumulates here.
    pub angles: EyeAngles,
}

/// A complete player character: movement controller, camera rig, shared
/// transforms, and the host collaborators they talk to.
///
/// The character body and trace scene are required; the animation driver,
/// body renderer, body transform, and render camera are optional and skipped
/// silently when absent.
pub struct PlayerRig {
    movement: MovementController,
    camera: CameraRig,

    head: HeadTransform,
    body_visual: Option<BodyTransform>,
    camera_transform: Option<CameraTransform>,

    eye_height: f32,

    body: Box<dyn CharacterBody>,
    scene: Box<dyn SceneQuery>,
    animation: Option<Box<dyn AnimationDriver>>,
    renderer: Option<Box<dyn BodyRenderer>>,
}

impl PlayerRig {
    /// Create a rig from config and the two required collaborators.
    pub fn new(config: RigConfig, body: Box<dyn CharacterBody>, scene: Box<dyn SceneQuery>) -> Self {
        let mut rig = Self {
            movement: MovementController::with_config(config.movement),
            camera: CameraRig::new(config.camera),
            head: HeadTransform::default(),
            body_visual: None,
            camera_transform: None,
            eye_height: config.eye_height,
            body,
            scene,
            animation: None,
            renderer: None,
        };
        rig.sync_transforms();
        rig
    }

    /// Attach an animation driver. Without one, animation sync is skipped.
    pub fn attach_animation_driver(&mut self, driver: Box<dyn AnimationDriver>) {
        self.animation = Some(driver);
    }

    /// Attach a body-mesh renderer for the first-person shadow switch.
    pub fn attach_body_renderer(&mut self, renderer: Box<dyn BodyRenderer>) {
        self.renderer = Some(renderer);
    }

    /// Attach a visual body transform the controller turns toward the
    /// movement heading.
    pub fn attach_body_visual(&mut self) {
        self.body_visual = Some(BodyTransform {
            position: self.body.position(),
            yaw: self.head.angles.yaw,
        });
    }

    /// Attach a render camera transform. Without one, camera placement is
    /// skipped (mouse look still accumulates).
    pub fn attach_camera(&mut self) {
        self.camera_transform = Some(CameraTransform::default());
    }

    /// The shared head transform.
    #[inline]
    pub fn head(&self) -> &HeadTransform {
        &self.head
    }

    /// Mutable head access (e.g. to set a spawn orientation).
    pub fn head_mut(&mut self) -> &mut HeadTransform {
        &mut self.head
    }

    /// The visual body transform, if attached.
    #[inline]
    pub fn body_visual(&self) -> Option<&BodyTransform> {
        self.body_visual.as_ref()
    }

    /// The render camera pose, if attached.
    #[inline]
    pub fn camera_transform(&self) -> Option<&CameraTransform> {
        self.camera_transform.as_ref()
    }

    /// The movement controller.
    #[inline]
    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    /// The camera rig.
    #[inline]
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// The character body collaborator.
    #[inline]
    pub fn body(&self) -> &dyn CharacterBody {
        self.body.as_ref()
    }

    /// Mutable access to the character body (host-side teleports etc.).
    pub fn body_mut(&mut self) -> &mut dyn CharacterBody {
        self.body.as_mut()
    }

    /// The animation driver, if attached.
    pub fn animation_driver(&self) -> Option<&dyn AnimationDriver> {
        self.animation.as_deref()
    }

    /// Per-frame update: movement (crouch, jump, body turn, animation) then
    /// camera (mouse look, offset, placement). The ordering is the contract -
    /// the camera reads the crouch flag the movement step just wrote.
    pub fn frame_update(&mut self, dt: f32, input: &ActionState) {
        self.movement.frame_update(
            dt,
            input,
            &self.head.angles,
            self.body.as_mut(),
            self.body_visual.as_mut(),
            self.animation.as_deref_mut(),
        );

        self.sync_transforms();

        self.camera.frame_update(
            dt,
            input,
            self.head.position,
            &mut self.head.angles,
            self.movement.is_crouching(),
            self.scene.as_ref(),
            self.camera_transform.as_mut(),
            self.renderer.as_deref_mut(),
        );
    }

    /// Fixed-rate physics update: wish-velocity build plus the body move.
    pub fn physics_update(&mut self, dt: f32, input: &ActionState) {
        self.movement
            .physics_update(dt, input, &self.head.angles, self.body.as_mut());
        self.sync_transforms();
    }

    /// Follow the character body: the head sits at the configured eye height
    /// above the feet, and the visual body mirrors the feet position.
    fn sync_transforms(&mut self) {
        self.head.position = self.body.position() + Vec3::Y * self.eye_height;
        if let Some(visual) = self.body_visual.as_mut() {
            visual.position = self.body.position();
        }
    }
}
