//! Walkabout - headless sandbox session for the player rig.
//!
//! Runs a scripted player through a small arena at a fixed timestep and
//! prints the rig state as it goes: run-up, sprint, crouch, jump, view
//! toggle, and backing the third-person camera into a pillar.

use glam::Vec3;

use strider_engine::angles::EyeAngles;
use strider_engine::config::RigConfig;
use strider_engine::game::{ScriptStep, ScriptedSession, build_arena};
use strider_engine::host::{
    AnimationDriver, BodyRenderer, CharacterBody, KinematicCharacter, MoveStyle, RenderMode,
};
use strider_engine::input::{ActionState, KeyCode};
use strider_engine::rig::PlayerRig;

/// Renderer double that logs mode changes.
#[derive(Default)]
struct LoggingRenderer {
    mode: Option<RenderMode>,
}

impl BodyRenderer for LoggingRenderer {
    fn set_render_mode(&mut self, mode: RenderMode) {
        if self.mode != Some(mode) {
            println!("[Walkabout] body render mode -> {mode:?}");
            self.mode = Some(mode);
        }
    }
}

/// Animation driver double that logs jump triggers.
#[derive(Default)]
struct LoggingDriver;

impl AnimationDriver for LoggingDriver {
    fn set_wish_velocity(&mut self, _: Vec3) {}
    fn set_velocity(&mut self, _: Vec3) {}
    fn set_aim(&mut self, _: EyeAngles) {}
    fn set_grounded(&mut self, _: bool) {}
    fn set_look(&mut self, _: Vec3, _: f32, _: f32, _: f32) {}
    fn set_move_style(&mut self, _: MoveStyle) {}
    fn set_duck_level(&mut self, _: f32) {}
    fn trigger_jump(&mut self) {
        println!("[Walkabout] jump!");
    }
}

fn build_script() -> ScriptedSession {
    ScriptedSession::new(vec![
        ScriptStep::hold("run-up", 1.5, &[KeyCode::W]),
        ScriptStep::hold("sprint", 1.5, &[KeyCode::W, KeyCode::ShiftLeft]),
        ScriptStep::turn("turn and strafe", 1.0, &[KeyCode::D], (6.0, 0.0)),
        ScriptStep::hold("crouch walk", 1.5, &[KeyCode::W, KeyCode::ControlLeft]),
        ScriptStep::hold("jump", 0.6, &[KeyCode::W, KeyCode::Space]),
        ScriptStep::hold("go first person", 0.1, &[KeyCode::V]),
        ScriptStep::turn("look around up close", 1.0, &[], (0.0, -3.0)),
        ScriptStep::hold("back to third person", 0.1, &[KeyCode::V]),
        ScriptStep::hold("back into the pillar", 1.5, &[KeyCode::S]),
    ])
}

fn main() {
    let config = RigConfig::default();
    println!(
        "[Walkabout] rig config: speed {} / run {} / walk {} / crouch {}, camera distance {}",
        config.movement.speed,
        config.movement.run_speed,
        config.movement.walk_speed,
        config.movement.crouch_speed,
        config.camera.distance
    );

    let mut rig = PlayerRig::new(
        config,
        Box::new(KinematicCharacter::new()),
        Box::new(build_arena()),
    );
    rig.attach_camera();
    rig.attach_body_visual();
    rig.attach_body_renderer(Box::new(LoggingRenderer::default()));
    rig.attach_animation_driver(Box::new(LoggingDriver));

    let mut input = ActionState::new();
    let mut session = build_script();

    let dt = 1.0 / 60.0;
    let mut frame: u32 = 0;

    while !session.is_finished() {
        if let Some(label) = session.pump(dt, &mut input) {
            println!("[Walkabout] step: {label}");
        }

        rig.frame_update(dt, &input);
        rig.physics_update(dt, &input);
        input.end_frame();

        if frame % 30 == 0 {
            let body = rig.body();
            let camera = rig.camera_transform().expect("camera attached");
            println!(
                "[Walkabout] t={:5.2}s pos=({:7.1},{:5.1},{:7.1}) speed={:6.1} {} {} cam=({:7.1},{:5.1},{:7.1})",
                frame as f32 * dt,
                body.position().x,
                body.position().y,
                body.position().z,
                body.velocity().length(),
                if body.is_on_ground() { "ground" } else { "air   " },
                if rig.movement().is_crouching() { "crouch" } else { "stand " },
                camera.position.x,
                camera.position.y,
                camera.position.z,
            );
        }
        frame += 1;
    }

    println!(
        "[Walkabout] done after {:.2}s, final position ({:.1}, {:.1}, {:.1})",
        frame as f32 * dt,
        rig.body().position().x,
        rig.body().position().y,
        rig.body().position().z,
    );
}
