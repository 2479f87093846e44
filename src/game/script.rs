//! Scripted Input Session
//!
//! Replays a timed sequence of key holds and mouse motion into an
//! [`ActionState`], frame by frame. The diff between consecutive steps
//! produces the same press/release edges a real event pump would.

use crate::input::{ActionState, KeyCode};

/// One step of a scripted session.
#[derive(Debug, Clone)]
pub struct ScriptStep {
    /// How long the step lasts, in seconds.
    pub duration: f32,
    /// Keys held for the whole step.
    pub keys: Vec<KeyCode>,
    /// Mouse motion fed every frame of the step, in counts per frame.
    pub mouse_per_frame: (f32, f32),
    /// Label printed when the step begins.
    pub label: &'static str,
}

impl ScriptStep {
    /// A step holding the given keys with no mouse motion.
    pub fn hold(label: &'static str, duration: f32, keys: &[KeyCode]) -> Self {
        Self {
            duration,
            keys: keys.to_vec(),
            mouse_per_frame: (0.0, 0.0),
            label,
        }
    }

    /// A step that turns the view while holding keys.
    pub fn turn(
        label: &'static str,
        duration: f32,
        keys: &[KeyCode],
        mouse_per_frame: (f32, f32),
    ) -> Self {
        Self {
            duration,
            keys: keys.to_vec(),
            mouse_per_frame,
            label,
        }
    }
}

/// Replays [`ScriptStep`]s into an [`ActionState`] at a fixed timestep.
#[derive(Debug, Clone)]
pub struct ScriptedSession {
    steps: Vec<ScriptStep>,
    current: usize,
    elapsed_in_step: f32,
    held: Vec<KeyCode>,
}

impl ScriptedSession {
    /// Create a session from its steps.
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps,
            current: 0,
            elapsed_in_step: 0.0,
            held: Vec::new(),
        }
    }

    /// Whether every step has finished.
    pub fn is_finished(&self) -> bool {
        self.current >= self.steps.len()
    }

    /// The label of the running step, if any.
    pub fn current_label(&self) -> Option<&'static str> {
        self.steps.get(self.current).map(|s| s.label)
    }

    /// Advance one frame: emit key edges for the active step's diff against
    /// the previous one and feed its mouse motion.
    ///
    /// Returns the label of a step that started this frame, if one did.
    pub fn pump(&mut self, dt: f32, input: &mut ActionState) -> Option<&'static str> {
        let mut started = None;

        if self.elapsed_in_step == 0.0 && !self.is_finished() {
            started = self.apply_step_keys(input);
        }

        let Some(step) = self.steps.get(self.current) else {
            // Script over: release everything once
            for key in std::mem::take(&mut self.held) {
                input.key_event(key, false);
            }
            return None;
        };

        input.accumulate_mouse(step.mouse_per_frame.0, step.mouse_per_frame.1);

        self.elapsed_in_step += dt;
        if self.elapsed_in_step >= step.duration {
            self.current += 1;
            self.elapsed_in_step = 0.0;
        }

        started
    }

    /// Release keys the new step no longer holds, press the ones it adds.
    fn apply_step_keys(&mut self, input: &mut ActionState) -> Option<&'static str> {
        let step = &self.steps[self.current];

        for &key in &self.held {
            if !step.keys.contains(&key) {
                input.key_event(key, false);
            }
        }
        for &key in &step.keys {
            if !self.held.contains(&key) {
                input.key_event(key, true);
            }
        }
        self.held = step.keys.clone();
        Some(step.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputAction;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_step_edges_and_holds() {
        let mut session = ScriptedSession::new(vec![
            ScriptStep::hold("walk", 2.0 * DT, &[KeyCode::W]),
            ScriptStep::hold("sprint", 2.0 * DT, &[KeyCode::W, KeyCode::ShiftLeft]),
        ]);
        let mut input = ActionState::new();

        // First frame of step 1: press edge
        assert_eq!(session.pump(DT, &mut input), Some("walk"));
        assert!(input.pressed(InputAction::MoveForward));
        input.end_frame();

        // Second frame: still held, no edge
        assert_eq!(session.pump(DT, &mut input), None);
        assert!(input.down(InputAction::MoveForward));
        assert!(!input.pressed(InputAction::MoveForward));
        input.end_frame();

        // Step 2 begins: W stays held (no re-press), Shift edges on
        assert_eq!(session.pump(DT, &mut input), Some("sprint"));
        assert!(!input.pressed(InputAction::MoveForward));
        assert!(input.pressed(InputAction::Sprint));
        input.end_frame();
    }

    #[test]
    fn test_finish_releases_keys() {
        let mut session = ScriptedSession::new(vec![ScriptStep::hold(
            "tap",
            DT,
            &[KeyCode::Space],
        )]);
        let mut input = ActionState::new();

        session.pump(DT, &mut input);
        input.end_frame();

        session.pump(DT, &mut input);
        assert!(session.is_finished());
        assert!(input.released(InputAction::Jump));
        assert!(!input.down(InputAction::Jump));
    }

    #[test]
    fn test_mouse_motion_fed_per_frame() {
        let mut session = ScriptedSession::new(vec![ScriptStep::turn(
            "look",
            2.0 * DT,
            &[],
            (4.0, -1.0),
        )]);
        let mut input = ActionState::new();

        session.pump(DT, &mut input);
        assert_eq!(input.mouse_delta(), (4.0, -1.0));
        input.end_frame();

        session.pump(DT, &mut input);
        assert_eq!(input.mouse_delta(), (4.0, -1.0));
    }
}
