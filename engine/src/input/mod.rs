//! Input Module
//!
//! Platform-agnostic action polling. The host pumps key and mouse events in;
//! controllers poll logical actions with down/pressed/released semantics and
//! read the accumulated mouse delta, once per frame.
//!
//! # Frame protocol
//!
//! ```rust,ignore
//! use strider_engine::input::{ActionState, InputAction, KeyCode};
//!
//! let mut input = ActionState::new();
//!
//! // 1. Event pump: forward key events and raw mouse motion
//! input.key_event(KeyCode::W, true);
//! input.accumulate_mouse(4.0, -1.5);
//!
//! // 2. Update: controllers poll
//! assert!(input.down(InputAction::MoveForward));
//! assert!(input.pressed(InputAction::MoveForward)); // edge, this frame only
//! let (dx, dy) = input.mouse_delta();
//!
//! // 3. End of frame: clear edges and mouse delta
//! input.end_frame();
//! assert!(!input.pressed(InputAction::MoveForward)); // still down, no edge
//! ```

pub mod bindings;

pub use bindings::{InputAction, KeyBindings, KeyCode};

use std::collections::HashSet;

/// Per-frame action state with edge tracking and mouse-delta accumulation.
///
/// `down` is level-triggered (true while the bound key is held); `pressed`
/// and `released` are edge-triggered and only true during the frame the
/// transition happened. OS key-repeat events do not re-fire `pressed`.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    bindings: KeyBindings,
    down: HashSet<InputAction>,
    pressed: HashSet<InputAction>,
    released: HashSet<InputAction>,
    mouse_dx: f32,
    mouse_dy: f32,
}

impl ActionState {
    /// Create an action state with default key bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an action state with custom key bindings.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    /// The current key bindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable access to the key bindings (for rebinding at runtime).
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Route a physical key press/release through the bindings.
    ///
    /// Returns `true` if the key was bound to an action and handled.
    pub fn key_event(&mut self, key: KeyCode, is_down: bool) -> bool {
        let Some(action) = self.bindings.action_for(key) else {
            return false;
        };

        if is_down {
            // insert() is false for key-repeat; only a fresh press is an edge
            if self.down.insert(action) {
                self.pressed.insert(action);
            }
        } else if self.down.remove(&action) {
            self.released.insert(action);
        }
        true
    }

    /// Accumulate raw mouse motion since the last frame.
    #[inline]
    pub fn accumulate_mouse(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    /// Whether the action's key is currently held.
    #[inline]
    pub fn down(&self, action: InputAction) -> bool {
        self.down.contains(&action)
    }

    /// Whether the action's key went down this frame.
    #[inline]
    pub fn pressed(&self, action: InputAction) -> bool {
        self.pressed.contains(&action)
    }

    /// Whether the action's key went up this frame.
    #[inline]
    pub fn released(&self, action: InputAction) -> bool {
        self.released.contains(&action)
    }

    /// Mouse delta accumulated during this frame's event pump.
    #[inline]
    pub fn mouse_delta(&self) -> (f32, f32) {
        (self.mouse_dx, self.mouse_dy)
    }

    /// Clear per-frame state (edges and mouse delta). Call once per frame
    /// after all controllers have polled.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }

    /// Reset all input state, including held keys. Use when the window loses
    /// focus so keys don't stick.
    pub fn reset(&mut self) {
        self.down.clear();
        self.pressed.clear();
        self.released.clear();
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }
}
