//! Input Bindings Module
//!
//! Maps physical keys to logical player actions, allowing for key remapping
//! without touching controller code. Key codes are windowing-system agnostic
//! so the library never depends on a specific input backend.

use std::collections::HashMap;

/// Generic key codes for player input, independent of windowing system.
///
/// Only the keys the default bindings use are enumerated; hosts translate
/// their own key events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,

    // Letter keys (for various bindings)
    C,
    E,
    V,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Logical input actions that can be bound to physical keys.
///
/// These represent high-level player inputs independent of their physical key
/// mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Sprint modifier (default: Shift)
    Sprint,
    /// Walk modifier (default: Alt)
    Walk,
    /// Jump (default: Space)
    Jump,
    /// Crouch, held (default: Ctrl)
    Crouch,
    /// Toggle first/third person (default: V)
    ViewToggle,
}

/// Maps physical keys to logical actions, supporting customizable bindings.
///
/// Controllers only ever see [`InputAction`]s; rebinding a key never changes
/// controller code.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default key mappings.
    ///
    /// Default bindings:
    /// - W = MoveForward
    /// - S = MoveBack
    /// - A = MoveLeft
    /// - D = MoveRight
    /// - Shift (Left) = Sprint
    /// - Alt (Left) = Walk
    /// - Space = Jump
    /// - Ctrl (Left) = Crouch
    /// - V = ViewToggle
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::AltLeft, InputAction::Walk);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ControlLeft, InputAction::Crouch);
        bindings.bind(KeyCode::V, InputAction::ViewToggle);

        bindings
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is
    /// removed. If the action was previously bound to another key, that
    /// binding is also removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }

        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn key_for(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Get all current bindings as key-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, InputAction)> + '_ {
        self.key_to_action.iter().map(|(&k, &a)| (k, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::S), Some(InputAction::MoveBack));
        assert_eq!(bindings.action_for(KeyCode::A), Some(InputAction::MoveLeft));
        assert_eq!(bindings.action_for(KeyCode::D), Some(InputAction::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::ShiftLeft), Some(InputAction::Sprint));
        assert_eq!(bindings.action_for(KeyCode::AltLeft), Some(InputAction::Walk));
        assert_eq!(bindings.action_for(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(bindings.action_for(KeyCode::ControlLeft), Some(InputAction::Crouch));
        assert_eq!(bindings.action_for(KeyCode::V), Some(InputAction::ViewToggle));
    }

    #[test]
    fn test_reverse_lookup() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.key_for(InputAction::MoveForward), Some(KeyCode::W));
        assert_eq!(bindings.key_for(InputAction::Sprint), Some(KeyCode::ShiftLeft));
        assert_eq!(bindings.key_for(InputAction::ViewToggle), Some(KeyCode::V));
    }

    #[test]
    fn test_rebind_key() {
        let mut bindings = KeyBindings::new();

        // Rebind crouch to C
        bindings.bind(KeyCode::C, InputAction::Crouch);

        // Ctrl should no longer be bound
        assert_eq!(bindings.action_for(KeyCode::ControlLeft), None);
        assert_eq!(bindings.action_for(KeyCode::C), Some(InputAction::Crouch));
        assert_eq!(bindings.key_for(InputAction::Crouch), Some(KeyCode::C));
    }

    #[test]
    fn test_unbind_key() {
        let mut bindings = KeyBindings::new();

        bindings.unbind_key(KeyCode::W);

        assert_eq!(bindings.action_for(KeyCode::W), None);
        assert_eq!(bindings.key_for(InputAction::MoveForward), None);
    }

    #[test]
    fn test_unbind_action() {
        let mut bindings = KeyBindings::new();

        bindings.unbind_action(InputAction::Sprint);

        assert_eq!(bindings.action_for(KeyCode::ShiftLeft), None);
        assert_eq!(bindings.key_for(InputAction::Sprint), None);
    }

    #[test]
    fn test_unknown_key_unbound() {
        let bindings = KeyBindings::new();
        assert_eq!(bindings.action_for(KeyCode::Unknown), None);
        assert_eq!(bindings.action_for(KeyCode::Escape), None);
    }
}
