//! Input Bindings Module
//!
//! Maps key identifiers to the four movement actions, and resolves legacy
//! numeric key codes to identifiers for event sources that do not report
//! physical key names.

use std::collections::HashMap;

use super::KeyState;

/// Logical movement actions read by the motion integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    /// Move forward (W / ArrowUp)
    Forward,
    /// Move backward (S / ArrowDown)
    Back,
    /// Strafe left (A / ArrowLeft)
    Left,
    /// Strafe right (D / ArrowRight)
    Right,
}

/// Key identifiers that trigger each movement action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementBindings {
    pub forward: Vec<String>,
    pub back: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for MovementBindings {
    fn default() -> Self {
        fn keys(codes: &[&str]) -> Vec<String> {
            codes.iter().map(|code| (*code).to_owned()).collect()
        }

        Self {
            forward: keys(&["KeyW", "ArrowUp"]),
            back: keys(&["KeyS", "ArrowDown"]),
            left: keys(&["KeyA", "ArrowLeft"]),
            right: keys(&["KeyD", "ArrowRight"]),
        }
    }
}

impl MovementBindings {
    /// Key identifiers bound to `action`.
    pub fn keys_for(&self, action: MoveAction) -> &[String] {
        match action {
            MoveAction::Forward => &self.forward,
            MoveAction::Back => &self.back,
            MoveAction::Left => &self.left,
            MoveAction::Right => &self.right,
        }
    }

    /// Check if any key bound to `action` is held.
    pub fn is_action_pressed(&self, action: MoveAction, keys: &KeyState) -> bool {
        self.keys_for(action).iter().any(|code| keys.is_pressed(code))
    }
}

/// Resolves a legacy numeric key code to a key identifier.
pub trait LegacyKeyTable {
    fn lookup(&self, key_code: u32) -> Option<&str>;
}

/// Legacy codes for the movement keys.
#[derive(Debug, Clone)]
pub struct DefaultKeyTable {
    codes: HashMap<u32, &'static str>,
}

impl Default for DefaultKeyTable {
    fn default() -> Self {
        let codes = HashMap::from([
            (37, "ArrowLeft"),
            (38, "ArrowUp"),
            (39, "ArrowRight"),
            (40, "ArrowDown"),
            (65, "KeyA"),
            (68, "KeyD"),
            (83, "KeyS"),
            (87, "KeyW"),
        ]);
        Self { codes }
    }
}

impl LegacyKeyTable for DefaultKeyTable {
    fn lookup(&self, key_code: u32) -> Option<&str> {
        self.codes.get(&key_code).copied()
    }
}

impl LegacyKeyTable for HashMap<u32, String> {
    fn lookup(&self, key_code: u32) -> Option<&str> {
        self.get(&key_code).map(String::as_str)
    }
}
