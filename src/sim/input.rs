//! Input tracking for goblin movement
//!
//! Keyboard keys and on-screen arrows both reduce to two logical
//! directions. The tracker keeps the set of currently held keys and nets
//! them out: equal counts stop movement, an excess in either direction
//! slides the goblin that way until the balance changes.

use serde::{Deserialize, Serialize};

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// A movement input source: four keyboard keys plus the two on-screen
/// arrow buttons. Each variant carries a canonical direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKey {
    KeyA,
    KeyD,
    ArrowLeft,
    ArrowRight,
    UiLeft,
    UiRight,
}

impl ActionKey {
    /// The direction this key stands for
    pub fn direction(self) -> Direction {
        match self {
            ActionKey::KeyA | ActionKey::ArrowLeft | ActionKey::UiLeft => Direction::Left,
            ActionKey::KeyD | ActionKey::ArrowRight | ActionKey::UiRight => Direction::Right,
        }
    }

    /// Map a lowercased DOM `KeyboardEvent.key` to a movement key.
    /// Non-movement keys return `None`.
    pub fn from_key_event(key: &str) -> Option<Self> {
        match key {
            "a" => Some(ActionKey::KeyA),
            "d" => Some(ActionKey::KeyD),
            "arrowleft" => Some(ActionKey::ArrowLeft),
            "arrowright" => Some(ActionKey::ArrowRight),
            _ => None,
        }
    }
}

/// Set of currently held movement keys, deduplicated per key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputTracker {
    held: Vec<ActionKey>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Repeated press events for a key already held
    /// (OS auto-repeat) don't multiply its weight.
    pub fn press(&mut self, key: ActionKey) {
        self.held.retain(|&k| k != key);
        self.held.push(key);
    }

    /// Record a key release. Releasing a key that isn't held is a no-op.
    pub fn release(&mut self, key: ActionKey) {
        self.held.retain(|&k| k != key);
    }

    /// Forget everything held (session teardown)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    fn count(&self, dir: Direction) -> usize {
        self.held.iter().filter(|k| k.direction() == dir).count()
    }

    /// Net movement direction: `sign(rights - lefts)`, `None` on balance
    pub fn net_direction(&self) -> Option<Direction> {
        let lefts = self.count(Direction::Left);
        let rights = self.count(Direction::Right);
        match lefts.cmp(&rights) {
            std::cmp::Ordering::Less => Some(Direction::Right),
            std::cmp::Ordering::Greater => Some(Direction::Left),
            std::cmp::Ordering::Equal => None,
        }
    }
}
