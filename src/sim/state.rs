//! Session state and entity types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::clamp_actor_x;
use crate::consts::*;
use crate::surface::{Sprite, Surface};

use super::input::Direction;
use super::timer::TimerHandle;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mounted, waiting for the first start
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended; terminal until an explicit restart
    GameOver,
}

/// What kind of item is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropKind {
    /// Catch these - one on the ground ends the run
    Coin,
    /// Avoid these - catching one ends the run
    Skull,
}

impl DropKind {
    /// Whether the goblin is supposed to catch this kind
    pub fn catchable(self) -> bool {
        matches!(self, DropKind::Coin)
    }

    pub fn sprite(self) -> Sprite {
        match self {
            DropKind::Coin => Sprite::Coin,
            DropKind::Skull => Sprite::Skull,
        }
    }
}

/// Identity of a falling drop within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DropId(pub u32);

/// A falling item. `pos.x` is fixed at spawn; `pos.y` only ever grows,
/// one descent tick at a time, until the drop is resolved. The descent
/// timer is owned exclusively by this entity and cancelled exactly once,
/// on resolution or session teardown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropEntity {
    pub id: DropId,
    pub kind: DropKind,
    pub pos: Vec2,
    pub timer: TimerHandle,
}

impl DropEntity {
    pub fn size(&self) -> Vec2 {
        self.kind.sprite().size()
    }
}

/// The player-controlled goblin at the bottom of the surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goblin {
    /// Left-edge x, always within `[0, SURFACE_W - GOBLIN_W]`
    pub x: f32,
}

impl Default for Goblin {
    fn default() -> Self {
        // Spawn near center, like the arcade cabinet art intends
        Self {
            x: clamp_actor_x(SURFACE_W / 2.0),
        }
    }
}

impl Goblin {
    /// Top-left drawing position (the goblin sits on the ground row)
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, SURFACE_H - GOBLIN_H)
    }

    /// Draw the goblin at its current position
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_image(Sprite::Goblin, self.pos());
    }

    /// One movement nudge: clear the old footprint, saturate the step at
    /// the surface bounds, redraw. At a boundary the position simply
    /// stays put.
    pub fn shift(&mut self, direction: Direction, surface: &mut dyn Surface) {
        surface.clear_rect(self.pos(), Sprite::Goblin.size());
        self.x = clamp_actor_x(match direction {
            Direction::Left => self.x - ACTOR_STEP,
            Direction::Right => self.x + ACTOR_STEP,
        });
        self.draw(surface);
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducible spawn sequences
    pub seed: u64,
    pub phase: GamePhase,
    /// Coins caught this run; only ever increments until restart
    pub score: u32,
    /// Descent tick interval for newly spawned drops. Starts at base,
    /// drops once to the fast value, never reverts within a session.
    pub descent_interval_ms: f64,
    pub goblin: Goblin,
    /// Currently falling drops, in spawn order
    pub drops: Vec<DropEntity>,
    next_drop_id: u32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            descent_interval_ms: DESCENT_BASE_MS,
            goblin: Goblin::default(),
            drops: Vec::new(),
            next_drop_id: 1,
        }
    }

    /// Allocate a drop id
    pub fn next_drop_id(&mut self) -> DropId {
        let id = DropId(self.next_drop_id);
        self.next_drop_id += 1;
        id
    }

    pub fn drop_by_id(&self, id: DropId) -> Option<&DropEntity> {
        self.drops.iter().find(|d| d.id == id)
    }
}
