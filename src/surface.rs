//! Drawing-surface boundary
//!
//! The game only needs three primitives: draw a sprite, clear a rectangle,
//! clear everything. On wasm the implementation is the 2D canvas context
//! (`platform::CanvasSurface`); tests and the native demo use
//! `RecordingSurface`.

use glam::Vec2;

use crate::consts::*;

/// The fixed sprite set. Assets are pre-sized to the bounds reported by
/// `size()` so footprint clears and collision math line up with what was
/// drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Goblin,
    Coin,
    Skull,
    GameOver,
}

impl Sprite {
    /// Pixel footprint of the sprite
    pub fn size(self) -> Vec2 {
        match self {
            Sprite::Goblin => Vec2::new(GOBLIN_W, GOBLIN_H),
            Sprite::Coin | Sprite::Skull => Vec2::new(DROP_W, DROP_H),
            Sprite::GameOver => Vec2::new(GAME_OVER_W, GAME_OVER_H),
        }
    }

    pub fn width(self) -> f32 {
        self.size().x
    }

    pub fn height(self) -> f32 {
        self.size().y
    }
}

/// Minimal drawing primitives the game calls into
pub trait Surface {
    /// Draw a sprite with its top-left corner at `pos`
    fn draw_image(&mut self, sprite: Sprite, pos: Vec2);
    /// Clear a rectangle (top-left `pos`, extent `size`)
    fn clear_rect(&mut self, pos: Vec2, size: Vec2);
    /// Clear the whole surface
    fn clear_all(&mut self);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Draw(Sprite, Vec2),
    ClearRect(Vec2, Vec2),
    ClearAll,
}

/// Op-log surface for tests and the headless demo
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded ops (between test phases)
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Positions at which `sprite` was drawn, in order
    pub fn draws_of(&self, sprite: Sprite) -> Vec<Vec2> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Draw(s, pos) if *s == sprite => Some(*pos),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, sprite: Sprite, pos: Vec2) {
        self.ops.push(DrawOp::Draw(sprite, pos));
    }

    fn clear_rect(&mut self, pos: Vec2, size: Vec2) {
        self.ops.push(DrawOp::ClearRect(pos, size));
    }

    fn clear_all(&mut self) {
        self.ops.push(DrawOp::ClearAll);
    }
}
