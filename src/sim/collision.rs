//! Collision verdicts for falling drops
//!
//! Pure geometry: given a drop's just-drawn position and the goblin's x,
//! decide whether this descent tick resolves the drop. Two tests feed the
//! verdict - has the drop's midpoint reached the ground plane, and does
//! its center column sit inside the goblin's span at catch height.

use glam::Vec2;

use crate::consts::*;

use super::state::DropKind;

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// A coin was allowed to hit the ground
    CoinLost,
    /// A skull was caught
    SkullCaught,
}

/// Outcome of one descent tick for one drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No resolution; keep falling
    Falling,
    /// Coin caught: score it, retire the drop
    Caught,
    /// Skull reached the ground harmlessly: retire the drop
    Landed,
    /// Run over
    GameOver(GameOverCause),
}

/// Whether the drop's vertical midpoint has reached the ground plane
fn reached_ground(pos: Vec2, size: Vec2) -> bool {
    pos.y + size.y / 2.0 >= SURFACE_H
}

/// Whether the drop overlaps the goblin's hitbox. The box extends
/// `CATCH_MARGIN` above the goblin's footprint row so catches register a
/// touch early; the horizontal test uses the drop's center column against
/// the goblin's half-open span.
fn overlaps_goblin(pos: Vec2, size: Vec2, goblin_x: f32) -> bool {
    let center_x = pos.x + size.x / 2.0;
    center_x >= goblin_x
        && center_x < goblin_x + GOBLIN_W
        && pos.y + CATCH_MARGIN >= SURFACE_H - GOBLIN_H
}

/// Resolve one descent tick. Evaluated against the just-drawn position -
/// callers must move and redraw the drop first.
///
/// Priority matters: a coin that is both on the ground and over the
/// goblin was still lost, and a skull overlapping the goblin ends the run
/// even if it is also touching down.
pub fn drop_verdict(kind: DropKind, pos: Vec2, size: Vec2, goblin_x: f32) -> Verdict {
    let grounded = reached_ground(pos, size);
    let caught = overlaps_goblin(pos, size, goblin_x);

    if kind.catchable() && grounded {
        Verdict::GameOver(GameOverCause::CoinLost)
    } else if !kind.catchable() && caught {
        Verdict::GameOver(GameOverCause::SkullCaught)
    } else if kind.catchable() && caught {
        Verdict::Caught
    } else if !kind.catchable() && grounded {
        Verdict::Landed
    } else {
        Verdict::Falling
    }
}
