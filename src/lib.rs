//! Greedy Goblin - a catch-the-coins arcade game
//!
//! Collect coins and avoid skulls. The run ends when a coin touches the
//! ground or the goblin catches a skull.
//!
//! Core modules:
//! - `sim`: Game logic (input netting, timers, collisions, session state)
//! - `surface`: Drawing-surface boundary (2D canvas on wasm)
//! - `audio`: Fire-and-forget sound cues
//! - `platform`: Browser adapter for the drawing surface
//! - `settings`: Audio preferences
//! - `highscores`: Persisted score table

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod surface;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (pixels)
    pub const SURFACE_W: f32 = 300.0;
    pub const SURFACE_H: f32 = 300.0;

    /// Sprite footprints - assets are sized to these exact bounds so the
    /// collision math can use them directly
    pub const GOBLIN_W: f32 = 66.0;
    pub const GOBLIN_H: f32 = 54.0;
    pub const DROP_W: f32 = 15.0;
    pub const DROP_H: f32 = 15.0;
    pub const GAME_OVER_W: f32 = 240.0;
    pub const GAME_OVER_H: f32 = 75.0;

    /// Goblin movement step per slide tick (pixels)
    pub const ACTOR_STEP: f32 = 10.0;
    /// Drop descent step per tick - small for a smooth fall
    pub const DROP_STEP: f32 = 5.0;

    /// Continuous-movement repeater interval
    pub const SLIDE_INTERVAL_MS: f64 = 50.0;
    /// Spawn cadence interval
    pub const CADENCE_INTERVAL_MS: f64 = 2000.0;
    /// Descent tick interval at session start
    pub const DESCENT_BASE_MS: f64 = 100.0;
    /// Descent tick interval after the difficulty ramp
    pub const DESCENT_FAST_MS: f64 = 75.0;
    /// Score above which the descent interval ramps (once per session)
    pub const RAMP_SCORE: u32 = 4;
    /// Every positive multiple of this score spawns a coin+skull pair
    pub const PAIR_EVERY: u32 = 3;

    /// Horizontal margin drops keep from the surface edges
    pub const EDGE_MARGIN: f32 = 5.0;
    /// Minimum horizontal gap between paired drops
    pub const PAIR_GAP: f32 = 20.0;
    /// Right-side space reserved by the first of a pair so the second
    /// always fits; see the pair-fit test in `sim::tick`
    pub const PAIR_RESERVE: f32 = 40.0;

    /// Extra reach above the goblin's footprint row - a slightly larger
    /// hitbox so catches feel fair
    pub const CATCH_MARGIN: f32 = 8.0;

    /// Game-over overlay position
    pub const GAME_OVER_X: f32 = 30.0;
    pub const GAME_OVER_Y: f32 = SURFACE_H / 4.0;

    /// Cap on timer fires drained per `advance` call, so a stalled caller
    /// (hidden tab) can't queue an unbounded catch-up burst
    pub const MAX_FIRES_PER_ADVANCE: u32 = 128;
}

/// Clamp an x coordinate into the goblin's legal range
#[inline]
pub fn clamp_actor_x(x: f32) -> f32 {
    x.clamp(0.0, consts::SURFACE_W - consts::GOBLIN_W)
}
