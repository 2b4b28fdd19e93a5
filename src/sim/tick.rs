//! Session orchestration
//!
//! `Game` ties the pieces together: it owns the session state, the timer
//! registry and the input tracker, and drains due timers from
//! `advance(now, ..)` - the caller just pumps wall-clock time in
//! (requestAnimationFrame on wasm). Everything mutates from that single
//! drain loop, which is the whole concurrency model.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioCue, AudioSink};
use crate::consts::*;
use crate::surface::{Sprite, Surface};

use super::collision::{GameOverCause, Verdict, drop_verdict};
use super::input::{ActionKey, Direction, InputTracker};
use super::state::{DropEntity, DropId, DropKind, GamePhase, GameState};
use super::timer::{Millis, TimerHandle, TimerRegistry, TimerTask};

/// One arcade session: state machine `Idle -> Playing -> GameOver`, with
/// `GameOver -> Playing` only through an explicit [`Game::start`].
pub struct Game {
    state: GameState,
    timers: TimerRegistry,
    input: InputTracker,
    /// Live continuous-movement repeater, if any. Never more than one.
    slide: Option<(Direction, TimerHandle)>,
    rng: Pcg32,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            timers: TimerRegistry::new(),
            input: InputTracker::new(),
            slide: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// First draw after the component mounts: goblin on the idle screen,
    /// intro jingle.
    pub fn mount(&mut self, surface: &mut dyn Surface, audio: &dyn AudioSink) {
        self.state.goblin.draw(surface);
        audio.play(AudioCue::IntroStart);
    }

    /// Begin (or restart) a run. No-op while a run is already live; from
    /// `Idle` or `GameOver` it tears down every timer left from before,
    /// resets score and difficulty, redraws, drops the first coin and
    /// starts the spawn cadence.
    pub fn start(&mut self, now: Millis, surface: &mut dyn Surface, audio: &dyn AudioSink) {
        if self.state.phase == GamePhase::Playing {
            return;
        }

        // Zero leaked timers before anything new spawns
        self.timers.teardown();
        self.slide = None;
        self.state.drops.clear();
        self.state.score = 0;
        self.state.descent_interval_ms = DESCENT_BASE_MS;
        self.state.phase = GamePhase::Playing;
        log::info!("session started (seed {})", self.state.seed);

        audio.play(AudioCue::PlayStart);
        surface.clear_all();
        self.state.goblin.draw(surface);

        self.spawn_drop(DropKind::Coin, None, now);
        self.timers
            .schedule(TimerTask::Cadence, CADENCE_INTERVAL_MS, now + CADENCE_INTERVAL_MS);

        // Movement keys may still be held across the restart
        self.sync_slide(now);
    }

    /// Drain and dispatch every timer due at `now`, in deadline order.
    pub fn advance(&mut self, now: Millis, surface: &mut dyn Surface, audio: &dyn AudioSink) {
        let mut fires = 0;
        while let Some((handle, task)) = self.timers.pop_due(now) {
            match task {
                TimerTask::Slide(direction) => self.state.goblin.shift(direction, surface),
                TimerTask::Cadence => self.cadence_tick(now),
                TimerTask::Descent(id) => self.descent_tick(id, handle, surface, audio),
            }

            fires += 1;
            if fires >= MAX_FIRES_PER_ADVANCE {
                log::warn!("timer catch-up capped at {fires} fires in one advance");
                break;
            }
        }
    }

    // === Input entry points ===

    pub fn key_pressed(&mut self, key: ActionKey, now: Millis) {
        self.input.press(key);
        self.sync_slide(now);
    }

    pub fn key_released(&mut self, key: ActionKey, now: Millis) {
        self.input.release(key);
        self.sync_slide(now);
    }

    /// On-screen left arrow pressed
    pub fn move_left_held(&mut self, now: Millis) {
        self.key_pressed(ActionKey::UiLeft, now);
    }

    pub fn move_left_released(&mut self, now: Millis) {
        self.key_released(ActionKey::UiLeft, now);
    }

    /// On-screen right arrow pressed
    pub fn move_right_held(&mut self, now: Millis) {
        self.key_pressed(ActionKey::UiRight, now);
    }

    pub fn move_right_released(&mut self, now: Millis) {
        self.key_released(ActionKey::UiRight, now);
    }

    // === Observables for the UI shell ===

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_playing(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase == GamePhase::GameOver
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Component unmount: cancel all timers and forget held keys
    pub fn teardown(&mut self) {
        self.timers.teardown();
        self.slide = None;
        self.input.clear();
    }

    // === Internals ===

    /// Reconcile the slide repeater with the tracker's net direction.
    /// A direction change always cancels the old repeater before the new
    /// one is scheduled; matching direction leaves the repeater alone.
    /// After game over no new repeater starts until restart.
    fn sync_slide(&mut self, now: Millis) {
        let desired = if self.state.phase == GamePhase::GameOver {
            None
        } else {
            self.input.net_direction()
        };

        if let Some((direction, handle)) = self.slide {
            if desired == Some(direction) {
                return;
            }
            self.timers.cancel(handle);
            self.slide = None;
        }

        if let Some(direction) = desired {
            // First nudge fires immediately, then every interval
            let handle = self
                .timers
                .schedule(TimerTask::Slide(direction), SLIDE_INTERVAL_MS, now);
            self.slide = Some((direction, handle));
        }
    }

    /// Spawn-cadence tick: ramp the difficulty once past the score
    /// threshold, then drop either a single coin or (every third point) a
    /// coin/skull pair at non-overlapping positions.
    fn cadence_tick(&mut self, now: Millis) {
        let score = self.state.score;

        if score > RAMP_SCORE && self.state.descent_interval_ms == DESCENT_BASE_MS {
            self.state.descent_interval_ms = DESCENT_FAST_MS;
            log::info!("descent interval ramped to {DESCENT_FAST_MS}ms at score {score}");
        }

        if score > 0 && score.is_multiple_of(PAIR_EVERY) {
            // Which kind takes the left slot is a pure coin flip
            let (first, second) = if self.rng.random_bool(0.5) {
                (DropKind::Skull, DropKind::Coin)
            } else {
                (DropKind::Coin, DropKind::Skull)
            };

            // The first drop reserves enough right-hand space that the
            // second range is never empty; see `pair_ranges_always_fit`
            let first_w = first.sprite().width();
            let second_w = second.sprite().width();
            let x1 = self
                .rng
                .random_range(EDGE_MARGIN..=SURFACE_W - first_w - PAIR_RESERVE);
            let x2 = self
                .rng
                .random_range(x1 + first_w + PAIR_GAP..=SURFACE_W - second_w - EDGE_MARGIN);

            self.spawn_drop(first, Some(x1), now);
            self.spawn_drop(second, Some(x2), now);
        } else {
            self.spawn_drop(DropKind::Coin, None, now);
        }
    }

    /// Create a drop at `y = 0` and start its descent timer. The timer
    /// period is the session's descent interval as of right now; drops
    /// already in flight keep the rate they spawned with.
    fn spawn_drop(&mut self, kind: DropKind, x: Option<f32>, now: Millis) {
        let width = kind.sprite().width();
        let x = x.unwrap_or_else(|| {
            self.rng
                .random_range(EDGE_MARGIN..=SURFACE_W - width - EDGE_MARGIN)
        });

        let id = self.state.next_drop_id();
        let period = self.state.descent_interval_ms;
        let timer = self
            .timers
            .schedule(TimerTask::Descent(id), period, now + period);
        self.state.drops.push(DropEntity {
            id,
            kind,
            pos: Vec2::new(x, 0.0),
            timer,
        });
        log::debug!("spawned {kind:?} at x={x:.0}");
    }

    /// One descent tick: clear the old footprint, step down, redraw, then
    /// judge the just-drawn geometry against the goblin.
    fn descent_tick(
        &mut self,
        id: DropId,
        handle: TimerHandle,
        surface: &mut dyn Surface,
        audio: &dyn AudioSink,
    ) {
        // Resolution cancels the timer in the same dispatch, so a descent
        // fire can't outlive its drop
        let Some(idx) = self.state.drops.iter().position(|d| d.id == id) else {
            return;
        };
        let kind = self.state.drops[idx].kind;
        let size = self.state.drops[idx].size();
        let old_pos = self.state.drops[idx].pos;

        surface.clear_rect(old_pos, size);
        self.state.drops[idx].pos.y += DROP_STEP;
        let pos = self.state.drops[idx].pos;
        surface.draw_image(kind.sprite(), pos);

        match drop_verdict(kind, pos, size, self.state.goblin.x) {
            Verdict::Falling => {}
            Verdict::Caught => {
                self.state.score += 1;
                log::debug!("coin caught, score {}", self.state.score);
                audio.play(AudioCue::Catch);
                self.timers.cancel(handle);
                surface.clear_rect(pos, size);
                self.state.drops.remove(idx);
                // Redraw the goblin over the cleared patch
                self.state.goblin.draw(surface);
            }
            Verdict::Landed => {
                self.timers.cancel(handle);
                surface.clear_rect(pos, size);
                self.state.drops.remove(idx);
            }
            Verdict::GameOver(cause) => self.game_over(cause, surface, audio),
        }
    }

    /// Terminal transition: cancel every timer, clear the board, draw the
    /// game-over overlay. The session stays here until `start` is called
    /// again.
    fn game_over(&mut self, cause: GameOverCause, surface: &mut dyn Surface, audio: &dyn AudioSink) {
        log::info!("game over ({cause:?}) at score {}", self.state.score);
        self.state.phase = GamePhase::GameOver;

        audio.play(AudioCue::GameOver);

        self.timers.teardown();
        self.slide = None;
        self.state.drops.clear();

        surface.clear_all();
        surface.draw_image(Sprite::GameOver, Vec2::new(GAME_OVER_X, GAME_OVER_Y));
        self.state.goblin.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::surface::{DrawOp, RecordingSurface};
    use std::cell::RefCell;

    /// Audio sink recording cues for assertions
    #[derive(Default)]
    struct CueLog(RefCell<Vec<AudioCue>>);

    impl AudioSink for CueLog {
        fn play(&self, cue: AudioCue) {
            self.0.borrow_mut().push(cue);
        }
    }

    /// Game plus surface plus a manual clock
    struct Harness {
        game: Game,
        surface: RecordingSurface,
        now: Millis,
    }

    impl Harness {
        fn new(seed: u64) -> Self {
            Self {
                game: Game::new(seed),
                surface: RecordingSurface::new(),
                now: 0.0,
            }
        }

        fn start(&mut self) {
            self.game.start(self.now, &mut self.surface, &NullAudio);
        }

        fn advance_to(&mut self, t: Millis) {
            assert!(t >= self.now);
            self.now = t;
            self.game.advance(t, &mut self.surface, &NullAudio);
        }

        fn slide_timers(&self) -> Vec<TimerTask> {
            self.game
                .timers
                .tasks()
                .filter(|t| matches!(t, TimerTask::Slide(_)))
                .collect()
        }
    }

    /// Make a bare playing session with no cadence timer, so verdict
    /// scenarios aren't disturbed by fresh spawns.
    fn playing_with_drop(kind: DropKind, x: f32, goblin_x: f32) -> Harness {
        let mut h = Harness::new(7);
        h.game.state.phase = GamePhase::Playing;
        h.game.state.goblin.x = goblin_x;
        h.game.spawn_drop(kind, Some(x), 0.0);
        h.surface.reset();
        h
    }

    /// Descent tick index at which a drop's midpoint reaches the ground
    fn ground_tick() -> u32 {
        ((SURFACE_H - DROP_H / 2.0) / DROP_STEP).ceil() as u32
    }

    /// Descent tick index at which a drop enters the catch hitbox
    fn catch_tick() -> u32 {
        ((SURFACE_H - GOBLIN_H - CATCH_MARGIN) / DROP_STEP).ceil() as u32
    }

    #[test]
    fn start_spawns_one_coin_and_cadence() {
        let mut h = Harness::new(1);
        h.start();

        assert!(h.game.is_playing());
        assert_eq!(h.game.score(), 0);
        assert_eq!(h.game.state.drops.len(), 1);
        assert_eq!(h.game.state.drops[0].kind, DropKind::Coin);

        let tasks: Vec<_> = h.game.timers.tasks().collect();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().any(|t| matches!(t, TimerTask::Descent(_))));
        assert!(tasks.iter().any(|t| matches!(t, TimerTask::Cadence)));
    }

    #[test]
    fn start_is_idempotent_while_playing() {
        let mut h = Harness::new(1);
        h.start();
        h.game.state.score = 2;
        let drops_before = h.game.state.drops.clone();

        h.start();
        assert_eq!(h.game.score(), 2);
        assert_eq!(h.game.state.drops.len(), drops_before.len());
    }

    #[test]
    fn cadence_at_zero_score_spawns_exactly_one_coin() {
        let mut h = Harness::new(2);
        h.start();
        h.advance_to(CADENCE_INTERVAL_MS);

        assert_eq!(h.game.state.drops.len(), 2);
        assert!(h.game.state.drops.iter().all(|d| d.kind == DropKind::Coin));
    }

    #[test]
    fn cadence_at_score_three_spawns_disjoint_pair() {
        let mut h = Harness::new(3);
        h.start();
        h.game.state.score = 3;
        let before: Vec<DropId> = h.game.state.drops.iter().map(|d| d.id).collect();

        h.advance_to(CADENCE_INTERVAL_MS);

        let new: Vec<&DropEntity> = h
            .game
            .state
            .drops
            .iter()
            .filter(|d| !before.contains(&d.id))
            .collect();
        assert_eq!(new.len(), 2);
        assert_eq!(new.iter().filter(|d| d.kind == DropKind::Coin).count(), 1);
        assert_eq!(new.iter().filter(|d| d.kind == DropKind::Skull).count(), 1);

        // Spawned left-to-right with the minimum gap, both inside margins
        let (left, right) = (new[0], new[1]);
        assert!(left.pos.x + DROP_W + PAIR_GAP <= right.pos.x);
        for d in [left, right] {
            assert!(d.pos.x >= EDGE_MARGIN);
            assert!(d.pos.x + DROP_W <= SURFACE_W - EDGE_MARGIN);
            assert_eq!(d.pos.y, 0.0);
        }
    }

    #[test]
    fn pair_ranges_always_fit() {
        // Design-time invariant: even the right-most first drop leaves a
        // non-empty range for the second
        let x1_max = SURFACE_W - DROP_W - PAIR_RESERVE;
        let x2_low = x1_max + DROP_W + PAIR_GAP;
        let x2_high = SURFACE_W - DROP_W - EDGE_MARGIN;
        assert!(x2_low <= x2_high);
    }

    #[test]
    fn descent_ramps_exactly_once() {
        let mut h = Harness::new(4);
        h.start();
        assert_eq!(h.game.state.descent_interval_ms, DESCENT_BASE_MS);

        h.game.state.score = RAMP_SCORE + 1;
        h.advance_to(CADENCE_INTERVAL_MS);
        assert_eq!(h.game.state.descent_interval_ms, DESCENT_FAST_MS);

        // Further cadence ticks never touch it again
        h.game.state.score = RAMP_SCORE + 10;
        h.advance_to(CADENCE_INTERVAL_MS * 2.0);
        assert_eq!(h.game.state.descent_interval_ms, DESCENT_FAST_MS);
    }

    #[test]
    fn descent_tick_clears_then_draws_then_judges() {
        let mut h = playing_with_drop(DropKind::Coin, 40.0, 200.0);
        h.advance_to(DESCENT_BASE_MS);

        assert_eq!(
            h.surface.ops,
            vec![
                DrawOp::ClearRect(Vec2::new(40.0, 0.0), Vec2::new(DROP_W, DROP_H)),
                DrawOp::Draw(Sprite::Coin, Vec2::new(40.0, DROP_STEP)),
            ]
        );
        assert_eq!(h.game.state.drops[0].pos.y, DROP_STEP);
    }

    #[test]
    fn coin_on_ground_ends_the_run_with_score_frozen() {
        let mut h = playing_with_drop(DropKind::Coin, 250.0, 0.0);
        h.game.state.score = 3;

        let t_ground = f64::from(ground_tick()) * DESCENT_BASE_MS;
        h.advance_to(t_ground - DESCENT_BASE_MS);
        assert!(h.game.is_playing());

        h.advance_to(t_ground);
        assert!(h.game.is_game_over());
        assert_eq!(h.game.score(), 3);
        assert!(h.game.timers.is_empty());
        assert!(h.game.state.drops.is_empty());

        // Board wiped, overlay and goblin drawn on top
        let tail: Vec<&DrawOp> = h.surface.ops.iter().rev().take(3).collect();
        assert_eq!(*tail[0], DrawOp::Draw(Sprite::Goblin, h.game.state.goblin.pos()));
        assert_eq!(
            *tail[1],
            DrawOp::Draw(Sprite::GameOver, Vec2::new(GAME_OVER_X, GAME_OVER_Y))
        );
        assert_eq!(*tail[2], DrawOp::ClearAll);
    }

    #[test]
    fn skull_in_hitbox_ends_the_run_above_ground() {
        let goblin_x = 150.0;
        let mut h = playing_with_drop(DropKind::Skull, goblin_x + 5.0, goblin_x);

        let t_catch = f64::from(catch_tick()) * DESCENT_BASE_MS;
        h.advance_to(t_catch - DESCENT_BASE_MS);
        assert!(h.game.is_playing());

        h.advance_to(t_catch);
        assert!(h.game.is_game_over());
        assert!(h.game.timers.is_empty());
    }

    #[test]
    fn caught_coin_scores_once_and_retires() {
        let goblin_x = 150.0;
        let mut h = playing_with_drop(DropKind::Coin, goblin_x + 5.0, goblin_x);

        let t_catch = f64::from(catch_tick()) * DESCENT_BASE_MS;
        h.advance_to(t_catch);

        assert!(h.game.is_playing());
        assert_eq!(h.game.score(), 1);
        assert!(h.game.state.drops.is_empty());
        assert!(h.game.timers.is_empty());

        // Goblin redrawn over the cleared catch
        assert_eq!(
            h.surface.ops.last(),
            Some(&DrawOp::Draw(Sprite::Goblin, h.game.state.goblin.pos()))
        );

        // Resolution is final: no further descent, score untouched
        let coin_draws = h.surface.draws_of(Sprite::Coin).len();
        h.advance_to(t_catch + DESCENT_BASE_MS * 20.0);
        assert_eq!(h.surface.draws_of(Sprite::Coin).len(), coin_draws);
        assert_eq!(h.game.score(), 1);
    }

    #[test]
    fn landed_skull_retires_without_scoring() {
        let mut h = playing_with_drop(DropKind::Skull, 250.0, 0.0);

        h.advance_to(f64::from(ground_tick()) * DESCENT_BASE_MS);
        assert!(h.game.is_playing());
        assert_eq!(h.game.score(), 0);
        assert!(h.game.state.drops.is_empty());
        assert!(h.game.timers.is_empty());
    }

    #[test]
    fn slide_repeater_nudges_on_schedule() {
        let mut h = Harness::new(5);
        let start_x = h.game.state.goblin.x;

        h.game.key_pressed(ActionKey::KeyA, 0.0);
        // First nudge fires immediately
        h.advance_to(0.0);
        assert_eq!(h.game.state.goblin.x, start_x - ACTOR_STEP);

        h.advance_to(SLIDE_INTERVAL_MS - 1.0);
        assert_eq!(h.game.state.goblin.x, start_x - ACTOR_STEP);

        // Catch-up drains the missed ticks one by one
        h.advance_to(SLIDE_INTERVAL_MS * 3.0);
        assert_eq!(h.game.state.goblin.x, start_x - ACTOR_STEP * 4.0);
    }

    #[test]
    fn reversal_stops_before_starting_opposite_repeater() {
        let mut h = Harness::new(5);

        h.game.key_pressed(ActionKey::KeyA, 0.0);
        assert_eq!(h.slide_timers(), vec![TimerTask::Slide(Direction::Left)]);

        // Balance stops movement outright
        h.game.key_pressed(ActionKey::KeyD, 10.0);
        assert!(h.slide_timers().is_empty());

        // Tip the balance right: exactly one repeater, new direction
        h.game.key_released(ActionKey::KeyA, 20.0);
        assert_eq!(h.slide_timers(), vec![TimerTask::Slide(Direction::Right)]);
    }

    #[test]
    fn same_direction_keys_share_one_repeater() {
        let mut h = Harness::new(5);

        h.game.key_pressed(ActionKey::KeyA, 0.0);
        let first = h.game.slide;
        h.game.key_pressed(ActionKey::ArrowLeft, 10.0);

        // Second left key must not restart the repeater
        assert_eq!(h.game.slide, first);
        assert_eq!(h.slide_timers().len(), 1);
    }

    #[test]
    fn movement_is_dead_after_game_over() {
        let mut h = playing_with_drop(DropKind::Coin, 250.0, 0.0);
        h.advance_to(f64::from(ground_tick()) * DESCENT_BASE_MS);
        assert!(h.game.is_game_over());

        let x = h.game.state.goblin.x;
        h.game.move_left_held(h.now);
        assert!(h.game.timers.is_empty());
        h.advance_to(h.now + SLIDE_INTERVAL_MS * 4.0);
        assert_eq!(h.game.state.goblin.x, x);
    }

    #[test]
    fn restart_resets_session_with_fresh_timers() {
        let mut h = playing_with_drop(DropKind::Coin, 250.0, 0.0);
        h.game.state.score = 6;
        h.advance_to(f64::from(ground_tick()) * DESCENT_BASE_MS);
        assert!(h.game.is_game_over());
        assert!(h.game.timers.is_empty());

        h.start();
        assert!(h.game.is_playing());
        assert_eq!(h.game.score(), 0);
        assert_eq!(h.game.state.descent_interval_ms, DESCENT_BASE_MS);
        assert_eq!(h.game.state.drops.len(), 1);
        assert_eq!(h.game.timers.len(), 2);
    }

    #[test]
    fn held_key_resumes_movement_after_restart() {
        let mut h = playing_with_drop(DropKind::Coin, 250.0, 0.0);
        h.advance_to(f64::from(ground_tick()) * DESCENT_BASE_MS);

        // Still holding right through the game-over screen
        h.game.move_right_held(h.now);
        assert!(h.slide_timers().is_empty());

        h.start();
        assert_eq!(h.slide_timers(), vec![TimerTask::Slide(Direction::Right)]);
    }

    #[test]
    fn same_seed_spawns_identical_positions() {
        let mut a = Harness::new(42);
        let mut b = Harness::new(42);
        for h in [&mut a, &mut b] {
            h.start();
            h.game.state.goblin.x = 0.0; // keep coins uncaught
            h.advance_to(CADENCE_INTERVAL_MS * 2.0);
        }

        let xs = |h: &Harness| -> Vec<f32> { h.game.state.drops.iter().map(|d| d.pos.x).collect() };
        assert_eq!(xs(&a), xs(&b));
        assert!(!xs(&a).is_empty());
    }

    #[test]
    fn audio_cues_fire_on_lifecycle_edges() {
        let cues = CueLog::default();
        let mut surface = RecordingSurface::new();
        let mut game = Game::new(9);

        game.mount(&mut surface, &cues);
        game.start(0.0, &mut surface, &cues);
        assert_eq!(*cues.0.borrow(), vec![AudioCue::IntroStart, AudioCue::PlayStart]);

        // Hand-build a catch, then a loss
        game.state.goblin.x = 150.0;
        game.state.drops.clear();
        game.timers.teardown();
        game.spawn_drop(DropKind::Coin, Some(155.0), 0.0);
        let t_catch = f64::from(catch_tick()) * DESCENT_BASE_MS;
        game.advance(t_catch, &mut surface, &cues);
        assert_eq!(cues.0.borrow().last(), Some(&AudioCue::Catch));

        game.state.goblin.x = 0.0;
        game.spawn_drop(DropKind::Coin, Some(250.0), t_catch);
        game.advance(t_catch + f64::from(ground_tick()) * DESCENT_BASE_MS, &mut surface, &cues);
        assert_eq!(cues.0.borrow().last(), Some(&AudioCue::GameOver));
    }

    #[test]
    fn teardown_cancels_everything() {
        let mut h = Harness::new(11);
        h.start();
        h.game.key_pressed(ActionKey::ArrowRight, 0.0);
        assert!(h.game.timers.len() >= 3);

        h.game.teardown();
        assert!(h.game.timers.is_empty());
        assert_eq!(h.game.input.net_direction(), None);
    }
}
