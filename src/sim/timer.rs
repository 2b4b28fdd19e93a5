//! Session-owned cooperative timer registry
//!
//! Three families of repeating timers drive a session: the slide repeater
//! (at most one), the spawn cadence (exactly one while playing), and one
//! descent timer per falling drop. All of them live here so teardown can
//! cancel every outstanding timer in one call.
//!
//! The registry is only ever driven from `Game::advance` on a single
//! thread. Cancellation removes the entry outright, so a cancelled timer
//! can never be returned by `pop_due` - there is no window where a stale
//! callback still fires.

use serde::{Deserialize, Serialize};

use super::state::DropId;
use super::input::Direction;

/// Milliseconds on the caller's clock (`performance.now()` on wasm)
pub type Millis = f64;

/// Opaque handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerHandle(u32);

/// What a timer firing means to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerTask {
    /// Continuous-movement repeater nudging the goblin
    Slide(Direction),
    /// Spawn-cadence tick
    Cadence,
    /// Descent tick for one falling drop
    Descent(DropId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Timer {
    handle: TimerHandle,
    task: TimerTask,
    period_ms: Millis,
    due_ms: Millis,
}

/// Registry of live repeating timers, owned by one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimerRegistry {
    timers: Vec<Timer>,
    next_handle: u32,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a repeating timer. The first fire happens once `now`
    /// reaches `first_due_ms`; each fire pushes the deadline forward by
    /// `period_ms`.
    pub fn schedule(&mut self, task: TimerTask, period_ms: Millis, first_due_ms: Millis) -> TimerHandle {
        debug_assert!(period_ms > 0.0, "zero-period timer would never drain");
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.push(Timer {
            handle,
            task,
            period_ms,
            due_ms: first_due_ms,
        });
        handle
    }

    /// Cancel a timer. Safe no-op for handles already cancelled or never
    /// scheduled, so resolution paths and teardown can race harmlessly.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    /// Pop the due timer with the earliest deadline (ties broken by
    /// creation order) and advance its deadline by one period. Returns
    /// `None` when nothing is due at `now`.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerHandle, TimerTask)> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .partial_cmp(&b.due_ms)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.handle.cmp(&b.handle))
            })
            .map(|(i, _)| i)?;

        let timer = &mut self.timers[idx];
        timer.due_ms += timer.period_ms;
        Some((timer.handle, timer.task))
    }

    /// True if the handle is still scheduled
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    /// Number of live timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Tasks of all live timers, in creation order
    pub fn tasks(&self) -> impl Iterator<Item = TimerTask> + '_ {
        self.timers.iter().map(|t| t.task)
    }

    /// Cancel every outstanding timer atomically
    pub fn teardown(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("tearing down {} live timers", self.timers.len());
        }
        self.timers.clear();
    }
}
