//! Game logic module
//!
//! Everything that decides what happens lives here; drawing and sound go
//! through the `surface`/`audio` traits. Single-threaded by construction:
//! all mutation happens inside `Game::advance`'s timer drain, so the
//! usual callback-soup races can't exist.

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{GameOverCause, Verdict, drop_verdict};
pub use input::{ActionKey, Direction, InputTracker};
pub use state::{DropEntity, DropId, DropKind, GamePhase, GameState, Goblin};
pub use tick::Game;
pub use timer::{Millis, TimerHandle, TimerRegistry, TimerTask};
