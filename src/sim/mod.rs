//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Variable elapsed time in, no wall clock reads
//! - Seeded RNG only
//! - Stable iteration order (collection order, eviction by filter)
//! - No rendering, audio or platform dependencies

pub mod answer;
pub mod difficulty;
pub mod events;
pub mod problem;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod target;
pub mod tick;
pub mod zombie;

pub use answer::{Outcome, submit};
pub use difficulty::{Difficulty, SpawnTrend};
pub use events::SimEvent;
pub use problem::{Operator, Problem, Step};
pub use snapshot::{PlayerView, Snapshot, ZombieView};
pub use spawner::{eligible_rows, kind_for_spawn, try_spawn};
pub use state::{BloodSplatter, GamePhase, GameState, Player};
pub use target::{leftmost, leftmost_index};
pub use tick::{TickInput, TickReport, move_down, move_up, tick};
pub use zombie::{Transition, Zombie, ZombieKind, ZombieState, evict_removed};
