//! Discrete events emitted for the audio and HUD collaborators

use serde::{Deserialize, Serialize};

use super::zombie::ZombieKind;

/// Something the outside world may want to react to.
///
/// Pushed onto `GameState::events` and drained by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    Spawned { id: u32, kind: ZombieKind },
    /// A parsed answer was fired
    Shoot,
    /// Correct answer; `transforming` is set when a heavy zombie will get back up
    Hit {
        id: u32,
        kind: ZombieKind,
        transforming: bool,
    },
    /// A heavy zombie finished its death animation and came back as a base zombie
    Transformed { id: u32 },
    Miss,
    /// Submission while the miss cooldown is running
    CannotShoot,
    GameOver { score: u32 },
    LaneMove { row: usize },
    Restarted,
}
