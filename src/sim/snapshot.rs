//! Read-only views for the renderer and HUD

use serde::Serialize;

use super::state::{BloodSplatter, GameState};
use super::target;
use super::zombie::{ZombieKind, ZombieState};
use crate::row_center_y;

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub shooting: bool,
    pub rotation: f32,
    /// Drawn faded while false
    pub can_shoot: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZombieView {
    pub id: u32,
    pub kind: ZombieKind,
    pub row: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub state: ZombieState,
    pub angle: f32,
    /// e.g. `"3 + 4 = ?"`
    pub prompt: String,
    /// Front zombie in the player's lane
    pub targeted: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub zombies: Vec<ZombieView>,
    pub blood: Vec<BloodSplatter>,
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let config = &state.config;
        // No target highlight once the run is over
        let target_id = if state.is_over() {
            None
        } else {
            target::leftmost(&state.zombies, state.player.row).map(|z| z.id)
        };

        let zombies = state
            .zombies
            .iter()
            .map(|z| ZombieView {
                id: z.id,
                kind: z.kind,
                row: z.row,
                x: z.x,
                y: row_center_y(config, z.row),
                size: z.size(),
                state: z.state,
                angle: z.angle,
                prompt: z.problem.prompt(),
                targeted: Some(z.id) == target_id,
            })
            .collect();

        Self {
            player: PlayerView {
                row: state.player.row,
                x: state.player.x,
                y: row_center_y(config, state.player.row),
                shooting: state.player.is_shooting,
                rotation: state.player.rotation,
                can_shoot: state.can_shoot,
            },
            zombies,
            blood: state.blood.clone(),
            score: state.score,
            best_score: state.best_score,
            game_over: state.is_over(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_capture_marks_target() {
        let mut state = GameState::new(GameConfig::default(), 99).unwrap();
        state.player.row = state.zombies[0].row;
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.zombies.len(), 1);
        assert!(snap.zombies[0].targeted);
        assert!(snap.zombies[0].prompt.ends_with(" = ?"));
        assert!(!snap.game_over);

        state.end_game();
        let snap = Snapshot::capture(&state);
        assert!(!snap.zombies[0].targeted);
        assert!(snap.game_over);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(GameConfig::default(), 5).unwrap();
        let json = Snapshot::capture(&state).to_json().unwrap();
        assert!(json.contains("\"prompt\""));
        assert!(json.contains("\"game_over\":false"));
    }
}
