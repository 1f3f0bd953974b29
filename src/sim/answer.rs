//! Answer submission: the only place a shot is judged

use serde::{Deserialize, Serialize};

use super::events::SimEvent;
use super::state::GameState;
use super::target;
use super::zombie::{self, ZombieKind};

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game over, unparseable input, or no target in the lane
    Ignored,
    /// Still in the miss cooldown
    CannotShoot,
    /// Wrong answer; cooldown started
    Miss,
    Hit { id: u32, kind: ZombieKind },
}

/// Judge `raw` against the front zombie in the player's lane.
///
/// `raw` is expected to be digits only; anything that does not parse as a
/// non-negative integer is ignored without penalty.
pub fn submit(state: &mut GameState, raw: &str) -> Outcome {
    if state.is_over() {
        return Outcome::Ignored;
    }

    if !state.can_shoot {
        state.events.push(SimEvent::CannotShoot);
        return Outcome::CannotShoot;
    }

    let Ok(answer) = raw.trim().parse::<u32>() else {
        return Outcome::Ignored;
    };

    state.player.start_shooting();
    state.events.push(SimEvent::Shoot);

    let Some(index) = target::leftmost_index(&state.zombies, state.player.row) else {
        return Outcome::Ignored;
    };

    let hit = &mut state.zombies[index];
    if answer != hit.answer() {
        state.can_shoot = false;
        state.cooldown_timer_ms = 0.0;
        state.events.push(SimEvent::Miss);
        return Outcome::Miss;
    }

    let id = hit.id;
    let kind = hit.kind;
    let transforming = hit.will_transform();
    let size = hit.size();
    zombie::begin_dying(hit);

    if !transforming {
        let center = state.zombie_center(&state.zombies[index]);
        state.add_blood(center, size);
    }

    state.score += 1;
    state.events.push(SimEvent::Hit {
        id,
        kind,
        transforming,
    });
    Outcome::Hit { id, kind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::zombie::ZombieState;

    fn state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 2024).unwrap();
        state.player.row = state.zombies[0].row;
        state.take_events();
        state
    }

    #[test]
    fn test_correct_answer_hits() {
        let mut state = state();
        let answer = state.zombies[0].answer();
        let outcome = submit(&mut state, &answer.to_string());
        assert_eq!(
            outcome,
            Outcome::Hit {
                id: 1,
                kind: ZombieKind::Base
            }
        );
        assert_eq!(state.score, 1);
        assert!(matches!(state.zombies[0].state, ZombieState::Dying { .. }));
        assert_eq!(state.blood.len(), 1);
        assert!(state.player.is_shooting);
        assert_eq!(state.take_events()[0], SimEvent::Shoot);
    }

    #[test]
    fn test_wrong_answer_misses() {
        let mut state = state();
        let wrong = state.zombies[0].answer() + 1;
        assert_eq!(submit(&mut state, &wrong.to_string()), Outcome::Miss);
        assert!(!state.can_shoot);
        assert_eq!(state.cooldown_timer_ms, 0.0);
        assert_eq!(state.score, 0);
        assert!(state.zombies[0].is_alive());
    }

    #[test]
    fn test_cooldown_blocks_without_reset() {
        let mut state = state();
        state.can_shoot = false;
        state.cooldown_timer_ms = 1200.0;
        let answer = state.zombies[0].answer();
        assert_eq!(
            submit(&mut state, &answer.to_string()),
            Outcome::CannotShoot
        );
        assert_eq!(state.cooldown_timer_ms, 1200.0);
        assert_eq!(state.take_events(), vec![SimEvent::CannotShoot]);
    }

    #[test]
    fn test_unparseable_is_ignored() {
        let mut state = state();
        for raw in ["", "  ", "abc", "-3", "99999999999999"] {
            assert_eq!(submit(&mut state, raw), Outcome::Ignored);
        }
        assert!(state.can_shoot);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_empty_lane_is_ignored() {
        let mut state = state();
        state.player.row = (state.zombies[0].row + 1) % state.config.num_rows;
        assert_eq!(submit(&mut state, "3"), Outcome::Ignored);
        assert!(state.can_shoot);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_game_over_ignores() {
        let mut state = state();
        state.end_game();
        let answer = state.zombies[0].answer();
        assert_eq!(submit(&mut state, &answer.to_string()), Outcome::Ignored);
    }

    #[test]
    fn test_heavy_first_hit_leaves_no_blood() {
        let mut state = state();
        state.zombies[0].kind = ZombieKind::Heavy;
        let answer = state.zombies[0].answer();
        submit(&mut state, &answer.to_string());
        assert_eq!(state.score, 1);
        assert!(state.blood.is_empty());
        assert!(state.take_events().contains(&SimEvent::Hit {
            id: 1,
            kind: ZombieKind::Heavy,
            transforming: true
        }));
    }
}
