//! Variable timestep simulation tick
//!
//! Core game loop that advances the session by one frame.

use super::answer::{self, Outcome};
use super::events::SimEvent;
use super::state::GameState;
use super::zombie::{self, Transition};

/// Input gathered since the previous frame, applied at the start of the tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    /// Answer typed by the player (already stripped to digits)
    pub submit: Option<String>,
    pub restart: bool,
}

/// What happened during a tick, for hosts that don't drain events
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub outcome: Option<Outcome>,
    pub spawned: Option<u32>,
    pub difficulty_step: bool,
    pub game_over: bool,
}

/// Move the player up one lane (no-op while over)
pub fn move_up(state: &mut GameState) {
    if !state.is_over() && state.player.move_up() {
        state.events.push(SimEvent::LaneMove {
            row: state.player.row,
        });
    }
}

/// Move the player down one lane (no-op while over)
pub fn move_down(state: &mut GameState) {
    if !state.is_over() && state.player.move_down(state.config.num_rows) {
        state.events.push(SimEvent::LaneMove {
            row: state.player.row,
        });
    }
}

/// Apply queued input, then advance the game by `elapsed_ms`
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f32) -> TickReport {
    let mut report = TickReport::default();

    if input.restart {
        state.restart();
    }
    if input.move_up {
        move_up(state);
    }
    if input.move_down {
        move_down(state);
    }
    if let Some(raw) = &input.submit {
        report.outcome = Some(answer::submit(state, raw));
    }

    let elapsed_ms = if elapsed_ms.is_finite() {
        elapsed_ms.clamp(0.0, state.config.max_frame_ms)
    } else {
        log::warn!("Dropping non-finite frame delta {}", elapsed_ms);
        0.0
    };
    state.player.animate(elapsed_ms);

    if state.is_over() {
        return report;
    }

    // Timers
    state.time_ms += elapsed_ms as f64;
    state.spawn_timer_ms += elapsed_ms;
    if !state.can_shoot {
        state.cooldown_timer_ms += elapsed_ms;
        if state.cooldown_timer_ms >= state.config.miss_cooldown_ms {
            state.can_shoot = true;
        }
    }

    // Spawning
    if state.spawn_timer_ms > state.difficulty.spawn_rate_ms || state.zombies.is_empty() {
        report.spawned = state.spawn_zombie();
        state.spawn_timer_ms = 0.0;
    }

    // Difficulty
    report.difficulty_step = state.difficulty.tick(elapsed_ms, &state.config);

    // Zombies
    let speed = state.difficulty.zombie_speed;
    let range = state.difficulty.number_range;
    for z in state.zombies.iter_mut() {
        z.speed = speed * z.kind.speed_multiplier();
        let transition = zombie::update_zombie(z, elapsed_ms, range, &state.config, &mut state.rng);
        if transition == Transition::Transformed {
            log::debug!("Zombie {} got back up: {}", z.id, z.problem);
            state.events.push(SimEvent::Transformed { id: z.id });
        }
    }

    // Loss check
    let defended = state.config.defended_line_x;
    if state.zombies.iter().any(|z| z.is_alive() && z.x < defended) {
        state.end_game();
        report.game_over = true;
    }

    zombie::evict_removed(&mut state.zombies);

    report
}
