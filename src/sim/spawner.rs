//! Lane selection and zombie creation

use rand::Rng;

use super::zombie::{Zombie, ZombieKind};
use crate::config::GameConfig;

/// Every Nth spawn is heavy
pub const HEAVY_EVERY: u64 = 12;
/// Every Nth spawn (not already heavy) is light
pub const LIGHT_EVERY: u64 = 5;

/// Session values a new zombie depends on
#[derive(Debug, Clone, Copy)]
pub struct SpawnParams {
    pub id: u32,
    /// Spawns so far; the new zombie becomes number `spawn_count + 1`
    pub spawn_count: u64,
    pub number_range: u32,
    pub zombie_speed: f32,
}

/// Kind for the `order`-th spawn (1-based). Heavy wins when both match.
pub fn kind_for_spawn(order: u64) -> ZombieKind {
    if order % HEAVY_EVERY == 0 {
        ZombieKind::Heavy
    } else if order % LIGHT_EVERY == 0 {
        ZombieKind::Light
    } else {
        ZombieKind::Base
    }
}

/// Lanes whose living zombies have all moved at least `min_zombie_spacing`
/// away from the spawn edge
pub fn eligible_rows(zombies: &[Zombie], config: &GameConfig) -> Vec<usize> {
    (0..config.num_rows)
        .filter(|&row| {
            !zombies.iter().any(|z| {
                z.row == row
                    && z.is_alive()
                    && config.canvas_width - z.x < config.min_zombie_spacing
            })
        })
        .collect()
}

/// Create a zombie in a random eligible lane, or `None` if every lane is crowded
pub fn try_spawn<R: Rng + ?Sized>(
    zombies: &[Zombie],
    params: SpawnParams,
    config: &GameConfig,
    rng: &mut R,
) -> Option<Zombie> {
    let rows = eligible_rows(zombies, config);
    if rows.is_empty() {
        return None;
    }
    let row = rows[rng.random_range(0..rows.len())];

    let order = params.spawn_count + 1;
    let kind = kind_for_spawn(order);
    let problem = kind.generate_problem(rng, params.number_range, config);
    let x = config.canvas_width - kind.size();

    let mut zombie = Zombie::new(params.id, kind, row, x, problem, order);
    zombie.speed = params.zombie_speed * kind.speed_multiplier();
    Some(zombie)
}
