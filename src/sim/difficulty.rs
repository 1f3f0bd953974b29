//! Time-driven difficulty progression
//!
//! Speed saturates at `max_zombie_speed`, the number range saturates at
//! `max_number_range`, and the spawn interval bounces between
//! `min_spawn_rate_ms` and `initial_spawn_rate_ms`.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Which way the spawn interval is currently moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnTrend {
    /// Spawns get more frequent
    Faster,
    /// Spawns get less frequent
    Slower,
}

impl SpawnTrend {
    fn sign(&self) -> f32 {
        match self {
            SpawnTrend::Faster => -1.0,
            SpawnTrend::Slower => 1.0,
        }
    }
}

/// Global difficulty knobs for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub zombie_speed: f32,
    pub spawn_rate_ms: f32,
    pub spawn_trend: SpawnTrend,
    pub number_range: u32,
    /// Time since the last step
    pub timer_ms: f32,
    /// Steps taken this session
    pub level: u32,
}

impl Difficulty {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            zombie_speed: config.initial_zombie_speed,
            spawn_rate_ms: config.restart_policy.starting_spawn_rate(config),
            spawn_trend: SpawnTrend::Faster,
            number_range: config.initial_number_range,
            timer_ms: 0.0,
            level: 0,
        }
    }

    /// Accumulate `elapsed_ms`; step once the interval is exceeded.
    /// Returns true if a step happened.
    pub fn tick(&mut self, elapsed_ms: f32, config: &GameConfig) -> bool {
        self.timer_ms += elapsed_ms;
        if self.timer_ms > config.difficulty_interval_ms {
            self.step(config);
            self.timer_ms = 0.0;
            true
        } else {
            false
        }
    }

    /// Apply a single difficulty increase
    pub fn step(&mut self, config: &GameConfig) {
        self.zombie_speed =
            (self.zombie_speed + config.zombie_speed_increase).min(config.max_zombie_speed);

        if self.spawn_rate_ms < config.min_spawn_rate_ms {
            self.spawn_trend = SpawnTrend::Slower;
        } else if self.spawn_rate_ms > config.initial_spawn_rate_ms {
            self.spawn_trend = SpawnTrend::Faster;
        }
        self.spawn_rate_ms += self.spawn_trend.sign() * config.spawn_rate_decrease_ms;

        self.number_range = self
            .number_range
            .saturating_add(config.number_range_increase)
            .min(config.max_number_range);

        self.level += 1;
        log::debug!(
            "Difficulty {}: speed={:.3} spawn_rate={}ms range={}",
            self.level,
            self.zombie_speed,
            self.spawn_rate_ms,
            self.number_range
        );
    }
}
