//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; there are no globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::events::SimEvent;
use super::spawner::{self, SpawnParams};
use super::zombie::Zombie;
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;
use crate::row_center_y;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// A zombie reached the defended line; needs a restart
    GameOver,
}

/// The defending player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub row: usize,
    pub x: f32,
    /// Shooting flash (cosmetic)
    pub is_shooting: bool,
    pub shoot_timer_ms: f32,
    /// Sprite rotation; tipped over on game over
    pub rotation: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            row: 0,
            x: PLAYER_X,
            is_shooting: false,
            shoot_timer_ms: 0.0,
            rotation: 0.0,
        }
    }
}

impl Player {
    /// Move one lane up. Returns true if the row changed.
    pub fn move_up(&mut self) -> bool {
        if self.row > 0 {
            self.row -= 1;
            true
        } else {
            false
        }
    }

    /// Move one lane down. Returns true if the row changed.
    pub fn move_down(&mut self, num_rows: usize) -> bool {
        if self.row + 1 < num_rows {
            self.row += 1;
            true
        } else {
            false
        }
    }

    pub fn start_shooting(&mut self) {
        self.is_shooting = true;
        self.shoot_timer_ms = 0.0;
    }

    /// Advance the shooting flash
    pub fn animate(&mut self, elapsed_ms: f32) {
        if self.is_shooting {
            self.shoot_timer_ms += elapsed_ms;
            if self.shoot_timer_ms >= SHOOT_ANIMATION_MS {
                self.is_shooting = false;
                self.shoot_timer_ms = 0.0;
            }
        }
    }
}

/// Blood splatter left by a kill (renderer only, never read by gameplay)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodSplatter {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub opacity: f32,
}

impl BloodSplatter {
    /// Splatter twice the zombie's size, jittered by up to 10% around `center`
    pub fn new<R: Rng + ?Sized>(center: Vec2, zombie_size: f32, rng: &mut R) -> Self {
        let size = Vec2::splat(zombie_size * 2.0);
        let offset = Vec2::new(
            (rng.random::<f32>() - 0.5) * 0.2 * size.x,
            (rng.random::<f32>() - 0.5) * 0.2 * size.y,
        );
        Self {
            pos: center + offset - size / 2.0,
            size,
            opacity: BLOOD_OPACITY,
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed of the current run
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score seen since the process started
    pub best_score: u32,
    pub difficulty: Difficulty,
    pub spawn_timer_ms: f32,
    pub cooldown_timer_ms: f32,
    pub can_shoot: bool,
    /// Total simulated time this run
    pub time_ms: f64,
    pub player: Player,
    pub zombies: Vec<Zombie>,
    pub blood: Vec<BloodSplatter>,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<SimEvent>,
    /// Zombies spawned this run
    pub spawn_count: u64,
    pub restarts: u32,
    next_id: u32,
}

impl GameState {
    /// Start a session. The first zombie is spawned immediately.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let difficulty = Difficulty::new(&config);
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            best_score: 0,
            difficulty,
            spawn_timer_ms: 0.0,
            cooldown_timer_ms: 0.0,
            can_shoot: true,
            time_ms: 0.0,
            player: Player::default(),
            zombies: Vec::new(),
            blood: Vec::new(),
            events: Vec::new(),
            spawn_count: 0,
            restarts: 0,
            next_id: 1,
        };

        log::info!(
            "Session started: seed={} rows={} policy={}",
            seed,
            state.config.num_rows,
            state.config.restart_policy.as_str()
        );
        state.spawn_zombie();
        Ok(state)
    }

    /// Reset everything except the config and best score, then spawn
    /// the opening zombie. Reseeds from `seed + restarts` so runs replay.
    pub fn restart(&mut self) {
        self.restarts += 1;
        let seed = self.seed.wrapping_add(self.restarts as u64);

        self.rng = Pcg32::seed_from_u64(seed);
        self.phase = GamePhase::Playing;
        self.best_score = self.best_score.max(self.score);
        self.score = 0;
        self.difficulty = Difficulty::new(&self.config);
        self.spawn_timer_ms = 0.0;
        self.cooldown_timer_ms = 0.0;
        self.can_shoot = true;
        self.time_ms = 0.0;
        self.player = Player::default();
        self.zombies.clear();
        self.blood.clear();
        self.events.clear();
        self.spawn_count = 0;
        self.next_id = 1;

        log::info!("Session restarted (run {}, seed {})", self.restarts, seed);
        self.events.push(SimEvent::Restarted);
        self.spawn_zombie();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Try to put a new zombie in an uncrowded lane. Returns its id.
    pub fn spawn_zombie(&mut self) -> Option<u32> {
        let params = SpawnParams {
            id: self.next_id,
            spawn_count: self.spawn_count,
            number_range: self.difficulty.number_range,
            zombie_speed: self.difficulty.zombie_speed,
        };
        let Some(zombie) = spawner::try_spawn(&self.zombies, params, &self.config, &mut self.rng)
        else {
            log::debug!("Spawn skipped: every lane is crowded");
            return None;
        };

        let id = self.next_entity_id();
        self.spawn_count = zombie.spawn_order;
        log::debug!(
            "Spawned {:?} #{} in row {}: {}",
            zombie.kind,
            zombie.spawn_order,
            zombie.row,
            zombie.problem
        );
        self.events.push(SimEvent::Spawned {
            id,
            kind: zombie.kind,
        });
        self.zombies.push(zombie);
        Some(id)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the run
    pub fn end_game(&mut self) {
        if self.is_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.player.rotation = -std::f32::consts::FRAC_PI_2;
        self.best_score = self.best_score.max(self.score);
        log::info!(
            "Game over: score={} best={} after {:.1}s",
            self.score,
            self.best_score,
            self.time_ms / 1000.0
        );
        self.events.push(SimEvent::GameOver { score: self.score });
    }

    /// Add a splatter, dropping the oldest past `MAX_BLOOD`
    pub fn add_blood(&mut self, center: Vec2, zombie_size: f32) {
        let splatter = BloodSplatter::new(center, zombie_size, &mut self.rng);
        self.blood.push(splatter);
        if self.blood.len() > MAX_BLOOD {
            let excess = self.blood.len() - MAX_BLOOD;
            self.blood.drain(..excess);
        }
    }

    /// Hand pending events to the host
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Screen position of a zombie's center
    pub fn zombie_center(&self, zombie: &Zombie) -> Vec2 {
        let size = zombie.size();
        Vec2::new(
            zombie.x + size / 2.0,
            row_center_y(&self.config, zombie.row) - size / 2.0,
        )
    }

    pub fn find_zombie(&self, id: u32) -> Option<&Zombie> {
        self.zombies.iter().find(|z| z.id == id)
    }
}
