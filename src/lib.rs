//! Math Zombies - an arithmetic-practice lane defense game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, zombies, difficulty, answers)
//! - `config`: Session parameters with validation
//! - `audio`: Cue dispatch for the audio collaborator
//!
//! Rendering, HUD and input wiring live outside this crate; they read
//! [`sim::Snapshot`]s and feed [`sim::TickInput`]s.

pub mod audio;
pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig, RestartPolicy};

/// Fixed gameplay constants
pub mod consts {
    /// Frame length the speed values were tuned for (60 Hz)
    pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0;

    /// Base zombie sprite size (square, pixels)
    pub const ZOMBIE_BASE_SIZE: f32 = 40.0;

    /// Player sprite size and fixed horizontal position
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_X: f32 = 50.0;

    /// Shooting flash duration (cosmetic)
    pub const SHOOT_ANIMATION_MS: f32 = 100.0;

    /// Blood splatters kept for the renderer
    pub const MAX_BLOOD: usize = 64;

    /// Blood splatter opacity
    pub const BLOOD_OPACITY: f32 = 0.5;
}

/// Height of a single lane in pixels
#[inline]
pub fn row_height(config: &GameConfig) -> f32 {
    (config.canvas_height - config.top_padding * 2.0) / config.num_rows as f32
}

/// Vertical center of a lane
#[inline]
pub fn row_center_y(config: &GameConfig, row: usize) -> f32 {
    let h = row_height(config);
    config.top_padding + row as f32 * h + h / 2.0
}
