//! Session configuration
//!
//! Immutable for the lifetime of a session. Loaded from JSON or defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the spawn-rate oscillation starts on session start and restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Halfway between `min_spawn_rate_ms` and `initial_spawn_rate_ms`
    #[default]
    Midpoint,
    /// Exactly `initial_spawn_rate_ms`
    Initial,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Midpoint => "midpoint",
            RestartPolicy::Initial => "initial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "midpoint" | "mid" => Some(RestartPolicy::Midpoint),
            "initial" => Some(RestartPolicy::Initial),
            _ => None,
        }
    }

    /// Spawn rate a fresh session starts with
    pub fn starting_spawn_rate(&self, config: &GameConfig) -> f32 {
        match self {
            RestartPolicy::Midpoint => {
                (config.initial_spawn_rate_ms - config.min_spawn_rate_ms) / 2.0
                    + config.min_spawn_rate_ms
            }
            RestartPolicy::Initial => config.initial_spawn_rate_ms,
        }
    }
}

/// Reasons a configuration is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("num_rows must be at least 1")]
    NoRows,
    #[error("{name}: min {min} is greater than max {max}")]
    InvertedBounds {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("defended_line_x {0} lies outside the canvas")]
    DefendedLineOutside(f32),
    #[error("min_zombie_spacing {spacing} exceeds canvas width {width}")]
    SpacingTooWide { spacing: f32, width: f32 },
    #[error("initial_number_range {range} is below min_result {min_result}")]
    RangeBelowMinResult { range: u32, min_result: u32 },
    #[error("invalid config JSON: {0}")]
    Parse(String),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Board ===
    /// Number of lanes
    pub num_rows: usize,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Empty band above the first and below the last lane
    pub top_padding: f32,
    /// A living zombie left of this x ends the game
    pub defended_line_x: f32,

    // === Zombies ===
    /// Speeds are pixels per reference frame (1/60 s)
    pub initial_zombie_speed: f32,
    pub max_zombie_speed: f32,
    pub zombie_speed_increase: f32,
    /// Minimum distance from the spawn edge before a lane accepts another zombie
    pub min_zombie_spacing: f32,
    pub dying_duration_ms: f32,

    // === Spawning ===
    pub initial_spawn_rate_ms: f32,
    pub min_spawn_rate_ms: f32,
    pub spawn_rate_decrease_ms: f32,
    pub restart_policy: RestartPolicy,

    // === Problems ===
    pub initial_number_range: u32,
    pub max_number_range: u32,
    pub number_range_increase: u32,
    pub min_result: u32,
    pub max_result: u32,

    // === Timing ===
    pub miss_cooldown_ms: f32,
    pub difficulty_interval_ms: f32,
    /// Longest frame delta the loop will simulate in one tick
    pub max_frame_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_rows: 6,
            canvas_width: 800.0,
            canvas_height: 600.0,
            top_padding: 80.0,
            defended_line_x: 50.0,

            initial_zombie_speed: 0.05,
            max_zombie_speed: 0.2,
            zombie_speed_increase: 0.01,
            min_zombie_spacing: 100.0,
            dying_duration_ms: 500.0,

            initial_spawn_rate_ms: 15000.0,
            min_spawn_rate_ms: 6000.0,
            spawn_rate_decrease_ms: 500.0,
            restart_policy: RestartPolicy::Midpoint,

            initial_number_range: 5,
            max_number_range: 20,
            number_range_increase: 1,
            min_result: 0,
            max_result: 20,

            miss_cooldown_ms: 3000.0,
            difficulty_interval_ms: 10000.0,
            max_frame_ms: 250.0,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter sets the simulation cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_rows == 0 {
            return Err(ConfigError::NoRows);
        }

        let bounds = [
            (
                "zombie_speed",
                self.initial_zombie_speed as f64,
                self.max_zombie_speed as f64,
            ),
            (
                "spawn_rate_ms",
                self.min_spawn_rate_ms as f64,
                self.initial_spawn_rate_ms as f64,
            ),
            (
                "number_range",
                self.initial_number_range as f64,
                self.max_number_range as f64,
            ),
            ("result", self.min_result as f64, self.max_result as f64),
        ];
        for (name, min, max) in bounds {
            if min > max {
                return Err(ConfigError::InvertedBounds { name, min, max });
            }
        }

        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("initial_zombie_speed", self.initial_zombie_speed),
            ("min_spawn_rate_ms", self.min_spawn_rate_ms),
            ("dying_duration_ms", self.dying_duration_ms),
            ("miss_cooldown_ms", self.miss_cooldown_ms),
            ("difficulty_interval_ms", self.difficulty_interval_ms),
            ("max_frame_ms", self.max_frame_ms),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive(name));
            }
        }

        // Difficulty only ever ramps up
        let increments = [
            ("zombie_speed_increase", self.zombie_speed_increase),
            ("spawn_rate_decrease_ms", self.spawn_rate_decrease_ms),
        ];
        for (name, value) in increments {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative(name));
            }
        }

        if self.canvas_height - self.top_padding * 2.0 <= 0.0 {
            return Err(ConfigError::NotPositive("canvas_height - 2 * top_padding"));
        }
        if self.defended_line_x < 0.0 || self.defended_line_x >= self.canvas_width {
            return Err(ConfigError::DefendedLineOutside(self.defended_line_x));
        }
        if self.min_zombie_spacing > self.canvas_width {
            return Err(ConfigError::SpacingTooWide {
                spacing: self.min_zombie_spacing,
                width: self.canvas_width,
            });
        }
        if self.initial_number_range < self.min_result {
            return Err(ConfigError::RangeBelowMinResult {
                range: self.initial_number_range,
                min_result: self.min_result,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_rows() {
        let config = GameConfig {
            num_rows: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoRows));
    }

    #[test]
    fn test_rejects_inverted_result_bounds() {
        let config = GameConfig {
            min_result: 30,
            max_result: 20,
            initial_number_range: 30,
            max_number_range: 30,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { name: "result", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_speed_bounds() {
        let config = GameConfig {
            initial_zombie_speed: 0.3,
            max_zombie_speed: 0.2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                name: "zombie_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_inverted_spawn_rate_bounds() {
        let config = GameConfig {
            min_spawn_rate_ms: 20000.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                name: "spawn_rate_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_speed_increase() {
        let config = GameConfig {
            zombie_speed_increase: -0.1,
            difficulty_interval_ms: 10.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative("zombie_speed_increase"))
        );
    }

    #[test]
    fn test_rejects_negative_spawn_rate_decrease() {
        let config = GameConfig {
            spawn_rate_decrease_ms: -500.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative("spawn_rate_decrease_ms"))
        );
    }

    #[test]
    fn test_zero_increments_are_allowed() {
        let config = GameConfig {
            zombie_speed_increase: 0.0,
            spawn_rate_decrease_ms: 0.0,
            number_range_increase: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_nan_timing() {
        let config = GameConfig {
            miss_cooldown_ms: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("miss_cooldown_ms"))
        );
    }

    #[test]
    fn test_rejects_padding_that_leaves_no_lanes() {
        let config = GameConfig {
            top_padding: 300.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive("canvas_height - 2 * top_padding"))
        );
    }

    #[test]
    fn test_rejects_spacing_wider_than_canvas() {
        let config = GameConfig {
            min_zombie_spacing: 801.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpacingTooWide {
                spacing: 801.0,
                width: 800.0
            })
        );
    }

    #[test]
    fn test_rejects_range_below_min_result() {
        let config = GameConfig {
            min_result: 8,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::RangeBelowMinResult {
                range: 5,
                min_result: 8
            })
        );
    }

    #[test]
    fn test_rejects_defended_line_outside() {
        let config = GameConfig {
            defended_line_x: 900.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DefendedLineOutside(900.0))
        );
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "num_rows": 4, "restart_policy": "initial" }"#)
            .expect("valid config");
        assert_eq!(config.num_rows, 4);
        assert_eq!(config.restart_policy, RestartPolicy::Initial);
        assert_eq!(config.max_result, 20);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_starting_spawn_rate() {
        let config = GameConfig::default();
        assert_eq!(RestartPolicy::Midpoint.starting_spawn_rate(&config), 10500.0);
        assert_eq!(RestartPolicy::Initial.starting_spawn_rate(&config), 15000.0);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(RestartPolicy::from_str("MID"), Some(RestartPolicy::Midpoint));
        assert_eq!(RestartPolicy::from_str("initial"), Some(RestartPolicy::Initial));
        assert_eq!(RestartPolicy::from_str("other"), None);
        assert_eq!(RestartPolicy::Initial.as_str(), "initial");
    }
}
