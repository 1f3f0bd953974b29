//! Math Zombies headless runner
//!
//! Drives the simulation with an autoplay bot at a jittery ~60 Hz frame
//! rate and logs what happens. Renderer and input wiring live elsewhere.
//!
//! Usage: `math-zombies [config.json] [--seed N] [--seconds S] [--accuracy P]
//! [--policy midpoint|initial]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use math_zombies::{GameConfig, RestartPolicy};
use math_zombies::audio::{AudioManager, LogSink};
use math_zombies::consts::REFERENCE_FRAME_MS;
use math_zombies::sim::{GameState, Outcome, Snapshot, TickInput, leftmost, tick};

/// Time the bot "thinks" before answering
const BOT_THINK_MS: f32 = 900.0;

struct Options {
    config_path: Option<String>,
    seed: u64,
    seconds: f32,
    accuracy: f64,
    /// Overrides the config file's restart policy
    policy: Option<RestartPolicy>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_path: None,
            seed: 12345,
            seconds: 180.0,
            accuracy: 0.85,
            policy: None,
        }
    }
}

fn parse_args() -> Options {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    opts.seed = v;
                }
            }
            "--seconds" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    opts.seconds = v;
                }
            }
            "--accuracy" => {
                if let Some(v) = args.next().and_then(|v| v.parse::<f64>().ok()) {
                    opts.accuracy = v.clamp(0.0, 1.0);
                }
            }
            "--policy" => {
                if let Some(v) = args.next() {
                    opts.policy = RestartPolicy::from_str(&v);
                    if opts.policy.is_none() {
                        log::warn!("Unknown restart policy '{}', keeping config value", v);
                    }
                }
            }
            _ => opts.config_path = Some(arg),
        }
    }
    opts
}

fn load_config(path: Option<&str>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Using default config ({}: {})", path, e);
            GameConfig::default()
        }
    }
}

/// Plays like a decent student: walks to the most urgent lane, thinks,
/// then answers (sometimes wrongly)
struct Bot {
    rng: Pcg32,
    accuracy: f64,
    think_ms: f32,
}

impl Bot {
    fn new(seed: u64, accuracy: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed ^ 0x5eed_b07),
            accuracy,
            think_ms: 0.0,
        }
    }

    fn decide(&mut self, state: &GameState, dt: f32) -> TickInput {
        let mut input = TickInput::default();
        if state.is_over() {
            input.restart = true;
            return input;
        }

        // Most urgent zombie anywhere
        let Some(urgent) = state
            .zombies
            .iter()
            .filter(|z| z.is_alive())
            .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        else {
            return input;
        };

        if urgent.row < state.player.row {
            input.move_up = true;
            self.think_ms = 0.0;
        } else if urgent.row > state.player.row {
            input.move_down = true;
            self.think_ms = 0.0;
        } else if state.can_shoot {
            self.think_ms += dt;
            if self.think_ms >= BOT_THINK_MS {
                self.think_ms = 0.0;
                if let Some(target) = leftmost(&state.zombies, state.player.row) {
                    let answer = if self.rng.random_bool(self.accuracy) {
                        target.answer()
                    } else {
                        target.answer() + 1
                    };
                    input.submit = Some(answer.to_string());
                }
            }
        }
        input
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let opts = parse_args();
    let mut config = load_config(opts.config_path.as_deref());
    if let Some(policy) = opts.policy {
        config.restart_policy = policy;
    }

    let mut state = match GameState::new(config, opts.seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(2);
        }
    };
    log::info!("Math Zombies (headless) starting, seed {}", opts.seed);

    let mut bot = Bot::new(opts.seed, opts.accuracy);
    let mut audio = AudioManager::new(LogSink);
    audio.mark_interacted();

    let mut frame_rng = Pcg32::seed_from_u64(opts.seed.wrapping_mul(31));
    let mut now_ms = 0.0f64;
    let (mut hits, mut misses, mut games) = (0u32, 0u32, 1u32);

    while now_ms < opts.seconds as f64 * 1000.0 {
        let dt = REFERENCE_FRAME_MS + frame_rng.random_range(-2.0..2.0);
        let input = bot.decide(&state, dt);
        if input.restart {
            games += 1;
        }

        let report = tick(&mut state, &input, dt);
        match report.outcome {
            Some(Outcome::Hit { .. }) => hits += 1,
            Some(Outcome::Miss) => misses += 1,
            _ => {}
        }

        now_ms += dt as f64;
        for event in state.take_events() {
            audio.handle(&event, now_ms);
        }
        audio.update(now_ms);
    }

    let snapshot = Snapshot::capture(&state);
    println!(
        "{} games, best score {}, current score {}, {} hits / {} misses, difficulty level {}",
        games,
        state.best_score.max(state.score),
        snapshot.score,
        hits,
        misses,
        state.difficulty.level
    );
    match snapshot.to_json() {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Could not serialize final frame: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `sim::tick` directly
}
