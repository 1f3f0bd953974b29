//! Zombie records and their lifecycle
//!
//! Zombies are plain data owned by `GameState::zombies`. Behavior lives in
//! free functions so the collection stays the single owner.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::problem::{self, Problem};
use crate::config::GameConfig;
use crate::consts::{REFERENCE_FRAME_MS, ZOMBIE_BASE_SIZE};

/// Zombie variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZombieKind {
    #[default]
    Base,
    /// Big, slow, carries a three-operand problem
    Light,
    /// Big, slightly faster, turns into a `Base` zombie on its first death
    Heavy,
}

impl ZombieKind {
    pub fn size_multiplier(&self) -> f32 {
        match self {
            ZombieKind::Base => 1.0,
            ZombieKind::Light | ZombieKind::Heavy => 1.5,
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        match self {
            ZombieKind::Base => 1.0,
            ZombieKind::Light => 0.4,
            ZombieKind::Heavy => 1.1,
        }
    }

    /// Operator steps in this kind's problems
    pub fn problem_steps(&self) -> usize {
        match self {
            ZombieKind::Light => 2,
            ZombieKind::Base | ZombieKind::Heavy => 1,
        }
    }

    pub fn size(&self) -> f32 {
        ZOMBIE_BASE_SIZE * self.size_multiplier()
    }

    /// Fresh problem for this kind
    pub fn generate_problem<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        range: u32,
        config: &GameConfig,
    ) -> Problem {
        problem::generate_steps(
            rng,
            self.problem_steps(),
            range,
            config.min_result,
            config.max_result,
        )
    }
}

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZombieState {
    /// Walking toward the defended line
    Alive,
    /// Toppling over; position frozen
    Dying { elapsed_ms: f32 },
    /// Inert, evicted at the end of the tick
    Removed,
}

/// A zombie entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub kind: ZombieKind,
    pub row: usize,
    pub x: f32,
    /// Pixels per reference frame
    pub speed: f32,
    pub problem: Problem,
    pub state: ZombieState,
    /// Topple rotation while dying (radians, cosmetic)
    pub angle: f32,
    /// Position in the spawn sequence (1-based)
    pub spawn_order: u64,
    /// A heavy zombie that already turned into a base one
    pub transformed: bool,
}

impl Zombie {
    pub fn new(
        id: u32,
        kind: ZombieKind,
        row: usize,
        x: f32,
        problem: Problem,
        spawn_order: u64,
    ) -> Self {
        Self {
            id,
            kind,
            row,
            x,
            speed: 0.0,
            problem,
            state: ZombieState::Alive,
            angle: 0.0,
            spawn_order,
            transformed: false,
        }
    }

    pub fn answer(&self) -> u32 {
        self.problem.answer()
    }

    pub fn size(&self) -> f32 {
        self.kind.size()
    }

    pub fn is_alive(&self) -> bool {
        self.state == ZombieState::Alive
    }

    pub fn is_removed(&self) -> bool {
        self.state == ZombieState::Removed
    }

    /// Shooting this zombie turns it into a base zombie instead of killing it
    pub fn will_transform(&self) -> bool {
        self.kind == ZombieKind::Heavy && !self.transformed
    }
}

/// Lifecycle change produced by a single update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// Heavy zombie got back up as a base zombie
    Transformed,
    /// Ready for eviction
    Removed,
}

/// Start the dying animation. Returns false if the zombie was not alive.
pub fn begin_dying(zombie: &mut Zombie) -> bool {
    if !zombie.is_alive() {
        return false;
    }
    zombie.state = ZombieState::Dying { elapsed_ms: 0.0 };
    true
}

/// Advance one zombie by `elapsed_ms`.
///
/// Alive zombies walk left; dying zombies only animate, then either
/// transform (heavy, once) or become `Removed`.
pub fn update_zombie<R: Rng + ?Sized>(
    zombie: &mut Zombie,
    elapsed_ms: f32,
    number_range: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Transition {
    match zombie.state {
        ZombieState::Alive => {
            zombie.x -= zombie.speed * (elapsed_ms / REFERENCE_FRAME_MS);
            Transition::None
        }
        ZombieState::Dying { elapsed_ms: timer } => {
            let timer = timer + elapsed_ms;
            if timer >= config.dying_duration_ms {
                if zombie.will_transform() {
                    transform_to_base(zombie, number_range, config, rng);
                    Transition::Transformed
                } else {
                    zombie.state = ZombieState::Removed;
                    Transition::Removed
                }
            } else {
                zombie.angle +=
                    std::f32::consts::FRAC_PI_2 * (elapsed_ms / config.dying_duration_ms);
                zombie.state = ZombieState::Dying { elapsed_ms: timer };
                Transition::None
            }
        }
        ZombieState::Removed => Transition::None,
    }
}

fn transform_to_base<R: Rng + ?Sized>(
    zombie: &mut Zombie,
    number_range: u32,
    config: &GameConfig,
    rng: &mut R,
) {
    zombie.kind = ZombieKind::Base;
    zombie.transformed = true;
    zombie.state = ZombieState::Alive;
    zombie.angle = 0.0;
    zombie.problem = zombie.kind.generate_problem(rng, number_range, config);
}

/// Drop removed zombies, keeping the order of the rest. Returns how many went.
pub fn evict_removed(zombies: &mut Vec<Zombie>) -> usize {
    let before = zombies.len();
    zombies.retain(|z| !z.is_removed());
    before - zombies.len()
}
