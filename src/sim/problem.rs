//! Arithmetic problem generation
//!
//! Problems are chains of `+`/`-` steps evaluated left to right. Every
//! intermediate and final value stays inside `[min_result, max_result]`;
//! draws that break that are thrown away and redrawn, never clamped.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Binary operator of a problem step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    /// Pick `+` or `-` with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Operator::Add
        } else {
            Operator::Sub
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
        }
    }

    /// Apply to `lhs`. `None` when subtraction would go negative.
    pub fn apply(&self, lhs: u32, rhs: u32) -> Option<u32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
        }
    }
}

/// One `op operand` step following the first operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub op: Operator,
    pub operand: u32,
}

/// A generated problem and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub first: u32,
    pub steps: Vec<Step>,
    answer: u32,
}

impl Problem {
    /// Build from parts, evaluating the answer. `None` if any step underflows.
    pub fn new(first: u32, steps: Vec<Step>) -> Option<Self> {
        let answer = evaluate(first, &steps)?;
        Some(Self {
            first,
            steps,
            answer,
        })
    }

    pub fn answer(&self) -> u32 {
        self.answer
    }

    /// Number of operands (2 for a regular problem, 3 for a chain)
    pub fn operand_count(&self) -> usize {
        self.steps.len() + 1
    }

    /// Text shown above the zombie, e.g. `"7 - 3 = ?"`
    pub fn prompt(&self) -> String {
        format!("{self} = ?")
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for step in &self.steps {
            write!(f, " {} {}", step.op.symbol(), step.operand)?;
        }
        Ok(())
    }
}

/// Left-to-right evaluation over typed steps
pub fn evaluate(first: u32, steps: &[Step]) -> Option<u32> {
    steps
        .iter()
        .try_fold(first, |acc, step| step.op.apply(acc, step.operand))
}

/// Uniform draw in `[min, max]`; a zero is rerolled once (the reroll may be zero)
pub fn roll_skip_zero<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> u32 {
    let res = rng.random_range(min..=max);
    if res == 0 {
        return rng.random_range(min..=max);
    }
    res
}

/// Two-operand problem with the first operand capped at `range`
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    range: u32,
    min_result: u32,
    max_result: u32,
) -> Problem {
    generate_steps(rng, 1, range, min_result, max_result)
}

/// Three-operand problem (two chained steps)
pub fn generate_chain<R: Rng + ?Sized>(
    rng: &mut R,
    range: u32,
    min_result: u32,
    max_result: u32,
) -> Problem {
    generate_steps(rng, 2, range, min_result, max_result)
}

/// Generate a problem with `step_count` operator steps.
///
/// Requires `min_result <= max_result` (checked by config validation).
pub fn generate_steps<R: Rng + ?Sized>(
    rng: &mut R,
    step_count: usize,
    range: u32,
    min_result: u32,
    max_result: u32,
) -> Problem {
    debug_assert!(min_result <= max_result);
    let cap = range.clamp(min_result, max_result);

    'attempt: loop {
        let first = roll_skip_zero(rng, min_result, cap);
        let mut value = first;
        let mut steps = Vec::with_capacity(step_count);

        for _ in 0..step_count {
            let op = Operator::random(rng);
            let operand = match op {
                Operator::Add => roll_skip_zero(rng, 0, max_result - value),
                Operator::Sub => roll_skip_zero(rng, 0, value),
            };
            value = match op.apply(value, operand) {
                Some(v) if (min_result..=max_result).contains(&v) => v,
                _ => continue 'attempt,
            };
            steps.push(Step { op, operand });
        }

        return Problem {
            first,
            steps,
            answer: value,
        };
    }
}
