//! Lane targeting: the shot always goes to the front-most living zombie

use super::zombie::Zombie;

/// Index of the living zombie with the smallest x in `row`.
/// Ties go to the first one in collection order.
pub fn leftmost_index(zombies: &[Zombie], row: usize) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, z) in zombies.iter().enumerate() {
        if z.row != row || !z.is_alive() {
            continue;
        }
        match best {
            Some((_, x)) if z.x >= x => {}
            _ => best = Some((i, z.x)),
        }
    }
    best.map(|(i, _)| i)
}

/// The living zombie the player would hit in `row`
pub fn leftmost(zombies: &[Zombie], row: usize) -> Option<&Zombie> {
    leftmost_index(zombies, row).map(|i| &zombies[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::problem::{Operator, Problem, Step};
    use crate::sim::zombie::{ZombieKind, ZombieState};

    fn at(id: u32, row: usize, x: f32) -> Zombie {
        let problem = Problem::new(
            1,
            vec![Step {
                op: Operator::Add,
                operand: 1,
            }],
        )
        .unwrap();
        Zombie::new(id, ZombieKind::Base, row, x, problem, id as u64)
    }

    #[test]
    fn test_picks_smallest_x_in_row() {
        let zombies = vec![at(1, 0, 100.0), at(2, 2, 500.0), at(3, 1, 50.0), at(4, 2, 300.0)];
        assert_eq!(leftmost(&zombies, 2).map(|z| z.id), Some(4));
        assert_eq!(leftmost(&zombies, 1).map(|z| z.id), Some(3));
        assert!(leftmost(&zombies, 3).is_none());
    }

    #[test]
    fn test_skips_dying() {
        let mut zombies = vec![at(1, 0, 100.0), at(2, 0, 400.0)];
        zombies[0].state = ZombieState::Dying { elapsed_ms: 0.0 };
        assert_eq!(leftmost_index(&zombies, 0), Some(1));
        zombies[1].state = ZombieState::Removed;
        assert_eq!(leftmost_index(&zombies, 0), None);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let zombies = vec![at(7, 0, 200.0), at(8, 0, 200.0)];
        assert_eq!(leftmost(&zombies, 0).map(|z| z.id), Some(7));
    }
}
