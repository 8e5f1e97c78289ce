//! Enemy decision making: greedy pursuit inside the aggro radius, bounded random patrol outside it.

use bevy_ecs::{
    component::Component,
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use glam::IVec2;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::{
    error::GameError,
    map::{direction::Direction, grid::Grid},
    systems::{
        components::{DeltaTime, GameRng},
        movement::Motion,
        player::Hero,
    },
};

/// Manhattan distance between two cells.
pub fn manhattan(a: IVec2, b: IVec2) -> u32 {
    let delta = (a - b).abs();
    (delta.x + delta.y) as u32
}

/// The single-axis step that closes the larger offset toward `to`.
///
/// Horizontal wins only when its offset is strictly larger, so ties step vertically. A zero offset also
/// falls to the vertical branch and steps up, off the target's cell.
pub fn pursuit_step(from: IVec2, to: IVec2) -> Direction {
    let delta = to - from;
    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// What an enemy decided on its last update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Still travelling between cells.
    Busy,
    Pursue { moved: bool },
    Patrol { moved: bool },
    /// Out of range and waiting for the next patrol tick.
    Wait,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Anchor for the patrol territory.
    pub spawn: IVec2,
    /// Governs both the pursuit trigger and the patrol bound.
    pub radius: u32,
    pub patrol_timer: f32,
    pub patrol_interval: f32,
}

impl Enemy {
    pub fn new(spawn: IVec2, radius: u32, patrol_interval: f32) -> Self {
        Self {
            spawn,
            radius,
            patrol_timer: 0.0,
            patrol_interval,
        }
    }

    /// Runs one AI update. The patrol timer accumulates every call, including while pursuing.
    pub fn update_ai<R: Rng>(&mut self, motion: &mut Motion, hero_cell: IVec2, grid: &Grid, dt: f32, rng: &mut R) -> Decision {
        self.patrol_timer += dt;
        if motion.moving {
            return Decision::Busy;
        }

        if manhattan(motion.cell, hero_cell) <= self.radius {
            return Decision::Pursue {
                moved: self.pursue(motion, hero_cell, grid),
            };
        }

        if self.patrol_timer >= self.patrol_interval {
            self.patrol_timer = 0.0;
            return Decision::Patrol {
                moved: self.patrol(motion, grid, rng),
            };
        }

        Decision::Wait
    }

    /// Steps toward the hero, facing the step even when it is blocked. No fallback axis is tried.
    fn pursue(&self, motion: &mut Motion, hero_cell: IVec2, grid: &Grid) -> bool {
        let direction = pursuit_step(motion.cell, hero_cell);
        motion.direction = direction;
        let candidate = motion.cell + direction.as_ivec2();
        if !grid.is_walkable(candidate) {
            trace!(?direction, cell = ?motion.cell, "Pursuit blocked");
            return false;
        }
        motion.command_move(candidate)
    }

    /// Tries the four directions in random order, taking the first that stays inside the territory.
    fn patrol<R: Rng>(&self, motion: &mut Motion, grid: &Grid, rng: &mut R) -> bool {
        let mut directions = Direction::DIRECTIONS;
        directions.shuffle(rng);

        for direction in directions {
            let candidate = motion.cell + direction.as_ivec2();
            if grid.is_walkable(candidate) && manhattan(candidate, self.spawn) <= self.radius {
                motion.direction = direction;
                return motion.command_move(candidate);
            }
        }

        trace!(cell = ?motion.cell, "No patrol move available");
        false
    }
}

pub fn enemy_ai_system(
    delta_time: Res<DeltaTime>,
    grid: Res<Grid>,
    mut rng: ResMut<GameRng>,
    heroes: Query<&Motion, With<Hero>>,
    mut enemies: Query<(&mut Enemy, &mut Motion), Without<Hero>>,
    mut errors: EventWriter<GameError>,
) {
    let hero_cell = match heroes.single() {
        Ok(motion) => motion.cell,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for enemy AI system: {}",
                e
            )));
            return;
        }
    };

    for (mut enemy, mut motion) in enemies.iter_mut() {
        let decision = enemy.update_ai(&mut motion, hero_cell, &grid, delta_time.0, &mut rng.0);
        if !matches!(decision, Decision::Busy | Decision::Wait) {
            trace!(?decision, cell = ?motion.cell, "Enemy decided");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan(IVec2::new(2, 2), IVec2::new(5, 6)), 7);
        assert_eq!(manhattan(IVec2::new(5, 6), IVec2::new(2, 2)), 7);
        assert_eq!(manhattan(IVec2::ZERO, IVec2::ZERO), 0);
    }

    #[test]
    fn test_pursuit_step_prefers_larger_axis() {
        assert_eq!(pursuit_step(IVec2::ZERO, IVec2::new(3, 1)), Direction::Right);
        assert_eq!(pursuit_step(IVec2::ZERO, IVec2::new(-3, 1)), Direction::Left);
        assert_eq!(pursuit_step(IVec2::ZERO, IVec2::new(1, -3)), Direction::Up);
    }

    #[test]
    fn test_pursuit_tie_moves_vertically() {
        assert_eq!(pursuit_step(IVec2::ZERO, IVec2::new(2, 2)), Direction::Down);
        assert_eq!(pursuit_step(IVec2::ZERO, IVec2::new(-2, -2)), Direction::Up);
    }

    #[test]
    fn test_pursuit_step_on_same_cell() {
        assert_eq!(pursuit_step(IVec2::new(4, 4), IVec2::new(4, 4)), Direction::Up);
    }
}
