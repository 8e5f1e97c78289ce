use bevy_ecs::{
    component::Component,
    system::{Query, Res},
};
use glam::{IVec2, Vec2};

use crate::{
    constants::cell_center,
    map::direction::Direction,
    systems::components::{CharacterAnimation, DeltaTime},
};

/// Grid-locked motion with a smoothly interpolated pixel position.
///
/// `cell` is the logical position and jumps to the destination the moment a move is committed;
/// `position` trails behind it until it reaches `target`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub cell: IVec2,
    pub position: Vec2,
    pub target: Vec2,
    /// Pixels per second.
    pub speed: f32,
    pub moving: bool,
    pub direction: Direction,
}

impl Motion {
    /// Creates a resting motion centered on `cell`.
    pub fn new(cell: IVec2, speed: f32) -> Self {
        let center = cell_center(cell);
        Self {
            cell,
            position: center,
            target: center,
            speed,
            moving: false,
            direction: Direction::default(),
        }
    }

    /// Commits a move to `cell`, unless a move is already in flight.
    ///
    /// Returns `true` if the move was accepted.
    pub fn command_move(&mut self, cell: IVec2) -> bool {
        if self.moving {
            return false;
        }

        self.cell = cell;
        self.target = cell_center(cell);
        self.moving = true;
        true
    }

    /// Moves the pixel position toward the target, snapping onto it once it is within one step.
    pub fn advance(&mut self, dt: f32) {
        let remaining = self.target - self.position;
        let distance = remaining.length();

        if distance == 0.0 {
            self.moving = false;
            return;
        }

        let step = self.speed * dt;
        if distance <= step {
            self.position = self.target;
            self.moving = false;
        } else {
            self.position += remaining / distance * step;
        }
    }
}

/// Ticks the animation matching the current facing and motion state, then moves.
///
/// The animation is selected before moving, so the frame that arrives still advances the moving set.
pub fn advance_character(motion: &mut Motion, animation: &mut CharacterAnimation, dt: f32) {
    animation.0.active_mut(motion.direction, motion.moving).tick(dt);
    motion.advance(dt);
}

/// Advances every character carrying the component `T`.
pub fn movement_system<T: Component>(
    delta_time: Res<DeltaTime>,
    mut characters: Query<(&mut Motion, &mut CharacterAnimation), bevy_ecs::query::With<T>>,
) {
    for (mut motion, mut animation) in characters.iter_mut() {
        advance_character(&mut motion, &mut animation, delta_time.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_motion_rests_on_cell_center() {
        let motion = Motion::new(IVec2::new(1, 1), 100.0);
        assert_eq!(motion.position, Vec2::new(60.0, 60.0));
        assert_eq!(motion.position, motion.target);
        assert!(!motion.moving);
    }

    #[test]
    fn test_advance_without_target_is_idempotent() {
        let mut motion = Motion::new(IVec2::ZERO, 100.0);
        motion.moving = true;
        motion.advance(0.5);
        assert!(!motion.moving);
        assert_eq!(motion.position, cell_center(IVec2::ZERO));
    }
}
