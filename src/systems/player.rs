use bevy_ecs::{
    component::Component,
    event::EventWriter,
    query::With,
    system::{Query, Res},
};
use tracing::trace;

use crate::{
    audio::Sound,
    error::GameError,
    map::{direction::Direction, grid::Grid},
    systems::{
        audio::AudioEvent,
        components::DeltaTime,
        input::Controls,
        movement::Motion,
    },
};

/// The player-controlled character's vitals.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    pub health: u32,
    pub coins: u32,
    /// Seconds until another hit may register.
    pub damage_timer: f32,
    pub damage_cooldown: f32,
}

/// What an attempted hit did to the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The cooldown was still running.
    Ignored,
    Damaged,
    Killed,
}

impl Hero {
    pub fn new(health: u32, damage_cooldown: f32) -> Self {
        Self {
            health,
            coins: 0,
            damage_timer: 0.0,
            damage_cooldown,
        }
    }

    pub fn tick_cooldown(&mut self, dt: f32) {
        if self.damage_timer > 0.0 {
            self.damage_timer = (self.damage_timer - dt).max(0.0);
        }
    }

    /// Applies `damage` unless the cooldown is running, restarting the cooldown on a hit.
    pub fn apply_hit(&mut self, damage: u32) -> HitOutcome {
        if self.damage_timer > 0.0 {
            return HitOutcome::Ignored;
        }

        self.health = self.health.saturating_sub(damage);
        self.damage_timer = self.damage_cooldown;
        if self.health == 0 {
            HitOutcome::Killed
        } else {
            HitOutcome::Damaged
        }
    }
}

/// Turns the hero toward `intent` and commits a one-cell step if the destination is open.
///
/// Does nothing while a move is in flight. Facing changes even when the step is blocked.
/// Returns `true` if a move was committed.
pub fn handle_input(motion: &mut Motion, grid: &Grid, intent: Option<Direction>) -> bool {
    if motion.moving {
        return false;
    }
    let Some(direction) = intent else {
        return false;
    };

    motion.direction = direction;
    let candidate = grid.clamp(motion.cell + direction.as_ivec2());
    if candidate == motion.cell || grid.is_obstacle(candidate) {
        trace!(?direction, cell = ?motion.cell, "Hero move blocked");
        return false;
    }

    motion.command_move(candidate)
}

pub fn hero_cooldown_system(delta_time: Res<DeltaTime>, mut heroes: Query<&mut Hero>) {
    for mut hero in heroes.iter_mut() {
        hero.tick_cooldown(delta_time.0);
    }
}

/// Translates the held keys into a hero move, with a footstep on every accepted step.
pub fn hero_input_system(
    controls: Res<Controls>,
    grid: Res<Grid>,
    mut heroes: Query<&mut Motion, With<Hero>>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    let mut motion = match heroes.single_mut() {
        Ok(motion) => motion,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for hero input system: {}",
                e
            )));
            return;
        }
    };

    if handle_input(&mut motion, &grid, controls.intent()) {
        trace!(cell = ?motion.cell, direction = ?motion.direction, "Hero stepped");
        audio_events.write(AudioEvent::PlaySound(Sound::Step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_never_goes_negative() {
        let mut hero = Hero::new(100, 0.45);
        hero.damage_timer = 0.1;
        hero.tick_cooldown(0.5);
        assert_eq!(hero.damage_timer, 0.0);
    }

    #[test]
    fn test_hit_clamps_health_at_zero() {
        let mut hero = Hero::new(3, 0.45);
        assert_eq!(hero.apply_hit(5), HitOutcome::Killed);
        assert_eq!(hero.health, 0);
    }
}
