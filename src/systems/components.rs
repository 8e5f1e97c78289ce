use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::IVec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    constants::{animation, mechanics, BOARD_CELL_SIZE},
    error::AnimationError,
    map::grid::Grid,
    systems::{enemy::Enemy, movement::Motion, player::Hero},
    texture::{
        animated::DirectionalAnimation,
        sprites::{ENEMY_IDLE, ENEMY_MOVE, HERO_IDLE, HERO_MOVE},
    },
};

/// Seconds elapsed since the previous update, supplied by the host.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct DeltaTime(pub f32);

/// Process-wide flags that outlive a session.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GlobalState {
    pub exit: bool,
}

/// The cell holding the coin, if one could be placed.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Coin(pub Option<IVec2>);

/// The random source shared by grid generation, spawning and patrols.
#[derive(Resource, Debug)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    /// Seeds deterministically when `seed` is given, otherwise from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SmallRng::seed_from_u64(seed)),
            None => Self(SmallRng::from_rng(&mut rand::rng())),
        }
    }
}

/// Tuning for a session, defaulting to the values in [`constants`](crate::constants).
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub enemy_count: usize,
    pub enemy_radius: u32,
    pub obstacle_placements: usize,
    pub hero_speed: f32,
    pub enemy_speed: f32,
    pub max_health: u32,
    pub hit_damage: u32,
    pub damage_cooldown: f32,
    pub patrol_interval: f32,
    pub hero_start: IVec2,
    pub enemy_spawn_min: IVec2,
    /// Fixed board used instead of a randomly generated one.
    pub layout: Option<Grid>,
    pub seed: Option<u64>,
    /// Start with music and sound effects disabled.
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_count: mechanics::ENEMY_COUNT,
            enemy_radius: mechanics::ENEMY_RADIUS,
            obstacle_placements: mechanics::OBSTACLE_PLACEMENTS,
            hero_speed: mechanics::HERO_SPEED,
            enemy_speed: mechanics::ENEMY_SPEED,
            max_health: mechanics::HERO_MAX_HEALTH,
            hit_damage: mechanics::HIT_DAMAGE,
            damage_cooldown: mechanics::DAMAGE_COOLDOWN,
            patrol_interval: mechanics::PATROL_INTERVAL,
            hero_start: mechanics::HERO_PREFERRED_START,
            enemy_spawn_min: mechanics::ENEMY_SPAWN_MIN,
            layout: None,
            seed: None,
            muted: false,
        }
    }
}

impl GameConfig {
    /// The board size sessions are played on.
    pub fn board_size(&self) -> glam::UVec2 {
        self.layout.as_ref().map_or(BOARD_CELL_SIZE, Grid::size)
    }
}

/// Idle and moving animations for a character, sampled by its facing.
#[derive(Component, Debug, Clone)]
pub struct CharacterAnimation(pub DirectionalAnimation);

impl CharacterAnimation {
    pub fn hero() -> Result<Self, AnimationError> {
        DirectionalAnimation::new(
            &HERO_IDLE,
            &HERO_MOVE,
            animation::IDLE_FRAME_DURATION,
            animation::MOVING_FRAME_DURATION,
        )
        .map(Self)
    }

    pub fn enemy() -> Result<Self, AnimationError> {
        DirectionalAnimation::new(
            &ENEMY_IDLE,
            &ENEMY_MOVE,
            animation::IDLE_FRAME_DURATION,
            animation::MOVING_FRAME_DURATION,
        )
        .map(Self)
    }
}

#[derive(Bundle)]
pub struct HeroBundle {
    pub hero: Hero,
    pub motion: Motion,
    pub animation: CharacterAnimation,
}

#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub motion: Motion,
    pub animation: CharacterAnimation,
}
