use bevy_ecs::{entity::Entity, query::With, world::World};
use glam::{IVec2, Vec2};

use crate::{
    map::{direction::Direction, grid::Grid},
    systems::{
        audio::AudioSettings,
        components::{CharacterAnimation, Coin},
        enemy::Enemy,
        movement::Motion,
        player::Hero,
        stage::GameStage,
    },
};

/// What a character looks like this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterView {
    pub position: Vec2,
    pub direction: Direction,
    pub moving: bool,
    /// The active animation's image identifier, if its sequence is non-empty.
    pub frame: Option<&'static str>,
    pub frame_index: usize,
}

impl CharacterView {
    pub fn new(motion: &Motion, animation: &CharacterAnimation) -> Self {
        let active = animation.0.active(motion.direction, motion.moving);
        Self {
            position: motion.position,
            direction: motion.direction,
            moving: motion.moving,
            frame: active.current_tile(),
            frame_index: active.current_frame(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroView {
    pub character: CharacterView,
    pub health: u32,
    pub coins: u32,
}

/// A read-only snapshot of everything drawn in a frame.
#[derive(Debug, Clone)]
pub struct Scene<'w> {
    pub stage: GameStage,
    pub grid: &'w Grid,
    pub coin: Option<IVec2>,
    pub hero: Option<HeroView>,
    /// Ordered by entity, so draw order is stable between frames.
    pub enemies: Vec<CharacterView>,
    pub audio: AudioSettings,
}

impl<'w> Scene<'w> {
    /// Captures the current session state. Querying needs the world mutably; nothing is modified.
    pub fn capture(world: &'w mut World) -> Self {
        let hero = world
            .query::<(&Motion, &CharacterAnimation, &Hero)>()
            .iter(world)
            .next()
            .map(|(motion, animation, hero)| HeroView {
                character: CharacterView::new(motion, animation),
                health: hero.health,
                coins: hero.coins,
            });

        let mut enemies: Vec<(Entity, CharacterView)> = world
            .query_filtered::<(Entity, &Motion, &CharacterAnimation), With<Enemy>>()
            .iter(world)
            .map(|(entity, motion, animation)| (entity, CharacterView::new(motion, animation)))
            .collect();
        enemies.sort_by_key(|(entity, _)| *entity);

        let world: &'w World = world;
        Self {
            stage: *world.resource::<GameStage>(),
            grid: world.resource::<Grid>(),
            coin: world.resource::<Coin>().0,
            hero,
            enemies: enemies.into_iter().map(|(_, view)| view).collect(),
            audio: *world.resource::<AudioSettings>(),
        }
    }
}
