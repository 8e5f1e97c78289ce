#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use bevy_ecs::{entity::Entity, event::Events, query::With, world::World};
use glam::{IVec2, Vec2};
use roguelike::{
    audio::{AudioBackend, Music, Sound},
    constants::{mechanics, BOARD_CELL_SIZE},
    error::{AudioError, RenderError},
    events::{GameCommand, GameEvent},
    game::Game,
    map::grid::Grid,
    render::{Color, Rect, Renderer, TextAnchor},
    systems::{
        components::{CharacterAnimation, Coin, EnemyBundle, GameConfig},
        enemy::Enemy,
        movement::Motion,
        player::Hero,
    },
};

/// Something the game asked the audio backend to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Played {
    Sound(Sound),
    Music(Music),
    Stop,
}

/// Records every playback request; shares its log with the test through an `Rc`.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub log: Rc<RefCell<Vec<Played>>>,
}

impl RecordingAudio {
    pub fn played(&self) -> Vec<Played> {
        self.log.borrow().clone()
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.log
            .borrow()
            .iter()
            .filter_map(|played| match played {
                Played::Sound(sound) => Some(*sound),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl AudioBackend for RecordingAudio {
    fn play_sound(&mut self, sound: Sound, _volume: f32) -> Result<(), AudioError> {
        self.log.borrow_mut().push(Played::Sound(sound));
        Ok(())
    }

    fn play_music(&mut self, music: Music, _volume: f32) -> Result<(), AudioError> {
        self.log.borrow_mut().push(Played::Music(music));
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        self.log.borrow_mut().push(Played::Stop);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    FillCircle(Vec2, f32, Color),
    Text(String, Vec2, TextAnchor, f32, Color),
    Image(String, Vec2),
}

/// Records draw calls; only identifiers in `images` count as loaded.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    pub images: HashSet<String>,
}

impl RecordingRenderer {
    pub fn with_images(images: &[&str]) -> Self {
        Self {
            calls: Vec::new(),
            images: images.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillCircle(center, radius, color) => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::FillRect(rect, color));
        Ok(())
    }

    fn outline_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::OutlineRect(rect, color));
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::FillCircle(center, radius, color));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Vec2, anchor: TextAnchor, size: f32, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Text(text.to_string(), position, anchor, size, color));
        Ok(())
    }

    fn draw_image(&mut self, id: &str, center: Vec2) -> Result<(), RenderError> {
        if !self.images.contains(id) {
            return Err(RenderError::MissingImage(id.to_string()));
        }
        self.calls.push(DrawCall::Image(id.to_string(), center));
        Ok(())
    }
}

/// A seeded configuration on an obstacle-free board.
pub fn open_config() -> GameConfig {
    GameConfig {
        layout: Some(Grid::new(BOARD_CELL_SIZE)),
        seed: Some(7),
        ..GameConfig::default()
    }
}

pub fn create_test_game(config: GameConfig) -> (Game, RecordingAudio) {
    let audio = RecordingAudio::default();
    let game = Game::new(config, Box::new(audio.clone()));
    (game, audio)
}

/// A seeded configuration on `layout`, with the hero preferring (2,2).
pub fn layout_config(layout: Grid) -> GameConfig {
    GameConfig {
        layout: Some(layout),
        seed: Some(7),
        ..GameConfig::default()
    }
}

/// Starts a session and strips it down to the hero alone: no enemies, no coin, empty audio log.
pub fn start_bare_session(config: GameConfig) -> (Game, RecordingAudio) {
    let (mut game, audio) = create_test_game(config);
    game.command(GameCommand::StartGame);
    game.tick(0.0);
    clear_enemies(&mut game.world);
    game.world.insert_resource(Coin(None));
    audio.clear();
    (game, audio)
}

/// Starts a session on an open board with the hero on (2,2) and nothing else.
pub fn start_open_session() -> (Game, RecordingAudio) {
    start_bare_session(open_config())
}

/// A full-size board where only `free` cells are walkable.
pub fn walled_grid(free: &[IVec2]) -> Grid {
    let mut grid = Grid::new(BOARD_CELL_SIZE);
    let cells: Vec<IVec2> = grid.cells().collect();
    for cell in cells {
        grid.set_obstacle(cell, !free.contains(&cell));
    }
    grid
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    let mut events = world.resource_mut::<Events<GameEvent>>();
    events.send(event);
}

pub fn hero_entity(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<Hero>>()
        .single(world)
        .expect("exactly one hero")
}

pub fn hero(world: &mut World) -> Hero {
    *world.query::<&Hero>().single(world).expect("exactly one hero")
}

pub fn hero_motion(world: &mut World) -> Motion {
    *world
        .query_filtered::<&Motion, With<Hero>>()
        .single(world)
        .expect("exactly one hero")
}

pub fn set_hero(world: &mut World, update: impl FnOnce(&mut Hero)) {
    let entity = hero_entity(world);
    let mut hero = world.get_mut::<Hero>(entity).expect("hero component");
    update(&mut hero);
}

/// Teleports the hero onto `cell`, at rest.
pub fn place_hero(world: &mut World, cell: IVec2) {
    let entity = hero_entity(world);
    let speed = world.get::<Motion>(entity).expect("hero motion").speed;
    world.entity_mut(entity).insert(Motion::new(cell, speed));
}

pub fn clear_enemies(world: &mut World) {
    let enemies: Vec<Entity> = world.query_filtered::<Entity, With<Enemy>>().iter(world).collect();
    for entity in enemies {
        world.despawn(entity);
    }
}

pub fn spawn_test_enemy(world: &mut World, cell: IVec2, radius: u32) -> Entity {
    world
        .spawn(EnemyBundle {
            enemy: Enemy::new(cell, radius, mechanics::PATROL_INTERVAL),
            motion: Motion::new(cell, mechanics::ENEMY_SPEED),
            animation: CharacterAnimation::enemy().expect("valid enemy animation"),
        })
        .id()
}

pub fn enemy_motion(world: &World, entity: Entity) -> Motion {
    *world.get::<Motion>(entity).expect("enemy motion")
}
