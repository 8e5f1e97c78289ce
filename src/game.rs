//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use glam::Vec2;
use tracing::{debug, info, warn};

use crate::audio::AudioBackend;
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::formatter;
use crate::map::grid::Grid;
use crate::render::{self, Renderer, Scene};
use crate::systems::{
    audio::{audio_system, AudioEvent, AudioResource, AudioSettings},
    collision::contact_damage_system,
    components::{Coin, DeltaTime, GameConfig, GameRng, GlobalState},
    enemy::{enemy_ai_system, Enemy},
    input::Controls,
    item::coin_pickup_system,
    movement::movement_system,
    player::{hero_cooldown_system, hero_input_system, Hero},
    stage::{stage_system, GameStage},
};

/// System set for gameplay systems, which only run while a session is in progress.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Hero cooldown, input, motion and coin pickup
    Hero,
    /// Enemy decisions, motion and contact damage
    Enemies,
}

/// Owns the session world and runs one update per host frame.
///
/// The schedule runs in a fixed order: stage handling, hero cooldown, hero input, hero motion, coin
/// pickup, enemy AI, enemy motion, contact damage, then audio dispatch. The audio backend is stored as
/// `NonSend`, since SDL2_mixer handles must stay on the main thread.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the world in the menu stage.
    pub fn new(config: GameConfig, audio: Box<dyn AudioBackend>) -> Game {
        info!(seed = ?config.seed, muted = config.muted, "Starting game initialization");

        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, config, audio);
        Self::configure_schedule(&mut schedule);

        debug!("Game initialization completed");
        Game { world, schedule }
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<AudioEvent>(world);
    }

    fn insert_resources(world: &mut World, config: GameConfig, audio: Box<dyn AudioBackend>) {
        let settings = if config.muted {
            AudioSettings::muted()
        } else {
            AudioSettings::default()
        };

        world.insert_non_send_resource(AudioResource(audio));
        world.insert_resource(GameRng::new(config.seed));
        world.insert_resource(Grid::new(config.board_size()));
        world.insert_resource(config);
        world.insert_resource(settings);
        world.insert_resource(GameStage::default());
        world.insert_resource(GlobalState::default());
        world.insert_resource(Coin::default());
        world.insert_resource(Controls::default());
        world.insert_resource(DeltaTime::default());
    }

    fn configure_schedule(schedule: &mut Schedule) {
        let playing = |stage: Res<GameStage>| *stage == GameStage::Playing;

        schedule
            .add_systems((
                stage_system.before(GameplaySet::Hero),
                (
                    hero_cooldown_system,
                    hero_input_system,
                    movement_system::<Hero>,
                    coin_pickup_system,
                )
                    .chain()
                    .in_set(GameplaySet::Hero),
                (enemy_ai_system, movement_system::<Enemy>, contact_damage_system)
                    .chain()
                    .in_set(GameplaySet::Enemies),
                audio_system.after(GameplaySet::Enemies),
            ))
            .configure_sets((
                GameplaySet::Hero.run_if(playing),
                GameplaySet::Enemies.after(GameplaySet::Hero).run_if(playing),
            ));
    }

    /// Runs one update with `dt` seconds elapsed.
    ///
    /// Returns `true` once an exit has been requested.
    pub fn tick(&mut self, dt: f32) -> bool {
        formatter::increment_tick();
        self.world.insert_resource(DeltaTime(dt));
        self.schedule.run(&mut self.world);

        for error in self.world.resource_mut::<Events<GameError>>().drain() {
            warn!("Game error: {}", error);
        }
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();

        self.world.resource::<GlobalState>().exit
    }

    /// Replaces the held-key state read by the next update.
    pub fn set_controls(&mut self, controls: Controls) {
        self.world.insert_resource(controls);
    }

    /// Queues an event for the next update.
    pub fn send(&mut self, event: impl Into<GameEvent>) {
        self.world.resource_mut::<Events<GameEvent>>().send(event.into());
    }

    /// Queues a mouse click at a window position.
    pub fn click(&mut self, position: Vec2) {
        self.send(GameEvent::Click(position));
    }

    /// Queues a command for the next update.
    pub fn command(&mut self, command: GameCommand) {
        self.send(command);
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn audio_settings(&self) -> AudioSettings {
        *self.world.resource::<AudioSettings>()
    }

    /// A read-only snapshot of the current frame's state.
    pub fn scene(&mut self) -> Scene<'_> {
        Scene::capture(&mut self.world)
    }

    /// Draws the current frame.
    ///
    /// # Errors
    ///
    /// Propagates renderer failures other than missing images, which degrade to placeholders.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) -> GameResult<()> {
        let scene = self.scene();
        render::draw_frame(renderer, &scene)?;
        Ok(())
    }
}
