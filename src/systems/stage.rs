//! The top-level menu, playing and game-over state machine, and session setup.

use bevy_ecs::{
    entity::Entity,
    event::{EventReader, EventWriter},
    query::{Or, With},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use glam::IVec2;
use rand::Rng;
use smallvec::SmallVec;
use strum_macros::AsRefStr;
use tracing::{debug, error, info};

use crate::{
    audio::{Music, Sound},
    error::{GameError, GameResult},
    events::{GameCommand, GameEvent},
    map::grid::Grid,
    systems::{
        audio::{AudioEvent, AudioSettings},
        components::{CharacterAnimation, Coin, EnemyBundle, GameConfig, GameRng, GlobalState, HeroBundle},
        enemy::Enemy,
        input::{Controls, MenuButton},
        movement::Motion,
        player::Hero,
    },
};

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
pub enum GameStage {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// Where everything starts in a new session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub grid: Grid,
    pub hero: IVec2,
    pub enemies: Vec<IVec2>,
    pub coin: Option<IVec2>,
}

/// Lays out a new session: board, hero, enemies and coin.
///
/// The hero takes its preferred start when that cell is free, otherwise a uniformly random free cell.
/// Enemies draw from the free cells at or beyond `enemy_spawn_min` and may share cells. The coin avoids
/// every character.
///
/// # Errors
///
/// Returns [`GameError::InvalidState`] if the board has no free cell for the hero or an enemy.
pub fn plan_session<R: Rng>(config: &GameConfig, rng: &mut R) -> GameResult<SessionPlan> {
    let grid = match &config.layout {
        Some(layout) => layout.clone(),
        None => Grid::generate(config.board_size(), config.obstacle_placements, rng),
    };

    let hero = if grid.is_walkable(config.hero_start) {
        config.hero_start
    } else {
        grid.random_free_cell(IVec2::ZERO, rng)
            .ok_or_else(|| GameError::InvalidState("No free cell for the hero".into()))?
    };

    let enemies = (0..config.enemy_count)
        .map(|_| {
            grid.random_free_cell(config.enemy_spawn_min, rng)
                .ok_or_else(|| GameError::InvalidState("No free cell for an enemy".into()))
        })
        .collect::<GameResult<Vec<IVec2>>>()?;

    let occupied: SmallVec<[IVec2; 8]> = std::iter::once(hero).chain(enemies.iter().copied()).collect();
    let coin = grid.spawn_coin(&occupied, rng);

    Ok(SessionPlan {
        grid,
        hero,
        enemies,
        coin,
    })
}

/// Builds the spawn bundles for a planned session.
pub fn session_bundles(config: &GameConfig, plan: &SessionPlan) -> GameResult<(HeroBundle, Vec<EnemyBundle>)> {
    let hero = HeroBundle {
        hero: Hero::new(config.max_health, config.damage_cooldown),
        motion: Motion::new(plan.hero, config.hero_speed),
        animation: CharacterAnimation::hero()?,
    };

    let enemies = plan
        .enemies
        .iter()
        .map(|&cell| {
            Ok(EnemyBundle {
                enemy: Enemy::new(cell, config.enemy_radius, config.patrol_interval),
                motion: Motion::new(cell, config.enemy_speed),
                animation: CharacterAnimation::enemy()?,
            })
        })
        .collect::<GameResult<Vec<_>>>()?;

    Ok((hero, enemies))
}

/// Handles menu clicks, stage commands and the game-over confirm key.
///
/// Menu clicks queue their click sound before acting. Audio is gated when dispatched at the end of the
/// frame, so the click after switching audio off stays silent.
#[allow(clippy::too_many_arguments)]
pub fn stage_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    controls: Res<Controls>,
    config: Res<GameConfig>,
    mut stage: ResMut<GameStage>,
    mut state: ResMut<GlobalState>,
    mut settings: ResMut<AudioSettings>,
    mut grid: ResMut<Grid>,
    mut coin: ResMut<Coin>,
    mut rng: ResMut<GameRng>,
    characters: Query<Entity, Or<(With<Hero>, With<Enemy>)>>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let mut pending: SmallVec<[GameCommand; 4]> = SmallVec::new();
    for event in events.read() {
        match *event {
            GameEvent::Command(command) => pending.push(command),
            GameEvent::Click(position) if *stage == GameStage::Menu => {
                if let Some(button) = MenuButton::at(position) {
                    debug!(?button, "Menu button clicked");
                    audio_events.write(AudioEvent::PlaySound(Sound::ButtonClick));
                    pending.push(match button {
                        MenuButton::Start => GameCommand::StartGame,
                        MenuButton::Audio => GameCommand::ToggleAudio,
                        MenuButton::Exit => GameCommand::Exit,
                    });
                }
            }
            GameEvent::Click(_) => {}
        }
    }
    if *stage == GameStage::GameOver && controls.contains(Controls::CONFIRM) {
        pending.push(GameCommand::ReturnToMenu);
    }

    for command in pending {
        match (command, *stage) {
            (GameCommand::StartGame, GameStage::Menu) => {
                let session = plan_session(&config, &mut rng.0).and_then(|plan| {
                    let bundles = session_bundles(&config, &plan)?;
                    Ok((plan, bundles))
                });
                let (plan, (hero, enemies)) = match session {
                    Ok(session) => session,
                    Err(e) => {
                        error!("Failed to start session: {}", e);
                        continue;
                    }
                };

                for entity in characters.iter() {
                    commands.entity(entity).despawn();
                }
                info!(hero = ?plan.hero, enemies = ?plan.enemies, coin = ?plan.coin, "Session started");
                *grid = plan.grid;
                coin.0 = plan.coin;
                commands.spawn(hero);
                commands.spawn_batch(enemies);
                *stage = GameStage::Playing;
                audio_events.write(AudioEvent::PlayMusic(Music::Background));
            }
            (GameCommand::ToggleAudio, GameStage::Menu) => {
                let enabled = settings.toggle();
                debug!(enabled, "Audio toggled");
                audio_events.write(if enabled {
                    AudioEvent::PlayMusic(Music::Background)
                } else {
                    AudioEvent::StopMusic
                });
            }
            (GameCommand::ReturnToMenu, GameStage::GameOver) => {
                for entity in characters.iter() {
                    commands.entity(entity).despawn();
                }
                coin.0 = None;
                *stage = GameStage::Menu;
                audio_events.write(AudioEvent::StopMusic);
                info!("Returned to menu");
            }
            (GameCommand::Exit, _) => {
                info!("Exit requested");
                state.exit = true;
            }
            (command, current) => {
                debug!(?command, stage = current.as_ref(), "Command ignored in this stage");
            }
        }
    }
}
