use bevy_ecs::{
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::{
    audio::Sound,
    error::GameError,
    systems::{
        audio::AudioEvent,
        components::GameConfig,
        enemy::Enemy,
        movement::Motion,
        player::{Hero, HitOutcome},
        stage::GameStage,
    },
};

/// Resolves enemies sharing the hero's cell into hits.
///
/// Each overlapping enemy attempts a hit in turn; the first one to land restarts the cooldown, so the
/// rest are ignored for that frame. A killing hit ends the session immediately.
pub fn contact_damage_system(
    config: Res<GameConfig>,
    mut stage: ResMut<GameStage>,
    mut heroes: Query<(&Motion, &mut Hero)>,
    enemies: Query<&Motion, (With<Enemy>, Without<Hero>)>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    let (hero_motion, mut hero) = match heroes.single_mut() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for contact damage system: {}",
                e
            )));
            return;
        }
    };

    for enemy in enemies.iter().filter(|enemy| enemy.cell == hero_motion.cell) {
        match hero.apply_hit(config.hit_damage) {
            HitOutcome::Ignored => {}
            HitOutcome::Damaged => {
                debug!(health = hero.health, cell = ?enemy.cell, "Hero hit");
                audio_events.write(AudioEvent::PlaySound(Sound::Hit));
            }
            HitOutcome::Killed => {
                audio_events.write(AudioEvent::PlaySound(Sound::Hit));
                audio_events.write(AudioEvent::PlaySound(Sound::GameOver));
                info!(coins = hero.coins, "Hero died, game over");
                *stage = GameStage::GameOver;
            }
        }
    }
}
