use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, Res, ResMut},
};
use glam::IVec2;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    audio::Sound,
    error::GameError,
    map::grid::Grid,
    systems::{
        audio::AudioEvent,
        components::{Coin, GameRng},
        enemy::Enemy,
        movement::Motion,
        player::Hero,
    },
};

/// Collects the coin when the hero stands on it and respawns it away from every character.
pub fn coin_pickup_system(
    grid: Res<Grid>,
    mut coin: ResMut<Coin>,
    mut rng: ResMut<GameRng>,
    mut heroes: Query<(&Motion, &mut Hero)>,
    enemies: Query<&Motion, With<Enemy>>,
    mut audio_events: EventWriter<AudioEvent>,
    mut errors: EventWriter<GameError>,
) {
    let (motion, mut hero) = match heroes.single_mut() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for coin pickup system: {}",
                e
            )));
            return;
        }
    };

    if coin.0 != Some(motion.cell) {
        return;
    }

    hero.coins += 1;
    audio_events.write(AudioEvent::PlaySound(Sound::Coin));

    let occupied: SmallVec<[IVec2; 8]> = std::iter::once(motion.cell)
        .chain(enemies.iter().map(|enemy| enemy.cell))
        .collect();
    coin.0 = grid.spawn_coin(&occupied, &mut rng.0);
    debug!(coins = hero.coins, respawned = ?coin.0, "Coin collected");
}
