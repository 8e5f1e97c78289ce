use glam::IVec2;
use pretty_assertions::assert_eq;
use roguelike::audio::Sound;
use roguelike::systems::components::{Coin, GameConfig};
use roguelike::systems::input::Controls;
use speculoos::prelude::*;

mod common;

fn coin(game: &roguelike::game::Game) -> Option<IVec2> {
    game.world.resource::<Coin>().0
}

#[test]
fn test_pickup_counts_and_respawns_elsewhere() {
    let (mut game, audio) = common::start_open_session();
    let enemy = IVec2::new(12, 10);
    common::spawn_test_enemy(&mut game.world, enemy, 4);
    game.world.insert_resource(Coin(Some(IVec2::new(2, 2))));

    game.tick(0.016);

    assert_eq!(common::hero(&mut game.world).coins, 1);
    assert_eq!(audio.sounds(), vec![Sound::Coin]);
    let respawned = coin(&game).expect("coin respawned");
    assert_that(&respawned).is_not_equal_to(IVec2::new(2, 2));
    assert_that(&respawned).is_not_equal_to(enemy);
}

#[test]
fn test_pickup_on_arrival_cell() {
    let layout = common::walled_grid(&[IVec2::new(2, 2), IVec2::new(3, 2)]);
    let config = GameConfig {
        enemy_count: 0,
        ..common::layout_config(layout)
    };
    let (mut game, audio) = common::create_test_game(config);
    game.command(roguelike::events::GameCommand::StartGame);
    game.tick(0.0);
    audio.clear();

    // The only cell left for the coin is beside the hero
    assert_eq!(coin(&game), Some(IVec2::new(3, 2)));

    game.set_controls(Controls::RIGHT);
    game.tick(0.016);

    // The logical cell changes on commit, so the coin is taken before the hero arrives visually
    assert_eq!(common::hero(&mut game.world).coins, 1);
    assert_eq!(coin(&game), Some(IVec2::new(2, 2)));
    assert_eq!(audio.sounds(), vec![Sound::Step, Sound::Coin]);
}

#[test]
fn test_no_respawn_without_free_cell() {
    let layout = common::walled_grid(&[IVec2::new(2, 2)]);
    let config = GameConfig {
        enemy_count: 0,
        ..common::layout_config(layout)
    };
    let (mut game, audio) = common::create_test_game(config);
    game.command(roguelike::events::GameCommand::StartGame);
    game.tick(0.0);
    assert_that(&coin(&game)).is_none();

    game.world.insert_resource(Coin(Some(IVec2::new(2, 2))));
    audio.clear();
    game.tick(0.016);

    assert_eq!(common::hero(&mut game.world).coins, 1);
    assert_that(&coin(&game)).is_none();

    // Nothing left to collect
    game.tick(0.016);
    assert_eq!(common::hero(&mut game.world).coins, 1);
    assert_eq!(audio.sounds(), vec![Sound::Coin]);
}

#[test]
fn test_coins_accumulate() {
    let (mut game, _audio) = common::start_open_session();

    for _ in 0..3 {
        game.world.insert_resource(Coin(Some(IVec2::new(2, 2))));
        game.tick(0.016);
    }

    assert_eq!(common::hero(&mut game.world).coins, 3);
}
