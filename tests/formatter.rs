use roguelike::formatter::get_tick_count;
use roguelike::game::Game;
use roguelike::audio::NullAudio;
use speculoos::prelude::*;

mod common;

#[test]
fn test_tick_counter_advances_per_update() {
    let mut game = Game::new(common::open_config(), Box::new(NullAudio));
    let before = get_tick_count();

    game.tick(0.016);
    game.tick(0.016);

    // Other tests share the counter, so only a lower bound holds
    assert_that(&(get_tick_count() - before)).is_greater_than_or_equal_to(2);
}
