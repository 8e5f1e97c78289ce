use glam::{IVec2, UVec2};
use pretty_assertions::assert_eq;
use roguelike::audio::Sound;
use roguelike::constants::BOARD_CELL_SIZE;
use roguelike::map::direction::Direction;
use roguelike::map::grid::Grid;
use roguelike::systems::input::Controls;
use roguelike::systems::movement::Motion;
use roguelike::systems::player::{handle_input, Hero, HitOutcome};
use speculoos::prelude::*;

mod common;

#[test]
fn test_handle_input_commits_step() {
    let grid = Grid::new(UVec2::new(5, 5));
    let mut motion = Motion::new(IVec2::new(2, 2), 240.0);

    assert_that(&handle_input(&mut motion, &grid, Some(Direction::Right))).is_true();
    assert_eq!(motion.cell, IVec2::new(3, 2));
    assert_eq!(motion.direction, Direction::Right);
}

#[test]
fn test_handle_input_blocked_still_turns() {
    let mut grid = Grid::new(UVec2::new(5, 5));
    grid.set_obstacle(IVec2::new(2, 1), true);
    let mut motion = Motion::new(IVec2::new(2, 2), 240.0);

    assert_that(&handle_input(&mut motion, &grid, Some(Direction::Up))).is_false();
    assert_eq!(motion.cell, IVec2::new(2, 2));
    assert_eq!(motion.direction, Direction::Up);
    assert_that(&motion.moving).is_false();
}

#[test]
fn test_handle_input_at_border_is_clamped() {
    let grid = Grid::new(UVec2::new(5, 5));
    let mut motion = Motion::new(IVec2::new(0, 4), 240.0);

    assert_that(&handle_input(&mut motion, &grid, Some(Direction::Left))).is_false();
    assert_that(&handle_input(&mut motion, &grid, Some(Direction::Down))).is_false();
    assert_eq!(motion.cell, IVec2::new(0, 4));
    assert_eq!(motion.direction, Direction::Down);
}

#[test]
fn test_handle_input_ignored_while_moving() {
    let grid = Grid::new(UVec2::new(5, 5));
    let mut motion = Motion::new(IVec2::new(2, 2), 240.0);
    handle_input(&mut motion, &grid, Some(Direction::Right));

    assert_that(&handle_input(&mut motion, &grid, Some(Direction::Down))).is_false();
    assert_eq!(motion.cell, IVec2::new(3, 2));
    assert_eq!(motion.direction, Direction::Right);
}

#[test]
fn test_handle_input_without_intent() {
    let grid = Grid::new(UVec2::new(5, 5));
    let mut motion = Motion::new(IVec2::new(2, 2), 240.0);
    motion.direction = Direction::Left;

    assert_that(&handle_input(&mut motion, &grid, None)).is_false();
    assert_eq!(motion.direction, Direction::Left);
}

#[test]
fn test_hit_starts_cooldown() {
    let mut hero = Hero::new(100, 0.45);

    assert_eq!(hero.apply_hit(5), HitOutcome::Damaged);
    assert_eq!(hero.health, 95);
    assert_eq!(hero.damage_timer, 0.45);

    assert_eq!(hero.apply_hit(5), HitOutcome::Ignored);
    assert_eq!(hero.health, 95);

    hero.tick_cooldown(0.45);
    assert_eq!(hero.damage_timer, 0.0);
    assert_eq!(hero.apply_hit(5), HitOutcome::Damaged);
    assert_eq!(hero.health, 90);
}

#[test]
fn test_up_wins_over_other_keys() {
    let (mut game, audio) = common::start_open_session();
    game.set_controls(Controls::UP | Controls::LEFT | Controls::RIGHT);
    game.tick(0.016);

    let motion = common::hero_motion(&mut game.world);
    assert_eq!(motion.cell, IVec2::new(2, 1));
    assert_eq!(motion.direction, Direction::Up);
    assert_that(&motion.moving).is_true();
    assert_eq!(audio.sounds(), vec![Sound::Step]);
}

#[test]
fn test_step_into_obstacle_turns_without_sound() {
    let mut layout = Grid::new(BOARD_CELL_SIZE);
    layout.set_obstacle(IVec2::new(3, 2), true);
    let (mut game, audio) = common::start_bare_session(common::layout_config(layout));

    game.set_controls(Controls::RIGHT);
    game.tick(0.016);

    let motion = common::hero_motion(&mut game.world);
    assert_eq!(motion.cell, IVec2::new(2, 2));
    assert_eq!(motion.direction, Direction::Right);
    assert_that(&audio.sounds()).is_empty();
}

#[test]
fn test_held_key_steps_once_per_cell() {
    let (mut game, audio) = common::start_open_session();
    game.set_controls(Controls::DOWN);

    // A cell takes 1/6s at 240px/s; the second step is accepted on the frame after arrival.
    for _ in 0..12 {
        game.tick(0.02);
    }

    let motion = common::hero_motion(&mut game.world);
    assert_eq!(motion.cell, IVec2::new(2, 4));
    assert_eq!(audio.sounds(), vec![Sound::Step, Sound::Step]);
}

#[test]
fn test_cooldown_ticks_during_play() {
    let (mut game, _audio) = common::start_open_session();
    common::set_hero(&mut game.world, |hero| hero.damage_timer = 0.3);

    game.tick(0.25);
    let hero = common::hero(&mut game.world);
    assert!((hero.damage_timer - 0.05).abs() < 1e-6);

    game.tick(0.25);
    assert_eq!(common::hero(&mut game.world).damage_timer, 0.0);
}
