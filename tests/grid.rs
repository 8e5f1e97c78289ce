use glam::{IVec2, UVec2};
use pretty_assertions::assert_eq;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use roguelike::constants::BOARD_CELL_SIZE;
use roguelike::map::grid::Grid;
use roguelike::map::parser::GridParser;
use speculoos::prelude::*;

#[test]
fn test_generate_is_deterministic_for_a_seed() {
    let a = Grid::generate(BOARD_CELL_SIZE, 25, &mut SmallRng::seed_from_u64(42));
    let b = Grid::generate(BOARD_CELL_SIZE, 25, &mut SmallRng::seed_from_u64(42));
    assert_eq!(a, b);
    assert_eq!(a.size(), UVec2::new(20, 15));
}

#[test]
fn test_generate_with_no_placements_is_open() {
    let grid = Grid::generate(BOARD_CELL_SIZE, 0, &mut SmallRng::seed_from_u64(1));
    assert_eq!(grid.obstacle_count(), 0);
}

#[test]
fn test_free_cells_skips_obstacles_and_exclusions() {
    let grid = GridParser::parse_board(&["#..", "...", "..#"]).unwrap();
    let exclude = [IVec2::new(1, 1)];

    let free: Vec<IVec2> = grid.free_cells(IVec2::ZERO, &exclude).collect();

    assert_eq!(free.len(), 6);
    assert_that(&free).does_not_contain(IVec2::new(0, 0));
    assert_that(&free).does_not_contain(IVec2::new(2, 2));
    assert_that(&free).does_not_contain(IVec2::new(1, 1));
}

#[test]
fn test_free_cells_honours_minimum_corner() {
    let grid = Grid::new(UVec2::new(4, 4));
    let free: Vec<IVec2> = grid.free_cells(IVec2::new(2, 3), &[]).collect();
    assert_eq!(free, vec![IVec2::new(2, 3), IVec2::new(3, 3)]);
}

#[test]
fn test_spawn_coin_with_one_free_cell() {
    let grid = GridParser::parse_board(&["###", "#..", "###"]).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);

    for _ in 0..10 {
        let coin = grid.spawn_coin(&[IVec2::new(1, 1)], &mut rng);
        assert_eq!(coin, Some(IVec2::new(2, 1)));
    }
}

#[test]
fn test_spawn_coin_without_free_cells() {
    let grid = GridParser::parse_board(&["##", "#."]).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);

    assert_that(&grid.spawn_coin(&[IVec2::new(1, 1)], &mut rng)).is_none();
}

#[test]
fn test_random_free_cell_on_full_board() {
    let grid = GridParser::parse_board(&["##", "##"]).unwrap();
    let mut rng = SmallRng::seed_from_u64(9);

    assert_that(&grid.random_free_cell(IVec2::ZERO, &mut rng)).is_none();
}
