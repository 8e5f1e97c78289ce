//! The obstacle grid a session is played on.

use bevy_ecs::resource::Resource;
use glam::{IVec2, UVec2};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::constants::BOARD_CELL_SIZE;

/// A fixed-size boolean obstacle map, row-major, with (0,0) at the top-left.
///
/// Generated once per session and never mutated afterwards.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: UVec2,
    obstacles: Vec<bool>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_CELL_SIZE)
    }
}

impl Grid {
    /// Creates an obstacle-free grid.
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            obstacles: vec![false; (size.x * size.y) as usize],
        }
    }

    /// Creates a grid with `placements` uniformly random obstacle placements.
    ///
    /// Placements may land on the same cell, so the obstacle count is at most `placements`.
    pub fn generate<R: Rng>(size: UVec2, placements: usize, rng: &mut R) -> Self {
        let mut grid = Self::new(size);
        if size.x == 0 || size.y == 0 {
            return grid;
        }
        for _ in 0..placements {
            let cell = IVec2::new(rng.random_range(0..size.x as i32), rng.random_range(0..size.y as i32));
            grid.set_obstacle(cell, true);
        }
        debug!(placements, obstacles = grid.obstacle_count(), "Generated grid");
        grid
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x as i32
    }

    pub fn height(&self) -> i32 {
        self.size.y as i32
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.size.x as usize + cell.x as usize)
    }

    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width() && cell.y < self.height()
    }

    /// Returns `true` if the cell holds an obstacle. Out-of-bounds cells are not obstacles.
    pub fn is_obstacle(&self, cell: IVec2) -> bool {
        self.index(cell).is_some_and(|i| self.obstacles[i])
    }

    /// Returns `true` if a character may stand on the cell.
    pub fn is_walkable(&self, cell: IVec2) -> bool {
        self.in_bounds(cell) && !self.is_obstacle(cell)
    }

    /// Marks or clears an obstacle; out-of-bounds cells are ignored.
    pub fn set_obstacle(&mut self, cell: IVec2, obstacle: bool) {
        if let Some(i) = self.index(cell) {
            self.obstacles[i] = obstacle;
        }
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.iter().filter(|&&o| o).count()
    }

    /// Clamps a cell into the grid bounds.
    pub fn clamp(&self, cell: IVec2) -> IVec2 {
        let max = (self.size.as_ivec2() - IVec2::ONE).max(IVec2::ZERO);
        cell.clamp(IVec2::ZERO, max)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (0..self.height()).flat_map(move |y| (0..self.width()).map(move |x| IVec2::new(x, y)))
    }

    /// Iterates over the obstacle-free cells within `min..size`, skipping any in `exclude`.
    pub fn free_cells<'a>(&'a self, min: IVec2, exclude: &'a [IVec2]) -> impl Iterator<Item = IVec2> + 'a {
        self.cells()
            .filter(move |cell| cell.cmpge(min).all())
            .filter(move |cell| !self.is_obstacle(*cell) && !exclude.contains(cell))
    }

    /// Picks a uniformly random obstacle-free cell at or beyond `min`, or `None` if there is none.
    pub fn random_free_cell<R: Rng>(&self, min: IVec2, rng: &mut R) -> Option<IVec2> {
        let candidates: Vec<IVec2> = self.free_cells(min, &[]).collect();
        candidates.choose(rng).copied()
    }

    /// Picks a uniformly random free cell for the coin, avoiding occupied cells.
    ///
    /// Returns `None` when every free cell is excluded.
    pub fn spawn_coin<R: Rng>(&self, exclude: &[IVec2], rng: &mut R) -> Option<IVec2> {
        let candidates: Vec<IVec2> = self.free_cells(IVec2::ZERO, exclude).collect();
        candidates.choose(rng).copied()
    }
}
