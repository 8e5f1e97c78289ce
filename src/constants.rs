//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{IVec2, UVec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window, in pixels.
pub const WINDOW_SIZE: UVec2 = UVec2::new(800, 600);

/// The size of each cell, in pixels.
pub const CELL_SIZE: u32 = 40;

/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(WINDOW_SIZE.x / CELL_SIZE, WINDOW_SIZE.y / CELL_SIZE);

/// Gameplay tuning.
pub mod mechanics {
    use super::IVec2;

    /// Hero movement speed, in pixels per second.
    pub const HERO_SPEED: f32 = 240.0;
    /// Enemy movement speed, in pixels per second.
    pub const ENEMY_SPEED: f32 = 120.0;

    pub const HERO_MAX_HEALTH: u32 = 100;
    /// Health lost per registered enemy hit.
    pub const HIT_DAMAGE: u32 = 5;
    /// Seconds of invulnerability after a hit.
    pub const DAMAGE_COOLDOWN: f32 = 0.45;

    pub const ENEMY_COUNT: usize = 4;
    /// Manhattan distance governing both pursuit and patrol containment.
    pub const ENEMY_RADIUS: u32 = 4;
    /// Seconds between patrol decisions.
    pub const PATROL_INTERVAL: f32 = 1.0;

    /// Number of random obstacle placements per generated grid (duplicates collapse).
    pub const OBSTACLE_PLACEMENTS: usize = 25;

    /// The cell the hero spawns on whenever it is free.
    pub const HERO_PREFERRED_START: IVec2 = IVec2::new(2, 2);
    /// Enemies only spawn on cells with both coordinates at or beyond this corner.
    pub const ENEMY_SPAWN_MIN: IVec2 = IVec2::new(5, 5);
}

/// Frame durations for character animations, in seconds.
pub mod animation {
    pub const IDLE_FRAME_DURATION: f32 = 0.4;
    pub const MOVING_FRAME_DURATION: f32 = 0.12;
}

/// Menu, HUD and overlay layout.
pub mod ui {
    use glam::Vec2;

    pub const MENU_TITLE_Y: f32 = 120.0;
    pub const MENU_TOP: f32 = 240.0;
    pub const MENU_BUTTON_SIZE: Vec2 = Vec2::new(260.0, 56.0);
    /// Vertical distance between the top edges of consecutive menu buttons.
    pub const MENU_BUTTON_SPACING: f32 = 90.0;

    pub const TITLE_FONT_SIZE: f32 = 56.0;
    pub const BUTTON_FONT_SIZE: f32 = 34.0;
    pub const TOGGLE_FONT_SIZE: f32 = 24.0;
    pub const HUD_FONT_SIZE: f32 = 28.0;
    pub const HINT_FONT_SIZE: f32 = 22.0;

    pub const HUD_POSITION: Vec2 = Vec2::new(10.0, 10.0);
}

/// Playback defaults.
pub mod audio {
    /// Global volume multiplier applied to both music and sound effects.
    pub const GLOBAL_VOLUME: f32 = 0.25;
}

/// Returns the pixel-space center of a grid cell.
pub fn cell_center(cell: IVec2) -> glam::Vec2 {
    let half = (CELL_SIZE / 2) as i32;
    (cell * CELL_SIZE as i32 + IVec2::splat(half)).as_vec2()
}
