//! Image identifier tables for every animated character.
//!
//! Each table is indexed by [`Direction::as_usize`](crate::map::direction::Direction::as_usize), so rows
//! are ordered down, left, right, up.

/// Per-direction frame sequences.
pub type DirectionalFrames = [&'static [&'static str]; 4];

const HERO_IDLE_RIGHT: &[&str] = &["hero_idle_right", "hero_idle_right", "hero_idle_right"];
const HERO_IDLE_LEFT: &[&str] = &["hero_idle_left", "hero_idle_left", "hero_idle_left"];
const HERO_MOVING: &[&str] = &["hero_move_1", "hero_move_2", "hero_move_3", "hero_move_4"];
const HERO_MOVING_LEFT: &[&str] = &["hero_move_left_1", "hero_move_left_2", "hero_move_left_3", "hero_move_left_4"];

const ENEMY_IDLE_RIGHT: &[&str] = &["enemy_idle_right", "enemy_idle_right", "enemy_idle_right"];
const ENEMY_IDLE_LEFT: &[&str] = &["enemy_idle_left", "enemy_idle_left", "enemy_idle_left"];
const ENEMY_MOVING: &[&str] = &["enemy_move_1", "enemy_move_2", "enemy_move_3", "enemy_move_4"];
const ENEMY_MOVING_LEFT: &[&str] = &["enemy_move_left_1", "enemy_move_left_2", "enemy_move_left_3", "enemy_move_left_4"];

// Only left-facing art exists; every other facing reuses the right-facing frames.
pub static HERO_IDLE: DirectionalFrames = [HERO_IDLE_RIGHT, HERO_IDLE_LEFT, HERO_IDLE_RIGHT, HERO_IDLE_RIGHT];
pub static HERO_MOVE: DirectionalFrames = [HERO_MOVING, HERO_MOVING_LEFT, HERO_MOVING, HERO_MOVING];

pub static ENEMY_IDLE: DirectionalFrames = [ENEMY_IDLE_RIGHT, ENEMY_IDLE_LEFT, ENEMY_IDLE_RIGHT, ENEMY_IDLE_RIGHT];
pub static ENEMY_MOVE: DirectionalFrames = [ENEMY_MOVING, ENEMY_MOVING_LEFT, ENEMY_MOVING, ENEMY_MOVING];

/// The coin image identifier.
pub const COIN: &str = "coin";
