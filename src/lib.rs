//! Simple roguelike game library crate.
//!
//! The simulation runs headless; the SDL2 host (`app`, `platform`) is behind the `sdl` feature.

#[cfg(feature = "sdl")]
pub mod app;
pub mod audio;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod map;
#[cfg(feature = "sdl")]
pub mod platform;
pub mod render;
pub mod systems;
pub mod texture;
