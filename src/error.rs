//! Centralized error types for the game.
//!
//! Only initialization and host-layer failures surface as `GameError`. Missing images and sounds are
//! reported by the capability traits and recovered locally by their callers; blocked moves are not
//! errors at all.

use bevy_ecs::event::Event;

/// Main error type for the game.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while building animation tables.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AnimationError {
    #[error("Frame duration must be positive and finite, got {0}")]
    InvalidFrameDuration(f32),
}

/// Error type for board layout parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),
    #[error("Board row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Board has no rows")]
    Empty,
}

/// Failures reported by a [`Renderer`](crate::render::Renderer).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("No image loaded for identifier: {0}")]
    MissingImage(String),
    #[error("Rendering failed: {0}")]
    Failed(String),
}

/// Failures reported by an [`AudioBackend`](crate::audio::AudioBackend).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AudioError {
    #[error("Audio device unavailable")]
    Unavailable,
    #[error("No sound loaded for identifier: {0}")]
    MissingSound(&'static str),
    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
