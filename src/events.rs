use bevy_ecs::prelude::*;
use glam::Vec2;

/// Discrete requests from the host or the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Leave the menu and begin a fresh session.
    StartGame,
    /// Flip music and sound effects together.
    ToggleAudio,
    /// Return from the game-over screen to the menu.
    ReturnToMenu,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Command(GameCommand),
    /// A mouse click at a window position, in pixels.
    Click(Vec2),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
