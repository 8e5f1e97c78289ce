//! Held-key state and menu hit-testing.

use bevy_ecs::resource::Resource;
use bitflags::bitflags;
use glam::Vec2;

use crate::{
    constants::{ui, WINDOW_SIZE},
    map::direction::Direction,
    render::Rect,
};

bitflags! {
    /// Keys held down this frame, written by the host before each update.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Controls: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// Confirms the game-over screen.
        const CONFIRM = 1 << 4;
    }
}

impl Controls {
    /// The single direction acted on this frame, checked in the order up, down, left, right.
    pub fn intent(self) -> Option<Direction> {
        [
            (Controls::UP, Direction::Up),
            (Controls::DOWN, Direction::Down),
            (Controls::LEFT, Direction::Left),
            (Controls::RIGHT, Direction::Right),
        ]
        .into_iter()
        .find_map(|(flag, direction)| self.contains(flag).then_some(direction))
    }
}

/// The three stacked menu buttons, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Start,
    Audio,
    Exit,
}

impl MenuButton {
    pub const ALL: [MenuButton; 3] = [MenuButton::Start, MenuButton::Audio, MenuButton::Exit];

    /// The button's screen rectangle, centered horizontally.
    pub fn rect(self) -> Rect {
        let index = self as usize as f32;
        let left = (WINDOW_SIZE.x as f32 - ui::MENU_BUTTON_SIZE.x) / 2.0;
        Rect::new(
            left,
            ui::MENU_TOP + index * ui::MENU_BUTTON_SPACING,
            ui::MENU_BUTTON_SIZE.x,
            ui::MENU_BUTTON_SIZE.y,
        )
    }

    /// The button under a window position, if any.
    pub fn at(position: Vec2) -> Option<MenuButton> {
        Self::ALL.into_iter().find(|button| button.rect().contains(position))
    }
}
