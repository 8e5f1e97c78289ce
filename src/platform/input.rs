use sdl2::keyboard::{KeyboardState, Scancode};

use crate::systems::input::Controls;

/// Arrow keys and WASD both steer; SPACE confirms.
const BINDINGS: [(Scancode, Controls); 9] = [
    (Scancode::Up, Controls::UP),
    (Scancode::W, Controls::UP),
    (Scancode::Down, Controls::DOWN),
    (Scancode::S, Controls::DOWN),
    (Scancode::Left, Controls::LEFT),
    (Scancode::A, Controls::LEFT),
    (Scancode::Right, Controls::RIGHT),
    (Scancode::D, Controls::RIGHT),
    (Scancode::Space, Controls::CONFIRM),
];

/// Reads the held keys into the controls the simulation understands.
pub fn controls(keyboard: &KeyboardState) -> Controls {
    BINDINGS
        .iter()
        .filter(|(scancode, _)| keyboard.is_scancode_pressed(*scancode))
        .fold(Controls::empty(), |controls, (_, flag)| controls | *flag)
}
