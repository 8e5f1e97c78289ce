//! Desktop host services: frame pacing, SDL2 drawing and keyboard polling.

use std::time::Duration;

pub mod canvas;
pub mod input;

/// Sleeps for the rest of the frame, spinning for precision only while the window has focus.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}
