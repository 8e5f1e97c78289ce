//! This module contains all the code related to the game board.

pub mod direction;
pub mod grid;
pub mod parser;
