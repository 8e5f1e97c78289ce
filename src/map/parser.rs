//! Textual board layouts, used for fixed maps and test fixtures.

use glam::{IVec2, UVec2};

use crate::error::ParseError;
use crate::map::grid::Grid;

/// Parser for converting raw board layouts into a [`Grid`].
///
/// `#` marks an obstacle; `.` and ` ` mark free cells. Every row must have the same width.
pub struct GridParser;

impl GridParser {
    /// Parses a single character into an obstacle flag.
    pub fn parse_character(c: char) -> Result<bool, ParseError> {
        match c {
            '#' => Ok(true),
            '.' | ' ' => Ok(false),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into a grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, contains unknown characters, or has rows of differing widths.
    pub fn parse_board(raw_board: &[&str]) -> Result<Grid, ParseError> {
        let first = raw_board.first().ok_or(ParseError::Empty)?;
        let width = first.chars().count();
        let mut grid = Grid::new(UVec2::new(width as u32, raw_board.len() as u32));

        for (y, line) in raw_board.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, character) in line.chars().enumerate() {
                if Self::parse_character(character)? {
                    grid.set_obstacle(IVec2::new(x as i32, y as i32), true);
                }
            }
        }

        Ok(grid)
    }
}
