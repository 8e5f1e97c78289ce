use glam::IVec2;
use strum_macros::AsRefStr;

/// The facing of a character, which also selects its animation set.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, AsRefStr)]
#[repr(usize)]
pub enum Direction {
    #[default]
    Down,
    Left,
    Right,
    Up,
}

impl Direction {
    /// The four cardinal directions, in animation-table order.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Down, Direction::Left, Direction::Right, Direction::Up];

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    /// Index into per-direction tables.
    pub const fn as_usize(self) -> usize {
        self as usize
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
