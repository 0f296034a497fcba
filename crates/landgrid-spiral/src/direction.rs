//! Headings of the spiral walk.

use crate::LandCoord;

/// One of the four grid headings. The walk turns through them in
/// declaration order: Right, Up, Left, Down, then Right again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// x + 1
    #[default]
    Right,
    /// y + 1
    Up,
    /// x - 1
    Left,
    /// y - 1
    Down,
}

impl Direction {
    /// All headings in turning order.
    pub const CYCLE: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    /// The heading after a counter-clockwise turn.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// Unit step for this heading.
    #[inline]
    pub const fn delta(self) -> LandCoord {
        match self {
            Self::Right => LandCoord::new(1, 0),
            Self::Up => LandCoord::new(0, 1),
            Self::Left => LandCoord::new(-1, 0),
            Self::Down => LandCoord::new(0, -1),
        }
    }

    /// Position in the turning cycle (Right = 0).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}
