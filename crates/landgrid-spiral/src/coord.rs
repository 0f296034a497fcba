//! Integer grid coordinates for land parcels.
//!
//! Parcels live on an unbounded square grid. `x` grows to the right and `y`
//! grows upward, matching the headings used by the spiral walk.

use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::Error;

/// A cell on the land grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LandCoord {
    /// Horizontal position
    pub x: i64,
    /// Vertical position
    pub y: i64,
}

impl LandCoord {
    /// The grid's zero cell.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, or `None` if it leaves the `i64` grid.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(other.x)?,
            y: self.y.checked_add(other.y)?,
        })
    }

    /// Chebyshev (king-move) distance between two cells. Exact for any pair.
    pub fn chebyshev_distance(&self, other: &Self) -> u64 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The four orthogonal neighbours, in Right, Up, Left, Down order.
    pub fn orthogonal_neighbors(&self) -> [Self; 4] {
        crate::Direction::CYCLE.map(|d| *self + d.delta())
    }
}

impl Add for LandCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for LandCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for LandCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(i64, i64)> for LandCoord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for LandCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"`, tolerating surrounding whitespace and parentheses.
impl FromStr for LandCoord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = trimmed
            .split_once(',')
            .ok_or_else(|| Error::InvalidArgument(format!("expected \"x,y\", got {s:?}")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| Error::InvalidArgument(format!("bad coordinate {part:?}: {e}")))
        };

        Ok(Self::new(parse(x)?, parse(y)?))
    }
}
