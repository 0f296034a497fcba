//! Ring geometry policies.
//!
//! A walk is one algorithm with a pluggable boundary rule. The policy decides
//! how many steps a layer holds and which cells are its corners. Two square
//! tilings are provided:
//!
//! - [`EvenSquare`]: layer L is a `2L x 2L` square. Layer 1 is the 2x2 block
//!   made of the origin and the cells above and to its left. Layer L holds
//!   `4(2L - 1)` cells, so layers 1..=L hold `4L²` tokens.
//! - [`OddSquare`]: layer L is the `(2L - 1)` square centred on the origin.
//!   Layer 1 is the origin alone; layer L > 1 holds `8(L - 1)` cells, so
//!   layers 1..=L hold `(2L - 1)²` tokens.
//!
//! Each tiling's corner rule only fits its own step count. Mixing the two
//! sends the walk off the ring and revisits cells.
//!
//! Layer 0 does not exist: it holds no steps, has no corners and no path.
//! Geometry queries take arbitrary coordinates and layers and never overflow;
//! offsets are computed in `i128` and counts that do not fit in `u64` come
//! back as `None` (or saturate, for per-layer step counts).

use std::str::FromStr;

use crate::error::Error;
use crate::{Assignment, Direction, LandCoord, TokenId};

/// Headings of the runs that make up one layer, in walk order.
pub const LAYER_HEADINGS: [Direction; 5] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Right,
];

/// One layer as the walk traces it: a start cell, then straight runs along
/// [`LAYER_HEADINGS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerPath {
    /// First cell of the layer, relative to the origin
    pub start: (i64, i64),
    /// Moves made along each heading after the start cell
    pub runs: [u64; 5],
}

impl LayerPath {
    /// Offset from the origin after `moves` moves past the start cell.
    /// `None` if the layer is shorter than that.
    pub fn offset_after(&self, moves: u64) -> Option<(i64, i64)> {
        let (mut x, mut y) = self.start;
        let mut remaining = moves;

        for (heading, &run) in LAYER_HEADINGS.iter().zip(&self.runs) {
            let taken = remaining.min(run);
            let distance = i64::try_from(taken).ok()?;
            let delta = heading.delta();
            x = x.checked_add(delta.x.checked_mul(distance)?)?;
            y = y.checked_add(delta.y.checked_mul(distance)?)?;
            remaining -= taken;
        }

        (remaining == 0).then_some((x, y))
    }
}

/// Boundary rule for a square spiral walk.
pub trait RingGeometry {
    /// Number of placements that complete `layer` (1-based). Zero for
    /// layer 0; saturates at `u64::MAX`.
    fn max_steps_in_layer(&self, layer: u64) -> u64;

    /// Whether `position` is a corner of `layer` around `origin`.
    fn is_corner(&self, position: LandCoord, layer: u64, origin: LandCoord) -> bool;

    /// The layer that contains `position`. At least 1, saturating at `u64::MAX`.
    fn layer_of(&self, position: LandCoord, origin: LandCoord) -> u64;

    /// The run layout of `layer`, or `None` for layer 0 and layers too
    /// large to address.
    fn layer_path(&self, layer: u64) -> Option<LayerPath>;

    /// Total tokens placed once layers `1..=layer` are complete, or `None`
    /// if that count does not fit in a `u64`.
    fn tokens_through_layer(&self, layer: u64) -> Option<u64> {
        (1..=layer).try_fold(0u64, |total, l| {
            let steps = self.max_steps_in_layer(l);
            if steps == u64::MAX {
                return None;
            }
            total.checked_add(steps)
        })
    }

    /// Layer holding `token`, found by binary search over cumulative counts.
    fn layer_containing(&self, token: TokenId) -> Option<u64> {
        let token = token.value();
        if token == 0 {
            return None;
        }
        // A count too large for u64 is past every token.
        let reaches = |layer: u64| self.tokens_through_layer(layer).map_or(true, |t| t >= token);

        let mut high = 1u64;
        while !reaches(high) {
            high = high.checked_mul(2)?;
        }
        if high == 1 {
            return Some(1);
        }

        let mut low = high / 2 + 1;
        while low < high {
            let mid = low + (high - low) / 2;
            if reaches(mid) {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        Some(high)
    }

    /// Closed-form assignment of `token` in a walk around `origin`.
    ///
    /// Equal to what the `token`-th mint of a fresh walk returns, without
    /// replaying the walk. `None` for token 0 or when the cell would fall
    /// outside the `i64` grid.
    fn position_of(&self, token_id: TokenId, origin: LandCoord) -> Option<Assignment> {
        let layer = self.layer_containing(token_id)?;
        let before = self.tokens_through_layer(layer - 1)?;
        let path = self.layer_path(layer)?;
        let (dx, dy) = path.offset_after(token_id.value() - before - 1)?;
        let coord = origin.checked_add(LandCoord::new(dx, dy))?;

        Some(Assignment {
            token_id,
            coord,
            layer,
        })
    }
}

/// Offset of `position` from `origin` without overflow.
#[inline]
fn wide_offset(position: LandCoord, origin: LandCoord) -> (i128, i128) {
    (
        i128::from(position.x) - i128::from(origin.x),
        i128::from(position.y) - i128::from(origin.y),
    )
}

/// `2L x 2L` rings; the default policy.
///
/// Layer L spans `x ∈ [x0 - L, x0 + L - 1]` and `y ∈ [y0 - L + 1, y0 + L]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvenSquare;

impl RingGeometry for EvenSquare {
    #[inline]
    fn max_steps_in_layer(&self, layer: u64) -> u64 {
        if layer == 0 {
            return 0;
        }
        layer.saturating_mul(2).saturating_sub(1).saturating_mul(4)
    }

    fn is_corner(&self, position: LandCoord, layer: u64, origin: LandCoord) -> bool {
        if layer == 0 {
            return false;
        }
        let (dx, dy) = wide_offset(position, origin);
        let l = i128::from(layer);
        (dx == l - 1 || dx == -l) && (dy == l || dy == 1 - l)
    }

    fn layer_of(&self, position: LandCoord, origin: LandCoord) -> u64 {
        let (dx, dy) = wide_offset(position, origin);
        let layer = (dx + 1).max(-dx).max(dy).max(1 - dy);
        u64::try_from(layer).unwrap_or(u64::MAX)
    }

    fn layer_path(&self, layer: u64) -> Option<LayerPath> {
        if layer == 0 {
            return None;
        }
        let l = i64::try_from(layer).ok()?;
        let side = layer.checked_mul(2)? - 1;
        Some(LayerPath {
            start: (0, 1 - l),
            runs: [layer - 1, side, side, side, layer - 1],
        })
    }

    #[inline]
    fn tokens_through_layer(&self, layer: u64) -> Option<u64> {
        layer.checked_mul(layer)?.checked_mul(4)
    }
}

/// Odd-sided rings centred on the origin.
///
/// Layer L spans `|x - x0| <= L - 1` and `|y - y0| <= L - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OddSquare;

impl RingGeometry for OddSquare {
    #[inline]
    fn max_steps_in_layer(&self, layer: u64) -> u64 {
        match layer {
            0 => 0,
            1 => 1,
            _ => (layer - 1).saturating_mul(8),
        }
    }

    fn is_corner(&self, position: LandCoord, layer: u64, origin: LandCoord) -> bool {
        if layer == 0 {
            return false;
        }
        let (dx, dy) = wide_offset(position, origin);
        let radius = i128::from(layer) - 1;
        dx.abs() == radius && dy.abs() == radius
    }

    fn layer_of(&self, position: LandCoord, origin: LandCoord) -> u64 {
        position.chebyshev_distance(&origin).saturating_add(1)
    }

    fn layer_path(&self, layer: u64) -> Option<LayerPath> {
        match layer {
            0 => None,
            1 => Some(LayerPath {
                start: (0, 0),
                runs: [0; 5],
            }),
            _ => {
                let l = i64::try_from(layer).ok()?;
                let edge = (layer - 1).checked_mul(2)?;
                Some(LayerPath {
                    start: (1, 1 - l),
                    runs: [layer - 2, edge, edge, edge, layer - 1],
                })
            }
        }
    }

    #[inline]
    fn tokens_through_layer(&self, layer: u64) -> Option<u64> {
        if layer == 0 {
            return Some(0);
        }
        let side = layer.checked_mul(2)? - 1;
        side.checked_mul(side)
    }
}

/// Runtime-selectable geometry, for configuration files and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GeometryKind {
    /// See [`EvenSquare`].
    #[default]
    EvenSquare,
    /// See [`OddSquare`].
    OddSquare,
}

impl RingGeometry for GeometryKind {
    fn max_steps_in_layer(&self, layer: u64) -> u64 {
        match self {
            Self::EvenSquare => EvenSquare.max_steps_in_layer(layer),
            Self::OddSquare => OddSquare.max_steps_in_layer(layer),
        }
    }

    fn is_corner(&self, position: LandCoord, layer: u64, origin: LandCoord) -> bool {
        match self {
            Self::EvenSquare => EvenSquare.is_corner(position, layer, origin),
            Self::OddSquare => OddSquare.is_corner(position, layer, origin),
        }
    }

    fn layer_of(&self, position: LandCoord, origin: LandCoord) -> u64 {
        match self {
            Self::EvenSquare => EvenSquare.layer_of(position, origin),
            Self::OddSquare => OddSquare.layer_of(position, origin),
        }
    }

    fn layer_path(&self, layer: u64) -> Option<LayerPath> {
        match self {
            Self::EvenSquare => EvenSquare.layer_path(layer),
            Self::OddSquare => OddSquare.layer_path(layer),
        }
    }

    fn tokens_through_layer(&self, layer: u64) -> Option<u64> {
        match self {
            Self::EvenSquare => EvenSquare.tokens_through_layer(layer),
            Self::OddSquare => OddSquare.tokens_through_layer(layer),
        }
    }
}

impl FromStr for GeometryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" | "even_square" | "even-square" => Ok(Self::EvenSquare),
            "odd" | "odd_square" | "odd-square" => Ok(Self::OddSquare),
            other => Err(Error::InvalidArgument(format!(
                "unknown geometry {other:?} (expected \"even\" or \"odd\")"
            ))),
        }
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EvenSquare => f.write_str("even"),
            Self::OddSquare => f.write_str("odd"),
        }
    }
}
