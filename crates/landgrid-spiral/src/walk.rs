//! The spiral walk - sequential land coordinate assignment.
//!
//! Every minted token gets the next cell of an outward square spiral around a
//! fixed origin. The walk is a small state machine:
//!
//! 1. Token 1 sits on the origin. No movement, layer 1.
//! 2. Every later token steps one cell along the current heading. The first
//!    move of a new layer drops one row (`y - 1`) before stepping, which
//!    carries the walk from the end of one ring onto the bottom edge of the
//!    next.
//! 3. After each placement the step counter advances. On a corner of the
//!    current layer the heading turns, unless the layer is already full.
//! 4. A full layer bumps the layer index, clears the step counter and resets
//!    the heading to Right.
//!
//! The boundary rule (layer size and corners) comes from a [`RingGeometry`].
//!
//! Origins are limited to [`MAX_ORIGIN_AXIS`] on each axis. A walk can hold
//! at most `usize::MAX` tokens, which never carries it more than `2^33`
//! cells from its origin, so every cell it can reach stays on the `i64` grid.

use tracing::debug;

use crate::config::WalkConfig;
use crate::error::{Error, Result};
use crate::geometry::{GeometryKind, RingGeometry};
use crate::observer::{MintObserver, MintTrace, TracingObserver};
use crate::{Direction, LandCoord};

/// Largest absolute value either origin axis may take.
pub const MAX_ORIGIN_AXIS: i64 = 1 << 62;

/// Reject origins a walk could step off the `i64` grid from.
pub(crate) fn check_origin(origin: LandCoord) -> Result<LandCoord> {
    let in_range = |axis: i64| axis.unsigned_abs() <= MAX_ORIGIN_AXIS.unsigned_abs();
    if in_range(origin.x) && in_range(origin.y) {
        Ok(origin)
    } else {
        Err(Error::InvalidArgument(format!(
            "origin {origin} is outside ±{MAX_ORIGIN_AXIS} on some axis"
        )))
    }
}

/// A 1-based land token identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenId(pub u64);

impl TokenId {
    /// The first token ever minted.
    pub const FIRST: Self = Self(1);

    /// Create from a raw id.
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Position in the history arena, or `None` for id 0.
    #[inline]
    fn slot(&self) -> Option<usize> {
        self.0
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<TokenId> for u64 {
    fn from(value: TokenId) -> Self {
        value.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A minted token and the parcel it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub token_id: TokenId,
    pub coord: LandCoord,
    /// Ring index, starting at 1 for the ring holding the origin
    pub layer: u64,
}

/// Stateful spiral coordinate generator.
///
/// Not idempotent: each call to [`mint_next`](Self::mint_next) consumes a
/// cell. Share one walk between threads through
/// [`SharedWalk`](crate::SharedWalk).
pub struct SpiralWalk<G = GeometryKind> {
    geometry: G,
    origin: LandCoord,
    /// Last assigned cell, `None` until the first mint
    position: Option<LandCoord>,
    layer: u64,
    step_in_layer: u64,
    direction: Direction,
    /// Arena indexed by `token_id - 1`
    history: Vec<Assignment>,
    observer: Box<dyn MintObserver>,
}

impl SpiralWalk<GeometryKind> {
    /// Create a walk around `origin` using the default geometry.
    pub fn new(origin: LandCoord) -> Result<Self> {
        Self::with_geometry(origin, GeometryKind::default())
    }

    /// Create a walk from configuration.
    pub fn from_config(config: &WalkConfig) -> Result<Self> {
        Self::with_geometry(config.origin, config.geometry)
    }
}

impl Default for SpiralWalk<GeometryKind> {
    fn default() -> Self {
        let config = WalkConfig::default();
        Self::unchecked(config.origin, config.geometry)
    }
}

impl<G: RingGeometry> SpiralWalk<G> {
    /// Create a walk around `origin` with an explicit geometry policy.
    ///
    /// Fails with [`Error::InvalidArgument`] if either origin axis lies
    /// outside `±MAX_ORIGIN_AXIS`.
    pub fn with_geometry(origin: LandCoord, geometry: G) -> Result<Self> {
        Ok(Self::unchecked(check_origin(origin)?, geometry))
    }

    fn unchecked(origin: LandCoord, geometry: G) -> Self {
        Self {
            geometry,
            origin,
            position: None,
            layer: 1,
            step_in_layer: 0,
            direction: Direction::Right,
            history: Vec::new(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the per-mint observer.
    pub fn with_observer(mut self, observer: impl MintObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Mint the next token and assign it the next spiral cell.
    pub fn mint_next(&mut self) -> Assignment {
        let token_id = TokenId(self.minted_count() + 1);
        let layer = self.layer;

        let coord = match self.position {
            None => self.origin,
            Some(current) => self.step_from(current),
        };
        self.position = Some(coord);

        let assignment = Assignment {
            token_id,
            coord,
            layer,
        };
        self.history.push(assignment);

        let layer_completed = self.advance(coord);

        self.observer.on_mint(&MintTrace {
            token_id,
            position: coord,
            layer,
            direction: self.direction,
            step_in_layer: self.step_in_layer,
            layer_completed,
        });

        assignment
    }

    /// Mint `count` tokens in order.
    ///
    /// Identical to `count` calls of [`mint_next`](Self::mint_next). The
    /// count is validated first, so an error leaves the walk untouched.
    pub fn mint_batch(&mut self, count: u64) -> Result<Vec<Assignment>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let minted = self.minted_count();
        if minted.checked_add(count).is_none() {
            return Err(Error::InvalidArgument(format!(
                "batch of {count} overflows token ids after {minted} minted"
            )));
        }

        let len = usize::try_from(count).map_err(|_| {
            Error::InvalidArgument(format!("batch of {count} exceeds addressable history"))
        })?;
        self.history
            .try_reserve(len)
            .map_err(|e| Error::InvalidArgument(format!("batch of {count} cannot be stored: {e}")))?;

        let mut batch = Vec::new();
        batch
            .try_reserve_exact(len)
            .map_err(|e| Error::InvalidArgument(format!("batch of {count} cannot be returned: {e}")))?;

        debug!(count, first = minted + 1, "minting batch");

        for _ in 0..len {
            batch.push(self.mint_next());
        }
        Ok(batch)
    }

    /// Coordinate previously assigned to `token_id`.
    pub fn coordinate_of(&self, token_id: impl Into<TokenId>) -> Result<LandCoord> {
        self.assignment(token_id).map(|a| a.coord)
    }

    /// Full assignment record for `token_id`.
    pub fn assignment(&self, token_id: impl Into<TokenId>) -> Result<&Assignment> {
        let token_id = token_id.into();
        token_id
            .slot()
            .and_then(|slot| self.history.get(slot))
            .ok_or(Error::NotFound(token_id))
    }

    /// Every assignment so far, in mint order.
    pub fn history(&self) -> &[Assignment] {
        &self.history
    }

    /// Number of tokens minted so far.
    pub fn minted_count(&self) -> u64 {
        self.history.len() as u64
    }

    pub fn origin(&self) -> LandCoord {
        self.origin
    }

    /// Last assigned cell, `None` before the first mint.
    pub fn current_position(&self) -> Option<LandCoord> {
        self.position
    }

    /// Layer the next token will be placed in.
    pub fn layer(&self) -> u64 {
        self.layer
    }

    /// Steps taken in the current layer.
    pub fn step_in_layer(&self) -> u64 {
        self.step_in_layer
    }

    /// Heading of the next move.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Cell the next move lands on, starting from `current`. The origin
    /// bound keeps this on the grid.
    fn step_from(&self, current: LandCoord) -> LandCoord {
        let mut next = current;
        if self.step_in_layer == 0 {
            next.y -= 1;
        }
        next + self.direction.delta()
    }

    /// Update step, heading and layer after placing a token at `coord`.
    /// Returns true when the placement completed its layer.
    fn advance(&mut self, coord: LandCoord) -> bool {
        self.step_in_layer += 1;
        let max_steps = self.geometry.max_steps_in_layer(self.layer);

        if self.step_in_layer < max_steps
            && self.geometry.is_corner(coord, self.layer, self.origin)
        {
            self.direction = self.direction.next();
        }

        if self.step_in_layer < max_steps {
            return false;
        }

        debug!(
            layer = self.layer,
            minted = self.minted_count(),
            "layer complete"
        );
        self.layer += 1;
        self.step_in_layer = 0;
        self.direction = Direction::Right;
        true
    }
}

/// The walk never runs out of cells.
impl<G: RingGeometry> Iterator for SpiralWalk<G> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.mint_next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<G: std::fmt::Debug> std::fmt::Debug for SpiralWalk<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpiralWalk")
            .field("geometry", &self.geometry)
            .field("origin", &self.origin)
            .field("position", &self.position)
            .field("layer", &self.layer)
            .field("step_in_layer", &self.step_in_layer)
            .field("direction", &self.direction)
            .field("minted", &self.history.len())
            .finish_non_exhaustive()
    }
}
