//! Landgrid Spiral
//!
//! Deterministic assignment of grid coordinates to sequentially minted land
//! tokens.
//!
//! # Square Spiral
//!
//! Token 1 is placed on a fixed origin. Every later token takes the next cell
//! of an outward square spiral, one ring ("layer") at a time:
//!
//! ```text
//!  y
//!  2   12  11  10   9
//!  1    .   3   2   8
//!  0    .   4   1   7
//! -1    .   .   5   6
//!      -2  -1   0   1   x
//! ```
//!
//! (token ids under the default [`EvenSquare`] geometry, origin at (0, 0))
//!
//! # Ring Geometry
//!
//! The walk itself is fixed. Layer sizes and corner cells come from a
//! [`RingGeometry`] policy: [`EvenSquare`] (layer L holds `4(2L - 1)` cells,
//! the default) or [`OddSquare`] (layer 1 is the origin alone, layer L holds
//! `8(L - 1)` cells). The policy also answers where any token lands without
//! running a walk ([`RingGeometry::position_of`]).
//!
//! # Usage
//!
//! ```
//! use landgrid_spiral::{LandCoord, RingGeometry, SpiralWalk, TokenId};
//!
//! let mut walk = SpiralWalk::new(LandCoord::new(500, 500))?;
//! let first = walk.mint_next();
//! assert_eq!(first.coord, LandCoord::new(500, 500));
//!
//! let batch = walk.mint_batch(3)?;
//! assert_eq!(batch[0].token_id.value(), 2);
//! assert_eq!(walk.coordinate_of(2u64)?, batch[0].coord);
//!
//! let fourth = walk.geometry().position_of(TokenId(4), walk.origin());
//! assert_eq!(fourth, Some(batch[2]));
//! # Ok::<(), landgrid_spiral::Error>(())
//! ```

mod config;
mod coord;
mod direction;
mod error;
mod geometry;
mod observer;
mod record;
mod shared;
mod walk;

pub use config::{parse_batch_count, WalkConfig, DEFAULT_ORIGIN_AXIS, GEOMETRY_ENV, ORIGIN_ENV};
pub use coord::LandCoord;
pub use direction::Direction;
pub use error::{Error, Result};
pub use geometry::{EvenSquare, GeometryKind, LayerPath, OddSquare, RingGeometry, LAYER_HEADINGS};
pub use observer::{MintObserver, MintTrace, NoopObserver, TracingObserver};
pub use record::{decode_records, encode_records, RECORD_LEN};
pub use shared::SharedWalk;
pub use walk::{Assignment, SpiralWalk, TokenId, MAX_ORIGIN_AXIS};
