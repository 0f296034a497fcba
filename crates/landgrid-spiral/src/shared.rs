//! Thread-safe handle to a single walk.
//!
//! Minting is not idempotent, so concurrent callers must be serialised per
//! walk. Every operation takes the lock for its whole duration; a batch is
//! never interleaved with another caller's mints.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::WalkConfig;
use crate::error::Result;
use crate::geometry::{GeometryKind, RingGeometry};
use crate::{Assignment, LandCoord, SpiralWalk, TokenId};

/// Cloneable, lock-protected [`SpiralWalk`].
pub struct SharedWalk<G = GeometryKind> {
    inner: Arc<Mutex<SpiralWalk<G>>>,
}

impl SharedWalk<GeometryKind> {
    /// Create a shared walk from configuration.
    pub fn from_config(config: &WalkConfig) -> Result<Self> {
        SpiralWalk::from_config(config).map(Self::new)
    }
}

impl<G: RingGeometry> SharedWalk<G> {
    /// Wrap an existing walk.
    pub fn new(walk: SpiralWalk<G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(walk)),
        }
    }

    pub fn mint_next(&self) -> Assignment {
        self.inner.lock().mint_next()
    }

    pub fn mint_batch(&self, count: u64) -> Result<Vec<Assignment>> {
        self.inner.lock().mint_batch(count)
    }

    pub fn coordinate_of(&self, token_id: impl Into<TokenId>) -> Result<LandCoord> {
        self.inner.lock().coordinate_of(token_id)
    }

    pub fn minted_count(&self) -> u64 {
        self.inner.lock().minted_count()
    }

    /// Run `f` with exclusive access to the walk.
    pub fn with_walk<R>(&self, f: impl FnOnce(&mut SpiralWalk<G>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<G> Clone for SharedWalk<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: std::fmt::Debug> std::fmt::Debug for SharedWalk<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedWalk").field(&*self.inner.lock()).finish()
    }
}
