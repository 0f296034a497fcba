//! Per-mint observability hook.

use crate::{Direction, LandCoord, TokenId};

/// Snapshot of the walk taken right after a token was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MintTrace {
    /// Token that was just minted
    pub token_id: TokenId,
    /// Where it was placed
    pub position: LandCoord,
    /// Layer the token belongs to
    pub layer: u64,
    /// Heading the next move will use
    pub direction: Direction,
    /// Steps taken in the current layer (0 right after a layer completes)
    pub step_in_layer: u64,
    /// Whether this placement completed its layer
    pub layer_completed: bool,
}

/// Receives a [`MintTrace`] for every minted token.
///
/// Closures taking `&MintTrace` implement this trait, which is handy in tests.
pub trait MintObserver: Send {
    fn on_mint(&mut self, trace: &MintTrace);
}

impl<F> MintObserver for F
where
    F: FnMut(&MintTrace) + Send,
{
    fn on_mint(&mut self, trace: &MintTrace) {
        self(trace)
    }
}

/// Emits each mint as a `tracing` event at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MintObserver for TracingObserver {
    fn on_mint(&mut self, trace: &MintTrace) {
        tracing::trace!(
            target: "landgrid::spiral",
            token_id = trace.token_id.value(),
            x = trace.position.x,
            y = trace.position.y,
            direction = %trace.direction,
            layer = trace.layer,
            step = trace.step_in_layer,
            "minted land"
        );
    }
}

/// Discards every trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MintObserver for NoopObserver {
    fn on_mint(&mut self, _trace: &MintTrace) {}
}
