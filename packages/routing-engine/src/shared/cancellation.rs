//! Coarse-grained cancellation signal
//!
//! Checked by the all-pairs solver between per-source runs. A single
//! Dijkstra run is never interrupted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle; all clones observe the same flag
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
