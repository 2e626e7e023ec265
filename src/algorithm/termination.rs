use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::model::unit::Cost;

/// a cooperative cancel signal checked on every heap pop. cloning shares
/// the same underlying flag; cancel any clone and every search sharing it
/// observes it on its next pop.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// the outcome of a single-source Dijkstra pass that matters to callers
/// beyond the search tree itself: whether the max-weight bound was hit
/// before the queue emptied.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchTermination {
    pub max_reached: bool,
    pub max_weight_seen: Cost,
}
