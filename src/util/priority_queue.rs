use std::collections::hash_map::RandomState;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use priority_queue::PriorityQueue;

/// thin wrapper around `priority_queue::PriorityQueue` so search code can
/// name a concrete queue type without repeating its generic parameters
/// everywhere.
pub struct InternalPriorityQueue<I: Hash + Eq, P: Ord, S = RandomState>(pub PriorityQueue<I, P, S>);

impl<I: Hash + Eq, P: Ord, S> Deref for InternalPriorityQueue<I, P, S> {
    type Target = PriorityQueue<I, P, S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<I: Hash + Eq, P: Ord, S> DerefMut for InternalPriorityQueue<I, P, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<I: Hash + Eq, P: Ord> Default for InternalPriorityQueue<I, P, RandomState> {
    fn default() -> InternalPriorityQueue<I, P, RandomState> {
        InternalPriorityQueue(PriorityQueue::new())
    }
}
