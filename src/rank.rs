//! Scored candidates and the priority queue every ranking runs on.
//!
//! One `(item, score)` type serves friend distances, place suitability and
//! recommendation costs; the use site picks the order with [`Rank`].
//! Equal scores always pop the smaller item first, so every ranking is
//! deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// An item paired with the score it was ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
}

impl<T> Scored<T> {
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Which end of the score range pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Lowest,
    Highest,
}

/// Priority queue of scored items.
///
/// There is no decrease-key: to lower an item's priority, push it again and
/// let the caller discard the stale entry when it pops.
#[derive(Debug, Clone)]
pub struct ScoredQueue<T: Ord> {
    rank: Rank,
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, T)>>,
}

impl<T: Ord> ScoredQueue<T> {
    pub fn new(rank: Rank) -> Self {
        Self { rank, heap: BinaryHeap::new() }
    }

    pub fn lowest_first() -> Self {
        Self::new(Rank::Lowest)
    }

    pub fn highest_first() -> Self {
        Self::new(Rank::Highest)
    }

    fn key(&self, score: f64) -> OrderedFloat<f64> {
        match self.rank {
            Rank::Lowest => OrderedFloat(score),
            Rank::Highest => OrderedFloat(-score),
        }
    }

    pub fn push(&mut self, item: T, score: f64) {
        let key = self.key(score);
        self.heap.push(Reverse((key, item)));
    }

    pub fn pop(&mut self) -> Option<Scored<T>> {
        let Reverse((key, item)) = self.heap.pop()?;
        let score = match self.rank {
            Rank::Lowest => key.into_inner(),
            Rank::Highest => -key.into_inner(),
        };
        Some(Scored::new(item, score))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pop up to `k` items in rank order.
    pub fn take(mut self, k: usize) -> Vec<Scored<T>> {
        let mut out = Vec::with_capacity(k.min(self.len()));
        while out.len() < k {
            match self.pop() {
                Some(s) => out.push(s),
                None => break,
            }
        }
        out
    }
}

impl<T: Ord> Extend<(T, f64)> for ScoredQueue<T> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        for (item, score) in iter {
            self.push(item, score);
        }
    }
}
