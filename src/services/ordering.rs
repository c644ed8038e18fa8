//! Queue ordering engine.
//!
//! A pure function over a snapshot of one location's WAITING set. It never
//! mutates entries; the caller decides whether to persist the computed
//! positions. Positions are 1-based, unique, and dense.
//!
//! With priority disabled the order is FIFO by arrival; with priority enabled
//! the primary key is tier descending, then arrival ascending. In both modes
//! the creation sequence number breaks identical-arrival ties, so the order
//! is always strict.

use crate::domain::models::{EntryId, QueueEntry};

/// Computes the strict total order of a waiting set.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueueOrdering;

impl QueueOrdering {
    pub fn new() -> Self {
        Self
    }

    /// Sort a waiting set into service order.
    pub fn order<'a>(
        &self,
        waiting: &'a [QueueEntry],
        priority_enabled: bool,
    ) -> Vec<&'a QueueEntry> {
        let mut sorted: Vec<&QueueEntry> = waiting.iter().collect();
        if priority_enabled {
            sorted.sort_by(|a, b| {
                b.tier
                    .cmp(&a.tier)
                    .then_with(|| a.arrived_at.cmp(&b.arrived_at))
                    .then_with(|| a.sequence.cmp(&b.sequence))
            });
        } else {
            sorted.sort_by(|a, b| {
                a.arrived_at
                    .cmp(&b.arrived_at)
                    .then_with(|| a.sequence.cmp(&b.sequence))
            });
        }
        sorted
    }

    /// Compute `(entry id, 1-based position)` pairs for the whole waiting
    /// set, in service order.
    pub fn positions(
        &self,
        waiting: &[QueueEntry],
        priority_enabled: bool,
    ) -> Vec<(EntryId, u32)> {
        self.order(waiting, priority_enabled)
            .iter()
            .enumerate()
            .map(|(idx, entry)| (entry.id, u32::try_from(idx + 1).unwrap_or(u32::MAX)))
            .collect()
    }

    /// Closed-form rank of one entry within the waiting set.
    ///
    /// Counts the peers strictly ahead: higher tier, or same tier with an
    /// earlier arrival, or same tier and arrival with a lower sequence.
    /// Always agrees with the rank produced by [`Self::positions`].
    pub fn rank_of(
        &self,
        entry: &QueueEntry,
        waiting: &[QueueEntry],
        priority_enabled: bool,
    ) -> u32 {
        let ahead = waiting
            .iter()
            .filter(|other| other.id != entry.id)
            .filter(|other| {
                if priority_enabled {
                    other.tier > entry.tier
                        || (other.tier == entry.tier && other.arrived_at < entry.arrived_at)
                        || (other.tier == entry.tier
                            && other.arrived_at == entry.arrived_at
                            && other.sequence < entry.sequence)
                } else {
                    other.arrived_at < entry.arrived_at
                        || (other.arrived_at == entry.arrived_at
                            && other.sequence < entry.sequence)
                }
            })
            .count();
        u32::try_from(ahead + 1).unwrap_or(u32::MAX)
    }
}
