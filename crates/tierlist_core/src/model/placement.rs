//! Placement model: the item→bucket mapping.
//!
//! # Responsibility
//! - Hold exactly one bucket per placed item and mutate it via `move_item`.
//! - Be the single source of truth rendering and persistence consult.
//!
//! # Invariants
//! - An item id occupies at most one bucket (exclusivity).
//! - Bucket identifiers are always config tier labels or `unranked`.
//! - Per-bucket order is insertion order; a moved item appends last.
//!
//! Total coverage over the catalog is established by reconciliation, which
//! is the only construction path for session models; `move_item` preserves
//! it for catalog-known ids.

use crate::model::item::ItemId;
use crate::model::snapshot::Snapshot;
use crate::model::tier::{TierConfig, UNRANKED_LABEL};

/// Resolved bucket position inside the model's storage.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Tier(usize),
    Unranked,
}

/// In-memory mapping from item id to bucket, ordered within each bucket.
///
/// Mutation never persists anything; saving is an explicit separate step so
/// batched rebuilds do not write storage mid-build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementModel {
    config: TierConfig,
    tiers: Vec<Vec<ItemId>>,
    unranked: Vec<ItemId>,
}

impl PlacementModel {
    /// Creates an empty model for the given tier configuration.
    pub fn new(config: TierConfig) -> Self {
        let tiers = vec![Vec::new(); config.tier_count()];
        Self {
            config,
            tiers,
            unranked: Vec::new(),
        }
    }

    pub fn config(&self) -> &TierConfig {
        &self.config
    }

    /// Moves `item` into the bucket named `target`.
    ///
    /// Removes the id from whichever bucket currently holds it (tolerant
    /// when absent) and appends it to the target. Returns `false` without
    /// touching the model when the target is not a valid bucket label, or
    /// when the item already occupies it (idempotent).
    pub fn move_item(&mut self, item: ItemId, target: &str) -> bool {
        let Some(slot) = self.slot(target) else {
            return false;
        };
        if self.bucket_of(item).is_some_and(|current| current == target) {
            return false;
        }

        self.remove(item);
        match slot {
            Slot::Tier(index) => self.tiers[index].push(item),
            Slot::Unranked => self.unranked.push(item),
        }
        true
    }

    /// Returns the bucket currently holding `item`, or `None` when the id is
    /// unknown to the model.
    pub fn bucket_of(&self, item: ItemId) -> Option<&str> {
        for (index, ids) in self.tiers.iter().enumerate() {
            if ids.contains(&item) {
                return Some(self.config.labels()[index].as_str());
            }
        }
        if self.unranked.contains(&item) {
            return Some(UNRANKED_LABEL);
        }
        None
    }

    /// Returns the ordered ids in the named bucket.
    ///
    /// `None` for an invalid label; `Some(&[])` for a valid empty bucket.
    pub fn items_in(&self, label: &str) -> Option<&[ItemId]> {
        match self.slot(label)? {
            Slot::Tier(index) => Some(&self.tiers[index]),
            Slot::Unranked => Some(&self.unranked),
        }
    }

    /// Iterates every bucket with its ordered ids, config order first and
    /// `unranked` last. Empty buckets are included; snapshot conversion is
    /// where sparsity happens.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[ItemId])> {
        self.config
            .labels()
            .iter()
            .map(String::as_str)
            .zip(self.tiers.iter().map(Vec::as_slice))
            .chain(std::iter::once((
                UNRANKED_LABEL,
                self.unranked.as_slice(),
            )))
    }

    /// Produces the full bucket→ordered-ids snapshot, omitting empty buckets.
    pub fn to_snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for (label, ids) in self.buckets() {
            if !ids.is_empty() {
                snapshot.push(label, ids.to_vec());
            }
        }
        snapshot
    }

    /// Number of placed items across all buckets.
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum::<usize>() + self.unranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, label: &str) -> Option<Slot> {
        if label == UNRANKED_LABEL {
            return Some(Slot::Unranked);
        }
        self.config.tier_index(label).map(Slot::Tier)
    }

    fn remove(&mut self, item: ItemId) {
        for ids in &mut self.tiers {
            ids.retain(|candidate| *candidate != item);
        }
        self.unranked.retain(|candidate| *candidate != item);
    }
}
