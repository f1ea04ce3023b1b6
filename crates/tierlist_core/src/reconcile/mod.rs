//! Reconciliation: derive a valid placement model from persisted state.
//!
//! # Responsibility
//! - Merge an optional persisted snapshot with the authoritative catalog
//!   into a model that covers every catalog item exactly once.
//!
//! # Invariants
//! - Every catalog id ends up in exactly one bucket; ids unknown to the
//!   catalog never enter the model.
//! - An id listed under several snapshot buckets keeps its first listing
//!   (document key order); later listings are dropped without diagnostics
//!   beyond a debug log. Best-effort hygiene, not intent preservation.
//! - Re-running with unchanged inputs yields an identical model.

use crate::catalog::Catalog;
use crate::model::placement::PlacementModel;
use crate::model::snapshot::Snapshot;
use crate::model::tier::{TierConfig, UNRANKED_LABEL};
use log::{debug, info};
use std::collections::HashSet;

/// Builds the session's placement model.
///
/// With no snapshot (missing storage entry or a document that failed strict
/// parsing upstream), every catalog item lands in `unranked` in catalog
/// order. Otherwise snapshot listings are replayed where they still make
/// sense and everything left over is appended to `unranked`. Never fails;
/// the worst outcome is an all-unranked model.
pub fn reconcile(
    catalog: &Catalog,
    snapshot: Option<&Snapshot>,
    config: TierConfig,
) -> PlacementModel {
    let mut model = PlacementModel::new(config);

    let Some(snapshot) = snapshot else {
        for id in catalog.ids() {
            model.move_item(id, UNRANKED_LABEL);
        }
        info!(
            "event=reconcile module=reconcile status=ok source=empty unranked={}",
            catalog.len()
        );
        return model;
    };

    let mut placed: HashSet<i64> = HashSet::with_capacity(catalog.len());
    let mut stale = 0usize;

    for (label, ids) in snapshot.entries() {
        if !model.config().is_valid_bucket(label) {
            // Tier set changed since the save; its items fall back to
            // unranked below.
            debug!("event=reconcile module=reconcile status=skip_bucket label={label}");
            continue;
        }
        for &id in ids {
            if !catalog.contains(id) {
                stale += 1;
                debug!("event=reconcile module=reconcile status=drop_stale item={id}");
                continue;
            }
            if !placed.insert(id) {
                debug!(
                    "event=reconcile module=reconcile status=drop_duplicate item={id} label={label}"
                );
                continue;
            }
            model.move_item(id, label);
        }
    }

    let mut added = 0usize;
    for id in catalog.ids() {
        if !placed.contains(&id) {
            model.move_item(id, UNRANKED_LABEL);
            added += 1;
        }
    }

    info!(
        "event=reconcile module=reconcile status=ok source=snapshot placed={} new_unranked={added} stale_dropped={stale}",
        placed.len()
    );
    model
}
