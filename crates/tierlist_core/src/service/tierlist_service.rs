//! Tier-list controller service.
//!
//! # Responsibility
//! - Own the session's placement model and route every mutation through it;
//!   no ambient state, no reading placements back out of a rendered view.
//! - Turn "item X dropped onto bucket Y" into a model move plus a save.
//!
//! # Invariants
//! - One mutation in flight at a time (`&mut self`); each drop completes
//!   fully, mutate then save, before the next is processed.
//! - Anomalies degrade to a no-op or an all-unranked model; nothing in this
//!   service raises a user-visible error.

use crate::catalog::Catalog;
use crate::model::item::{Item, ItemId};
use crate::model::placement::PlacementModel;
use crate::model::tier::TierConfig;
use crate::reconcile::reconcile;
use crate::store::snapshot_store::SnapshotStore;
use log::{debug, error, warn};

/// One bucket resolved for rendering: ordered item records under a label.
#[derive(Debug)]
pub struct BucketRow<'a> {
    pub label: &'a str,
    pub items: Vec<&'a Item>,
}

/// Session controller owning catalog, placement model, and store.
pub struct TierListService<S: SnapshotStore> {
    catalog: Catalog,
    store: S,
    model: PlacementModel,
}

impl<S: SnapshotStore> TierListService<S> {
    /// Starts a session: loads persisted state (degrading load failures to
    /// "no prior state") and reconciles it against the catalog.
    pub fn open(catalog: Catalog, config: TierConfig, store: S) -> Self {
        let model = rebuild(&catalog, &store, config);
        Self {
            catalog,
            store,
            model,
        }
    }

    /// Re-enters the ranking view: reloads persisted state and reconciles
    /// again. Idempotent when nothing was mutated in between.
    pub fn refresh(&mut self) {
        self.model = rebuild(&self.catalog, &self.store, self.model.config().clone());
    }

    /// Gesture entry point: `item` was dropped onto the bucket `target`.
    ///
    /// Unknown items and invalid targets are no-ops returning `false`, as is
    /// dropping an item onto the bucket it already occupies. A real move
    /// mutates the model and persists the full snapshot; a failed save is
    /// logged and swallowed (the in-memory model stays authoritative).
    /// Returns whether the model changed.
    pub fn drop_item(&mut self, item: ItemId, target: &str) -> bool {
        if !self.catalog.contains(item) {
            warn!("event=drop module=service status=unknown_item item={item}");
            return false;
        }
        if !self.model.config().is_valid_bucket(target) {
            debug!("event=drop module=service status=invalid_target item={item} target={target}");
            return false;
        }

        if !self.model.move_item(item, target) {
            return false;
        }

        if let Err(err) = self.store.save(&self.model.to_snapshot()) {
            error!("event=drop module=service status=save_failed item={item} error={err}");
        }
        true
    }

    /// The placement model the view renders from.
    pub fn model(&self) -> &PlacementModel {
        &self.model
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Item record lookup for the rendering layer.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.catalog.get(id)
    }

    /// Every bucket with its ordered item records, display order, for the
    /// renderer to draw from. Ids without a catalog record cannot occur in a
    /// reconciled model and are skipped here.
    pub fn rows(&self) -> Vec<BucketRow<'_>> {
        self.model
            .buckets()
            .map(|(label, ids)| BucketRow {
                label,
                items: ids.iter().filter_map(|id| self.catalog.get(*id)).collect(),
            })
            .collect()
    }
}

fn rebuild<S: SnapshotStore>(catalog: &Catalog, store: &S, config: TierConfig) -> PlacementModel {
    let snapshot = match store.load() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("event=snapshot_load module=service status=degraded error={err}");
            None
        }
    };
    reconcile(catalog, snapshot.as_ref(), config)
}
