//! Core domain logic for the food tier-list tool.
//!
//! The placement model is the single source of truth: the view renders from
//! it and gestures mutate it through the controller service; state is never
//! scraped back out of rendered elements.

pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod reconcile;
pub mod service;
pub mod store;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, NO_DESCRIPTION_TEXT};
pub use model::placement::PlacementModel;
pub use model::snapshot::Snapshot;
pub use model::tier::{TierConfig, TierConfigError, UNRANKED_LABEL};
pub use reconcile::reconcile;
pub use service::tierlist_service::{BucketRow, TierListService};
pub use store::snapshot_store::{
    SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult, STORAGE_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
