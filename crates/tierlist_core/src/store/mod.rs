//! Persistence adapter for placement snapshots.
//!
//! # Responsibility
//! - Define the storage seam (`SnapshotStore`) the controller saves through.
//! - Keep SQL details of the key/value backend out of the rest of the core.
//!
//! # Invariants
//! - The snapshot lives under one fixed key; every save overwrites wholesale
//!   (last-write-wins, single document).
//! - A missing or unparsable stored document is "absent", never an error.

pub mod snapshot_store;
