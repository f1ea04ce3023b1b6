//! Domain model for the tier-list core.
//!
//! # Responsibility
//! - Define items, bucket labels, the placement mapping, and its snapshot.
//! - Keep placement invariants in one place, away from storage and UI glue.
//!
//! # Invariants
//! - Every placed item occupies exactly one bucket.
//! - Bucket identifiers come from the tier config plus the reserved
//!   `unranked` label, never arbitrary strings.

pub mod item;
pub mod placement;
pub mod snapshot;
pub mod tier;
