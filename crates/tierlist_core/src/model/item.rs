//! Item domain model.
//!
//! # Responsibility
//! - Define the catalog record shared by gallery and ranking projections.
//! - Keep "no description" an explicit, non-error state.
//!
//! # Invariants
//! - `id` is assigned by the catalog source and unique within one catalog.
//! - Items are immutable for the lifetime of a session.

use serde::{Deserialize, Serialize};

/// Stable integer identifier assigned to every catalog item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// Fallback text used wherever an item without a description is shown.
pub const NO_DESCRIPTION_TEXT: &str = "No description available.";

/// One catalog entry.
///
/// The catalog document is the only producer of these records; the core
/// never invents or mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id within the catalog document.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Path or URL of the visual asset.
    pub image: String,
    /// Optional blurb. `None` means "no description available", not a defect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Creates an item without a description.
    pub fn new(id: ItemId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            description: None,
        }
    }

    /// Returns the description, or the fixed fallback when none is set.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION_TEXT)
    }
}
