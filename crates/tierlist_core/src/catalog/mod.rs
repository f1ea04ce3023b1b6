//! Catalog store: the authoritative, ordered list of known items.
//!
//! # Responsibility
//! - Load the catalog document and index it for id lookups.
//! - Stay read-only for the rest of the core; the catalog decides which
//!   item ids exist, persistence never does.
//!
//! # Invariants
//! - Item ids are unique within one catalog (presence check only; item
//!   content is trusted as-is).
//! - Iteration order is document order.

use crate::model::item::{Item, ItemId};
use log::{error, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load/validation error. Surfaced to the caller before the core
/// starts; the ranking core is never invoked without a catalog.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(ItemId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "failed to parse catalog: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate item id in catalog: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Immutable, ordered item collection with O(1) id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog from already-loaded items, rejecting duplicate ids.
    pub fn from_items(items: Vec<Item>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items, index })
    }

    /// Parses a catalog document: a JSON array of item records.
    pub fn from_json_str(text: &str) -> CatalogResult<Self> {
        let items: Vec<Item> = serde_json::from_str(text)?;
        Self::from_items(items)
    }

    /// Reads and parses the catalog document at `path` (the `images.json`
    /// shape: an array of `{id, name, image, description?}` objects).
    pub fn load_json(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match Self::from_json_str(&text) {
            Ok(catalog) => {
                info!(
                    "event=catalog_load module=catalog status=ok path={} items={}",
                    path.display(),
                    catalog.len()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=catalog status=error path={} error={err}",
                    path.display()
                );
                Err(err)
            }
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|position| &self.items[*position])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Item ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// Items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
