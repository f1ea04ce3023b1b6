//! Tier label configuration.
//!
//! # Responsibility
//! - Define the fixed, ordered set of bucket labels a board ranks into.
//! - Reserve the `unranked` label for items without a tier.
//!
//! # Invariants
//! - Tier labels are unique, non-blank, and never the reserved label.
//! - Label order is display order and never changes after construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reserved bucket label for items that have not been ranked yet.
///
/// Always a valid drop target, never a configurable tier label.
pub const UNRANKED_LABEL: &str = "unranked";

/// Configuration error for tier label sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierConfigError {
    NoTiers,
    BlankLabel,
    DuplicateLabel(String),
    ReservedLabel,
}

impl Display for TierConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTiers => write!(f, "tier config needs at least one tier label"),
            Self::BlankLabel => write!(f, "tier labels must not be blank"),
            Self::DuplicateLabel(label) => write!(f, "duplicate tier label: {label}"),
            Self::ReservedLabel => {
                write!(f, "`{UNRANKED_LABEL}` is reserved and cannot be a tier label")
            }
        }
    }
}

impl Error for TierConfigError {}

/// Fixed, ordered set of tier labels for one board.
///
/// The label set is configuration handed to the core; the core never invents
/// bucket identifiers outside this set plus [`UNRANKED_LABEL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierConfig {
    labels: Vec<String>,
}

impl TierConfig {
    /// Builds a config from ordered tier labels.
    ///
    /// # Errors
    /// - [`TierConfigError::NoTiers`] for an empty label set.
    /// - [`TierConfigError::BlankLabel`] for empty/whitespace labels.
    /// - [`TierConfigError::DuplicateLabel`] for repeated labels.
    /// - [`TierConfigError::ReservedLabel`] when `unranked` is listed as a tier.
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, TierConfigError> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(TierConfigError::NoTiers);
        }
        for (position, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(TierConfigError::BlankLabel);
            }
            if label == UNRANKED_LABEL {
                return Err(TierConfigError::ReservedLabel);
            }
            if labels[..position].contains(label) {
                return Err(TierConfigError::DuplicateLabel(label.clone()));
            }
        }
        Ok(Self { labels })
    }

    /// Returns tier labels in display order (excludes `unranked`).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns whether `label` is a configured tier label.
    pub fn is_tier(&self, label: &str) -> bool {
        self.tier_index(label).is_some()
    }

    /// Returns whether `label` names any valid bucket, `unranked` included.
    pub fn is_valid_bucket(&self, label: &str) -> bool {
        label == UNRANKED_LABEL || self.is_tier(label)
    }

    /// Iterates every bucket label in display order, `unranked` last.
    pub fn bucket_labels(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(UNRANKED_LABEL))
    }

    pub(crate) fn tier_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| candidate == label)
    }

    pub(crate) fn tier_count(&self) -> usize {
        self.labels.len()
    }
}

impl Default for TierConfig {
    /// The stock S/A/B/C/D board.
    fn default() -> Self {
        Self {
            labels: ["S", "A", "B", "C", "D"].map(String::from).to_vec(),
        }
    }
}
