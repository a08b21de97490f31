//! State for the burger constructor.

use serde::{Deserialize, Serialize};

use crate::domain::{ConstructorEntry, Order, PlacementId};
use crate::mvi::SliceState;

/// Lifecycle of the most recent order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Burger under construction plus the outcome of the last order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstructorState {
    /// At most one entry, always of the bun category.
    pub bun: Option<ConstructorEntry>,
    /// Non-bun entries in user-visible order.
    pub fillings: Vec<ConstructorEntry>,
    pub submission_status: SubmissionStatus,
    /// Present only while `submission_status` is `Succeeded`.
    pub last_order_result: Option<Order>,
    /// Present only while `submission_status` is `Failed`.
    pub last_error: Option<String>,
}

impl SliceState for ConstructorState {}

impl ConstructorState {
    /// Nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.bun.is_none() && self.fillings.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission_status == SubmissionStatus::InFlight
    }

    /// Whether any entry (bun or filling) carries this placement id.
    pub fn contains_placement(&self, placement_id: &PlacementId) -> bool {
        self.bun
            .iter()
            .chain(self.fillings.iter())
            .any(|entry| &entry.placement_id == placement_id)
    }

    /// How many times the catalog item appears in the burger.
    ///
    /// A bun counts twice: it is served as the top and the bottom.
    pub fn count_of(&self, catalog_id: &str) -> usize {
        let bun = match &self.bun {
            Some(bun) if bun.catalog_id() == catalog_id => 2,
            _ => 0,
        };
        let fillings = self
            .fillings
            .iter()
            .filter(|entry| entry.catalog_id() == catalog_id)
            .count();
        bun + fillings
    }

    /// Price of the burger: two bun halves plus every filling.
    pub fn total_price(&self) -> u64 {
        let bun = self
            .bun
            .as_ref()
            .map_or(0, |bun| u64::from(bun.ingredient.price) * 2);
        let fillings: u64 = self
            .fillings
            .iter()
            .map(|entry| u64::from(entry.ingredient.price))
            .sum();
        bun + fillings
    }

    /// Catalog ids in the order the order service expects: bun, fillings, bun.
    ///
    /// Returns `None` when there is no bun.
    pub fn order_ingredient_ids(&self) -> Option<Vec<String>> {
        let bun = self.bun.as_ref()?;
        let mut ids = Vec::with_capacity(self.fillings.len() + 2);
        ids.push(bun.catalog_id().to_string());
        ids.extend(self.fillings.iter().map(|e| e.catalog_id().to_string()));
        ids.push(bun.catalog_id().to_string());
        Some(ids)
    }
}
