//! Filter listings by advertised condition.
//!
//! An empty condition set means "no restriction", not "reject all". That
//! asymmetry matters: a freshly opened result view has nothing checked and
//! must show everything.

use crate::traits::Filter;
use anyhow::Result;
use listings::{FilterState, Listing};

/// Keeps listings whose condition is in the accepted set.
///
/// ## Algorithm
/// 1. Empty set: keep every listing
/// 2. Otherwise keep listings whose `condition` is a member; open-string
///    conditions participate by exact value
pub struct ConditionFilter;

impl Filter for ConditionFilter {
    fn name(&self) -> &str {
        "ConditionFilter"
    }

    fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>> {
        if filters.conditions.is_empty() {
            return Ok(listings);
        }
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| filters.conditions.contains(&listing.condition))
            .collect();

        Ok(filtered)
    }
}
