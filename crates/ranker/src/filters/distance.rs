//! Filter listings by distance from the searcher.

use crate::traits::Filter;
use anyhow::Result;
use listings::{FilterState, Listing};

/// Keeps listings within the view's maximum distance, inclusive.
pub struct DistanceFilter;

impl Filter for DistanceFilter {
    fn name(&self) -> &str {
        "DistanceFilter"
    }

    fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>> {
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| listing.distance <= filters.max_distance)
            .collect();

        Ok(filtered)
    }
}
