//! Filter listings by place name.
//!
//! Symmetric to the condition filter: an empty location set is a
//! pass-through, a non-empty set is exact membership over the free-text
//! location values.

use crate::traits::Filter;
use anyhow::Result;
use listings::{FilterState, Listing};

/// Keeps listings whose location is in the accepted set.
pub struct LocationFilter;

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>> {
        if filters.locations.is_empty() {
            return Ok(listings);
        }
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| filters.locations.contains(&listing.location))
            .collect();

        Ok(filtered)
    }
}
