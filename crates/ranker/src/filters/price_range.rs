//! Filter listings to a price interval.
//!
//! Both bounds are inclusive: a listing priced exactly at either end of the
//! range is retained.

use crate::traits::Filter;
use anyhow::Result;
use listings::{FilterState, Listing};

/// Keeps listings whose price falls inside the view's price range.
///
/// ## Algorithm
/// Retain listings with `low <= price <= high`. The range is a view setting,
/// independent of the criterion's own min/max prices.
pub struct PriceRangeFilter;

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>> {
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| filters.price_range.contains(listing.price))
            .collect();

        Ok(filtered)
    }
}
