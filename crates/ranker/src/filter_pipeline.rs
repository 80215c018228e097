//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{
    ConditionFilter, DistanceFilter, LocationFilter, MarketplaceFilter, PriceRangeFilter,
};
use crate::traits::Filter;
use anyhow::Result;
use listings::{FilterState, Listing};
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MarketplaceFilter)
///     .add_filter(PriceRangeFilter);
///
/// let filtered = pipeline.apply(listings, &filters)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The canonical result-view pipeline, stages in their fixed order:
    /// marketplace, price range, distance, condition, location.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(MarketplaceFilter)
            .add_filter(PriceRangeFilter)
            .add_filter(DistanceFilter)
            .add_filter(ConditionFilter)
            .add_filter(LocationFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the listings.
    ///
    /// ## Algorithm
    /// 1. Start with the input listings
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    ///
    /// Each stage only drops listings, so the output of every stage is a
    /// subset of its input, in input order.
    pub fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>> {
        let mut current = listings;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, filters)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
