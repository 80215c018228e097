//! The top-level ranking entry point.

use crate::filter_pipeline::FilterPipeline;
use anyhow::Result;
use chrono::{DateTime, Utc};
use listings::{FilterState, Listing, WatchCriterion};

/// Turns a raw listing batch into a filtered, sorted, presentation-ready
/// sequence.
///
/// A pure transform: no I/O, no clock reads, no retained state between
/// calls. The evaluation time is an explicit input so that two calls with
/// identical arguments always produce identical output.
pub struct ListingRanker {
    pipeline: FilterPipeline,
}

impl ListingRanker {
    /// Ranker with the canonical five-stage filter pipeline.
    pub fn new() -> Self {
        Self {
            pipeline: FilterPipeline::standard(),
        }
    }

    /// Ranker over a custom pipeline (mainly for tests and experiments).
    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self { pipeline }
    }

    /// Filter then sort one batch of listings.
    ///
    /// ## Algorithm
    /// 1. Run the filter pipeline (marketplace, price, distance, condition,
    ///    location, in that order)
    /// 2. Stable-sort the survivors per `filters.sort`, scoring relevance
    ///    against `criterion` and the injected `now`
    ///
    /// An empty input yields an empty output; no stage errors on malformed
    /// optional values, they degrade via the documented defaults.
    pub fn rank(
        &self,
        listings: Vec<Listing>,
        criterion: &WatchCriterion,
        filters: &FilterState,
        now: DateTime<Utc>,
    ) -> Result<Vec<Listing>> {
        let mut survivors = self.pipeline.apply(listings, filters)?;
        crate::sort::sort_listings(&mut survivors, filters.sort, criterion, now);
        Ok(survivors)
    }
}

impl Default for ListingRanker {
    fn default() -> Self {
        Self::new()
    }
}
