//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to listing sets.

use anyhow::Result;
use listings::{FilterState, Listing};

/// Core trait for filtering listings.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Listing> and return a filtered Vec
/// - This allows for efficient transformations without unnecessary cloning
/// - Each stage is a pure subset operation: it may drop listings, never add
///   or reorder them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of listings.
    ///
    /// # Arguments
    /// * `listings` - The listings to filter (takes ownership)
    /// * `filters` - The active view settings driving each stage
    ///
    /// # Returns
    /// * `Ok(Vec<Listing>)` - The retained listings, in input order
    /// * `Err` - If filtering fails
    fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>>;
}
