//! # Supply Crate
//!
//! This crate implements listing supplies: the upstream sources that hand
//! raw listing batches to the search pipeline.
//!
//! ## Components
//!
//! ### MockSupply (synthetic)
//! Deterministic, seeded listing generation keyed off a watch criterion:
//! - Titles built from the criterion keyword and per-category qualifiers
//! - Prices clustered inside the criterion's bounds, with outliers so the
//!   price filter has something to do
//! - Distances spread past the criterion radius for the same reason
//! - Dates inside a trailing two-week window of a supplied anchor date
//!
//! ### FileSupply (feed file)
//! Reads a JSON array of listings from disk. Malformed records are skipped
//! with a warning rather than failing the whole feed.
//!
//! ## Example Usage
//!
//! ```ignore
//! use supply::{ListingSupply, MockSupply};
//!
//! let supply = MockSupply::new(anchor_date).with_seed(7);
//! let batch = supply.fetch(&criterion, &Marketplace::Craigslist)?;
//! ```

use anyhow::Result;
use listings::{Listing, Marketplace, WatchCriterion};

// Public modules
pub mod file;
pub mod mock;

// Re-export commonly used types
pub use file::FileSupply;
pub use mock::MockSupply;

/// A source of raw listing batches for one marketplace.
///
/// Implementations are `Send + Sync` so the orchestrator can fan fetches
/// out across blocking tasks. A fetch returns only listings tagged with the
/// requested marketplace.
pub trait ListingSupply: Send + Sync {
    fn fetch(&self, criterion: &WatchCriterion, marketplace: &Marketplace) -> Result<Vec<Listing>>;
}
