//! # Listings Crate
//!
//! Core domain model for the FlipSniper marketplace watcher.
//!
//! ## Main Components
//!
//! - **types**: Listing, WatchCriterion, FilterState and the marketplace /
//!   condition / category enums
//! - **store**: validated in-memory watchlist with JSON persistence
//! - **error**: error types for criterion validation and persistence
//!
//! ## Example Usage
//!
//! ```ignore
//! use listings::{CriterionDraft, CriterionStore, Marketplace};
//!
//! let mut store = CriterionStore::load(Path::new("watchlist.json"))?;
//! let id = store.create(
//!     CriterionDraft::new("ps5", 400, "94103", Marketplace::Craigslist)
//!         .with_radius(15),
//! )?;
//! store.save(Path::new("watchlist.json"))?;
//! ```

// Public modules
pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{Result, WatchlistError};
pub use store::{CriterionStore, MARKETPLACE_CAP};
pub use types::{
    // Type aliases
    CriterionId,
    ListingId,
    // Core types
    CriterionDraft,
    FilterState,
    Listing,
    PriceRange,
    WatchCriterion,
    // Enums
    Category,
    Condition,
    Marketplace,
    MarketplaceChoice,
    SortOption,
};
