//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline. The canonical view
//! pipeline applies them in this order: marketplace, price range,
//! distance, condition, location.

pub mod condition;
pub mod distance;
pub mod location;
pub mod marketplace;
pub mod price_range;

// Re-export for convenience
pub use condition::ConditionFilter;
pub use distance::DistanceFilter;
pub use location::LocationFilter;
pub use marketplace::MarketplaceFilter;
pub use price_range::PriceRangeFilter;
