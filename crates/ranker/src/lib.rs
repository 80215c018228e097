//! Pipeline for filtering, sorting, and scoring marketplace listings.
//!
//! This crate provides:
//! - Filter trait and implementations for listing filtering
//! - FilterPipeline for composing filters
//! - Stable sorting per view option, including the blended relevance score
//! - Presentation helpers whose output ships with every ranked listing
//!
//! ## Architecture
//! The ranker processes one batch per call:
//! 1. Filters remove unwanted listings (wrong marketplace, out of price
//!    range, too far, wrong condition or location)
//! 2. The survivors are stable-sorted per the view's sort option
//! 3. For relevance sort, scores blend price-undervaluation and recency
//!
//! ## Example Usage
//! ```ignore
//! use ranker::ListingRanker;
//!
//! let ranker = ListingRanker::new();
//! let now = Utc::now(); // captured once, passed in
//! let ranked = ranker.rank(batch, &criterion, &filters, now)?;
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod format;
pub mod ranker;
pub mod scoring;
pub mod sort;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use format::{format_currency, marketplace_badge, Badge, BadgeStyle};
pub use ranker::ListingRanker;
pub use scoring::{effective_max_price, relevance_score, FALLBACK_MAX_PRICE};
pub use traits::Filter;
