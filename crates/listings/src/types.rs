//! Core domain types for marketplace watchlists and listings.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key conventions:
//! - Type aliases for domain clarity (CriterionId, ListingId)
//! - Closed enums with an `Other(String)` escape hatch where the upstream
//!   data is an open string set (marketplaces, conditions)
//! - Derive macros for common traits

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up criterion ids with
// listing ids

/// Unique identifier for a saved search criterion
pub type CriterionId = u64;

/// Unique identifier for a listing within one result set
pub type ListingId = u64;

// =============================================================================
// Marketplace
// =============================================================================

/// A listing source.
///
/// The three supported marketplaces are modeled explicitly; anything else the
/// upstream supply hands us is carried through verbatim in `Other` so that
/// unrecognized sources still round-trip and sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Marketplace {
    Craigslist,
    Facebook,
    Offerup,
    Other(String),
}

impl Marketplace {
    /// The closed set of supported marketplaces, in canonical order.
    pub const KNOWN: [Marketplace; 3] = [
        Marketplace::Craigslist,
        Marketplace::Facebook,
        Marketplace::Offerup,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Marketplace::Craigslist => "craigslist",
            Marketplace::Facebook => "facebook",
            Marketplace::Offerup => "offerup",
            Marketplace::Other(s) => s,
        }
    }
}

impl From<String> for Marketplace {
    fn from(s: String) -> Self {
        match s.as_str() {
            "craigslist" => Marketplace::Craigslist,
            "facebook" => Marketplace::Facebook,
            "offerup" => Marketplace::Offerup,
            _ => Marketplace::Other(s),
        }
    }
}

impl From<Marketplace> for String {
    fn from(m: Marketplace) -> Self {
        m.as_str().to_string()
    }
}

impl FromStr for Marketplace {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Marketplace::from(s.to_string()))
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Condition
// =============================================================================

/// Advertised condition of a listed item.
///
/// Same open-set tolerance as [`Marketplace`]: the five common values are
/// modeled, everything else is preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
    Other(String),
}

impl Condition {
    pub const KNOWN: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
            Condition::Other(s) => s,
        }
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        match s.as_str() {
            "New" => Condition::New,
            "Like New" => Condition::LikeNew,
            "Good" => Condition::Good,
            "Fair" => Condition::Fair,
            "Poor" => Condition::Poor,
            _ => Condition::Other(s),
        }
    }
}

impl From<Condition> for String {
    fn from(c: Condition) -> Self {
        c.as_str().to_string()
    }
}

impl FromStr for Condition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Condition::from(s.to_string()))
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Search category for a watch criterion.
///
/// Unlike sources and conditions this is a closed set: the category is chosen
/// from a fixed dropdown at input time, never scraped from upstream data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Vehicles,
    Toys,
    Sports,
    Collectibles,
    Tools,
    Jewelry,
    Books,
    All,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Clothing => "clothing",
            Category::Vehicles => "vehicles",
            Category::Toys => "toys",
            Category::Sports => "sports",
            Category::Collectibles => "collectibles",
            Category::Tools => "tools",
            Category::Jewelry => "jewelry",
            Category::Books => "books",
            Category::All => "all",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "furniture" => Ok(Category::Furniture),
            "clothing" => Ok(Category::Clothing),
            "vehicles" => Ok(Category::Vehicles),
            "toys" => Ok(Category::Toys),
            "sports" => Ok(Category::Sports),
            "collectibles" => Ok(Category::Collectibles),
            "tools" => Ok(Category::Tools),
            "jewelry" => Ok(Category::Jewelry),
            "books" => Ok(Category::Books),
            "all" => Ok(Category::All),
            _ => Err(format!("unknown category: {s}")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// WatchCriterion
// =============================================================================

/// A saved search: what the user is hunting for and where.
///
/// Invariants (`keyword` non-empty, `zip` exactly 5 digits,
/// `min_price <= max_price`, `radius` in 0..=100, positive `max_price`) are
/// enforced by [`CriterionStore`](crate::store::CriterionStore) at input time,
/// not re-checked by consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchCriterion {
    /// Assigned at creation, immutable thereafter
    pub id: CriterionId,
    pub keyword: String,
    pub min_price: u32,
    pub max_price: u32,
    /// 5-digit ZIP code the search is centered on
    pub zip: String,
    /// Search radius in miles, 0..=100
    pub radius: u8,
    pub marketplace: Marketplace,
    pub category: Category,
}

/// The user-editable fields of a criterion, before an id is assigned.
///
/// Built with defaults (`min_price` 0, `radius` 1 mile, category `all`) and
/// customized through the `with_*` setters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionDraft {
    pub keyword: String,
    pub min_price: u32,
    pub max_price: u32,
    pub zip: String,
    pub radius: u8,
    pub marketplace: Marketplace,
    pub category: Category,
}

impl CriterionDraft {
    pub fn new(
        keyword: impl Into<String>,
        max_price: u32,
        zip: impl Into<String>,
        marketplace: Marketplace,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            min_price: 0,
            max_price,
            zip: zip.into(),
            radius: 1,
            marketplace,
            category: Category::All,
        }
    }

    pub fn with_min_price(mut self, min_price: u32) -> Self {
        self.min_price = min_price;
        self
    }

    pub fn with_radius(mut self, radius: u8) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

// =============================================================================
// Listing
// =============================================================================

/// A single marketplace item offering, considered as a match candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique within one result set
    pub id: ListingId,
    pub title: String,
    /// Whole currency units; minor units are not modeled
    pub price: u32,
    /// Free-text place name
    pub location: String,
    /// Miles from the searcher
    pub distance: f64,
    /// Posting date, day granularity
    pub date: NaiveDate,
    pub source: Marketplace,
    pub condition: Condition,
}

// =============================================================================
// FilterState
// =============================================================================

/// Marketplace selection for a result view: everything, or one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketplaceChoice {
    All,
    Only(Marketplace),
}

/// Closed price interval, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub low: u32,
    pub high: u32,
}

impl PriceRange {
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.low && price <= self.high
    }
}

/// How a result view is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
    Distance,
    #[default]
    Relevance,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::PriceHigh => "price-high",
            SortOption::PriceLow => "price-low",
            SortOption::Distance => "distance",
            SortOption::Relevance => "relevance",
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOption::Newest),
            "oldest" => Ok(SortOption::Oldest),
            "price-high" => Ok(SortOption::PriceHigh),
            "price-low" => Ok(SortOption::PriceLow),
            "distance" => Ok(SortOption::Distance),
            "relevance" => Ok(SortOption::Relevance),
            _ => Err(format!("unknown sort option: {s}")),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ephemeral, session-scoped view settings for one result page.
///
/// Never persisted. An empty `conditions` or `locations` set means
/// "no restriction", not "reject everything".
#[derive(Debug, Clone)]
pub struct FilterState {
    pub marketplace: MarketplaceChoice,
    pub sort: SortOption,
    pub price_range: PriceRange,
    /// Inclusive upper bound, miles
    pub max_distance: f64,
    pub conditions: HashSet<Condition>,
    pub locations: HashSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            marketplace: MarketplaceChoice::All,
            sort: SortOption::Relevance,
            price_range: PriceRange::new(0, u32::MAX),
            max_distance: f64::INFINITY,
            conditions: HashSet::new(),
            locations: HashSet::new(),
        }
    }
}
