//! Error types for the listings crate.
//!
//! A single thiserror enum covers criterion validation and watchlist file
//! persistence. Variants carry enough context to render a useful message to
//! the person who typed the bad value.

use crate::types::CriterionId;
use thiserror::Error;

/// Errors raised when creating, updating, or persisting watch criteria
#[derive(Error, Debug)]
pub enum WatchlistError {
    /// A criterion must have a search keyword
    #[error("keyword must not be empty")]
    EmptyKeyword,

    /// ZIP codes are exactly 5 ASCII digits
    #[error("invalid ZIP code {zip:?}: expected exactly 5 digits")]
    InvalidZip { zip: String },

    /// A criterion needs a positive price ceiling
    #[error("max price must be positive")]
    ZeroMaxPrice,

    /// The price interval must not be inverted
    #[error("min price {min} exceeds max price {max}")]
    PriceRangeInverted { min: u32, max: u32 },

    /// Radius is capped at 100 miles
    #[error("radius {radius} miles is outside the supported range 0-100")]
    RadiusOutOfRange { radius: u8 },

    /// At most 5 active criteria per marketplace
    #[error("watchlist already has {cap} active criteria for {marketplace}")]
    MarketplaceCapReached { marketplace: String, cap: usize },

    /// Lookup / update / delete of an id the store has never seen
    #[error("no criterion with id {id}")]
    UnknownCriterion { id: CriterionId },

    /// Watchlist file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Watchlist file contents were not valid JSON for this schema
    #[error("failed to parse watchlist file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, WatchlistError>;
