//! # Search Orchestrator
//!
//! This module coordinates one search over a watch criterion:
//! 1. Capture the evaluation clock, once
//! 2. Fetch listing batches per marketplace (in parallel for "all")
//! 3. Merge batches deterministically
//! 4. Filter and sort through the ranking pipeline
//! 5. Truncate to the requested page size
//! 6. Decorate each survivor for display
//!
//! The orchestrator owns the only wall-clock read in the system; the
//! ranking core receives that reading as a plain argument.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use listings::{FilterState, Listing, ListingId, Marketplace, MarketplaceChoice, WatchCriterion};
use ranker::{format_currency, marketplace_badge, Badge, ListingRanker};
use supply::ListingSupply;

/// Final presentation-ready result handed to the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedListing {
    pub listing: Listing,
    /// Pre-rendered price, e.g. "$1,500"
    pub display_price: String,
    pub badge: Badge,
}

/// Coordinates supply, ranking, and decoration for one criterion at a time.
#[derive(Clone)]
pub struct SearchOrchestrator {
    supply: Arc<dyn ListingSupply>,
    ranker: Arc<ListingRanker>,
}

impl SearchOrchestrator {
    /// Create an orchestrator over the given supply.
    ///
    /// The supply handle is the process-wide collaborator; nothing in the
    /// ranking path depends on its identity.
    pub fn new(supply: Arc<dyn ListingSupply>) -> Self {
        Self {
            supply,
            ranker: Arc::new(ListingRanker::new()),
        }
    }

    /// Main entry point: run one search and return display-ready results.
    ///
    /// # Arguments
    /// * `criterion` - The saved search driving supply and relevance scoring
    /// * `filters` - The view's filter and sort state
    /// * `limit` - Page size for the result view
    pub async fn search(
        &self,
        criterion: &WatchCriterion,
        filters: &FilterState,
        limit: usize,
    ) -> Result<Vec<RankedListing>> {
        let started = Instant::now();

        // One clock reading per search keeps relevance scores consistent
        // across every listing in the pass.
        let now = Utc::now();

        let batches = self.fetch_batches(criterion, &filters.marketplace).await?;
        info!(
            "Fetched {} batches ({} listings total) for criterion {}",
            batches.len(),
            batches.iter().map(|b| b.len()).sum::<usize>(),
            criterion.id
        );

        let merged = merge_batches(batches);
        info!("Merged batches, total after dedup: {}", merged.len());

        let results = self.rank_at(merged, criterion, filters, limit, now)?;
        info!(
            "Search for criterion {} returned {} listings in {:.2?}",
            criterion.id,
            results.len(),
            started.elapsed()
        );
        Ok(results)
    }

    /// Rank an already-fetched batch (feed files, tests) with a fresh clock
    /// reading.
    pub fn rank_feed(
        &self,
        batch: Vec<Listing>,
        criterion: &WatchCriterion,
        filters: &FilterState,
        limit: usize,
    ) -> Result<Vec<RankedListing>> {
        self.rank_at(batch, criterion, filters, limit, Utc::now())
    }

    /// Fetch one batch per marketplace in scope.
    ///
    /// For `All`, the three known marketplaces are fetched in parallel on
    /// blocking tasks; a pinned view fetches just its one marketplace.
    async fn fetch_batches(
        &self,
        criterion: &WatchCriterion,
        choice: &MarketplaceChoice,
    ) -> Result<Vec<Vec<Listing>>> {
        let spawn_fetch = |marketplace: Marketplace| {
            let supply = Arc::clone(&self.supply);
            let criterion = criterion.clone();
            tokio::task::spawn_blocking(move || supply.fetch(&criterion, &marketplace))
        };

        match choice {
            MarketplaceChoice::Only(marketplace) => {
                let batch = spawn_fetch(marketplace.clone())
                    .await
                    .context("Supply task panicked")??;
                Ok(vec![batch])
            }
            MarketplaceChoice::All => {
                let (craigslist, facebook, offerup) = tokio::join!(
                    spawn_fetch(Marketplace::Craigslist),
                    spawn_fetch(Marketplace::Facebook),
                    spawn_fetch(Marketplace::Offerup),
                );
                Ok(vec![
                    craigslist.context("Craigslist supply task panicked")??,
                    facebook.context("Facebook supply task panicked")??,
                    offerup.context("Offerup supply task panicked")??,
                ])
            }
        }
    }

    fn rank_at(
        &self,
        batch: Vec<Listing>,
        criterion: &WatchCriterion,
        filters: &FilterState,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedListing>> {
        let mut ranked = self
            .ranker
            .rank(batch, criterion, filters, now)
            .context("Failed to rank listings")?;
        ranked.truncate(limit);
        Ok(decorate(ranked))
    }
}

/// Merge per-marketplace batches into one sequence.
///
/// Batches are concatenated in the fixed fetch order and duplicate listing
/// ids are dropped keeping the first occurrence. Unlike a map-based merge
/// this preserves a deterministic order, which the stable sorts downstream
/// rely on.
fn merge_batches(batches: Vec<Vec<Listing>>) -> Vec<Listing> {
    let mut seen: HashSet<ListingId> = HashSet::new();
    let mut merged = Vec::with_capacity(batches.iter().map(|b| b.len()).sum());
    for batch in batches {
        for listing in batch {
            if seen.insert(listing.id) {
                merged.push(listing);
            }
        }
    }
    merged
}

/// Attach the pre-rendered price and marketplace badge to each listing.
fn decorate(ranked: Vec<Listing>) -> Vec<RankedListing> {
    ranked
        .into_iter()
        .map(|listing| RankedListing {
            display_price: format_currency(listing.price),
            badge: marketplace_badge(&listing.source),
            listing,
        })
        .collect()
}
