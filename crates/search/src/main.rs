//! Simple test harness for the search orchestrator.
//!
//! This binary runs one end-to-end search over the synthetic supply so the
//! whole pipeline can be exercised without the CLI.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use listings::{Category, CriterionDraft, CriterionStore, FilterState, Marketplace};
use search::SearchOrchestrator;
use supply::MockSupply;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,search=debug,supply=debug,ranker=debug")
        .init();

    info!("Starting FlipSniper search harness");

    // A sample criterion, validated through the store like any other
    let mut store = CriterionStore::new();
    let id = store.create(
        CriterionDraft::new("ps5", 450, "94103", Marketplace::Craigslist)
            .with_min_price(150)
            .with_radius(15)
            .with_category(Category::Electronics),
    )?;
    let criterion = store.get(id).expect("criterion just created").clone();
    info!("Created criterion {} for {:?}", id, criterion.keyword);

    let supply = MockSupply::new(Utc::now().date_naive()).with_seed(7);
    let orchestrator = SearchOrchestrator::new(Arc::new(supply));

    let filters = FilterState::default();
    let limit = 20;

    info!("Searching criterion {} (limit: {})", id, limit);
    let results = orchestrator.search(&criterion, &filters, limit).await?;

    info!("Received {} results:", results.len());
    for (i, result) in results.iter().enumerate() {
        info!(
            "{}. [{}] {} {} - {} ({:.1} mi, {}, {})",
            i + 1,
            result.badge.label,
            result.display_price,
            result.listing.title,
            result.listing.location,
            result.listing.distance,
            result.listing.date,
            result.listing.condition,
        );
    }

    Ok(())
}
