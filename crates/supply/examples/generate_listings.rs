//! Example: Generate a synthetic listing batch for a criterion
//!
//! Run with: cargo run --package supply --example generate_listings
//!
//! This example shows how to:
//! 1. Create a watch criterion
//! 2. Generate seeded listings for each marketplace
//! 3. Display the results

use chrono::Utc;
use listings::{Category, CriterionDraft, CriterionStore, Marketplace};
use supply::{ListingSupply, MockSupply};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("debug").init();

    println!("=== FlipSniper Listing Generation Example ===\n");

    // Create a sample criterion
    let mut store = CriterionStore::new();
    let id = store.create(
        CriterionDraft::new("ps5", 450, "94103", Marketplace::Craigslist)
            .with_min_price(150)
            .with_radius(15)
            .with_category(Category::Electronics),
    )?;
    let criterion = store.get(id).expect("criterion just created").clone();

    println!("Criterion: {:?} within {} miles of {}", criterion.keyword, criterion.radius, criterion.zip);
    println!("Price window: ${} to ${}\n", criterion.min_price, criterion.max_price);

    let supply = MockSupply::new(Utc::now().date_naive()).with_seed(7);

    for marketplace in Marketplace::KNOWN {
        let batch = supply.fetch(&criterion, &marketplace)?;
        println!("{} ({} listings):", marketplace, batch.len());
        for listing in batch.iter().take(5) {
            println!(
                "  [{}] ${} {} - {} ({:.1} mi, {})",
                listing.id, listing.price, listing.title, listing.location, listing.distance, listing.date
            );
        }
        println!();
    }

    Ok(())
}
