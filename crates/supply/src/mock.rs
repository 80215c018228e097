//! Synthetic listing generation.
//!
//! Stands in for real marketplace integrations: given a watch criterion it
//! fabricates a plausible batch of listings for one marketplace. Generation
//! is fully seeded, so the same (seed, criterion, marketplace) triple always
//! yields the same batch and every downstream test can rely on it.

use crate::ListingSupply;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use listings::{Category, Condition, Listing, ListingId, Marketplace, WatchCriterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Trailing window the generated posting dates fall into, in days.
const DATE_WINDOW_DAYS: i64 = 14;

/// Place names the generator draws from.
const LOCATIONS: [&str; 8] = [
    "Riverside",
    "Oak Grove",
    "Maple Heights",
    "Cedar Park",
    "Lakewood",
    "Downtown",
    "Midtown",
    "Brookfield",
];

/// Title tails shared by every category.
const QUALIFIERS: [&str; 8] = [
    "great condition",
    "must go this weekend",
    "OBO",
    "pickup only",
    "barely used",
    "moving sale",
    "price firm",
    "cash app or cash only",
];

/// Generates synthetic listings for a criterion.
///
/// ## Configuration
/// - `anchor`: the most recent possible posting date; batches fill the
///   trailing two weeks behind it
/// - `seed`: stream seed, mixed with the criterion id and marketplace so
///   each (criterion, marketplace) pair gets its own stable stream
/// - `listings_per_source`: batch size per marketplace
pub struct MockSupply {
    anchor: NaiveDate,
    seed: u64,
    listings_per_source: usize,
}

impl MockSupply {
    /// Create a supply anchored at the given date.
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            seed: 0,
            listings_per_source: 24,
        }
    }

    /// Configure the stream seed (default: 0)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Configure the batch size per marketplace (default: 24)
    pub fn with_listings_per_source(mut self, count: usize) -> Self {
        self.listings_per_source = count;
        self
    }

    /// Stable per-(criterion, marketplace) RNG stream.
    fn rng_for(&self, criterion: &WatchCriterion, marketplace: &Marketplace) -> StdRng {
        let source_tag: u64 = marketplace
            .as_str()
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        let stream = self
            .seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(criterion.id)
            .wrapping_add(source_tag);
        StdRng::seed_from_u64(stream)
    }

    fn make_listing(
        &self,
        rng: &mut StdRng,
        id: ListingId,
        index: usize,
        criterion: &WatchCriterion,
        marketplace: &Marketplace,
    ) -> Listing {
        let low = criterion.min_price;
        let high = criterion.max_price.max(low.saturating_add(1));

        // Every sixth listing is priced past the ceiling so the price
        // filter has real work to do.
        let price = if index % 6 == 5 {
            high.saturating_add(rng.random_range(50..=400))
        } else {
            rng.random_range(low..=high)
        };

        // Distances run to twice the criterion radius for the same reason.
        let reach = (criterion.radius as f64 * 2.0).max(5.0);
        let distance = (rng.random_range(0.0..=reach) * 10.0).round() / 10.0;

        let date = self.anchor - Duration::days(rng.random_range(0..DATE_WINDOW_DAYS));

        let condition = Condition::KNOWN[rng.random_range(0..Condition::KNOWN.len())].clone();
        let location = LOCATIONS[rng.random_range(0..LOCATIONS.len())].to_string();

        Listing {
            id,
            title: make_title(rng, criterion),
            price,
            location,
            distance,
            date,
            source: marketplace.clone(),
            condition,
        }
    }
}

impl ListingSupply for MockSupply {
    #[instrument(skip(self, criterion, marketplace), fields(criterion_id = criterion.id, marketplace = %marketplace))]
    fn fetch(&self, criterion: &WatchCriterion, marketplace: &Marketplace) -> Result<Vec<Listing>> {
        let mut rng = self.rng_for(criterion, marketplace);

        // Ids are namespaced per marketplace so a merged batch stays unique.
        let id_base = match marketplace {
            Marketplace::Craigslist => 1_000,
            Marketplace::Facebook => 2_000,
            Marketplace::Offerup => 3_000,
            Marketplace::Other(_) => 9_000,
        };

        let batch: Vec<Listing> = (0..self.listings_per_source)
            .map(|i| {
                self.make_listing(&mut rng, id_base + i as ListingId, i, criterion, marketplace)
            })
            .collect();

        debug!("Generated {} listings", batch.len());
        Ok(batch)
    }
}

fn make_title(rng: &mut StdRng, criterion: &WatchCriterion) -> String {
    let qualifier = QUALIFIERS[rng.random_range(0..QUALIFIERS.len())];
    let descriptor = category_descriptor(criterion.category, rng);
    match descriptor {
        Some(descriptor) => format!("{} {} - {}", descriptor, criterion.keyword, qualifier),
        None => format!("{} - {}", criterion.keyword, qualifier),
    }
}

/// A category-flavored lead-in word, when the category implies one.
fn category_descriptor(category: Category, rng: &mut StdRng) -> Option<&'static str> {
    let pool: &[&'static str] = match category {
        Category::Electronics => &["Refurbished", "Sealed", "Working"],
        Category::Furniture => &["Solid wood", "Mid-century", "IKEA"],
        Category::Clothing => &["Vintage", "Designer", "NWT"],
        Category::Vehicles => &["Clean title", "Low miles", "One owner"],
        Category::Toys => &["Complete", "Boxed", "Retro"],
        Category::Sports => &["Tuned", "Pro-grade", "Youth"],
        Category::Collectibles => &["Graded", "Rare", "Mint"],
        Category::Tools => &["Heavy duty", "Cordless", "Contractor"],
        Category::Jewelry => &["Sterling", "Appraised", "Estate"],
        Category::Books => &["First edition", "Hardcover", "Signed"],
        Category::All => return None,
    };
    Some(pool[rng.random_range(0..pool.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use listings::{Category, CriterionDraft, CriterionStore};

    fn test_criterion() -> WatchCriterion {
        let mut store = CriterionStore::new();
        let id = store
            .create(
                CriterionDraft::new("road bike", 800, "10001", Marketplace::Offerup)
                    .with_min_price(200)
                    .with_radius(15)
                    .with_category(Category::Sports),
            )
            .unwrap();
        store.get(id).unwrap().clone()
    }

    #[test]
    fn test_batch_size_is_configurable() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let supply = MockSupply::new(anchor).with_listings_per_source(5);
        let batch = supply
            .fetch(&test_criterion(), &Marketplace::Offerup)
            .unwrap();
        assert_eq!(batch.len(), 5);
    }

    #[test]
    fn test_dates_fall_in_trailing_window() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let earliest = anchor - Duration::days(DATE_WINDOW_DAYS);
        let batch = MockSupply::new(anchor)
            .fetch(&test_criterion(), &Marketplace::Craigslist)
            .unwrap();

        for listing in &batch {
            assert!(listing.date <= anchor);
            assert!(listing.date > earliest);
        }
    }

    #[test]
    fn test_most_prices_respect_bounds_with_some_outliers() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let criterion = test_criterion();
        let batch = MockSupply::new(anchor)
            .with_listings_per_source(60)
            .fetch(&criterion, &Marketplace::Facebook)
            .unwrap();

        let in_bounds = batch
            .iter()
            .filter(|l| l.price >= criterion.min_price && l.price <= criterion.max_price)
            .count();
        let outliers = batch.len() - in_bounds;

        assert_eq!(outliers, 10, "one in six listings should overshoot");
        assert!(batch
            .iter()
            .filter(|l| l.price > criterion.max_price)
            .all(|l| l.price <= criterion.max_price + 400));
    }

    #[test]
    fn test_distances_are_nonnegative_and_bounded() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let criterion = test_criterion();
        let batch = MockSupply::new(anchor)
            .fetch(&criterion, &Marketplace::Craigslist)
            .unwrap();

        for listing in &batch {
            assert!(listing.distance >= 0.0);
            assert!(listing.distance <= criterion.radius as f64 * 2.0);
        }
    }

    #[test]
    fn test_ids_unique_within_merged_batches() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let criterion = test_criterion();
        let supply = MockSupply::new(anchor);

        let mut all = Vec::new();
        for marketplace in Marketplace::KNOWN {
            all.extend(supply.fetch(&criterion, &marketplace).unwrap());
        }
        let mut ids: Vec<_> = all.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }
}
