//! Filter listings by marketplace source.
//!
//! When the view is pinned to one marketplace, everything else is dropped;
//! the "all" selection is a pass-through.

use crate::traits::Filter;
use anyhow::Result;
use listings::{FilterState, Listing, MarketplaceChoice};

/// Keeps only listings from the selected marketplace.
///
/// ## Algorithm
/// 1. If the view selects `All`, keep every listing
/// 2. Otherwise keep listings whose `source` equals the selected marketplace;
///    unrecognized sources compare by their raw string, so they are retained
///    only when selected verbatim
pub struct MarketplaceFilter;

impl Filter for MarketplaceFilter {
    fn name(&self) -> &str {
        "MarketplaceFilter"
    }

    fn apply(&self, listings: Vec<Listing>, filters: &FilterState) -> Result<Vec<Listing>> {
        let selected = match &filters.marketplace {
            MarketplaceChoice::All => return Ok(listings),
            MarketplaceChoice::Only(marketplace) => marketplace,
        };
        let filtered: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| &listing.source == selected)
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use listings::{Condition, Marketplace};

    fn listing(id: u64, source: Marketplace) -> Listing {
        Listing {
            id,
            title: format!("Listing {id}"),
            price: 100,
            location: "Riverside".to_string(),
            distance: 3.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            source,
            condition: Condition::Good,
        }
    }

    #[test]
    fn test_all_keeps_everything() {
        let listings = vec![
            listing(1, Marketplace::Craigslist),
            listing(2, Marketplace::Facebook),
            listing(3, Marketplace::Other("mercari".to_string())),
        ];
        let filters = FilterState::default();

        let filtered = MarketplaceFilter.apply(listings, &filters).unwrap();
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_only_keeps_matching_source() {
        let listings = vec![
            listing(1, Marketplace::Craigslist),
            listing(2, Marketplace::Facebook),
            listing(3, Marketplace::Craigslist),
        ];
        let filters = FilterState {
            marketplace: MarketplaceChoice::Only(Marketplace::Craigslist),
            ..FilterState::default()
        };

        let filtered = MarketplaceFilter.apply(listings, &filters).unwrap();
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|l| l.source == Marketplace::Craigslist));
    }

    #[test]
    fn test_unknown_source_selectable_verbatim() {
        let listings = vec![
            listing(1, Marketplace::Other("mercari".to_string())),
            listing(2, Marketplace::Offerup),
        ];
        let filters = FilterState {
            marketplace: MarketplaceChoice::Only(Marketplace::Other("mercari".to_string())),
            ..FilterState::default()
        };

        let filtered = MarketplaceFilter.apply(listings, &filters).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }
}
