//! Relevance scoring for filtered listings.
//!
//! The relevance score blends two signals: how far below the criterion's
//! price ceiling a listing sits, and how recently it was posted. The blend
//! reproduces the production formula as-is, including its quirk: the recency
//! term is a raw epoch-millisecond ratio rather than a normalized window, so
//! for contemporary dates it hovers just under 1.0 and mostly acts as a
//! fine-grained tiebreaker under the 0.3 weight.

use chrono::{DateTime, NaiveTime, Utc};
use listings::{Listing, WatchCriterion};
use rayon::prelude::*;

/// Denominator substituted when the criterion has no usable price ceiling.
pub const FALLBACK_MAX_PRICE: f64 = 1000.0;

/// Weight of the price-undervaluation term.
pub const PRICE_WEIGHT: f64 = 0.7;

/// Weight of the recency term.
pub const RECENCY_WEIGHT: f64 = 0.3;

/// The price ceiling used for scoring: the criterion's `max_price` when
/// positive, otherwise [`FALLBACK_MAX_PRICE`]. Keeps the score defined (and
/// division safe) for criteria that never set a ceiling.
pub fn effective_max_price(criterion: &WatchCriterion) -> f64 {
    if criterion.max_price > 0 {
        criterion.max_price as f64
    } else {
        FALLBACK_MAX_PRICE
    }
}

/// Relevance score for one listing.
///
/// `score = (1 - price/effective_max_price) * 0.7 + (date_ms/now_ms) * 0.3`
///
/// Lower price and more recent date both increase the score. `now` must be
/// captured once per ranking pass and shared across every listing, so equal
/// inputs always produce equal scores.
pub fn relevance_score(listing: &Listing, criterion: &WatchCriterion, now: DateTime<Utc>) -> f64 {
    let price_term = 1.0 - listing.price as f64 / effective_max_price(criterion);

    let date_ms = listing
        .date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_millis() as f64;
    let now_ms = now.timestamp_millis() as f64;
    let recency_term = date_ms / now_ms;

    price_term * PRICE_WEIGHT + recency_term * RECENCY_WEIGHT
}

/// Score every listing in parallel, preserving input order.
///
/// Rayon's indexed collect keeps `scores[i]` aligned with `listings[i]`, so
/// the caller can pair them back up and sort stably.
pub fn score_all(listings: &[Listing], criterion: &WatchCriterion, now: DateTime<Utc>) -> Vec<f64> {
    listings
        .par_iter()
        .map(|listing| relevance_score(listing, criterion, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use listings::{Category, Condition, Marketplace};

    fn criterion(max_price: u32) -> WatchCriterion {
        WatchCriterion {
            id: 1,
            keyword: "ps5".to_string(),
            min_price: 0,
            max_price,
            zip: "94103".to_string(),
            radius: 10,
            marketplace: Marketplace::Craigslist,
            category: Category::Electronics,
        }
    }

    fn listing(price: u32, date: NaiveDate) -> Listing {
        Listing {
            id: 1,
            title: "PS5".to_string(),
            price,
            location: "Riverside".to_string(),
            distance: 3.0,
            date,
            source: Marketplace::Craigslist,
            condition: Condition::Good,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cheaper_scores_higher() {
        let c = criterion(500);
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let cheap = relevance_score(&listing(100, date), &c, fixed_now());
        let pricey = relevance_score(&listing(400, date), &c, fixed_now());
        assert!(cheap > pricey);
    }

    #[test]
    fn test_newer_scores_higher_at_equal_price() {
        let c = criterion(500);
        let older = relevance_score(
            &listing(250, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            &c,
            fixed_now(),
        );
        let newer = relevance_score(
            &listing(250, NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()),
            &c,
            fixed_now(),
        );
        assert!(newer > older);
    }

    #[test]
    fn test_zero_max_price_uses_fallback_denominator() {
        let c = criterion(0);
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let score = relevance_score(&listing(500, date), &c, fixed_now());
        assert!(score.is_finite());

        // With the 1000 fallback the price term is (1 - 500/1000) * 0.7
        let expected_price_term = 0.5 * PRICE_WEIGHT;
        let recency_term = score - expected_price_term;
        assert!(recency_term > 0.0 && recency_term <= RECENCY_WEIGHT);
    }

    #[test]
    fn test_score_all_preserves_order_and_agrees_with_single() {
        let c = criterion(500);
        let input = vec![
            listing(100, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            listing(300, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()),
            listing(450, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()),
        ];
        let scores = score_all(&input, &c, fixed_now());
        assert_eq!(scores.len(), 3);
        for (l, s) in input.iter().zip(&scores) {
            assert_eq!(*s, relevance_score(l, &c, fixed_now()));
        }
    }
}
