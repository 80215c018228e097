//! Stable ordering of filtered listings.
//!
//! Every branch uses a stable sort: listings with equal keys keep their
//! relative input order, so the upstream supply order (which encodes
//! recency of discovery) survives ties and repeated calls with identical
//! inputs produce identical output.

use crate::scoring;
use chrono::{DateTime, Utc};
use listings::{Listing, SortOption, WatchCriterion};
use std::cmp::Ordering;

/// Sort listings in place per the selected option.
///
/// `now` is the single wall-clock reading for this ranking pass; only the
/// relevance branch consumes it.
pub fn sort_listings(
    listings: &mut Vec<Listing>,
    sort: SortOption,
    criterion: &WatchCriterion,
    now: DateTime<Utc>,
) {
    match sort {
        SortOption::Newest => listings.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOption::Oldest => listings.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOption::PriceHigh => listings.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::PriceLow => listings.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::Distance => listings.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
        }),
        SortOption::Relevance => sort_by_relevance(listings, criterion, now),
    }
}

/// Descending relevance, stable on score ties.
///
/// Scores are computed once up front (one parallel pass, one clock reading)
/// and carried alongside each listing through the sort, so the comparator
/// never recomputes them.
fn sort_by_relevance(listings: &mut Vec<Listing>, criterion: &WatchCriterion, now: DateTime<Utc>) {
    let scores = scoring::score_all(listings, criterion, now);
    let mut keyed: Vec<(Listing, f64)> = listings.drain(..).zip(scores).collect();
    keyed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    listings.extend(keyed.into_iter().map(|(listing, _)| listing));
}
