//! Listing supply backed by a JSON feed file.
//!
//! The feed is a JSON array of listing objects. Records that fail to parse
//! are logged and skipped so one bad element never takes down the whole
//! result view; the surrounding application prefers degraded results over
//! hard errors.

use crate::ListingSupply;
use anyhow::{bail, Context, Result};
use listings::{Listing, Marketplace, WatchCriterion};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reads listings from a JSON array on disk.
pub struct FileSupply {
    path: PathBuf,
}

impl FileSupply {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Every well-formed listing in the feed, in file order.
    ///
    /// ## Algorithm
    /// 1. Parse the file as a JSON array
    /// 2. Decode each element independently
    /// 3. Skip elements that do not decode, with a warning naming the index
    pub fn load_all(&self) -> Result<Vec<Listing>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read listing feed {}", self.path.display()))?;
        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Listing feed {} is not valid JSON", self.path.display()))?;

        let Value::Array(elements) = value else {
            bail!(
                "Listing feed {} must be a JSON array of listings",
                self.path.display()
            );
        };

        let mut batch = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<Listing>(element) {
                Ok(listing) => batch.push(listing),
                Err(err) => {
                    warn!("Skipping malformed listing record {index}: {err}");
                }
            }
        }
        Ok(batch)
    }
}

impl ListingSupply for FileSupply {
    fn fetch(&self, _criterion: &WatchCriterion, marketplace: &Marketplace) -> Result<Vec<Listing>> {
        let batch = self.load_all()?;
        Ok(batch
            .into_iter()
            .filter(|listing| &listing.source == marketplace)
            .collect())
    }
}

/// Write a feed file usable by [`FileSupply`] (fixtures, demos).
pub fn write_feed(path: &Path, batch: &[Listing]) -> Result<()> {
    let contents = serde_json::to_string_pretty(batch)?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write listing feed {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use listings::{Category, Condition, CriterionDraft, CriterionStore};
    use chrono::NaiveDate;

    fn feed_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("flip-sniper-feed-test");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    fn sample_listing(id: u64, source: Marketplace) -> Listing {
        Listing {
            id,
            title: "PS5 console - pickup only".to_string(),
            price: 380,
            location: "Riverside".to_string(),
            distance: 3.5,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            source,
            condition: Condition::Good,
        }
    }

    fn test_criterion() -> WatchCriterion {
        let mut store = CriterionStore::new();
        let id = store
            .create(
                CriterionDraft::new("ps5", 500, "94103", Marketplace::Craigslist)
                    .with_category(Category::Electronics),
            )
            .unwrap();
        store.get(id).unwrap().clone()
    }

    #[test]
    fn test_load_all_reads_feed_in_order() {
        let path = feed_path("ordered.json");
        let batch = vec![
            sample_listing(1, Marketplace::Craigslist),
            sample_listing(2, Marketplace::Facebook),
        ];
        write_feed(&path, &batch).unwrap();

        let loaded = FileSupply::new(&path).load_all().unwrap();
        assert_eq!(loaded, batch);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let path = feed_path("malformed.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "title": "PS5", "price": 380, "location": "Riverside",
                 "distance": 3.5, "date": "2024-01-10", "source": "craigslist",
                 "condition": "Good"},
                {"id": "not a number", "title": "broken"},
                {"id": 3, "title": "PS5 digital", "price": 300, "location": "Midtown",
                 "distance": 1.0, "date": "2024-01-12", "source": "mercari",
                 "condition": "Open Box"}
            ]"#,
        )
        .unwrap();

        let loaded = FileSupply::new(&path).load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        // Open-set fields survive the trip
        assert_eq!(loaded[1].source, Marketplace::Other("mercari".to_string()));
        assert_eq!(
            loaded[1].condition,
            Condition::Other("Open Box".to_string())
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_fetch_filters_by_marketplace() {
        let path = feed_path("filtered.json");
        let batch = vec![
            sample_listing(1, Marketplace::Craigslist),
            sample_listing(2, Marketplace::Facebook),
            sample_listing(3, Marketplace::Craigslist),
        ];
        write_feed(&path, &batch).unwrap();

        let supply = FileSupply::new(&path);
        let fetched = supply
            .fetch(&test_criterion(), &Marketplace::Craigslist)
            .unwrap();
        let ids: Vec<u64> = fetched.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_non_array_feed_is_an_error() {
        let path = feed_path("not-array.json");
        std::fs::write(&path, r#"{"listings": []}"#).unwrap();

        assert!(FileSupply::new(&path).load_all().is_err());

        std::fs::remove_file(&path).ok();
    }
}
