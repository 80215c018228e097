//! In-memory store of watch criteria with JSON persistence.
//!
//! The store is the input boundary for the whole system: every structural
//! invariant on a criterion (non-empty keyword, 5-digit ZIP, ordered price
//! bounds, radius range, per-marketplace cap) is enforced here, at create and
//! update time. Downstream consumers never re-validate.

use crate::error::{Result, WatchlistError};
use crate::types::{CriterionDraft, CriterionId, Marketplace, WatchCriterion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Maximum number of active criteria per marketplace.
pub const MARKETPLACE_CAP: usize = 5;

/// Holds all saved criteria, keyed by id.
///
/// A BTreeMap keeps iteration in ascending id order, so listing the watchlist
/// is deterministic.
#[derive(Debug, Serialize, Deserialize)]
pub struct CriterionStore {
    criteria: BTreeMap<CriterionId, WatchCriterion>,
    next_id: CriterionId,
}

impl Default for CriterionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CriterionStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self {
            criteria: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Load a watchlist from a JSON file.
    ///
    /// A missing file is not an error: it yields an empty store, so first run
    /// works without setup.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = fs::read_to_string(path)?;
        let mut store: CriterionStore = serde_json::from_str(&contents)?;
        // Guard against files edited by hand: the id counter must stay ahead
        // of every stored id.
        let max_id = store.criteria.keys().next_back().copied().unwrap_or(0);
        store.next_id = store.next_id.max(max_id + 1);
        Ok(store)
    }

    /// Write the watchlist to a JSON file, pretty-printed
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate and insert a new criterion, returning its assigned id
    pub fn create(&mut self, draft: CriterionDraft) -> Result<CriterionId> {
        self.validate(&draft)?;
        self.check_cap(&draft.marketplace, None)?;

        let id = self.next_id;
        self.next_id += 1;
        self.criteria.insert(
            id,
            WatchCriterion {
                id,
                keyword: draft.keyword,
                min_price: draft.min_price,
                max_price: draft.max_price,
                zip: draft.zip,
                radius: draft.radius,
                marketplace: draft.marketplace,
                category: draft.category,
            },
        );
        Ok(id)
    }

    /// Replace every field of an existing criterion except its id
    pub fn update(&mut self, id: CriterionId, draft: CriterionDraft) -> Result<()> {
        if !self.criteria.contains_key(&id) {
            return Err(WatchlistError::UnknownCriterion { id });
        }
        self.validate(&draft)?;
        // The criterion being replaced does not count against the cap.
        self.check_cap(&draft.marketplace, Some(id))?;

        self.criteria.insert(
            id,
            WatchCriterion {
                id,
                keyword: draft.keyword,
                min_price: draft.min_price,
                max_price: draft.max_price,
                zip: draft.zip,
                radius: draft.radius,
                marketplace: draft.marketplace,
                category: draft.category,
            },
        );
        Ok(())
    }

    /// Delete a criterion, returning it
    pub fn remove(&mut self, id: CriterionId) -> Result<WatchCriterion> {
        self.criteria
            .remove(&id)
            .ok_or(WatchlistError::UnknownCriterion { id })
    }

    /// Get a criterion by id
    pub fn get(&self, id: CriterionId) -> Option<&WatchCriterion> {
        self.criteria.get(&id)
    }

    /// All criteria in ascending id order
    pub fn all(&self) -> impl Iterator<Item = &WatchCriterion> {
        self.criteria.values()
    }

    /// Number of active criteria for one marketplace
    pub fn count_for(&self, marketplace: &Marketplace) -> usize {
        self.criteria
            .values()
            .filter(|c| &c.marketplace == marketplace)
            .count()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    fn validate(&self, draft: &CriterionDraft) -> Result<()> {
        if draft.keyword.trim().is_empty() {
            return Err(WatchlistError::EmptyKeyword);
        }
        if draft.zip.len() != 5 || !draft.zip.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WatchlistError::InvalidZip {
                zip: draft.zip.clone(),
            });
        }
        if draft.max_price == 0 {
            return Err(WatchlistError::ZeroMaxPrice);
        }
        if draft.min_price > draft.max_price {
            return Err(WatchlistError::PriceRangeInverted {
                min: draft.min_price,
                max: draft.max_price,
            });
        }
        if draft.radius > 100 {
            return Err(WatchlistError::RadiusOutOfRange {
                radius: draft.radius,
            });
        }
        Ok(())
    }

    fn check_cap(&self, marketplace: &Marketplace, exclude: Option<CriterionId>) -> Result<()> {
        let count = self
            .criteria
            .values()
            .filter(|c| &c.marketplace == marketplace && Some(c.id) != exclude)
            .count();
        if count >= MARKETPLACE_CAP {
            return Err(WatchlistError::MarketplaceCapReached {
                marketplace: marketplace.to_string(),
                cap: MARKETPLACE_CAP,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn draft(keyword: &str) -> CriterionDraft {
        CriterionDraft::new(keyword, 500, "94103", Marketplace::Craigslist)
            .with_radius(10)
            .with_category(Category::Electronics)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = CriterionStore::new();
        let a = store.create(draft("ps5")).unwrap();
        let b = store.create(draft("monitor")).unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_rejects_empty_keyword() {
        let mut store = CriterionStore::new();
        let result = store.create(draft("   "));
        assert!(matches!(result, Err(WatchlistError::EmptyKeyword)));
    }

    #[test]
    fn test_create_rejects_bad_zip() {
        let mut store = CriterionStore::new();
        for zip in ["9410", "941033", "94x03", "9410 "] {
            let mut d = draft("ps5");
            d.zip = zip.to_string();
            assert!(
                matches!(store.create(d), Err(WatchlistError::InvalidZip { .. })),
                "zip {zip:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_create_rejects_inverted_price_range() {
        let mut store = CriterionStore::new();
        let d = draft("ps5").with_min_price(600);
        assert!(matches!(
            store.create(d),
            Err(WatchlistError::PriceRangeInverted { min: 600, max: 500 })
        ));
    }

    #[test]
    fn test_create_rejects_zero_max_price() {
        let mut store = CriterionStore::new();
        let mut d = draft("ps5");
        d.max_price = 0;
        assert!(matches!(store.create(d), Err(WatchlistError::ZeroMaxPrice)));
    }

    #[test]
    fn test_create_rejects_radius_over_100() {
        let mut store = CriterionStore::new();
        let d = draft("ps5").with_radius(101);
        assert!(matches!(
            store.create(d),
            Err(WatchlistError::RadiusOutOfRange { radius: 101 })
        ));
    }

    #[test]
    fn test_marketplace_cap_is_per_marketplace() {
        let mut store = CriterionStore::new();
        for i in 0..MARKETPLACE_CAP {
            store.create(draft(&format!("item {i}"))).unwrap();
        }
        // Sixth craigslist criterion is rejected
        assert!(matches!(
            store.create(draft("one too many")),
            Err(WatchlistError::MarketplaceCapReached { .. })
        ));
        // A different marketplace still has room
        let mut d = draft("facebook find");
        d.marketplace = Marketplace::Facebook;
        assert!(store.create(d).is_ok());
    }

    #[test]
    fn test_update_replaces_fields_but_not_id() {
        let mut store = CriterionStore::new();
        let id = store.create(draft("ps5")).unwrap();

        let replacement = CriterionDraft::new("xbox", 300, "10001", Marketplace::Offerup);
        store.update(id, replacement).unwrap();

        let updated = store.get(id).unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.keyword, "xbox");
        assert_eq!(updated.zip, "10001");
        assert_eq!(updated.marketplace, Marketplace::Offerup);
    }

    #[test]
    fn test_update_cap_check_excludes_self() {
        let mut store = CriterionStore::new();
        let mut first = 0;
        for i in 0..MARKETPLACE_CAP {
            let id = store.create(draft(&format!("item {i}"))).unwrap();
            if i == 0 {
                first = id;
            }
        }
        // Updating an existing criterion within a full marketplace is fine
        assert!(store.update(first, draft("renamed")).is_ok());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = CriterionStore::new();
        assert!(matches!(
            store.remove(42),
            Err(WatchlistError::UnknownCriterion { id: 42 })
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = CriterionStore::new();
        store.create(draft("ps5")).unwrap();
        store
            .create(draft("road bike").with_min_price(50))
            .unwrap();

        let dir = std::env::temp_dir().join("flip-sniper-store-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("watchlist.json");
        store.save(&path).unwrap();

        let loaded = CriterionStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get(1).unwrap().keyword, "ps5");

        // Ids keep advancing after a reload
        let mut loaded = loaded;
        let next = loaded.create(draft("couch")).unwrap();
        assert_eq!(next, 3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_empty_store() {
        let store =
            CriterionStore::load(Path::new("/nonexistent/flip-sniper/watchlist.json")).unwrap();
        assert!(store.is_empty());
    }
}
