//! Local leaderboard: best score per player identifier.
//!
//! Records persist as a single JSON document that is rewritten wholesale on
//! every update. Corrupt or missing data degrades to an empty leaderboard
//! instead of failing.

use crate::identity::UserId;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::io;

/// Storage key holding the serialized leaderboard.
pub const RANKING_KEY: &str = "ranking.json";

/// One leaderboard entry. Field names match the persisted JSON format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub score: u32,
}

/// Leaderboard over an abstract storage backend, unique by id.
pub struct RankingStore<S: Storage> {
    storage: S,
}

impl<S: Storage> RankingStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// All persisted records, in stored order. Missing or malformed data
    /// yields an empty leaderboard.
    pub fn load(&self) -> Vec<UserRecord> {
        match self.storage.read(RANKING_KEY) {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Replace the persisted leaderboard wholesale.
    pub fn save(&mut self, records: &[UserRecord]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.storage.write(RANKING_KEY, &json)
    }

    /// Record `candidate` for `id` if it beats the stored best; append a new
    /// record for a first-time id. Does nothing when no identity is set.
    pub fn upsert_best(&mut self, id: Option<&UserId>, candidate: u32) -> io::Result<()> {
        let id = match id {
            Some(id) => id,
            None => return Ok(()),
        };

        let mut records = self.load();
        match records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                if candidate > record.score {
                    record.score = candidate;
                }
            }
            None => records.push(UserRecord {
                id: id.clone(),
                score: candidate,
            }),
        }
        self.save(&records)
    }

    /// Best score stored for `id`, or 0 if the id has no record.
    pub fn best_score_for(&self, id: &UserId) -> u32 {
        self.load()
            .iter()
            .find(|record| &record.id == id)
            .map(|record| record.score)
            .unwrap_or(0)
    }

    /// All records ordered by score, highest first. The sort is stable, so
    /// equal scores keep their stored order.
    pub fn sorted_descending(&self) -> Vec<UserRecord> {
        let mut records = self.load();
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::IdentitySession;
    use crate::storage::MemoryStorage;

    fn user(raw: &str) -> UserId {
        IdentitySession::new().validate(raw).expect("valid test id")
    }

    fn fresh_store() -> RankingStore<MemoryStorage> {
        RankingStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = fresh_store();
        assert!(store.load().is_empty());
        assert_eq!(store.best_score_for(&user("ABC")), 0);
    }

    #[test]
    fn test_upsert_keeps_the_best_score() {
        let mut store = fresh_store();
        let abc = user("ABC");

        store.upsert_best(Some(&abc), 5).unwrap();
        assert_eq!(store.best_score_for(&abc), 5);

        store.upsert_best(Some(&abc), 3).unwrap();
        assert_eq!(store.best_score_for(&abc), 5);

        store.upsert_best(Some(&abc), 9).unwrap();
        assert_eq!(store.best_score_for(&abc), 9);
    }

    #[test]
    fn test_upsert_equal_score_is_a_no_op() {
        let mut store = fresh_store();
        let abc = user("ABC");
        store.upsert_best(Some(&abc), 5).unwrap();
        store.upsert_best(Some(&abc), 5).unwrap();
        assert_eq!(store.best_score_for(&abc), 5);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_upsert_without_identity_does_nothing() {
        let mut store = fresh_store();
        store.upsert_best(None, 42).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_records_are_unique_by_id() {
        let mut store = fresh_store();
        store.upsert_best(Some(&user("ABC")), 1).unwrap();
        store.upsert_best(Some(&user("XYZ")), 2).unwrap();
        store.upsert_best(Some(&user("ABC")), 7).unwrap();

        let records = store.load();
        assert_eq!(records.len(), 2);
        assert_eq!(store.best_score_for(&user("ABC")), 7);
    }

    #[test]
    fn test_sorted_descending_orders_by_score() {
        let mut store = fresh_store();
        store.upsert_best(Some(&user("LOW")), 1).unwrap();
        store.upsert_best(Some(&user("TOP")), 9).unwrap();
        store.upsert_best(Some(&user("MID")), 5).unwrap();

        let sorted = store.sorted_descending();
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["TOP", "MID", "LOW"]);
    }

    #[test]
    fn test_sorted_descending_is_stable_for_ties() {
        let mut store = fresh_store();
        store.upsert_best(Some(&user("AA1")), 5).unwrap();
        store.upsert_best(Some(&user("BB2")), 5).unwrap();
        store.upsert_best(Some(&user("CC3")), 5).unwrap();

        let sorted = store.sorted_descending();
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["AA1", "BB2", "CC3"]);
    }

    #[test]
    fn test_corrupt_data_degrades_to_empty() {
        let storage = MemoryStorage::with_entry(RANKING_KEY, "{not json");
        let store = RankingStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_degrades_to_empty() {
        let storage = MemoryStorage::with_entry(RANKING_KEY, r#"{"id":"ABC","score":5}"#);
        let store = RankingStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_upsert_over_corrupt_data_starts_fresh() {
        let storage = MemoryStorage::with_entry(RANKING_KEY, "corrupt");
        let mut store = RankingStore::new(storage);
        store.upsert_best(Some(&user("ABC")), 4).unwrap();
        assert_eq!(store.best_score_for(&user("ABC")), 4);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_persisted_format_matches_wire_shape() {
        let mut store = fresh_store();
        store.upsert_best(Some(&user("ABC")), 5).unwrap();

        let raw = store.storage.read(RANKING_KEY).expect("persisted");
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[0]["id"], "ABC");
        assert_eq!(parsed[0]["score"], 5);
    }
}
