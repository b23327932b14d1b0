use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::policy;
use crate::utils::format_age;

/// An independently fetched, cached and rendered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Schedules,
    Inventory,
}

impl Dataset {
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Schedules => "schedules",
            Dataset::Inventory => "inventory",
        }
    }

    pub fn snapshot_key(&self) -> String {
        format!("cached_{}", self.name())
    }

    pub fn refresh_key(&self) -> String {
        format!("lastRefresh_{}", self.name())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File-backed key-value store, one file per key. Last write wins.
#[derive(Debug, Clone)]
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(key)
    }

    fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache key: {}", key))?;
        Ok(Some(contents))
    }

    fn write_key(&self, key: &str, value: &str) -> Result<()> {
        std::fs::write(self.key_path(key), value)
            .with_context(|| format!("Failed to write cache key: {}", key))
    }

    // ===== Snapshots =====

    /// Load the cached snapshot. `Ok(None)` when nothing was ever written,
    /// `Err` when the stored value is unreadable or malformed.
    pub fn load_snapshot<T: DeserializeOwned>(&self, dataset: Dataset) -> Result<Option<Vec<T>>> {
        let key = dataset.snapshot_key();
        let Some(contents) = self.read_key(&key)? else {
            return Ok(None);
        };
        let records = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache key: {}", key))?;
        Ok(Some(records))
    }

    pub fn save_snapshot<T: Serialize>(&self, dataset: Dataset, records: &[T]) -> Result<()> {
        let contents = serde_json::to_string(records)?;
        self.write_key(&dataset.snapshot_key(), &contents)
    }

    /// The cached snapshot, with a malformed value treated as absent.
    pub fn cached<T: DeserializeOwned>(&self, dataset: Dataset) -> Option<Vec<T>> {
        match self.load_snapshot(dataset) {
            Ok(records) => records,
            Err(e) => {
                warn!(dataset = %dataset, error = %e, "Ignoring unusable cached snapshot");
                None
            }
        }
    }

    // ===== Refresh timestamps =====

    pub fn last_refresh(&self, dataset: Dataset) -> Option<DateTime<Utc>> {
        let key = dataset.refresh_key();
        let raw = match self.read_key(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(dataset = %dataset, error = %e, "Failed to read refresh timestamp");
                return None;
            }
        };
        let parsed = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);
        if parsed.is_none() {
            debug!(dataset = %dataset, value = raw.trim(), "Malformed refresh timestamp");
        }
        parsed
    }

    pub fn record_refresh(&self, dataset: Dataset) -> Result<()> {
        self.record_refresh_at(dataset, Utc::now())
    }

    pub fn record_refresh_at(&self, dataset: Dataset, at: DateTime<Utc>) -> Result<()> {
        self.write_key(&dataset.refresh_key(), &at.timestamp_millis().to_string())
    }

    pub fn should_refresh(&self, dataset: Dataset) -> bool {
        self.should_refresh_at(dataset, Utc::now())
    }

    pub fn should_refresh_at(&self, dataset: Dataset, now: DateTime<Utc>) -> bool {
        policy::is_due(self.last_refresh(dataset), now)
    }

    // ===== Cache Age Information =====

    pub fn refresh_age(&self, dataset: Dataset) -> Option<String> {
        self.last_refresh(dataset)
            .map(|at| format_age((Utc::now() - at).num_minutes()))
    }

    pub fn get_cache_ages(&self) -> CacheAges {
        CacheAges {
            schedules: self.refresh_age(Dataset::Schedules),
            inventory: self.refresh_age(Dataset::Inventory),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CacheAges {
    pub schedules: Option<String>,
    pub inventory: Option<String>,
}

impl CacheAges {
    pub fn schedules_age(&self) -> String {
        self.schedules.clone().unwrap_or_else(|| "never".to_string())
    }

    pub fn inventory_age(&self) -> String {
        self.inventory.clone().unwrap_or_else(|| "never".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Record {
        name: String,
        value: f64,
    }

    fn manager() -> (tempfile::TempDir, CacheManager) {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = CacheManager::new(dir.path().join("cache")).expect("cache manager");
        (dir, cache)
    }

    #[test]
    fn test_keys() {
        assert_eq!(Dataset::Schedules.snapshot_key(), "cached_schedules");
        assert_eq!(Dataset::Inventory.refresh_key(), "lastRefresh_inventory");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let (_dir, cache) = manager();
        let records = vec![
            Record { name: "Dragon Shield".into(), value: 12.99 },
            Record { name: "d20".into(), value: 0.0 },
        ];
        cache.save_snapshot(Dataset::Inventory, &records).expect("save");
        let loaded: Vec<Record> = cache
            .load_snapshot(Dataset::Inventory)
            .expect("load")
            .expect("present");
        assert_eq!(loaded, records);

        // Datasets do not share keys
        let other: Option<Vec<Record>> = cache.load_snapshot(Dataset::Schedules).expect("load");
        assert!(other.is_none());
    }

    #[test]
    fn test_malformed_snapshot_is_absent() {
        let (_dir, cache) = manager();
        std::fs::write(cache.cache_dir().join("cached_inventory"), "{not json").expect("write");
        assert!(cache.load_snapshot::<Record>(Dataset::Inventory).is_err());
        assert!(cache.cached::<Record>(Dataset::Inventory).is_none());
    }

    #[test]
    fn test_refresh_timestamp_is_epoch_millis() {
        let (_dir, cache) = manager();
        let at = DateTime::from_timestamp_millis(1_760_000_000_123).expect("valid");
        cache.record_refresh_at(Dataset::Schedules, at).expect("record");

        let raw = std::fs::read_to_string(cache.cache_dir().join("lastRefresh_schedules"))
            .expect("read");
        assert_eq!(raw, "1760000000123");
        assert_eq!(cache.last_refresh(Dataset::Schedules), Some(at));
    }

    #[test]
    fn test_should_refresh() {
        let (_dir, cache) = manager();
        let now = Utc::now();
        assert!(cache.should_refresh_at(Dataset::Inventory, now));

        cache
            .record_refresh_at(Dataset::Inventory, now - Duration::hours(2))
            .expect("record");
        assert!(!cache.should_refresh_at(Dataset::Inventory, now));
        assert!(cache.should_refresh_at(Dataset::Inventory, now + Duration::hours(22)));
        // The other dataset is unaffected
        assert!(cache.should_refresh_at(Dataset::Schedules, now));
    }

    #[test]
    fn test_malformed_timestamp_means_refresh() {
        let (_dir, cache) = manager();
        std::fs::write(cache.cache_dir().join("lastRefresh_inventory"), "yesterday")
            .expect("write");
        assert_eq!(cache.last_refresh(Dataset::Inventory), None);
        assert!(cache.should_refresh(Dataset::Inventory));
    }

    #[test]
    fn test_cache_ages() {
        let (_dir, cache) = manager();
        assert_eq!(cache.get_cache_ages().inventory_age(), "never");

        cache.record_refresh(Dataset::Schedules).expect("record");
        let ages = cache.get_cache_ages();
        assert_eq!(ages.schedules_age(), "just now");
        assert_eq!(ages.inventory_age(), "never");
    }
}
