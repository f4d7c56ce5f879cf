//! In-memory diary store.
//!
//! Mirrors the semantics of the `SQLite` backend without touching disk. A
//! switch makes every write fail the way a full disk would, so failure paths
//! can be exercised in tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{CompletedMilestone, CompletedVaccination, DiaryEntry, StoredPhoto, UserProfile};

use super::DiaryStore;

/// Everything held by a [`MemoryStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryContents {
    /// The profile.
    pub profile: Option<UserProfile>,
    /// Entries keyed by day.
    pub entries: BTreeMap<NaiveDate, DiaryEntry>,
    /// Vaccination records in write order.
    pub vaccinations: Vec<CompletedVaccination>,
    /// Milestone records in write order.
    pub milestones: Vec<CompletedMilestone>,
    /// Photos in write order.
    pub photos: Vec<StoredPhoto>,
    /// User settings.
    pub settings: BTreeMap<String, Value>,
    /// Application meta values.
    pub meta: BTreeMap<String, Value>,
}

/// Diary store that keeps everything in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<MemoryContents>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with [`Error::StorageUnavailable`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful write calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// A snapshot of everything stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn contents(&self) -> Result<MemoryContents> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryContents>> {
        self.contents
            .lock()
            .map_err(|_| Error::internal("memory store lock poisoned"))
    }

    fn read<T>(&self, f: impl FnOnce(&MemoryContents) -> T) -> Result<T> {
        Ok(f(&*self.lock()?))
    }

    fn write<T>(&self, f: impl FnOnce(&mut MemoryContents) -> T) -> Result<T> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::storage_unavailable("quota exceeded"));
        }
        let result = f(&mut *self.lock()?);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(result)
    }
}

/// Insert `item` into a write-ordered list, replacing any row with the same key.
fn upsert<T: Clone>(list: &mut Vec<T>, item: &T, key: impl Fn(&T) -> &str) {
    list.retain(|existing| key(existing) != key(item));
    list.push(item.clone());
}

#[async_trait]
impl DiaryStore for MemoryStore {
    async fn profile(&self) -> Result<Option<UserProfile>> {
        self.read(|c| c.profile.clone())
    }

    async fn put_profile(&self, profile: &UserProfile) -> Result<()> {
        self.write(|c| c.profile = Some(profile.clone()))
    }

    async fn delete_profile(&self) -> Result<()> {
        self.write(|c| c.profile = None)
    }

    async fn entries(&self) -> Result<Vec<DiaryEntry>> {
        self.read(|c| c.entries.values().cloned().collect())
    }

    async fn entry(&self, date: NaiveDate) -> Result<Option<DiaryEntry>> {
        self.read(|c| c.entries.get(&date).cloned())
    }

    async fn put_entries(&self, entries: &[DiaryEntry]) -> Result<()> {
        self.write(|c| {
            for entry in entries {
                c.entries.insert(entry.date, entry.clone());
            }
        })
    }

    async fn replace_entries(&self, entries: &[DiaryEntry]) -> Result<()> {
        self.write(|c| {
            c.entries = entries.iter().map(|e| (e.date, e.clone())).collect();
        })
    }

    async fn vaccinations(&self) -> Result<Vec<CompletedVaccination>> {
        self.read(|c| c.vaccinations.clone())
    }

    async fn put_vaccinations(&self, records: &[CompletedVaccination]) -> Result<()> {
        self.write(|c| {
            for record in records {
                upsert(&mut c.vaccinations, record, |v| v.id.as_str());
            }
        })
    }

    async fn replace_vaccinations(&self, records: &[CompletedVaccination]) -> Result<()> {
        self.write(|c| {
            c.vaccinations.clear();
            for record in records {
                upsert(&mut c.vaccinations, record, |v| v.id.as_str());
            }
        })
    }

    async fn milestones(&self) -> Result<Vec<CompletedMilestone>> {
        self.read(|c| c.milestones.clone())
    }

    async fn put_milestones(&self, records: &[CompletedMilestone]) -> Result<()> {
        self.write(|c| {
            for record in records {
                upsert(&mut c.milestones, record, |m| m.id.as_str());
            }
        })
    }

    async fn replace_milestones(&self, records: &[CompletedMilestone]) -> Result<()> {
        self.write(|c| {
            c.milestones.clear();
            for record in records {
                upsert(&mut c.milestones, record, |m| m.id.as_str());
            }
        })
    }

    async fn put_photo(&self, photo: &StoredPhoto) -> Result<()> {
        self.write(|c| upsert(&mut c.photos, photo, |p| p.id.as_str()))
    }

    async fn photo(&self, id: &str) -> Result<Option<StoredPhoto>> {
        self.read(|c| c.photos.iter().find(|p| p.id == id).cloned())
    }

    async fn photos_for(&self, date: NaiveDate) -> Result<Vec<StoredPhoto>> {
        self.read(|c| {
            let mut photos: Vec<_> = c
                .photos
                .iter()
                .filter(|p| p.entry_date == date)
                .cloned()
                .collect();
            // Stable sort keeps write order for equal timestamps.
            photos.sort_by_key(|p| p.created_at);
            photos
        })
    }

    async fn delete_photo(&self, id: &str) -> Result<bool> {
        self.write(|c| {
            let before = c.photos.len();
            c.photos.retain(|p| p.id != id);
            c.photos.len() != before
        })
    }

    async fn photo_count(&self) -> Result<usize> {
        self.read(|c| c.photos.len())
    }

    async fn setting(&self, key: &str) -> Result<Option<Value>> {
        self.read(|c| c.settings.get(key).cloned())
    }

    async fn put_setting(&self, key: &str, value: &Value) -> Result<()> {
        self.write(|c| {
            c.settings.insert(key.to_string(), value.clone());
        })
    }

    async fn meta(&self, key: &str) -> Result<Option<Value>> {
        self.read(|c| c.meta.get(key).cloned())
    }

    async fn put_meta(&self, key: &str, value: &Value) -> Result<()> {
        self.write(|c| {
            c.meta.insert(key.to_string(), value.clone());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn photo(id: &str, created_at: i64) -> StoredPhoto {
        StoredPhoto {
            id: id.to_string(),
            entry_date: date(2024, 5, 1),
            blob: vec![7],
            mime: "image/jpeg".to_string(),
            width: 1,
            height: 1,
            created_at,
        }
    }

    #[tokio::test]
    async fn test_replace_entries() {
        let store = MemoryStore::new();
        store
            .put_entries(&[DiaryEntry::new(date(2024, 5, 1))])
            .await
            .unwrap();
        store
            .replace_entries(&[DiaryEntry::new(date(2024, 5, 2))])
            .await
            .unwrap();

        let entries = store.entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, date(2024, 5, 2));
    }

    #[tokio::test]
    async fn test_upsert_moves_to_end() {
        let store = MemoryStore::new();
        let a = CompletedVaccination {
            id: "a".to_string(),
            date: date(2024, 1, 1),
        };
        let b = CompletedVaccination {
            id: "b".to_string(),
            date: date(2024, 1, 2),
        };
        store.put_vaccinations(&[a.clone(), b.clone()]).await.unwrap();
        store.put_vaccinations(&[a.clone()]).await.unwrap();

        assert_eq!(store.vaccinations().await.unwrap(), vec![b, a]);
    }

    #[tokio::test]
    async fn test_photos_sorted_by_creation() {
        let store = MemoryStore::new();
        store.put_photo(&photo("late", 200)).await.unwrap();
        store.put_photo(&photo("early", 100)).await.unwrap();
        store.put_photo(&photo("tie", 200)).await.unwrap();

        let ids: Vec<_> = store
            .photos_for(date(2024, 5, 1))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["early", "late", "tie"]);
    }

    #[tokio::test]
    async fn test_fail_writes() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);

        let err = store
            .put_meta("legacyMigrated", &serde_json::json!(true))
            .await
            .unwrap_err();
        assert!(err.is_storage_failure());
        assert!(store.meta("legacyMigrated").await.unwrap().is_none());
        assert_eq!(store.write_count(), 0);

        store.set_fail_writes(false);
        store
            .put_meta("legacyMigrated", &serde_json::json!(true))
            .await
            .unwrap();
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_photo() {
        let store = MemoryStore::new();
        store.put_photo(&photo("p1", 1)).await.unwrap();
        assert!(store.delete_photo("p1").await.unwrap());
        assert!(!store.delete_photo("p1").await.unwrap());
        assert_eq!(store.photo_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_contents_snapshot() {
        let store = MemoryStore::new();
        let profile = UserProfile {
            name: "Hana".to_string(),
            birth_date: date(2024, 1, 10),
            notification_time: String::new(),
        };
        store.put_profile(&profile).await.unwrap();

        let contents = store.contents().unwrap();
        assert_eq!(contents.profile, Some(profile));
        assert!(contents.entries.is_empty());
    }
}
