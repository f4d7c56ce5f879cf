//! Storage layer for babylog.
//!
//! The diary keeps six logical collections: the profile, diary entries,
//! completed vaccinations, manually recorded milestones, photos, and a pair of
//! key/value tables for user settings and application meta flags.
//!
//! All access goes through the [`DiaryStore`] trait so the rest of the crate
//! can run against the `SQLite` backend or the in-memory fake used in tests.

mod memory;
pub mod migrations;
pub mod schema;
mod sqlite;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::error::Result;
use crate::model::{CompletedMilestone, CompletedVaccination, DiaryEntry, StoredPhoto, UserProfile};

pub use memory::{MemoryContents, MemoryStore};
pub use sqlite::SqliteStore;

/// Persistent storage for diary data.
///
/// Bulk `put_*` operations upsert by primary key; `replace_*` operations clear
/// the collection and insert the given rows as one atomic write.
#[async_trait]
pub trait DiaryStore: Send + Sync + std::fmt::Debug {
    /// Read the profile, if onboarding has happened.
    async fn profile(&self) -> Result<Option<UserProfile>>;

    /// Create or replace the profile.
    async fn put_profile(&self, profile: &UserProfile) -> Result<()>;

    /// Remove the profile.
    async fn delete_profile(&self) -> Result<()>;

    /// All diary entries in ascending date order.
    async fn entries(&self) -> Result<Vec<DiaryEntry>>;

    /// The entry for one day.
    async fn entry(&self, date: NaiveDate) -> Result<Option<DiaryEntry>>;

    /// Upsert entries by date.
    async fn put_entries(&self, entries: &[DiaryEntry]) -> Result<()>;

    /// Replace all entries.
    async fn replace_entries(&self, entries: &[DiaryEntry]) -> Result<()>;

    /// All completed vaccinations in the order they were written.
    async fn vaccinations(&self) -> Result<Vec<CompletedVaccination>>;

    /// Upsert vaccination records by id.
    async fn put_vaccinations(&self, records: &[CompletedVaccination]) -> Result<()>;

    /// Replace all vaccination records.
    async fn replace_vaccinations(&self, records: &[CompletedVaccination]) -> Result<()>;

    /// All manual milestone records in the order they were written.
    async fn milestones(&self) -> Result<Vec<CompletedMilestone>>;

    /// Upsert milestone records by id.
    async fn put_milestones(&self, records: &[CompletedMilestone]) -> Result<()>;

    /// Replace all milestone records.
    async fn replace_milestones(&self, records: &[CompletedMilestone]) -> Result<()>;

    /// Create or replace a photo.
    async fn put_photo(&self, photo: &StoredPhoto) -> Result<()>;

    /// Read a photo by id.
    async fn photo(&self, id: &str) -> Result<Option<StoredPhoto>>;

    /// The photos of one day, oldest first.
    async fn photos_for(&self, date: NaiveDate) -> Result<Vec<StoredPhoto>>;

    /// Delete a photo. Returns `false` if it did not exist.
    async fn delete_photo(&self, id: &str) -> Result<bool>;

    /// Number of stored photos.
    async fn photo_count(&self) -> Result<usize>;

    /// Read a user setting.
    async fn setting(&self, key: &str) -> Result<Option<Value>>;

    /// Write a user setting.
    async fn put_setting(&self, key: &str, value: &Value) -> Result<()>;

    /// Read an application meta value.
    async fn meta(&self, key: &str) -> Result<Option<Value>>;

    /// Write an application meta value.
    async fn put_meta(&self, key: &str, value: &Value) -> Result<()>;
}

/// Statistics about the storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
    /// Whether a profile is stored.
    pub has_profile: bool,
    /// Number of diary entries.
    pub entries: i64,
    /// Number of completed vaccinations.
    pub vaccinations: i64,
    /// Number of manual milestone records.
    pub milestones: i64,
    /// Number of stored photos.
    pub photos: i64,
    /// Total size of all photo blobs in bytes.
    pub photo_bytes: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
