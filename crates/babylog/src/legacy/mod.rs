//! One-time import of the flat JSON document written by older versions.
//!
//! The import runs at most once per store: a `legacyMigrated` meta flag is set
//! after the first attempt, whether it succeeded or not, and later calls
//! return immediately. Anything that cannot be converted is dropped and
//! counted in the [`MigrationReport`] instead of failing the import.

pub mod format;

use std::path::Path;

use babylog_catalog::Catalog;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::model::{CompletedMilestone, CompletedVaccination, StoredPhoto};
use crate::storage::DiaryStore;

pub use format::{
    DataUrl, DataUrlParser, LegacyDocument, LegacyEntry, LegacyImage, LegacyMilestone,
    LegacyVaccination,
};

/// Meta key recording that the import has been attempted.
pub const MIGRATED_FLAG: &str = "legacyMigrated";

/// Maximum number of inline images imported per entry.
pub const LEGACY_IMAGE_LIMIT: usize = 3;

/// What a call to [`migrate_legacy_once`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The flag was already set; nothing was read or written.
    AlreadyMigrated,
    /// There was no legacy document. The flag is now set.
    NothingToMigrate,
    /// The document was imported. The flag is now set.
    Migrated(MigrationReport),
    /// The import failed part way. The flag is still set.
    Failed(String),
}

/// Counts of what an import converted and what it dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Whether a profile was imported.
    pub profile: bool,
    /// Diary entries imported.
    pub entries: usize,
    /// Vaccination records imported.
    pub vaccinations: usize,
    /// Milestone records imported.
    pub milestones: usize,
    /// Inline images stored as photos.
    pub photos: usize,
    /// Inline images discarded, over the per-entry limit or undecodable.
    pub dropped_images: usize,
    /// Records discarded because they could not be converted.
    pub dropped_records: usize,
}

/// Import a legacy document into `store`, at most once.
///
/// `raw` is the document text, `None` when no document exists. Titles in the
/// milestone history are resolved against `catalog`, and records without a
/// date are dated `today`.
///
/// This never returns an error: failures are logged and reported as
/// [`MigrationOutcome::Failed`].
pub async fn migrate_legacy_once(
    store: &dyn DiaryStore,
    raw: Option<&str>,
    catalog: &Catalog,
    today: NaiveDate,
) -> MigrationOutcome {
    if let Some(outcome) = check_flag(store).await {
        return outcome;
    }

    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        debug!("No legacy document found");
        mark_migrated(store).await;
        return MigrationOutcome::NothingToMigrate;
    };

    let outcome = match import(store, raw, catalog, today).await {
        Ok(report) => {
            info!(
                "Imported legacy data: {} entries, {} vaccinations, {} milestones, {} photos ({} images and {} records dropped)",
                report.entries,
                report.vaccinations,
                report.milestones,
                report.photos,
                report.dropped_images,
                report.dropped_records
            );
            MigrationOutcome::Migrated(report)
        }
        Err(e) => {
            error!("Legacy import failed: {}", e);
            MigrationOutcome::Failed(e.to_string())
        }
    };

    mark_migrated(store).await;
    outcome
}

/// Import the legacy document stored at `path`, at most once.
///
/// The file is only read while the import is still pending. A file that
/// exists but cannot be read (bad permissions, not UTF-8) is a failed import:
/// the flag is set and the error reported as [`MigrationOutcome::Failed`].
pub async fn migrate_legacy_file(
    store: &dyn DiaryStore,
    path: &Path,
    catalog: &Catalog,
    today: NaiveDate,
) -> MigrationOutcome {
    if let Some(outcome) = check_flag(store).await {
        return outcome;
    }

    match read_legacy_file(path).await {
        Ok(raw) => migrate_legacy_once(store, raw.as_deref(), catalog, today).await,
        Err(e) => {
            error!("Failed to read legacy document {}: {}", path.display(), e);
            mark_migrated(store).await;
            MigrationOutcome::Failed(e.to_string())
        }
    }
}

/// Read the legacy document at `path`, `None` when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub async fn read_legacy_file(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// `Some` when the import must not run: it already has, or the flag is unreadable.
async fn check_flag(store: &dyn DiaryStore) -> Option<MigrationOutcome> {
    match store.meta(MIGRATED_FLAG).await {
        Ok(Some(value)) if is_truthy(&value) => {
            debug!("Legacy import already attempted");
            Some(MigrationOutcome::AlreadyMigrated)
        }
        Ok(_) => None,
        Err(e) => {
            error!("Failed to read legacy import flag: {}", e);
            Some(MigrationOutcome::Failed(e.to_string()))
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

async fn mark_migrated(store: &dyn DiaryStore) {
    if let Err(e) = store.put_meta(MIGRATED_FLAG, &Value::Bool(true)).await {
        warn!("Failed to set legacy import flag: {}", e);
    }
}

async fn import(
    store: &dyn DiaryStore,
    raw: &str,
    catalog: &Catalog,
    today: NaiveDate,
) -> Result<MigrationReport> {
    let doc = LegacyDocument::parse(raw)?;
    let parser = DataUrlParser::new()?;
    let mut report = MigrationReport::default();

    let vaccinations = convert_vaccinations(&doc, today, &mut report);
    let milestones = convert_milestones(&doc, catalog, today, &mut report);

    let mut entries = Vec::new();
    for (key, value) in doc.raw_entries() {
        let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") else {
            warn!("Dropping legacy entry with invalid date key {:?}", key);
            report.dropped_records += 1;
            continue;
        };
        let legacy: LegacyEntry = match serde_json::from_value(value.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Dropping malformed legacy entry for {}: {}", date, e);
                report.dropped_records += 1;
                continue;
            }
        };

        let inline: Vec<String> = legacy
            .images()
            .into_iter()
            .filter_map(|image| match image {
                LegacyImage::Inline(url) => Some(url),
                LegacyImage::Reference(_) => None,
            })
            .collect();

        let mut entry = legacy.normalize(date);
        if !inline.is_empty() {
            entry.images = store_inline_images(store, &parser, date, &inline, &mut report).await;
        }
        entries.push(entry);
    }

    let profile = doc.profile();
    if profile.is_none() && !doc.profile.is_null() {
        warn!("Dropping malformed legacy profile");
        report.dropped_records += 1;
    }

    if let Some(profile) = &profile {
        store.put_profile(profile).await?;
        report.profile = true;
    }
    store.put_entries(&entries).await?;
    store.put_vaccinations(&vaccinations).await?;
    store.put_milestones(&milestones).await?;

    report.entries = entries.len();
    report.vaccinations = vaccinations.len();
    report.milestones = milestones.len();
    Ok(report)
}

fn convert_vaccinations(
    doc: &LegacyDocument,
    today: NaiveDate,
    report: &mut MigrationReport,
) -> Vec<CompletedVaccination> {
    LegacyDocument::list(&doc.completed_vaccinations)
        .iter()
        .filter_map(|value| {
            match serde_json::from_value::<LegacyVaccination>(value.clone()) {
                Ok(v) => Some(v.normalize(today)),
                Err(_) => {
                    warn!("Dropping malformed legacy vaccination record {}", value);
                    report.dropped_records += 1;
                    None
                }
            }
        })
        .collect()
}

fn convert_milestones(
    doc: &LegacyDocument,
    catalog: &Catalog,
    today: NaiveDate,
    report: &mut MigrationReport,
) -> Vec<CompletedMilestone> {
    LegacyDocument::list(&doc.past_milestones)
        .iter()
        .filter_map(|value| {
            let converted = serde_json::from_value::<LegacyMilestone>(value.clone())
                .ok()
                .and_then(|m| m.normalize(catalog, today));
            if converted.is_none() {
                debug!("Dropping legacy milestone record {}", value);
                report.dropped_records += 1;
            }
            converted
        })
        .collect()
}

/// Store up to [`LEGACY_IMAGE_LIMIT`] inline images of one entry and return
/// the ids of the photos that were stored.
async fn store_inline_images(
    store: &dyn DiaryStore,
    parser: &DataUrlParser,
    date: NaiveDate,
    inline: &[String],
    report: &mut MigrationReport,
) -> Vec<String> {
    let kept = inline.len().min(LEGACY_IMAGE_LIMIT);
    report.dropped_images += inline.len() - kept;

    let mut ids = Vec::with_capacity(kept);
    for url in &inline[..kept] {
        let stored = match parser.parse(url) {
            Ok(DataUrl { mime, data }) => {
                let photo = StoredPhoto {
                    id: Uuid::new_v4().to_string(),
                    entry_date: date,
                    blob: data,
                    mime,
                    width: 0,
                    height: 0,
                    created_at: Utc::now().timestamp_millis(),
                };
                store.put_photo(&photo).await.map(|()| photo.id)
            }
            Err(e) => Err(e),
        };

        match stored {
            Ok(id) => {
                report.photos += 1;
                ids.push(id);
            }
            Err(e) => {
                warn!("Dropping legacy image for {}: {}", date, e);
                report.dropped_images += 1;
            }
        }
    }
    ids
}
