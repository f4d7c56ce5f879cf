//! Loading the application snapshot from a store and writing it back.

use babylog_catalog::Catalog;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::legacy::{migrate_legacy_once, MigrationOutcome};
use crate::model::{AppState, DiaryEntry};
use crate::storage::DiaryStore;

/// Run the legacy import, then read the full snapshot from `store`.
///
/// Never fails: if any collection cannot be read the error is logged and an
/// empty snapshot is returned.
pub async fn load(
    store: &dyn DiaryStore,
    legacy: Option<&str>,
    catalog: &Catalog,
    today: NaiveDate,
) -> AppState {
    if let MigrationOutcome::Failed(reason) =
        migrate_legacy_once(store, legacy, catalog, today).await
    {
        warn!("Continuing without legacy data: {}", reason);
    }

    match read_state(store).await {
        Ok(state) => {
            debug!(
                "Loaded {} entries, {} vaccinations, {} milestones",
                state.entries.len(),
                state.completed_vaccinations.len(),
                state.past_milestones.len()
            );
            state
        }
        Err(e) => {
            warn!("Failed to load diary data, starting empty: {}", e);
            AppState::default()
        }
    }
}

async fn read_state(store: &dyn DiaryStore) -> Result<AppState> {
    Ok(AppState {
        profile: store.profile().await?,
        entries: store
            .entries()
            .await?
            .into_iter()
            .map(|e| (e.date, e))
            .collect(),
        completed_vaccinations: store.vaccinations().await?,
        past_milestones: store.milestones().await?,
    })
}

/// Write the full snapshot to `store`.
///
/// The profile is upserted, or deleted when absent; entries, vaccinations and
/// milestones each replace their whole collection.
///
/// # Errors
///
/// Returns the first storage error. Collections written before the failure
/// keep their new contents.
pub async fn save(store: &dyn DiaryStore, state: &AppState) -> Result<()> {
    match &state.profile {
        Some(profile) => store.put_profile(profile).await?,
        None => store.delete_profile().await?,
    }

    let entries: Vec<DiaryEntry> = state.entries.values().cloned().collect();
    store.replace_entries(&entries).await?;
    store
        .replace_vaccinations(&state.completed_vaccinations)
        .await?;
    store.replace_milestones(&state.past_milestones).await?;
    Ok(())
}

/// Read a typed user setting, `fallback` when it is missing or unreadable.
pub async fn setting<T: DeserializeOwned>(store: &dyn DiaryStore, key: &str, fallback: T) -> T {
    match store.setting(key).await {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Ignoring malformed setting {}: {}", key, e);
            fallback
        }),
        Ok(None) => fallback,
        Err(e) => {
            warn!("Failed to read setting {}: {}", key, e);
            fallback
        }
    }
}

/// Write a typed user setting.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or stored.
pub async fn set_setting<T: Serialize + ?Sized>(
    store: &dyn DiaryStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let value = serde_json::to_value(value)?;
    store.put_setting(key, &value).await
}
